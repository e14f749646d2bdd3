//! Browser-side enhancements for the race event pages.
//!
//! The pages are server-rendered; this wasm module attaches two independent
//! behaviors to whatever anchors the current page carries: the event-detail
//! map (a Leaflet view with one marker) and the dependent race selector on
//! the registration form.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement, HtmlSelectElement};

pub mod api;
pub mod leaflet;
pub mod map;
pub mod model;
pub mod selector;

const MAP_CONTAINER_ID: &str = "map";
const EVENT_SELECT: &str = "select[name=\"event\"]";
const RACE_SELECT: &str = "select[name=\"race\"]";

#[wasm_bindgen(start)]
pub fn start() {
    wasm_logger::init(wasm_logger::Config::default());
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };
    if let Err(err) = wire_page(&document) {
        log::error!("page wiring failed: {err:?}");
    }
}

/// Wires each behavior whose anchor elements exist on this page. Pages
/// without a map or without the registration selects are simply left alone.
fn wire_page(document: &Document) -> Result<(), JsValue> {
    if let Some(container) = document.get_element_by_id(MAP_CONTAINER_ID) {
        let container: HtmlElement = container.dyn_into()?;
        map::init_event_map(&container)?;
    }

    let event_select = document.query_selector(EVENT_SELECT)?;
    let race_select = document.query_selector(RACE_SELECT)?;
    if let (Some(event_select), Some(race_select)) = (event_select, race_select) {
        let event_select: HtmlSelectElement = event_select.dyn_into()?;
        let race_select: HtmlSelectElement = race_select.dyn_into()?;
        selector::init_race_selector(&event_select, &race_select)?;
    }
    Ok(())
}
