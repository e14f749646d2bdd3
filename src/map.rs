//! Event-detail map: an OpenStreetMap view centered on the event location,
//! with a single marker at the same spot.

use js_sys::{Array, Object, Reflect};
use wasm_bindgen::JsValue;
use web_sys::HtmlElement;

use crate::leaflet;
use crate::model::LatLng;

pub const INITIAL_ZOOM: f64 = 13.0;
pub const TILE_URL_TEMPLATE: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const TILE_MAX_ZOOM: f64 = 19.0;
pub const TILE_ATTRIBUTION: &str = "© OpenStreetMap contributors";

/// Initializes the map inside `container`, reading the event location from
/// the container's `data-latitude` / `data-longitude` attributes.
///
/// When either attribute is absent or malformed no map is constructed; a
/// diagnostic is logged for the operator and `Ok(None)` is returned so the
/// rest of the page keeps working.
pub fn init_event_map(container: &HtmlElement) -> Result<Option<leaflet::Map>, JsValue> {
    let coords = match LatLng::from_attributes(
        container.get_attribute("data-latitude"),
        container.get_attribute("data-longitude"),
    ) {
        Ok(coords) => coords,
        Err(err) => {
            log::warn!("Координаты местоположения не доступны ({err}).");
            return Ok(None);
        }
    };

    let center = lat_lng_array(coords);
    let map = leaflet::map(container).set_view(&center, INITIAL_ZOOM);
    leaflet::tile_layer(TILE_URL_TEMPLATE, &tile_layer_options()?).add_to(&map);
    leaflet::marker(&center).add_to(&map);
    Ok(Some(map))
}

fn lat_lng_array(coords: LatLng) -> Array {
    Array::of2(&JsValue::from_f64(coords.lat), &JsValue::from_f64(coords.lng))
}

fn tile_layer_options() -> Result<Object, JsValue> {
    let options = Object::new();
    Reflect::set(&options, &"maxZoom".into(), &JsValue::from_f64(TILE_MAX_ZOOM))?;
    Reflect::set(&options, &"attribution".into(), &TILE_ATTRIBUTION.into())?;
    Ok(options)
}
