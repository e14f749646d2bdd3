//! Dependent race selector: whenever the event select changes, the race
//! select is repopulated from the backend.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlOptionElement, HtmlSelectElement};

use crate::api;
use crate::model::Race;

/// Placeholder shown as the first option of the race select.
pub const RACE_PROMPT: &str = "Выберите группу";

/// Wires the event select so that every change refetches the race list and
/// re-renders the race select.
///
/// Requests are independent and never cancelled: if the selection changes
/// again while a fetch is in flight, whichever response resolves last fills
/// the list. Fetch and render failures are logged and leave the race select
/// untouched.
pub fn init_race_selector(
    event_select: &HtmlSelectElement,
    race_select: &HtmlSelectElement,
) -> Result<(), JsValue> {
    let race_select = race_select.clone();
    let change_cb = Closure::wrap(Box::new(move |e: web_sys::Event| {
        let Some(select) = e
            .target()
            .and_then(|target| target.dyn_into::<HtmlSelectElement>().ok())
        else {
            return;
        };
        let event_id = select.value();
        let race_select = race_select.clone();
        spawn_local(async move {
            match api::fetch_races_for_event(&event_id).await {
                Ok(races) => {
                    if let Err(err) = render_race_options(&race_select, &races) {
                        log::error!("failed to render races for event {event_id}: {err:?}");
                    }
                }
                Err(err) => log::error!("failed to load races for event {event_id}: {err}"),
            }
        });
    }) as Box<dyn FnMut(_)>);
    event_select
        .add_event_listener_with_callback("change", change_cb.as_ref().unchecked_ref())?;
    // Listener lives for the lifetime of the page.
    change_cb.forget();
    Ok(())
}

/// Replaces the select's options with the placeholder followed by one option
/// per race, value = id, text = name.
pub fn render_race_options(select: &HtmlSelectElement, races: &[Race]) -> Result<(), JsValue> {
    select.set_length(0);
    for (value, label) in option_items(races) {
        let option = HtmlOptionElement::new_with_text_and_value(&label, &value)?;
        select.append_child(&option)?;
    }
    Ok(())
}

/// The (value, label) pairs the select ends up with, placeholder first,
/// server order preserved.
pub fn option_items(races: &[Race]) -> Vec<(String, String)> {
    let mut items = Vec::with_capacity(races.len() + 1);
    items.push((String::new(), RACE_PROMPT.to_string()));
    items.extend(races.iter().map(|race| (race.id.to_string(), race.name.clone())));
    items
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_comes_first_then_server_order() {
        let races = vec![
            Race { id: 1, name: "5K".to_string() },
            Race { id: 2, name: "10K".to_string() },
        ];
        let items = option_items(&races);
        assert_eq!(
            items,
            vec![
                (String::new(), RACE_PROMPT.to_string()),
                ("1".to_string(), "5K".to_string()),
                ("2".to_string(), "10K".to_string()),
            ]
        );
    }

    #[test]
    fn empty_race_list_yields_only_the_placeholder() {
        let items = option_items(&[]);
        assert_eq!(items, vec![(String::new(), RACE_PROMPT.to_string())]);
    }
}
