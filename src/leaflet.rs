//! Minimal bindings to the Leaflet global `L`, covering only what the event
//! map needs: map construction, one tile layer, one marker. The library
//! itself is loaded by the host page via its own script tag.

use js_sys::{Array, Object};
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

#[wasm_bindgen]
extern "C" {
    /// An `L.Map` handle.
    pub type Map;

    /// `L.map(container)`.
    #[wasm_bindgen(js_namespace = L, js_name = map)]
    pub fn map(container: &HtmlElement) -> Map;

    /// `map.setView([lat, lng], zoom)`; returns the map for chaining.
    #[wasm_bindgen(method, js_name = setView)]
    pub fn set_view(this: &Map, center: &Array, zoom: f64) -> Map;
}

#[wasm_bindgen]
extern "C" {
    /// An `L.TileLayer` handle.
    pub type TileLayer;

    /// `L.tileLayer(urlTemplate, options)`.
    #[wasm_bindgen(js_namespace = L, js_name = tileLayer)]
    pub fn tile_layer(url_template: &str, options: &Object) -> TileLayer;

    #[wasm_bindgen(method, js_name = addTo)]
    pub fn add_to(this: &TileLayer, map: &Map) -> TileLayer;
}

#[wasm_bindgen]
extern "C" {
    /// An `L.Marker` handle.
    pub type Marker;

    /// `L.marker([lat, lng])`.
    #[wasm_bindgen(js_namespace = L, js_name = marker)]
    pub fn marker(lat_lng: &Array) -> Marker;

    #[wasm_bindgen(method, js_name = addTo)]
    pub fn add_to(this: &Marker, map: &Map) -> Marker;
}
