//! Browser-side implementations of the page telemetry seams.

use etcher_pages::event_log::{Location, LogSink};
use etcher_pages::query::QueryParams;
use etcher_pages::tag_manager;
use etcher_pages::tracking::{Metadata, Tracker};
use js_sys::{Array, Object, Reflect};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

const DATA_LAYER: &str = "dataLayer";

/// `window.location`, read fresh on every call.
pub struct BrowserLocation;

impl Location for BrowserLocation {
    fn query(&self) -> QueryParams {
        web_sys::window()
            .and_then(|window| window.location().href().ok())
            .map(|href| QueryParams::from_url(&href))
            .unwrap_or_default()
    }
}

/// `console.log`, which the installer's webview forwards to its own log.
pub struct ConsoleSink;

impl LogSink for ConsoleSink {
    fn emit(&self, line: &str) {
        web_sys::console::log_1(&JsValue::from_str(line));
    }
}

/// Pushes `{event, ...metadata}` onto the tag manager's `window.dataLayer`.
pub struct DataLayerTracker;

impl Tracker for DataLayerTracker {
    fn track(&self, event_name: &str, metadata: &Metadata) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let key = JsValue::from_str(DATA_LAYER);
        let layer = Reflect::get(&window, &key)
            .ok()
            .and_then(|value| value.dyn_into::<Array>().ok())
            .unwrap_or_else(|| {
                // Tag manager not loaded (blocked or offline); keep the queue anyway.
                let fresh = Array::new();
                let _ = Reflect::set(&window, &key, &fresh);
                fresh
            });

        let entry = Object::new();
        let _ = Reflect::set(&entry, &JsValue::from_str("event"), &JsValue::from_str(event_name));
        for (name, value) in metadata {
            let _ = Reflect::set(&entry, &JsValue::from_str(name), &JsValue::from_str(value));
        }
        layer.push(&entry);
    }
}

/// Append the tag manager loader to `<head>`.
pub fn inject_tag_manager(id: &str) {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };
    let Some(head) = document.head() else {
        return;
    };
    if let Ok(script) = document.create_element("script") {
        script.set_text_content(Some(&tag_manager::head_script(id)));
        let _ = head.append_child(&script);
    }
}
