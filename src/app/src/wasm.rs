//! WebAssembly FFI bindings for the Crux Core
//!
//! The browser shell drives the panel through these functions: it forwards
//! button clicks as serialized events, executes the returned effects with
//! `fetch()`, and renders the view model into the elements named by
//! [`feature_bindings`].

use lazy_static::lazy_static;
use wasm_bindgen::prelude::wasm_bindgen;

use crux_core::{bridge::Bridge, Core};

use crate::markup::{CONNECT_BUTTON_CLASS, SSID_ATTRIBUTE};
use crate::types::{Feature, FeatureBinding};
use crate::App;

lazy_static! {
    static ref CORE: Bridge<App> = Bridge::new(Core::new());
}

/// Initialize logging to the browser console when the module loads
#[wasm_bindgen(start)]
pub fn init_wasm() {
    // A second initialisation (hot reload) only fails to replace the logger.
    if console_log::init_with_level(log::Level::Info).is_err() {
        log::debug!("console logger already installed");
    }
}

/// Process a serialized Event and return serialized Effects
#[wasm_bindgen]
pub fn process_event(event_bytes: &[u8]) -> Vec<u8> {
    let mut effects = Vec::new();
    CORE.update(event_bytes, &mut effects)
        .expect("Failed to process event");
    effects
}

/// Get the current serialized view model
#[wasm_bindgen]
pub fn view() -> Vec<u8> {
    let mut view = Vec::new();
    CORE.view(&mut view).expect("Failed to get view model");
    view
}

/// Resolve an effect (HTTP response) and return the follow-up Effects
#[wasm_bindgen]
pub fn handle_response(id: u32, response_bytes: &[u8]) -> Vec<u8> {
    let mut effects = Vec::new();
    CORE.resolve(
        crux_core::bridge::EffectId(id),
        response_bytes,
        &mut effects,
    )
    .expect("Failed to handle response");
    effects
}

/// DOM element ids of every feature binding, as JSON
///
/// The shell binds each `button_id` to the feature's trigger event and renders
/// `output_id` / `loader_id` from the view model.
#[wasm_bindgen]
pub fn feature_bindings() -> String {
    let bindings: Vec<(Feature, FeatureBinding)> =
        Feature::ALL.iter().map(|f| (*f, f.binding())).collect();
    serde_json::to_string(&bindings).expect("Failed to serialize feature bindings")
}

/// CSS selector and attribute of the rendered Wi-Fi Connect controls
#[wasm_bindgen]
pub fn connect_control_selector() -> String {
    format!(".{CONNECT_BUTTON_CLASS}[{SSID_ATTRIBUTE}]")
}
