//! Functions exported to page scripts under their template names, so markup
//! like `onclick="showUploadSpinner()"` keeps working.
//!
//! Inline handlers resolve names on `window`, so the loader publishes the
//! module exports there:
//!
//! ```js
//! import init, * as ui from "/pkg/archive_ui.js";
//! await init();
//! Object.assign(window, ui);
//! ```

use wasm_bindgen::prelude::*;

use super::{run, set_config};
use crate::config::FeedbackConfig;
use crate::feedback::Action;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(log::Level::Info));
}

/// Replace the active configuration with a TOML document.
#[wasm_bindgen]
pub fn configure(toml: &str) -> Result<(), JsValue> {
    let config = FeedbackConfig::from_toml_str(toml).map_err(|e| JsValue::from_str(&e.to_string()))?;
    set_config(config);
    log::info!("archive-ui configuration replaced");
    Ok(())
}

#[wasm_bindgen(js_name = showUploadSpinner)]
pub fn show_upload_spinner() {
    run(&Action::ShowUploadSpinner);
}

/// Older templates call the upload spinner by this name.
#[wasm_bindgen(js_name = showSpinner)]
pub fn show_spinner() {
    run(&Action::ShowUploadSpinner);
}

#[wasm_bindgen(js_name = showSearchSpinner)]
pub fn show_search_spinner() {
    run(&Action::ShowSearchSpinner);
}

#[wasm_bindgen(js_name = copyText)]
pub fn copy_text(text: String) {
    run(&Action::CopyText(text));
}

#[wasm_bindgen(js_name = searchText)]
pub fn search_text(text: String) {
    run(&Action::SearchText(text));
}

#[wasm_bindgen(js_name = selectSearchInputText)]
pub fn select_search_input_text() {
    run(&Action::SelectSearchInputText);
}
