//! Browser Primitives
//!
//! Frontend wrappers around the dialogs and file APIs the site relies on.

mod dialog;
mod files;

use wasm_bindgen::JsValue;

pub use dialog::*;
pub use files::*;

/// Render a thrown JS value as a message
fn js_error(value: JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value))
}
