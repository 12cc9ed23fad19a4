//! Shared helpers for the DOM operations
//!
//! Console logging macros, window/document lookup, and reading and writing
//! an element's `display` flag.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, Window};

use crate::config::UiConfig;
use crate::error::{UiError, UiResult};
use crate::models::Display;

// ============================================================================
// Console Logging Functions
// ============================================================================

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn warn(s: &str);

    #[wasm_bindgen(js_namespace = console)]
    fn error(s: &str);
}

// ============================================================================
// Logging Macros
// ============================================================================

/// Log a warning message with [WASM] ⚠️ prefix
#[macro_export]
macro_rules! wasm_warn {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_warn(&format!($($arg)*))
    };
}

/// Log an error message with [WASM] ❌ prefix
#[macro_export]
macro_rules! wasm_error {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_error(&format!($($arg)*))
    };
}

pub fn log_warn(msg: &str) {
    warn(&format!("[WASM] ⚠️ {}", msg));
}

pub fn log_error(msg: &str) {
    error(&format!("[WASM] ❌ {}", msg));
}

// ============================================================================
// DOM Lookup
// ============================================================================

pub fn window() -> UiResult<Window> {
    web_sys::window().ok_or(UiError::NoWindow)
}

pub fn document() -> UiResult<Document> {
    window()?.document().ok_or(UiError::NoDocument)
}

pub fn body(document: &Document) -> UiResult<HtmlElement> {
    document.body().ok_or(UiError::NoBody)
}

/// Element with the given id, as an `HtmlElement`
pub fn element_by_id(document: &Document, id: &str) -> UiResult<HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .ok_or_else(|| UiError::ElementNotFound(format!("#{}", id)))
}

/// Every `HtmlElement` matching `selector`, in document order.
/// An empty match is an error so callers can tell "nothing to do" apart.
pub fn query_all(document: &Document, selector: &str) -> UiResult<Vec<HtmlElement>> {
    let nodes = document.query_selector_all(selector)?;
    let elements: Vec<HtmlElement> = (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect();

    if elements.is_empty() {
        return Err(UiError::ElementNotFound(selector.to_string()));
    }
    Ok(elements)
}

// ============================================================================
// Display Flag
// ============================================================================

/// Current visibility of `element`.
///
/// Reads the computed style so a menu hidden by the stylesheet (no inline
/// style yet) counts as hidden. Falls back to the inline style when the
/// element is detached and has no computed style.
pub fn read_display(window: &Window, element: &HtmlElement, config: &UiConfig) -> UiResult<Display> {
    let value = match window.get_computed_style(element)? {
        Some(style) => style.get_property_value("display")?,
        None => element.style().get_property_value("display")?,
    };
    Ok(Display::from_css(&value, config))
}

pub fn write_display(element: &HtmlElement, display: Display, config: &UiConfig) -> UiResult<()> {
    element
        .style()
        .set_property("display", display.css_value(config))?;
    Ok(())
}
