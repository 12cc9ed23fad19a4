//! Error types for the UI helpers
//!
//! The exported functions swallow these after logging them; the `try_*`
//! forms in `api` return them so callers (and tests) can see what went wrong.

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UiError {
    /// No global `window` (not running in a browser main thread)
    #[error("No window available")]
    NoWindow,

    #[error("No document available")]
    NoDocument,

    #[error("Document has no body")]
    NoBody,

    /// Nothing matched the selector or id
    #[error("Element not found: {0}")]
    ElementNotFound(String),

    /// A DOM call threw
    #[error("JavaScript error: {0}")]
    Js(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl From<JsValue> for UiError {
    fn from(value: JsValue) -> Self {
        UiError::Js(
            value
                .as_string()
                .unwrap_or_else(|| format!("{:?}", value)),
        )
    }
}

impl From<UiError> for JsValue {
    fn from(err: UiError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

pub type UiResult<T> = Result<T, UiError>;
