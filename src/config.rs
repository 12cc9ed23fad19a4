//! Runtime configuration for the UI helpers
//!
//! The defaults match the site's markup: the menu is `nav ul`, close buttons
//! are `<modal id>_close`, and visibility is `display: block` / `none`.
//! Pages with different markup can override any subset of fields through
//! `configure({...})` or `configureFromJson("...")` before the first call.

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::sync::Mutex;
use wasm_bindgen::prelude::*;

use crate::error::{UiError, UiResult};

lazy_static! {
    static ref CONFIG: Mutex<UiConfig> = Mutex::new(UiConfig::default());
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Selector for the navigation container(s)
    pub nav_selector: String,
    /// Appended to a modal id to find its close control
    pub close_suffix: String,
    pub shown_display: String,
    pub hidden_display: String,
    /// Tag of the transient element used as the copy buffer
    pub clipboard_element: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            nav_selector: "nav ul".to_string(),
            close_suffix: "_close".to_string(),
            shown_display: "block".to_string(),
            hidden_display: "none".to_string(),
            clipboard_element: "textarea".to_string(),
        }
    }
}

impl UiConfig {
    /// Parse a (possibly partial) JSON object; missing fields keep defaults
    pub fn from_json_str(json: &str) -> UiResult<Self> {
        let config: UiConfig =
            serde_json::from_str(json).map_err(|e| UiError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> UiResult<()> {
        if self.nav_selector.trim().is_empty() {
            return Err(UiError::InvalidConfig("nav_selector is empty".to_string()));
        }
        if self.shown_display.trim().is_empty() {
            return Err(UiError::InvalidConfig("shown_display is empty".to_string()));
        }
        if self.shown_display.trim() == self.hidden_display.trim() {
            return Err(UiError::InvalidConfig(format!(
                "shown_display and hidden_display are both '{}'",
                self.shown_display
            )));
        }
        match self.clipboard_element.as_str() {
            "textarea" | "input" => {}
            other => {
                return Err(UiError::InvalidConfig(format!(
                    "clipboard_element must be 'textarea' or 'input', got '{}'",
                    other
                )))
            }
        }
        Ok(())
    }

    /// Id of the close control paired with `modal_id`
    pub fn close_id(&self, modal_id: &str) -> String {
        format!("{}{}", modal_id, self.close_suffix)
    }
}

/// Snapshot of the active configuration
pub fn current() -> UiConfig {
    CONFIG.lock().unwrap_or_else(|e| e.into_inner()).clone()
}

/// Replace the active configuration after validating it
pub fn set_config(config: UiConfig) -> UiResult<()> {
    config.validate()?;
    log::debug!("UI config set: {:?}", config);
    *CONFIG.lock().unwrap_or_else(|e| e.into_inner()) = config;
    Ok(())
}

/// Override configuration from a JavaScript object
#[wasm_bindgen(js_name = configure)]
pub fn configure(value: JsValue) -> Result<(), JsValue> {
    let config: UiConfig = serde_wasm_bindgen::from_value(value).map_err(|e| {
        let msg = format!("Invalid configuration: {}", e);
        crate::wasm_error!("{}", msg);
        JsValue::from_str(&msg)
    })?;
    set_config(config).map_err(|e| {
        crate::wasm_error!("{}", e);
        JsValue::from(e)
    })
}

/// Override configuration from a JSON string, e.g. an inline
/// `<script type="application/json">` block
#[wasm_bindgen(js_name = configureFromJson)]
pub fn configure_from_json(json: &str) -> Result<(), JsValue> {
    let config = UiConfig::from_json_str(json).map_err(|e| {
        crate::wasm_error!("{}", e);
        JsValue::from(e)
    })?;
    set_config(config).map_err(JsValue::from)
}
