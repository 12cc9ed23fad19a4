//! Site UI WASM Module
//!
//! Small DOM helpers for the course website: the navigation menu toggle,
//! modal dialogs and copy-to-clipboard buttons. Markup event attributes call
//! the exported functions by their JavaScript names (`toggleNav`,
//! `popModal`, `closeModal`, `copy_to_clipboard`).

pub mod api;
pub mod config;
pub mod error;
pub mod models;

// Re-export commonly used types
pub use api::*;
pub use config::{configure, configure_from_json, UiConfig};
pub use error::UiError;
pub use models::Display;

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        crate::wasm_warn!("Logger already initialized: {}", e);
    }

    log::info!("Site UI WASM module initialized");
}
