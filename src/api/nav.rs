//! Navigation menu toggle

use wasm_bindgen::prelude::*;

use crate::api::helpers::{document, query_all, read_display, window, write_display};
use crate::config;
use crate::error::UiResult;
use crate::models::Display;

/// Flip the navigation menu between shown and hidden.
///
/// The first element matching the nav selector decides the current state;
/// every match is set to the flipped state. Returns the new state.
pub fn try_toggle_nav() -> UiResult<Display> {
    let config = config::current();
    let window = window()?;
    let document = document()?;

    let menus = query_all(&document, &config.nav_selector)?;
    let current = read_display(&window, &menus[0], &config)?;
    let next = current.toggled();

    for menu in &menus {
        write_display(menu, next, &config)?;
    }

    log::debug!("toggleNav: {} -> {} ({} element(s))", current, next, menus.len());
    Ok(next)
}

#[wasm_bindgen(js_name = toggleNav)]
pub fn toggle_nav() {
    if let Err(e) = try_toggle_nav() {
        crate::wasm_warn!("toggleNav: {}", e);
    }
}
