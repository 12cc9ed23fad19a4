//! Copy-to-clipboard through a transient editable element
//!
//! The text goes into an off-screen `<textarea>` (or `<input>`, per config)
//! appended to `<body>`, gets selected, and `execCommand("copy")` copies the
//! selection. The element is removed again before returning, whether or not
//! the copy succeeded.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlDocument, HtmlElement, HtmlInputElement, HtmlTextAreaElement};

use crate::api::helpers::{body, document};
use crate::config;
use crate::error::{UiError, UiResult};

/// Keeps the buffer out of view without `display: none`, which would make it
/// unselectable.
const OFFSCREEN_STYLE: &str = "position: fixed; top: 0; left: 0; opacity: 0; pointer-events: none;";

fn create_buffer(document: &Document, tag: &str, text: &str) -> UiResult<HtmlElement> {
    let element = document.create_element(tag)?;
    element.set_attribute("readonly", "")?;
    element.set_attribute("style", OFFSCREEN_STYLE)?;

    if let Some(textarea) = element.dyn_ref::<HtmlTextAreaElement>() {
        textarea.set_value(text);
    } else if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        input.set_type("text");
        input.set_value(text);
    } else {
        return Err(UiError::InvalidConfig(format!("<{}> cannot hold clipboard text", tag)));
    }

    element
        .dyn_into::<HtmlElement>()
        .map_err(|_| UiError::Js(format!("<{}> is not an HtmlElement", tag)))
}

fn select_contents(buffer: &HtmlElement) {
    if let Err(e) = buffer.focus() {
        log::debug!("copy buffer could not take focus: {:?}", e);
    }
    if let Some(textarea) = buffer.dyn_ref::<HtmlTextAreaElement>() {
        textarea.select();
    } else if let Some(input) = buffer.dyn_ref::<HtmlInputElement>() {
        input.select();
    }
}

fn exec_copy(document: &Document) -> UiResult<bool> {
    let html_document = document
        .dyn_ref::<HtmlDocument>()
        .ok_or_else(|| UiError::Js("document does not support execCommand".to_string()))?;
    Ok(html_document.exec_command("copy")?)
}

/// Copy `text` to the system clipboard.
///
/// Returns whether the browser reported the copy as performed. The transient
/// element is never left in the document.
pub fn try_copy_to_clipboard(text: &str) -> UiResult<bool> {
    let config = config::current();
    let document = document()?;
    let body = body(&document)?;

    let buffer = create_buffer(&document, &config.clipboard_element, text)?;
    body.append_child(&buffer)?;

    select_contents(&buffer);
    let copied = exec_copy(&document);
    buffer.remove();

    let copied = copied?;
    log::debug!("copy_to_clipboard: {} chars, copied={}", text.chars().count(), copied);
    Ok(copied)
}

/// Exported as `copy_to_clipboard`, the name existing page markup calls.
#[wasm_bindgen(js_name = copy_to_clipboard)]
pub fn copy_to_clipboard(text: &str) {
    match try_copy_to_clipboard(text) {
        Ok(true) => {}
        Ok(false) => crate::wasm_warn!("copy_to_clipboard: browser refused the copy command"),
        Err(e) => crate::wasm_warn!("copy_to_clipboard: {}", e),
    }
}
