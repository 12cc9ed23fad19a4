//! Modal dialogs
//!
//! `popModal(id)` shows `#id` and wires two ways to hide it again: a click on
//! the close control `#id<suffix>`, and a click whose target is the modal
//! element itself (the backdrop around the dialog content).
//!
//! Listeners are kept in a per-thread registry keyed by modal id. Opening the
//! same modal again replaces its previous listeners instead of stacking a
//! new pair on every call. Dropping a binding detaches its listeners before
//! the closures are freed, so closures are never leaked with `forget()`.

use std::cell::RefCell;
use std::collections::HashMap;

use js_sys::Function;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlElement, Window};

use crate::api::helpers::{document, element_by_id, window, write_display};
use crate::config::{self, UiConfig};
use crate::error::UiResult;
use crate::models::Display;

type ClickListener = Closure<dyn FnMut(Event)>;

thread_local! {
    static BINDINGS: RefCell<HashMap<String, ModalBinding>> = RefCell::new(HashMap::new());
}

/// Listeners registered for one modal
struct ModalBinding {
    modal_id: String,
    close: Option<(HtmlElement, ClickListener)>,
    window: Window,
    backdrop: ClickListener,
}

impl Drop for ModalBinding {
    fn drop(&mut self) {
        if let Some((target, listener)) = &self.close {
            if let Err(e) = target
                .remove_event_listener_with_callback("click", listener.as_ref().unchecked_ref::<Function>())
            {
                log::error!("Failed to detach close listener for {}: {:?}", self.modal_id, e);
            }
        }
        if let Err(e) = self
            .window
            .remove_event_listener_with_callback("click", self.backdrop.as_ref().unchecked_ref::<Function>())
        {
            log::error!("Failed to detach backdrop listener for {}: {:?}", self.modal_id, e);
        }
        log::debug!("Released listeners for modal {}", self.modal_id);
    }
}

fn hide(modal: &HtmlElement, config: &UiConfig) {
    if let Err(e) = write_display(modal, Display::None, config) {
        crate::wasm_warn!("Failed to hide modal {}: {}", modal.id(), e);
    }
}

/// True when the click landed on the element with id `modal_id` itself
fn is_backdrop_click(event: &Event, modal_id: &str) -> bool {
    event
        .target()
        .and_then(|target| target.dyn_into::<Element>().ok())
        .map(|element| element.id() == modal_id)
        .unwrap_or(false)
}

/// Show a modal and wire its close control and backdrop.
pub fn try_pop_modal(modal_id: &str) -> UiResult<()> {
    let config = config::current();
    let window = window()?;
    let document = document()?;

    let modal = element_by_id(&document, modal_id)?;

    // Drop any previous binding first; its listeners must be gone before
    // the new pair is attached.
    let previous = BINDINGS.with(|bindings| bindings.borrow_mut().remove(modal_id));
    if previous.is_some() {
        log::debug!("popModal: replacing listeners for {}", modal_id);
    }
    drop(previous);

    write_display(&modal, Display::Block, &config)?;

    let close_id = config.close_id(modal_id);
    let close = match element_by_id(&document, &close_id) {
        Ok(target) => {
            let modal_for_close = modal.clone();
            let config_for_close = config.clone();
            let listener = Closure::wrap(Box::new(move |_: Event| {
                hide(&modal_for_close, &config_for_close);
            }) as Box<dyn FnMut(Event)>);
            target.add_event_listener_with_callback("click", listener.as_ref().unchecked_ref())?;
            Some((target, listener))
        }
        Err(e) => {
            crate::wasm_warn!("popModal: {} (modal shown without close control)", e);
            None
        }
    };

    let modal_for_backdrop = modal.clone();
    let id_for_backdrop = modal_id.to_string();
    let backdrop = Closure::wrap(Box::new(move |event: Event| {
        if is_backdrop_click(&event, &id_for_backdrop) {
            hide(&modal_for_backdrop, &config);
        }
    }) as Box<dyn FnMut(Event)>);

    // Owned by the binding before attaching, so a failure below still
    // detaches the close listener on drop.
    let binding = ModalBinding {
        modal_id: modal_id.to_string(),
        close,
        window,
        backdrop,
    };
    binding
        .window
        .add_event_listener_with_callback("click", binding.backdrop.as_ref().unchecked_ref())?;

    BINDINGS.with(|bindings| bindings.borrow_mut().insert(modal_id.to_string(), binding));

    log::debug!("popModal: {} shown", modal_id);
    Ok(())
}

/// Hide a modal and release the listeners `popModal` attached for it.
pub fn try_close_modal(modal_id: &str) -> UiResult<()> {
    let binding = BINDINGS.with(|bindings| bindings.borrow_mut().remove(modal_id));
    drop(binding);

    let config = config::current();
    let document = document()?;
    let modal = element_by_id(&document, modal_id)?;
    write_display(&modal, Display::None, &config)?;

    log::debug!("closeModal: {} hidden", modal_id);
    Ok(())
}

/// Whether `popModal` currently has listeners registered for `modal_id`
pub fn has_binding(modal_id: &str) -> bool {
    BINDINGS.with(|bindings| bindings.borrow().contains_key(modal_id))
}

/// Number of modals with registered listeners
pub fn binding_count() -> usize {
    BINDINGS.with(|bindings| bindings.borrow().len())
}

#[wasm_bindgen(js_name = popModal)]
pub fn pop_modal(modal_id: &str) {
    if let Err(e) = try_pop_modal(modal_id) {
        crate::wasm_warn!("popModal({}): {}", modal_id, e);
    }
}

#[wasm_bindgen(js_name = closeModal)]
pub fn close_modal(modal_id: &str) {
    if let Err(e) = try_close_modal(modal_id) {
        crate::wasm_warn!("closeModal({}): {}", modal_id, e);
    }
}
