//! Site UI WASM API
//!
//! JavaScript-facing helpers, one module per concern:
//!
//! - `helpers`: console logging, DOM lookup, display flag read/write
//! - `nav`: navigation menu toggle
//! - `modal`: modal show/close wiring and its listener registry
//! - `clipboard`: copy text through a transient editable element
//!
//! Every exported function has a `try_*` twin returning `UiResult`; the
//! exported forms log failures and return nothing.

pub mod helpers;
pub mod nav;
pub mod modal;
pub mod clipboard;

pub use nav::{toggle_nav, try_toggle_nav};
pub use modal::{binding_count, close_modal, has_binding, pop_modal, try_close_modal, try_pop_modal};
pub use clipboard::{copy_to_clipboard, try_copy_to_clipboard};
