//! Value types shared by the UI helpers

pub mod display;

pub use display::*;
