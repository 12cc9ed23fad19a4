//! Visibility flag for navigation and modal elements
//!
//! Elements are shown and hidden through their CSS `display` property, the
//! same way the page stylesheet does it. Only two states matter here: shown
//! and hidden. Any value that is not the configured "shown" value counts as
//! hidden, so toggling an element with `display: flex` or an empty inline
//! style makes it shown.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::UiConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Display {
    Block,
    None,
}

impl Display {
    /// Classify a CSS `display` value against the configured shown value
    pub fn from_css(value: &str, config: &UiConfig) -> Self {
        if value.trim().eq_ignore_ascii_case(config.shown_display.trim()) {
            Display::Block
        } else {
            Display::None
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Display::Block => Display::None,
            Display::None => Display::Block,
        }
    }

    /// CSS value to write for this state
    pub fn css_value(self, config: &UiConfig) -> &str {
        match self {
            Display::Block => config.shown_display.trim(),
            Display::None => config.hidden_display.trim(),
        }
    }
}

impl fmt::Display for Display {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Display::Block => write!(f, "shown"),
            Display::None => write!(f, "hidden"),
        }
    }
}
