//! Open/closed state of the navigation panel

use serde::{Deserialize, Serialize};

/// The two states the navigation panel can be in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MenuState {
    Open,
    #[default]
    Closed,
}

impl MenuState {
    /// Build a state from the presence of the open marker
    pub fn from_open(open: bool) -> Self {
        if open {
            MenuState::Open
        } else {
            MenuState::Closed
        }
    }

    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }

    /// The opposite state
    pub fn toggled(self) -> Self {
        match self {
            MenuState::Open => MenuState::Closed,
            MenuState::Closed => MenuState::Open,
        }
    }

    /// Pick the glyph shown on the toggle control for this state
    pub fn glyph<'a>(self, open_glyph: &'a str, closed_glyph: &'a str) -> &'a str {
        match self {
            MenuState::Open => open_glyph,
            MenuState::Closed => closed_glyph,
        }
    }
}
