//! Menu configuration: element selectors, marker classes and glyphs
//!
//! Every field has a default matching the stock site markup, so a config
//! deserialized from `{}` (or from JS `undefined`) binds to
//! `.mobile-menu-btn` / `.nav-links`.

use serde::{Deserialize, Serialize};

use crate::error::{MenuError, MenuResult};

/// Selectors, marker classes and glyphs used when binding the menu
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    /// Selector for the toggle control
    pub control_selector: String,
    /// Selector for the navigation links container
    pub container_selector: String,
    /// Selector for links inside the container, enumerated once at install
    pub link_selector: String,
    /// Marker class applied to the container while open
    pub open_class: String,
    /// Marker class applied to the control while open
    pub active_class: String,
    /// Control text while open
    pub open_glyph: String,
    /// Control text while closed
    pub closed_glyph: String,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            control_selector: default_control_selector(),
            container_selector: default_container_selector(),
            link_selector: default_link_selector(),
            open_class: default_open_class(),
            active_class: default_active_class(),
            open_glyph: default_open_glyph(),
            closed_glyph: default_closed_glyph(),
        }
    }
}

fn default_control_selector() -> String { ".mobile-menu-btn".to_string() }
fn default_container_selector() -> String { ".nav-links".to_string() }
fn default_link_selector() -> String { "a".to_string() }
fn default_open_class() -> String { "mobile-menu-open".to_string() }
fn default_active_class() -> String { "active".to_string() }
fn default_open_glyph() -> String { "✕".to_string() }
fn default_closed_glyph() -> String { "☰".to_string() }

impl MenuConfig {
    /// Parse a (possibly partial) JSON config and validate it
    pub fn from_json(json: &str) -> MenuResult<Self> {
        let config: MenuConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that selectors are non-empty and marker classes are valid
    /// `classList` tokens
    pub fn validate(&self) -> MenuResult<()> {
        for (field, selector) in [
            ("control_selector", &self.control_selector),
            ("container_selector", &self.container_selector),
            ("link_selector", &self.link_selector),
        ] {
            if selector.trim().is_empty() {
                return Err(MenuError::InvalidConfig(format!("{field} is empty")));
            }
        }

        for (field, class) in [
            ("open_class", &self.open_class),
            ("active_class", &self.active_class),
        ] {
            if class.is_empty() {
                return Err(MenuError::InvalidConfig(format!("{field} is empty")));
            }
            if class.chars().any(|c| c.is_ascii_whitespace()) {
                return Err(MenuError::InvalidConfig(format!(
                    "{field} '{class}' contains whitespace"
                )));
            }
        }

        Ok(())
    }
}
