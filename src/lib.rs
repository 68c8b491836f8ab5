//! Mobile Menu - a navigation menu toggle for small screens
//!
//! Binds a toggle button to a navigation links container:
//! - clicking the button opens/closes the panel and swaps its glyph
//! - clicking anywhere outside both elements closes an open panel
//! - clicking a link inside the panel closes it
//!
//! The behaviour lives in host-agnostic code ([`controller`], [`binding`]);
//! the `wasm` feature provides the browser implementation and the `server`
//! feature a small demo server.
//!
//! ## Example
//! ```rust,ignore
//! use mobile_menu::prelude::*;
//!
//! // `document` is anything implementing MenuDocument
//! if let Some(binding) = install(&document, &MenuConfig::default())? {
//!     binding.persist();
//! }
//! ```

pub mod binding;
pub mod config;
pub mod controller;
pub mod error;
pub mod state;

// Re-export common types
pub mod prelude {
    pub use crate::binding::{install, ClickHandler, ClickSource, MenuBinding, MenuDocument};
    pub use crate::config::MenuConfig;
    pub use crate::controller::{ClickOrigin, MenuController, MenuSurface};
    pub use crate::error::{MenuError, MenuResult};
    pub use crate::state::MenuState;
}

#[cfg(feature = "server")]
pub mod demo;

#[cfg(feature = "wasm")]
pub mod wasm;
