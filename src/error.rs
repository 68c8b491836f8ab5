//! Error types for the mobile menu

use thiserror::Error;

/// Main error type for menu operations
///
/// Missing control or container elements are not represented here: the
/// menu silently skips binding in that case.
#[derive(Error, Debug)]
pub enum MenuError {
    #[error("Invalid menu configuration: {0}")]
    InvalidConfig(String),

    #[error("DOM operation failed: {0}")]
    Dom(String),

    #[error("Configuration parse error: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result type for menu operations
pub type MenuResult<T> = Result<T, MenuError>;

#[cfg(feature = "wasm")]
impl From<MenuError> for wasm_bindgen::JsValue {
    fn from(err: MenuError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}
