//! Demo HTTP server: hosts a page that mounts the menu
//!
//! Serves the demo markup at `/`, the `wasm-pack` output under `/pkg` and a
//! health check. Build the package first with
//! `wasm-pack build --target web --no-default-features --features wasm`.

use std::path::PathBuf;

use axum::{response::Html, routing::get, Json, Router};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

const DEMO_PAGE: &str = include_str!("../demo/index.html");

/// Server settings, read from the environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    pub host: String,
    pub port: u16,
    /// Directory holding `mobile_menu.js` and `mobile_menu_bg.wasm`
    pub pkg_dir: PathBuf,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8088,
            pkg_dir: PathBuf::from("./pkg"),
        }
    }
}

impl DemoConfig {
    /// `HOST`, `PORT` and `MENU_PKG_DIR`, falling back to defaults
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let port = match lookup("PORT") {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                log::warn!("Ignoring invalid PORT '{}', using {}", raw, defaults.port);
                defaults.port
            }),
            None => defaults.port,
        };
        Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port,
            pkg_dir: lookup("MENU_PKG_DIR").map(PathBuf::from).unwrap_or(defaults.pkg_dir),
        }
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: String,
    version: String,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

async fn index() -> Html<&'static str> {
    Html(DEMO_PAGE)
}

/// Build the demo router
pub fn create_router(config: &DemoConfig) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .nest_service("/pkg", ServeDir::new(&config.pkg_dir))
        .layer(cors)
}
