//! Mobile menu demo server

use mobile_menu::demo::{create_router, DemoConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = DemoConfig::from_env();
    if !config.pkg_dir.exists() {
        log::warn!(
            "Package directory {} not found; run wasm-pack build --target web --no-default-features --features wasm",
            config.pkg_dir.display()
        );
    }

    let app = create_router(&config);
    let addr = config.addr();

    log::info!("Mobile menu demo listening on http://{}", addr);
    log::info!("  Demo page:    GET /");
    log::info!("  Health check: GET /health");
    log::info!("  Package:      GET /pkg/*  ({})", config.pkg_dir.display());

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
