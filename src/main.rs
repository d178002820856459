//! Entrypoint for the ordering service
//!
//! Loads configuration and the menu, then serves the MCP tool surface and the
//! read-only REST projections until Ctrl+C.

use anyhow::Context;
use order_cart_rust::cart::AppState;
use order_cart_rust::config::Config;
use order_cart_rust::menu::Menu;
use order_cart_rust::router::create_app_router;
use std::sync::Arc;
use tracing::info;

/// Listens for the `Ctrl+C` signal to gracefully shut down the server.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install Ctrl+C handler");
        std::future::pending::<()>().await;
    }
    info!("Received shutdown signal. Shutting down gracefully...");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env().context("Failed to load configuration")?;

    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .init();

    // Malformed menus fail here, before any cart exists
    let menu = Menu::load(&config.menu_path)
        .with_context(|| format!("Failed to load menu from {}", config.menu_path.display()))?;

    let state = Arc::new(AppState::new(Arc::new(menu), config.cart_id.clone()));
    let app = create_app_router(state);

    info!(
        bind_address = %config.bind_address,
        cart_id = %config.cart_id,
        "Starting server"
    );
    let listener = tokio::net::TcpListener::bind(config.bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_address))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server has shut down.");
    Ok(())
}
