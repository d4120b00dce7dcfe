// src/main.rs
use std::net::SocketAddr;
use std::process::ExitCode;

use dotenvy::dotenv;
use shop_catalog::auth::password::AdminCredentials;
use shop_catalog::auth::session::SessionKeys;
use shop_catalog::config::AppConfig;
use shop_catalog::{create_router, database, state::AppState};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    // Load environment variables
    dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    // Create database pool and schema
    let db_pool = match database::create_pool(&config.database_url).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!(error = %e, "Failed to create database pool");
            return ExitCode::FAILURE;
        }
    };
    if let Err(e) = database::init_schema(&db_pool).await {
        tracing::error!(error = %e, "Failed to create schema");
        return ExitCode::FAILURE;
    }

    let app_state = AppState::new(
        db_pool,
        AdminCredentials::from_hash(config.admin_password_hash),
        SessionKeys::from_secret(&config.session_secret),
    );
    let app = create_router(app_state);

    // Try port..port+20 to avoid crash when address is in use
    let mut bound = None;
    for offset in 0u16..=20 {
        let port = config.port.saturating_add(offset);
        let addr = SocketAddr::from((config.host, port));
        match TcpListener::bind(addr).await {
            Ok(listener) => {
                bound = Some((listener, addr));
                break;
            }
            Err(e) if offset == 0 => {
                tracing::warn!(%addr, error = %e, "Port in use, trying next");
            }
            Err(_) => {}
        }
    }

    let Some((listener, addr)) = bound else {
        tracing::error!(
            "Failed to bind to any port starting at {} on {}",
            config.port,
            config.host
        );
        return ExitCode::FAILURE;
    };
    tracing::info!("Server running on {}", addr);

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error = %e, "Server error");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
