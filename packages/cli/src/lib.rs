// ABOUTME: Server bootstrap for the Contact Us settings service
// ABOUTME: Wires config, storage, permissions, and the audit sink into axum

use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::{HeaderValue, Method};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use contactus_settings::SettingsService;
use contactus_storage::SqliteSettingsStore;

pub mod api;
pub mod audit;
pub mod config;
pub mod error;
pub mod permissions;

use audit::TracingAuditSink;
use config::Config;
use permissions::EnvPermissions;

pub async fn run_server() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;

    let store = SqliteSettingsStore::connect(&config.db_path).await?;
    let service = Arc::new(SettingsService::new(
        Arc::new(store),
        Arc::new(TracingAuditSink),
        Arc::new(EnvPermissions::new(config.editors.clone())),
    ));

    let cors = CorsLayer::new()
        .allow_origin(config.cors_origin.parse::<HeaderValue>()?)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    let app = api::create_router(api::AppState { service })
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    let addr = SocketAddr::from(([127, 0, 0, 1], config.port));
    info!("Contact Us settings server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
