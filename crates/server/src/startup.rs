use std::{sync::Arc, time::Duration};

use axum::Router;
use configs::AppConfig;
use dotenvy::dotenv;
use service::auth::TokenKeys;
use service::repo::{memory::MemoryRepository, seaorm::SeaOrmRepository};
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::errors::StartupError;
use crate::routes;
use crate::state::AppState;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// `MARKETPLACE_STORE=memory` swaps Postgres for the in-process store.
fn memory_store_requested() -> bool {
    std::env::var("MARKETPLACE_STORE").map(|v| v.eq_ignore_ascii_case("memory")).unwrap_or(false)
}

async fn build_state(cfg: &AppConfig) -> Result<AppState, StartupError> {
    let keys = TokenKeys::new(&cfg.auth.jwt_secret, Duration::from_secs(cfg.auth.token_ttl_secs));

    if memory_store_requested() {
        warn!(store = "memory", "using in-memory store; data is lost on shutdown");
        return Ok(AppState::with_store(Arc::new(MemoryRepository::default()), keys));
    }

    cfg.database.validate().map_err(|e| StartupError::InvalidConfig(e.to_string()))?;
    let db = models::db::connect_with_config(&cfg.database).await?;
    models::db::migrate(&db).await?;
    info!(store = "postgres", max_connections = cfg.database.max_connections, "database ready");
    Ok(AppState::with_store(Arc::new(SeaOrmRepository::new(db)), keys))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received, draining connections");
}

/// Load configuration, wire the store and serve until Ctrl+C.
pub async fn run() -> Result<(), StartupError> {
    dotenv().ok();

    let cfg = AppConfig::load_and_validate().map_err(|e| StartupError::InvalidConfig(e.to_string()))?;
    let state = build_state(&cfg).await?;
    let app: Router = routes::build_router(state, build_cors());

    let addr = cfg.server.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| StartupError::Runtime(format!("bind {addr}: {e}")))?;
    info!(%addr, "marketplace api listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| StartupError::Runtime(e.to_string()))?;
    info!("server stopped");
    Ok(())
}
