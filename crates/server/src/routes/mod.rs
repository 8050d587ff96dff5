pub mod accounts;
pub mod payload;
pub mod providers;
pub mod reviews;
pub mod services;

use axum::{
    middleware,
    routing::{any, get, post},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use common::types::Health;

use crate::auth_gate;
use crate::state::AppState;

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the application router: public health and account routes, and the
/// resource routes behind the bearer gate.
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    let public = Router::new()
        .route("/health", get(health))
        .route("/api/auth/register", post(accounts::register))
        .route("/api/auth/login", post(accounts::login));

    // every verb reaches the handler so the dispatcher can answer 405
    let resources = Router::new()
        .route("/api/services", any(services::handle))
        .route("/api/reviews", any(reviews::handle))
        .route("/api/providers", any(providers::handle))
        .route_layer(middleware::from_fn_with_state(state.clone(), auth_gate::require_bearer));

    public
        .merge(resources)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
