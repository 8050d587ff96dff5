use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use service::auth::domain::{LoginInput, RegisterInput};

use super::payload::{parse, USER};
use crate::errors::ApiError;
use crate::state::AppState;

/// `POST /api/auth/register`
pub async fn register(State(state): State<AppState>, body: Bytes) -> Result<Response, ApiError> {
    let input: RegisterInput = parse(&body)?;
    let user = state.auth.register(input).await?;
    USER.envelope(StatusCode::CREATED, "registered", &user)
}

/// `POST /api/auth/login`
pub async fn login(State(state): State<AppState>, body: Bytes) -> Result<Response, ApiError> {
    let input: LoginInput = parse(&body)?;
    let session = state.auth.login(input).await?;
    Ok(Json(session).into_response())
}
