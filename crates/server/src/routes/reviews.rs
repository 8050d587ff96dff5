use axum::body::Bytes;
use axum::extract::State;
use axum::http::Method;
use axum::response::{IntoResponse, Response};
use axum::{Extension, Json};
use tracing::info;
use uuid::Uuid;

use service::auth::Claims;
use service::reviews::{CreateReviewInput, UpdateReviewInput};

use super::payload::{parse_or_default, QueryParams, REVIEW};
use crate::dispatch::{self, Action};
use crate::errors::ApiError;
use crate::state::AppState;

/// `providerId` (or `provider_id`) filter; the first occurrence wins.
fn provider_filter(query: &QueryParams) -> Result<Option<Uuid>, ApiError> {
    match dispatch::id_param(query.first(&["providerId", "provider_id"])) {
        None => Ok(None),
        Some(raw) => Uuid::parse_str(raw.trim())
            .map(Some)
            .map_err(|_| ApiError::BadRequest(format!("Invalid providerId: {raw}"))),
    }
}

/// `/api/reviews`; the author is the caller named by the bearer token.
pub async fn handle(
    State(state): State<AppState>,
    method: Method,
    query: QueryParams,
    claims: Option<Extension<Claims>>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let id = dispatch::id_param(query.first(&["id"]));
    match dispatch::route(&method, id.is_some())? {
        Action::List => Ok(Json(state.reviews.list(provider_filter(&query)?).await?).into_response()),
        Action::Get => {
            let id = dispatch::target(id, || REVIEW.not_found())?;
            let found = state.reviews.get(id).await?.ok_or_else(|| REVIEW.not_found())?;
            Ok(Json(found).into_response())
        }
        Action::Create => {
            let input: CreateReviewInput = parse_or_default(&body)?;
            let author = claims.and_then(|Extension(c)| c.user_uuid());
            let created = state.reviews.create(input, author).await?;
            REVIEW.created(&created)
        }
        Action::Update => {
            let id = dispatch::target(id, || REVIEW.not_found())?;
            let input: UpdateReviewInput = parse_or_default(&body)?;
            let updated = state.reviews.update(id, input).await?.ok_or_else(|| REVIEW.not_found())?;
            info!(review_id = %id, "review_updated");
            REVIEW.updated(&updated)
        }
        Action::Delete => {
            let id = dispatch::target(id, || REVIEW.not_found())?;
            if !state.reviews.delete(id).await? {
                return Err(REVIEW.not_found());
            }
            info!(review_id = %id, "review_deleted");
            Ok(REVIEW.deleted())
        }
    }
}
