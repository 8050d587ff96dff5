use axum::body::Bytes;
use axum::extract::State;
use axum::http::Method;
use axum::response::{IntoResponse, Response};
use axum::{Extension, Json};
use tracing::info;

use service::auth::Claims;
use service::providers::{CreateProviderInput, UpdateProviderInput};

use super::payload::{parse_or_default, QueryParams, PROVIDER};
use crate::dispatch::{self, Action};
use crate::errors::ApiError;
use crate::state::AppState;

/// `/api/providers`. Deleting a provider removes its services and reviews.
pub async fn handle(
    State(state): State<AppState>,
    method: Method,
    query: QueryParams,
    claims: Option<Extension<Claims>>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let id = dispatch::id_param(query.first(&["id"]));
    match dispatch::route(&method, id.is_some())? {
        Action::List => Ok(Json(state.providers.list().await?).into_response()),
        Action::Get => {
            let id = dispatch::target(id, || PROVIDER.not_found())?;
            let found = state.providers.get(id).await?.ok_or_else(|| PROVIDER.not_found())?;
            Ok(Json(found).into_response())
        }
        Action::Create => {
            let input: CreateProviderInput = parse_or_default(&body)?;
            let caller = claims.and_then(|Extension(c)| c.user_uuid());
            let created = state.providers.create(input, caller).await?;
            PROVIDER.created(&created)
        }
        Action::Update => {
            let id = dispatch::target(id, || PROVIDER.not_found())?;
            let input: UpdateProviderInput = parse_or_default(&body)?;
            let updated = state.providers.update(id, input).await?.ok_or_else(|| PROVIDER.not_found())?;
            info!(provider_id = %id, "provider_updated");
            PROVIDER.updated(&updated)
        }
        Action::Delete => {
            let id = dispatch::target(id, || PROVIDER.not_found())?;
            if !state.providers.delete(id).await? {
                return Err(PROVIDER.not_found());
            }
            info!(provider_id = %id, "provider_deleted");
            Ok(PROVIDER.deleted())
        }
    }
}
