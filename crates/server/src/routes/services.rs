use axum::body::Bytes;
use axum::extract::State;
use axum::http::Method;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::info;

use service::services::{CreateServiceInput, UpdateServiceInput};

use super::payload::{parse_or_default, QueryParams, SERVICE};
use crate::dispatch::{self, Action};
use crate::errors::ApiError;
use crate::state::AppState;

/// `/api/services`
pub async fn handle(
    State(state): State<AppState>,
    method: Method,
    query: QueryParams,
    body: Bytes,
) -> Result<Response, ApiError> {
    let id = dispatch::id_param(query.first(&["id"]));
    match dispatch::route(&method, id.is_some())? {
        Action::List => Ok(Json(state.services.list().await?).into_response()),
        Action::Get => {
            let id = dispatch::target(id, || SERVICE.not_found())?;
            let found = state.services.get(id).await?.ok_or_else(|| SERVICE.not_found())?;
            Ok(Json(found).into_response())
        }
        Action::Create => {
            let input: CreateServiceInput = parse_or_default(&body)?;
            let created = state.services.create(input).await?;
            SERVICE.created(&created)
        }
        Action::Update => {
            let id = dispatch::target(id, || SERVICE.not_found())?;
            let input: UpdateServiceInput = parse_or_default(&body)?;
            let updated = state.services.update(id, input).await?.ok_or_else(|| SERVICE.not_found())?;
            info!(service_id = %id, "service_updated");
            SERVICE.updated(&updated)
        }
        Action::Delete => {
            let id = dispatch::target(id, || SERVICE.not_found())?;
            if !state.services.delete(id).await? {
                return Err(SERVICE.not_found());
            }
            info!(service_id = %id, "service_deleted");
            Ok(SERVICE.deleted())
        }
    }
}
