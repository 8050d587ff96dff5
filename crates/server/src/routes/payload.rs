use axum::async_trait;
use axum::body::Bytes;
use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use common::types::Message;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::errors::ApiError;

/// Display and JSON key names for one resource.
#[derive(Debug, Clone, Copy)]
pub struct Resource {
    pub name: &'static str,
    pub key: &'static str,
}

pub const SERVICE: Resource = Resource { name: "Service", key: "service" };
pub const REVIEW: Resource = Resource { name: "Review", key: "review" };
pub const PROVIDER: Resource = Resource { name: "Provider", key: "provider" };
pub const USER: Resource = Resource { name: "User", key: "user" };

impl Resource {
    pub fn not_found(self) -> ApiError {
        ApiError::NotFound(format!("{} not found", self.name))
    }

    pub fn created<T: Serialize>(self, record: &T) -> Result<Response, ApiError> {
        self.envelope(StatusCode::CREATED, "created", record)
    }

    pub fn updated<T: Serialize>(self, record: &T) -> Result<Response, ApiError> {
        self.envelope(StatusCode::OK, "updated", record)
    }

    pub fn deleted(self) -> Response {
        Json(Message::new(format!("{} deleted successfully", self.name))).into_response()
    }

    pub(crate) fn envelope<T: Serialize>(self, status: StatusCode, verb: &str, record: &T) -> Result<Response, ApiError> {
        let record = serde_json::to_value(record).map_err(|e| ApiError::Internal(e.to_string()))?;
        let mut body = Map::new();
        body.insert("message".into(), Value::String(format!("{} {} successfully", self.name, verb)));
        body.insert(self.key.into(), record);
        Ok((status, Json(Value::Object(body))).into_response())
    }
}

/// Raw query pairs in request order. Repeated keys are kept; lookups take the
/// first occurrence.
#[derive(Debug, Clone, Default)]
pub struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    /// First value under any of `keys`, in query order.
    pub fn first(&self, keys: &[&str]) -> Option<&str> {
        self.0.iter().find(|(k, _)| keys.contains(&k.as_str())).map(|(_, v)| v.as_str())
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for QueryParams
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(pairs) = Query::<Vec<(String, String)>>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::BadRequest(e.body_text()))?;
        Ok(Self(pairs))
    }
}

/// Parse a JSON body; a blank body yields the all-absent input so missing
/// fields surface as validation errors.
pub fn parse_or_default<T: DeserializeOwned + Default>(body: &Bytes) -> Result<T, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    parse(body)
}

pub fn parse<T: DeserializeOwned>(body: &Bytes) -> Result<T, ApiError> {
    serde_json::from_slice(body).map_err(|e| ApiError::BadRequest(format!("Invalid request body: {e}")))
}
