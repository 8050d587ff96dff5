use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use common::types::Message;
use service::auth::errors::AuthError;
use service::ServiceError;
use thiserror::Error;
use tracing::error;

/// Every failure a request can end in. The `Display` text is the `message`
/// field of the JSON body.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Unauthorized(&'static str),
    #[error("{0}")]
    NotFound(String),
    #[error("Method {method} not allowed")]
    MethodNotAllowed { method: String, allow: &'static str },
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Conflict(String),
    /// The cause is logged, never sent to the client.
    #[error("Error processing request")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if let ApiError::Internal(cause) = &self {
            error!(error = %cause, "request failed");
        }
        let allow = match &self {
            ApiError::MethodNotAllowed { allow, .. } => Some(*allow),
            _ => None,
        };
        let mut resp = (status, Json(Message::new(self.to_string()))).into_response();
        if let Some(allow) = allow {
            resp.headers_mut().insert(header::ALLOW, HeaderValue::from_static(allow));
        }
        resp
    }
}

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::Validation(msg) => ApiError::BadRequest(msg),
            ServiceError::NotFound(msg) => ApiError::NotFound(msg),
            ServiceError::Conflict(msg) => ApiError::Conflict(msg),
            ServiceError::Db(msg) => ApiError::Internal(msg),
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::Validation(msg) => ApiError::BadRequest(msg),
            AuthError::Conflict => ApiError::Conflict("User already exists".into()),
            AuthError::Unauthorized => ApiError::Unauthorized("Invalid credentials"),
            AuthError::InvalidToken(_) => ApiError::Unauthorized("Invalid token"),
            other => ApiError::Internal(format!("auth error {}: {}", other.code(), other)),
        }
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("runtime check failed: {0}")]
    Runtime(String),
    #[error(transparent)]
    Any(#[from] anyhow::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn internal_errors_hide_their_cause() {
        let err = ApiError::from(ServiceError::Db("connection reset".into()));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "Error processing request");
    }

    #[test]
    fn method_not_allowed_sets_allow_header() {
        let resp = ApiError::MethodNotAllowed { method: "PATCH".into(), allow: "GET, POST" }.into_response();
        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(resp.headers()[header::ALLOW], "GET, POST");
    }

    #[test]
    fn auth_errors_map_to_client_statuses() {
        assert_eq!(ApiError::from(AuthError::Unauthorized).status(), StatusCode::UNAUTHORIZED);
        assert_eq!(ApiError::from(AuthError::Conflict).status(), StatusCode::CONFLICT);
        assert_eq!(ApiError::from(AuthError::Validation("x".into())).status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::from(AuthError::HashError("x".into())).status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
