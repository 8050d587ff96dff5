use axum::extract::{Request, State};
use axum::http::{header::AUTHORIZATION, HeaderMap, Method};
use axum::middleware::Next;
use axum::response::Response;
use tracing::warn;

use crate::errors::ApiError;
use crate::state::AppState;

pub const AUTH_REQUIRED: &str = "Authentication required";
pub const INVALID_TOKEN: &str = "Invalid token";

pub fn requires_auth(method: &Method) -> bool {
    matches!(*method, Method::POST | Method::PUT | Method::DELETE)
}

/// Token from `Authorization: Bearer <token>`; `None` for any other shape.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    let token = token.trim();
    (scheme.eq_ignore_ascii_case("Bearer") && !token.is_empty()).then_some(token)
}

/// Mutating verbs need a verified bearer token; the decoded claims are
/// attached to the request for the handler.
pub async fn require_bearer(State(state): State<AppState>, mut req: Request, next: Next) -> Result<Response, ApiError> {
    if !requires_auth(req.method()) {
        return Ok(next.run(req).await);
    }

    // only the Bearer scheme carries a token; `Token abc` and friends count as missing
    let claims = match bearer_token(req.headers()) {
        None => {
            warn!(method = %req.method(), path = %req.uri().path(), "missing bearer token");
            return Err(ApiError::Unauthorized(AUTH_REQUIRED));
        }
        Some(token) => state.auth.verify(token).map_err(|e| {
            warn!(method = %req.method(), path = %req.uri().path(), error = %e, "token rejected");
            ApiError::Unauthorized(INVALID_TOKEN)
        })?,
    };

    req.extensions_mut().insert(claims);
    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(value: &'static str) -> HeaderMap {
        let mut h = HeaderMap::new();
        h.insert(AUTHORIZATION, HeaderValue::from_static(value));
        h
    }

    #[test]
    fn only_mutating_verbs_are_gated() {
        assert!(requires_auth(&Method::POST));
        assert!(requires_auth(&Method::PUT));
        assert!(requires_auth(&Method::DELETE));
        assert!(!requires_auth(&Method::GET));
        assert!(!requires_auth(&Method::PATCH));
    }

    #[test]
    fn extracts_bearer_credentials_only() {
        assert_eq!(bearer_token(&headers("Bearer abc.def")), Some("abc.def"));
        assert_eq!(bearer_token(&headers("bearer abc")), Some("abc"));
        assert_eq!(bearer_token(&headers("Basic dXNlcjpwYXNz")), None);
        assert_eq!(bearer_token(&headers("Token abc")), None);
        assert_eq!(bearer_token(&headers("Bearer ")), None);
        assert_eq!(bearer_token(&headers("Bearer")), None);
        assert_eq!(bearer_token(&HeaderMap::new()), None);
    }
}
