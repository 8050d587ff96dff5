use std::time::Duration;

use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use super::errors::AuthError;

/// Claims carried by bearer tokens. Only the signature and `exp` gate access;
/// the remaining fields are informational and kept as raw JSON so any shape
/// a signer chose still decodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<Value>,
}

impl Claims {
    /// The caller's user id when the token names one in UUID form.
    pub fn user_uuid(&self) -> Option<Uuid> {
        self.user_id.as_ref().and_then(Value::as_str).and_then(|s| Uuid::parse_str(s).ok())
    }

    pub fn role_name(&self) -> Option<&str> {
        self.role.as_ref().and_then(Value::as_str)
    }

    pub fn issued_at(&self) -> Option<u64> {
        self.iat.as_ref().and_then(Value::as_u64)
    }

    pub fn expires_at(&self) -> Option<u64> {
        self.exp.as_ref().and_then(Value::as_u64)
    }
}

/// HS256 keys derived from the shared secret.
#[derive(Clone)]
pub struct TokenKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl TokenKeys {
    pub fn new(secret: &str, ttl: Duration) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 0;
        validation.validate_aud = false;
        // tokens without `exp` never expire
        validation.required_spec_claims.clear();
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            ttl,
        }
    }

    /// Sign a token for `user_id` expiring after the configured ttl.
    pub fn issue(&self, user_id: Uuid, role: &str) -> Result<String, AuthError> {
        let iat = Utc::now().timestamp().max(0) as u64;
        let claims = Claims {
            user_id: Some(Value::from(user_id.to_string())),
            role: Some(Value::from(role)),
            iat: Some(Value::from(iat)),
            exp: Some(Value::from(iat + self.ttl.as_secs())),
        };
        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|e| AuthError::TokenError(e.to_string()))
    }

    /// Check signature and expiry, returning the decoded claims.
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        decode::<Claims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| AuthError::InvalidToken(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys() -> TokenKeys {
        TokenKeys::new("test-secret", Duration::from_secs(3600))
    }

    fn sign<T: Serialize>(secret: &str, claims: &T) -> String {
        encode(&Header::default(), claims, &EncodingKey::from_secret(secret.as_bytes())).unwrap()
    }

    #[test]
    fn issued_token_verifies_and_names_user() {
        let k = keys();
        let uid = Uuid::new_v4();
        let token = k.issue(uid, "customer").unwrap();
        let claims = k.verify(&token).unwrap();
        assert_eq!(claims.user_uuid(), Some(uid));
        assert_eq!(claims.role_name(), Some("customer"));
        assert_eq!(claims.expires_at().unwrap() - claims.issued_at().unwrap(), 3600);
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let token = TokenKeys::new("other-secret", Duration::from_secs(60)).issue(Uuid::new_v4(), "admin").unwrap();
        assert!(matches!(keys().verify(&token), Err(AuthError::InvalidToken(_))));
    }

    #[test]
    fn tampered_token_is_rejected() {
        let k = keys();
        let mut token = k.issue(Uuid::new_v4(), "customer").unwrap();
        token.push('x');
        assert!(k.verify(&token).is_err());
        assert!(k.verify("not-a-jwt").is_err());
    }

    #[test]
    fn expired_token_is_rejected() {
        let now = Utc::now().timestamp() as u64;
        let token = sign("test-secret", &serde_json::json!({"iat": now - 7200, "exp": now - 3600}));
        assert!(keys().verify(&token).is_err());
    }

    #[test]
    fn token_without_exp_is_accepted() {
        let token = sign("test-secret", &serde_json::json!({"user_id": "legacy"}));
        let decoded = keys().verify(&token).unwrap();
        assert_eq!(decoded.user_id, Some(Value::from("legacy")));
        assert_eq!(decoded.user_uuid(), None);
    }

    #[test]
    fn numeric_user_id_still_verifies() {
        let token = sign("test-secret", &serde_json::json!({"user_id": 42, "role": "customer"}));
        let decoded = keys().verify(&token).unwrap();
        assert_eq!(decoded.user_id, Some(Value::from(42)));
        assert_eq!(decoded.user_uuid(), None);
        assert_eq!(decoded.role_name(), Some("customer"));
    }

    #[test]
    fn audience_claim_is_not_checked() {
        let token = sign("test-secret", &serde_json::json!({"user_id": "x", "aud": "marketplace"}));
        assert!(keys().verify(&token).is_ok());
    }

    #[test]
    fn fractional_iat_and_unknown_claims_are_accepted() {
        let token = sign("test-secret", &serde_json::json!({"sub": "x", "iat": 1700000000.5}));
        let decoded = keys().verify(&token).unwrap();
        assert_eq!(decoded.issued_at(), None);
        assert_eq!(decoded.user_id, None);
    }
}
