use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Registration input
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterInput {
    pub name: String,
    pub email: String,
    pub password: String,
    /// Defaults to `customer`.
    #[serde(default)]
    pub role: Option<String>,
}

/// Login input
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

/// Domain user (business view, no credentials)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthUser {
    pub user_id: Uuid,
    pub name: String,
    pub email: String,
    pub role: String,
}

impl From<models::user::Model> for AuthUser {
    fn from(u: models::user::Model) -> Self {
        Self { user_id: u.user_id, name: u.name, email: u.email, role: u.role }
    }
}

/// Login result (session)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthSession {
    pub token: String,
    pub user: AuthUser,
}
