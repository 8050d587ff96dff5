use std::sync::Arc;

use argon2::{Argon2, password_hash::{PasswordHasher, PasswordVerifier, SaltString}, PasswordHash};
use rand::rngs::OsRng;
use tracing::{debug, info, instrument};
use uuid::Uuid;

use super::domain::{AuthSession, AuthUser, LoginInput, RegisterInput};
use super::errors::AuthError;
use super::repository::UserRepository;
use super::token::{Claims, TokenKeys};

pub const MIN_PASSWORD_LEN: usize = 8;
pub const DEFAULT_ROLE: &str = "customer";

/// Auth business service independent of web framework
pub struct AuthService {
    users: Arc<dyn UserRepository>,
    tokens: TokenKeys,
}

impl AuthService {
    pub fn new(users: Arc<dyn UserRepository>, tokens: TokenKeys) -> Self { Self { users, tokens } }

    /// Register a new user with a hashed password.
    ///
    /// # Examples
    /// ```
    /// use std::{sync::Arc, time::Duration};
    /// use service::auth::{AuthService, TokenKeys, domain::RegisterInput};
    /// use service::repo::memory::MemoryRepository;
    ///
    /// let svc = AuthService::new(Arc::new(MemoryRepository::default()), TokenKeys::new("secret", Duration::from_secs(60)));
    /// let input = RegisterInput { name: "Test".into(), email: "user@example.com".into(), password: "Secret123".into(), role: None };
    /// let user = tokio_test::block_on(svc.register(input)).unwrap();
    /// assert_eq!(user.email, "user@example.com");
    /// assert_eq!(user.role, "customer");
    /// ```
    #[instrument(skip(self, input), fields(email = %input.email))]
    pub async fn register(&self, input: RegisterInput) -> Result<AuthUser, AuthError> {
        if input.password.len() < MIN_PASSWORD_LEN {
            return Err(AuthError::Validation(format!("password too short (>={MIN_PASSWORD_LEN})")));
        }
        let role = input.role.unwrap_or_else(|| DEFAULT_ROLE.to_string());
        models::user::validate_name(&input.name).map_err(|e| AuthError::Validation(e.to_string()))?;
        models::user::validate_email(&input.email).map_err(|e| AuthError::Validation(e.to_string()))?;
        models::user::validate_role(&role).map_err(|e| AuthError::Validation(e.to_string()))?;

        if let Some(existing) = self.users.find_by_email(&input.email).await? {
            debug!("user exists: {}", existing.email);
            return Err(AuthError::Conflict);
        }

        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(input.password.as_bytes(), &salt)
            .map_err(|e| AuthError::HashError(e.to_string()))?
            .to_string();

        let now = crate::now();
        let created = self.users.create(models::user::Model {
            user_id: Uuid::new_v4(),
            name: input.name,
            email: input.email,
            password_hash: hash,
            role,
            created_at: now,
            updated_at: now,
        }).await?;
        info!(user_id = %created.user_id, role = %created.role, "user_registered");
        Ok(created.into())
    }

    /// Authenticate a user and issue a bearer token.
    #[instrument(skip(self, input), fields(email = %input.email))]
    pub async fn login(&self, input: LoginInput) -> Result<AuthSession, AuthError> {
        let user = self.users
            .find_by_email(&input.email)
            .await?
            .ok_or(AuthError::Unauthorized)?;

        let parsed = PasswordHash::new(&user.password_hash).map_err(|e| AuthError::HashError(e.to_string()))?;
        if Argon2::default().verify_password(input.password.as_bytes(), &parsed).is_err() {
            return Err(AuthError::Unauthorized);
        }

        let token = self.tokens.issue(user.user_id, &user.role)?;
        Ok(AuthSession { token, user: user.into() })
    }

    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        self.tokens.verify(token)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::repo::memory::MemoryRepository;

    fn svc() -> AuthService {
        AuthService::new(Arc::new(MemoryRepository::default()), TokenKeys::new("secret", Duration::from_secs(3600)))
    }

    fn register_input(email: &str) -> RegisterInput {
        RegisterInput { name: "Test User".into(), email: email.into(), password: "hashedpassword".into(), role: Some("provider".into()) }
    }

    #[tokio::test]
    async fn register_then_login_issues_verifiable_token() {
        let svc = svc();
        let user = svc.register(register_input("testuser@example.com")).await.unwrap();
        let session = svc.login(LoginInput { email: "testuser@example.com".into(), password: "hashedpassword".into() }).await.unwrap();
        assert_eq!(session.user, user);
        let claims = svc.verify(&session.token).unwrap();
        assert_eq!(claims.user_uuid(), Some(user.user_id));
        assert_eq!(claims.role_name(), Some("provider"));
    }

    #[tokio::test]
    async fn duplicate_email_conflicts() {
        let svc = svc();
        svc.register(register_input("dup@example.com")).await.unwrap();
        let err = svc.register(register_input("dup@example.com")).await.unwrap_err();
        assert!(matches!(err, AuthError::Conflict));
    }

    #[tokio::test]
    async fn wrong_password_and_unknown_user_are_unauthorized() {
        let svc = svc();
        svc.register(register_input("a@example.com")).await.unwrap();
        let wrong = svc.login(LoginInput { email: "a@example.com".into(), password: "nope-nope".into() }).await;
        assert!(matches!(wrong, Err(AuthError::Unauthorized)));
        let unknown = svc.login(LoginInput { email: "b@example.com".into(), password: "whatever1".into() }).await;
        assert!(matches!(unknown, Err(AuthError::Unauthorized)));
    }

    #[tokio::test]
    async fn short_password_and_bad_role_are_rejected() {
        let svc = svc();
        let mut input = register_input("c@example.com");
        input.password = "short".into();
        assert!(matches!(svc.register(input).await, Err(AuthError::Validation(_))));

        let mut input = register_input("c@example.com");
        input.role = Some("root".into());
        assert!(matches!(svc.register(input).await, Err(AuthError::Validation(_))));
    }
}
