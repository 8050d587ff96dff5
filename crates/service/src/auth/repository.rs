use async_trait::async_trait;
use models::user;
use uuid::Uuid;

use crate::errors::ServiceError;

/// Repository abstraction for user accounts.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_pk(&self, id: Uuid) -> Result<Option<user::Model>, ServiceError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<user::Model>, ServiceError>;
    /// Fails with `ServiceError::Conflict` when the email is taken.
    async fn create(&self, m: user::Model) -> Result<user::Model, ServiceError>;
}
