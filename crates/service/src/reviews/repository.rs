use async_trait::async_trait;
use models::review;
use uuid::Uuid;

use crate::errors::ServiceError;

#[async_trait]
pub trait ReviewRepository: Send + Sync {
    async fn find_by_pk(&self, id: Uuid) -> Result<Option<review::Model>, ServiceError>;
    /// All reviews, or only those of `provider_id` when given.
    async fn find_all(&self, provider_id: Option<Uuid>) -> Result<Vec<review::Model>, ServiceError>;
    async fn create(&self, m: review::Model) -> Result<review::Model, ServiceError>;
    async fn save(&self, m: review::Model) -> Result<review::Model, ServiceError>;
    async fn destroy(&self, id: Uuid) -> Result<bool, ServiceError>;
}
