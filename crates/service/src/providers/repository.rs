use async_trait::async_trait;
use models::service_provider;
use uuid::Uuid;

use crate::errors::ServiceError;

#[async_trait]
pub trait ProviderRepository: Send + Sync {
    async fn find_by_pk(&self, id: Uuid) -> Result<Option<service_provider::Model>, ServiceError>;
    async fn find_all(&self) -> Result<Vec<service_provider::Model>, ServiceError>;
    async fn create(&self, m: service_provider::Model) -> Result<service_provider::Model, ServiceError>;
    async fn save(&self, m: service_provider::Model) -> Result<service_provider::Model, ServiceError>;
    /// Deleting a provider also removes its services and reviews.
    async fn destroy(&self, id: Uuid) -> Result<bool, ServiceError>;
}
