use async_trait::async_trait;
use models::service;
use uuid::Uuid;

use crate::errors::ServiceError;

/// Persistence seam for service offerings.
#[async_trait]
pub trait ServiceRepository: Send + Sync {
    async fn find_by_pk(&self, id: Uuid) -> Result<Option<service::Model>, ServiceError>;
    async fn find_all(&self) -> Result<Vec<service::Model>, ServiceError>;
    async fn create(&self, m: service::Model) -> Result<service::Model, ServiceError>;
    async fn save(&self, m: service::Model) -> Result<service::Model, ServiceError>;
    /// Returns false when no row matched.
    async fn destroy(&self, id: Uuid) -> Result<bool, ServiceError>;
}
