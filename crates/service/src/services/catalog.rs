use std::sync::Arc;

use models::service::Model;
use tracing::{info, instrument};
use uuid::Uuid;

use super::domain::{CreateServiceInput, UpdateServiceInput};
use super::repository::ServiceRepository;
use crate::errors::ServiceError;
use crate::providers::ProviderRepository;

/// Application service for service offerings.
pub struct ServiceCatalog {
    services: Arc<dyn ServiceRepository>,
    providers: Arc<dyn ProviderRepository>,
}

impl ServiceCatalog {
    pub fn new(services: Arc<dyn ServiceRepository>, providers: Arc<dyn ProviderRepository>) -> Self {
        Self { services, providers }
    }

    pub async fn get(&self, id: Uuid) -> Result<Option<Model>, ServiceError> {
        self.services.find_by_pk(id).await
    }

    pub async fn list(&self) -> Result<Vec<Model>, ServiceError> {
        self.services.find_all().await
    }

    /// Create a service owned by an existing provider.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use service::repo::memory::MemoryRepository;
    /// use service::services::{CreateServiceInput, ServiceCatalog};
    ///
    /// let repo = Arc::new(MemoryRepository::default());
    /// let catalog = ServiceCatalog::new(repo.clone(), repo.clone());
    /// let missing_provider = CreateServiceInput {
    ///     name: Some("Haircut".into()),
    ///     description: None,
    ///     price: Some(20.0),
    ///     provider_id: Some(uuid::Uuid::new_v4()),
    /// };
    /// assert!(tokio_test::block_on(catalog.create(missing_provider)).is_err());
    /// ```
    #[instrument(skip(self, input))]
    pub async fn create(&self, input: CreateServiceInput) -> Result<Model, ServiceError> {
        let m = input.into_model(crate::now())?;
        if self.providers.find_by_pk(m.provider_id).await?.is_none() {
            return Err(ServiceError::Validation("provider not found".into()));
        }
        let created = self.services.create(m).await?;
        info!(service_id = %created.service_id, provider_id = %created.provider_id, "service_created");
        Ok(created)
    }

    /// `Ok(None)` when the service does not exist.
    pub async fn update(&self, id: Uuid, input: UpdateServiceInput) -> Result<Option<Model>, ServiceError> {
        let Some(mut m) = self.services.find_by_pk(id).await? else { return Ok(None) };
        input.apply(&mut m, crate::now())?;
        match self.services.save(m).await {
            Ok(saved) => Ok(Some(saved)),
            Err(ServiceError::NotFound(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    pub async fn delete(&self, id: Uuid) -> Result<bool, ServiceError> {
        self.services.destroy(id).await
    }
}
