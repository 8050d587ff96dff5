use std::sync::Arc;

use models::service_provider::Model;
use tracing::{info, instrument};
use uuid::Uuid;

use super::domain::{CreateProviderInput, UpdateProviderInput};
use super::repository::ProviderRepository;
use crate::auth::repository::UserRepository;
use crate::errors::ServiceError;

pub struct ProviderCatalog {
    providers: Arc<dyn ProviderRepository>,
    users: Arc<dyn UserRepository>,
}

impl ProviderCatalog {
    pub fn new(providers: Arc<dyn ProviderRepository>, users: Arc<dyn UserRepository>) -> Self {
        Self { providers, users }
    }

    pub async fn get(&self, id: Uuid) -> Result<Option<Model>, ServiceError> {
        self.providers.find_by_pk(id).await
    }

    pub async fn list(&self) -> Result<Vec<Model>, ServiceError> {
        self.providers.find_all().await
    }

    #[instrument(skip(self, input))]
    pub async fn create(&self, input: CreateProviderInput, caller: Option<Uuid>) -> Result<Model, ServiceError> {
        let m = input.into_model(caller, crate::now())?;
        if self.users.find_by_pk(m.user_id).await?.is_none() {
            return Err(ServiceError::Validation("user not found".into()));
        }
        let created = self.providers.create(m).await?;
        info!(provider_id = %created.provider_id, user_id = %created.user_id, "provider_created");
        Ok(created)
    }

    pub async fn update(&self, id: Uuid, input: UpdateProviderInput) -> Result<Option<Model>, ServiceError> {
        let Some(mut m) = self.providers.find_by_pk(id).await? else { return Ok(None) };
        input.apply(&mut m, crate::now());
        match self.providers.save(m).await {
            Ok(saved) => Ok(Some(saved)),
            Err(ServiceError::NotFound(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    pub async fn delete(&self, id: Uuid) -> Result<bool, ServiceError> {
        self.providers.destroy(id).await
    }
}
