use std::sync::Arc;

use models::review::Model;
use tracing::{info, instrument};
use uuid::Uuid;

use super::domain::{CreateReviewInput, UpdateReviewInput};
use super::repository::ReviewRepository;
use crate::errors::ServiceError;
use crate::providers::ProviderRepository;

pub struct ReviewCatalog {
    reviews: Arc<dyn ReviewRepository>,
    providers: Arc<dyn ProviderRepository>,
}

impl ReviewCatalog {
    pub fn new(reviews: Arc<dyn ReviewRepository>, providers: Arc<dyn ProviderRepository>) -> Self {
        Self { reviews, providers }
    }

    pub async fn get(&self, id: Uuid) -> Result<Option<Model>, ServiceError> {
        self.reviews.find_by_pk(id).await
    }

    pub async fn list(&self, provider_id: Option<Uuid>) -> Result<Vec<Model>, ServiceError> {
        self.reviews.find_all(provider_id).await
    }

    #[instrument(skip(self, input))]
    pub async fn create(&self, input: CreateReviewInput, author: Option<Uuid>) -> Result<Model, ServiceError> {
        let m = input.into_model(author, crate::now())?;
        if self.providers.find_by_pk(m.provider_id).await?.is_none() {
            return Err(ServiceError::Validation("provider not found".into()));
        }
        let created = self.reviews.create(m).await?;
        info!(review_id = %created.review_id, provider_id = %created.provider_id, "review_created");
        Ok(created)
    }

    pub async fn update(&self, id: Uuid, input: UpdateReviewInput) -> Result<Option<Model>, ServiceError> {
        let Some(mut m) = self.reviews.find_by_pk(id).await? else { return Ok(None) };
        input.apply(&mut m, crate::now())?;
        match self.reviews.save(m).await {
            Ok(saved) => Ok(Some(saved)),
            Err(ServiceError::NotFound(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    pub async fn delete(&self, id: Uuid) -> Result<bool, ServiceError> {
        self.reviews.destroy(id).await
    }
}
