use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait};
use uuid::Uuid;

use models::{review, service, service_provider, user};

use crate::auth::repository::UserRepository;
use crate::errors::ServiceError;
use crate::providers::ProviderRepository;
use crate::reviews::ReviewRepository;
use crate::services::ServiceRepository;

/// SeaORM-backed repository implementation.
#[derive(Clone)]
pub struct SeaOrmRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait]
impl ServiceRepository for SeaOrmRepository {
    async fn find_by_pk(&self, id: Uuid) -> Result<Option<service::Model>, ServiceError> {
        Ok(service::Entity::find_by_id(id).one(&self.db).await?)
    }

    async fn find_all(&self) -> Result<Vec<service::Model>, ServiceError> {
        Ok(service::Entity::find().all(&self.db).await?)
    }

    async fn create(&self, m: service::Model) -> Result<service::Model, ServiceError> {
        Ok(service::insert(&self.db, m).await?)
    }

    async fn save(&self, m: service::Model) -> Result<service::Model, ServiceError> {
        Ok(service::save(&self.db, m).await?)
    }

    async fn destroy(&self, id: Uuid) -> Result<bool, ServiceError> {
        let res = service::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(res.rows_affected > 0)
    }
}

#[async_trait]
impl ReviewRepository for SeaOrmRepository {
    async fn find_by_pk(&self, id: Uuid) -> Result<Option<review::Model>, ServiceError> {
        Ok(review::Entity::find_by_id(id).one(&self.db).await?)
    }

    async fn find_all(&self, provider_id: Option<Uuid>) -> Result<Vec<review::Model>, ServiceError> {
        Ok(review::find_all(&self.db, provider_id).await?)
    }

    async fn create(&self, m: review::Model) -> Result<review::Model, ServiceError> {
        Ok(review::insert(&self.db, m).await?)
    }

    async fn save(&self, m: review::Model) -> Result<review::Model, ServiceError> {
        Ok(review::save(&self.db, m).await?)
    }

    async fn destroy(&self, id: Uuid) -> Result<bool, ServiceError> {
        let res = review::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(res.rows_affected > 0)
    }
}

#[async_trait]
impl ProviderRepository for SeaOrmRepository {
    async fn find_by_pk(&self, id: Uuid) -> Result<Option<service_provider::Model>, ServiceError> {
        Ok(service_provider::Entity::find_by_id(id).one(&self.db).await?)
    }

    async fn find_all(&self) -> Result<Vec<service_provider::Model>, ServiceError> {
        Ok(service_provider::Entity::find().all(&self.db).await?)
    }

    async fn create(&self, m: service_provider::Model) -> Result<service_provider::Model, ServiceError> {
        Ok(service_provider::insert(&self.db, m).await?)
    }

    async fn save(&self, m: service_provider::Model) -> Result<service_provider::Model, ServiceError> {
        Ok(service_provider::save(&self.db, m).await?)
    }

    async fn destroy(&self, id: Uuid) -> Result<bool, ServiceError> {
        // services and reviews go with it via ON DELETE CASCADE
        let res = service_provider::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(res.rows_affected > 0)
    }
}

#[async_trait]
impl UserRepository for SeaOrmRepository {
    async fn find_by_pk(&self, id: Uuid) -> Result<Option<user::Model>, ServiceError> {
        Ok(user::Entity::find_by_id(id).one(&self.db).await?)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<user::Model>, ServiceError> {
        Ok(user::find_by_email(&self.db, email).await?)
    }

    async fn create(&self, m: user::Model) -> Result<user::Model, ServiceError> {
        Ok(user::insert(&self.db, m).await?)
    }
}
