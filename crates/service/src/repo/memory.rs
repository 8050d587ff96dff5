use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use uuid::Uuid;

use models::{review, service, service_provider, user};

use crate::auth::repository::UserRepository;
use crate::errors::ServiceError;
use crate::providers::ProviderRepository;
use crate::reviews::ReviewRepository;
use crate::services::ServiceRepository;

#[derive(Default)]
struct Tables {
    users: Vec<user::Model>,
    providers: Vec<service_provider::Model>,
    services: Vec<service::Model>,
    reviews: Vec<review::Model>,
}

/// In-process store with the same observable behavior as the Postgres schema:
/// unique emails, cascading provider deletes, rows listed in insertion order.
#[derive(Default)]
pub struct MemoryRepository {
    tables: Mutex<Tables>,
}

impl MemoryRepository {
    fn tables(&self) -> Result<MutexGuard<'_, Tables>, ServiceError> {
        self.tables.lock().map_err(|_| ServiceError::Db("memory store lock poisoned".into()))
    }
}

/// Replace the row whose key matches, or report it missing.
fn replace<T>(rows: &mut [T], m: T, same: impl Fn(&T, &T) -> bool, entity: &str) -> Result<T, ServiceError>
where
    T: Clone,
{
    let slot = rows.iter_mut().find(|r| same(r, &m)).ok_or_else(|| ServiceError::not_found(entity))?;
    *slot = m.clone();
    Ok(m)
}

/// Remove the row whose key matches; false when nothing matched.
fn remove<T>(rows: &mut Vec<T>, matches: impl Fn(&T) -> bool) -> bool {
    let before = rows.len();
    rows.retain(|r| !matches(r));
    rows.len() != before
}

#[async_trait]
impl ServiceRepository for MemoryRepository {
    async fn find_by_pk(&self, id: Uuid) -> Result<Option<service::Model>, ServiceError> {
        Ok(self.tables()?.services.iter().find(|s| s.service_id == id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<service::Model>, ServiceError> {
        Ok(self.tables()?.services.clone())
    }

    async fn create(&self, m: service::Model) -> Result<service::Model, ServiceError> {
        self.tables()?.services.push(m.clone());
        Ok(m)
    }

    async fn save(&self, m: service::Model) -> Result<service::Model, ServiceError> {
        replace(&mut self.tables()?.services, m, |a, b| a.service_id == b.service_id, "service")
    }

    async fn destroy(&self, id: Uuid) -> Result<bool, ServiceError> {
        Ok(remove(&mut self.tables()?.services, |s| s.service_id == id))
    }
}

#[async_trait]
impl ReviewRepository for MemoryRepository {
    async fn find_by_pk(&self, id: Uuid) -> Result<Option<review::Model>, ServiceError> {
        Ok(self.tables()?.reviews.iter().find(|r| r.review_id == id).cloned())
    }

    async fn find_all(&self, provider_id: Option<Uuid>) -> Result<Vec<review::Model>, ServiceError> {
        let tables = self.tables()?;
        let rows = tables
            .reviews
            .iter()
            .filter(|r| provider_id.map_or(true, |pid| r.provider_id == pid))
            .cloned()
            .collect();
        Ok(rows)
    }

    async fn create(&self, m: review::Model) -> Result<review::Model, ServiceError> {
        self.tables()?.reviews.push(m.clone());
        Ok(m)
    }

    async fn save(&self, m: review::Model) -> Result<review::Model, ServiceError> {
        replace(&mut self.tables()?.reviews, m, |a, b| a.review_id == b.review_id, "review")
    }

    async fn destroy(&self, id: Uuid) -> Result<bool, ServiceError> {
        Ok(remove(&mut self.tables()?.reviews, |r| r.review_id == id))
    }
}

#[async_trait]
impl ProviderRepository for MemoryRepository {
    async fn find_by_pk(&self, id: Uuid) -> Result<Option<service_provider::Model>, ServiceError> {
        Ok(self.tables()?.providers.iter().find(|p| p.provider_id == id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<service_provider::Model>, ServiceError> {
        Ok(self.tables()?.providers.clone())
    }

    async fn create(&self, m: service_provider::Model) -> Result<service_provider::Model, ServiceError> {
        self.tables()?.providers.push(m.clone());
        Ok(m)
    }

    async fn save(&self, m: service_provider::Model) -> Result<service_provider::Model, ServiceError> {
        replace(&mut self.tables()?.providers, m, |a, b| a.provider_id == b.provider_id, "provider")
    }

    async fn destroy(&self, id: Uuid) -> Result<bool, ServiceError> {
        let mut tables = self.tables()?;
        if !remove(&mut tables.providers, |p| p.provider_id == id) {
            return Ok(false);
        }
        tables.services.retain(|s| s.provider_id != id);
        tables.reviews.retain(|r| r.provider_id != id);
        Ok(true)
    }
}

#[async_trait]
impl UserRepository for MemoryRepository {
    async fn find_by_pk(&self, id: Uuid) -> Result<Option<user::Model>, ServiceError> {
        Ok(self.tables()?.users.iter().find(|u| u.user_id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<user::Model>, ServiceError> {
        Ok(self.tables()?.users.iter().find(|u| u.email == email).cloned())
    }

    async fn create(&self, m: user::Model) -> Result<user::Model, ServiceError> {
        let mut tables = self.tables()?;
        if tables.users.iter().any(|u| u.email == m.email) {
            return Err(ServiceError::Conflict(format!("email {} already registered", m.email)));
        }
        tables.users.push(m.clone());
        Ok(m)
    }
}
