use std::sync::Arc;

use service::auth::{AuthService, TokenKeys};
use service::providers::ProviderCatalog;
use service::repo::Store;
use service::reviews::ReviewCatalog;
use service::services::ServiceCatalog;

/// Shared handler state; cloned per request.
#[derive(Clone)]
pub struct AppState {
    pub services: Arc<ServiceCatalog>,
    pub reviews: Arc<ReviewCatalog>,
    pub providers: Arc<ProviderCatalog>,
    pub auth: Arc<AuthService>,
}

impl AppState {
    /// Wire every catalog onto one backend.
    pub fn with_store<S: Store>(store: Arc<S>, keys: TokenKeys) -> Self {
        Self {
            services: Arc::new(ServiceCatalog::new(store.clone(), store.clone())),
            reviews: Arc::new(ReviewCatalog::new(store.clone(), store.clone())),
            providers: Arc::new(ProviderCatalog::new(store.clone(), store.clone())),
            auth: Arc::new(AuthService::new(store, keys)),
        }
    }
}
