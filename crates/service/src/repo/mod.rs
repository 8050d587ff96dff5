//! Persistence backends implementing every repository trait.
//!
//! `seaorm` is the production store; `memory` keeps tables in process and is
//! used by tests and `MARKETPLACE_STORE=memory` runs.

pub mod seaorm;
pub mod memory;

use crate::{
    auth::repository::UserRepository, providers::ProviderRepository, reviews::ReviewRepository,
    services::ServiceRepository,
};

/// A backend able to serve every resource.
pub trait Store: ServiceRepository + ReviewRepository + ProviderRepository + UserRepository + 'static {}

impl<T> Store for T where T: ServiceRepository + ReviewRepository + ProviderRepository + UserRepository + 'static {}
