//! Provider profiles attached to user accounts.

pub mod domain;
pub mod repository;
pub mod catalog;

pub use catalog::ProviderCatalog;
pub use domain::{CreateProviderInput, UpdateProviderInput};
pub use repository::ProviderRepository;
