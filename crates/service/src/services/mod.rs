//! Service offerings listed by providers.

pub mod domain;
pub mod repository;
pub mod catalog;

pub use catalog::ServiceCatalog;
pub use domain::{CreateServiceInput, UpdateServiceInput};
pub use repository::ServiceRepository;
