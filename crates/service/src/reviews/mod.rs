//! Reviews left for providers.

pub mod domain;
pub mod repository;
pub mod catalog;

pub use catalog::ReviewCatalog;
pub use domain::{CreateReviewInput, UpdateReviewInput};
pub use repository::ReviewRepository;
