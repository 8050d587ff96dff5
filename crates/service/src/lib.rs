//! Service layer providing business-oriented CRUD operations on top of models.
//! - Catalogs own validation, id generation, timestamp stamping and partial updates.
//! - Repository traits are the persistence seam; `repo` holds the SeaORM and in-memory backends.
//! - `auth` covers registration, login and bearer token verification.

use chrono::{DateTime, FixedOffset, Utc};

pub mod errors;
pub mod auth;
pub mod services;
pub mod reviews;
pub mod providers;
pub mod repo;
#[cfg(test)]
mod test_support;

pub use errors::ServiceError;

/// Timestamp stamped onto `created_at`/`updated_at`.
pub(crate) fn now() -> DateTime<FixedOffset> {
    Utc::now().into()
}
