use models::errors::ModelError;
use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("database error: {0}")]
    Db(String),
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self { Self::NotFound(format!("{} not found", entity)) }

    pub fn required(field: &str) -> Self { Self::Validation(format!("{} is required", field)) }
}

impl From<ModelError> for ServiceError {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::Validation(msg) => ServiceError::Validation(msg),
            ModelError::NotFound(what) => ServiceError::not_found(&what),
            ModelError::Conflict(msg) => ServiceError::Conflict(msg),
            ModelError::Db(msg) => ServiceError::Db(msg),
        }
    }
}

impl From<DbErr> for ServiceError {
    fn from(e: DbErr) -> Self { ModelError::from(e).into() }
}
