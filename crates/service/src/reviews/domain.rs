use chrono::{DateTime, FixedOffset};
use models::review::{self, Model};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ServiceError;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateReviewInput {
    pub provider_id: Option<Uuid>,
    pub rating: Option<f64>,
    pub comment: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateReviewInput {
    pub rating: Option<f64>,
    pub comment: Option<String>,
}

impl CreateReviewInput {
    /// `author` is the caller's user id when the token carried one.
    pub fn into_model(self, author: Option<Uuid>, now: DateTime<FixedOffset>) -> Result<Model, ServiceError> {
        let rating = self.rating.ok_or_else(|| ServiceError::required("rating"))?;
        review::validate_rating(rating)?;
        Ok(Model {
            review_id: Uuid::new_v4(),
            provider_id: self.provider_id.ok_or_else(|| ServiceError::required("provider_id"))?,
            user_id: author,
            rating,
            comment: self.comment,
            created_at: now,
            updated_at: now,
        })
    }
}

impl UpdateReviewInput {
    pub fn apply(self, m: &mut Model, now: DateTime<FixedOffset>) -> Result<(), ServiceError> {
        if let Some(rating) = self.rating {
            review::validate_rating(rating)?;
            m.rating = rating;
        }
        if let Some(comment) = self.comment { m.comment = Some(comment); }
        m.updated_at = now;
        Ok(())
    }
}
