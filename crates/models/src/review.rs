use sea_orm::{entity::prelude::*, DatabaseConnection, Set, Unchanged};
use serde::{Deserialize, Serialize};

use crate::{errors::ModelError, service_provider};

pub const MAX_RATING: f64 = 5.0;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "review")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub review_id: Uuid,
    pub provider_id: Uuid,
    pub user_id: Option<Uuid>,
    #[sea_orm(column_type = "Double")]
    pub rating: f64,
    #[sea_orm(column_type = "Text", nullable)]
    pub comment: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Provider }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Provider => Entity::belongs_to(service_provider::Entity)
                .from(Column::ProviderId)
                .to(service_provider::Column::ProviderId)
                .into(),
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_rating(rating: f64) -> Result<(), ModelError> {
    if !rating.is_finite() || !(0.0..=MAX_RATING).contains(&rating) {
        return Err(ModelError::Validation(format!("rating must be between 0 and {MAX_RATING}")));
    }
    Ok(())
}

pub async fn insert(db: &DatabaseConnection, m: Model) -> Result<Model, ModelError> {
    validate_rating(m.rating)?;
    let am = ActiveModel {
        review_id: Set(m.review_id),
        provider_id: Set(m.provider_id),
        user_id: Set(m.user_id),
        rating: Set(m.rating),
        comment: Set(m.comment),
        created_at: Set(m.created_at),
        updated_at: Set(m.updated_at),
    };
    Ok(am.insert(db).await?)
}

pub async fn save(db: &DatabaseConnection, m: Model) -> Result<Model, ModelError> {
    validate_rating(m.rating)?;
    let am = ActiveModel {
        review_id: Unchanged(m.review_id),
        provider_id: Unchanged(m.provider_id),
        user_id: Unchanged(m.user_id),
        rating: Set(m.rating),
        comment: Set(m.comment),
        created_at: Unchanged(m.created_at),
        updated_at: Set(m.updated_at),
    };
    Ok(am.update(db).await?)
}

/// All reviews, optionally restricted to one provider.
pub async fn find_all(db: &DatabaseConnection, provider_id: Option<Uuid>) -> Result<Vec<Model>, ModelError> {
    let mut finder = Entity::find();
    if let Some(pid) = provider_id {
        finder = finder.filter(Column::ProviderId.eq(pid));
    }
    Ok(finder.all(db).await?)
}
