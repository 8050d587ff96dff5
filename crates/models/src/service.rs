use sea_orm::{entity::prelude::*, DatabaseConnection, Set, Unchanged};
use serde::{Deserialize, Serialize};

use crate::{errors::ModelError, service_provider};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "service")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub service_id: Uuid,
    pub provider_id: Uuid,
    pub name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    #[sea_orm(column_type = "Double")]
    pub price: f64,
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

pub fn validate_name(name: &str) -> Result<(), ModelError> {
    if name.trim().is_empty() {
        return Err(ModelError::Validation("name required".into()));
    }
    Ok(())
}

pub fn validate_price(price: f64) -> Result<(), ModelError> {
    if !price.is_finite() || price < 0.0 {
        return Err(ModelError::Validation("price must be a non-negative number".into()));
    }
    Ok(())
}

pub fn validate(m: &Model) -> Result<(), ModelError> {
    validate_name(&m.name)?;
    validate_price(m.price)
}

pub async fn insert(db: &DatabaseConnection, m: Model) -> Result<Model, ModelError> {
    validate(&m)?;
    let am = ActiveModel {
        service_id: Set(m.service_id),
        provider_id: Set(m.provider_id),
        name: Set(m.name),
        description: Set(m.description),
        price: Set(m.price),
        created_at: Set(m.created_at),
        updated_at: Set(m.updated_at),
    };
    Ok(am.insert(db).await?)
}

pub async fn save(db: &DatabaseConnection, m: Model) -> Result<Model, ModelError> {
    validate(&m)?;
    let am = ActiveModel {
        service_id: Unchanged(m.service_id),
        provider_id: Unchanged(m.provider_id),
        name: Set(m.name),
        description: Set(m.description),
        price: Set(m.price),
        created_at: Unchanged(m.created_at),
        updated_at: Set(m.updated_at),
    };
    Ok(am.update(db).await?)
}
