use sea_orm::{entity::prelude::*, DatabaseConnection, Set, Unchanged};
use serde::{Deserialize, Serialize};

use crate::{errors::ModelError, user};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "service_provider")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub provider_id: Uuid,
    pub user_id: Uuid,
    pub certification: bool,
    #[sea_orm(column_type = "Text", nullable)]
    pub bio: Option<String>,
    pub location: Option<String>,
    pub profile_picture: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { User }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::User => Entity::belongs_to(user::Entity)
                .from(Column::UserId)
                .to(user::Column::UserId)
                .into(),
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub async fn insert(db: &DatabaseConnection, m: Model) -> Result<Model, ModelError> {
    let am = ActiveModel {
        provider_id: Set(m.provider_id),
        user_id: Set(m.user_id),
        certification: Set(m.certification),
        bio: Set(m.bio),
        location: Set(m.location),
        profile_picture: Set(m.profile_picture),
        created_at: Set(m.created_at),
        updated_at: Set(m.updated_at),
    };
    Ok(am.insert(db).await?)
}

/// Persist every mutable column of an existing row.
pub async fn save(db: &DatabaseConnection, m: Model) -> Result<Model, ModelError> {
    let am = ActiveModel {
        provider_id: Unchanged(m.provider_id),
        user_id: Unchanged(m.user_id),
        certification: Set(m.certification),
        bio: Set(m.bio),
        location: Set(m.location),
        profile_picture: Set(m.profile_picture),
        created_at: Unchanged(m.created_at),
        updated_at: Set(m.updated_at),
    };
    Ok(am.update(db).await?)
}
