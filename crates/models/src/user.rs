use sea_orm::{entity::prelude::*, DatabaseConnection, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

pub const ROLES: [&str; 3] = ["customer", "provider", "admin"];

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: Uuid,
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    pub role: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_email(email: &str) -> Result<(), ModelError> {
    let email = email.trim();
    if email.is_empty() || !email.contains('@') {
        return Err(ModelError::Validation("invalid email".into()));
    }
    Ok(())
}

pub fn validate_name(name: &str) -> Result<(), ModelError> {
    if name.trim().is_empty() {
        return Err(ModelError::Validation("name required".into()));
    }
    Ok(())
}

pub fn validate_role(role: &str) -> Result<(), ModelError> {
    if !ROLES.contains(&role) {
        return Err(ModelError::Validation(format!("role must be one of {}", ROLES.join(", "))));
    }
    Ok(())
}

pub async fn insert(db: &DatabaseConnection, m: Model) -> Result<Model, ModelError> {
    validate_name(&m.name)?;
    validate_email(&m.email)?;
    validate_role(&m.role)?;
    let am = ActiveModel {
        user_id: Set(m.user_id),
        name: Set(m.name),
        email: Set(m.email),
        password_hash: Set(m.password_hash),
        role: Set(m.role),
        created_at: Set(m.created_at),
        updated_at: Set(m.updated_at),
    };
    Ok(am.insert(db).await?)
}

pub async fn find_by_email(db: &DatabaseConnection, email: &str) -> Result<Option<Model>, ModelError> {
    Ok(Entity::find().filter(Column::Email.eq(email)).one(db).await?)
}
