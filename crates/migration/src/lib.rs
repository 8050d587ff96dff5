//! Migrator registering entity-specific migrations in dependency order.
//! Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20240301_000001_create_user;
mod m20240301_000002_create_service_provider;
mod m20240301_000003_create_service;
mod m20240301_000004_create_review;
mod m20240301_000005_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240301_000001_create_user::Migration),
            Box::new(m20240301_000002_create_service_provider::Migration),
            Box::new(m20240301_000003_create_service::Migration),
            Box::new(m20240301_000004_create_review::Migration),
            // Indexes should always be applied last
            Box::new(m20240301_000005_add_indexes::Migration),
        ]
    }
}
