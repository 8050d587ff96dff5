//! Create `service_provider` table with FK to `user`.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ServiceProvider::Table)
                    .if_not_exists()
                    .col(uuid(ServiceProvider::ProviderId).primary_key())
                    .col(uuid(ServiceProvider::UserId).not_null())
                    .col(boolean(ServiceProvider::Certification).not_null())
                    .col(ColumnDef::new(ServiceProvider::Bio).text().null())
                    .col(ColumnDef::new(ServiceProvider::Location).string_len(255).null())
                    .col(ColumnDef::new(ServiceProvider::ProfilePicture).string_len(512).null())
                    .col(timestamp_with_time_zone(ServiceProvider::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(ServiceProvider::UpdatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_service_provider_user")
                            .from(ServiceProvider::Table, ServiceProvider::UserId)
                            .to(User::Table, User::UserId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(ServiceProvider::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum ServiceProvider {
    Table,
    ProviderId,
    UserId,
    Certification,
    Bio,
    Location,
    ProfilePicture,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum User { Table, UserId }
