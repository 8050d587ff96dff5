//! Create `service` table.
//! Offerings listed by a provider; removed together with the provider.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Service::Table)
                    .if_not_exists()
                    .col(uuid(Service::ServiceId).primary_key())
                    .col(uuid(Service::ProviderId).not_null())
                    .col(string_len(Service::Name, 255).not_null())
                    .col(ColumnDef::new(Service::Description).text().null())
                    .col(double(Service::Price).not_null())
                    .col(timestamp_with_time_zone(Service::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Service::UpdatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_service_provider")
                            .from(Service::Table, Service::ProviderId)
                            .to(ServiceProvider::Table, ServiceProvider::ProviderId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Service::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Service {
    Table,
    ServiceId,
    ProviderId,
    Name,
    Description,
    Price,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum ServiceProvider { Table, ProviderId }
