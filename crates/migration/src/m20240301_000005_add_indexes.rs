use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Providers: lookup by owning user
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_service_provider_user")
                    .table(ServiceProvider::Table)
                    .col(ServiceProvider::UserId)
                    .to_owned(),
            )
            .await?;

        // Services: listing per provider
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_service_provider_id")
                    .table(Service::Table)
                    .col(Service::ProviderId)
                    .to_owned(),
            )
            .await?;

        // Reviews: the provider filter on GET /api/reviews
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_review_provider_id")
                    .table(Review::Table)
                    .col(Review::ProviderId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_review_provider_id").table(Review::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_service_provider_id").table(Service::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_service_provider_user").table(ServiceProvider::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ServiceProvider { Table, UserId }

#[derive(DeriveIden)]
enum Service { Table, ProviderId }

#[derive(DeriveIden)]
enum Review { Table, ProviderId }
