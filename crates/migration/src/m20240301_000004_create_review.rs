//! Create `review` table.
//!
//! `user_id` records the author when the creating token carried one; it is
//! informational and has no FK so reviews outlive their author.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Review::Table)
                    .if_not_exists()
                    .col(uuid(Review::ReviewId).primary_key())
                    .col(uuid(Review::ProviderId).not_null())
                    .col(ColumnDef::new(Review::UserId).uuid().null())
                    .col(double(Review::Rating).not_null())
                    .col(ColumnDef::new(Review::Comment).text().null())
                    .col(timestamp_with_time_zone(Review::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Review::UpdatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_review_provider")
                            .from(Review::Table, Review::ProviderId)
                            .to(ServiceProvider::Table, ServiceProvider::ProviderId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Review::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Review {
    Table,
    ReviewId,
    ProviderId,
    UserId,
    Rating,
    Comment,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum ServiceProvider { Table, ProviderId }
