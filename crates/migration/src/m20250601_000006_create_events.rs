//! Create `events` table. `date` and `time` are free-form strings as entered by editors.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Events::Table)
                    .if_not_exists()
                    .col(uuid(Events::Id).primary_key())
                    .col(string_len(Events::Title, 512).not_null())
                    .col(string_len(Events::Slug, 512).not_null())
                    .col(string_len(Events::Date, 64).not_null())
                    .col(string_len(Events::Time, 128).not_null())
                    .col(text(Events::Location).not_null())
                    .col(text(Events::Description).not_null())
                    .col(text(Events::BannerImage).not_null())
                    .col(integer(Events::Capacity).not_null())
                    .col(timestamp_with_time_zone(Events::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Events::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Events::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Events { Table, Id, Title, Slug, Date, Time, Location, Description, BannerImage, Capacity, CreatedAt, UpdatedAt }
