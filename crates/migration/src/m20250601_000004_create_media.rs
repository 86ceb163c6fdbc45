//! Create `media` table. The `type` column holds `image` or `video` (not enforced).
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Media::Table)
                    .if_not_exists()
                    .col(uuid(Media::Id).primary_key())
                    .col(string_len(Media::Title, 512).not_null())
                    .col(string_len(Media::Type, 32).not_null())
                    .col(text(Media::Url).not_null())
                    .col(text(Media::Description).not_null())
                    .col(timestamp_with_time_zone(Media::CreatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Media::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Media { Table, Id, Title, Type, Url, Description, CreatedAt }
