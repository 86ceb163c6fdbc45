//! Create `articles` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Articles::Table)
                    .if_not_exists()
                    .col(uuid(Articles::Id).primary_key())
                    .col(string_len(Articles::Title, 512).not_null())
                    .col(string_len(Articles::Slug, 512).not_null())
                    .col(text(Articles::Summary).not_null())
                    .col(text(Articles::Content).not_null())
                    .col(text(Articles::CoverImage).not_null())
                    .col(json_binary(Articles::Tags).not_null())
                    .col(timestamp_with_time_zone(Articles::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Articles::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Articles::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Articles { Table, Id, Title, Slug, Summary, Content, CoverImage, Tags, CreatedAt, UpdatedAt }
