//! Create `documents` table (documentation, activity and report entries).
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Documents::Table)
                    .if_not_exists()
                    .col(uuid(Documents::Id).primary_key())
                    .col(string_len(Documents::Title, 512).not_null())
                    .col(string_len(Documents::Slug, 512).not_null())
                    .col(text(Documents::Description).not_null())
                    .col(text(Documents::Content).not_null())
                    .col(json_binary(Documents::Attachments).not_null())
                    .col(string_len(Documents::DocType, 64).not_null())
                    .col(timestamp_with_time_zone(Documents::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Documents::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Documents::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Documents { Table, Id, Title, Slug, Description, Content, Attachments, DocType, CreatedAt, UpdatedAt }
