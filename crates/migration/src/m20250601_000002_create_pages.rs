//! Create `pages` table: one row per logical page slot (`page_id`), sections kept as JSONB.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Pages::Table)
                    .if_not_exists()
                    .col(uuid(Pages::Id).primary_key())
                    .col(string_len(Pages::PageId, 128).unique_key().not_null())
                    .col(text(Pages::HeroTitle).not_null())
                    .col(text(Pages::HeroSubtitle).not_null())
                    .col(text(Pages::HeroDescription).not_null())
                    .col(text(Pages::HeroImage).not_null())
                    .col(json_binary(Pages::Sections).not_null())
                    .col(timestamp_with_time_zone(Pages::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Pages::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Pages { Table, Id, PageId, HeroTitle, HeroSubtitle, HeroDescription, HeroImage, Sections, UpdatedAt }
