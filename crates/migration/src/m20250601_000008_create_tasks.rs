//! Create `tasks` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Tasks::Table)
                    .if_not_exists()
                    .col(uuid(Tasks::Id).primary_key())
                    .col(string_len(Tasks::Title, 512).not_null())
                    .col(text(Tasks::Description).not_null())
                    .col(string_len(Tasks::DueDate, 64).not_null())
                    .col(string_len(Tasks::Assignee, 255).not_null())
                    .col(string_len(Tasks::Priority, 32).not_null())
                    .col(string_len(Tasks::Status, 32).not_null())
                    .col(string_len(Tasks::RemindAt, 64).not_null())
                    .col(timestamp_with_time_zone(Tasks::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Tasks::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Tasks::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Tasks { Table, Id, Title, Description, DueDate, Assignee, Priority, Status, RemindAt, CreatedAt, UpdatedAt }
