//! Create `members` table. Members carry no lifecycle timestamps.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Members::Table)
                    .if_not_exists()
                    .col(uuid(Members::Id).primary_key())
                    .col(string_len(Members::Name, 255).not_null())
                    .col(string_len(Members::Position, 255).not_null())
                    .col(string_len(Members::Division, 255).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Members::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Members { Table, Id, Name, Position, Division }
