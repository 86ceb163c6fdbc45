//! Create `registrations` table.
//!
//! `event_id` is a plain column without a foreign key: registrations outlive deleted events.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Registrations::Table)
                    .if_not_exists()
                    .col(uuid(Registrations::Id).primary_key())
                    .col(uuid(Registrations::EventId).not_null())
                    .col(string_len(Registrations::FullName, 255).not_null())
                    .col(string_len(Registrations::Email, 255).not_null())
                    .col(string_len(Registrations::Phone, 64).not_null())
                    .col(text(Registrations::Organization).not_null())
                    .col(text(Registrations::Notes).not_null())
                    .col(timestamp_with_time_zone(Registrations::CreatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Registrations::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Registrations { Table, Id, EventId, FullName, Email, Phone, Organization, Notes, CreatedAt }
