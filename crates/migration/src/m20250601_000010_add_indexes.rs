use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Slug lookups; deliberately not unique
        manager
            .create_index(
                Index::create()
                    .name("idx_articles_slug")
                    .table(Articles::Table)
                    .col(Articles::Slug)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_documents_slug")
                    .table(Documents::Table)
                    .col(Documents::Slug)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_events_slug")
                    .table(Events::Table)
                    .col(Events::Slug)
                    .to_owned(),
            )
            .await?;

        // Registrations are always fetched per event
        manager
            .create_index(
                Index::create()
                    .name("idx_registrations_event")
                    .table(Registrations::Table)
                    .col(Registrations::EventId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_tasks_status_assignee")
                    .table(Tasks::Table)
                    .col(Tasks::Status)
                    .col(Tasks::Assignee)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_tasks_status_assignee").table(Tasks::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_registrations_event").table(Registrations::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_events_slug").table(Events::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_documents_slug").table(Documents::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_articles_slug").table(Articles::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Articles { Table, Slug }

#[derive(DeriveIden)]
enum Documents { Table, Slug }

#[derive(DeriveIden)]
enum Events { Table, Slug }

#[derive(DeriveIden)]
enum Registrations { Table, EventId }

#[derive(DeriveIden)]
enum Tasks { Table, Status, Assignee }
