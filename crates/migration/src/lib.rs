//! Migrator registering table migrations in creation order.
//! Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20250601_000001_create_users;
mod m20250601_000002_create_pages;
mod m20250601_000003_create_articles;
mod m20250601_000004_create_media;
mod m20250601_000005_create_documents;
mod m20250601_000006_create_events;
mod m20250601_000007_create_registrations;
mod m20250601_000008_create_tasks;
mod m20250601_000009_create_members;
mod m20250601_000010_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250601_000001_create_users::Migration),
            Box::new(m20250601_000002_create_pages::Migration),
            Box::new(m20250601_000003_create_articles::Migration),
            Box::new(m20250601_000004_create_media::Migration),
            Box::new(m20250601_000005_create_documents::Migration),
            Box::new(m20250601_000006_create_events::Migration),
            Box::new(m20250601_000007_create_registrations::Migration),
            Box::new(m20250601_000008_create_tasks::Migration),
            Box::new(m20250601_000009_create_members::Migration),
            // Indexes should always be applied last
            Box::new(m20250601_000010_add_indexes::Migration),
        ]
    }
}
