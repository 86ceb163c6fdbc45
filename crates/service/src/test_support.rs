#![cfg(test)]
use tokio::sync::OnceCell;
use sea_orm::DatabaseConnection;
use migration::MigratorTrait;
use models::db::{connect_with_config, test_config};

// Migrations run once per test process; `false` records an unreachable database.
static MIGRATED: OnceCell<bool> = OnceCell::const_new();

/// Fresh connection for the current test, or `None` when `SKIP_DB_TESTS` is set
/// or no database is reachable.
pub async fn get_db() -> Option<DatabaseConnection> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return None;
    }
    let ready = *MIGRATED
        .get_or_init(|| async {
            match connect_with_config(&test_config()).await {
                Ok(db) => match migration::Migrator::up(&db, None).await {
                    Ok(()) => true,
                    Err(e) => {
                        eprintln!("skip: migrate up failed: {}", e);
                        false
                    }
                },
                Err(e) => {
                    eprintln!("skip: cannot connect to db: {}", e);
                    false
                }
            }
        })
        .await;
    if !ready {
        return None;
    }
    connect_with_config(&test_config()).await.ok()
}
