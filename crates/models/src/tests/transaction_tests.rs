use anyhow::Result;
use sea_orm::{ActiveModelTrait, EntityTrait, Set, TransactionTrait};
use uuid::Uuid;

use super::setup_test_db;
use crate::member;

fn sample(name: &str) -> member::ActiveModel {
    member::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(name.to_string()),
        position: Set("Staff".into()),
        division: Set("Media".into()),
    }
}

#[tokio::test]
async fn test_transaction_commit() -> Result<()> {
    let Some(db) = setup_test_db().await else { return Ok(()) };

    let txn = db.begin().await?;
    let created = sample("commit").insert(&txn).await?;
    txn.commit().await?;

    let found = member::Entity::find_by_id(created.id).one(&db).await?;
    assert!(found.is_some());
    member::Entity::delete_by_id(created.id).exec(&db).await?;
    Ok(())
}

#[tokio::test]
async fn test_transaction_rollback() -> Result<()> {
    let Some(db) = setup_test_db().await else { return Ok(()) };

    let txn = db.begin().await?;
    let created = sample("rollback").insert(&txn).await?;
    txn.rollback().await?;

    let found = member::Entity::find_by_id(created.id).one(&db).await?;
    assert!(found.is_none());
    Ok(())
}
