use anyhow::Result;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};
use serde_json::json;
use uuid::Uuid;

use super::setup_test_db;
use crate::{article, media, member, page, user};

#[tokio::test]
async fn test_user_create_and_lookup() -> Result<()> {
    let Some(db) = setup_test_db().await else { return Ok(()) };

    let username = format!("user_{}", Uuid::new_v4());
    let created = user::create(&db, &username, "hash".into(), "").await?;
    assert_eq!(created.full_name, username, "blank full name falls back to username");

    let found = user::find_by_username(&db, &username).await?;
    assert_eq!(found.map(|u| u.id), Some(created.id));

    // unique username
    assert!(user::create(&db, &username, "hash".into(), "Other").await.is_err());

    user::Entity::delete_by_id(created.id).exec(&db).await?;
    Ok(())
}

#[tokio::test]
async fn test_user_validation_without_db() {
    assert!(user::validate_username("   ").is_err());
    assert!(user::validate_username("alice").is_ok());
}

#[tokio::test]
async fn test_page_upsert_overwrites_slot() -> Result<()> {
    let Some(db) = setup_test_db().await else { return Ok(()) };

    let page_id = format!("page_{}", Uuid::new_v4());
    let first = page::upsert(&db, &page_id, page::PageFields {
        hero_title: "Hello".into(),
        sections: vec![json!({"type": "text", "body": "one"})],
        ..Default::default()
    }).await?;

    let second = page::upsert(&db, &page_id, page::PageFields {
        hero_title: "Updated".into(),
        ..Default::default()
    }).await?;
    assert_eq!(first.id, second.id);
    assert_eq!(second.hero_title, "Updated");
    assert_eq!(second.sections, json!([]));

    let rows = page::Entity::find().filter(page::Column::PageId.eq(page_id.clone())).all(&db).await?;
    assert_eq!(rows.len(), 1);

    page::Entity::delete_by_id(first.id).exec(&db).await?;
    Ok(())
}

#[tokio::test]
async fn test_article_and_media_roundtrip() -> Result<()> {
    let Some(db) = setup_test_db().await else { return Ok(()) };
    let now = Utc::now();

    let art = article::ActiveModel {
        id: Set(Uuid::new_v4()),
        title: Set("Title".into()),
        slug: Set(format!("slug-{}", Uuid::new_v4())),
        summary: Set(String::new()),
        content: Set("body".into()),
        cover_image: Set(String::new()),
        tags: Set(json!(["news", "campus"])),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
    }.insert(&db).await?;
    let found = article::Entity::find_by_id(art.id).one(&db).await?;
    assert_eq!(found.map(|a| a.tags), Some(json!(["news", "campus"])));

    let m = media::ActiveModel {
        id: Set(Uuid::new_v4()),
        title: Set("Photo".into()),
        media_type: Set("image".into()),
        url: Set("/api/uploads/x.png".into()),
        description: Set(String::new()),
        created_at: Set(now.into()),
    }.insert(&db).await?;
    let wire = serde_json::to_value(&m)?;
    assert_eq!(wire["type"], "image");
    assert!(wire.get("createdAt").is_some());

    article::Entity::delete_by_id(art.id).exec(&db).await?;
    media::Entity::delete_by_id(m.id).exec(&db).await?;
    Ok(())
}

#[tokio::test]
async fn test_member_crud() -> Result<()> {
    let Some(db) = setup_test_db().await else { return Ok(()) };

    let m = member::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set("Ana".into()),
        position: Set("Chair".into()),
        division: Set("Core".into()),
    }.insert(&db).await?;

    let mut am: member::ActiveModel = m.clone().into();
    am.position = Set("Vice Chair".into());
    let updated = am.update(&db).await?;
    assert_eq!(updated.position, "Vice Chair");

    let res = member::Entity::delete_by_id(m.id).exec(&db).await?;
    assert_eq!(res.rows_affected, 1);
    Ok(())
}
