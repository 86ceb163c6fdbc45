use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect, Set};
use serde::{Deserialize, Serialize};
use serde_json::json;
use uuid::Uuid;

use models::article;
use crate::{db::LIST_LIMIT, errors::ServiceError};

/// Body of article create and replace.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleInput {
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub cover_image: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Newest first.
pub async fn list_articles(db: &DatabaseConnection) -> Result<Vec<article::Model>, ServiceError> {
    let rows = article::Entity::find()
        .order_by_desc(article::Column::CreatedAt)
        .limit(LIST_LIMIT)
        .all(db)
        .await?;
    Ok(rows)
}

pub async fn get_article_by_slug(db: &DatabaseConnection, slug: &str) -> Result<article::Model, ServiceError> {
    article::Entity::find()
        .filter(article::Column::Slug.eq(slug))
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::not_found("Article"))
}

pub async fn create_article(db: &DatabaseConnection, input: ArticleInput) -> Result<article::Model, ServiceError> {
    let now = Utc::now();
    let am = article::ActiveModel {
        id: Set(Uuid::new_v4()),
        title: Set(input.title),
        slug: Set(input.slug),
        summary: Set(input.summary),
        content: Set(input.content),
        cover_image: Set(input.cover_image),
        tags: Set(json!(input.tags)),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
    };
    Ok(am.insert(db).await?)
}

/// Overwrite every editable field of article `id`.
pub async fn replace_article(db: &DatabaseConnection, id: Uuid, input: ArticleInput) -> Result<article::Model, ServiceError> {
    let mut am: article::ActiveModel = article::Entity::find_by_id(id)
        .one(db).await?
        .ok_or_else(|| ServiceError::not_found("Article"))?
        .into();
    am.title = Set(input.title);
    am.slug = Set(input.slug);
    am.summary = Set(input.summary);
    am.content = Set(input.content);
    am.cover_image = Set(input.cover_image);
    am.tags = Set(json!(input.tags));
    am.updated_at = Set(Utc::now().into());
    Ok(am.update(db).await?)
}

pub async fn delete_article(db: &DatabaseConnection, id: Uuid) -> Result<(), ServiceError> {
    let res = article::Entity::delete_by_id(id).exec(db).await?;
    if res.rows_affected == 0 {
        return Err(ServiceError::not_found("Article"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;

    fn input(title: &str, slug: &str) -> ArticleInput {
        ArticleInput { title: title.into(), slug: slug.into(), tags: vec!["news".into()], ..Default::default() }
    }

    #[tokio::test]
    async fn article_lifecycle() {
        let Some(db) = get_db().await else { return };
        let slug = format!("art-{}", Uuid::new_v4());

        let created = create_article(&db, input("First", &slug)).await.unwrap();
        assert_eq!(created.tags, json!(["news"]));
        assert_eq!(get_article_by_slug(&db, &slug).await.unwrap().id, created.id);

        let replaced = replace_article(&db, created.id, input("Second", &slug)).await.unwrap();
        assert_eq!(replaced.title, "Second");
        assert_eq!(replaced.created_at, created.created_at);
        assert!(replaced.updated_at >= created.updated_at);

        delete_article(&db, created.id).await.unwrap();
        assert!(matches!(delete_article(&db, created.id).await, Err(ServiceError::NotFound(_))));
        assert!(matches!(get_article_by_slug(&db, &slug).await, Err(ServiceError::NotFound(_))));
        assert!(matches!(replace_article(&db, created.id, input("x", "y")).await, Err(ServiceError::NotFound(_))));
    }

    #[tokio::test]
    async fn list_is_newest_first() {
        let Some(db) = get_db().await else { return };
        let a = create_article(&db, input("older", &format!("o-{}", Uuid::new_v4()))).await.unwrap();
        let b = create_article(&db, input("newer", &format!("n-{}", Uuid::new_v4()))).await.unwrap();

        let rows = list_articles(&db).await.unwrap();
        assert!(rows.len() <= LIST_LIMIT as usize);
        let pos = |id| rows.iter().position(|r| r.id == id);
        if let (Some(pa), Some(pb)) = (pos(a.id), pos(b.id)) {
            assert!(pb < pa);
        }
        delete_article(&db, a.id).await.unwrap();
        delete_article(&db, b.id).await.unwrap();
    }
}
