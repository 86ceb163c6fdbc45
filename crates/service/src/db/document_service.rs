use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect, Set};
use serde::{Deserialize, Serialize};
use serde_json::json;
use uuid::Uuid;

use models::document;
use crate::{db::{non_blank, LIST_LIMIT}, errors::ServiceError};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentInput {
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub attachments: Vec<String>,
    pub doc_type: String,
}

/// Newest first, optionally restricted to one `doc_type`.
pub async fn list_documents(db: &DatabaseConnection, doc_type: Option<&str>) -> Result<Vec<document::Model>, ServiceError> {
    let mut q = document::Entity::find();
    if let Some(t) = non_blank(doc_type) {
        q = q.filter(document::Column::DocType.eq(t));
    }
    let rows = q
        .order_by_desc(document::Column::CreatedAt)
        .limit(LIST_LIMIT)
        .all(db)
        .await?;
    Ok(rows)
}

pub async fn get_document_by_slug(db: &DatabaseConnection, slug: &str) -> Result<document::Model, ServiceError> {
    document::Entity::find()
        .filter(document::Column::Slug.eq(slug))
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::not_found("Document"))
}

pub async fn create_document(db: &DatabaseConnection, input: DocumentInput) -> Result<document::Model, ServiceError> {
    let now = Utc::now();
    let am = document::ActiveModel {
        id: Set(Uuid::new_v4()),
        title: Set(input.title),
        slug: Set(input.slug),
        description: Set(input.description),
        content: Set(input.content),
        attachments: Set(json!(input.attachments)),
        doc_type: Set(input.doc_type),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
    };
    Ok(am.insert(db).await?)
}

pub async fn replace_document(db: &DatabaseConnection, id: Uuid, input: DocumentInput) -> Result<document::Model, ServiceError> {
    let mut am: document::ActiveModel = document::Entity::find_by_id(id)
        .one(db).await?
        .ok_or_else(|| ServiceError::not_found("Document"))?
        .into();
    am.title = Set(input.title);
    am.slug = Set(input.slug);
    am.description = Set(input.description);
    am.content = Set(input.content);
    am.attachments = Set(json!(input.attachments));
    am.doc_type = Set(input.doc_type);
    am.updated_at = Set(Utc::now().into());
    Ok(am.update(db).await?)
}

pub async fn delete_document(db: &DatabaseConnection, id: Uuid) -> Result<(), ServiceError> {
    let res = document::Entity::delete_by_id(id).exec(db).await?;
    if res.rows_affected == 0 {
        return Err(ServiceError::not_found("Document"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;

    fn input(doc_type: &str) -> DocumentInput {
        DocumentInput {
            title: "Doc".into(),
            slug: format!("doc-{}", Uuid::new_v4()),
            doc_type: doc_type.into(),
            attachments: vec!["/api/uploads/a.pdf".into()],
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn filter_by_doc_type() {
        let Some(db) = get_db().await else { return };
        let report = create_document(&db, input("report")).await.unwrap();
        let activity = create_document(&db, input("activity")).await.unwrap();

        let reports = list_documents(&db, Some("report")).await.unwrap();
        assert!(reports.iter().all(|d| d.doc_type == "report"));
        assert!(reports.iter().any(|d| d.id == report.id));
        assert!(!reports.iter().any(|d| d.id == activity.id));

        let all = list_documents(&db, Some("  ")).await.unwrap();
        assert!(all.iter().any(|d| d.id == activity.id) || all.len() == LIST_LIMIT as usize);

        delete_document(&db, report.id).await.unwrap();
        delete_document(&db, activity.id).await.unwrap();
    }

    #[tokio::test]
    async fn replace_and_lookup_by_slug() {
        let Some(db) = get_db().await else { return };
        let created = create_document(&db, input("documentation")).await.unwrap();
        let mut next = input("report");
        next.slug = created.slug.clone();
        let replaced = replace_document(&db, created.id, next).await.unwrap();
        assert_eq!(replaced.doc_type, "report");
        assert_eq!(get_document_by_slug(&db, &created.slug).await.unwrap().id, created.id);
        delete_document(&db, created.id).await.unwrap();
        assert!(matches!(replace_document(&db, created.id, input("x")).await, Err(ServiceError::NotFound(_))));
    }
}
