use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, QuerySelect, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use models::media;
use crate::{db::LIST_LIMIT, errors::ServiceError};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaInput {
    pub title: String,
    #[serde(rename = "type")]
    pub media_type: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub description: String,
}

pub async fn list_media(db: &DatabaseConnection) -> Result<Vec<media::Model>, ServiceError> {
    let rows = media::Entity::find()
        .order_by_desc(media::Column::CreatedAt)
        .limit(LIST_LIMIT)
        .all(db)
        .await?;
    Ok(rows)
}

pub async fn create_media(db: &DatabaseConnection, input: MediaInput) -> Result<media::Model, ServiceError> {
    let am = media::ActiveModel {
        id: Set(Uuid::new_v4()),
        title: Set(input.title),
        media_type: Set(input.media_type),
        url: Set(input.url),
        description: Set(input.description),
        created_at: Set(Utc::now().into()),
    };
    Ok(am.insert(db).await?)
}

pub async fn delete_media(db: &DatabaseConnection, id: Uuid) -> Result<(), ServiceError> {
    let res = media::Entity::delete_by_id(id).exec(db).await?;
    if res.rows_affected == 0 {
        return Err(ServiceError::not_found("Media"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;
    use serde_json::json;

    #[test]
    fn input_reads_type_key() {
        let input: MediaInput = serde_json::from_value(json!({"title": "Clip", "type": "video"})).unwrap();
        assert_eq!(input.media_type, "video");
        assert!(input.url.is_empty());
    }

    #[tokio::test]
    async fn create_and_delete() {
        let Some(db) = get_db().await else { return };
        let m = create_media(&db, MediaInput { title: "Photo".into(), media_type: "image".into(), ..Default::default() }).await.unwrap();
        assert!(list_media(&db).await.unwrap().iter().any(|r| r.id == m.id));
        delete_media(&db, m.id).await.unwrap();
        assert!(matches!(delete_media(&db, m.id).await, Err(ServiceError::NotFound(_))));
    }
}
