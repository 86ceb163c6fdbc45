use sea_orm::{entity::prelude::*, Set, QueryFilter, ConnectionTrait};
use uuid::Uuid;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::errors;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "pages")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub page_id: String,
    #[sea_orm(column_type = "Text")]
    pub hero_title: String,
    #[sea_orm(column_type = "Text")]
    pub hero_subtitle: String,
    #[sea_orm(column_type = "Text")]
    pub hero_description: String,
    #[sea_orm(column_type = "Text")]
    pub hero_image: String,
    /// Ordered list of free-form section objects.
    #[sea_orm(column_type = "JsonBinary")]
    pub sections: Json,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Hero fields plus sections, everything a page upsert writes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PageFields {
    pub hero_title: String,
    pub hero_subtitle: String,
    pub hero_description: String,
    pub hero_image: String,
    pub sections: Vec<Json>,
}

pub fn validate_page_id(page_id: &str) -> Result<(), errors::ModelError> {
    if page_id.trim().is_empty() {
        return Err(errors::ModelError::Validation("pageId required".into()));
    }
    Ok(())
}

pub async fn find_by_page_id<C: ConnectionTrait>(db: &C, page_id: &str) -> Result<Option<Model>, errors::ModelError> {
    Ok(Entity::find().filter(Column::PageId.eq(page_id)).one(db).await?)
}

/// Insert or overwrite the page occupying `page_id`. Returns the stored row.
pub async fn upsert<C: ConnectionTrait>(db: &C, page_id: &str, fields: PageFields) -> Result<Model, errors::ModelError> {
    validate_page_id(page_id)?;
    let now = Utc::now().into();
    let sections = Json::Array(fields.sections);
    match find_by_page_id(db, page_id).await? {
        Some(existing) => {
            let mut am: ActiveModel = existing.into();
            am.hero_title = Set(fields.hero_title);
            am.hero_subtitle = Set(fields.hero_subtitle);
            am.hero_description = Set(fields.hero_description);
            am.hero_image = Set(fields.hero_image);
            am.sections = Set(sections);
            am.updated_at = Set(now);
            Ok(am.update(db).await?)
        }
        None => {
            let am = ActiveModel {
                id: Set(Uuid::new_v4()),
                page_id: Set(page_id.to_string()),
                hero_title: Set(fields.hero_title),
                hero_subtitle: Set(fields.hero_subtitle),
                hero_description: Set(fields.hero_description),
                hero_image: Set(fields.hero_image),
                sections: Set(sections),
                updated_at: Set(now),
            };
            Ok(am.insert(db).await?)
        }
    }
}
