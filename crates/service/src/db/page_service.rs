use sea_orm::{DatabaseConnection, EntityTrait, QuerySelect};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use models::page::{self, PageFields};
use crate::{db::LIST_LIMIT, errors::ServiceError};

/// Body of a page upsert.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInput {
    pub page_id: String,
    #[serde(default)]
    pub hero_title: String,
    #[serde(default)]
    pub hero_subtitle: String,
    #[serde(default)]
    pub hero_description: String,
    #[serde(default)]
    pub hero_image: String,
    #[serde(default)]
    pub sections: Vec<Value>,
}

/// Placeholder returned for a page slot nobody has written yet.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmptyPage {
    pub page_id: String,
    pub hero_title: String,
    pub hero_subtitle: String,
    pub hero_description: String,
    pub hero_image: String,
    pub sections: Vec<Value>,
}

impl EmptyPage {
    pub fn new(page_id: &str) -> Self {
        Self {
            page_id: page_id.to_string(),
            hero_title: String::new(),
            hero_subtitle: String::new(),
            hero_description: String::new(),
            hero_image: String::new(),
            sections: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum PageView {
    Stored(page::Model),
    Empty(EmptyPage),
}

pub async fn list_pages(db: &DatabaseConnection) -> Result<Vec<page::Model>, ServiceError> {
    let rows = page::Entity::find().limit(LIST_LIMIT).all(db).await?;
    Ok(rows)
}

/// Stored page for `page_id`, or an empty page when the slot is unused.
pub async fn get_page(db: &DatabaseConnection, page_id: &str) -> Result<PageView, ServiceError> {
    Ok(match page::find_by_page_id(db, page_id).await? {
        Some(p) => PageView::Stored(p),
        None => PageView::Empty(EmptyPage::new(page_id)),
    })
}

pub async fn upsert_page(db: &DatabaseConnection, input: PageInput) -> Result<page::Model, ServiceError> {
    let fields = PageFields {
        hero_title: input.hero_title,
        hero_subtitle: input.hero_subtitle,
        hero_description: input.hero_description,
        hero_image: input.hero_image,
        sections: input.sections,
    };
    let stored = page::upsert(db, &input.page_id, fields).await?;
    Ok(stored)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;
    use serde_json::json;

    #[test]
    fn empty_page_wire_shape() {
        let v = serde_json::to_value(PageView::Empty(EmptyPage::new("about"))).unwrap();
        assert_eq!(v, json!({
            "pageId": "about", "heroTitle": "", "heroSubtitle": "",
            "heroDescription": "", "heroImage": "", "sections": []
        }));
    }

    #[test]
    fn page_input_defaults_optional_fields() {
        let input: PageInput = serde_json::from_value(json!({"pageId": "home", "heroTitle": "Hi"})).unwrap();
        assert_eq!(input.hero_title, "Hi");
        assert!(input.hero_image.is_empty());
        assert!(input.sections.is_empty());
    }

    #[tokio::test]
    async fn upsert_then_get() {
        let Some(db) = get_db().await else { return };
        let page_id = format!("svc-{}", uuid::Uuid::new_v4());

        match get_page(&db, &page_id).await.unwrap() {
            PageView::Empty(p) => assert_eq!(p.page_id, page_id),
            PageView::Stored(_) => panic!("slot should be empty"),
        }

        let input = PageInput { page_id: page_id.clone(), hero_title: "T".into(), sections: vec![json!({"id": "a"})], ..Default::default() };
        let stored = upsert_page(&db, input).await.unwrap();
        match get_page(&db, &page_id).await.unwrap() {
            PageView::Stored(p) => {
                assert_eq!(p.id, stored.id);
                assert_eq!(p.sections, json!([{"id": "a"}]));
            }
            PageView::Empty(_) => panic!("slot should be stored"),
        }
        page::Entity::delete_by_id(stored.id).exec(&db).await.unwrap();
    }
}
