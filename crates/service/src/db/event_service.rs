use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use models::event;
use crate::{db::LIST_LIMIT, errors::ServiceError};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventInput {
    pub title: String,
    pub slug: String,
    pub date: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub banner_image: String,
    #[serde(default)]
    pub capacity: i32,
}

/// Latest date first.
pub async fn list_events(db: &DatabaseConnection) -> Result<Vec<event::Model>, ServiceError> {
    let rows = event::Entity::find()
        .order_by_desc(event::Column::Date)
        .limit(LIST_LIMIT)
        .all(db)
        .await?;
    Ok(rows)
}

pub async fn get_event_by_slug(db: &DatabaseConnection, slug: &str) -> Result<event::Model, ServiceError> {
    event::Entity::find()
        .filter(event::Column::Slug.eq(slug))
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::not_found("Event"))
}

pub async fn get_event(db: &DatabaseConnection, id: Uuid) -> Result<event::Model, ServiceError> {
    event::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::not_found("Event"))
}

pub async fn create_event(db: &DatabaseConnection, input: EventInput) -> Result<event::Model, ServiceError> {
    let now = Utc::now();
    let am = event::ActiveModel {
        id: Set(Uuid::new_v4()),
        title: Set(input.title),
        slug: Set(input.slug),
        date: Set(input.date),
        time: Set(input.time),
        location: Set(input.location),
        description: Set(input.description),
        banner_image: Set(input.banner_image),
        capacity: Set(input.capacity),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
    };
    Ok(am.insert(db).await?)
}

pub async fn replace_event(db: &DatabaseConnection, id: Uuid, input: EventInput) -> Result<event::Model, ServiceError> {
    let mut am: event::ActiveModel = get_event(db, id).await?.into();
    am.title = Set(input.title);
    am.slug = Set(input.slug);
    am.date = Set(input.date);
    am.time = Set(input.time);
    am.location = Set(input.location);
    am.description = Set(input.description);
    am.banner_image = Set(input.banner_image);
    am.capacity = Set(input.capacity);
    am.updated_at = Set(Utc::now().into());
    Ok(am.update(db).await?)
}

/// Registrations of a deleted event are left in place.
pub async fn delete_event(db: &DatabaseConnection, id: Uuid) -> Result<(), ServiceError> {
    let res = event::Entity::delete_by_id(id).exec(db).await?;
    if res.rows_affected == 0 {
        return Err(ServiceError::not_found("Event"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;

    fn input(date: &str) -> EventInput {
        EventInput { title: "Talk".into(), slug: format!("ev-{}", Uuid::new_v4()), date: date.into(), capacity: 20, ..Default::default() }
    }

    #[tokio::test]
    async fn list_orders_by_date_desc() {
        let Some(db) = get_db().await else { return };
        let early = create_event(&db, input("2001-01-01")).await.unwrap();
        let late = create_event(&db, input("2999-12-31")).await.unwrap();

        let rows = list_events(&db).await.unwrap();
        assert_eq!(rows.first().map(|e| e.date.as_str()), Some("2999-12-31"));
        assert!(rows.windows(2).all(|w| w[0].date >= w[1].date));

        delete_event(&db, early.id).await.unwrap();
        delete_event(&db, late.id).await.unwrap();
    }

    #[tokio::test]
    async fn replace_and_missing() {
        let Some(db) = get_db().await else { return };
        let ev = create_event(&db, input("2030-05-05")).await.unwrap();
        let mut next = input("2030-06-06");
        next.capacity = 0;
        let replaced = replace_event(&db, ev.id, next).await.unwrap();
        assert_eq!(replaced.date, "2030-06-06");
        assert_eq!(replaced.capacity, 0);
        delete_event(&db, ev.id).await.unwrap();
        assert!(matches!(get_event(&db, ev.id).await, Err(ServiceError::NotFound(_))));
    }
}
