use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use models::registration;
use crate::{db::{event_service, REGISTRATION_LIST_LIMIT}, errors::ServiceError};

/// Registration form. Any `eventId` in the body is ignored in favour of the path.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationInput {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub organization: String,
    #[serde(default)]
    pub notes: String,
}

/// Record a registration for an existing event. Capacity is not enforced.
pub async fn register(db: &DatabaseConnection, event_id: Uuid, input: RegistrationInput) -> Result<registration::Model, ServiceError> {
    event_service::get_event(db, event_id).await?;
    let am = registration::ActiveModel {
        id: Set(Uuid::new_v4()),
        event_id: Set(event_id),
        full_name: Set(input.full_name),
        email: Set(input.email),
        phone: Set(input.phone),
        organization: Set(input.organization),
        notes: Set(input.notes),
        created_at: Set(Utc::now().into()),
    };
    Ok(am.insert(db).await?)
}

/// Registrations for `event_id` in sign-up order.
pub async fn list_registrations(db: &DatabaseConnection, event_id: Uuid) -> Result<Vec<registration::Model>, ServiceError> {
    let rows = registration::Entity::find()
        .filter(registration::Column::EventId.eq(event_id))
        .order_by_asc(registration::Column::CreatedAt)
        .limit(REGISTRATION_LIST_LIMIT)
        .all(db)
        .await?;
    Ok(rows)
}
