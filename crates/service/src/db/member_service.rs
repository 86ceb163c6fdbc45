use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QuerySelect, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use models::member;
use crate::{db::MEMBER_LIST_LIMIT, errors::ServiceError};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemberInput {
    pub name: String,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub division: String,
}

pub async fn list_members(db: &DatabaseConnection) -> Result<Vec<member::Model>, ServiceError> {
    let rows = member::Entity::find().limit(MEMBER_LIST_LIMIT).all(db).await?;
    Ok(rows)
}

pub async fn create_member(db: &DatabaseConnection, input: MemberInput) -> Result<member::Model, ServiceError> {
    let am = member::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(input.name),
        position: Set(input.position),
        division: Set(input.division),
    };
    Ok(am.insert(db).await?)
}

pub async fn replace_member(db: &DatabaseConnection, id: Uuid, input: MemberInput) -> Result<member::Model, ServiceError> {
    let mut am: member::ActiveModel = member::Entity::find_by_id(id)
        .one(db).await?
        .ok_or_else(|| ServiceError::not_found("Member"))?
        .into();
    am.name = Set(input.name);
    am.position = Set(input.position);
    am.division = Set(input.division);
    Ok(am.update(db).await?)
}

pub async fn delete_member(db: &DatabaseConnection, id: Uuid) -> Result<(), ServiceError> {
    let res = member::Entity::delete_by_id(id).exec(db).await?;
    if res.rows_affected == 0 {
        return Err(ServiceError::not_found("Member"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;

    #[tokio::test]
    async fn member_lifecycle() {
        let Some(db) = get_db().await else { return };
        let m = create_member(&db, MemberInput { name: "Ana".into(), ..Default::default() }).await.unwrap();
        assert_eq!(m.position, "");

        let r = replace_member(&db, m.id, MemberInput { name: "Ana".into(), position: "Chair".into(), division: "Core".into() }).await.unwrap();
        assert_eq!(r.division, "Core");

        delete_member(&db, m.id).await.unwrap();
        assert!(matches!(replace_member(&db, m.id, MemberInput::default()).await, Err(ServiceError::NotFound(_))));
    }
}
