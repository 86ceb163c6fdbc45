use sea_orm::{DatabaseConnection, EntityTrait};
use uuid::Uuid;

use models::errors::ModelError;

use crate::auth::domain::{AuthUser, StoredUser};
use crate::auth::errors::AuthError;
use crate::auth::repository::AuthRepository;

pub struct SeaOrmAuthRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmAuthRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

fn map_model_error(e: ModelError) -> AuthError {
    match e {
        ModelError::Conflict(_) => AuthError::Conflict,
        ModelError::Validation(msg) => AuthError::Validation(msg),
        ModelError::Db(msg) => AuthError::Repository(msg),
    }
}

#[async_trait::async_trait]
impl AuthRepository for SeaOrmAuthRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<StoredUser>, AuthError> {
        let res = models::user::find_by_username(&self.db, username)
            .await
            .map_err(map_model_error)?;
        Ok(res.map(|u| {
            let password_hash = u.password_hash.clone();
            StoredUser { user: u.into(), password_hash }
        }))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<AuthUser>, AuthError> {
        let res = models::user::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| AuthError::Repository(e.to_string()))?;
        Ok(res.map(AuthUser::from))
    }

    async fn create_user(&self, username: &str, full_name: &str, password_hash: String) -> Result<AuthUser, AuthError> {
        let created = models::user::create(&self.db, username, password_hash, full_name)
            .await
            .map_err(map_model_error)?;
        Ok(created.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;

    #[tokio::test]
    async fn create_then_lookup_and_conflict() {
        let Some(db) = get_db().await else { return };
        let repo = SeaOrmAuthRepository::new(db.clone());
        let username = format!("repo_{}", Uuid::new_v4());

        let user = repo.create_user(&username, "Repo User", "hash".into()).await.unwrap();
        let stored = repo.find_by_username(&username).await.unwrap().unwrap();
        assert_eq!(stored.user.id, user.id);
        assert_eq!(stored.password_hash, "hash");
        assert_eq!(repo.find_by_id(user.id).await.unwrap(), Some(user.clone()));

        assert!(matches!(repo.create_user(&username, "", "hash".into()).await, Err(AuthError::Conflict)));

        models::user::Entity::delete_by_id(user.id).exec(&db).await.unwrap();
    }
}
