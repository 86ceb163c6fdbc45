use async_trait::async_trait;
use uuid::Uuid;

use super::domain::{AuthUser, StoredUser};
use super::errors::AuthError;

/// Repository abstraction for auth-related persistence.
#[async_trait]
pub trait AuthRepository: Send + Sync {
    async fn find_by_username(&self, username: &str) -> Result<Option<StoredUser>, AuthError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<AuthUser>, AuthError>;
    /// Insert a user; a taken username is `AuthError::Conflict`.
    async fn create_user(&self, username: &str, full_name: &str, password_hash: String) -> Result<AuthUser, AuthError>;
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use chrono::Utc;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct MockAuthRepository {
        users: Mutex<HashMap<String, StoredUser>>, // key: username
    }

    impl MockAuthRepository {
        fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, StoredUser>>, AuthError> {
            self.users.lock().map_err(|e| AuthError::Repository(e.to_string()))
        }
    }

    #[async_trait]
    impl AuthRepository for MockAuthRepository {
        async fn find_by_username(&self, username: &str) -> Result<Option<StoredUser>, AuthError> {
            Ok(self.lock()?.get(username).cloned())
        }

        async fn find_by_id(&self, id: Uuid) -> Result<Option<AuthUser>, AuthError> {
            Ok(self.lock()?.values().find(|s| s.user.id == id).map(|s| s.user.clone()))
        }

        async fn create_user(&self, username: &str, full_name: &str, password_hash: String) -> Result<AuthUser, AuthError> {
            let mut users = self.lock()?;
            if users.contains_key(username) {
                return Err(AuthError::Conflict);
            }
            let user = AuthUser { id: Uuid::new_v4(), username: username.to_string(), full_name: full_name.to_string(), created_at: Utc::now() };
            users.insert(username.to_string(), StoredUser { user: user.clone(), password_hash });
            Ok(user)
        }
    }
}
