use std::sync::Arc;

use sea_orm::DatabaseConnection;

use service::auth::{repo::SeaOrmAuthRepository, repository::AuthRepository, AuthConfig, AuthService, DynAuthService};
use service::storage::UploadStore;

/// Shared handles injected into every database-backed handler.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub auth: Arc<DynAuthService>,
    pub uploads: UploadStore,
}

impl AppState {
    /// Production wiring: auth reads and writes the `users` table.
    pub fn new(db: DatabaseConnection, auth_cfg: &configs::AuthConfig, upload_dir: &str) -> Self {
        let repo: Arc<dyn AuthRepository> = Arc::new(SeaOrmAuthRepository::new(db.clone()));
        let auth = Arc::new(AuthService::new(repo, AuthConfig::from(auth_cfg)));
        Self { db, auth, uploads: UploadStore::new(upload_dir) }
    }

    /// Wiring with an explicit auth service, e.g. one over a mock repository.
    pub fn with_auth(db: DatabaseConnection, auth: Arc<DynAuthService>, uploads: UploadStore) -> Self {
        Self { db, auth, uploads }
    }
}
