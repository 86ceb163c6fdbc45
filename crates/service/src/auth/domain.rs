use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Signup input
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupInput {
    pub username: String,
    pub password: String,
    pub secret_code: String,
    #[serde(default)]
    pub full_name: Option<String>,
}

/// Login input
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginInput {
    pub username: String,
    pub password: String,
    pub secret_code: String,
}

/// Domain user (never carries the password hash)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthUser {
    pub id: Uuid,
    pub username: String,
    pub full_name: String,
    pub created_at: DateTime<Utc>,
}

/// User row as needed for password verification
#[derive(Debug, Clone)]
pub struct StoredUser {
    pub user: AuthUser,
    pub password_hash: String,
}

/// Result of a successful signup or login
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    pub user: AuthUser,
}

/// JWT claims; `sub` is the user id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
}

impl From<models::user::Model> for AuthUser {
    fn from(u: models::user::Model) -> Self {
        AuthUser { id: u.id, username: u.username, full_name: u.full_name, created_at: u.created_at.with_timezone(&Utc) }
    }
}
