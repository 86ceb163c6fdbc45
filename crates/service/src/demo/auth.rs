use serde::{Deserialize, Serialize};
use tracing::warn;

use super::errors::DemoError;

/// Placeholder bearer token handed out by the demo login. It is never checked.
pub const DEMO_TOKEN: &str = "demo-token";

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DemoLogin {
    pub username: String,
    pub password: String,
    pub secret_code: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DemoToken {
    pub access_token: String,
    pub token_type: String,
    pub username: String,
}

/// The single fixed account of the demo service.
#[derive(Debug, Clone)]
pub struct DemoCredentials {
    pub username: String,
    pub password: String,
    pub secret_code: String,
}

impl From<&configs::DemoConfig> for DemoCredentials {
    fn from(c: &configs::DemoConfig) -> Self {
        Self { username: c.username.clone(), password: c.password.clone(), secret_code: c.secret_code.clone() }
    }
}

impl DemoCredentials {
    /// All three of username, password and secret code must match.
    pub fn login(&self, input: &DemoLogin) -> Result<DemoToken, DemoError> {
        if input.secret_code != self.secret_code || input.username != self.username || input.password != self.password {
            warn!(event = "demo_login_failed", username = %input.username);
            return Err(DemoError::Unauthorized);
        }
        Ok(DemoToken { access_token: DEMO_TOKEN.into(), token_type: "bearer".into(), username: self.username.clone() })
    }
}
