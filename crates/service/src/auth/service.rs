use std::sync::Arc;

use argon2::{Argon2, password_hash::{PasswordHasher, PasswordVerifier, SaltString}, PasswordHash};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header as JwtHeader, Validation};
use rand::rngs::OsRng;
use tracing::{info, debug, warn, instrument};
use uuid::Uuid;

use super::domain::{AuthUser, Claims, LoginInput, SignupInput, TokenResponse};
use super::errors::AuthError;
use super::repository::AuthRepository;

/// Auth service configuration
#[derive(Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub secret_code: String,
    pub token_ttl_minutes: i64,
}

impl From<&configs::AuthConfig> for AuthConfig {
    fn from(c: &configs::AuthConfig) -> Self {
        Self { jwt_secret: c.jwt_secret.clone(), secret_code: c.secret_code.clone(), token_ttl_minutes: c.token_ttl_minutes }
    }
}

/// Auth business service independent of web framework
pub struct AuthService<R: AuthRepository + ?Sized> {
    repo: Arc<R>,
    cfg: AuthConfig,
}

/// Type-erased service as held by the HTTP layer.
pub type DynAuthService = AuthService<dyn AuthRepository>;

impl<R: AuthRepository + ?Sized> AuthService<R> {
    pub fn new(repo: Arc<R>, cfg: AuthConfig) -> Self { Self { repo, cfg } }

    fn check_secret_code(&self, code: &str) -> Result<(), AuthError> {
        if code != self.cfg.secret_code {
            return Err(AuthError::InvalidSecretCode);
        }
        Ok(())
    }

    /// Create an account and sign the new user in.
    ///
    /// # Examples
    /// ```
    /// use service::auth::{service::{AuthService, AuthConfig}, repository::mock::MockAuthRepository};
    /// use service::auth::domain::SignupInput;
    /// use std::sync::Arc;
    /// let repo = Arc::new(MockAuthRepository::default());
    /// let svc = AuthService::new(repo, AuthConfig { jwt_secret: "secret".into(), secret_code: "open-sesame".into(), token_ttl_minutes: 60 });
    /// let input = SignupInput { username: "alice".into(), password: "Secret123".into(), secret_code: "open-sesame".into(), full_name: None };
    /// let res = tokio_test::block_on(svc.signup(input)).unwrap();
    /// assert_eq!(res.token_type, "bearer");
    /// assert_eq!(res.user.full_name, "alice");
    /// ```
    #[instrument(skip(self, input), fields(username = %input.username))]
    pub async fn signup(&self, input: SignupInput) -> Result<TokenResponse, AuthError> {
        self.check_secret_code(&input.secret_code)?;
        if let Some(existing) = self.repo.find_by_username(&input.username).await? {
            debug!("user exists: {}", existing.user.username);
            return Err(AuthError::Conflict);
        }

        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(input.password.as_bytes(), &salt)
            .map_err(|e| AuthError::HashError(e.to_string()))?
            .to_string();

        let full_name = input.full_name.as_deref().map(str::trim).filter(|n| !n.is_empty()).unwrap_or(&input.username);
        let user = self.repo.create_user(&input.username, full_name, hash).await?;
        info!(event = "user_signup", user_id = %user.id, username = %user.username);
        self.token_response(user)
    }

    /// Authenticate and issue a token.
    ///
    /// # Examples
    /// ```
    /// use service::auth::{service::{AuthService, AuthConfig}, repository::mock::MockAuthRepository};
    /// use service::auth::domain::{SignupInput, LoginInput};
    /// use std::sync::Arc;
    /// let repo = Arc::new(MockAuthRepository::default());
    /// let svc = AuthService::new(repo, AuthConfig { jwt_secret: "secret".into(), secret_code: "code".into(), token_ttl_minutes: 60 });
    /// let _ = tokio_test::block_on(svc.signup(SignupInput { username: "u".into(), password: "Passw0rd".into(), secret_code: "code".into(), full_name: Some("User".into()) }));
    /// let res = tokio_test::block_on(svc.login(LoginInput { username: "u".into(), password: "Passw0rd".into(), secret_code: "code".into() })).unwrap();
    /// assert_eq!(res.user.full_name, "User");
    /// assert!(!res.access_token.is_empty());
    /// ```
    #[instrument(skip(self, input), fields(username = %input.username))]
    pub async fn login(&self, input: LoginInput) -> Result<TokenResponse, AuthError> {
        self.check_secret_code(&input.secret_code)?;
        let stored = self.repo
            .find_by_username(&input.username)
            .await?
            .ok_or(AuthError::Unauthorized)?;

        let parsed = PasswordHash::new(&stored.password_hash).map_err(|e| AuthError::HashError(e.to_string()))?;
        if Argon2::default().verify_password(input.password.as_bytes(), &parsed).is_err() {
            warn!(event = "login_failed", username = %input.username);
            return Err(AuthError::Unauthorized);
        }

        info!(event = "user_login", user_id = %stored.user.id);
        self.token_response(stored.user)
    }

    /// Resolve the user behind a bearer token.
    pub async fn current_user(&self, token: &str) -> Result<AuthUser, AuthError> {
        let user_id = self.verify_token(token)?;
        self.repo.find_by_id(user_id).await?.ok_or(AuthError::UnknownUser)
    }

    /// Sign an HS256 token for `user_id`, valid for the configured TTL.
    pub fn issue_token(&self, user_id: Uuid) -> Result<String, AuthError> {
        let now = Utc::now();
        let claims = Claims {
            sub: user_id.to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::minutes(self.cfg.token_ttl_minutes)).timestamp(),
        };
        encode(&JwtHeader::new(Algorithm::HS256), &claims, &EncodingKey::from_secret(self.cfg.jwt_secret.as_bytes()))
            .map_err(|e| AuthError::TokenError(e.to_string()))
    }

    /// Check signature and expiry and return the subject.
    pub fn verify_token(&self, token: &str) -> Result<Uuid, AuthError> {
        let data = decode::<Claims>(token, &DecodingKey::from_secret(self.cfg.jwt_secret.as_bytes()), &Validation::new(Algorithm::HS256))
            .map_err(|e| {
                debug!("token rejected: {}", e);
                AuthError::InvalidToken
            })?;
        Uuid::parse_str(&data.claims.sub).map_err(|_| AuthError::InvalidToken)
    }

    fn token_response(&self, user: AuthUser) -> Result<TokenResponse, AuthError> {
        let access_token = self.issue_token(user.id)?;
        Ok(TokenResponse { access_token, token_type: "bearer".into(), user })
    }
}
