use anyhow::Result;
use serde::Deserialize;
use anyhow::anyhow;

/// Default admission code shared by everyone allowed to sign up or log in.
pub const DEFAULT_SECRET_CODE: &str = "<Mavecode300107>";

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub uploads: UploadConfig,
    #[serde(default)]
    pub cors: CorsConfig,
    #[serde(default)]
    pub demo: DemoConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    #[serde(default)]
    pub worker_threads: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: "127.0.0.1".into(), port: 8001, worker_threads: Some(4) }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default)]
    pub url: String,
    /// Optional database name replacing the one in `url`.
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
    #[serde(default = "default_idle_timeout")]
    pub idle_timeout_secs: u64,
    #[serde(default = "default_max_lifetime")]
    pub max_lifetime_secs: u64,
    #[serde(default = "default_acquire_timeout")]
    pub acquire_timeout_secs: u64,
    #[serde(default)]
    pub sqlx_logging: bool,
}

fn default_max_connections() -> u32 { 10 }
fn default_min_connections() -> u32 { 2 }
fn default_connect_timeout() -> u64 { 30 }
fn default_idle_timeout() -> u64 { 600 }
fn default_max_lifetime() -> u64 { 3600 }
fn default_acquire_timeout() -> u64 { 30 }

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            name: None,
            max_connections: default_max_connections(),
            min_connections: default_min_connections(),
            connect_timeout_secs: default_connect_timeout(),
            idle_timeout_secs: default_idle_timeout(),
            max_lifetime_secs: default_max_lifetime(),
            acquire_timeout_secs: default_acquire_timeout(),
            sqlx_logging: false,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,
    #[serde(default = "default_secret_code")]
    pub secret_code: String,
    #[serde(default = "default_token_ttl")]
    pub token_ttl_minutes: i64,
}

fn default_jwt_secret() -> String { "dev-secret-change-me".into() }
fn default_secret_code() -> String { DEFAULT_SECRET_CODE.into() }
fn default_token_ttl() -> i64 { 60 * 24 }

impl Default for AuthConfig {
    fn default() -> Self {
        Self { jwt_secret: default_jwt_secret(), secret_code: default_secret_code(), token_ttl_minutes: default_token_ttl() }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct UploadConfig {
    #[serde(default = "default_upload_dir")]
    pub dir: String,
}

fn default_upload_dir() -> String { "uploads".into() }

impl Default for UploadConfig {
    fn default() -> Self { Self { dir: default_upload_dir() } }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CorsConfig {
    /// `["*"]` means any origin.
    #[serde(default = "default_origins")]
    pub origins: Vec<String>,
}

fn default_origins() -> Vec<String> { vec!["*".into()] }

impl Default for CorsConfig {
    fn default() -> Self { Self { origins: default_origins() } }
}

impl CorsConfig {
    pub fn allows_any(&self) -> bool {
        self.origins.is_empty() || self.origins.iter().any(|o| o == "*")
    }
}

/// Settings for the in-memory demo service.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    #[serde(default = "default_secret_code")]
    pub secret_code: String,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 8002,
            username: "admin".into(),
            password: "admin123".into(),
            secret_code: default_secret_code(),
        }
    }
}

/// Read `CONFIG_PATH` (default `config.toml`). A missing file yields the
/// defaults; a file that exists and fails to read or parse is an error.
pub fn load_default_or_empty() -> Result<AppConfig> {
    let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    load_optional(&path)
}

pub fn load_optional(path: &str) -> Result<AppConfig> {
    match std::fs::read_to_string(path) {
        Ok(content) => toml::from_str(&content).map_err(|e| anyhow!("invalid config file {path}: {e}")),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(AppConfig::default()),
        Err(e) => Err(anyhow!("cannot read config file {path}: {e}")),
    }
}

impl AppConfig {
    /// Load `config.toml` when present, otherwise start from defaults; then apply env overrides.
    /// A config file that exists but does not parse is an error.
    pub fn load_and_validate() -> Result<Self> {
        let mut cfg = load_default_or_empty()?;
        cfg.apply_env();
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    /// Same sources as [`AppConfig::load_and_validate`] without the database checks;
    /// the in-memory demo service never opens a connection.
    pub fn load_for_demo() -> Result<Self> {
        let mut cfg = load_default_or_empty()?;
        cfg.apply_env();
        if let Ok(host) = std::env::var("DEMO_HOST") { cfg.demo.host = host; }
        if let Some(port) = std::env::var("DEMO_PORT").ok().and_then(|p| p.parse::<u16>().ok()) {
            cfg.demo.port = port;
        }
        cfg.server.normalize()?;
        if cfg.demo.port == 0 {
            return Err(anyhow!("demo.port must be in 1..=65535"));
        }
        Ok(cfg)
    }

    pub fn apply_env(&mut self) {
        if let Ok(host) = std::env::var("SERVER_HOST") { self.server.host = host; }
        if let Some(port) = std::env::var("SERVER_PORT").ok().and_then(|p| p.parse::<u16>().ok()) {
            self.server.port = port;
        }
        if let Some(w) = std::env::var("TOKIO_WORKER_THREADS").ok().and_then(|v| v.parse::<usize>().ok()) {
            self.server.worker_threads = Some(w);
        }
        self.database.normalize_from_env();
        if let Ok(secret) = std::env::var("JWT_SECRET") { self.auth.jwt_secret = secret; }
        if let Ok(code) = std::env::var("ADMIN_SECRET_CODE") { self.auth.secret_code = code; }
        if let Ok(dir) = std::env::var("UPLOAD_DIR") { self.uploads.dir = dir; }
        if let Ok(origins) = std::env::var("CORS_ORIGINS") {
            self.cors.origins = parse_origins(&origins);
        }
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.server.normalize()?;
        self.database.validate()?;
        self.auth.validate()?;
        if self.uploads.dir.trim().is_empty() {
            self.uploads.dir = default_upload_dir();
        }
        Ok(())
    }
}

/// Split a comma-separated origin list, dropping blanks.
pub fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

impl ServerConfig {
    fn normalize(&mut self) -> Result<()> {
        if self.host.trim().is_empty() {
            self.host = "127.0.0.1".to_string();
        }
        if self.port == 0 {
            return Err(anyhow!("server.port must be in 1..=65535"));
        }
        match self.worker_threads {
            Some(0) | None => self.worker_threads = Some(4),
            Some(_) => {}
        }
        Ok(())
    }
}

impl DatabaseConfig {
    pub fn normalize_from_env(&mut self) {
        self.override_from(std::env::var("DATABASE_URL").ok(), std::env::var("DB_NAME").ok());
    }

    /// Non-blank values replace whatever the file set.
    fn override_from(&mut self, url: Option<String>, name: Option<String>) {
        if let Some(url) = url.filter(|u| !u.trim().is_empty()) {
            self.url = url;
        }
        if let Some(name) = name.filter(|n| !n.trim().is_empty()) {
            self.name = Some(name);
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.url.trim().is_empty() {
            return Err(anyhow!("database.url is empty; set it in config.toml or DATABASE_URL"));
        }
        let lower = self.url.to_lowercase();
        if !(lower.starts_with("postgresql://") || lower.starts_with("postgres://")) {
            return Err(anyhow!("database.url must start with postgresql:// or postgres://"));
        }
        if self.min_connections == 0 {
            return Err(anyhow!("database.min_connections must be >= 1"));
        }
        if self.max_connections < self.min_connections {
            return Err(anyhow!("database.max_connections must be >= min_connections"));
        }
        if self.connect_timeout_secs == 0 || self.acquire_timeout_secs == 0 {
            return Err(anyhow!("database timeouts must be positive"));
        }
        Ok(())
    }

    /// Connection string with `name` substituted for the database path segment.
    pub fn effective_url(&self) -> String {
        let name = match self.name.as_deref().map(str::trim) {
            Some(n) if !n.is_empty() => n,
            _ => return self.url.clone(),
        };
        let (base, query) = match self.url.split_once('?') {
            Some((b, q)) => (b, Some(q)),
            None => (self.url.as_str(), None),
        };
        let authority_start = base.find("://").map(|i| i + 3).unwrap_or(0);
        let prefix = match base[authority_start..].find('/') {
            Some(slash) => &base[..authority_start + slash],
            None => base,
        };
        match query {
            Some(q) => format!("{prefix}/{name}?{q}"),
            None => format!("{prefix}/{name}"),
        }
    }
}

impl AuthConfig {
    fn validate(&self) -> Result<()> {
        if self.jwt_secret.trim().is_empty() {
            return Err(anyhow!("auth.jwt_secret must not be empty"));
        }
        if self.secret_code.is_empty() {
            return Err(anyhow!("auth.secret_code must not be empty"));
        }
        if self.token_ttl_minutes <= 0 {
            return Err(anyhow!("auth.token_ttl_minutes must be positive"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn db(url: &str, name: Option<&str>) -> DatabaseConfig {
        DatabaseConfig {
            url: url.into(),
            name: name.map(str::to_string),
            max_connections: 10,
            min_connections: 2,
            connect_timeout_secs: 30,
            idle_timeout_secs: 600,
            max_lifetime_secs: 3600,
            acquire_timeout_secs: 30,
            sqlx_logging: false,
        }
    }

    #[test]
    fn parses_full_toml() {
        let cfg: AppConfig = toml::from_str(
            r#"
            [server]
            host = "0.0.0.0"
            port = 9000

            [database]
            url = "postgres://u:p@localhost:5432/org"

            [auth]
            jwt_secret = "s"
            secret_code = "code"

            [cors]
            origins = ["http://localhost:3000"]
            "#,
        )
        .unwrap();
        assert_eq!(cfg.server.port, 9000);
        assert_eq!(cfg.database.max_connections, 10);
        assert_eq!(cfg.auth.token_ttl_minutes, 1440);
        assert_eq!(cfg.uploads.dir, "uploads");
        assert!(!cfg.cors.allows_any());
        assert_eq!(cfg.demo.port, 8002);
    }

    #[test]
    fn effective_url_swaps_database_name() {
        assert_eq!(db("postgres://u:p@h:5432/old", Some("new")).effective_url(), "postgres://u:p@h:5432/new");
        assert_eq!(db("postgres://u:p@h:5432", Some("new")).effective_url(), "postgres://u:p@h:5432/new");
        assert_eq!(
            db("postgres://h/old?sslmode=disable", Some("x")).effective_url(),
            "postgres://h/x?sslmode=disable"
        );
        assert_eq!(db("postgres://h/old", None).effective_url(), "postgres://h/old");
        assert_eq!(db("postgres://h/old", Some("  ")).effective_url(), "postgres://h/old");
    }

    #[test]
    fn validate_rejects_bad_database_settings() {
        assert!(db("", None).validate().is_err());
        assert!(db("mysql://h/db", None).validate().is_err());
        let mut bad_pool = db("postgres://h/db", None);
        bad_pool.max_connections = 1;
        assert!(bad_pool.validate().is_err());
        assert!(db("postgres://h/db", None).validate().is_ok());
    }

    #[test]
    fn env_database_url_overrides_file_value() {
        let mut cfg = db("postgres://file/db", None);
        cfg.override_from(Some("postgres://env/db".into()), Some("other".into()));
        assert_eq!(cfg.url, "postgres://env/db");
        assert_eq!(cfg.name.as_deref(), Some("other"));
        cfg.override_from(Some("  ".into()), None);
        assert_eq!(cfg.url, "postgres://env/db");
    }

    #[test]
    fn origins_parse_and_wildcard() {
        assert_eq!(parse_origins("http://a, http://b ,,"), vec!["http://a", "http://b"]);
        assert!(CorsConfig { origins: vec!["*".into()] }.allows_any());
        assert!(CorsConfig { origins: vec![] }.allows_any());
    }

    fn temp_config(tag: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("orgsite-config-{}-{}.toml", tag, std::process::id()))
    }

    #[test]
    fn missing_config_file_falls_back_to_defaults() {
        let path = temp_config("missing");
        let _ = std::fs::remove_file(&path);
        let cfg = load_optional(&path.to_string_lossy()).unwrap();
        assert_eq!(cfg.server.port, 8001);
    }

    #[test]
    fn malformed_config_file_is_an_error() {
        let path = temp_config("malformed");
        std::fs::write(&path, "[auth]\njwt_secret = \"prod-secret\n").unwrap();
        let res = load_optional(&path.to_string_lossy());
        std::fs::remove_file(&path).unwrap();
        assert!(res.is_err());
    }

    #[test]
    fn present_config_file_is_used() {
        let path = temp_config("present");
        std::fs::write(&path, "[auth]\njwt_secret = \"prod-secret\"\n").unwrap();
        let cfg = load_optional(&path.to_string_lossy()).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(cfg.auth.jwt_secret, "prod-secret");
    }

    #[test]
    fn server_normalize_fills_defaults() {
        let mut s = ServerConfig { host: " ".into(), port: 80, worker_threads: Some(0) };
        s.normalize().unwrap();
        assert_eq!(s.host, "127.0.0.1");
        assert_eq!(s.worker_threads, Some(4));
        let mut zero = ServerConfig { host: "h".into(), port: 0, worker_threads: None };
        assert!(zero.normalize().is_err());
    }
}
