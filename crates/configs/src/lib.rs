use anyhow::anyhow;
use anyhow::Result;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub auth: AuthSettings,
    #[serde(default)]
    pub storage: StorageConfig,
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
        Self { host: "127.0.0.1".into(), port: 3000, worker_threads: Some(4) }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default)]
    pub url: String,
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

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
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

fn default_max_connections() -> u32 { 10 }
fn default_min_connections() -> u32 { 2 }
fn default_connect_timeout() -> u64 { 30 }
fn default_idle_timeout() -> u64 { 600 }
fn default_max_lifetime() -> u64 { 3600 }
fn default_acquire_timeout() -> u64 { 30 }

/// Token signing settings.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthSettings {
    #[serde(default)]
    pub jwt_secret: String,
    #[serde(default = "default_token_ttl")]
    pub token_ttl_secs: u64,
}

impl Default for AuthSettings {
    fn default() -> Self {
        Self { jwt_secret: String::new(), token_ttl_secs: default_token_ttl() }
    }
}

fn default_token_ttl() -> u64 { 3600 }

/// Longest accepted token lifetime: ten years.
pub const MAX_TOKEN_TTL_SECS: u64 = 10 * 365 * 24 * 3600;

#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    #[default]
    Postgres,
    Memory,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct StorageConfig {
    #[serde(default)]
    pub backend: StorageBackend,
    /// JSON array of locations inserted at startup when the store is empty.
    #[serde(default)]
    pub seed_path: Option<String>,
}

pub fn load_default() -> Result<AppConfig> {
    let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    load_from_file(&path)
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    parse(&content)
}

pub fn parse(content: &str) -> Result<AppConfig> {
    let cfg: AppConfig = toml::from_str(content)?;
    Ok(cfg)
}

impl AppConfig {
    /// Load `config.toml` when present, otherwise start from defaults, then
    /// fill gaps from the environment and validate.
    pub fn load_and_validate() -> Result<Self> {
        let mut cfg = match load_default() {
            Ok(cfg) => cfg,
            Err(e) if is_missing_file(&e) => Self::default(),
            Err(e) => return Err(e),
        };
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.server.normalize_from_env();
        self.server.normalize()?;
        self.database.normalize_from_env();
        if self.storage.backend == StorageBackend::Postgres {
            self.database.validate()?;
        }
        self.auth.normalize_from_env();
        self.auth.validate()?;
        Ok(())
    }
}

fn is_missing_file(e: &anyhow::Error) -> bool {
    e.downcast_ref::<std::io::Error>()
        .map(|io| io.kind() == std::io::ErrorKind::NotFound)
        .unwrap_or(false)
}

impl ServerConfig {
    fn normalize_from_env(&mut self) {
        if let Ok(host) = std::env::var("SERVER_HOST") {
            if !host.trim().is_empty() {
                self.host = host;
            }
        }
        if let Some(port) = std::env::var("SERVER_PORT").ok().and_then(|p| p.parse::<u16>().ok()) {
            self.port = port;
        }
        if let Some(w) = std::env::var("TOKIO_WORKER_THREADS").ok().and_then(|v| v.parse::<usize>().ok()) {
            self.worker_threads = Some(w);
        }
    }

    fn normalize(&mut self) -> Result<()> {
        if self.host.trim().is_empty() {
            self.host = "127.0.0.1".to_string();
        }
        if self.port == 0 {
            return Err(anyhow!("server.port must be within 1..=65535"));
        }
        match self.worker_threads {
            Some(0) | None => self.worker_threads = Some(4),
            Some(_) => {}
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl DatabaseConfig {
    pub fn normalize_from_env(&mut self) {
        if self.url.trim().is_empty() {
            if let Ok(url) = std::env::var("DATABASE_URL") {
                self.url = url;
            }
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
            return Err(anyhow!("database timeouts must be positive seconds"));
        }
        Ok(())
    }
}

impl AuthSettings {
    /// `ACCESS_TOKEN_SECRET` fills an empty secret.
    pub fn normalize_from_env(&mut self) {
        if self.jwt_secret.trim().is_empty() {
            if let Ok(secret) = std::env::var("ACCESS_TOKEN_SECRET") {
                self.jwt_secret = secret;
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.jwt_secret.trim().is_empty() {
            return Err(anyhow!("auth.jwt_secret is empty; set it in config.toml or ACCESS_TOKEN_SECRET"));
        }
        if self.token_ttl_secs == 0 {
            return Err(anyhow!("auth.token_ttl_secs must be positive"));
        }
        if self.token_ttl_secs > MAX_TOKEN_TTL_SECS {
            return Err(anyhow!("auth.token_ttl_secs must be <= {} (ten years)", MAX_TOKEN_TTL_SECS));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_file() {
        let cfg = parse(
            r#"
            [server]
            host = "0.0.0.0"
            port = 8080

            [database]
            url = "postgres://u:p@localhost:5432/locais"
            max_connections = 5

            [auth]
            jwt_secret = "s3cret"

            [storage]
            backend = "memory"
            seed_path = "data/locations.json"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.server.bind_addr(), "0.0.0.0:8080");
        assert_eq!(cfg.database.max_connections, 5);
        assert_eq!(cfg.database.min_connections, 2);
        assert_eq!(cfg.auth.token_ttl_secs, 3600);
        assert_eq!(cfg.storage.backend, StorageBackend::Memory);
        assert_eq!(cfg.storage.seed_path.as_deref(), Some("data/locations.json"));
    }

    #[test]
    fn empty_file_uses_defaults() {
        let cfg = parse("").unwrap();
        assert_eq!(cfg.server.port, 3000);
        assert_eq!(cfg.storage.backend, StorageBackend::Postgres);
        assert!(cfg.storage.seed_path.is_none());
    }

    #[test]
    fn database_url_must_be_postgres() {
        let db = DatabaseConfig { url: "mysql://localhost/x".into(), ..DatabaseConfig::default() };
        assert!(db.validate().is_err());
        let db = DatabaseConfig { url: "postgres://localhost/x".into(), ..DatabaseConfig::default() };
        assert!(db.validate().is_ok());
    }

    #[test]
    fn pool_bounds_are_checked() {
        let db = DatabaseConfig {
            url: "postgres://localhost/x".into(),
            min_connections: 5,
            max_connections: 2,
            ..DatabaseConfig::default()
        };
        assert!(db.validate().is_err());
    }

    #[test]
    fn auth_requires_secret_and_ttl() {
        let auth = AuthSettings { jwt_secret: "x".into(), token_ttl_secs: 0 };
        assert!(auth.validate().is_err());
        let auth = AuthSettings { jwt_secret: " ".into(), token_ttl_secs: 60 };
        assert!(auth.validate().is_err());
        let auth = AuthSettings { jwt_secret: "x".into(), token_ttl_secs: 60 };
        assert!(auth.validate().is_ok());
    }

    #[test]
    fn token_ttl_has_an_upper_bound() {
        let at_bound = AuthSettings { jwt_secret: "x".into(), token_ttl_secs: MAX_TOKEN_TTL_SECS };
        assert!(at_bound.validate().is_ok());
        for ttl in [MAX_TOKEN_TTL_SECS + 1, 10_000_000_000_000, 100_000_000_000_000_000, u64::MAX] {
            let auth = AuthSettings { jwt_secret: "x".into(), token_ttl_secs: ttl };
            assert!(auth.validate().is_err(), "ttl {ttl} accepted");
        }
    }

    #[test]
    fn zero_worker_threads_normalized() {
        let mut s = ServerConfig { host: " ".into(), port: 80, worker_threads: Some(0) };
        s.normalize().unwrap();
        assert_eq!(s.host, "127.0.0.1");
        assert_eq!(s.worker_threads, Some(4));
    }
}
