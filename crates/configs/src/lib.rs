use anyhow::Result;
use serde::Deserialize;
use anyhow::anyhow;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub auth: AuthConfig,
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
        Self { host: "127.0.0.1".into(), port: 8080, worker_threads: Some(4) }
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

/// Token signing settings shared by the login flow and the request gate.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    #[serde(default)]
    pub jwt_secret: String,
    #[serde(default = "default_token_ttl")]
    pub token_ttl_secs: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self { jwt_secret: String::new(), token_ttl_secs: default_token_ttl() }
    }
}

fn default_max_connections() -> u32 { 10 }
fn default_min_connections() -> u32 { 2 }
fn default_connect_timeout() -> u64 { 30 }
fn default_idle_timeout() -> u64 { 600 }
fn default_max_lifetime() -> u64 { 3600 }
fn default_acquire_timeout() -> u64 { 30 }
fn default_token_ttl() -> u64 { 3600 }

fn is_not_found(e: &anyhow::Error) -> bool {
    e.downcast_ref::<std::io::Error>().map_or(false, |io| io.kind() == std::io::ErrorKind::NotFound)
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
    /// Load `config.toml` when present, otherwise start from defaults and
    /// `SERVER_HOST`/`SERVER_PORT`; then apply environment overrides and validate.
    pub fn load_and_validate() -> Result<Self> {
        let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
        let mut cfg = Self::load_or_env(&path)?;
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    /// The file at `path`, or env defaults when it does not exist. A file that
    /// exists but cannot be read or parsed is an error.
    pub fn load_or_env(path: &str) -> Result<Self> {
        match load_from_file(path) {
            Ok(cfg) => Ok(cfg),
            Err(e) if is_not_found(&e) => Ok(Self::from_env()),
            Err(e) => Err(e.context(format!("failed to load {path}"))),
        }
    }

    pub fn from_env() -> Self {
        let mut cfg = Self::default();
        if let Ok(host) = std::env::var("SERVER_HOST") {
            cfg.server.host = host;
        }
        if let Some(port) = std::env::var("SERVER_PORT").ok().and_then(|p| p.parse::<u16>().ok()) {
            cfg.server.port = port;
        }
        if let Some(w) = std::env::var("TOKIO_WORKER_THREADS").ok().and_then(|v| v.parse::<usize>().ok()) {
            cfg.server.worker_threads = Some(w);
        }
        cfg
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.server.normalize()?;
        self.database.normalize_from_env();
        self.auth.normalize_from_env();
        self.auth.validate()?;
        Ok(())
    }
}

impl ServerConfig {
    fn normalize(&mut self) -> Result<()> {
        if self.host.trim().is_empty() {
            self.host = "127.0.0.1".to_string();
        }
        if self.port == 0 {
            return Err(anyhow!("server.port must be within 1..=65535"));
        }
        match self.worker_threads {
            Some(w) if w > 0 => {}
            _ => self.worker_threads = Some(4),
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl DatabaseConfig {
    pub fn normalize_from_env(&mut self) {
        // DATABASE_URL only fills in a missing url
        if self.url.trim().is_empty() {
            if let Ok(url) = std::env::var("DATABASE_URL") {
                self.url = url;
            }
        }
    }

    /// Checked when the Postgres store is selected; the in-memory store needs no url.
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

impl AuthConfig {
    pub fn normalize_from_env(&mut self) {
        if let Ok(secret) = std::env::var("JWT_SECRET") {
            if !secret.trim().is_empty() {
                self.jwt_secret = secret;
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.jwt_secret.trim().is_empty() {
            return Err(anyhow!("auth.jwt_secret is empty; set it in config.toml or JWT_SECRET"));
        }
        if self.token_ttl_secs == 0 {
            return Err(anyhow!("auth.token_ttl_secs must be positive"));
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
            port = 9000
            worker_threads = 2

            [database]
            url = "postgres://u:p@localhost/market"
            max_connections = 5
            min_connections = 1

            [auth]
            jwt_secret = "s3cret"
            token_ttl_secs = 60
            "#,
        )
        .unwrap();
        assert_eq!(cfg.server.bind_addr(), "0.0.0.0:9000");
        assert_eq!(cfg.database.max_connections, 5);
        assert_eq!(cfg.database.acquire_timeout_secs, 30);
        assert_eq!(cfg.auth.jwt_secret, "s3cret");
        assert_eq!(cfg.auth.token_ttl_secs, 60);
        assert!(cfg.database.validate().is_ok());
        assert!(cfg.auth.validate().is_ok());
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let cfg = parse("").unwrap();
        assert_eq!(cfg.server.port, 8080);
        assert_eq!(cfg.auth.token_ttl_secs, 3600);
        assert_eq!(cfg.database.min_connections, 2);
    }

    #[test]
    fn empty_secret_is_rejected() {
        let auth = AuthConfig::default();
        assert!(auth.validate().is_err());
    }

    #[test]
    fn non_postgres_url_is_rejected() {
        let db = DatabaseConfig { url: "mysql://localhost/x".into(), ..DatabaseConfig::default() };
        assert!(db.validate().is_err());
    }

    fn temp_config(contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("marketplace-config-{}-{}.toml", std::process::id(), contents.len()));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn malformed_file_is_an_error() {
        let path = temp_config("[server\nhost = ");
        let res = AppConfig::load_or_env(path.to_str().unwrap());
        std::fs::remove_file(&path).ok();
        assert!(res.is_err());
    }

    #[test]
    fn mistyped_field_is_an_error() {
        let path = temp_config("[server]\nhost = \"0.0.0.0\"\nport = \"eighty\"\n");
        let res = AppConfig::load_or_env(path.to_str().unwrap());
        std::fs::remove_file(&path).ok();
        let err = res.unwrap_err();
        assert!(err.to_string().contains("failed to load"));
    }

    #[test]
    fn missing_file_falls_back_to_env() {
        let path = std::env::temp_dir().join(format!("marketplace-absent-{}.toml", std::process::id()));
        assert!(AppConfig::load_or_env(path.to_str().unwrap()).is_ok());
    }

    #[test]
    fn zero_worker_threads_normalize_to_default() {
        let mut s = ServerConfig { host: " ".into(), port: 8080, worker_threads: Some(0) };
        s.normalize().unwrap();
        assert_eq!(s.host, "127.0.0.1");
        assert_eq!(s.worker_threads, Some(4));
    }
}
