use std::env;
use std::path::PathBuf;

use thiserror::Error;

/// Default ceiling for a single uploaded file: 5 MiB.
pub const DEFAULT_MAX_UPLOAD_BYTES: u64 = 5 * 1024 * 1024;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("{name} has an invalid value {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// Server settings, read from the environment after `dotenv()`.
#[derive(Debug, Clone)]
pub struct Settings {
    pub database_url: String,
    pub port: u16,
    pub upload_dir: PathBuf,
    /// Prefix for stored image URLs. Empty means URLs stay relative (`/uploads/...`).
    pub public_base_url: String,
    pub admin_login: String,
    pub admin_password: String,
    pub jwt_secret: String,
    pub session_ttl_secs: i64,
    pub max_upload_bytes: u64,
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            port: parsed("PORT", 8080)?,
            upload_dir: PathBuf::from(optional("UPLOAD_DIR", "./uploads")),
            public_base_url: optional("PUBLIC_BASE_URL", "")
                .trim_end_matches('/')
                .to_string(),
            admin_login: optional("ADMIN_LOGIN", "admin"),
            admin_password: optional("ADMIN_PASSWORD", "admin123"),
            jwt_secret: required("JWT_SECRET")?,
            session_ttl_secs: session_ttl(parsed("SESSION_TTL_SECS", 86_400)?)?,
            max_upload_bytes: parsed("MAX_UPLOAD_BYTES", DEFAULT_MAX_UPLOAD_BYTES)?,
        })
    }

    /// Public URL under which a stored file is served.
    pub fn image_url(&self, filename: &str) -> String {
        format!("{}/uploads/{filename}", self.public_base_url)
    }
}

/// Client-side settings: where the backend lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub backend_url: String,
}

impl ClientConfig {
    pub fn new(backend_url: impl Into<String>) -> Self {
        Self {
            backend_url: backend_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        required("BACKEND_URL").map(Self::new)
    }

    /// Root of the REST surface, `{BACKEND_URL}/api`.
    pub fn api_root(&self) -> String {
        format!("{}/api", self.backend_url)
    }
}

fn required(name: &'static str) -> Result<String, ConfigError> {
    env::var(name).map_err(|_| ConfigError::Missing(name))
}

fn optional(name: &'static str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

fn parsed<T: std::str::FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(name) {
        Ok(value) => value
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
        Err(_) => Ok(default),
    }
}

/// A session lifetime must be positive and representable as a `chrono::Duration`.
fn session_ttl(secs: i64) -> Result<i64, ConfigError> {
    match chrono::Duration::try_seconds(secs) {
        Some(_) if secs > 0 => Ok(secs),
        _ => Err(ConfigError::Invalid {
            name: "SESSION_TTL_SECS",
            value: secs.to_string(),
        }),
    }
}
