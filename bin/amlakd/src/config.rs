//! Server configuration.
//!
//! Loaded once at startup from a TOML file and never mutated afterwards.
//! The context name resolves to `/etc/amlak/<name>.toml`; a value
//! containing `/` or `.` is used as a path directly. The JWT secret may
//! be overridden with `AMLAK_JWT_SECRET` so it can stay out of the file.

use std::path::{Path, PathBuf};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub storage: StorageConfig,
    pub jwt: JwtConfig,
    pub admin: AdminConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Directory holding the SQLite database.
    pub data_dir: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JwtConfig {
    /// Signing secret. Process-wide; read-only after startup.
    #[serde(default)]
    pub secret: String,

    /// Token lifetime in seconds (default: 1 day).
    #[serde(default = "default_expire_secs")]
    pub expire_secs: i64,
}

fn default_expire_secs() -> i64 {
    86400
}

/// Bootstrap admin credentials: username plus an argon2 hash produced
/// out of band. The plaintext password never appears in configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AdminConfig {
    pub username: String,
    pub password_hash: String,
}

impl ServerConfig {
    /// Resolve a context name or explicit path to a config file path.
    pub fn resolve_path(name_or_path: &str) -> PathBuf {
        if name_or_path.contains('/') || name_or_path.contains('.') {
            PathBuf::from(name_or_path)
        } else {
            PathBuf::from(format!("/etc/amlak/{}.toml", name_or_path))
        }
    }

    /// Load the configuration, applying environment overrides.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read {}: {}", path.display(), e))?;
        let mut config: ServerConfig = toml::from_str(&raw)
            .map_err(|e| anyhow::anyhow!("failed to parse {}: {}", path.display(), e))?;

        if let Ok(secret) = std::env::var("AMLAK_JWT_SECRET") {
            config.jwt.secret = secret;
        }

        Ok(config)
    }

    /// Path of the SQLite database inside the data dir.
    pub fn sqlite_path(&self) -> PathBuf {
        Path::new(&self.storage.data_dir).join("amlak.sqlite")
    }
}
