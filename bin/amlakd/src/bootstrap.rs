//! Bootstrap — first-start checks and admin user seeding.
//!
//! When amlakd starts:
//! 1. Verify the config carries a JWT secret and a valid admin hash —
//!    refuse to start otherwise.
//! 2. Ensure the bootstrap admin user exists, so the admin-only user
//!    creation flow is reachable on a fresh database.

use password_hash::PasswordHash;
use tracing::info;

use auth::service::AuthService;

use crate::config::ServerConfig;

/// Verify server configuration is ready for use.
pub fn verify_config(config: &ServerConfig) -> anyhow::Result<()> {
    if config.jwt.secret.is_empty() {
        anyhow::bail!(
            "JWT secret is empty — set [jwt].secret or the AMLAK_JWT_SECRET environment variable."
        );
    }
    if config.storage.data_dir.is_empty() {
        anyhow::bail!("Storage data_dir is empty in configuration.");
    }
    if config.admin.username.is_empty() {
        anyhow::bail!("Admin username is empty in configuration.");
    }
    if PasswordHash::new(&config.admin.password_hash).is_err() {
        anyhow::bail!("Admin password_hash is not a valid PHC hash string.");
    }
    Ok(())
}

/// Seed the bootstrap admin if no live user holds the configured username.
pub fn ensure_admin_user(svc: &AuthService, config: &ServerConfig) -> anyhow::Result<()> {
    let created = svc
        .ensure_admin(&config.admin.username, &config.admin.password_hash, "Administrator")
        .map_err(|e| anyhow::anyhow!("failed to seed admin user: {}", e))?;

    match created {
        Some(user) => info!("Created bootstrap admin user '{}'", user.username),
        None => info!("Bootstrap admin user already exists"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AdminConfig, JwtConfig, StorageConfig};

    fn valid_config() -> ServerConfig {
        ServerConfig {
            storage: StorageConfig { data_dir: "/tmp/amlak".to_string() },
            jwt: JwtConfig { secret: "test-secret".to_string(), expire_secs: 3600 },
            admin: AdminConfig {
                username: "admin".to_string(),
                // A syntactically valid argon2id PHC string.
                password_hash:
                    "$argon2id$v=19$m=19456,t=2,p=1$MDEyMzQ1Njc4OWFiY2RlZg$GpZ3sK/oH9p7bIDIQ2f5dXo21pwcXJtWPXM5PK9oByA"
                        .to_string(),
            },
        }
    }

    #[test]
    fn test_verify_config_ok() {
        assert!(verify_config(&valid_config()).is_ok());
    }

    #[test]
    fn test_verify_config_empty_secret() {
        let mut config = valid_config();
        config.jwt.secret = String::new();
        assert!(verify_config(&config).is_err());
    }

    #[test]
    fn test_verify_config_bad_hash() {
        let mut config = valid_config();
        config.admin.password_hash = "not-a-hash".to_string();
        assert!(verify_config(&config).is_err());
    }
}
