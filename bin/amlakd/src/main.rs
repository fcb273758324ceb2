//! `amlakd` — the Amlak listing platform server binary.
//!
//! Usage:
//!   amlakd -c <context-name-or-path> [--listen <addr>]
//!
//! The context name resolves to `/etc/amlak/<name>.toml`.
//! If a path with `/` or `.` is given, it's used directly.

mod auth_middleware;
mod bootstrap;
mod config;
mod routes;

use std::sync::Arc;

use clap::Parser;
use tracing::info;

use config::ServerConfig;

/// Amlak server.
#[derive(Parser, Debug)]
#[command(name = "amlakd", about = "Amlak listing platform server")]
struct Cli {
    /// Context name or path to config file.
    #[arg(short = 'c', long = "config", required = true)]
    config: String,

    /// Listen address.
    #[arg(long = "listen", default_value = "0.0.0.0:8080")]
    listen: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    // Load server configuration.
    let config_path = ServerConfig::resolve_path(&cli.config);
    info!("Loading configuration from {}", config_path.display());
    let server_config = ServerConfig::load(&config_path)?;

    // Verify configuration is valid.
    bootstrap::verify_config(&server_config)?;

    // Initialize storage (shared by both modules).
    std::fs::create_dir_all(&server_config.storage.data_dir)?;
    let sql: Arc<dyn amlak_sql::SQLStore> = Arc::new(
        amlak_sql::SqliteStore::open(&server_config.sqlite_path())
            .map_err(|e| anyhow::anyhow!("failed to open SQL store: {}", e))?,
    );

    // ── Modules ──

    let auth_config = auth::service::AuthConfig {
        jwt_secret: server_config.jwt.secret.clone(),
        token_ttl_secs: server_config.jwt.expire_secs,
    };
    let auth_module = auth::AuthModule::new(Arc::clone(&sql), auth_config)?;
    info!("Auth module initialized");

    // Seed the bootstrap admin so user creation is reachable.
    bootstrap::ensure_admin_user(auth_module.service(), &server_config)?;

    let listings_module =
        listings::ListingsModule::new(Arc::clone(&sql), Arc::clone(auth_module.service()))?;
    info!("Listings module initialized");

    // Build router: module routes + system endpoints, token middleware
    // over everything.
    let app = routes::build_router(
        Arc::clone(auth_module.service()),
        vec![auth_module.routes(), listings_module.routes()],
    );

    // Start server.
    let listener = tokio::net::TcpListener::bind(&cli.listen).await?;
    info!("amlakd listening on {}", cli.listen);
    axum::serve(listener, app).await?;

    Ok(())
}
