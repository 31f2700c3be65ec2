use std::{env, net::SocketAddr};

use axum::Router;
use common::utils::logging::{init_logging, init_logging_default};
use dotenvy::dotenv;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::errors::StartupError;
use crate::routes;
use crate::state::ServerState;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Load host/port from configs or env vars, with sensible fallbacks
fn load_bind_addr(cfg: Option<&configs::ServerConfig>) -> anyhow::Result<SocketAddr> {
    let (host, port) = match cfg {
        Some(s) => (s.host.clone(), s.port),
        None => {
            let host = env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
            let port = env::var("SERVER_PORT")
                .ok()
                .and_then(|p| p.parse::<u16>().ok())
                .unwrap_or(8080);
            (host, port)
        }
    };
    let addr = format!("{}:{}", host, port)
        .parse::<SocketAddr>()
        .map_err(|e| StartupError::InvalidConfig(format!("bind address {host}:{port}: {e}")))?;
    Ok(addr)
}

/// Read `config.toml` (or `CONFIG_PATH`). A missing file falls back to env vars; a present but invalid one is fatal.
pub fn load_config() -> anyhow::Result<Option<configs::AppConfig>> {
    let path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    load_config_from(&path)
}

fn load_config_from(path: &str) -> anyhow::Result<Option<configs::AppConfig>> {
    if !std::path::Path::new(path).exists() {
        return Ok(None);
    }
    let mut cfg = configs::load_from_file(path)
        .map_err(|e| StartupError::InvalidConfig(format!("{path}: {e}")))?;
    cfg.normalize_and_validate()
        .map_err(|e| StartupError::InvalidConfig(e.to_string()))?;
    Ok(Some(cfg))
}

/// Build the router around an already migrated database.
pub fn build_app(db: sea_orm::DatabaseConnection) -> Router {
    routes::build_router(ServerState::new(db), build_cors())
}

/// Public entry: build the app and run the HTTP server.
///
/// `cfg` comes from [`load_config`]; `None` means env vars only.
pub async fn run(cfg: Option<configs::AppConfig>) -> anyhow::Result<()> {
    dotenv().ok();

    match &cfg {
        Some(c) => init_logging(c.log.json, c.log.filter.as_deref()),
        None => init_logging_default(),
    }
    if cfg.is_none() {
        warn!("no config file found; using DATABASE_URL / SERVER_HOST / SERVER_PORT");
    }

    // DB connection + schema
    let db_cfg = match &cfg {
        Some(c) => models::db::DatabaseConfig::from(c.database.clone()),
        None => models::db::DatabaseConfig::from_env(),
    };
    let db = models::db::connect_and_migrate(&db_cfg).await?;
    models::db::test_connection(&db).await?;

    let app = build_app(db);

    // Bind and serve
    let addr = load_bind_addr(cfg.as_ref().map(|c| &c.server))?;
    info!(%addr, "starting employee service");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
