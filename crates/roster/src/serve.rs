//! `roster serve`.

use std::path::Path;

use anyhow::{Context, Result};
use roster_core::constants::API_PREFIX;
use roster_server::{RosterServer, ServerConfig};
use roster_settings::RosterSettings;
use roster_store::{ConnectionConfig, EmployeeStore};
use tokio::net::TcpListener;
use tracing::info;

use crate::ServeArgs;

/// Load settings (file, env, then flags), open the store and serve until Ctrl-C.
pub async fn run(args: ServeArgs) -> Result<()> {
    let settings_path = args
        .settings
        .clone()
        .unwrap_or_else(roster_settings::settings_path);
    let mut settings = roster_settings::load_settings_from_path(&settings_path)
        .with_context(|| format!("Failed to load settings from {}", settings_path.display()))?;
    args.apply(&mut settings);

    roster_logging::init_subscriber(&settings.logging.level, settings.logging.format);

    let server = build_server(&settings)?;
    let addr = server.config().bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    let shutdown = server.shutdown().clone();
    drop(tokio::spawn(async move { shutdown.shutdown_on_ctrl_c().await }));

    server.serve(listener).await.context("Server error")?;
    info!("shutdown complete");
    Ok(())
}

fn build_server(settings: &RosterSettings) -> Result<RosterServer> {
    let db = &settings.database;
    let store = EmployeeStore::open(
        Path::new(&db.path),
        &ConnectionConfig {
            pool_size: db.pool_size,
            busy_timeout_ms: db.busy_timeout_ms,
        },
    )
    .with_context(|| format!("Failed to open employee database at {}", db.path))?;

    let config = ServerConfig {
        host: settings.server.host.clone(),
        port: settings.server.port,
        api_prefix: API_PREFIX.into(),
    };
    Ok(RosterServer::new(config, store))
}
