//! tradarts-web - traditional-arts catalog service
//!
//! Startup order: tracing, build identification, configuration, data folder,
//! session restore, then the HTTP server with graceful shutdown.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use tradarts_common::config::{DataFolderInitializer, DataFolderResolver, TomlConfig};
use tradarts_common::events::EventBus;
use tradarts_common::time::millis_to_duration;
use tradarts_web::session::{FileSessionStore, MockAuthenticator, SessionService};
use tradarts_web::{build_router, AppState};

#[derive(Parser, Debug)]
#[command(name = "tradarts-web")]
#[command(about = "Traditional-arts catalog, session and challenge service")]
#[command(version)]
struct Args {
    /// Port to listen on (overrides config file)
    #[arg(short, long, env = "TRADARTS_PORT")]
    port: Option<u16>,

    /// Address to bind (overrides config file)
    #[arg(short, long, env = "TRADARTS_BIND")]
    bind: Option<String>,

    /// Folder holding the session record
    #[arg(short, long, env = "TRADARTS_DATA_FOLDER")]
    data_folder: Option<PathBuf>,

    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tradarts_web=info,tradarts_common=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!(
        "Starting TradArts (tradarts-web) v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    let args = Args::parse();
    let config = TomlConfig::load_or_default(args.config.as_deref());

    let data_folder = DataFolderResolver::new()
        .with_cli_arg(args.data_folder.clone())
        .with_config(&config)
        .resolve();
    let initializer = DataFolderInitializer::new(data_folder);
    initializer
        .ensure_directory_exists()
        .context("Failed to create data folder")?;
    info!("Data folder: {}", initializer.data_folder().display());

    let events = EventBus::default();
    let session = SessionService::new(
        Arc::new(MockAuthenticator::new(config.session)),
        Arc::new(FileSessionStore::new(initializer.session_file_path())),
        events.clone(),
    )
    .with_update_delay(millis_to_duration(config.session.update_delay_ms));
    session
        .restore()
        .await
        .context("Failed to restore session")?;

    let state = AppState::new(Arc::new(session), events);
    let app = build_router(state);

    let bind = args.bind.unwrap_or(config.server.bind);
    let port = args.port.unwrap_or(config.server.port);
    let addr: SocketAddr = format!("{}:{}", bind, port)
        .parse()
        .with_context(|| format!("Invalid bind address {}:{}", bind, port))?;

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("tradarts-web listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        },
        _ = terminate => {
            info!("Received terminate signal, shutting down");
        },
    }
}
