mod config;

use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use sea_orm::Database;
use sea_orm_migration::MigratorTrait;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use calculations::api::rest::routes::router;
use calculations::infra::storage::migrations::Migrator;
use calculations::infra::storage::sea_orm_repo::SeaOrmCalculationsRepository;
use calculations::Service;

use crate::config::AppConfig;

/// MathSvc - arithmetic calculation service
#[derive(Parser)]
#[command(name = "mathsvc-server")]
#[command(about = "MathSvc - arithmetic calculation service")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Port override for the HTTP server (overrides config)
    #[arg(short, long)]
    port: Option<u16>,

    /// Print effective configuration and exit
    #[arg(long)]
    print_config: bool,

    /// Log verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the server
    Run,
    /// Validate configuration and exit
    Check,
}

fn init_logging(config: &AppConfig, verbose: u8) {
    let level = match verbose {
        0 => config.logging.level.as_str(),
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn bind_addr(config: &AppConfig, port_override: Option<u16>) -> Result<SocketAddr> {
    let mut addr: SocketAddr = config
        .server
        .bind_addr
        .parse()
        .with_context(|| format!("invalid bind address: {}", config.server.bind_addr))?;
    if let Some(port) = port_override {
        addr.set_port(port);
    }
    Ok(addr)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for shutdown signal");
    }
}

async fn serve(config: &AppConfig, port_override: Option<u16>) -> Result<()> {
    let addr = bind_addr(config, port_override)?;

    let db = Database::connect(&config.database.url)
        .await
        .with_context(|| format!("cannot connect to database: {}", config.database.url))?;
    Migrator::up(&db, None).await.context("migration failed")?;

    let repo = Arc::new(SeaOrmCalculationsRepository::new(db));
    let service = Arc::new(Service::new(repo));
    let app = router(service).layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("cannot bind {addr}"))?;
    info!(%addr, "MathSvc listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(ref path) = cli.config {
        if !Path::new(path).is_file() {
            anyhow::bail!("config file does not exist: {}", path.display());
        }
    }

    let config = AppConfig::load(cli.config.as_deref())?;
    init_logging(&config, cli.verbose);

    if cli.print_config {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    match cli.command {
        Some(Commands::Check) => {
            bind_addr(&config, cli.port)?;
            info!("Configuration OK");
            Ok(())
        }
        Some(Commands::Run) | None => serve(&config, cli.port).await,
    }
}
