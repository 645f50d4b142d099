use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod config;
mod routes;

use config::ServerConfig;

#[derive(Parser)]
#[command(name = "rankscan-server", about = "Query service for extracted ranking data")]
struct Cli {
    /// TOML config file; built-in defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the listen address from the config.
    #[arg(short, long)]
    listen: Option<SocketAddr>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let mut config = match &cli.config {
        Some(path) => ServerConfig::load(path)?,
        None => ServerConfig::default(),
    };
    if let Some(listen) = cli.listen {
        config.listen_addr = listen;
    }

    let addr = config.listen_addr;
    tracing::info!(%addr, "Starting query service");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, routes::router(config)).await?;
    Ok(())
}
