use clap::Parser;
use lyra_server::{tracing_config, Server, ServerConfig};
use tracing_subscriber::util::SubscriberInitExt;

use std::{net::SocketAddr, path::PathBuf};

#[derive(Debug, Parser)]
#[command(version, about)]
struct Args
{
    /// Server config file location
    #[arg(short, long)]
    config: PathBuf,

    /// Listen on this address instead of the configured one
    #[arg(short, long)]
    listen: Option<SocketAddr>,
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error>
{
    let args = Args::parse();

    let mut config = ServerConfig::load_file(&args.config)?;
    if let Some(listen) = args.listen
    {
        config.listen = listen;
    }

    tracing_config::build_subscriber(config.log.clone())?.init();
    tracing::info!(server = %config.server_name, version = %config.version, "starting");

    let server = Server::new(config);

    tokio::select! {
        res = server.run() => res?,
        _ = tokio::signal::ctrl_c() => tracing::info!("interrupted, shutting down"),
    }

    Ok(())
}
