//! bazaar-rs server binary.

use std::path::PathBuf;

use clap::Parser;

use bazaar_rs::config::ConfigLoader;
use bazaar_rs::logger::init_logger;
use bazaar_rs::server::Server;

/// Marketplace transaction and user management API server
#[derive(Parser, Debug)]
#[command(name = "bazaar-rs", version, about)]
struct Cli {
    /// Configuration directory holding default.toml and its overrides
    #[arg(short, long, value_name = "DIR", env = "BAZAAR_CONFIG_DIR")]
    config_dir: Option<PathBuf>,

    /// Host address to bind to, overriding the configured value
    #[arg(long, value_name = "ADDRESS")]
    host: Option<String>,

    /// Port to listen on, overriding the configured value
    #[arg(short, long, value_name = "PORT")]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut loader = ConfigLoader::new()?;
    if let Some(config_dir) = cli.config_dir {
        loader = loader.with_config_dir(config_dir);
    }
    let mut settings = loader.load()?;

    // CLI flags beat every configuration source.
    if let Some(host) = cli.host {
        settings.server.host = host;
    }
    if let Some(port) = cli.port {
        settings.server.port = port;
    }

    init_logger(&settings.logger)?;

    Server::new(settings).run().await
}
