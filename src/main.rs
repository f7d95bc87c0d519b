mod cli;

use clap::Parser;
use cli::{Cli, Commands};
use folio::config::Config;
use folio::site::{Site, export};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let config = match cli.config {
        Some(path) => Config::load_from_path(path)?,
        None => Config::load()?,
    };

    match cli.command {
        Commands::Serve(args) => {
            let address = args.address.unwrap_or(config.server.bind_addr);
            folio::web::run(address, config).await?
        }
        Commands::Export(args) => {
            let site = Site::load(Arc::new(config), None).await?;
            let summary = export(site, &args.out).await?;
            info!(pages = summary.pages, out = %summary.out_dir.display(), "Site exported");
        }
    }

    Ok(())
}
