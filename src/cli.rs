use clap::{Parser, Subcommand};
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(about = "Portfolio site server", long_about = None)]
pub struct Cli {
    /// Configuration file (overrides FOLIO_CONFIG)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Serve the site over HTTP
    Serve(ServeArgs),
    /// Render every page into a directory of static HTML
    Export(ExportArgs),
}

#[derive(clap::Args, Debug)]
pub struct ServeArgs {
    /// Address to bind the HTTP server to (defaults to server.bind_addr)
    #[arg(long)]
    pub address: Option<SocketAddr>,
}

#[derive(clap::Args, Debug)]
pub struct ExportArgs {
    /// Output directory
    #[arg(long, default_value = "dist")]
    pub out: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_serve() {
        let cli = Cli::parse_from(["folio", "serve", "--address", "127.0.0.1:3000"]);
        match cli.command {
            Commands::Serve(args) => {
                assert_eq!(args.address, Some("127.0.0.1:3000".parse().unwrap()))
            }
            Commands::Export(_) => panic!("expected serve"),
        }
    }

    #[test]
    fn test_parse_export_defaults() {
        let cli = Cli::parse_from(["folio", "export", "--config", "site.toml"]);
        assert_eq!(cli.config, Some(PathBuf::from("site.toml")));
        match cli.command {
            Commands::Export(args) => assert_eq!(args.out, PathBuf::from("dist")),
            Commands::Serve(_) => panic!("expected export"),
        }
    }
}
