//! OGP CLI - Command line tool for querying oil & gas production data.

use clap::Parser;
use ogp_core::config::{ApiConfig, DEFAULT_API_URL};

#[derive(Parser)]
#[command(
    name = "ogp-cli",
    version,
    about = "Oil & Gas production data toolkit"
)]
struct Cli {
    /// Backend base URL
    #[arg(long, env = "OGP_API_URL", default_value = DEFAULT_API_URL, global = true)]
    api_url: String,

    #[command(subcommand)]
    command: ogp_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let config = ApiConfig::new(&cli.api_url)?;
    ogp_cmd::run(config, cli.command).await
}
