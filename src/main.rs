//! tfc-cli - Main entry point

use clap::Parser;
use log::{debug, info};

use tfc_cli::Cli;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    info!("Starting tfc-cli v{}", env!("CARGO_PKG_VERSION"));
    debug!(
        "CLI args: host={:?}, org={:?}, output={}, batch={}",
        cli.host, cli.org, cli.output, cli.batch
    );

    if let Err(e) = tfc_cli::run(&cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
