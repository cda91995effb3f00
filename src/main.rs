mod auth;
mod category;
mod cli;
mod error;
mod models;
mod providers;
mod window;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use log::info;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    info!("Starting RunLens - GitHub Actions Run History Tool");
    cli.execute().await?;

    Ok(())
}
