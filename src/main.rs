use crate::generator::launch;
use anyhow::Result;
use clap::Parser;

mod branch;
mod cli;
mod config;
mod generator;
mod llm;

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::Args::parse();
    let config = args.into_config();

    launch(&config).await
}
