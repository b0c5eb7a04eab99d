use anyhow::Result;
use clap::Parser;

use repolens::cli::{run_analyze, run_check, Args, Command};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    match args.command {
        Some(Command::Analyze { path, output, yes }) => run_analyze(path, output, yes).await,
        Some(Command::Check) => run_check().await,
        None => run_analyze(None, None, false).await,
    }
}
