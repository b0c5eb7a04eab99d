use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "repolens",
    version,
    about = "Analyze a codebase with an LLM and write Markdown reports"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Analyze a project directory or remote repository
    Analyze {
        /// Project directory or GitHub URL (prompted for when omitted)
        path: Option<String>,

        /// Output directory for reports (prompted for when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Skip the confirmation and run the full-project pass
        #[arg(long)]
        yes: bool,
    },
    /// Verify API configuration and connectivity
    Check,
}
