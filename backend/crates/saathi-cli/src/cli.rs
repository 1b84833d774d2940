use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "saathi")]
#[command(about = "Career Saathi account and profile CLI")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,

    /// Server URL (defaults to the signed-in session's server, then http://127.0.0.1:8000)
    #[arg(long, global = true)]
    pub(crate) server: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub(crate) pretty: bool,
}
