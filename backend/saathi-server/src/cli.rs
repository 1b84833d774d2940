use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "saathi-server", version, about = "Career Saathi profile service")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Run the HTTP server (default)
    Serve,
    /// Grant the admin claim to the account with this email
    GrantAdmin { email: String },
    /// Remove the admin claim from the account with this email
    RevokeAdmin { email: String },
    /// Block sign-in and token use for the account with this email
    DisableUser { email: String },
    /// Re-enable a disabled account
    EnableUser { email: String },
}
