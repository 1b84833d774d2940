use clap::Subcommand;

#[derive(Subcommand)]
pub enum ProfileCommands {
    /// Get a profile (your own unless --uid is given)
    Get {
        #[arg(long)]
        uid: Option<String>,
    },
    /// Create your profile from your account if it is missing
    Ensure,
    /// Update only the given fields
    Update {
        #[arg(long)]
        uid: Option<String>,
        /// JSON object of profile fields, e.g. '{"bio":"..."}'
        #[arg(long)]
        data: String,
    },
    /// Mark the profile complete
    Complete {
        #[arg(long)]
        uid: Option<String>,
    },
    /// Delete the account and its profile
    Delete {
        uid: String,
    },
}
