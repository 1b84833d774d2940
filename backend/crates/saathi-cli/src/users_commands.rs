use clap::Subcommand;

#[derive(Subcommand)]
pub enum UsersCommands {
    /// List profiles, newest first
    List {
        #[arg(long)]
        limit: Option<usize>,
        /// uid of the last profile on the previous page
        #[arg(long)]
        last_doc_id: Option<String>,
    },
    /// Find profiles by email
    Search {
        email: String,
    },
    /// Grant or revoke admin access
    SetAdmin {
        uid: String,
        #[arg(long, action = clap::ArgAction::Set)]
        admin: bool,
    },
}
