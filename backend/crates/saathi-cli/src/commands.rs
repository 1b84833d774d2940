use crate::{profile_commands::ProfileCommands, users_commands::UsersCommands};

use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Create an account
    Signup {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        display_name: String,
        /// E.164 phone number, e.g. +919876543210
        #[arg(long)]
        phone_number: Option<String>,
    },

    /// Sign in and store the session token
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },

    /// Forget the stored session token
    Logout,

    /// Show the signed-in account and its profile status
    Session,

    /// Redeem the code from a verification email
    VerifyEmail {
        code: String,
    },

    /// Send another verification email
    ResendVerification,

    /// Profile operations
    Profile {
        #[command(subcommand)]
        action: ProfileCommands,
    },

    /// Admin operations on other accounts
    Users {
        #[command(subcommand)]
        action: UsersCommands,
    },
}
