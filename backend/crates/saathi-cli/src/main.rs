//! saathi - Career Saathi CLI
//!
//! Account and profile management from the terminal. Output is JSON.
//!
//! # Examples
//!
//! ```bash
//! # Create an account, then sign in
//! saathi signup --email asha@example.com --password 'Passw0rd' --display-name "Asha Rao"
//! saathi login --email asha@example.com --password 'Passw0rd'
//!
//! # Fill in part of the profile and mark it complete
//! saathi profile update --data '{"skills":["Rust"],"location":"Pune"}'
//! saathi profile complete
//! ```

mod cli;
mod commands;
mod profile_commands;
mod users_commands;

use crate::{
    cli::Cli, commands::Commands, profile_commands::ProfileCommands,
    users_commands::UsersCommands,
};

use saathi_cli::{CliClientResult, Client, ClientError, LocalState, StoredSession};
use saathi_core::{ProfileUpdate, SignupRequest};

use std::process::ExitCode;

use chrono::{DateTime, Utc};
use clap::Parser;
use serde_json::{Value, json};

const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8000";

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = run(cli.command, cli.server.as_deref()).await;

    match result {
        Ok(value) => {
            let output = if cli.pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };

            match output {
                Ok(json) => {
                    println!("{}", json);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error serializing response: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(command: Commands, server: Option<&str>) -> CliClientResult<Value> {
    let mut state = LocalState::open()?;
    let now = Utc::now();

    // Explicit flag > server of the stored session > local default
    let server_url = match server {
        Some(url) => url.to_string(),
        None => state
            .stored_session()?
            .map(|session| session.server)
            .unwrap_or_else(|| DEFAULT_SERVER_URL.to_string()),
    };

    match command {
        Commands::Signup {
            email,
            password,
            display_name,
            phone_number,
        } => {
            let request = SignupRequest {
                email,
                password,
                display_name,
                phone_number,
            };
            let response = Client::new(&server_url, None).signup(&request).await?;
            state.record_signup(&response)?;
            Ok(response)
        }
        Commands::Login { email, password } => {
            let sign_in = Client::new(&server_url, None)
                .login(&email, &password)
                .await?;
            state.record_sign_in(&server_url, &email, &sign_in, now)?;
            announce_verification(&mut state, &sign_in.uid);

            let stored = state.active_session(now)?;
            Ok(json!({
                "uid": stored.uid,
                "email": stored.email,
                "emailVerified": sign_in.email_verified,
                "expiresAt": stored.expires_at,
            }))
        }
        Commands::Logout => Ok(json!({ "signedOut": state.sign_out()? })),
        Commands::VerifyEmail { code } => Client::new(&server_url, None).verify_email(&code).await,

        Commands::Session => {
            let (_, client) = authenticated(&state, &server_url, now)?;
            let summary = client.session().await?;
            let (uid, _) = state.record_session(&summary)?;
            announce_verification(&mut state, &uid);
            Ok(summary)
        }
        Commands::ResendVerification => {
            let (_, client) = authenticated(&state, &server_url, now)?;
            client.resend_verification().await
        }

        Commands::Profile { action } => {
            let (session, client) = authenticated(&state, &server_url, now)?;
            match action {
                ProfileCommands::Get { uid } => client.get_profile(uid.as_deref()).await,
                ProfileCommands::Ensure => client.ensure_profile().await,
                ProfileCommands::Update { uid, data } => {
                    let update: ProfileUpdate = serde_json::from_str(&data)
                        .map_err(|e| ClientError::validation(Some("data"), e.to_string()))?;
                    client.update_profile(uid.as_deref(), &update).await
                }
                ProfileCommands::Complete { uid } => {
                    client.complete_profile(uid.as_deref()).await
                }
                ProfileCommands::Delete { uid } => {
                    let response = client.delete_profile(&uid).await?;
                    // The token of a deleted account is dead
                    if uid == session.uid {
                        state.sign_out()?;
                    }
                    Ok(response)
                }
            }
        }

        Commands::Users { action } => {
            let (_, client) = authenticated(&state, &server_url, now)?;
            match action {
                UsersCommands::List { limit, last_doc_id } => {
                    client.list_users(limit, last_doc_id.as_deref()).await
                }
                UsersCommands::Search { email } => client.search_users(&email).await,
                UsersCommands::SetAdmin { uid, admin } => client.set_admin(&uid, admin).await,
            }
        }
    }
}

fn authenticated(
    state: &LocalState,
    server_url: &str,
    now: DateTime<Utc>,
) -> CliClientResult<(StoredSession, Client)> {
    let session = state.active_session(now)?;
    let client = Client::new(server_url, Some(&session.id_token));
    Ok((session, client))
}

/// Print the completion hint the first time a verified session is seen
fn announce_verification(state: &mut LocalState, uid: &str) {
    if let Some(hint) = state.take_completion_hint(uid) {
        eprintln!("{}", hint);
    }
}
