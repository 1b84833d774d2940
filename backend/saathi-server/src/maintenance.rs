//! One-shot account maintenance run from the command line.
//!
//! These bypass HTTP authorization, which is how the first admin is created.

use crate::cli::Command;
use crate::error::Result as ServerErrorResult;

use saathi_core::{CustomClaims, IdentityProvider};
use saathi_db::SqliteIdentityProvider;

use log::info;

/// Apply a maintenance command; `Serve` is a no-op here
pub async fn run(command: &Command, provider: &SqliteIdentityProvider) -> ServerErrorResult<()> {
    match command {
        Command::Serve => {}
        Command::GrantAdmin { email } => {
            let identity = provider.find_by_email(email).await?;
            provider
                .set_custom_claims(&identity.uid, CustomClaims::admin(true))
                .await?;
            info!("Granted admin to {} ({})", identity.email, identity.uid);
        }
        Command::RevokeAdmin { email } => {
            let identity = provider.find_by_email(email).await?;
            provider
                .set_custom_claims(&identity.uid, CustomClaims::admin(false))
                .await?;
            info!("Revoked admin from {} ({})", identity.email, identity.uid);
        }
        Command::DisableUser { email } => {
            let identity = provider.find_by_email(email).await?;
            provider.set_disabled(&identity.uid, true).await?;
            info!("Disabled {} ({})", identity.email, identity.uid);
        }
        Command::EnableUser { email } => {
            let identity = provider.find_by_email(email).await?;
            provider.set_disabled(&identity.uid, false).await?;
            info!("Enabled {} ({})", identity.email, identity.uid);
        }
    }

    Ok(())
}
