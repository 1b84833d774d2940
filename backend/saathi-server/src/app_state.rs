use saathi_core::{IdentityProvider, ProfileStore};
use saathi_profile::{AccountService, Authenticator, ProfileService, ProfileSettings};

use std::sync::Arc;

/// Shared handler state; collaborators are built once at startup
#[derive(Clone)]
pub struct AppState {
    pub authenticator: Authenticator,
    pub accounts: AccountService,
    pub profiles: ProfileService,
}

impl AppState {
    pub fn new(
        identity: Arc<dyn IdentityProvider>,
        store: Arc<dyn ProfileStore>,
        settings: ProfileSettings,
    ) -> Self {
        Self {
            authenticator: Authenticator::new(identity.clone()),
            accounts: AccountService::new(identity.clone(), store.clone(), settings.limits),
            profiles: ProfileService::new(identity, store, settings),
        }
    }
}
