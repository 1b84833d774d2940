mod fakes;

use crate::{AccountService, Caller, ProfileService, ProfileSettings, RetryPolicy};

use fakes::{FakeIdentityProvider, FakeProfileStore};

use std::sync::Arc;
use std::time::Duration;

pub(crate) struct Harness {
    pub identity: Arc<FakeIdentityProvider>,
    pub store: Arc<FakeProfileStore>,
    pub profiles: ProfileService,
    pub accounts: AccountService,
}

pub(crate) fn fast_retry() -> RetryPolicy {
    RetryPolicy {
        initial_delay: Duration::ZERO,
        max_delay: Duration::ZERO,
        jitter: false,
        ..RetryPolicy::default()
    }
}

pub(crate) fn harness() -> Harness {
    let identity = Arc::new(FakeIdentityProvider::default());
    let store = Arc::new(FakeProfileStore::default());
    let settings = ProfileSettings {
        retry: fast_retry(),
        ..ProfileSettings::default()
    };

    Harness {
        profiles: ProfileService::new(identity.clone(), store.clone(), settings.clone()),
        accounts: AccountService::new(identity.clone(), store.clone(), settings.limits),
        identity,
        store,
    }
}

pub(crate) fn caller(uid: &str, admin: bool) -> Caller {
    Caller {
        uid: uid.to_string(),
        email: format!("{}@example.com", uid),
        email_verified: true,
        admin,
    }
}
