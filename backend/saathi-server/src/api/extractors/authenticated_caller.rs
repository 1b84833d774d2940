//! Bearer-token authentication for protected routes.

use crate::{ApiError, AppState};

use saathi_profile::Caller;

use std::future::Future;

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};

/// Caller resolved from the `Authorization: Bearer` header.
///
/// The admin flag is read from the live identity record on every request.
pub struct AuthenticatedCaller(pub Caller);

impl FromRequestParts<AppState> for AuthenticatedCaller {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            // A header that is not valid UTF-8 is treated as absent
            let header = parts
                .headers
                .get(AUTHORIZATION)
                .and_then(|value| value.to_str().ok());

            let caller = state.authenticator.authenticate(header).await?;
            log::debug!("Authenticated {} (admin: {})", caller.uid, caller.admin);

            Ok(AuthenticatedCaller(caller))
        }
    }
}
