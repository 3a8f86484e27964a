// clowdr-core-client/clowdr-core-client
//
// Copyright: 2023, The Clowdr Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use async_trait::async_trait;
use url::Url;

use crate::domain::credentials::models::{Credential, CredentialError};
use crate::domain::shared::models::SessionContext;

#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait CredentialBroker: Send + Sync {
    /// Returns a credential for `ctx`, reusing the cached one if it is still valid for the
    /// conference and profile of `ctx`. Otherwise the cache is discarded and a fresh token
    /// is requested.
    async fn fetch_token(&self, ctx: &SessionContext) -> Result<Credential, CredentialError>;

    /// Always requests a fresh token. On success the token replaces the cached one, on failure
    /// the cache is cleared.
    async fn fetch_fresh_token(&self, ctx: &SessionContext)
        -> Result<Credential, CredentialError>;

    /// Resolves the realtime callback URL configured for the conference of `ctx`.
    async fn callback_url(&self, ctx: &SessionContext) -> Result<Url, CredentialError>;

    /// Drops the current token after the provider reported it as expired.
    async fn invalidate(&self);

    /// Forgets everything, including resolved callback URLs. Used on logout or when switching
    /// conferences.
    async fn clear(&self);
}
