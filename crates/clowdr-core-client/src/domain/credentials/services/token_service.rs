// clowdr-core-client/clowdr-core-client
//
// Copyright: 2023, The Clowdr Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;
use url::Url;

use crate::domain::credentials::models::{IssuedToken, TokenRequest};

#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait TokenService: Send + Sync {
    /// Requests a fresh realtime access token from the conference's callback endpoint.
    async fn request_token(&self, callback_url: &Url, request: &TokenRequest)
        -> Result<IssuedToken>;
}
