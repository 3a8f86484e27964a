// clowdr-core-client/clowdr-core-client
//
// Copyright: 2023, The Clowdr Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::credentials::models::Credential;

/// Persists the last issued credential so that a reload can reuse a still valid token.
#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait TokenCacheRepository: Send + Sync {
    async fn get(&self) -> Result<Option<Credential>>;
    async fn set(&self, credential: &Credential) -> Result<()>;
    async fn clear(&self) -> Result<()>;
}
