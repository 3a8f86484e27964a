// clowdr-core-client/clowdr-core-client
//
// Copyright: 2023, The Clowdr Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;

use clowdr_store::Store;

use crate::domain::credentials::models::Credential;
use crate::domain::credentials::repos::TokenCacheRepository as DomainTokenCacheRepository;

const REALTIME_TOKEN_KEY: &str = "realtime_token";

/// Keeps the last issued realtime credential in the local store so that it survives a reload.
pub struct StoreTokenCacheRepository {
    store: Store,
}

impl StoreTokenCacheRepository {
    pub fn new(store: Store) -> Self {
        Self { store }
    }
}

#[async_trait]
impl DomainTokenCacheRepository for StoreTokenCacheRepository {
    async fn get(&self) -> Result<Option<Credential>> {
        Ok(self.store.get(REALTIME_TOKEN_KEY).await?)
    }

    async fn set(&self, credential: &Credential) -> Result<()> {
        Ok(self.store.set(REALTIME_TOKEN_KEY, credential).await?)
    }

    async fn clear(&self) -> Result<()> {
        Ok(self.store.delete(REALTIME_TOKEN_KEY).await?)
    }
}
