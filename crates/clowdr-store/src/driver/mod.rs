// clowdr-core-client/clowdr-store
//
// Copyright: 2023, The Clowdr Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use async_trait::async_trait;

use crate::StoreError;

pub mod in_memory;
pub mod sqlite;

/// A driver persists raw (already serialized) values under string keys.
#[async_trait]
pub trait Driver: Send + Sync + 'static {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    async fn put(&self, key: &str, value: String) -> Result<(), StoreError>;
    async fn delete(&self, key: &str) -> Result<(), StoreError>;
}
