// clowdr-core-client/clowdr-store
//
// Copyright: 2023, The Clowdr Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use deadpool_sqlite::{CreatePoolError, InteractError, PoolError};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::Driver;

#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error(transparent)]
    CreatePool(#[from] CreatePoolError),

    #[error(transparent)]
    Pool(#[from] PoolError),

    #[error("{0}")]
    Interact(String),

    #[error(transparent)]
    Sqlite(#[from] rusqlite::Error),

    #[error(transparent)]
    JSON(#[from] serde_json::Error),
}

impl From<InteractError> for StoreError {
    fn from(value: InteractError) -> Self {
        Self::Interact(value.to_string())
    }
}

/// Typed access to a `Driver`. Values are stored as JSON.
#[derive(Clone)]
pub struct Store {
    driver: Arc<dyn Driver>,
}

impl Store {
    pub fn new<D: Driver>(driver: D) -> Self {
        Store {
            driver: Arc::new(driver),
        }
    }

    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        let Some(raw) = self.driver.get(key).await? else {
            return Ok(None);
        };
        Ok(Some(serde_json::from_str(&raw)?))
    }

    pub async fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let raw = serde_json::to_string(value)?;
        self.driver.put(key, raw).await
    }

    pub async fn delete(&self, key: &str) -> Result<(), StoreError> {
        self.driver.delete(key).await
    }
}
