// clowdr-core-client/clowdr-store
//
// Copyright: 2023, The Clowdr Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::path::PathBuf;

use async_trait::async_trait;
use deadpool_sqlite::{Config, Pool, Runtime};
use rusqlite::{params, OptionalExtension};
use tracing::debug;

use crate::{Driver, StoreError};

const VALUES_TABLE: &str = "kv_values";

pub struct SqliteDriver {
    pool: Pool,
}

impl SqliteDriver {
    /// Opens (and creates if needed) the database at `path`.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        debug!("Opening key/value store at {:?}", path);

        let pool = Config::new(path).create_pool(Runtime::Tokio1)?;
        let driver = SqliteDriver { pool };

        driver
            .interact(|conn| {
                conn.execute_batch(&format!(
                    r#"
                PRAGMA journal_mode = WAL;
                PRAGMA synchronous = normal;
                CREATE TABLE IF NOT EXISTS "{VALUES_TABLE}" (
                    "key" TEXT PRIMARY KEY,
                    "value" TEXT NOT NULL
                );
                "#
                ))
            })
            .await?;

        Ok(driver)
    }

    async fn interact<F, R>(&self, f: F) -> Result<R, StoreError>
    where
        F: FnOnce(&mut rusqlite::Connection) -> Result<R, rusqlite::Error> + Send + 'static,
        R: Send + 'static,
    {
        let obj = self.pool.get().await?;
        let result = obj.interact(f).await?;
        Ok(result?)
    }
}

#[async_trait]
impl Driver for SqliteDriver {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let key = key.to_string();
        self.interact(move |conn| {
            conn.query_row(
                &format!(r#"SELECT "value" FROM "{VALUES_TABLE}" WHERE "key" = ?"#),
                params![key],
                |row| row.get::<_, String>(0),
            )
            .optional()
        })
        .await
    }

    async fn put(&self, key: &str, value: String) -> Result<(), StoreError> {
        let key = key.to_string();
        self.interact(move |conn| {
            conn.execute(
                &format!(
                    r#"INSERT OR REPLACE INTO "{VALUES_TABLE}" ("key", "value") VALUES (?, ?)"#
                ),
                params![key, value],
            )
        })
        .await?;
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), StoreError> {
        let key = key.to_string();
        self.interact(move |conn| {
            conn.execute(
                &format!(r#"DELETE FROM "{VALUES_TABLE}" WHERE "key" = ?"#),
                params![key],
            )
        })
        .await?;
        Ok(())
    }
}
