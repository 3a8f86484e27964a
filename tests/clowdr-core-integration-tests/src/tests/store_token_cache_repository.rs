// clowdr-core-client/clowdr-core-integration-tests
//
// Copyright: 2023, The Clowdr Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use pretty_assertions::assert_eq;

use clowdr_core_client::domain::credentials::repos::TokenCacheRepository;
use clowdr_core_client::infra::credentials::StoreTokenCacheRepository;
use clowdr_store::{SqliteDriver, Store};

use crate::tests::{credential, store};

#[tokio::test]
async fn test_caches_credential() -> Result<()> {
    let (store, _dir) = store().await?;
    let repo = StoreTokenCacheRepository::new(store);

    assert_eq!(repo.get().await?, None);

    repo.set(&credential("token-1")).await?;
    assert_eq!(repo.get().await?, Some(credential("token-1")));

    repo.set(&credential("token-2")).await?;
    assert_eq!(repo.get().await?, Some(credential("token-2")));

    repo.clear().await?;
    assert_eq!(repo.get().await?, None);

    Ok(())
}

#[tokio::test]
async fn test_credential_survives_reopening_the_store() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("credentials.sqlite");

    {
        let repo = StoreTokenCacheRepository::new(Store::new(SqliteDriver::open(&path).await?));
        repo.set(&credential("token")).await?;
    }

    let repo = StoreTokenCacheRepository::new(Store::new(SqliteDriver::open(&path).await?));
    assert_eq!(repo.get().await?, Some(credential("token")));

    Ok(())
}
