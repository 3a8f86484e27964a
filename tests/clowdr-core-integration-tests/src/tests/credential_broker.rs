// clowdr-core-client/clowdr-core-integration-tests
//
// Copyright: 2023, The Clowdr Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use anyhow::{anyhow, Result};
use chrono::Duration;
use mockall::predicate;
use pretty_assertions::assert_eq;
use url::Url;

use clowdr_core_client::domain::credentials::models::{
    ConfigurationValue, Credential, CredentialError, IssuedToken, TokenRequest,
};
use clowdr_core_client::domain::credentials::services::impls::CredentialBroker;
use clowdr_core_client::domain::credentials::services::CredentialBroker as _;
use clowdr_core_client::test::{mock_data, ConstantTimeProvider, MockCredentialBrokerDependencies};

use crate::tests::credential;

const CALLBACK_URL: &str = "https://chat.example.com/";

fn expect_callback_url(deps: &mut MockCredentialBrokerDependencies) {
    deps.configuration_service
        .expect_get_by_key()
        .once()
        .with(
            predicate::always(),
            predicate::eq(mock_data::conference_id()),
        )
        .returning(|key, _| {
            let key = key.to_string();
            Box::pin(async move {
                Ok(vec![
                    ConfigurationValue {
                        key: key.clone(),
                        value: "".to_string(),
                    },
                    ConfigurationValue {
                        key,
                        value: CALLBACK_URL.to_string(),
                    },
                ])
            })
        });
}

fn expect_token_request(deps: &mut MockCredentialBrokerDependencies, token: &'static str) {
    deps.token_service
        .expect_request_token()
        .once()
        .with(
            predicate::eq(Url::parse(CALLBACK_URL).unwrap()),
            predicate::eq(TokenRequest {
                identity: mock_data::session_identity(),
                conference: mock_data::conference_id(),
            }),
        )
        .return_once(move |_, _| {
            Box::pin(async move {
                Ok(IssuedToken {
                    token: token.to_string(),
                    expiry: mock_data::reference_date() + Duration::hours(1),
                })
            })
        });
}

#[tokio::test]
async fn test_reuses_valid_cached_token() -> Result<()> {
    let mut deps = MockCredentialBrokerDependencies::default();

    deps.token_cache_repo
        .expect_get()
        .once()
        .return_once(|| Box::pin(async { Ok(Some(credential("cached-token"))) }));

    let broker = CredentialBroker::from(deps.into_deps());
    let ctx = mock_data::session_context();

    assert_eq!(broker.fetch_token(&ctx).await?, credential("cached-token"));
    // The second call is served from memory.
    assert_eq!(broker.fetch_token(&ctx).await?, credential("cached-token"));

    Ok(())
}

#[tokio::test]
async fn test_fetches_fresh_token_if_cached_token_belongs_to_other_profile() -> Result<()> {
    let mut deps = MockCredentialBrokerDependencies::default();

    deps.token_cache_repo.expect_get().once().return_once(|| {
        Box::pin(async {
            Ok(Some(Credential {
                profile_id: "john-doe".into(),
                ..credential("cached-token")
            }))
        })
    });
    deps.token_cache_repo
        .expect_clear()
        .once()
        .returning(|| Box::pin(async { Ok(()) }));
    expect_callback_url(&mut deps);
    expect_token_request(&mut deps, "fresh-token");
    deps.token_cache_repo
        .expect_set()
        .once()
        .with(predicate::eq(credential("fresh-token")))
        .returning(|_| Box::pin(async { Ok(()) }));

    let broker = CredentialBroker::from(deps.into_deps());

    assert_eq!(
        broker.fetch_token(&mock_data::session_context()).await?,
        credential("fresh-token")
    );

    Ok(())
}

#[tokio::test]
async fn test_fetches_fresh_token_if_cached_token_expired() -> Result<()> {
    let mut deps = MockCredentialBrokerDependencies::default();

    let time_provider = Arc::new(ConstantTimeProvider::new(mock_data::reference_date()));
    time_provider.advance(Duration::hours(2));
    deps.time_provider = time_provider;

    deps.token_cache_repo
        .expect_get()
        .once()
        .return_once(|| Box::pin(async { Ok(Some(credential("cached-token"))) }));
    deps.token_cache_repo
        .expect_clear()
        .once()
        .returning(|| Box::pin(async { Ok(()) }));
    expect_callback_url(&mut deps);
    deps.token_service
        .expect_request_token()
        .once()
        .return_once(|_, _| {
            Box::pin(async {
                Ok(IssuedToken {
                    token: "fresh-token".to_string(),
                    expiry: mock_data::reference_date() + Duration::hours(3),
                })
            })
        });
    deps.token_cache_repo
        .expect_set()
        .once()
        .returning(|_| Box::pin(async { Ok(()) }));

    let broker = CredentialBroker::from(deps.into_deps());
    let token = broker.fetch_token(&mock_data::session_context()).await?;

    assert_eq!(token.token, "fresh-token");
    assert_eq!(token.expires_at, mock_data::reference_date() + Duration::hours(3));

    Ok(())
}

#[tokio::test]
async fn test_clears_cache_if_token_could_not_be_obtained() -> Result<()> {
    let mut deps = MockCredentialBrokerDependencies::default();

    deps.token_cache_repo
        .expect_get()
        .once()
        .return_once(|| Box::pin(async { Ok(None) }));
    expect_callback_url(&mut deps);
    deps.token_service
        .expect_request_token()
        .once()
        .return_once(|_, _| Box::pin(async { Err(anyhow!("Unauthorized")) }));
    deps.token_cache_repo
        .expect_clear()
        .once()
        .returning(|| Box::pin(async { Ok(()) }));

    let broker = CredentialBroker::from(deps.into_deps());
    let result = broker.fetch_token(&mock_data::session_context()).await;

    assert_eq!(
        result,
        Err(CredentialError::TokenUnavailable {
            msg: "Unauthorized".to_string()
        })
    );

    Ok(())
}

#[tokio::test]
async fn test_rejects_empty_token() -> Result<()> {
    let mut deps = MockCredentialBrokerDependencies::default();

    expect_callback_url(&mut deps);
    expect_token_request(&mut deps, "");
    deps.token_cache_repo
        .expect_clear()
        .once()
        .returning(|| Box::pin(async { Ok(()) }));

    let broker = CredentialBroker::from(deps.into_deps());
    let result = broker
        .fetch_fresh_token(&mock_data::session_context())
        .await;

    assert!(matches!(
        result,
        Err(CredentialError::TokenUnavailable { .. })
    ));

    Ok(())
}

#[tokio::test]
async fn test_fails_if_callback_url_is_not_configured() -> Result<()> {
    let mut deps = MockCredentialBrokerDependencies::default();

    deps.token_cache_repo
        .expect_get()
        .once()
        .return_once(|| Box::pin(async { Ok(None) }));
    deps.configuration_service
        .expect_get_by_key()
        .once()
        .returning(|_, _| Box::pin(async { Ok(vec![]) }));

    let broker = CredentialBroker::from(deps.into_deps());
    let result = broker.fetch_token(&mock_data::session_context()).await;

    assert_eq!(
        result,
        Err(CredentialError::NotConfigured {
            conference: mock_data::conference_id()
        })
    );

    Ok(())
}

#[tokio::test]
async fn test_caches_callback_url_per_conference() -> Result<()> {
    let mut deps = MockCredentialBrokerDependencies::default();
    expect_callback_url(&mut deps);

    let broker = CredentialBroker::from(deps.into_deps());
    let ctx = mock_data::session_context();

    assert_eq!(broker.callback_url(&ctx).await?, Url::parse(CALLBACK_URL)?);
    assert_eq!(broker.callback_url(&ctx).await?, Url::parse(CALLBACK_URL)?);

    Ok(())
}

#[tokio::test]
async fn test_clear_forgets_callback_urls() -> Result<()> {
    let mut deps = MockCredentialBrokerDependencies::default();

    deps.configuration_service
        .expect_get_by_key()
        .times(2)
        .returning(|key, _| {
            let key = key.to_string();
            Box::pin(async move {
                Ok(vec![ConfigurationValue {
                    key,
                    value: CALLBACK_URL.to_string(),
                }])
            })
        });
    deps.token_cache_repo
        .expect_clear()
        .once()
        .returning(|| Box::pin(async { Ok(()) }));

    let broker = CredentialBroker::from(deps.into_deps());
    let ctx = mock_data::session_context();

    broker.callback_url(&ctx).await?;
    broker.clear().await;
    broker.callback_url(&ctx).await?;

    Ok(())
}

#[tokio::test]
async fn test_invalidate_discards_current_token() -> Result<()> {
    let mut deps = MockCredentialBrokerDependencies::default();

    deps.token_cache_repo
        .expect_get()
        .times(2)
        .returning(|| Box::pin(async { Ok(Some(credential("cached-token"))) }));
    deps.token_cache_repo
        .expect_clear()
        .once()
        .returning(|| Box::pin(async { Ok(()) }));

    let broker = CredentialBroker::from(deps.into_deps());
    let ctx = mock_data::session_context();

    broker.fetch_token(&ctx).await?;
    broker.invalidate().await;
    // Without a current token the cache is consulted again.
    broker.fetch_token(&ctx).await?;

    Ok(())
}
