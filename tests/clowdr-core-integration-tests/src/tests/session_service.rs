// clowdr-core-client/clowdr-core-integration-tests
//
// Copyright: 2023, The Clowdr Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use mockall::predicate;
use pretty_assertions::assert_eq;

use clowdr_core_client::domain::realtime::models::SessionError;
use clowdr_core_client::domain::shared::models::{ProfileId, SessionContext, SessionIdentity};
use clowdr_core_client::services::SessionService;
use clowdr_core_client::test::{mock_data, MockAppDependencies};

fn expect_reset_local_state(deps: &mut MockAppDependencies) {
    deps.credential_broker
        .expect_clear()
        .once()
        .returning(|| Box::pin(async {}));
    deps.channel_domain_service
        .expect_clear_cache()
        .once()
        .return_const(());
    deps.chats_sidebar_domain_service
        .expect_reset()
        .once()
        .return_const(());
    deps.rooms_sidebar_domain_service
        .expect_reset()
        .once()
        .return_const(());
}

#[tokio::test]
async fn test_reconnecting_with_same_identity_keeps_local_state() -> Result<()> {
    let mut deps = MockAppDependencies::default();

    let ctx = SessionContext::new(
        mock_data::conference_id(),
        mock_data::profile_id(),
        "r:renewed-session-token",
    );

    deps.realtime_session
        .expect_setup()
        .once()
        .with(predicate::eq(ctx.clone()))
        .returning(|_| Box::pin(async { Ok(()) }));

    let service = SessionService::from(&deps.into_deps());
    service
        .connect(
            &mock_data::conference_id(),
            &mock_data::profile_id(),
            &SessionIdentity::from("r:renewed-session-token"),
        )
        .await?;

    assert_eq!(service.session_context(), Some(ctx));

    Ok(())
}

#[tokio::test]
async fn test_switching_profile_discards_local_state() -> Result<()> {
    let mut deps = MockAppDependencies::default();
    expect_reset_local_state(&mut deps);

    deps.realtime_session
        .expect_setup()
        .once()
        .withf(|ctx| ctx.profile_id == ProfileId::from("john-doe"))
        .returning(|_| Box::pin(async { Ok(()) }));

    let service = SessionService::from(&deps.into_deps());
    service
        .connect(
            &mock_data::conference_id(),
            &"john-doe".into(),
            &mock_data::session_identity(),
        )
        .await?;

    assert_eq!(
        service.session_context().map(|ctx| ctx.profile_id),
        Some(ProfileId::from("john-doe"))
    );

    Ok(())
}

#[tokio::test]
async fn test_returns_connection_errors() -> Result<()> {
    let mut deps = MockAppDependencies::default();

    deps.realtime_session
        .expect_setup()
        .once()
        .returning(|_| Box::pin(async { Err(SessionError::TransientConnection) }));

    let service = SessionService::from(&deps.into_deps());
    let result = service
        .connect(
            &mock_data::conference_id(),
            &mock_data::profile_id(),
            &mock_data::session_identity(),
        )
        .await;

    assert_eq!(result, Err(SessionError::TransientConnection));

    Ok(())
}

#[tokio::test]
async fn test_disconnect() -> Result<()> {
    let mut deps = MockAppDependencies::default();
    expect_reset_local_state(&mut deps);

    deps.realtime_session
        .expect_teardown()
        .once()
        .returning(|| Box::pin(async {}));

    let service = SessionService::from(&deps.into_deps());
    service.disconnect().await;

    assert_eq!(service.session_context(), None);

    Ok(())
}
