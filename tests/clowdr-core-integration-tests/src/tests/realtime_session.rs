// clowdr-core-client/clowdr-core-integration-tests
//
// Copyright: 2023, The Clowdr Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use anyhow::Result;
use mockall::{predicate, Sequence};
use parking_lot::Mutex;
use pretty_assertions::assert_eq;
use tokio::sync::oneshot;
use url::Url;

use clowdr_core_client::domain::credentials::models::CredentialError;
use clowdr_core_client::domain::realtime::models::{
    ConnectionErrorInfo, ConnectionState, Listener, ProviderConnectionState, ProviderError,
    RawEventKind, RawRealtimeEvent, RealtimeUser, SessionError, SessionEventKind, UserUpdate,
    UserUpdateReason, UserUpdatedEvent,
};
use clowdr_core_client::domain::realtime::services::impls::RealtimeSession;
use clowdr_core_client::domain::realtime::services::mocks::MockRealtimeConnection;
use clowdr_core_client::domain::realtime::services::{
    DynRealtimeConnection, RawEventHandler, RealtimeSessionService,
};
use clowdr_core_client::domain::shared::models::{ProfileId, SessionContext};
use clowdr_core_client::test::{mock_data, MockRealtimeSessionDependencies};
use clowdr_core_client::ClientEvent;

use crate::tests::{credential, record_events};

type Handlers = Arc<Mutex<HashMap<RawEventKind, RawEventHandler>>>;

fn capture_handlers(connection: &mut MockRealtimeConnection) -> Handlers {
    let handlers = Handlers::default();
    let captured = handlers.clone();
    connection.expect_on().returning(move |kind, handler| {
        captured.lock().insert(kind, handler);
    });
    handlers
}

fn emit(handlers: &Handlers, event: RawRealtimeEvent) {
    let handler = handlers
        .lock()
        .get(&event.kind())
        .cloned()
        .expect("No handler registered for event");
    handler(event);
}

fn expect_callback_url(deps: &mut MockRealtimeSessionDependencies) {
    deps.credential_broker
        .expect_callback_url()
        .returning(|_| Box::pin(async { Ok(Url::parse("https://chat.example.com").unwrap()) }));
}

/// Sets up `deps` so that connecting succeeds with `connection` on the first attempt.
fn expect_connect(deps: &mut MockRealtimeSessionDependencies, connection: MockRealtimeConnection) {
    let connection: DynRealtimeConnection = Arc::new(connection);

    deps.credential_broker
        .expect_fetch_token()
        .once()
        .returning(|_| Box::pin(async { Ok(credential("token")) }));
    deps.realtime_provider
        .expect_create()
        .once()
        .with(predicate::function(|token: &str| token == "token"))
        .return_once(move |_| Box::pin(async move { Ok(connection) }));
    expect_callback_url(deps);
}

async fn connected_session(
    mut deps: MockRealtimeSessionDependencies,
    mut connection: MockRealtimeConnection,
) -> Result<(RealtimeSession, Handlers)> {
    let handlers = capture_handlers(&mut connection);
    expect_connect(&mut deps, connection);

    let session = RealtimeSession::from(deps.into_deps());
    session.setup(&mock_data::session_context()).await?;

    Ok((session, handlers))
}

#[tokio::test]
async fn test_gives_up_after_token_expired_twice() -> Result<()> {
    let mut deps = MockRealtimeSessionDependencies::default();

    deps.credential_broker
        .expect_fetch_token()
        .times(2)
        .returning(|_| Box::pin(async { Ok(credential("expired-token")) }));
    deps.realtime_provider
        .expect_create()
        .times(2)
        .returning(|_| Box::pin(async { Err(ProviderError::TokenExpired) }));
    deps.credential_broker
        .expect_invalidate()
        .times(2)
        .returning(|| Box::pin(async {}));
    let events = record_events(&mut deps.client_event_dispatcher);

    let session = RealtimeSession::from(deps.into_deps());
    let result = session.setup(&mock_data::session_context()).await;

    assert_eq!(result, Err(SessionError::TransientConnection));
    assert_eq!(session.state(), ConnectionState::Terminated);
    assert_eq!(
        *events.lock(),
        vec![
            ClientEvent::ConnectionStatusChanged {
                state: ConnectionState::Connecting
            },
            ClientEvent::ConnectionStatusChanged {
                state: ConnectionState::Terminated
            }
        ]
    );

    Ok(())
}

#[tokio::test]
async fn test_retries_with_fresh_token_after_token_expired() -> Result<()> {
    let mut deps = MockRealtimeSessionDependencies::default();
    let mut seq = Sequence::new();

    let mut connection = MockRealtimeConnection::new();
    let handlers = capture_handlers(&mut connection);
    let connection: DynRealtimeConnection = Arc::new(connection);

    deps.credential_broker
        .expect_fetch_token()
        .once()
        .in_sequence(&mut seq)
        .returning(|_| Box::pin(async { Ok(credential("expired-token")) }));
    deps.realtime_provider
        .expect_create()
        .once()
        .in_sequence(&mut seq)
        .with(predicate::function(|token: &str| token == "expired-token"))
        .returning(|_| Box::pin(async { Err(ProviderError::TokenExpired) }));
    deps.credential_broker
        .expect_invalidate()
        .once()
        .in_sequence(&mut seq)
        .returning(|| Box::pin(async {}));
    deps.credential_broker
        .expect_fetch_token()
        .once()
        .in_sequence(&mut seq)
        .returning(|_| Box::pin(async { Ok(credential("fresh-token")) }));
    deps.realtime_provider
        .expect_create()
        .once()
        .in_sequence(&mut seq)
        .with(predicate::function(|token: &str| token == "fresh-token"))
        .return_once(move |_| Box::pin(async move { Ok(connection) }));
    expect_callback_url(&mut deps);
    let events = record_events(&mut deps.client_event_dispatcher);

    let session = RealtimeSession::from(deps.into_deps());
    session.setup(&mock_data::session_context()).await?;

    assert_eq!(session.state(), ConnectionState::Connected);
    assert_eq!(
        *events.lock(),
        vec![
            ClientEvent::ConnectionStatusChanged {
                state: ConnectionState::Connecting
            },
            ClientEvent::ConnectionStatusChanged {
                state: ConnectionState::Connected
            }
        ]
    );

    // Token renewal, auto-join and one subscription for each observable event.
    assert_eq!(
        handlers.lock().keys().cloned().collect::<HashSet<_>>(),
        HashSet::from([
            RawEventKind::TokenAboutToExpire,
            RawEventKind::ChannelInvited,
            RawEventKind::ConnectionError,
            RawEventKind::ConnectionStateChanged,
            RawEventKind::ChannelJoined,
            RawEventKind::ChannelLeft,
            RawEventKind::UserUpdated,
        ])
    );

    Ok(())
}

#[tokio::test]
async fn test_concurrent_setups_share_connection_attempt() -> Result<()> {
    let mut deps = MockRealtimeSessionDependencies::default();
    deps.client_event_dispatcher
        .expect_dispatch_event()
        .returning(|_| ());

    let mut connection = MockRealtimeConnection::new();
    connection.expect_on().returning(|_, _| ());
    expect_connect(&mut deps, connection);

    let session = RealtimeSession::from(deps.into_deps());
    let ctx = mock_data::session_context();

    let (first, second) = tokio::join!(session.setup(&ctx), session.setup(&ctx));
    assert_eq!(first, Ok(()));
    assert_eq!(second, Ok(()));

    // Later callers reuse the established connection.
    session.setup(&ctx).await?;
    session.connection().await?;

    Ok(())
}

#[tokio::test]
async fn test_replaces_failed_connection_attempt() -> Result<()> {
    let mut deps = MockRealtimeSessionDependencies::default();
    let mut seq = Sequence::new();
    deps.client_event_dispatcher
        .expect_dispatch_event()
        .returning(|_| ());

    let mut connection = MockRealtimeConnection::new();
    connection.expect_on().returning(|_, _| ());
    let connection: DynRealtimeConnection = Arc::new(connection);

    deps.credential_broker
        .expect_fetch_token()
        .times(2)
        .returning(|_| Box::pin(async { Ok(credential("token")) }));
    deps.realtime_provider
        .expect_create()
        .once()
        .in_sequence(&mut seq)
        .returning(|_| {
            Box::pin(async {
                Err(ProviderError::Generic {
                    msg: "Service unavailable".to_string(),
                })
            })
        });
    deps.realtime_provider
        .expect_create()
        .once()
        .in_sequence(&mut seq)
        .return_once(move |_| Box::pin(async move { Ok(connection) }));
    expect_callback_url(&mut deps);

    let session = RealtimeSession::from(deps.into_deps());
    let ctx = mock_data::session_context();

    assert_eq!(
        session.setup(&ctx).await,
        Err(SessionError::Connection(ProviderError::Generic {
            msg: "Service unavailable".to_string()
        }))
    );
    assert_eq!(session.state(), ConnectionState::Terminated);

    session.setup(&ctx).await?;
    assert_eq!(session.state(), ConnectionState::Connected);

    Ok(())
}

#[tokio::test]
async fn test_retrying_same_identity_keeps_listeners() -> Result<()> {
    let mut deps = MockRealtimeSessionDependencies::default();
    let mut seq = Sequence::new();
    deps.client_event_dispatcher
        .expect_dispatch_event()
        .returning(|_| ());

    let mut connection = MockRealtimeConnection::new();
    connection.expect_on().returning(|_, _| ());
    let connection: DynRealtimeConnection = Arc::new(connection);

    deps.credential_broker
        .expect_fetch_token()
        .times(2)
        .returning(|_| Box::pin(async { Ok(credential("token")) }));
    deps.realtime_provider
        .expect_create()
        .once()
        .in_sequence(&mut seq)
        .returning(|_| {
            Box::pin(async {
                Err(ProviderError::Generic {
                    msg: "Service unavailable".to_string(),
                })
            })
        });
    deps.realtime_provider
        .expect_create()
        .once()
        .in_sequence(&mut seq)
        .return_once(move |_| Box::pin(async move { Ok(connection) }));
    expect_callback_url(&mut deps);

    let session = RealtimeSession::from(deps.into_deps());
    let ctx = mock_data::session_context();

    assert!(session.setup(&ctx).await.is_err());

    session.listeners().on::<UserUpdatedEvent>(Listener::named(
        "ChatsSidebar",
        "updateChatDescriptors",
        |_: &UserUpdate| (),
    ));

    session.setup(&ctx).await?;

    assert_eq!(session.state(), ConnectionState::Connected);
    assert_eq!(
        session.listeners().listener_count(SessionEventKind::UserUpdated),
        1
    );

    Ok(())
}

#[tokio::test]
async fn test_shuts_connection_down_if_realtime_service_is_not_configured() -> Result<()> {
    let mut deps = MockRealtimeSessionDependencies::default();
    deps.client_event_dispatcher
        .expect_dispatch_event()
        .returning(|_| ());

    let mut connection = MockRealtimeConnection::new();
    connection
        .expect_shutdown()
        .once()
        .returning(|| Box::pin(async {}));
    let connection: DynRealtimeConnection = Arc::new(connection);

    deps.credential_broker
        .expect_fetch_token()
        .once()
        .returning(|_| Box::pin(async { Ok(credential("token")) }));
    deps.realtime_provider
        .expect_create()
        .once()
        .return_once(move |_| Box::pin(async move { Ok(connection) }));
    deps.credential_broker
        .expect_callback_url()
        .once()
        .returning(|_| {
            Box::pin(async {
                Err(CredentialError::NotConfigured {
                    conference: mock_data::conference_id(),
                })
            })
        });

    let session = RealtimeSession::from(deps.into_deps());
    let result = session.setup(&mock_data::session_context()).await;

    assert!(matches!(result, Err(SessionError::Configuration { .. })));
    assert_eq!(session.state(), ConnectionState::Terminated);

    Ok(())
}

#[tokio::test]
async fn test_connection_fails_before_setup() {
    let session = RealtimeSession::from(MockRealtimeSessionDependencies::default().into_deps());
    assert!(matches!(
        session.connection().await,
        Err(SessionError::NotConnected)
    ));
}

#[tokio::test]
async fn test_renews_token_before_it_expires() -> Result<()> {
    let mut deps = MockRealtimeSessionDependencies::default();
    deps.client_event_dispatcher
        .expect_dispatch_event()
        .returning(|_| ());
    deps.credential_broker
        .expect_fetch_fresh_token()
        .once()
        .returning(|_| Box::pin(async { Ok(credential("renewed-token")) }));

    let (tx, rx) = oneshot::channel::<String>();
    let mut connection = MockRealtimeConnection::new();
    connection
        .expect_update_token()
        .once()
        .return_once(move |token| {
            let _ = tx.send(token.to_string());
            Box::pin(async { Ok(()) })
        });

    let (_session, handlers) = connected_session(deps, connection).await?;

    emit(&handlers, RawRealtimeEvent::TokenAboutToExpire);

    let token = tokio::time::timeout(std::time::Duration::from_secs(1), rx).await??;
    assert_eq!(token, "renewed-token");

    Ok(())
}

#[tokio::test]
async fn test_tracks_provider_connection_state() -> Result<()> {
    let mut deps = MockRealtimeSessionDependencies::default();
    let events = record_events(&mut deps.client_event_dispatcher);

    let (session, handlers) = connected_session(deps, MockRealtimeConnection::new()).await?;
    events.lock().clear();

    emit(
        &handlers,
        RawRealtimeEvent::ConnectionStateChanged(ProviderConnectionState::Disconnected),
    );
    assert_eq!(session.state(), ConnectionState::Reconnecting);

    emit(
        &handlers,
        RawRealtimeEvent::ConnectionStateChanged(ProviderConnectionState::Connected),
    );
    assert_eq!(session.state(), ConnectionState::Connected);

    emit(
        &handlers,
        RawRealtimeEvent::ConnectionError(ConnectionErrorInfo {
            terminal: true,
            message: "Access denied".to_string(),
            http_status_code: Some(401),
            error_code: None,
        }),
    );
    assert_eq!(session.state(), ConnectionState::Terminated);

    assert_eq!(
        *events.lock(),
        vec![
            ClientEvent::ConnectionStatusChanged {
                state: ConnectionState::Reconnecting
            },
            ClientEvent::ConnectionStatusChanged {
                state: ConnectionState::Connected
            },
            ClientEvent::ConnectionStatusChanged {
                state: ConnectionState::Terminated
            },
        ]
    );

    Ok(())
}

#[tokio::test]
async fn test_named_listener_replaces_previous_registration() -> Result<()> {
    let mut deps = MockRealtimeSessionDependencies::default();
    deps.client_event_dispatcher
        .expect_dispatch_event()
        .returning(|_| ());

    let (session, handlers) = connected_session(deps, MockRealtimeConnection::new()).await?;

    let calls = Arc::new(Mutex::new(Vec::<(&'static str, ProfileId)>::new()));
    let listeners = session.listeners();

    for name in ["first", "second"] {
        let calls = calls.clone();
        listeners.on::<UserUpdatedEvent>(Listener::named(
            "ChatsSidebar",
            "updateChatDescriptors",
            move |update: &UserUpdate| calls.lock().push((name, update.user.profile_id.clone())),
        ));
    }
    assert_eq!(listeners.listener_count(SessionEventKind::UserUpdated), 1);

    emit(
        &handlers,
        RawRealtimeEvent::UserUpdated {
            user: RealtimeUser {
                profile_id: "bob".into(),
                friendly_name: Some("Bob".to_string()),
                is_online: Some(true),
            },
            update_reasons: vec![UserUpdateReason::Online],
        },
    );

    assert_eq!(*calls.lock(), vec![("second", ProfileId::from("bob"))]);

    Ok(())
}

#[tokio::test]
async fn test_teardown_shuts_down_and_removes_listeners() -> Result<()> {
    let mut deps = MockRealtimeSessionDependencies::default();
    deps.client_event_dispatcher
        .expect_dispatch_event()
        .returning(|_| ());

    let mut connection = MockRealtimeConnection::new();
    connection
        .expect_shutdown()
        .once()
        .returning(|| Box::pin(async {}));

    let (session, _handlers) = connected_session(deps, connection).await?;

    session
        .listeners()
        .on::<UserUpdatedEvent>(Listener::anonymous(|_: &UserUpdate| ()));
    assert_eq!(
        session.listeners().listener_count(SessionEventKind::UserUpdated),
        1
    );

    session.teardown().await;

    assert_eq!(session.state(), ConnectionState::Uninitialized);
    assert_eq!(
        session.listeners().listener_count(SessionEventKind::UserUpdated),
        0
    );
    assert!(matches!(
        session.connection().await,
        Err(SessionError::NotConnected)
    ));

    Ok(())
}

#[tokio::test]
async fn test_switching_profile_replaces_connection() -> Result<()> {
    let mut deps = MockRealtimeSessionDependencies::default();
    deps.client_event_dispatcher
        .expect_dispatch_event()
        .returning(|_| ());

    let mut first_connection = MockRealtimeConnection::new();
    first_connection.expect_on().returning(|_, _| ());
    first_connection
        .expect_shutdown()
        .once()
        .returning(|| Box::pin(async {}));
    let first_connection: DynRealtimeConnection = Arc::new(first_connection);

    let mut second_connection = MockRealtimeConnection::new();
    second_connection.expect_on().returning(|_, _| ());
    let second_connection: DynRealtimeConnection = Arc::new(second_connection);

    let mut seq = Sequence::new();
    deps.credential_broker
        .expect_fetch_token()
        .times(2)
        .returning(|_| Box::pin(async { Ok(credential("token")) }));
    deps.realtime_provider
        .expect_create()
        .once()
        .in_sequence(&mut seq)
        .return_once(move |_| Box::pin(async move { Ok(first_connection) }));
    deps.realtime_provider
        .expect_create()
        .once()
        .in_sequence(&mut seq)
        .return_once(move |_| Box::pin(async move { Ok(second_connection) }));
    expect_callback_url(&mut deps);

    let session = RealtimeSession::from(deps.into_deps());
    session.setup(&mock_data::session_context()).await?;

    session
        .listeners()
        .on::<UserUpdatedEvent>(Listener::anonymous(|_: &UserUpdate| ()));

    session
        .setup(&SessionContext::new(
            mock_data::conference_id(),
            "john-doe",
            "r:other-session-token",
        ))
        .await?;

    assert_eq!(
        session.listeners().listener_count(SessionEventKind::UserUpdated),
        0
    );
    assert_eq!(session.state(), ConnectionState::Connected);

    Ok(())
}
