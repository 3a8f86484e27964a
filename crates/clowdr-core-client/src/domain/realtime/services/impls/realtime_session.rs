// clowdr-core-client/clowdr-core-client
//
// Copyright: 2023, The Clowdr Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::{Arc, Weak};

use async_trait::async_trait;
use futures::future::{BoxFuture, FutureExt, Shared};
use parking_lot::{Mutex, RwLock};
use strum::IntoEnumIterator;
use tracing::{error, info, warn};

use clowdr_proc_macros::DependenciesStruct;

use crate::app::deps::{DynClientEventDispatcher, DynCredentialBroker, DynRealtimeProvider};
use crate::domain::realtime::models::{
    ConnectionState, ProviderError, RawEventKind, RawRealtimeEvent, SessionError, SessionEvent,
    SessionEventKind,
};
use crate::domain::realtime::services::{
    DynRealtimeConnection, ListenerRegistry, RealtimeConnection,
};
use crate::domain::shared::models::SessionContext;
use crate::ClientEvent;

use super::super::RealtimeSessionService as RealtimeSessionServiceTrait;

const MAX_CONNECT_ATTEMPTS: u32 = 2;

type ConnectFuture = Shared<BoxFuture<'static, Result<DynRealtimeConnection, SessionError>>>;

struct ActiveSession {
    ctx: SessionContext,
    connection: ConnectFuture,
}

#[derive(DependenciesStruct)]
pub struct RealtimeSession {
    client_event_dispatcher: DynClientEventDispatcher,
    credential_broker: DynCredentialBroker,
    realtime_provider: DynRealtimeProvider,

    #[state]
    active_session: Mutex<Option<ActiveSession>>,
    #[state]
    listeners: Arc<ListenerRegistry>,
    #[state]
    connection_state: Arc<RwLock<ConnectionState>>,
}

#[async_trait]
impl RealtimeSessionServiceTrait for RealtimeSession {
    #[tracing::instrument(skip(self, ctx), fields(conference = %ctx.conference_id, profile = %ctx.profile_id))]
    async fn setup(&self, ctx: &SessionContext) -> Result<(), SessionError> {
        let connection = {
            let mut active_session = self.active_session.lock();

            match active_session.as_ref() {
                Some(session)
                    if session.ctx.is_same_identity(ctx)
                        && !matches!(session.connection.peek(), Some(Err(_))) =>
                {
                    session.connection.clone()
                }
                _ => {
                    let previous = active_session.take().map(|session| {
                        if !session.ctx.is_same_identity(ctx) {
                            info!("Replacing realtime session.");
                            self.listeners.clear();
                        }
                        session.connection
                    });

                    let connector = self.connector();
                    let connect_ctx = ctx.clone();

                    let connection = async move {
                        if let Some(previous) = previous {
                            if let Ok(connection) = previous.await {
                                connection.shutdown().await;
                            }
                        }
                        connector.connect(connect_ctx).await
                    }
                    .boxed()
                    .shared();

                    active_session.replace(ActiveSession {
                        ctx: ctx.clone(),
                        connection: connection.clone(),
                    });
                    connection
                }
            }
        };

        connection.await.map(|_| ())
    }

    async fn teardown(&self) {
        let session = self.active_session.lock().take();
        self.listeners.clear();

        if let Some(session) = session {
            if let Ok(connection) = session.connection.await {
                info!("Shutting down realtime client.");
                connection.shutdown().await;
            }
        }

        self.connector().set_state(ConnectionState::Uninitialized);
    }

    async fn connection(&self) -> Result<DynRealtimeConnection, SessionError> {
        let connection = self
            .active_session
            .lock()
            .as_ref()
            .map(|session| session.connection.clone());

        match connection {
            Some(connection) => connection.await,
            None => Err(SessionError::NotConnected),
        }
    }

    fn state(&self) -> ConnectionState {
        *self.connection_state.read()
    }

    fn listeners(&self) -> Arc<ListenerRegistry> {
        self.listeners.clone()
    }
}

impl RealtimeSession {
    fn connector(&self) -> Connector {
        Connector {
            client_event_dispatcher: self.client_event_dispatcher.clone(),
            credential_broker: self.credential_broker.clone(),
            realtime_provider: self.realtime_provider.clone(),
            listeners: self.listeners.clone(),
            connection_state: self.connection_state.clone(),
        }
    }
}

/// Everything a connection attempt and the handlers it installs need. Connection attempts outlive
/// the call to `setup` that started them.
#[derive(Clone)]
struct Connector {
    client_event_dispatcher: DynClientEventDispatcher,
    credential_broker: DynCredentialBroker,
    realtime_provider: DynRealtimeProvider,
    listeners: Arc<ListenerRegistry>,
    connection_state: Arc<RwLock<ConnectionState>>,
}

impl Connector {
    async fn connect(self, ctx: SessionContext) -> Result<DynRealtimeConnection, SessionError> {
        self.set_state(ConnectionState::Connecting);

        match self.establish(&ctx).await {
            Ok(connection) => {
                self.set_state(ConnectionState::Connected);
                Ok(connection)
            }
            Err(err) => {
                error!("Could not create realtime client. {}", err.to_string());
                self.set_state(ConnectionState::Terminated);
                Err(err)
            }
        }
    }

    async fn establish(&self, ctx: &SessionContext) -> Result<DynRealtimeConnection, SessionError> {
        let connection = self.create_connection(ctx).await?;
        info!("Created realtime client.");

        // The realtime integration is unusable without a callback URL.
        if let Err(err) = self.credential_broker.callback_url(ctx).await {
            warn!("Realtime service not configured for this conference.");
            connection.shutdown().await;
            return Err(err.into());
        }

        self.enable_auto_renew(&connection, ctx);
        self.enable_auto_join_on_invite(&connection);
        self.forward_session_events(&connection);

        Ok(connection)
    }

    async fn create_connection(
        &self,
        ctx: &SessionContext,
    ) -> Result<DynRealtimeConnection, SessionError> {
        let mut attempt = 0;

        loop {
            attempt += 1;

            let credential = self.credential_broker.fetch_token(ctx).await?;

            info!("Creating realtime client (attempt {})…", attempt);
            match self.realtime_provider.create(&credential.token).await {
                Ok(connection) => return Ok(connection),
                Err(ProviderError::TokenExpired) => {
                    info!("Realtime token expired.");
                    self.credential_broker.invalidate().await;

                    if attempt >= MAX_CONNECT_ATTEMPTS {
                        return Err(SessionError::TransientConnection);
                    }
                }
                Err(err) => return Err(SessionError::Connection(err)),
            }
        }
    }

    fn enable_auto_renew(&self, connection: &DynRealtimeConnection, ctx: &SessionContext) {
        info!("Enabling auto-renew connection.");

        let broker = self.credential_broker.clone();
        let weak_connection = Arc::downgrade(connection);
        let ctx = ctx.clone();

        connection.on(
            RawEventKind::TokenAboutToExpire,
            Arc::new(move |_: RawRealtimeEvent| {
                let broker = broker.clone();
                let weak_connection = weak_connection.clone();
                let ctx = ctx.clone();

                tokio::spawn(async move {
                    info!("Realtime token about to expire.");

                    let credential = match broker.fetch_fresh_token(&ctx).await {
                        Ok(credential) => credential,
                        Err(err) => {
                            warn!("Realtime token for renewal not obtained. {}", err.to_string());
                            return;
                        }
                    };

                    let Some(connection) = weak_connection.upgrade() else {
                        return;
                    };

                    if let Err(err) = connection.update_token(&credential.token).await {
                        error!("Failed to renew realtime token. {}", err.to_string());
                    }
                });
            }),
        );
    }

    fn enable_auto_join_on_invite(&self, connection: &DynRealtimeConnection) {
        info!("Enabling auto-join on invited.");

        let weak_connection: Weak<dyn RealtimeConnection> = Arc::downgrade(connection);

        connection.on(
            RawEventKind::ChannelInvited,
            Arc::new(move |event: RawRealtimeEvent| {
                let RawRealtimeEvent::ChannelInvited { channel } = event else {
                    return;
                };
                let Some(connection) = weak_connection.upgrade() else {
                    return;
                };

                tokio::spawn(async move {
                    if let Err(err) = connection.join_channel(&channel.sid).await {
                        warn!(
                            "Failed to join channel {} after invite. {}",
                            channel.sid,
                            err.to_string()
                        );
                    }
                });
            }),
        );
    }

    /// Places exactly one subscription per event kind on the connection. The listener registry
    /// fans each event out to the local listeners.
    fn forward_session_events(&self, connection: &DynRealtimeConnection) {
        for kind in SessionEventKind::iter() {
            let connector = self.clone();

            connection.on(
                kind.raw_kind(),
                Arc::new(move |raw_event: RawRealtimeEvent| {
                    let event = match SessionEvent::try_from(raw_event) {
                        Ok(event) => event,
                        Err(raw_event) => {
                            warn!("Ignoring unexpected realtime event {:?}.", raw_event.kind());
                            return;
                        }
                    };

                    match &event {
                        SessionEvent::ConnectionStateChanged(provider_state) => {
                            connector.update_state(|state| state.apply(*provider_state))
                        }
                        SessionEvent::ConnectionError(info) if info.terminal => {
                            error!("Terminal realtime connection error. {}", info.message);
                            connector.set_state(ConnectionState::Terminated)
                        }
                        _ => (),
                    }

                    connector.listeners.dispatch(&event);
                }),
            );
        }
    }

    fn set_state(&self, state: ConnectionState) {
        self.update_state(|_| state)
    }

    fn update_state(&self, f: impl FnOnce(ConnectionState) -> ConnectionState) {
        let state = {
            let mut current = self.connection_state.write();
            let next = f(*current);
            if next == *current {
                return;
            }
            *current = next;
            next
        };

        info!("Realtime connection is now {:?}.", state);
        self.client_event_dispatcher
            .dispatch_event(ClientEvent::ConnectionStatusChanged { state });
    }
}
