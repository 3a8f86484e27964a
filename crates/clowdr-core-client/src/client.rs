// clowdr-core-client/clowdr-core-client
//
// Copyright: 2023, The Clowdr Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::ops::Deref;
use std::sync::Arc;

use crate::app::deps::DynAppContext;
use crate::app::event_handlers::{DataEvent, DataEventHandlerQueue};
use crate::client_builder::{ClientBuilder, UndefinedBackend, UndefinedStore};
use crate::domain::realtime::models::{
    ConnectionState, Listener, RealtimeEventType, SessionError, SessionEventKind,
};
use crate::domain::shared::models::{
    ConferenceId, ListenerId, ProfileId, SessionContext, SessionIdentity,
};
use crate::services::{ChannelsService, ChatsSidebarService, RoomsSidebarService, SessionService};
use crate::ClientEvent;

#[derive(Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
}

pub trait ClientDelegate: Send + Sync {
    fn handle_event(&self, client: Client, event: ClientEvent);
}

impl Client {
    pub fn builder() -> ClientBuilder<UndefinedBackend, UndefinedStore> {
        ClientBuilder::new()
    }
}

pub struct ClientInner {
    pub channels: ChannelsService,
    pub chats: ChatsSidebarService,
    pub rooms: RoomsSidebarService,
    pub(crate) ctx: DynAppContext,
    pub(crate) data_event_handler_queue: Arc<DataEventHandlerQueue>,
    pub(crate) session: SessionService,
}

impl From<Arc<ClientInner>> for Client {
    fn from(inner: Arc<ClientInner>) -> Self {
        Client { inner }
    }
}

impl Deref for Client {
    type Target = ClientInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl Client {
    pub async fn connect(
        &self,
        conference_id: &ConferenceId,
        profile_id: &ProfileId,
        session_identity: &SessionIdentity,
    ) -> Result<(), SessionError> {
        self.session
            .connect(conference_id, profile_id, session_identity)
            .await
    }

    /// Closes the realtime connection and forgets the credential as well as everything loaded
    /// for the current conference.
    pub async fn disconnect(&self) {
        self.chats.stop_observing();
        self.session.disconnect().await
    }

    pub fn connection_state(&self) -> ConnectionState {
        self.session.connection_state()
    }

    pub fn session_context(&self) -> Option<SessionContext> {
        self.ctx.session.read().clone()
    }

    /// Feeds a change of backend records from the conference's data subscriptions into the
    /// client.
    pub async fn handle_data_event(&self, event: DataEvent) {
        self.data_event_handler_queue.handle_event(event).await
    }

    pub fn add_listener<E: RealtimeEventType>(&self, listener: Listener<E::Payload>) -> ListenerId {
        self.session.add_listener::<E>(listener)
    }

    pub fn remove_listener(&self, kind: SessionEventKind, id: &ListenerId) -> bool {
        self.session.remove_listener(kind, id)
    }
}
