// clowdr-core-client/clowdr-core-client
//
// Copyright: 2023, The Clowdr Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use tracing::{error, info};

use clowdr_proc_macros::InjectDependencies;

use crate::app::deps::{
    DynAppContext, DynChannelDomainService, DynChatsSidebarDomainService, DynCredentialBroker,
    DynRealtimeSessionService, DynRoomsSidebarDomainService,
};
use crate::domain::realtime::models::{
    ConnectionState, Listener, RealtimeEventType, SessionError, SessionEventKind,
};
use crate::domain::shared::models::{
    ConferenceId, ListenerId, ProfileId, SessionContext, SessionIdentity,
};

#[derive(InjectDependencies)]
pub struct SessionService {
    #[inject]
    ctx: DynAppContext,
    #[inject]
    channel_domain_service: DynChannelDomainService,
    #[inject]
    chats_sidebar_domain_service: DynChatsSidebarDomainService,
    #[inject]
    credential_broker: DynCredentialBroker,
    #[inject]
    realtime_session: DynRealtimeSessionService,
    #[inject]
    rooms_sidebar_domain_service: DynRoomsSidebarDomainService,
}

impl SessionService {
    /// Connects `profile_id` to the realtime service of `conference_id`. Connecting with a
    /// different conference or profile than before discards everything cached for the previous
    /// one.
    #[tracing::instrument(skip(self, session_identity))]
    pub async fn connect(
        &self,
        conference_id: &ConferenceId,
        profile_id: &ProfileId,
        session_identity: &SessionIdentity,
    ) -> Result<(), SessionError> {
        let ctx = SessionContext::new(
            conference_id.clone(),
            profile_id.clone(),
            session_identity.clone(),
        );

        let previous_ctx = self.ctx.session.read().clone();
        if let Some(previous_ctx) = previous_ctx {
            if !previous_ctx.is_same_identity(&ctx) {
                info!(
                    "Switching from {}/{} to {}/{}…",
                    previous_ctx.conference_id,
                    previous_ctx.profile_id,
                    ctx.conference_id,
                    ctx.profile_id
                );
                self.credential_broker.clear().await;
                self.reset_local_state();
            }
        }

        self.ctx.set_session_context(ctx.clone());

        if let Err(err) = self.realtime_session.setup(&ctx).await {
            error!("Failed to connect. {}", err.to_string());
            return Err(err);
        }

        Ok(())
    }

    pub async fn disconnect(&self) {
        self.realtime_session.teardown().await;
        self.credential_broker.clear().await;
        self.reset_local_state();
        self.ctx.reset_session_context();
    }

    pub fn connection_state(&self) -> ConnectionState {
        self.realtime_session.state()
    }

    pub fn session_context(&self) -> Option<SessionContext> {
        self.ctx.session.read().clone()
    }

    /// Registers a listener for session events of type `E`. See `Listener` for how named
    /// listeners replace each other.
    pub fn add_listener<E: RealtimeEventType>(&self, listener: Listener<E::Payload>) -> ListenerId {
        self.realtime_session.listeners().on::<E>(listener)
    }

    pub fn remove_listener(&self, kind: SessionEventKind, id: &ListenerId) -> bool {
        self.realtime_session.listeners().off(kind, id)
    }
}

impl SessionService {
    fn reset_local_state(&self) {
        self.channel_domain_service.clear_cache();
        self.chats_sidebar_domain_service.reset();
        self.rooms_sidebar_domain_service.reset();
    }
}
