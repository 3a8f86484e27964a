// clowdr-core-client/clowdr-core-client
//
// Copyright: 2023, The Clowdr Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use clowdr_store::Store;

use crate::app::deps::{
    AppContext, AppDependencies, DynChannelDomainService, DynChatsSidebarDomainService,
    DynClientEventDispatcher, DynCredentialBroker, DynIDProvider, DynRealtimeSessionService,
    DynRoomsSidebarDomainService, DynTimeProvider, DynTokenCacheRepository, DynTokenService,
};
use crate::client_builder::BackendServices;
use crate::domain::channels::services::impls::{
    ChannelDomainService, ChannelDomainServiceDependencies,
};
use crate::domain::credentials::services::impls::{
    CredentialBroker, CredentialBrokerDependencies,
};
use crate::domain::realtime::services::impls::{RealtimeSession, RealtimeSessionDependencies};
use crate::domain::sidebar::services::impls::{
    ChatsSidebarDomainService, ChatsSidebarDomainServiceDependencies, RoomsSidebarDomainService,
    RoomsSidebarDomainServiceDependencies,
};
use crate::infra::credentials::StoreTokenCacheRepository;

pub struct PlatformDependencies {
    pub backend: BackendServices,
    pub client_event_dispatcher: DynClientEventDispatcher,
    pub ctx: AppContext,
    pub id_provider: DynIDProvider,
    pub store: Store,
    pub time_provider: DynTimeProvider,
    pub token_service: DynTokenService,
}

impl From<PlatformDependencies> for AppDependencies {
    fn from(d: PlatformDependencies) -> Self {
        let ctx = Arc::new(d.ctx);
        let backend = d.backend;
        let token_cache_repo: DynTokenCacheRepository =
            Arc::new(StoreTokenCacheRepository::new(d.store));

        let credential_broker: DynCredentialBroker =
            Arc::new(CredentialBroker::from(CredentialBrokerDependencies {
                configuration_service: backend.configuration_service.clone(),
                ctx: ctx.clone(),
                time_provider: d.time_provider.clone(),
                token_cache_repo: token_cache_repo.clone(),
                token_service: d.token_service.clone(),
            }));

        let realtime_session: DynRealtimeSessionService =
            Arc::new(RealtimeSession::from(RealtimeSessionDependencies {
                client_event_dispatcher: d.client_event_dispatcher.clone(),
                credential_broker: credential_broker.clone(),
                realtime_provider: backend.realtime_provider.clone(),
            }));

        let channel_domain_service: DynChannelDomainService =
            Arc::new(ChannelDomainService::from(ChannelDomainServiceDependencies {
                backend_functions_service: backend.backend_functions_service.clone(),
                ctx: ctx.clone(),
                id_provider: d.id_provider.clone(),
                realtime_session: realtime_session.clone(),
                text_chat_repo: backend.text_chat_repo.clone(),
                user_profile_repo: backend.user_profile_repo.clone(),
            }));

        let chats_sidebar_domain_service: DynChatsSidebarDomainService = Arc::new(
            ChatsSidebarDomainService::from(ChatsSidebarDomainServiceDependencies {
                channel_domain_service: channel_domain_service.clone(),
                client_event_dispatcher: d.client_event_dispatcher.clone(),
                ctx: ctx.clone(),
                user_profile_repo: backend.user_profile_repo.clone(),
            }),
        );

        let rooms_sidebar_domain_service: DynRoomsSidebarDomainService = Arc::new(
            RoomsSidebarDomainService::from(RoomsSidebarDomainServiceDependencies {
                client_event_dispatcher: d.client_event_dispatcher.clone(),
                ctx: ctx.clone(),
                user_profile_repo: backend.user_profile_repo.clone(),
                video_room_repo: backend.video_room_repo.clone(),
            }),
        );

        AppDependencies {
            backend_functions_service: backend.backend_functions_service,
            channel_domain_service,
            chats_sidebar_domain_service,
            client_event_dispatcher: d.client_event_dispatcher,
            configuration_service: backend.configuration_service,
            credential_broker,
            ctx,
            id_provider: d.id_provider,
            realtime_provider: backend.realtime_provider,
            realtime_session,
            rooms_sidebar_domain_service,
            text_chat_repo: backend.text_chat_repo,
            time_provider: d.time_provider,
            token_cache_repo,
            token_service: d.token_service,
            user_profile_repo: backend.user_profile_repo,
            video_room_repo: backend.video_room_repo,
        }
    }
}
