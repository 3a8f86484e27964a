// clowdr-core-client/clowdr-core-client
//
// Copyright: 2023, The Clowdr Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use crate::app::deps::app_context::AppContext;
use crate::app::event_handlers::ClientEventDispatcherTrait;
use crate::domain::channels::services::ChannelDomainService;
use crate::domain::conference::repos::{
    TextChatRepository, UserProfileRepository, VideoRoomRepository,
};
use crate::domain::credentials::repos::TokenCacheRepository;
use crate::domain::credentials::services::{
    ConfigurationService, CredentialBroker, TokenService,
};
use crate::domain::general::services::{BackendFunctionsService, IDProvider, TimeProvider};
use crate::domain::realtime::services::{RealtimeProvider, RealtimeSessionService};
use crate::domain::sidebar::services::{ChatsSidebarDomainService, RoomsSidebarDomainService};

pub(crate) type DynAppContext = Arc<AppContext>;
pub(crate) type DynBackendFunctionsService = Arc<dyn BackendFunctionsService>;
pub(crate) type DynChannelDomainService = Arc<dyn ChannelDomainService>;
pub(crate) type DynChatsSidebarDomainService = Arc<dyn ChatsSidebarDomainService>;
pub(crate) type DynClientEventDispatcher = Arc<dyn ClientEventDispatcherTrait>;
pub(crate) type DynConfigurationService = Arc<dyn ConfigurationService>;
pub(crate) type DynCredentialBroker = Arc<dyn CredentialBroker>;
pub(crate) type DynIDProvider = Arc<dyn IDProvider>;
pub(crate) type DynRealtimeProvider = Arc<dyn RealtimeProvider>;
pub(crate) type DynRealtimeSessionService = Arc<dyn RealtimeSessionService>;
pub(crate) type DynRoomsSidebarDomainService = Arc<dyn RoomsSidebarDomainService>;
pub(crate) type DynTextChatRepository = Arc<dyn TextChatRepository>;
pub(crate) type DynTimeProvider = Arc<dyn TimeProvider>;
pub(crate) type DynTokenCacheRepository = Arc<dyn TokenCacheRepository>;
pub(crate) type DynTokenService = Arc<dyn TokenService>;
pub(crate) type DynUserProfileRepository = Arc<dyn UserProfileRepository>;
pub(crate) type DynVideoRoomRepository = Arc<dyn VideoRoomRepository>;

pub struct AppDependencies {
    pub backend_functions_service: DynBackendFunctionsService,
    pub channel_domain_service: DynChannelDomainService,
    pub chats_sidebar_domain_service: DynChatsSidebarDomainService,
    pub client_event_dispatcher: DynClientEventDispatcher,
    pub configuration_service: DynConfigurationService,
    pub credential_broker: DynCredentialBroker,
    pub ctx: DynAppContext,
    pub id_provider: DynIDProvider,
    pub realtime_provider: DynRealtimeProvider,
    pub realtime_session: DynRealtimeSessionService,
    pub rooms_sidebar_domain_service: DynRoomsSidebarDomainService,
    pub text_chat_repo: DynTextChatRepository,
    pub time_provider: DynTimeProvider,
    pub token_cache_repo: DynTokenCacheRepository,
    pub token_service: DynTokenService,
    pub user_profile_repo: DynUserProfileRepository,
    pub video_room_repo: DynVideoRoomRepository,
}
