// clowdr-core-client/clowdr-core-client
//
// Copyright: 2023, The Clowdr Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use clowdr_store::Store;

use crate::app::deps::{
    AppConfig, AppContext, AppDependencies, DynIDProvider, DynTimeProvider, DynTokenService,
};
use crate::app::event_handlers::{
    ChatsEventHandler, ClientEventDispatcher, DataEventHandlerQueue, RoomsEventHandler,
};
use crate::client::ClientInner;
use crate::domain::conference::repos::{
    TextChatRepository, UserProfileRepository, VideoRoomRepository,
};
use crate::domain::credentials::services::{ConfigurationService, TokenService};
use crate::domain::general::services::{BackendFunctionsService, IDProvider, TimeProvider};
use crate::domain::realtime::services::RealtimeProvider;
use crate::infra::credentials::HttpTokenService;
use crate::infra::general::{SystemTimeProvider, UUIDProvider};
use crate::infra::platform_dependencies::PlatformDependencies;
use crate::services::{ChannelsService, ChatsSidebarService, RoomsSidebarService, SessionService};
use crate::{Client, ClientDelegate};

pub struct UndefinedBackend;
pub struct UndefinedStore;

/// The conference backend and the realtime provider the client talks to.
pub struct BackendServices {
    pub backend_functions_service: Arc<dyn BackendFunctionsService>,
    pub configuration_service: Arc<dyn ConfigurationService>,
    pub realtime_provider: Arc<dyn RealtimeProvider>,
    pub text_chat_repo: Arc<dyn TextChatRepository>,
    pub user_profile_repo: Arc<dyn UserProfileRepository>,
    pub video_room_repo: Arc<dyn VideoRoomRepository>,
}

pub struct ClientBuilder<B, S> {
    app_config: AppConfig,
    backend: B,
    delegate: Option<Box<dyn ClientDelegate>>,
    id_provider: DynIDProvider,
    store: S,
    time_provider: DynTimeProvider,
    token_service: DynTokenService,
}

impl ClientBuilder<UndefinedBackend, UndefinedStore> {
    pub(crate) fn new() -> Self {
        ClientBuilder {
            app_config: Default::default(),
            backend: UndefinedBackend,
            delegate: None,
            id_provider: Arc::new(UUIDProvider::default()),
            store: UndefinedStore,
            time_provider: Arc::new(SystemTimeProvider::default()),
            token_service: Arc::new(HttpTokenService::default()),
        }
    }
}

impl<S> ClientBuilder<UndefinedBackend, S> {
    pub fn set_backend(self, backend: BackendServices) -> ClientBuilder<BackendServices, S> {
        ClientBuilder {
            app_config: self.app_config,
            backend,
            delegate: self.delegate,
            id_provider: self.id_provider,
            store: self.store,
            time_provider: self.time_provider,
            token_service: self.token_service,
        }
    }
}

impl<B> ClientBuilder<B, UndefinedStore> {
    /// Sets the store the realtime credential is cached in.
    pub fn set_store(self, store: Store) -> ClientBuilder<B, Store> {
        ClientBuilder {
            app_config: self.app_config,
            backend: self.backend,
            delegate: self.delegate,
            id_provider: self.id_provider,
            store,
            time_provider: self.time_provider,
            token_service: self.token_service,
        }
    }
}

impl<B, S> ClientBuilder<B, S> {
    pub fn set_id_provider<P: IDProvider + 'static>(mut self, id_provider: P) -> Self {
        self.id_provider = Arc::new(id_provider);
        self
    }

    pub fn set_time_provider<T: TimeProvider + 'static>(mut self, time_provider: T) -> Self {
        self.time_provider = Arc::new(time_provider);
        self
    }

    pub fn set_token_service<T: TokenService + 'static>(mut self, token_service: T) -> Self {
        self.token_service = Arc::new(token_service);
        self
    }

    pub fn set_config(mut self, config: AppConfig) -> Self {
        self.app_config = config;
        self
    }

    pub fn set_delegate(mut self, delegate: Option<Box<dyn ClientDelegate>>) -> Self {
        self.delegate = delegate;
        self
    }
}

impl ClientBuilder<BackendServices, Store> {
    pub fn build(self) -> Client {
        let data_event_handler_queue = Arc::new(DataEventHandlerQueue::new());
        let event_dispatcher = Arc::new(ClientEventDispatcher::new(self.delegate));

        let dependencies: AppDependencies = PlatformDependencies {
            backend: self.backend,
            client_event_dispatcher: event_dispatcher.clone(),
            ctx: AppContext::new(self.app_config),
            id_provider: self.id_provider,
            store: self.store,
            time_provider: self.time_provider,
            token_service: self.token_service,
        }
        .into();

        // Watched items concern both sidebar sections, so the chats handler passes them on.
        data_event_handler_queue.set_handlers(vec![
            Box::new(ChatsEventHandler::from(&dependencies)),
            Box::new(RoomsEventHandler::from(&dependencies)),
        ]);

        let client_inner = Arc::new(ClientInner {
            channels: ChannelsService::from(&dependencies),
            chats: ChatsSidebarService::from(&dependencies),
            rooms: RoomsSidebarService::from(&dependencies),
            ctx: dependencies.ctx.clone(),
            data_event_handler_queue,
            session: SessionService::from(&dependencies),
        });

        event_dispatcher.set_client_inner(Arc::downgrade(&client_inner));

        Client::from(client_inner)
    }
}
