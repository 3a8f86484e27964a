// clowdr-core-client/clowdr-core-client
//
// Copyright: 2023, The Clowdr Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use anyhow::Result;
use parking_lot::Mutex;

use clowdr_proc_macros::InjectDependencies;

use crate::app::deps::{
    DynChannelDomainService, DynChatsSidebarDomainService, DynRealtimeSessionService,
};
use crate::domain::realtime::models::{Listener, SessionEventKind, UserUpdate, UserUpdatedEvent};
use crate::domain::shared::models::{ChatId, ListenerId};
use crate::domain::sidebar::models::{ChatsState, SidebarChatItem};

#[derive(InjectDependencies)]
pub struct ChatsSidebarService {
    #[inject]
    channel_domain_service: DynChannelDomainService,
    #[inject]
    chats_sidebar_domain_service: DynChatsSidebarDomainService,
    #[inject]
    realtime_session: DynRealtimeSessionService,

    user_updated_listener: Mutex<Option<ListenerId>>,
}

impl ChatsSidebarService {
    /// Loads all chats of the conference and starts following the online state of the members
    /// of direct messages.
    pub async fn load(&self) -> Result<()> {
        self.start_observing();
        self.chats_sidebar_domain_service.load().await
    }

    pub async fn search(&self, search: Option<String>) -> Result<()> {
        self.chats_sidebar_domain_service.set_search(search).await
    }

    pub fn set_is_open(&self, is_open: bool) {
        self.chats_sidebar_domain_service.set_is_open(is_open)
    }

    pub fn state(&self) -> ChatsState {
        self.chats_sidebar_domain_service.state()
    }

    pub fn sidebar_items(&self) -> Vec<SidebarChatItem> {
        self.chats_sidebar_domain_service.sidebar_items()
    }

    pub fn set_unread_count(&self, chat_id: &ChatId, unread_count: Option<u32>) {
        self.chats_sidebar_domain_service
            .set_unread_count(chat_id, unread_count)
    }

    /// Reloads the unread count of the chat from the realtime service.
    pub async fn refresh_unread_count(&self, chat_id: &ChatId) -> Result<()> {
        let unread_count = self
            .channel_domain_service
            .get_unread_count(chat_id)
            .await?;
        self.set_unread_count(chat_id, unread_count);
        Ok(())
    }

    pub fn start_observing(&self) {
        let domain_service = Arc::downgrade(&self.chats_sidebar_domain_service);

        let listener_id = self.realtime_session.listeners().on::<UserUpdatedEvent>(
            Listener::named(
                "ChatsSidebar",
                "updateChatDescriptors",
                move |update: &UserUpdate| {
                    if let Some(domain_service) = domain_service.upgrade() {
                        domain_service.handle_user_updated(update)
                    }
                },
            ),
        );

        self.user_updated_listener.lock().replace(listener_id);
    }

    pub fn stop_observing(&self) {
        let Some(listener_id) = self.user_updated_listener.lock().take() else {
            return;
        };
        self.realtime_session
            .listeners()
            .off(SessionEventKind::UserUpdated, &listener_id);
    }
}
