// clowdr-core-client/clowdr-core-client
//
// Copyright: 2023, The Clowdr Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::conference::models::{TextChat, UserProfile, WatchedItems};
use crate::domain::realtime::models::UserUpdate;
use crate::domain::shared::models::{ChatId, ProfileId};
use crate::domain::sidebar::models::{ChatsState, SidebarChatItem};

#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait ChatsSidebarDomainService: Send + Sync {
    /// Loads all chats, the watched chats and all users of the conference. Calling `load` again
    /// discards the result of a load in flight.
    ///
    /// Dispatches a `ClientEvent::ChatsChanged` event whenever the state changed.
    async fn load(&self) -> Result<()>;

    /// Updates the search and recomputes the filtered chats. An empty search clears the search.
    async fn set_search(&self, search: Option<String>) -> Result<()>;

    fn set_is_open(&self, is_open: bool);

    /// Refreshes the descriptors of the updated text chats. Ignored until the watched chats
    /// are known.
    async fn handle_updated_chats(&self, chats: Vec<TextChat>) -> Result<()>;
    async fn handle_deleted_chats(&self, chat_ids: Vec<ChatId>) -> Result<()>;

    async fn handle_updated_users(&self, profiles: Vec<UserProfile>) -> Result<()>;
    async fn handle_deleted_users(&self, profile_ids: Vec<ProfileId>) -> Result<()>;

    /// Picks up changes of the current user's watched chats.
    async fn handle_updated_watched_items(&self, items: Vec<WatchedItems>) -> Result<()>;

    /// Applies presence changes of a direct message member.
    fn handle_user_updated(&self, update: &UserUpdate);

    fn set_unread_count(&self, chat_id: &ChatId, unread_count: Option<u32>);

    fn state(&self) -> ChatsState;
    fn sidebar_items(&self) -> Vec<SidebarChatItem>;

    /// Cancels all computations in flight and restores the initial state.
    fn reset(&self);
}
