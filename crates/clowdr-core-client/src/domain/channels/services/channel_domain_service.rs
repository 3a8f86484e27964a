// clowdr-core-client/clowdr-core-client
//
// Copyright: 2023, The Clowdr Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::channels::models::{Channel, ChannelFilter, ChatDescriptor, LookupError};
use crate::domain::shared::models::{ChatId, ProfileId};

#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait ChannelDomainService: Send + Sync {
    /// Returns the channel of the text chat. Channels are cached by their remote sid.
    async fn get_channel(&self, chat_id: &ChatId) -> Result<Arc<Channel>, LookupError>;

    /// Returns the channels of all text chats matching `filter`. Chats that cannot be wrapped
    /// are skipped.
    async fn channels(&self, filter: ChannelFilter) -> Result<Vec<Arc<Channel>>>;

    /// Returns the channels of the chats the current user watches.
    async fn active_channels(&self) -> Result<Vec<Arc<Channel>>>;

    async fn create_channel(
        &self,
        invitees: Vec<ProfileId>,
        is_private: bool,
        title: String,
    ) -> Result<Arc<Channel>>;

    async fn create_moderation_channel(
        &self,
        invitees: Vec<ProfileId>,
        related_moderation_key: Option<String>,
        initial_message: Option<String>,
    ) -> Result<Arc<Channel>>;

    /// Subscribes to presence updates of the user.
    async fn subscribe_to_user(&self, profile_id: &ProfileId) -> Result<()>;
    /// Does nothing if the user is not subscribed.
    async fn unsubscribe_from_user(&self, profile_id: &ProfileId) -> Result<()>;

    /// Concurrent lookups for the same profile share a single remote lookup.
    async fn get_is_user_online(&self, profile_id: &ProfileId) -> Result<Option<bool>, LookupError>;

    async fn get_chat(&self, chat_id: &ChatId) -> Result<Option<ChatDescriptor>>;
    async fn list_all_chats(&self) -> Result<Vec<ChatDescriptor>>;
    async fn list_watched_chats(&self) -> Result<Vec<ChatDescriptor>>;
    async fn get_unread_count(&self, chat_id: &ChatId) -> Result<Option<u32>, LookupError>;

    fn clear_cache(&self);
}
