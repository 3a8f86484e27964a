// clowdr-core-client/clowdr-core-client
//
// Copyright: 2023, The Clowdr Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use anyhow::Result;

use clowdr_proc_macros::InjectDependencies;

use crate::app::deps::DynChannelDomainService;
use crate::domain::channels::models::{Channel, ChannelFilter, ChatDescriptor, LookupError};
use crate::domain::shared::models::{ChatId, ProfileId};

#[derive(InjectDependencies)]
pub struct ChannelsService {
    #[inject]
    channel_domain_service: DynChannelDomainService,
}

impl ChannelsService {
    pub async fn get_channel(&self, chat_id: &ChatId) -> Result<Arc<Channel>, LookupError> {
        self.channel_domain_service.get_channel(chat_id).await
    }

    pub async fn channels(&self, filter: ChannelFilter) -> Result<Vec<Arc<Channel>>> {
        self.channel_domain_service.channels(filter).await
    }

    pub async fn active_channels(&self) -> Result<Vec<Arc<Channel>>> {
        self.channel_domain_service.active_channels().await
    }

    pub async fn get_chat(&self, chat_id: &ChatId) -> Result<Option<ChatDescriptor>> {
        self.channel_domain_service.get_chat(chat_id).await
    }

    /// Creates a chat with `invitees` and the current user. A private chat with a single
    /// invitee becomes a direct message.
    pub async fn create_channel(
        &self,
        invitees: Vec<ProfileId>,
        is_private: bool,
        title: impl Into<String>,
    ) -> Result<Arc<Channel>> {
        self.channel_domain_service
            .create_channel(invitees, is_private, title.into())
            .await
    }

    pub async fn create_moderation_channel(
        &self,
        invitees: Vec<ProfileId>,
        related_moderation_key: Option<String>,
        initial_message: Option<String>,
    ) -> Result<Arc<Channel>> {
        self.channel_domain_service
            .create_moderation_channel(invitees, related_moderation_key, initial_message)
            .await
    }

    /// Adds `profile_ids` to the chat. Returns for each profile whether it was added.
    pub async fn add_members(
        &self,
        chat_id: &ChatId,
        profile_ids: &[ProfileId],
    ) -> Result<Vec<(ProfileId, bool)>, LookupError> {
        let channel = self.channel_domain_service.get_channel(chat_id).await?;
        Ok(channel.add_members(profile_ids).await)
    }

    pub async fn get_unread_count(&self, chat_id: &ChatId) -> Result<Option<u32>, LookupError> {
        self.channel_domain_service.get_unread_count(chat_id).await
    }

    pub async fn subscribe_to_user(&self, profile_id: &ProfileId) -> Result<()> {
        self.channel_domain_service
            .subscribe_to_user(profile_id)
            .await
    }

    pub async fn unsubscribe_from_user(&self, profile_id: &ProfileId) -> Result<()> {
        self.channel_domain_service
            .unsubscribe_from_user(profile_id)
            .await
    }

    pub async fn get_is_user_online(
        &self,
        profile_id: &ProfileId,
    ) -> Result<Option<bool>, LookupError> {
        self.channel_domain_service
            .get_is_user_online(profile_id)
            .await
    }
}
