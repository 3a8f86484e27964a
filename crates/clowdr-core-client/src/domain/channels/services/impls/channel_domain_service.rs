// clowdr-core-client/clowdr-core-client
//
// Copyright: 2023, The Clowdr Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::HashMap;
use std::sync::Arc;

use anyhow::{bail, Result};
use async_trait::async_trait;
use futures::future::{join_all, BoxFuture, FutureExt, Shared};
use parking_lot::{Mutex, RwLock};
use tracing::{info, warn};

use clowdr_proc_macros::DependenciesStruct;

use crate::app::deps::{
    DynAppContext, DynBackendFunctionsService, DynIDProvider, DynRealtimeSessionService,
    DynTextChatRepository, DynUserProfileRepository,
};
use crate::domain::channels::models::{
    Channel, ChannelFilter, ChatDescriptor, CreateTextChatRequest, LookupError,
};
use crate::domain::conference::models::TextChat;
use crate::domain::shared::models::{ChannelSid, ChatId, ProfileId, SessionContext};

use super::super::ChannelDomainService as ChannelDomainServiceTrait;

const CREATE_TEXT_CHAT_FUNCTION: &str = "textChat-create";

type OnlineLookup = Shared<BoxFuture<'static, Result<Option<bool>, LookupError>>>;

#[derive(DependenciesStruct)]
pub struct ChannelDomainService {
    backend_functions_service: DynBackendFunctionsService,
    ctx: DynAppContext,
    id_provider: DynIDProvider,
    realtime_session: DynRealtimeSessionService,
    text_chat_repo: DynTextChatRepository,
    user_profile_repo: DynUserProfileRepository,

    #[state]
    channels: RwLock<HashMap<ChannelSid, Arc<Channel>>>,
    #[state]
    online_lookups: Mutex<HashMap<ProfileId, OnlineLookup>>,
}

#[async_trait]
impl ChannelDomainServiceTrait for ChannelDomainService {
    async fn get_channel(&self, chat_id: &ChatId) -> Result<Arc<Channel>, LookupError> {
        let ctx = self.ctx.session_context()?;

        let Some(chat) = self.text_chat_repo.get(&ctx.conference_id, chat_id).await? else {
            return Err(LookupError::ChatNotFound(chat_id.clone()));
        };

        Ok(self.channel_for_record(chat))
    }

    async fn channels(&self, filter: ChannelFilter) -> Result<Vec<Arc<Channel>>> {
        let ctx = self.ctx.session_context()?;
        let chats = self.text_chat_repo.get_all(&ctx.conference_id).await?;

        Ok(chats
            .into_iter()
            .filter(|chat| filter.matches(chat))
            .filter_map(|chat| {
                // Chats without a channel were never mirrored to the provider.
                if chat.remote_sid.as_str().is_empty() {
                    warn!("Skipping text chat {} without remote channel.", chat.id);
                    return None;
                }
                Some(self.channel_for_record(chat))
            })
            .collect())
    }

    async fn active_channels(&self) -> Result<Vec<Arc<Channel>>> {
        let ctx = self.ctx.session_context()?;

        let Some(watched) = self
            .user_profile_repo
            .get_watched_items(&ctx.conference_id, &ctx.profile_id)
            .await?
        else {
            return Ok(vec![]);
        };

        let channels = join_all(
            watched
                .watched_chats
                .iter()
                .map(|chat_id| self.get_channel(chat_id)),
        )
        .await;

        Ok(channels
            .into_iter()
            .zip(watched.watched_chats.iter())
            .filter_map(|(result, chat_id)| match result {
                Ok(channel) => Some(channel),
                Err(err) => {
                    warn!("Skipping watched chat {}. {}", chat_id, err.to_string());
                    None
                }
            })
            .collect())
    }

    #[tracing::instrument(skip(self))]
    async fn create_channel(
        &self,
        invitees: Vec<ProfileId>,
        is_private: bool,
        title: String,
    ) -> Result<Arc<Channel>> {
        if invitees.is_empty() {
            bail!("Cannot create a channel without invitees.")
        }

        let ctx = self.ctx.session_context()?;

        let request = CreateTextChatRequest {
            name: title,
            conference: ctx.conference_id.clone(),
            is_private,
            is_dm: is_private && invitees.len() == 1,
            is_moderation: None,
            auto_watch: false,
            members: Self::members_with_caller(invitees, &ctx),
            related_moderation_key: None,
            initial_message: None,
        };

        let chat_id = self.create_text_chat(&request, &ctx).await?;
        Ok(self.get_channel(&chat_id).await?)
    }

    #[tracing::instrument(skip(self, initial_message))]
    async fn create_moderation_channel(
        &self,
        invitees: Vec<ProfileId>,
        related_moderation_key: Option<String>,
        initial_message: Option<String>,
    ) -> Result<Arc<Channel>> {
        let ctx = self.ctx.session_context()?;

        let id = self.id_provider.new_id();
        let short_id = id.split('-').next().unwrap_or_default();

        let request = CreateTextChatRequest {
            name: format!("Moderation: {}", short_id),
            conference: ctx.conference_id.clone(),
            is_private: true,
            is_dm: false,
            is_moderation: Some(true),
            auto_watch: true,
            members: Self::members_with_caller(invitees, &ctx),
            related_moderation_key,
            initial_message,
        };

        let chat_id = self.create_text_chat(&request, &ctx).await?;
        Ok(self.get_channel(&chat_id).await?)
    }

    async fn subscribe_to_user(&self, profile_id: &ProfileId) -> Result<()> {
        let connection = self.realtime_session.connection().await?;
        // Fetching the user subscribes to their updates.
        connection.get_user(profile_id).await?;
        Ok(())
    }

    async fn unsubscribe_from_user(&self, profile_id: &ProfileId) -> Result<()> {
        let connection = self.realtime_session.connection().await?;
        let subscribed_users = connection.get_subscribed_users().await?;

        if !subscribed_users
            .iter()
            .any(|user| &user.profile_id == profile_id)
        {
            return Ok(());
        }

        connection.unsubscribe_user(profile_id).await?;
        Ok(())
    }

    async fn get_is_user_online(&self, profile_id: &ProfileId) -> Result<Option<bool>, LookupError> {
        let lookup = {
            let mut lookups = self.online_lookups.lock();

            if let Some(lookup) = lookups.get(profile_id) {
                lookup.clone()
            } else {
                let realtime_session = self.realtime_session.clone();
                let remote_profile_id = profile_id.clone();

                let lookup = async move {
                    let connection = realtime_session.connection().await?;
                    let descriptor = connection.get_user_descriptor(&remote_profile_id).await?;
                    Ok::<_, LookupError>(descriptor.is_online)
                }
                .boxed()
                .shared();

                lookups.insert(profile_id.clone(), lookup.clone());
                lookup
            }
        };

        let result = lookup.clone().await;

        let mut lookups = self.online_lookups.lock();
        if lookups
            .get(profile_id)
            .map(|current| current.ptr_eq(&lookup))
            .unwrap_or(false)
        {
            lookups.remove(profile_id);
        }

        result
    }

    async fn get_chat(&self, chat_id: &ChatId) -> Result<Option<ChatDescriptor>> {
        match self.get_channel(chat_id).await {
            Ok(channel) => Ok(Some(self.describe(&channel).await)),
            Err(LookupError::ChatNotFound(_)) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    async fn list_all_chats(&self) -> Result<Vec<ChatDescriptor>> {
        let channels = self.channels(ChannelFilter::All).await?;
        Ok(join_all(channels.iter().map(|channel| self.describe(channel))).await)
    }

    async fn list_watched_chats(&self) -> Result<Vec<ChatDescriptor>> {
        let channels = self.active_channels().await?;
        Ok(join_all(channels.iter().map(|channel| self.describe(channel))).await)
    }

    async fn get_unread_count(&self, chat_id: &ChatId) -> Result<Option<u32>, LookupError> {
        self.get_channel(chat_id).await?.unread_count().await
    }

    fn clear_cache(&self) {
        self.channels.write().clear();
        self.online_lookups.lock().clear();
    }
}

impl ChannelDomainService {
    fn channel_for_record(&self, chat: TextChat) -> Arc<Channel> {
        let mut channels = self.channels.write();

        if let Some(channel) = channels.get(&chat.remote_sid) {
            channel.update_record(chat);
            return channel.clone();
        }

        let sid = chat.remote_sid.clone();
        let channel = Arc::new(Channel::new(chat, self.realtime_session.clone()));
        channels.insert(sid, channel.clone());
        channel
    }

    async fn describe(&self, channel: &Channel) -> ChatDescriptor {
        let record = channel.record();
        if !record.is_dm {
            return channel.descriptor(&HashMap::new());
        }

        let states = join_all(record.members.iter().map(|profile_id| async move {
            let is_online = match self.get_is_user_online(profile_id).await {
                Ok(is_online) => is_online,
                Err(err) => {
                    warn!(
                        "Could not determine online state of {}. {}",
                        profile_id,
                        err.to_string()
                    );
                    None
                }
            };
            (profile_id.clone(), is_online)
        }))
        .await;

        channel.descriptor(&states.into_iter().collect())
    }

    async fn create_text_chat(
        &self,
        request: &CreateTextChatRequest,
        ctx: &SessionContext,
    ) -> Result<ChatId> {
        info!("Creating text chat '{}'.", request.name);

        let result = self
            .backend_functions_service
            .run(
                CREATE_TEXT_CHAT_FUNCTION,
                serde_json::to_value(request)?,
                &ctx.session_identity,
            )
            .await?;

        Ok(serde_json::from_value(result)?)
    }

    fn members_with_caller(invitees: Vec<ProfileId>, ctx: &SessionContext) -> Vec<ProfileId> {
        let mut members = invitees;
        members.push(ctx.profile_id.clone());
        members
    }
}
