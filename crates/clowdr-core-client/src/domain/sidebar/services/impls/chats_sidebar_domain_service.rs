// clowdr-core-client/clowdr-core-client
//
// Copyright: 2023, The Clowdr Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use futures::future::join_all;
use futures::try_join;
use parking_lot::RwLock;
use tracing::{debug, warn};

use clowdr_proc_macros::DependenciesStruct;

use crate::app::deps::{
    DynAppContext, DynChannelDomainService, DynClientEventDispatcher, DynUserProfileRepository,
};
use crate::domain::channels::models::{ChatDescriptor, ChatKind};
use crate::domain::conference::models::{TextChat, UserProfile, WatchedItems};
use crate::domain::realtime::models::{UserUpdate, UserUpdateReason};
use crate::domain::shared::models::{ChatId, ProfileId, SessionContext};
use crate::domain::shared::utils::{DerivedTask, SessionScope};
use crate::domain::sidebar::models::{
    filter_chats, next_chats_state, ChatSearchResult, ChatsState, ChatsUpdate, FilteredChat,
    SidebarChat, SidebarChatItem, SidebarChatKind, SidebarMember, SidebarUser,
};
use crate::ClientEvent;

use super::super::ChatsSidebarDomainService as ChatsSidebarDomainServiceTrait;
use super::current_watched_items_id;

#[derive(DependenciesStruct)]
pub struct ChatsSidebarDomainService {
    channel_domain_service: DynChannelDomainService,
    client_event_dispatcher: DynClientEventDispatcher,
    ctx: DynAppContext,
    user_profile_repo: DynUserProfileRepository,

    #[state]
    state: RwLock<ChatsState>,
    #[state]
    load_task: DerivedTask,
    #[state]
    filter_task: DerivedTask,
    #[state]
    scope: SessionScope,
}

#[async_trait]
impl ChatsSidebarDomainServiceTrait for ChatsSidebarDomainService {
    #[tracing::instrument(skip(self))]
    async fn load(&self) -> Result<()> {
        let ctx = self.ctx.session_context()?;

        self.load_task
            .run(
                async {
                    let (all_chats, profiles, watched_items) = try_join!(
                        self.channel_domain_service.list_all_chats(),
                        self.user_profile_repo.get_all(&ctx.conference_id),
                        self.user_profile_repo
                            .get_watched_items(&ctx.conference_id, &ctx.profile_id)
                    )?;
                    let active_chats = self.load_active_chats(&ctx).await?;

                    Ok::<_, anyhow::Error>(vec![
                        ChatsUpdate::update_all_chats(all_chats),
                        ChatsUpdate::set_all_users(profiles.iter().map(SidebarUser::from)),
                        ChatsUpdate::set_watched_chat_ids(
                            watched_items
                                .map(|items| items.watched_chats)
                                .unwrap_or_default(),
                        ),
                        ChatsUpdate::set_active_chats(active_chats),
                    ])
                },
                |updates| self.apply(updates),
            )
            .await?;

        self.refresh_filtered_chats().await
    }

    async fn set_search(&self, search: Option<String>) -> Result<()> {
        self.apply([ChatsUpdate::search(search)]);
        self.refresh_filtered_chats().await
    }

    fn set_is_open(&self, is_open: bool) {
        self.apply([ChatsUpdate::set_is_open(is_open)]);
    }

    async fn handle_updated_chats(&self, chats: Vec<TextChat>) -> Result<()> {
        let Some(watched_chat_ids) = self.state.read().watched_chat_ids.clone() else {
            debug!("Ignoring chat updates until the watched chats are loaded.");
            return Ok(());
        };

        let ctx = self.ctx.session_context()?;
        let mut has_changes = false;

        self.scope
            .run(
                async {
                    let mut all_chats = vec![];
                    let mut active_chats = vec![];

                    for chat in chats {
                        let Some(descriptor) =
                            self.channel_domain_service.get_chat(&chat.id).await?
                        else {
                            continue;
                        };

                        if watched_chat_ids.contains(&descriptor.id) {
                            active_chats.push(self.upgrade(&ctx, &descriptor, true).await);
                        }
                        all_chats.push(descriptor);
                    }

                    Ok::<_, anyhow::Error>((all_chats, active_chats))
                },
                |(all_chats, active_chats)| {
                    if all_chats.is_empty() {
                        return;
                    }
                    has_changes = true;

                    let mut updates = vec![ChatsUpdate::update_all_chats(all_chats)];
                    if !active_chats.is_empty() {
                        updates.push(ChatsUpdate::update_active_chats(active_chats));
                    }
                    self.apply(updates);
                },
            )
            .await?;

        if !has_changes {
            return Ok(());
        }
        self.refresh_filtered_chats().await
    }

    async fn handle_deleted_chats(&self, chat_ids: Vec<ChatId>) -> Result<()> {
        self.apply([ChatsUpdate::delete_chats(chat_ids)]);
        Ok(())
    }

    async fn handle_updated_users(&self, profiles: Vec<UserProfile>) -> Result<()> {
        self.apply([ChatsUpdate::upsert_users(
            profiles.iter().map(SidebarUser::from),
        )]);
        self.refresh_filtered_chats().await
    }

    async fn handle_deleted_users(&self, profile_ids: Vec<ProfileId>) -> Result<()> {
        self.apply([ChatsUpdate::delete_users(profile_ids)]);
        self.refresh_filtered_chats().await
    }

    async fn handle_updated_watched_items(&self, items: Vec<WatchedItems>) -> Result<()> {
        let ctx = self.ctx.session_context()?;

        self.scope
            .run(
                async {
                    let Some(watched_id) =
                        current_watched_items_id(&self.user_profile_repo, &ctx).await?
                    else {
                        return Ok(None);
                    };
                    let Some(items) = items.into_iter().find(|items| items.id == watched_id)
                    else {
                        return Ok(None);
                    };

                    let active_chats = self.load_active_chats(&ctx).await?;
                    Ok::<_, anyhow::Error>(Some((items.watched_chats, active_chats)))
                },
                |result| {
                    let Some((watched_chat_ids, active_chats)) = result else {
                        return;
                    };
                    self.apply([
                        ChatsUpdate::set_watched_chat_ids(watched_chat_ids),
                        ChatsUpdate::set_active_chats(active_chats),
                    ]);
                },
            )
            .await
    }

    fn handle_user_updated(&self, update: &UserUpdate) {
        let is_relevant = update.update_reasons.iter().any(|reason| {
            matches!(
                reason,
                UserUpdateReason::FriendlyName
                    | UserUpdateReason::Online
                    | UserUpdateReason::Attributes
            )
        });

        if !is_relevant {
            return;
        }

        self.apply([ChatsUpdate::set_member_online(
            update.user.profile_id.clone(),
            update.user.is_online,
        )]);
    }

    fn set_unread_count(&self, chat_id: &ChatId, unread_count: Option<u32>) {
        self.apply([ChatsUpdate::set_unread_count(chat_id.clone(), unread_count)]);
    }

    fn state(&self) -> ChatsState {
        self.state.read().clone()
    }

    fn sidebar_items(&self) -> Vec<SidebarChatItem> {
        self.state
            .read()
            .sidebar_items(self.ctx.config.min_search_length)
    }

    fn reset(&self) {
        self.scope.reset();
        self.load_task.cancel();
        self.filter_task.cancel();
        *self.state.write() = Default::default();
    }
}

impl ChatsSidebarDomainService {
    /// Applies `updates` and dispatches `ClientEvent::ChatsChanged` if the state changed.
    fn apply(&self, updates: impl IntoIterator<Item = ChatsUpdate>) {
        {
            let mut state = self.state.write();
            let next = next_chats_state(&state, updates);
            if next == *state {
                return;
            }
            *state = next;
        }

        self.client_event_dispatcher
            .dispatch_event(ClientEvent::ChatsChanged);
    }

    async fn refresh_filtered_chats(&self) -> Result<()> {
        let ctx = self.ctx.session_context()?;

        let results = {
            let state = self.state.read();
            filter_chats(
                state.all_chats.as_deref().unwrap_or_default(),
                state.all_users.as_deref().unwrap_or_default(),
                Some(&ctx.profile_id),
                state.chat_search.as_deref(),
                self.ctx.config.min_search_length,
            )
        };

        self.filter_task
            .run(
                async {
                    let chats = join_all(results.iter().map(|result| async {
                        match result {
                            ChatSearchResult::Existing(chat) => {
                                FilteredChat::Existing(Arc::new(self.upgrade(&ctx, chat, false).await))
                            }
                            ChatSearchResult::New {
                                friendly_name,
                                target_path,
                            } => FilteredChat::New {
                                friendly_name: friendly_name.clone(),
                                target_path: target_path.clone(),
                            },
                        }
                    }))
                    .await;
                    Ok::<_, anyhow::Error>(chats)
                },
                |chats| self.apply([ChatsUpdate::set_filtered_chats(chats)]),
            )
            .await
    }

    async fn load_active_chats(&self, ctx: &SessionContext) -> Result<Vec<SidebarChat>> {
        let watched_chats = self.channel_domain_service.list_watched_chats().await?;
        Ok(join_all(
            watched_chats
                .iter()
                .map(|chat| self.upgrade(ctx, chat, true)),
        )
        .await)
    }

    /// Resolves the display names of the other members of a direct message and, for chats
    /// shown as active, the unread count. Lookup failures degrade to the chat's name and an
    /// unknown unread count.
    async fn upgrade(
        &self,
        ctx: &SessionContext,
        chat: &ChatDescriptor,
        load_unread_count: bool,
    ) -> SidebarChat {
        let unread_count = if load_unread_count {
            match self.channel_domain_service.get_unread_count(&chat.id).await {
                Ok(unread_count) => unread_count,
                Err(err) => {
                    warn!(
                        "Could not load unread count of chat {}. {}",
                        chat.id,
                        err.to_string()
                    );
                    None
                }
            }
        } else {
            None
        };

        let kind = match &chat.kind {
            ChatKind::Group => SidebarChatKind::Group,
            ChatKind::DirectMessage { .. } => {
                let other_members = join_all(
                    chat.other_members(Some(&ctx.profile_id))
                        .into_iter()
                        .map(|member| async move {
                            let display_name = match self
                                .user_profile_repo
                                .get(&ctx.conference_id, &member.profile_id)
                                .await
                            {
                                Ok(Some(profile)) => profile.display_name,
                                Ok(None) => {
                                    warn!("Missing profile of chat member {}.", member.profile_id);
                                    chat.friendly_name.clone()
                                }
                                Err(err) => {
                                    warn!(
                                        "Could not load profile of chat member {}. {}",
                                        member.profile_id,
                                        err.to_string()
                                    );
                                    chat.friendly_name.clone()
                                }
                            };

                            SidebarMember {
                                profile_id: member.profile_id.clone(),
                                is_online: member.is_online,
                                display_name,
                            }
                        }),
                )
                .await;

                SidebarChatKind::DirectMessage { other_members }
            }
        };

        SidebarChat {
            id: chat.id.clone(),
            friendly_name: chat.friendly_name.clone(),
            is_moderation: chat.is_moderation,
            is_moderation_hub: chat.is_moderation_hub,
            unread_count,
            kind,
        }
    }
}
