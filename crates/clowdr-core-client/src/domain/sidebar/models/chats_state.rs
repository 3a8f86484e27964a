// clowdr-core-client/clowdr-core-client
//
// Copyright: 2023, The Clowdr Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::HashSet;
use std::sync::Arc;

use crate::domain::channels::models::ChatDescriptor;
use crate::domain::shared::models::{ChatId, ProfileId};
use crate::domain::sidebar::models::merge::{dedup_by_key, merge_by_key};
use crate::domain::sidebar::models::{
    FilteredChat, SidebarChat, SidebarChatItem, SidebarChatKind, SidebarUser,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChatsTask {
    LoadingActiveChats,
    LoadingAllChats,
}

/// The state of the chats section of the sidebar. Collections hold `Arc`s so that rows which
/// were not affected by an update stay reference-equal.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatsState {
    pub tasks: HashSet<ChatsTask>,
    pub is_open: bool,
    pub chat_search: Option<String>,
    pub all_chats: Option<Vec<Arc<ChatDescriptor>>>,
    pub active_chats: Option<Vec<Arc<SidebarChat>>>,
    pub watched_chat_ids: Option<Vec<ChatId>>,
    pub filtered_chats: Vec<FilteredChat>,
    pub all_users: Option<Vec<Arc<SidebarUser>>>,
}

impl Default for ChatsState {
    fn default() -> Self {
        Self {
            tasks: HashSet::from([ChatsTask::LoadingActiveChats, ChatsTask::LoadingAllChats]),
            is_open: true,
            chat_search: None,
            all_chats: None,
            active_chats: None,
            watched_chat_ids: None,
            filtered_chats: vec![],
            all_users: None,
        }
    }
}

/// An update of `ChatsState`. Use the constructors to build one.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatsUpdate(Action);

#[derive(Debug, Clone, PartialEq)]
enum Action {
    UpdateAllChats(Vec<Arc<ChatDescriptor>>),
    SetActiveChats(Vec<Arc<SidebarChat>>),
    UpdateActiveChats(Vec<Arc<SidebarChat>>),
    SetFilteredChats(Vec<FilteredChat>),
    DeleteChats(Vec<ChatId>),
    Search(Option<String>),
    SetIsOpen(bool),
    SetMemberOnline {
        profile_id: ProfileId,
        is_online: Option<bool>,
    },
    SetUnreadCount {
        chat_id: ChatId,
        unread_count: Option<u32>,
    },
    SetWatchedChatIds(Vec<ChatId>),
    SetAllUsers(Vec<Arc<SidebarUser>>),
    UpsertUsers(Vec<Arc<SidebarUser>>),
    DeleteUsers(Vec<ProfileId>),
}

impl ChatsUpdate {
    /// Merges `chats` into the list of all chats.
    pub fn update_all_chats(chats: impl IntoIterator<Item = ChatDescriptor>) -> Self {
        Self(Action::UpdateAllChats(
            dedup_by_key(chats, |chat| chat.id.clone())
                .into_iter()
                .map(Arc::new)
                .collect(),
        ))
    }

    pub fn set_active_chats(chats: impl IntoIterator<Item = SidebarChat>) -> Self {
        Self(Action::SetActiveChats(
            dedup_by_key(chats, |chat| chat.id.clone())
                .into_iter()
                .map(Arc::new)
                .collect(),
        ))
    }

    /// Merges `chats` into the list of active chats.
    pub fn update_active_chats(chats: impl IntoIterator<Item = SidebarChat>) -> Self {
        Self(Action::UpdateActiveChats(
            dedup_by_key(chats, |chat| chat.id.clone())
                .into_iter()
                .map(Arc::new)
                .collect(),
        ))
    }

    pub fn set_filtered_chats(chats: Vec<FilteredChat>) -> Self {
        Self(Action::SetFilteredChats(dedup_by_key(chats, |chat| match chat {
            FilteredChat::Existing(chat) => chat.id.to_string(),
            FilteredChat::New { target_path, .. } => target_path.clone(),
        })))
    }

    /// Removes the chats from all, active and filtered chats at once.
    pub fn delete_chats(chat_ids: impl IntoIterator<Item = ChatId>) -> Self {
        Self(Action::DeleteChats(dedup_by_key(chat_ids, |id| id.clone())))
    }

    /// An empty search clears the search.
    pub fn search(search: Option<String>) -> Self {
        Self(Action::Search(search.filter(|search| !search.is_empty())))
    }

    pub fn set_is_open(is_open: bool) -> Self {
        Self(Action::SetIsOpen(is_open))
    }

    pub fn set_member_online(profile_id: ProfileId, is_online: Option<bool>) -> Self {
        Self(Action::SetMemberOnline {
            profile_id,
            is_online,
        })
    }

    pub fn set_unread_count(chat_id: ChatId, unread_count: Option<u32>) -> Self {
        Self(Action::SetUnreadCount {
            chat_id,
            unread_count,
        })
    }

    pub fn set_watched_chat_ids(chat_ids: impl IntoIterator<Item = ChatId>) -> Self {
        Self(Action::SetWatchedChatIds(dedup_by_key(chat_ids, |id| {
            id.clone()
        })))
    }

    pub fn set_all_users(users: impl IntoIterator<Item = SidebarUser>) -> Self {
        Self(Action::SetAllUsers(
            dedup_by_key(users, |user| user.id.clone())
                .into_iter()
                .map(Arc::new)
                .collect(),
        ))
    }

    pub fn upsert_users(users: impl IntoIterator<Item = SidebarUser>) -> Self {
        Self(Action::UpsertUsers(
            dedup_by_key(users, |user| user.id.clone())
                .into_iter()
                .map(Arc::new)
                .collect(),
        ))
    }

    pub fn delete_users(user_ids: impl IntoIterator<Item = ProfileId>) -> Self {
        Self(Action::DeleteUsers(dedup_by_key(user_ids, |id| id.clone())))
    }
}

pub fn next_state(
    current: &ChatsState,
    updates: impl IntoIterator<Item = ChatsUpdate>,
) -> ChatsState {
    let mut next = current.clone();
    let mut all_chats_updated = false;
    let mut active_chats_updated = false;

    for ChatsUpdate(action) in updates {
        match action {
            Action::Search(search) => next.chat_search = search,
            Action::SetIsOpen(is_open) => next.is_open = is_open,
            Action::UpdateAllChats(chats) => {
                next.all_chats = Some(merge_by_key(next.all_chats.as_ref(), &chats, |c| &c.id));
                all_chats_updated = true;
            }
            Action::SetActiveChats(chats) => {
                next.active_chats = Some(chats);
                active_chats_updated = true;
            }
            Action::UpdateActiveChats(chats) => {
                next.active_chats =
                    Some(merge_by_key(next.active_chats.as_ref(), &chats, |c| &c.id));
                active_chats_updated = true;
            }
            Action::SetFilteredChats(chats) => next.filtered_chats = chats,
            Action::DeleteChats(chat_ids) => {
                if let Some(all_chats) = next.all_chats.as_mut() {
                    all_chats.retain(|chat| !chat_ids.contains(&chat.id));
                }
                if let Some(active_chats) = next.active_chats.as_mut() {
                    active_chats.retain(|chat| !chat_ids.contains(&chat.id));
                }
                next.filtered_chats.retain(|chat| match chat.id() {
                    Some(id) => !chat_ids.contains(id),
                    None => true,
                });
                all_chats_updated = true;
                active_chats_updated = true;
            }
            Action::SetMemberOnline {
                profile_id,
                is_online,
            } => next.update_chats(|chat| chat.with_member_online(&profile_id, is_online)),
            Action::SetUnreadCount {
                chat_id,
                unread_count,
            } => next.update_chats(|chat| {
                (chat.id == chat_id).then(|| chat.with_unread_count(unread_count))
            }),
            Action::SetWatchedChatIds(chat_ids) => next.watched_chat_ids = Some(chat_ids),
            Action::SetAllUsers(users) => next.all_users = Some(users),
            Action::UpsertUsers(users) => {
                next.all_users = Some(merge_by_key(next.all_users.as_ref(), &users, |u| &u.id))
            }
            Action::DeleteUsers(user_ids) => {
                if let Some(all_users) = next.all_users.as_mut() {
                    all_users.retain(|user| !user_ids.contains(&user.id));
                }
            }
        }
    }

    if all_chats_updated {
        if next.all_chats.is_some() {
            next.tasks.remove(&ChatsTask::LoadingAllChats);
        } else {
            next.filtered_chats.clear();
        }
    }

    if active_chats_updated {
        next.tasks.remove(&ChatsTask::LoadingActiveChats);
    }

    next
}

impl ChatsState {
    pub fn is_search_valid(&self, min_search_length: usize) -> bool {
        self.chat_search
            .as_ref()
            .map(|search| search.chars().count() >= min_search_length)
            .unwrap_or(false)
    }

    pub fn is_loading(&self) -> bool {
        !self.tasks.is_empty()
    }

    /// The rows to display. While a valid search is active these are the search results,
    /// otherwise the active chats. Moderation chats are never listed.
    pub fn sidebar_items(&self, min_search_length: usize) -> Vec<SidebarChatItem> {
        let chats = if self.is_search_valid(min_search_length) {
            self.filtered_chats.clone()
        } else {
            self.active_chats
                .iter()
                .flatten()
                .cloned()
                .map(FilteredChat::Existing)
                .collect()
        };

        let mut items = chats
            .into_iter()
            .filter_map(|chat| match chat {
                FilteredChat::Existing(chat) if chat.is_moderation || chat.is_moderation_hub => {
                    None
                }
                FilteredChat::Existing(chat) => Some(SidebarChatItem {
                    key: chat.id.to_string(),
                    friendly_name: chat.display_name().to_string(),
                    is_dm: chat.is_dm(),
                    is_new: false,
                    is_online: match &chat.kind {
                        SidebarChatKind::DirectMessage { other_members } => {
                            other_members.first().and_then(|member| member.is_online)
                        }
                        SidebarChatKind::Group => None,
                    },
                    unread_count: chat.unread_count,
                    path: format!("/chat/{}", chat.id),
                }),
                FilteredChat::New {
                    friendly_name,
                    target_path,
                } => Some(SidebarChatItem {
                    key: format!("new-{}", friendly_name),
                    friendly_name,
                    is_dm: true,
                    is_new: true,
                    is_online: None,
                    unread_count: None,
                    path: target_path,
                }),
            })
            .collect::<Vec<_>>();

        items.sort_by(|lhs, rhs| {
            lhs.friendly_name
                .to_lowercase()
                .cmp(&rhs.friendly_name.to_lowercase())
                .then_with(|| lhs.friendly_name.cmp(&rhs.friendly_name))
        });
        items
    }

    /// Replaces active and filtered chats for which `f` returns a new value. Filtered chats are
    /// only touched once all chats are known.
    fn update_chats(&mut self, f: impl Fn(&SidebarChat) -> Option<SidebarChat>) {
        if let Some(active_chats) = self.active_chats.as_mut() {
            for chat in active_chats.iter_mut() {
                if let Some(updated) = f(chat) {
                    *chat = Arc::new(updated);
                }
            }
        }

        if self.all_chats.is_some() {
            for filtered in self.filtered_chats.iter_mut() {
                if let FilteredChat::Existing(chat) = filtered {
                    if let Some(updated) = f(chat) {
                        *chat = Arc::new(updated);
                    }
                }
            }
        }
    }
}
