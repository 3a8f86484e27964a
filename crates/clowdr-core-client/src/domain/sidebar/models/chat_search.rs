// clowdr-core-client/clowdr-core-client
//
// Copyright: 2023, The Clowdr Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use crate::domain::channels::models::{ChatDescriptor, ChatKind};
use crate::domain::shared::models::ProfileId;
use crate::domain::sidebar::models::SidebarUser;

#[derive(Debug, Clone, PartialEq)]
pub enum ChatSearchResult {
    Existing(Arc<ChatDescriptor>),
    New {
        friendly_name: String,
        target_path: String,
    },
}

/// Searches chats by name and direct messages by the name of the other member. Users matching
/// the search that have no direct message with the current user yet are returned as `New`.
///
/// Searches shorter than `min_search_length` match nothing.
pub fn filter_chats(
    all_chats: &[Arc<ChatDescriptor>],
    all_users: &[Arc<SidebarUser>],
    current_user_id: Option<&ProfileId>,
    search: Option<&str>,
    min_search_length: usize,
) -> Vec<ChatSearchResult> {
    let Some(search) = search.filter(|search| search.chars().count() >= min_search_length) else {
        return vec![];
    };
    let search = search.to_lowercase();

    let matching_users = all_users
        .iter()
        .filter(|user| {
            user.name.to_lowercase().contains(&search)
                && Some(&user.id) != current_user_id
                && !user.is_banned
        })
        .collect::<Vec<_>>();

    let is_matching_user = |profile_id: &ProfileId| {
        matching_users
            .iter()
            .any(|user| &user.id == profile_id)
    };

    let matching_chats = all_chats
        .iter()
        .filter(|chat| {
            if chat.friendly_name.to_lowercase().contains(&search) {
                return true;
            }

            let ChatKind::DirectMessage { member1, member2 } = &chat.kind else {
                return false;
            };

            (Some(&member1.profile_id) == current_user_id && is_matching_user(&member2.profile_id))
                || (Some(&member2.profile_id) == current_user_id
                    && is_matching_user(&member1.profile_id))
        })
        .collect::<Vec<_>>();

    let new_chats = matching_users
        .iter()
        .filter(|user| !matching_chats.iter().any(|chat| chat.is_dm_with(&user.id)))
        .map(|user| ChatSearchResult::New {
            friendly_name: user.name.clone(),
            target_path: format!("/chat/new/{}", user.id),
        });

    matching_chats
        .iter()
        .map(|chat| ChatSearchResult::Existing((*chat).clone()))
        .chain(new_chats)
        .collect()
}
