// clowdr-core-client/clowdr-core-client
//
// Copyright: 2023, The Clowdr Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use crate::domain::conference::models::UserProfile;
use crate::domain::shared::models::{ChatId, ProfileId};

/// A chat as listed in the sidebar. Direct messages carry the other members with their display
/// names and online state.
#[derive(Debug, Clone, PartialEq)]
pub struct SidebarChat {
    pub id: ChatId,
    pub friendly_name: String,
    pub is_moderation: bool,
    pub is_moderation_hub: bool,
    pub unread_count: Option<u32>,
    pub kind: SidebarChatKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SidebarChatKind {
    Group,
    DirectMessage { other_members: Vec<SidebarMember> },
}

#[derive(Debug, Clone, PartialEq)]
pub struct SidebarMember {
    pub profile_id: ProfileId,
    pub is_online: Option<bool>,
    pub display_name: String,
}

/// A search result. Users without a direct message yet are listed as `New` and link to the page
/// that starts one.
#[derive(Debug, Clone, PartialEq)]
pub enum FilteredChat {
    Existing(Arc<SidebarChat>),
    New {
        friendly_name: String,
        target_path: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarUser {
    pub id: ProfileId,
    pub name: String,
    pub is_banned: bool,
}

impl SidebarChat {
    pub fn is_dm(&self) -> bool {
        matches!(self.kind, SidebarChatKind::DirectMessage { .. })
    }

    /// Direct messages are named after the other member.
    pub fn display_name(&self) -> &str {
        match &self.kind {
            SidebarChatKind::DirectMessage { other_members } => other_members
                .first()
                .map(|member| member.display_name.as_str())
                .unwrap_or(self.friendly_name.as_str()),
            SidebarChatKind::Group => &self.friendly_name,
        }
    }

    /// Returns a copy with the online state of `profile_id` replaced or `None` if the chat
    /// doesn't list that member.
    pub fn with_member_online(
        &self,
        profile_id: &ProfileId,
        is_online: Option<bool>,
    ) -> Option<SidebarChat> {
        let SidebarChatKind::DirectMessage { other_members } = &self.kind else {
            return None;
        };

        if !other_members
            .iter()
            .any(|member| &member.profile_id == profile_id)
        {
            return None;
        }

        let other_members = other_members
            .iter()
            .map(|member| {
                let mut member = member.clone();
                if &member.profile_id == profile_id {
                    member.is_online = is_online;
                }
                member
            })
            .collect();

        Some(SidebarChat {
            kind: SidebarChatKind::DirectMessage { other_members },
            ..self.clone()
        })
    }

    pub fn with_unread_count(&self, unread_count: Option<u32>) -> SidebarChat {
        SidebarChat {
            unread_count,
            ..self.clone()
        }
    }
}

impl From<&UserProfile> for SidebarUser {
    fn from(value: &UserProfile) -> Self {
        Self {
            id: value.id.clone(),
            name: value.display_name.clone(),
            is_banned: value.is_banned,
        }
    }
}

impl FilteredChat {
    pub fn id(&self) -> Option<&ChatId> {
        match self {
            Self::Existing(chat) => Some(&chat.id),
            Self::New { .. } => None,
        }
    }
}
