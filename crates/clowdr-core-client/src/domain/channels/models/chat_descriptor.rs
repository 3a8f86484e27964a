// clowdr-core-client/clowdr-core-client
//
// Copyright: 2023, The Clowdr Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::realtime::models::MemberDescriptor;
use crate::domain::shared::models::{ChatId, ProfileId};

/// A summary of a chat as needed by the sidebar.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatDescriptor {
    pub id: ChatId,
    pub friendly_name: String,
    pub is_moderation: bool,
    pub is_moderation_hub: bool,
    pub kind: ChatKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ChatKind {
    Group,
    DirectMessage {
        member1: MemberDescriptor,
        member2: MemberDescriptor,
    },
}

impl ChatDescriptor {
    pub fn is_dm(&self) -> bool {
        matches!(self.kind, ChatKind::DirectMessage { .. })
    }

    pub fn is_hidden_in_sidebar(&self) -> bool {
        self.is_moderation || self.is_moderation_hub
    }

    /// Returns the members of a direct message other than `profile_id`.
    pub fn other_members(&self, profile_id: Option<&ProfileId>) -> Vec<&MemberDescriptor> {
        match &self.kind {
            ChatKind::Group => vec![],
            ChatKind::DirectMessage { member1, member2 } => [member1, member2]
                .into_iter()
                .filter(|member| Some(&member.profile_id) != profile_id)
                .collect(),
        }
    }

    pub fn is_dm_with(&self, profile_id: &ProfileId) -> bool {
        match &self.kind {
            ChatKind::Group => false,
            ChatKind::DirectMessage { member1, member2 } => {
                &member1.profile_id == profile_id || &member2.profile_id == profile_id
            }
        }
    }
}
