// clowdr-core-client/clowdr-core-client
//
// Copyright: 2023, The Clowdr Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::conference::models::TextChat;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChannelFilter {
    #[default]
    All,
    DirectMessages,
    Groups,
    Moderation,
}

impl ChannelFilter {
    pub fn matches(&self, chat: &TextChat) -> bool {
        match self {
            Self::All => true,
            Self::DirectMessages => chat.is_dm,
            Self::Groups => !chat.is_dm && !chat.is_moderation && !chat.is_moderation_hub,
            Self::Moderation => chat.is_moderation || chat.is_moderation_hub,
        }
    }
}
