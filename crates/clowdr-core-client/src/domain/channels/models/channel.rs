// clowdr-core-client/clowdr-core-client
//
// Copyright: 2023, The Clowdr Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::HashMap;

use futures::future::join_all;
use parking_lot::RwLock;
use tracing::warn;

use crate::app::deps::DynRealtimeSessionService;
use crate::domain::channels::models::{ChatDescriptor, ChatKind, LookupError};
use crate::domain::conference::models::TextChat;
use crate::domain::realtime::models::MemberDescriptor;
use crate::domain::shared::models::{ChannelSid, ChatId, ProfileId};

/// A text chat together with the provider channel it is linked to. Instances are cached and
/// shared, updates to the backend record are applied in place.
pub struct Channel {
    chat: RwLock<TextChat>,
    realtime_session: DynRealtimeSessionService,
}

impl Channel {
    pub fn new(chat: TextChat, realtime_session: DynRealtimeSessionService) -> Self {
        Self {
            chat: RwLock::new(chat),
            realtime_session,
        }
    }

    pub fn id(&self) -> ChatId {
        self.chat.read().id.clone()
    }

    pub fn sid(&self) -> ChannelSid {
        self.chat.read().remote_sid.clone()
    }

    pub fn record(&self) -> TextChat {
        self.chat.read().clone()
    }

    pub fn members(&self) -> Vec<ProfileId> {
        self.chat.read().members.clone()
    }

    pub(crate) fn update_record(&self, chat: TextChat) {
        *self.chat.write() = chat;
    }

    /// Builds the descriptor of the chat. `member_states` holds the online state of the members
    /// of a direct message.
    pub fn descriptor(&self, member_states: &HashMap<ProfileId, Option<bool>>) -> ChatDescriptor {
        let chat = self.chat.read();

        let member = |profile_id: &ProfileId| MemberDescriptor {
            profile_id: profile_id.clone(),
            is_online: member_states.get(profile_id).cloned().flatten(),
        };

        let kind = match (chat.is_dm, chat.members.as_slice()) {
            (true, [member1, member2]) => ChatKind::DirectMessage {
                member1: member(member1),
                member2: member(member2),
            },
            (true, members) => {
                warn!(
                    "Direct message {} has {} members. Treating it as a group chat.",
                    chat.id,
                    members.len()
                );
                ChatKind::Group
            }
            (false, _) => ChatKind::Group,
        };

        ChatDescriptor {
            id: chat.id.clone(),
            friendly_name: chat.name.clone(),
            is_moderation: chat.is_moderation,
            is_moderation_hub: chat.is_moderation_hub,
            kind,
        }
    }

    /// Adds each profile to the channel. Failures are reported per profile.
    pub async fn add_members(&self, profile_ids: &[ProfileId]) -> Vec<(ProfileId, bool)> {
        let sid = self.sid();

        let connection = match self.realtime_session.connection().await {
            Ok(connection) => connection,
            Err(err) => {
                warn!("Cannot add members to channel {}. {}", sid, err.to_string());
                return profile_ids.iter().map(|id| (id.clone(), false)).collect();
            }
        };

        join_all(profile_ids.iter().map(|profile_id| {
            let connection = connection.clone();
            let sid = sid.clone();
            async move {
                let result = connection.add_member(&sid, profile_id).await;
                if let Err(err) = &result {
                    warn!(
                        "Failed to add {} to channel {}. {}",
                        profile_id,
                        sid,
                        err.to_string()
                    );
                }
                (profile_id.clone(), result.is_ok())
            }
        }))
        .await
    }

    pub async fn unread_count(&self) -> Result<Option<u32>, LookupError> {
        let connection = self.realtime_session.connection().await?;
        Ok(connection.get_unread_count(&self.sid()).await?)
    }
}
