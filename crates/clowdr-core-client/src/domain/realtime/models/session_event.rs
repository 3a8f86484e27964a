// clowdr-core-client/clowdr-core-client
//
// Copyright: 2023, The Clowdr Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use strum_macros::{Display, EnumIter};

use crate::domain::realtime::models::{
    ConnectionErrorInfo, ProviderConnectionState, RawEventKind, RawRealtimeEvent,
    UserUpdateReason,
};
use crate::domain::shared::models::{ChannelSid, ProfileId};

/// The events that can be observed through the session's listener registry. Provider payloads
/// are reduced to what consumers need.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    ConnectionError(ConnectionErrorInfo),
    ConnectionStateChanged(ProviderConnectionState),
    ChannelJoined(ChannelSid),
    ChannelLeft(ChannelSid),
    UserUpdated(UserUpdate),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "camelCase")]
pub enum SessionEventKind {
    ConnectionError,
    ConnectionStateChanged,
    ChannelJoined,
    ChannelLeft,
    UserUpdated,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberDescriptor {
    pub profile_id: ProfileId,
    pub is_online: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserUpdate {
    pub user: MemberDescriptor,
    pub update_reasons: Vec<UserUpdateReason>,
}

impl SessionEvent {
    pub fn kind(&self) -> SessionEventKind {
        match self {
            Self::ConnectionError(_) => SessionEventKind::ConnectionError,
            Self::ConnectionStateChanged(_) => SessionEventKind::ConnectionStateChanged,
            Self::ChannelJoined(_) => SessionEventKind::ChannelJoined,
            Self::ChannelLeft(_) => SessionEventKind::ChannelLeft,
            Self::UserUpdated(_) => SessionEventKind::UserUpdated,
        }
    }
}

impl SessionEventKind {
    pub fn raw_kind(&self) -> RawEventKind {
        match self {
            Self::ConnectionError => RawEventKind::ConnectionError,
            Self::ConnectionStateChanged => RawEventKind::ConnectionStateChanged,
            Self::ChannelJoined => RawEventKind::ChannelJoined,
            Self::ChannelLeft => RawEventKind::ChannelLeft,
            Self::UserUpdated => RawEventKind::UserUpdated,
        }
    }
}

impl TryFrom<RawRealtimeEvent> for SessionEvent {
    type Error = RawRealtimeEvent;

    /// Fails for provider events that are handled by the session itself.
    fn try_from(value: RawRealtimeEvent) -> Result<Self, Self::Error> {
        Ok(match value {
            RawRealtimeEvent::ConnectionError(info) => Self::ConnectionError(info),
            RawRealtimeEvent::ConnectionStateChanged(state) => Self::ConnectionStateChanged(state),
            RawRealtimeEvent::ChannelJoined { channel } => Self::ChannelJoined(channel.sid),
            RawRealtimeEvent::ChannelLeft { channel } => Self::ChannelLeft(channel.sid),
            RawRealtimeEvent::UserUpdated {
                user,
                update_reasons,
            } => Self::UserUpdated(UserUpdate {
                user: MemberDescriptor {
                    profile_id: user.profile_id,
                    is_online: user.is_online,
                },
                update_reasons,
            }),
            RawRealtimeEvent::TokenAboutToExpire | RawRealtimeEvent::ChannelInvited { .. } => {
                return Err(value)
            }
        })
    }
}
