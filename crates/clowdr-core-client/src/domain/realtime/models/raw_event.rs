// clowdr-core-client/clowdr-core-client
//
// Copyright: 2023, The Clowdr Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

use crate::domain::realtime::models::ProviderConnectionState;
use crate::domain::shared::models::{ChannelSid, ProfileId};

/// The names of the events emitted by a provider connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "camelCase")]
pub enum RawEventKind {
    TokenAboutToExpire,
    ChannelInvited,
    ConnectionError,
    ConnectionStateChanged,
    ChannelJoined,
    ChannelLeft,
    UserUpdated,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RawRealtimeEvent {
    TokenAboutToExpire,
    ChannelInvited { channel: RemoteChannel },
    ConnectionError(ConnectionErrorInfo),
    ConnectionStateChanged(ProviderConnectionState),
    ChannelJoined { channel: RemoteChannel },
    ChannelLeft { channel: RemoteChannel },
    UserUpdated {
        user: RealtimeUser,
        update_reasons: Vec<UserUpdateReason>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionErrorInfo {
    pub terminal: bool,
    pub message: String,
    pub http_status_code: Option<u16>,
    pub error_code: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteChannel {
    pub sid: ChannelSid,
    pub friendly_name: Option<String>,
}

/// A user as seen by the provider. The provider identity is the profile id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RealtimeUser {
    pub profile_id: ProfileId,
    pub friendly_name: Option<String>,
    pub is_online: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDescriptor {
    pub profile_id: ProfileId,
    pub friendly_name: Option<String>,
    pub is_online: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "camelCase")]
pub enum UserUpdateReason {
    FriendlyName,
    Attributes,
    Online,
    Notifiable,
}

impl RawRealtimeEvent {
    pub fn kind(&self) -> RawEventKind {
        match self {
            Self::TokenAboutToExpire => RawEventKind::TokenAboutToExpire,
            Self::ChannelInvited { .. } => RawEventKind::ChannelInvited,
            Self::ConnectionError(_) => RawEventKind::ConnectionError,
            Self::ConnectionStateChanged(_) => RawEventKind::ConnectionStateChanged,
            Self::ChannelJoined { .. } => RawEventKind::ChannelJoined,
            Self::ChannelLeft { .. } => RawEventKind::ChannelLeft,
            Self::UserUpdated { .. } => RawEventKind::UserUpdated,
        }
    }
}
