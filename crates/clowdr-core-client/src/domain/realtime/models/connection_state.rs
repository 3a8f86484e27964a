// clowdr-core-client/clowdr-core-client
//
// Copyright: 2023, The Clowdr Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// The lifecycle of the single logical connection to the realtime provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectionState {
    #[default]
    Uninitialized,
    Connecting,
    Connected,
    Reconnecting,
    Terminated,
}

/// The connection state as reported by the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ProviderConnectionState {
    Connecting,
    Connected,
    Disconnecting,
    Disconnected,
    Denied,
}

impl ConnectionState {
    /// Computes the next state after the provider reported `provider_state`. Provider
    /// transitions only matter once the connection was established.
    pub fn apply(self, provider_state: ProviderConnectionState) -> ConnectionState {
        match self {
            Self::Connected | Self::Reconnecting => match provider_state {
                ProviderConnectionState::Connected => Self::Connected,
                ProviderConnectionState::Connecting
                | ProviderConnectionState::Disconnecting
                | ProviderConnectionState::Disconnected => Self::Reconnecting,
                ProviderConnectionState::Denied => Self::Terminated,
            },
            Self::Uninitialized | Self::Connecting | Self::Terminated => self,
        }
    }
}
