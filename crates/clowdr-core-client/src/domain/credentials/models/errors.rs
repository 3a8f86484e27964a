// clowdr-core-client/clowdr-core-client
//
// Copyright: 2023, The Clowdr Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::shared::models::ConferenceId;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum CredentialError {
    #[error("The realtime service is not configured for conference {conference}.")]
    NotConfigured { conference: ConferenceId },
    #[error("The realtime callback URL '{url}' is invalid.")]
    InvalidCallbackUrl { url: String },
    #[error("Realtime token could not be obtained: {msg}")]
    TokenUnavailable { msg: String },
}

impl CredentialError {
    pub fn is_configuration_error(&self) -> bool {
        match self {
            Self::NotConfigured { .. } | Self::InvalidCallbackUrl { .. } => true,
            Self::TokenUnavailable { .. } => false,
        }
    }
}
