// clowdr-core-client/clowdr-core-client
//
// Copyright: 2023, The Clowdr Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::credentials::models::CredentialError;

/// Errors reported by the realtime provider.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ProviderError {
    #[error("The access token has expired.")]
    TokenExpired,
    #[error("{0} not found.")]
    NotFound(String),
    #[error("{msg}")]
    Generic { msg: String },
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum SessionError {
    #[error("Authentication failed: {msg}")]
    Auth { msg: String },
    #[error("Configuration error: {msg}")]
    Configuration { msg: String },
    #[error("The realtime token expired again after it was refreshed.")]
    TransientConnection,
    #[error("Could not connect to the realtime service: {0}")]
    Connection(ProviderError),
    #[error("The realtime session is not connected.")]
    NotConnected,
}

impl From<CredentialError> for SessionError {
    fn from(value: CredentialError) -> Self {
        if value.is_configuration_error() {
            Self::Configuration {
                msg: value.to_string(),
            }
        } else {
            Self::Auth {
                msg: value.to_string(),
            }
        }
    }
}
