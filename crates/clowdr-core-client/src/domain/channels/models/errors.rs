// clowdr-core-client/clowdr-core-client
//
// Copyright: 2023, The Clowdr Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::realtime::models::{ProviderError, SessionError};
use crate::domain::shared::models::ChatId;

/// A single chat or user lookup failed. The error only affects the caller of that lookup.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum LookupError {
    #[error("Text chat {0} not found.")]
    ChatNotFound(ChatId),
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error(transparent)]
    Provider(#[from] ProviderError),
    #[error("{msg}")]
    Backend { msg: String },
}

impl From<anyhow::Error> for LookupError {
    fn from(value: anyhow::Error) -> Self {
        Self::Backend {
            msg: value.to_string(),
        }
    }
}
