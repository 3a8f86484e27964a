// clowdr-core-client/clowdr-core-client
//
// Copyright: 2023, The Clowdr Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::conference::models::TextChat;
use crate::domain::shared::models::{ChatId, ConferenceId};

#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait TextChatRepository: Send + Sync {
    async fn get(&self, conference_id: &ConferenceId, id: &ChatId) -> Result<Option<TextChat>>;
    async fn get_all(&self, conference_id: &ConferenceId) -> Result<Vec<TextChat>>;
}
