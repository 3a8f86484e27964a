// clowdr-core-client/clowdr-core-client
//
// Copyright: 2023, The Clowdr Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use serde::Serialize;

use crate::domain::shared::models::{ConferenceId, ProfileId};

/// The parameters of the `textChat-create` backend function.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTextChatRequest {
    pub name: String,
    pub conference: ConferenceId,
    pub is_private: bool,
    #[serde(rename = "isDM")]
    pub is_dm: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_moderation: Option<bool>,
    pub auto_watch: bool,
    pub members: Vec<ProfileId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_moderation_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_message: Option<String>,
}
