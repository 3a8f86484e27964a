// clowdr-core-client/clowdr-core-client
//
// Copyright: 2023, The Clowdr Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use serde::{Deserialize, Serialize};

use crate::domain::shared::models::{ChannelSid, ChatId, ConferenceId, ProfileId};

/// The backend record of a text chat. `remote_sid` links it to the provider's channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextChat {
    pub id: ChatId,
    pub conference_id: ConferenceId,
    pub remote_sid: ChannelSid,
    pub name: String,
    #[serde(rename = "isDM")]
    pub is_dm: bool,
    pub is_moderation: bool,
    pub is_moderation_hub: bool,
    pub is_private: bool,
    pub members: Vec<ProfileId>,
}
