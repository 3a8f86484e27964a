// clowdr-core-client/clowdr-core-client
//
// Copyright: 2023, The Clowdr Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use crate::domain::shared::models::{ConferenceId, RoomId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum RoomMode {
    Group,
    PeerToPeer,
    GroupSmall,
    Roulette,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoRoom {
    pub id: RoomId,
    pub conference_id: ConferenceId,
    pub name: String,
    pub mode: RoomMode,
}
