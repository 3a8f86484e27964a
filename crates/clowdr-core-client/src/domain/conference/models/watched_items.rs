// clowdr-core-client/clowdr-core-client
//
// Copyright: 2023, The Clowdr Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use serde::{Deserialize, Serialize};

use crate::domain::shared::models::{ChatId, RoomId, WatchedItemsId};

/// The chats and rooms a profile has opted to track.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WatchedItems {
    pub id: WatchedItemsId,
    pub watched_chats: Vec<ChatId>,
    pub watched_rooms: Vec<RoomId>,
}
