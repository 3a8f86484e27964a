// clowdr-core-client/clowdr-core-client
//
// Copyright: 2023, The Clowdr Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::shared::models::RoomId;

/// A row of the chats section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarChatItem {
    pub key: String,
    pub friendly_name: String,
    pub is_dm: bool,
    pub is_new: bool,
    pub is_online: Option<bool>,
    pub unread_count: Option<u32>,
    pub path: String,
}

/// A row of the rooms section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarRoomItem {
    pub id: RoomId,
    pub name: String,
    pub path: String,
    /// The display names of the first participants.
    pub participants: Vec<String>,
    /// The number of participants not listed in `participants`.
    pub more_participants: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SidebarRooms {
    pub active: Vec<SidebarRoomItem>,
    pub inactive: Vec<SidebarRoomItem>,
}

impl SidebarRooms {
    pub fn is_empty(&self) -> bool {
        self.active.is_empty() && self.inactive.is_empty()
    }
}
