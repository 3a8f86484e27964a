// clowdr-core-client/clowdr-core-client
//
// Copyright: 2023, The Clowdr Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::conference::models::{UserProfile, VideoRoom};
use crate::domain::shared::models::RoomId;

#[derive(Debug, Clone, PartialEq)]
pub struct FullRoomInfo {
    pub room: VideoRoom,
    pub participants: Vec<UserProfile>,
    /// Rooms with attached content feeds are only listed while they're in use.
    pub is_feed_room: bool,
}

impl FullRoomInfo {
    pub fn new(room: VideoRoom, participants: Vec<UserProfile>, feed_count: usize) -> Self {
        Self {
            room,
            participants,
            is_feed_room: feed_count > 0,
        }
    }

    pub fn id(&self) -> &RoomId {
        &self.room.id
    }

    pub fn path(&self) -> String {
        format!("/room/{}", self.room.id)
    }
}
