// clowdr-core-client/clowdr-core-client
//
// Copyright: 2023, The Clowdr Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::conference::models::{Sponsor, UserProfile, VideoRoom};
use crate::domain::shared::models::{ConferenceId, RoomId};

#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait VideoRoomRepository: Send + Sync {
    async fn get_all(&self, conference_id: &ConferenceId) -> Result<Vec<VideoRoom>>;

    /// Returns the profiles currently present in the room.
    async fn get_participants(
        &self,
        conference_id: &ConferenceId,
        room_id: &RoomId,
    ) -> Result<Vec<UserProfile>>;

    /// Returns the number of content feeds attached to the room.
    async fn count_feeds(&self, conference_id: &ConferenceId, room_id: &RoomId) -> Result<usize>;

    async fn get_sponsors(&self, conference_id: &ConferenceId) -> Result<Vec<Sponsor>>;
}
