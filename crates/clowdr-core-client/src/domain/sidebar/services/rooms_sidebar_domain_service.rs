// clowdr-core-client/clowdr-core-client
//
// Copyright: 2023, The Clowdr Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::conference::models::{Sponsor, VideoRoom, WatchedItems};
use crate::domain::shared::models::{RoomId, SponsorId};
use crate::domain::sidebar::models::{RoomsState, SidebarRooms};

#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait RoomsSidebarDomainService: Send + Sync {
    /// Loads all rooms with their participants, the sponsors and the watched rooms of the
    /// conference.
    ///
    /// Dispatches `ClientEvent::RoomsChanged` whenever the state changed and a
    /// `ClientEvent::Notification` for every person joining a watched room.
    async fn load(&self) -> Result<()>;

    async fn set_search(&self, search: Option<String>) -> Result<()>;
    fn set_is_open(&self, is_open: bool);

    /// Tells the sidebar which page is displayed. Rooms being viewed don't announce joins.
    fn set_current_location(&self, location: String);

    async fn handle_updated_rooms(&self, rooms: Vec<VideoRoom>) -> Result<()>;
    async fn handle_deleted_rooms(&self, room_ids: Vec<RoomId>) -> Result<()>;

    async fn handle_updated_sponsors(&self, sponsors: Vec<Sponsor>) -> Result<()>;
    async fn handle_deleted_sponsors(&self, sponsor_ids: Vec<SponsorId>) -> Result<()>;

    async fn handle_updated_watched_items(&self, items: Vec<WatchedItems>) -> Result<()>;

    fn state(&self) -> RoomsState;
    fn sidebar_rooms(&self) -> SidebarRooms;

    fn reset(&self);
}
