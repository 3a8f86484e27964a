// clowdr-core-client/clowdr-core-client
//
// Copyright: 2023, The Clowdr Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::conference::models::{
    Sponsor, TextChat, UserProfile, VideoRoom, WatchedItems,
};
use crate::domain::shared::models::{ChatId, ProfileId, RoomId, SponsorId, WatchedItemsId};

/// A change of backend records delivered by the conference's data subscriptions.
#[derive(Debug, Clone, PartialEq)]
pub enum DataEvent {
    Updated(UpdatedObjects),
    Deleted(DeletedObject),
}

#[derive(Debug, Clone, PartialEq)]
pub enum UpdatedObjects {
    TextChats(Vec<TextChat>),
    VideoRooms(Vec<VideoRoom>),
    UserProfiles(Vec<UserProfile>),
    WatchedItems(Vec<WatchedItems>),
    Sponsors(Vec<Sponsor>),
}

#[derive(Debug, Clone, PartialEq)]
pub enum DeletedObject {
    TextChat(ChatId),
    VideoRoom(RoomId),
    UserProfile(ProfileId),
    WatchedItems(WatchedItemsId),
    Sponsor(SponsorId),
}
