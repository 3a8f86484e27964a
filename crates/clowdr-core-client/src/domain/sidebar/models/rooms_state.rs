// clowdr-core-client/clowdr-core-client
//
// Copyright: 2023, The Clowdr Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use crate::domain::conference::models::{RoomMode, Sponsor};
use crate::domain::shared::models::{ProfileId, RoomId, SponsorId};
use crate::domain::sidebar::models::merge::{dedup_by_key, merge_by_key};
use crate::domain::sidebar::models::{
    FullRoomInfo, Notification, NotificationAction, SidebarRoomItem, SidebarRooms,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoomsTask {
    LoadingAllRooms,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RoomsState {
    pub tasks: HashSet<RoomsTask>,
    pub current_user_id: Option<ProfileId>,
    pub is_open: bool,
    pub room_search: Option<String>,
    pub all_rooms: Option<Vec<Arc<FullRoomInfo>>>,
    pub filtered_rooms: Vec<Arc<FullRoomInfo>>,
    pub watched_room_ids: Option<Vec<RoomId>>,
    pub current_location: String,
    pub all_sponsors: Option<Vec<Sponsor>>,
}

impl Default for RoomsState {
    fn default() -> Self {
        Self {
            tasks: HashSet::from([RoomsTask::LoadingAllRooms]),
            current_user_id: None,
            is_open: true,
            room_search: None,
            all_rooms: None,
            filtered_rooms: vec![],
            watched_room_ids: None,
            current_location: String::new(),
            all_sponsors: None,
        }
    }
}

/// The result of applying updates to `RoomsState`.
#[derive(Debug, Clone, PartialEq)]
pub struct RoomTransition {
    pub state: RoomsState,
    /// Notifications about people who joined a watched room.
    pub notifications: Vec<Notification>,
}

/// An update of `RoomsState`. Use the constructors to build one.
#[derive(Debug, Clone, PartialEq)]
pub struct RoomsUpdate(Action);

#[derive(Debug, Clone, PartialEq)]
enum Action {
    UpdateAllRooms(Vec<Arc<FullRoomInfo>>),
    SetFilteredRooms(Vec<Arc<FullRoomInfo>>),
    DeleteRooms(Vec<RoomId>),
    Search(Option<String>),
    SetIsOpen(bool),
    SetWatchedRoomIds(Vec<RoomId>),
    SetCurrentUserId(Option<ProfileId>),
    SetCurrentLocation(String),
    SetAllSponsors(Vec<Sponsor>),
    UpsertSponsors(Vec<Sponsor>),
    DeleteSponsors(Vec<SponsorId>),
}

impl RoomsUpdate {
    /// Merges `rooms` into the list of all rooms.
    pub fn update_all_rooms(rooms: impl IntoIterator<Item = FullRoomInfo>) -> Self {
        Self(Action::UpdateAllRooms(
            dedup_by_key(rooms, |info| info.room.id.clone())
                .into_iter()
                .map(Arc::new)
                .collect(),
        ))
    }

    pub fn set_filtered_rooms(rooms: Vec<Arc<FullRoomInfo>>) -> Self {
        Self(Action::SetFilteredRooms(dedup_by_key(rooms, |info| {
            info.room.id.clone()
        })))
    }

    pub fn delete_rooms(room_ids: impl IntoIterator<Item = RoomId>) -> Self {
        Self(Action::DeleteRooms(dedup_by_key(room_ids, |id| id.clone())))
    }

    /// An empty search clears the search.
    pub fn search(search: Option<String>) -> Self {
        Self(Action::Search(search.filter(|search| !search.is_empty())))
    }

    pub fn set_is_open(is_open: bool) -> Self {
        Self(Action::SetIsOpen(is_open))
    }

    pub fn set_watched_room_ids(room_ids: impl IntoIterator<Item = RoomId>) -> Self {
        Self(Action::SetWatchedRoomIds(dedup_by_key(room_ids, |id| {
            id.clone()
        })))
    }

    pub fn set_current_user_id(profile_id: Option<ProfileId>) -> Self {
        Self(Action::SetCurrentUserId(profile_id))
    }

    pub fn set_current_location(location: impl Into<String>) -> Self {
        Self(Action::SetCurrentLocation(location.into()))
    }

    pub fn set_all_sponsors(sponsors: impl IntoIterator<Item = Sponsor>) -> Self {
        Self(Action::SetAllSponsors(dedup_by_key(sponsors, |sponsor| {
            sponsor.id.clone()
        })))
    }

    /// Replaces or appends sponsors. Ignored until all sponsors were loaded.
    pub fn upsert_sponsors(sponsors: impl IntoIterator<Item = Sponsor>) -> Self {
        Self(Action::UpsertSponsors(dedup_by_key(sponsors, |sponsor| {
            sponsor.id.clone()
        })))
    }

    /// Ignored until all sponsors were loaded.
    pub fn delete_sponsors(sponsor_ids: impl IntoIterator<Item = SponsorId>) -> Self {
        Self(Action::DeleteSponsors(dedup_by_key(sponsor_ids, |id| {
            id.clone()
        })))
    }
}

/// Applies `updates` to `current`.
///
/// Whenever rooms or sponsors change, sponsor rooms and roulette rooms are removed from all and
/// filtered rooms again and the participants of watched rooms are compared against `current`
/// to announce people who joined.
pub fn next_state(
    current: &RoomsState,
    updates: impl IntoIterator<Item = RoomsUpdate>,
    notification_duration: Duration,
) -> RoomTransition {
    let mut next = current.clone();
    let mut all_rooms_updated = false;
    let mut notifications = vec![];

    for RoomsUpdate(action) in updates {
        match action {
            Action::Search(search) => next.room_search = search,
            Action::SetIsOpen(is_open) => next.is_open = is_open,
            Action::UpdateAllRooms(rooms) => {
                next.all_rooms = Some(merge_by_key(next.all_rooms.as_ref(), &rooms, |r| &r.room.id));
                all_rooms_updated = true;
            }
            Action::SetFilteredRooms(rooms) => next.filtered_rooms = rooms,
            Action::DeleteRooms(room_ids) => {
                if let Some(all_rooms) = next.all_rooms.as_mut() {
                    all_rooms.retain(|info| !room_ids.contains(&info.room.id));
                }
                next.filtered_rooms
                    .retain(|info| !room_ids.contains(&info.room.id));
            }
            Action::SetWatchedRoomIds(room_ids) => next.watched_room_ids = Some(room_ids),
            Action::SetCurrentUserId(profile_id) => next.current_user_id = profile_id,
            Action::SetCurrentLocation(location) => next.current_location = location,
            Action::SetAllSponsors(sponsors) => {
                next.all_sponsors = Some(sponsors);
                all_rooms_updated = true;
            }
            Action::UpsertSponsors(sponsors) => {
                let Some(all_sponsors) = next.all_sponsors.as_mut() else {
                    continue;
                };
                for sponsor in sponsors {
                    match all_sponsors.iter_mut().find(|s| s.id == sponsor.id) {
                        Some(existing) => *existing = sponsor,
                        None => all_sponsors.push(sponsor),
                    }
                }
                all_rooms_updated = true;
            }
            Action::DeleteSponsors(sponsor_ids) => {
                let Some(all_sponsors) = next.all_sponsors.as_mut() else {
                    continue;
                };
                all_sponsors.retain(|sponsor| !sponsor_ids.contains(&sponsor.id));
                all_rooms_updated = true;
            }
        }
    }

    if all_rooms_updated {
        if next.all_rooms.is_some() {
            next.tasks.remove(&RoomsTask::LoadingAllRooms);
            next.remove_excluded_rooms();
            notifications = next.join_notifications(current, notification_duration);
        } else {
            next.filtered_rooms.clear();
        }
    }

    RoomTransition {
        state: next,
        notifications,
    }
}

impl RoomsState {
    pub fn is_search_valid(&self, min_search_length: usize) -> bool {
        self.room_search
            .as_ref()
            .map(|search| search.chars().count() >= min_search_length)
            .unwrap_or(false)
    }

    pub fn is_watched(&self, room_id: &RoomId) -> bool {
        self.watched_room_ids
            .as_ref()
            .map(|ids| ids.contains(room_id))
            .unwrap_or(false)
    }

    /// Returns true if the current location is the room's page or one of its subpages.
    pub fn is_viewing_room(&self, room_id: &RoomId) -> bool {
        let room_path = format!("/room/{}", room_id);
        self.current_location == room_path
            || self
                .current_location
                .strip_prefix(&room_path)
                .map(|rest| rest.starts_with('/'))
                .unwrap_or(false)
    }

    /// Splits the filtered rooms into rooms with participants and rooms without. Empty feed
    /// rooms are only listed while searching or if they're watched.
    pub fn sidebar_rooms(
        &self,
        min_search_length: usize,
        max_participants_to_list: usize,
    ) -> SidebarRooms {
        let is_search_valid = self.is_search_valid(min_search_length);

        let mut active = self
            .filtered_rooms
            .iter()
            .filter(|info| !info.participants.is_empty())
            .collect::<Vec<_>>();
        let mut inactive = self
            .filtered_rooms
            .iter()
            .filter(|info| {
                info.participants.is_empty()
                    && (is_search_valid || !info.is_feed_room || self.is_watched(&info.room.id))
            })
            .collect::<Vec<_>>();

        active.sort_by(|lhs, rhs| lhs.room.name.cmp(&rhs.room.name));
        inactive.sort_by(|lhs, rhs| lhs.room.name.cmp(&rhs.room.name));

        let item = |info: &Arc<FullRoomInfo>| SidebarRoomItem {
            id: info.room.id.clone(),
            name: info.room.name.clone(),
            path: info.path(),
            participants: info
                .participants
                .iter()
                .take(max_participants_to_list)
                .map(|p| p.display_name.clone())
                .collect(),
            more_participants: info
                .participants
                .len()
                .saturating_sub(max_participants_to_list),
        };

        SidebarRooms {
            active: active.into_iter().map(item).collect(),
            inactive: inactive.into_iter().map(item).collect(),
        }
    }

    fn remove_excluded_rooms(&mut self) {
        let sponsor_room_ids = self
            .all_sponsors
            .iter()
            .flatten()
            .filter_map(|sponsor| sponsor.video_room_id.clone())
            .collect::<HashSet<_>>();

        let is_listed = |info: &Arc<FullRoomInfo>| {
            !sponsor_room_ids.contains(&info.room.id) && info.room.mode != RoomMode::Roulette
        };

        if let Some(all_rooms) = self.all_rooms.as_mut() {
            all_rooms.retain(is_listed);
        }
        self.filtered_rooms.retain(is_listed);
    }

    fn join_notifications(&self, previous: &RoomsState, duration: Duration) -> Vec<Notification> {
        let mut notifications = vec![];

        for info in self.all_rooms.iter().flatten() {
            if self.is_viewing_room(&info.room.id) || !self.is_watched(&info.room.id) {
                continue;
            }

            let Some(previous_info) = previous
                .all_rooms
                .iter()
                .flatten()
                .find(|p| p.room.id == info.room.id)
            else {
                continue;
            };

            for participant in &info.participants {
                if Some(&participant.id) == self.current_user_id.as_ref() {
                    continue;
                }
                if previous_info
                    .participants
                    .iter()
                    .any(|p| p.id == participant.id)
                {
                    continue;
                }

                notifications.push(Notification {
                    message: format!("{} joined {}", participant.display_name, info.room.name),
                    action: Some(NotificationAction {
                        text: "Go to room".to_string(),
                        url: info.path(),
                    }),
                    duration,
                });
            }
        }

        notifications
    }
}
