// clowdr-core-client/clowdr-core-client
//
// Copyright: 2023, The Clowdr Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use crate::domain::sidebar::models::FullRoomInfo;

/// Matches rooms by name or by the display names of their participants. Unlike chats, a search
/// shorter than `min_search_length` matches all rooms.
pub fn filter_rooms(
    all_rooms: &[Arc<FullRoomInfo>],
    search: Option<&str>,
    min_search_length: usize,
) -> Vec<Arc<FullRoomInfo>> {
    let Some(search) = search.filter(|search| search.chars().count() >= min_search_length) else {
        return all_rooms.to_vec();
    };
    let search = search.to_lowercase();

    all_rooms
        .iter()
        .filter(|info| {
            info.room.name.to_lowercase().contains(&search)
                || info
                    .participants
                    .iter()
                    .any(|p| p.display_name.to_lowercase().contains(&search))
        })
        .cloned()
        .collect()
}
