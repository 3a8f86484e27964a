// clowdr-core-client/clowdr-core-client
//
// Copyright: 2023, The Clowdr Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use sponsor::Sponsor;
pub use text_chat::TextChat;
pub use user_profile::UserProfile;
pub use video_room::{RoomMode, VideoRoom};
pub use watched_items::WatchedItems;

mod sponsor;
mod text_chat;
mod user_profile;
mod video_room;
mod watched_items;
