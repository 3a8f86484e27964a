// clowdr-core-client/clowdr-core-client
//
// Copyright: 2023, The Clowdr Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use chat_search::{filter_chats, ChatSearchResult};
pub use chats_state::{next_state as next_chats_state, ChatsState, ChatsTask, ChatsUpdate};
pub use full_room_info::FullRoomInfo;
pub use notification::{Notification, NotificationAction};
pub use room_search::filter_rooms;
pub use rooms_state::{
    next_state as next_rooms_state, RoomTransition, RoomsState, RoomsTask, RoomsUpdate,
};
pub use sidebar_chat::{FilteredChat, SidebarChat, SidebarChatKind, SidebarMember, SidebarUser};
pub use sidebar_items::{SidebarChatItem, SidebarRoomItem, SidebarRooms};

mod chat_search;
mod chats_state;
mod full_room_info;
mod merge;
mod notification;
mod room_search;
mod rooms_state;
mod sidebar_chat;
mod sidebar_items;
