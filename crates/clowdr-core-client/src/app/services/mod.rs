// clowdr-core-client/clowdr-core-client
//
// Copyright: 2023, The Clowdr Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use channels_service::ChannelsService;
pub use chats_sidebar_service::ChatsSidebarService;
pub use rooms_sidebar_service::RoomsSidebarService;
pub use session_service::SessionService;

mod channels_service;
mod chats_sidebar_service;
mod rooms_sidebar_service;
mod session_service;
