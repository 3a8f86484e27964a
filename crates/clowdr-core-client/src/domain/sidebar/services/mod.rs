// clowdr-core-client/clowdr-core-client
//
// Copyright: 2023, The Clowdr Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use chats_sidebar_domain_service::ChatsSidebarDomainService;
pub use rooms_sidebar_domain_service::RoomsSidebarDomainService;

mod chats_sidebar_domain_service;
pub mod impls;
mod rooms_sidebar_domain_service;

#[cfg(feature = "test")]
pub mod mocks {
    pub use super::chats_sidebar_domain_service::MockChatsSidebarDomainService;
    pub use super::rooms_sidebar_domain_service::MockRoomsSidebarDomainService;
}
