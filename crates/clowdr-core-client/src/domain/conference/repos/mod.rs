// clowdr-core-client/clowdr-core-client
//
// Copyright: 2023, The Clowdr Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use text_chat_repository::TextChatRepository;
pub use user_profile_repository::UserProfileRepository;
pub use video_room_repository::VideoRoomRepository;

mod text_chat_repository;
mod user_profile_repository;
mod video_room_repository;

#[cfg(feature = "test")]
pub mod mocks {
    pub use super::text_chat_repository::MockTextChatRepository;
    pub use super::user_profile_repository::MockUserProfileRepository;
    pub use super::video_room_repository::MockVideoRoomRepository;
}
