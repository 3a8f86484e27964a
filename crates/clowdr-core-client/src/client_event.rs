// clowdr-core-client/clowdr-core-client
//
// Copyright: 2023, The Clowdr Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::realtime::models::ConnectionState;
use crate::domain::sidebar::models::Notification;

#[derive(Debug, Clone, PartialEq)]
pub enum ClientEvent {
    /// The state of the realtime connection has changed.
    ConnectionStatusChanged { state: ConnectionState },

    /// The contents of the chats section of the sidebar have changed.
    ChatsChanged,

    /// The contents of the rooms section of the sidebar have changed.
    RoomsChanged,

    /// Something happened the user should be told about, like a person joining a watched room.
    Notification(Notification),
}
