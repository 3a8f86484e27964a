// clowdr-core-client/clowdr-core-client
//
// Copyright: 2023, The Clowdr Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use connection_state::{ConnectionState, ProviderConnectionState};
pub use errors::{ProviderError, SessionError};
pub use event_types::*;
pub use listener::Listener;
pub(crate) use listener::ListenerKey;
pub use raw_event::{
    ConnectionErrorInfo, RawEventKind, RawRealtimeEvent, RealtimeUser, RemoteChannel,
    UserDescriptor, UserUpdateReason,
};
pub use session_event::{MemberDescriptor, SessionEvent, SessionEventKind, UserUpdate};

mod connection_state;
mod errors;
mod event_types;
mod listener;
mod raw_event;
mod session_event;
