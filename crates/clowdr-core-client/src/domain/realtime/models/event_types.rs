// clowdr-core-client/clowdr-core-client
//
// Copyright: 2023, The Clowdr Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::realtime::models::{
    ConnectionErrorInfo, ProviderConnectionState, SessionEvent, SessionEventKind, UserUpdate,
};
use crate::domain::shared::models::ChannelSid;

/// Ties an observable session event to the type of its payload so that listeners are checked
/// at compile time.
pub trait RealtimeEventType: 'static {
    type Payload: 'static;

    const KIND: SessionEventKind;

    fn payload(event: &SessionEvent) -> Option<&Self::Payload>;
}

macro_rules! realtime_event_type {
    ($name:ident, $variant:ident, $payload:ty) => {
        pub struct $name;

        impl RealtimeEventType for $name {
            type Payload = $payload;

            const KIND: SessionEventKind = SessionEventKind::$variant;

            fn payload(event: &SessionEvent) -> Option<&Self::Payload> {
                match event {
                    SessionEvent::$variant(payload) => Some(payload),
                    _ => None,
                }
            }
        }
    };
}

realtime_event_type!(ConnectionErrorEvent, ConnectionError, ConnectionErrorInfo);
realtime_event_type!(
    ConnectionStateChangedEvent,
    ConnectionStateChanged,
    ProviderConnectionState
);
realtime_event_type!(ChannelJoinedEvent, ChannelJoined, ChannelSid);
realtime_event_type!(ChannelLeftEvent, ChannelLeft, ChannelSid);
realtime_event_type!(UserUpdatedEvent, UserUpdated, UserUpdate);
