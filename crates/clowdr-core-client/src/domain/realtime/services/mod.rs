// clowdr-core-client/clowdr-core-client
//
// Copyright: 2023, The Clowdr Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use listener_registry::ListenerRegistry;
pub use realtime_provider::{
    DynRealtimeConnection, RawEventHandler, RealtimeConnection, RealtimeProvider,
};
pub use realtime_session_service::RealtimeSessionService;

pub mod impls;
mod listener_registry;
mod realtime_provider;
mod realtime_session_service;

#[cfg(feature = "test")]
pub mod mocks {
    pub use super::realtime_provider::{MockRealtimeConnection, MockRealtimeProvider};
    pub use super::realtime_session_service::MockRealtimeSessionService;
}
