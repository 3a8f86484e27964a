// clowdr-core-client/clowdr-core-client
//
// Copyright: 2023, The Clowdr Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use app::dtos;
pub use app::services;
pub use client::{Client, ClientDelegate};
pub use client_builder::{BackendServices, ClientBuilder};
pub use client_event::ClientEvent;


pub mod app;
mod client;
mod client_builder;
mod client_event;

#[cfg(feature = "test")]
pub mod domain;
#[cfg(not(feature = "test"))]
pub(crate) mod domain;

#[cfg(feature = "test")]
pub mod infra;
#[cfg(not(feature = "test"))]
pub(crate) mod infra;

/// The interfaces to the conference backend and the realtime provider's SDK which the host
/// application implements.
pub mod backend {
    pub use crate::domain::conference::repos::{
        TextChatRepository, UserProfileRepository, VideoRoomRepository,
    };
    pub use crate::domain::credentials::services::{ConfigurationService, TokenService};
    pub use crate::domain::general::services::{BackendFunctionsService, IDProvider, TimeProvider};
    pub use crate::domain::realtime::services::{
        DynRealtimeConnection, RawEventHandler, RealtimeConnection, RealtimeProvider,
    };
    pub use crate::infra::credentials::HttpTokenService;
}
