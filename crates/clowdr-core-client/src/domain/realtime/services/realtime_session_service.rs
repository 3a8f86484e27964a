// clowdr-core-client/clowdr-core-client
//
// Copyright: 2023, The Clowdr Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::realtime::models::{ConnectionState, SessionError};
use crate::domain::realtime::services::{DynRealtimeConnection, ListenerRegistry};
use crate::domain::shared::models::SessionContext;

#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait RealtimeSessionService: Send + Sync {
    /// Connects to the realtime provider. Concurrent callers for the same conference and
    /// profile share a single connection attempt. A different conference or profile tears
    /// down the previous connection first.
    async fn setup(&self, ctx: &SessionContext) -> Result<(), SessionError>;

    /// Shuts the connection down and removes all listeners.
    async fn teardown(&self);

    /// Waits for the connection attempt in flight and returns the live connection.
    async fn connection(&self) -> Result<DynRealtimeConnection, SessionError>;

    fn state(&self) -> ConnectionState;

    fn listeners(&self) -> Arc<ListenerRegistry>;
}
