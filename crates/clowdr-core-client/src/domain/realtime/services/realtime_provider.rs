// clowdr-core-client/clowdr-core-client
//
// Copyright: 2023, The Clowdr Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::realtime::models::{
    ProviderError, RawEventKind, RawRealtimeEvent, RealtimeUser, UserDescriptor,
};
use crate::domain::shared::models::{ChannelSid, ProfileId};

pub type DynRealtimeConnection = Arc<dyn RealtimeConnection>;
pub type RawEventHandler = Arc<dyn Fn(RawRealtimeEvent) + Send + Sync>;

/// The entry point into the realtime provider's SDK.
#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait RealtimeProvider: Send + Sync {
    /// Creates a connected client handle. Fails with `ProviderError::TokenExpired` if the
    /// provider rejected `token` because it expired.
    async fn create(&self, token: &str) -> Result<DynRealtimeConnection, ProviderError>;
}

/// A live client handle of the realtime provider.
#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait RealtimeConnection: Send + Sync {
    /// Places a subscription for events of `kind`. Handlers are invoked in the order the
    /// provider delivers events.
    fn on(&self, kind: RawEventKind, handler: RawEventHandler);

    /// Returns the user with the given identity and subscribes to their updates.
    async fn get_user(&self, profile_id: &ProfileId) -> Result<RealtimeUser, ProviderError>;
    async fn get_user_descriptor(
        &self,
        profile_id: &ProfileId,
    ) -> Result<UserDescriptor, ProviderError>;
    async fn get_subscribed_users(&self) -> Result<Vec<RealtimeUser>, ProviderError>;
    async fn unsubscribe_user(&self, profile_id: &ProfileId) -> Result<(), ProviderError>;

    async fn join_channel(&self, channel: &ChannelSid) -> Result<(), ProviderError>;
    async fn add_member(
        &self,
        channel: &ChannelSid,
        profile_id: &ProfileId,
    ) -> Result<(), ProviderError>;
    async fn get_unread_count(&self, channel: &ChannelSid) -> Result<Option<u32>, ProviderError>;

    async fn update_token(&self, token: &str) -> Result<(), ProviderError>;
    async fn shutdown(&self);
}
