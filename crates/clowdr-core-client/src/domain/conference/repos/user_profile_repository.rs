// clowdr-core-client/clowdr-core-client
//
// Copyright: 2023, The Clowdr Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::conference::models::{UserProfile, WatchedItems};
use crate::domain::shared::models::{ConferenceId, ProfileId};

#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait UserProfileRepository: Send + Sync {
    async fn get(
        &self,
        conference_id: &ConferenceId,
        id: &ProfileId,
    ) -> Result<Option<UserProfile>>;
    async fn get_all(&self, conference_id: &ConferenceId) -> Result<Vec<UserProfile>>;

    /// Returns the watched items linked to the profile, if any.
    async fn get_watched_items(
        &self,
        conference_id: &ConferenceId,
        profile_id: &ProfileId,
    ) -> Result<Option<WatchedItems>>;
}
