// clowdr-core-client/clowdr-core-client
//
// Copyright: 2023, The Clowdr Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::credentials::models::ConfigurationValue;
use crate::domain::shared::models::ConferenceId;

#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait ConfigurationService: Send + Sync {
    /// Returns all configuration records stored under `key` for the conference.
    async fn get_by_key(
        &self,
        key: &str,
        conference_id: &ConferenceId,
    ) -> Result<Vec<ConfigurationValue>>;
}
