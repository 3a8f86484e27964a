// clowdr-core-client/clowdr-core-client
//
// Copyright: 2023, The Clowdr Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::shared::models::SessionIdentity;

/// Runs cloud functions of the conference backend on behalf of the logged-in user.
#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait BackendFunctionsService: Send + Sync {
    async fn run(
        &self,
        function: &str,
        params: serde_json::Value,
        session_identity: &SessionIdentity,
    ) -> Result<serde_json::Value>;
}
