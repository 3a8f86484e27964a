// clowdr-core-client/clowdr-core-client
//
// Copyright: 2023, The Clowdr Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::shared::models::{ConferenceId, ProfileId};

/// An access token for the realtime provider together with the identity it was issued for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    pub token: String,
    pub expires_at: DateTime<Utc>,
    pub conference_id: ConferenceId,
    pub profile_id: ProfileId,
}

impl Credential {
    /// A credential may only be reused for the conference and profile it was issued for and
    /// only before it expires.
    pub fn is_valid_for(
        &self,
        conference_id: &ConferenceId,
        profile_id: &ProfileId,
        now: DateTime<Utc>,
    ) -> bool {
        !self.token.is_empty()
            && &self.conference_id == conference_id
            && &self.profile_id == profile_id
            && now < self.expires_at
    }
}
