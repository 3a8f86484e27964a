// clowdr-core-client/clowdr-core-client
//
// Copyright: 2023, The Clowdr Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::shared::models::{ConferenceId, ProfileId, SessionIdentity};

/// Identifies who is connected to which conference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionContext {
    pub conference_id: ConferenceId,
    pub profile_id: ProfileId,
    pub session_identity: SessionIdentity,
}

impl SessionContext {
    pub fn new(
        conference_id: impl Into<ConferenceId>,
        profile_id: impl Into<ProfileId>,
        session_identity: impl Into<SessionIdentity>,
    ) -> Self {
        Self {
            conference_id: conference_id.into(),
            profile_id: profile_id.into(),
            session_identity: session_identity.into(),
        }
    }

    /// Two contexts share a realtime connection if they refer to the same conference and profile.
    pub fn is_same_identity(&self, other: &SessionContext) -> bool {
        self.conference_id == other.conference_id && self.profile_id == other.profile_id
    }
}
