// clowdr-core-client/clowdr-core-client
//
// Copyright: 2023, The Clowdr Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::time::Duration;

use anyhow::Result;
use parking_lot::RwLock;

use crate::domain::shared::models::SessionContext;

pub struct AppConfig {
    /// Searches shorter than this are not applied to the sidebar lists.
    pub min_search_length: usize,
    /// How long a notification about someone joining a watched room is displayed.
    pub notification_duration: Duration,
    /// The number of participants listed by name for each active room.
    pub max_room_participants_to_list: usize,
    /// The configuration key under which a conference stores the URL of its chat backend.
    pub realtime_callback_url_key: String,
}

pub struct AppContext {
    pub session: RwLock<Option<SessionContext>>,
    pub config: AppConfig,
}

impl AppContext {
    pub fn new(config: AppConfig) -> Self {
        Self {
            session: Default::default(),
            config,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            min_search_length: 3,
            notification_duration: Duration::from_millis(3000),
            max_room_participants_to_list: 6,
            realtime_callback_url_key: "REACT_APP_TWILIO_CALLBACK_URL".to_string(),
        }
    }
}

impl AppContext {
    pub fn session_context(&self) -> Result<SessionContext> {
        self.session.read().clone().ok_or(anyhow::anyhow!(
            "Failed to read the session context since the client is not connected."
        ))
    }

    pub fn set_session_context(&self, ctx: SessionContext) {
        self.session.write().replace(ctx);
    }

    pub fn reset_session_context(&self) {
        self.session.write().take();
    }
}
