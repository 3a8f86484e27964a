// clowdr-core-client/clowdr-core-integration-tests
//
// Copyright: 2023, The Clowdr Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use anyhow::Result;
use chrono::Duration;
use parking_lot::Mutex;
use tempfile::TempDir;

use clowdr_core_client::app::event_handlers::MockClientEventDispatcherTrait;
use clowdr_core_client::domain::conference::models::{TextChat, UserProfile};
use clowdr_core_client::domain::credentials::models::Credential;
use clowdr_core_client::test::mock_data;
use clowdr_core_client::ClientEvent;
use clowdr_store::{SqliteDriver, Store};

mod client;
mod credential_broker;
mod data_event_handlers;
mod realtime_session;
mod session_service;
mod store_token_cache_repository;

/// Collects every event dispatched through `dispatcher`.
pub fn record_events(
    dispatcher: &mut MockClientEventDispatcherTrait,
) -> Arc<Mutex<Vec<ClientEvent>>> {
    let events = Arc::new(Mutex::new(vec![]));
    let recorded = events.clone();
    dispatcher
        .expect_dispatch_event()
        .returning(move |event| recorded.lock().push(event));
    events
}

/// A credential for the mock session that expires an hour after the reference date.
pub fn credential(token: &str) -> Credential {
    Credential {
        token: token.to_string(),
        expires_at: mock_data::reference_date() + Duration::hours(1),
        conference_id: mock_data::conference_id(),
        profile_id: mock_data::profile_id(),
    }
}

pub fn text_chat(id: &str, name: &str, members: &[&str], is_dm: bool) -> TextChat {
    TextChat {
        id: id.into(),
        conference_id: mock_data::conference_id(),
        remote_sid: format!("CH-{}", id).into(),
        name: name.to_string(),
        is_dm,
        is_moderation: false,
        is_moderation_hub: false,
        is_private: is_dm,
        members: members.iter().map(|member| (*member).into()).collect(),
    }
}

pub fn profile(id: &str, display_name: &str) -> UserProfile {
    UserProfile {
        id: id.into(),
        display_name: display_name.to_string(),
        is_banned: false,
        watched_id: None,
    }
}

/// Opens a SQLite backed store in a temporary directory. The directory is removed once the
/// returned `TempDir` is dropped.
pub async fn store() -> Result<(Store, TempDir)> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("test.sqlite");
    println!("Opening DB at {:?}", path);
    let store = Store::new(SqliteDriver::open(path).await?);
    Ok((store, dir))
}
