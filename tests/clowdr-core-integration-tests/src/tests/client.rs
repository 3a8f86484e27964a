// clowdr-core-client/clowdr-core-integration-tests
//
// Copyright: 2023, The Clowdr Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use anyhow::Result;
use chrono::Duration;
use parking_lot::Mutex;
use pretty_assertions::assert_eq;

use clowdr_core_client::app::event_handlers::{DataEvent, UpdatedObjects};
use clowdr_core_client::domain::conference::models::{RoomMode, VideoRoom};
use clowdr_core_client::domain::conference::repos::mocks::{
    MockTextChatRepository, MockUserProfileRepository, MockVideoRoomRepository,
};
use clowdr_core_client::domain::credentials::models::{ConfigurationValue, IssuedToken};
use clowdr_core_client::domain::credentials::services::mocks::{
    MockConfigurationService, MockTokenService,
};
use clowdr_core_client::domain::general::services::mocks::MockBackendFunctionsService;
use clowdr_core_client::domain::realtime::models::ConnectionState;
use clowdr_core_client::domain::realtime::services::mocks::{
    MockRealtimeConnection, MockRealtimeProvider,
};
use clowdr_core_client::domain::realtime::services::DynRealtimeConnection;
use clowdr_core_client::test::{mock_data, ConstantTimeProvider};
use clowdr_core_client::{BackendServices, Client, ClientDelegate, ClientEvent};
use clowdr_store::{InMemoryDriver, Store};

struct RecordingDelegate {
    events: Arc<Mutex<Vec<ClientEvent>>>,
}

impl ClientDelegate for RecordingDelegate {
    fn handle_event(&self, _client: Client, event: ClientEvent) {
        self.events.lock().push(event)
    }
}

struct Backend {
    configuration_service: MockConfigurationService,
    realtime_provider: MockRealtimeProvider,
    token_service: MockTokenService,
    video_room_repo: MockVideoRoomRepository,
}

impl Backend {
    /// A backend that accepts a single connection.
    fn new() -> Self {
        let mut configuration_service = MockConfigurationService::new();
        configuration_service
            .expect_get_by_key()
            .returning(|key, _| {
                let key = key.to_string();
                Box::pin(async move {
                    Ok(vec![ConfigurationValue {
                        key,
                        value: "https://chat.example.com".to_string(),
                    }])
                })
            });

        let mut token_service = MockTokenService::new();
        token_service.expect_request_token().once().returning(|_, _| {
            Box::pin(async {
                Ok(IssuedToken {
                    token: "token".to_string(),
                    expiry: mock_data::reference_date() + Duration::hours(1),
                })
            })
        });

        let mut connection = MockRealtimeConnection::new();
        connection.expect_on().returning(|_, _| ());
        connection
            .expect_shutdown()
            .returning(|| Box::pin(async {}));
        let connection: DynRealtimeConnection = Arc::new(connection);

        let mut realtime_provider = MockRealtimeProvider::new();
        realtime_provider
            .expect_create()
            .once()
            .return_once(move |_| Box::pin(async move { Ok(connection) }));

        Backend {
            configuration_service,
            realtime_provider,
            token_service,
            video_room_repo: MockVideoRoomRepository::new(),
        }
    }

    fn into_client(self, events: Arc<Mutex<Vec<ClientEvent>>>) -> Client {
        Client::builder()
            .set_backend(BackendServices {
                backend_functions_service: Arc::new(MockBackendFunctionsService::new()),
                configuration_service: Arc::new(self.configuration_service),
                realtime_provider: Arc::new(self.realtime_provider),
                text_chat_repo: Arc::new(MockTextChatRepository::new()),
                user_profile_repo: Arc::new(MockUserProfileRepository::new()),
                video_room_repo: Arc::new(self.video_room_repo),
            })
            .set_store(Store::new(InMemoryDriver::new()))
            .set_token_service(self.token_service)
            .set_time_provider(ConstantTimeProvider::new(mock_data::reference_date()))
            .set_delegate(Some(Box::new(RecordingDelegate { events })))
            .build()
    }
}

async fn connect(client: &Client) -> Result<()> {
    client
        .connect(
            &mock_data::conference_id(),
            &mock_data::profile_id(),
            &mock_data::session_identity(),
        )
        .await?;
    Ok(())
}

#[tokio::test]
async fn test_connects_and_disconnects() -> Result<()> {
    let events = Arc::new(Mutex::new(vec![]));
    let client = Backend::new().into_client(events.clone());

    assert_eq!(client.connection_state(), ConnectionState::Uninitialized);
    assert_eq!(client.session_context(), None);

    connect(&client).await?;

    assert_eq!(client.connection_state(), ConnectionState::Connected);
    assert_eq!(client.session_context(), Some(mock_data::session_context()));
    assert_eq!(
        *events.lock(),
        vec![
            ClientEvent::ConnectionStatusChanged {
                state: ConnectionState::Connecting
            },
            ClientEvent::ConnectionStatusChanged {
                state: ConnectionState::Connected
            },
        ]
    );

    // Connecting again reuses the connection.
    connect(&client).await?;

    client.disconnect().await;

    assert_eq!(client.connection_state(), ConnectionState::Uninitialized);
    assert_eq!(client.session_context(), None);

    Ok(())
}

#[tokio::test]
async fn test_forwards_data_events_to_sidebar() -> Result<()> {
    let mut backend = Backend::new();
    backend
        .video_room_repo
        .expect_get_participants()
        .returning(|_, _| Box::pin(async { Ok(vec![]) }));
    backend
        .video_room_repo
        .expect_count_feeds()
        .returning(|_, _| Box::pin(async { Ok(0) }));

    let events = Arc::new(Mutex::new(vec![]));
    let client = backend.into_client(events.clone());
    connect(&client).await?;
    events.lock().clear();

    client
        .handle_data_event(DataEvent::Updated(UpdatedObjects::VideoRooms(vec![
            VideoRoom {
                id: "r1".into(),
                conference_id: mock_data::conference_id(),
                name: "Lobby".to_string(),
                mode: RoomMode::Group,
            },
        ])))
        .await;

    assert_eq!(
        client
            .rooms
            .sidebar_rooms()
            .inactive
            .into_iter()
            .map(|item| item.name)
            .collect::<Vec<_>>(),
        vec!["Lobby".to_string()]
    );
    assert!(events.lock().contains(&ClientEvent::RoomsChanged));

    Ok(())
}
