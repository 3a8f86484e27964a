// clowdr-core-client/clowdr-core-integration-tests
//
// Copyright: 2023, The Clowdr Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::{anyhow, Result};
use mockall::predicate;

use clowdr_core_client::app::deps::AppDependencies;
use clowdr_core_client::app::event_handlers::{
    ChatsEventHandler, DataEvent, DataEventHandlerQueue, DeletedObject, RoomsEventHandler,
    UpdatedObjects,
};
use clowdr_core_client::domain::conference::models::{RoomMode, VideoRoom, WatchedItems};
use clowdr_core_client::domain::shared::models::ChatId;
use clowdr_core_client::test::{mock_data, MockAppDependencies};

fn queue(deps: AppDependencies) -> DataEventHandlerQueue {
    let queue = DataEventHandlerQueue::new();
    queue.set_handlers(vec![
        Box::new(ChatsEventHandler::from(&deps)),
        Box::new(RoomsEventHandler::from(&deps)),
    ]);
    queue
}

fn watched_items() -> Vec<WatchedItems> {
    vec![WatchedItems {
        id: "watched-1".into(),
        watched_chats: vec!["chat-1".into()],
        watched_rooms: vec!["r1".into()],
    }]
}

#[tokio::test]
async fn test_watched_items_reach_chats_and_rooms() -> Result<()> {
    let mut deps = MockAppDependencies::default();

    deps.chats_sidebar_domain_service
        .expect_handle_updated_watched_items()
        .once()
        .with(predicate::eq(watched_items()))
        .returning(|_| Box::pin(async { Ok(()) }));
    deps.rooms_sidebar_domain_service
        .expect_handle_updated_watched_items()
        .once()
        .with(predicate::eq(watched_items()))
        .returning(|_| Box::pin(async { Ok(()) }));

    queue(deps.into_deps())
        .handle_event(DataEvent::Updated(UpdatedObjects::WatchedItems(
            watched_items(),
        )))
        .await;

    Ok(())
}

#[tokio::test]
async fn test_rooms_receive_watched_items_if_chats_fail() -> Result<()> {
    let mut deps = MockAppDependencies::default();

    deps.chats_sidebar_domain_service
        .expect_handle_updated_watched_items()
        .once()
        .returning(|_| Box::pin(async { Err(anyhow!("Backend unavailable")) }));
    deps.rooms_sidebar_domain_service
        .expect_handle_updated_watched_items()
        .once()
        .returning(|_| Box::pin(async { Ok(()) }));

    queue(deps.into_deps())
        .handle_event(DataEvent::Updated(UpdatedObjects::WatchedItems(
            watched_items(),
        )))
        .await;

    Ok(())
}

#[tokio::test]
async fn test_room_updates_skip_chats() -> Result<()> {
    let mut deps = MockAppDependencies::default();

    let rooms = vec![VideoRoom {
        id: "r1".into(),
        conference_id: mock_data::conference_id(),
        name: "Lobby".to_string(),
        mode: RoomMode::Group,
    }];

    deps.rooms_sidebar_domain_service
        .expect_handle_updated_rooms()
        .once()
        .with(predicate::eq(rooms.clone()))
        .returning(|_| Box::pin(async { Ok(()) }));

    queue(deps.into_deps())
        .handle_event(DataEvent::Updated(UpdatedObjects::VideoRooms(rooms)))
        .await;

    Ok(())
}

#[tokio::test]
async fn test_deleted_chats_are_consumed_by_chats() -> Result<()> {
    let mut deps = MockAppDependencies::default();

    deps.chats_sidebar_domain_service
        .expect_handle_deleted_chats()
        .once()
        .with(predicate::eq(vec![ChatId::from("chat-1")]))
        .returning(|_| Box::pin(async { Ok(()) }));

    queue(deps.into_deps())
        .handle_event(DataEvent::Deleted(DeletedObject::TextChat("chat-1".into())))
        .await;

    Ok(())
}

#[tokio::test]
async fn test_ignores_unhandled_events() -> Result<()> {
    // Neither handler expects a call, so any would fail the test.
    queue(MockAppDependencies::default().into_deps())
        .handle_event(DataEvent::Deleted(DeletedObject::WatchedItems(
            "watched-1".into(),
        )))
        .await;

    Ok(())
}
