// clowdr-core-client/clowdr-core-client
//
// Copyright: 2023, The Clowdr Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;

pub use chats_event_handler::ChatsEventHandler;
pub use client_event_dispatcher::ClientEventDispatcher;
pub use data_event::{DataEvent, DeletedObject, UpdatedObjects};
pub use event_handler_queue::DataEventHandlerQueue;
pub use rooms_event_handler::RoomsEventHandler;

use crate::ClientEvent;

mod chats_event_handler;
mod client_event_dispatcher;
mod data_event;
mod event_handler_queue;
mod rooms_event_handler;

/// `DataEventHandler` is a trait representing a handler for changes of backend records.
///
/// If the handler returns `None`, the event has been consumed and is not passed to the remaining
/// handlers. If it returns `Some(event)`, the event is passed to the next handler.
#[async_trait]
pub trait DataEventHandler: Send + Sync {
    fn name(&self) -> &'static str;
    async fn handle_event(&self, event: DataEvent) -> Result<Option<DataEvent>>;
}

#[cfg_attr(feature = "test", mockall::automock)]
pub trait ClientEventDispatcherTrait: Send + Sync {
    fn dispatch_event(&self, event: ClientEvent);
}
