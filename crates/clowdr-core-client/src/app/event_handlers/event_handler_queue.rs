// clowdr-core-client/clowdr-core-client
//
// Copyright: 2023, The Clowdr Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::OnceLock;

use tracing::{debug, error};

use crate::app::event_handlers::{DataEvent, DataEventHandler};

pub struct DataEventHandlerQueue {
    handlers: OnceLock<Vec<Box<dyn DataEventHandler>>>,
}

impl DataEventHandlerQueue {
    pub fn new() -> Self {
        Self {
            handlers: Default::default(),
        }
    }

    pub fn set_handlers(&self, handlers: Vec<Box<dyn DataEventHandler>>) {
        if self.handlers.set(handlers).is_err() {
            error!("Handlers were already set in DataEventHandlerQueue.");
        }
    }

    pub async fn handle_event(&self, event: DataEvent) {
        let Some(handlers) = self.handlers.get() else {
            error!("Handlers were not set in DataEventHandlerQueue.");
            return;
        };

        let mut event = event;

        for handler in handlers.iter() {
            match handler.handle_event(event).await {
                Ok(None) => return,
                Ok(Some(e)) => event = e,
                Err(err) => {
                    error!(
                        "Event handler '{}' aborted with error: {}",
                        handler.name(),
                        err.to_string()
                    );
                    return;
                }
            }
        }

        debug!("Unhandled data event {:?}", event);
    }
}

impl Default for DataEventHandlerQueue {
    fn default() -> Self {
        Self::new()
    }
}
