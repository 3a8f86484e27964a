// clowdr-core-client/clowdr-core-client
//
// Copyright: 2023, The Clowdr Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::{OnceLock, Weak};

use tracing::error;

use crate::app::event_handlers::ClientEventDispatcherTrait;
use crate::client::ClientInner;
use crate::{ClientDelegate, ClientEvent};

pub struct ClientEventDispatcher {
    client: OnceLock<Weak<ClientInner>>,
    delegate: Option<Box<dyn ClientDelegate>>,
}

impl ClientEventDispatcher {
    pub fn new(delegate: Option<Box<dyn ClientDelegate>>) -> Self {
        Self {
            client: Default::default(),
            delegate,
        }
    }

    pub(crate) fn set_client_inner(&self, client_inner: Weak<ClientInner>) {
        if self.client.set(client_inner).is_err() {
            error!("ClientInner was already set on ClientEventDispatcher.");
        }
    }
}

impl ClientEventDispatcherTrait for ClientEventDispatcher {
    fn dispatch_event(&self, event: ClientEvent) {
        let Some(ref delegate) = self.delegate else {
            return;
        };

        let Some(client) = self.client.get() else {
            error!("ClientInner was not set on ClientEventDispatcher.");
            return;
        };

        let Some(client_inner) = client.upgrade() else {
            return;
        };

        delegate.handle_event(client_inner.into(), event)
    }
}
