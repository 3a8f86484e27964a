// clowdr-core-client/clowdr-core-client
//
// Copyright: 2023, The Clowdr Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::HashMap;
use std::sync::Arc;

use indexmap::IndexMap;
use parking_lot::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::domain::realtime::models::{
    Listener, ListenerKey, RealtimeEventType, SessionEvent, SessionEventKind,
};
use crate::domain::shared::models::ListenerId;

type ErasedListener = Arc<dyn Fn(&SessionEvent) + Send + Sync>;

/// Fans session events out to locally registered listeners.
///
/// Listeners of the same event are invoked in registration order. A named listener replaces
/// all earlier listeners registered with the same component, caller and event.
#[derive(Default)]
pub struct ListenerRegistry {
    listeners: RwLock<HashMap<SessionEventKind, IndexMap<ListenerId, ErasedListener>>>,
}

impl ListenerRegistry {
    pub fn on<E: RealtimeEventType>(&self, listener: Listener<E::Payload>) -> ListenerId {
        let kind = E::KIND;

        let (id, replaced_prefix) = match listener.key {
            ListenerKey::Named { component, caller } => {
                let prefix = format!("{}|{}|{}|", component, caller, kind);
                (ListenerId::from(format!("{}{}", prefix, Uuid::new_v4())), Some(prefix))
            }
            ListenerKey::Anonymous => (ListenerId::from(Uuid::new_v4().to_string()), None),
        };

        let callback = listener.callback;
        let erased: ErasedListener = Arc::new(move |event: &SessionEvent| {
            if let Some(payload) = E::payload(event) {
                callback(payload)
            }
        });

        let mut guard = self.listeners.write();
        let listeners = guard.entry(kind).or_default();

        if let Some(prefix) = replaced_prefix {
            listeners.retain(|id, _| {
                let is_replaced = id.as_str().starts_with(&prefix);
                if is_replaced {
                    debug!("Replacing listener {}", id);
                }
                !is_replaced
            });
        }

        listeners.insert(id.clone(), erased);
        id
    }

    /// Returns true if a listener with `id` was registered for `kind`.
    pub fn off(&self, kind: SessionEventKind, id: &ListenerId) -> bool {
        self.listeners
            .write()
            .get_mut(&kind)
            .and_then(|listeners| listeners.shift_remove(id))
            .is_some()
    }

    pub fn dispatch(&self, event: &SessionEvent) {
        // Listeners may register or remove listeners, so don't hold the lock while calling them.
        let listeners = self
            .listeners
            .read()
            .get(&event.kind())
            .map(|listeners| listeners.values().cloned().collect::<Vec<_>>())
            .unwrap_or_default();

        for listener in listeners {
            listener(event)
        }
    }

    pub fn listener_count(&self, kind: SessionEventKind) -> usize {
        self.listeners
            .read()
            .get(&kind)
            .map(|listeners| listeners.len())
            .unwrap_or(0)
    }

    pub fn clear(&self) {
        self.listeners.write().clear()
    }
}
