// clowdr-core-client/clowdr-core-client
//
// Copyright: 2023, The Clowdr Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

pub(crate) enum ListenerKey {
    Named { component: String, caller: String },
    Anonymous,
}

/// A callback for session events with payload `P`.
///
/// Named listeners identify the component and the purpose they were registered for. Registering
/// a named listener replaces any earlier listener with the same component, caller and event.
/// Anonymous listeners never replace each other.
pub struct Listener<P> {
    pub(crate) key: ListenerKey,
    pub(crate) callback: Arc<dyn Fn(&P) + Send + Sync>,
}

impl<P> Listener<P> {
    pub fn named(
        component: impl Into<String>,
        caller: impl Into<String>,
        callback: impl Fn(&P) + Send + Sync + 'static,
    ) -> Self {
        Self {
            key: ListenerKey::Named {
                component: component.into(),
                caller: caller.into(),
            },
            callback: Arc::new(callback),
        }
    }

    pub fn anonymous(callback: impl Fn(&P) + Send + Sync + 'static) -> Self {
        Self {
            key: ListenerKey::Anonymous,
            callback: Arc::new(callback),
        }
    }
}
