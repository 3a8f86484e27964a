// clowdr-core-client/clowdr-core-client
//
// Copyright: 2023, The Clowdr Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::future::Future;

use anyhow::Result;
use parking_lot::Mutex;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Ties computations to the state they were started for. `reset` discards the results of all
/// computations started before it. Unlike `DerivedTask`, computations within the same scope
/// don't cancel each other.
#[derive(Default)]
pub struct SessionScope {
    token: Mutex<CancellationToken>,
}

impl SessionScope {
    pub fn reset(&self) {
        let previous = std::mem::take(&mut *self.token.lock());
        previous.cancel();
    }

    /// Runs `future` and passes its value to `apply` unless `reset` was called in the meantime.
    pub async fn run<T, F>(&self, future: F, apply: impl FnOnce(T)) -> Result<()>
    where
        F: Future<Output = Result<T>>,
    {
        let token = self.token.lock().clone();

        let result = tokio::select! {
            biased;
            _ = token.cancelled() => None,
            result = future => Some(result),
        };

        // Holding the lock while applying serializes us with `reset`.
        let _current = self.token.lock();
        let Some(result) = result.filter(|_| !token.is_cancelled()) else {
            debug!("Discarding the result of a computation started before the last reset.");
            return Ok(());
        };

        apply(result?);
        Ok(())
    }
}
