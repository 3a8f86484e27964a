// clowdr-core-client/clowdr-core-client
//
// Copyright: 2023, The Clowdr Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::future::Future;

use anyhow::Result;
use parking_lot::Mutex;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Returned when a derived computation was superseded before it could complete.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("The computation was canceled.")]
pub struct Canceled;

/// Runs computations whose results are derived from some state, e.g. a filtered list. Starting a
/// new computation cancels the one in flight, so that only the result of the latest computation
/// is ever applied.
#[derive(Default)]
pub struct DerivedTask {
    current: Mutex<Option<CancellationToken>>,
}

impl DerivedTask {
    /// Cancels the computation in flight (if any) and hands out the token for the next one.
    pub fn begin(&self) -> CancellationToken {
        let token = CancellationToken::new();
        if let Some(previous) = self.current.lock().replace(token.clone()) {
            previous.cancel();
        }
        token
    }

    pub fn cancel(&self) {
        if let Some(token) = self.current.lock().take() {
            token.cancel();
        }
    }

    /// Runs `future` and passes its value to `apply` unless a newer computation was started in
    /// the meantime. Cancellation is not an error and is swallowed here, errors of `future`
    /// are returned to the caller.
    pub async fn run<T, F>(&self, future: F, apply: impl FnOnce(T)) -> Result<()>
    where
        F: Future<Output = Result<T>>,
    {
        match self.run_cancelable(future, apply).await {
            Ok(result) => result,
            Err(Canceled) => {
                debug!("Discarding the result of a superseded computation.");
                Ok(())
            }
        }
    }

    pub async fn run_cancelable<T, F>(
        &self,
        future: F,
        apply: impl FnOnce(T),
    ) -> Result<Result<()>, Canceled>
    where
        F: Future<Output = Result<T>>,
    {
        let token = self.begin();

        let result = tokio::select! {
            biased;
            _ = token.cancelled() => return Err(Canceled),
            result = future => result,
        };

        // Holding the lock while applying serializes us with `begin`.
        let current = self.current.lock();
        if token.is_cancelled() {
            return Err(Canceled);
        }

        let value = match result {
            Ok(value) => value,
            Err(err) => return Ok(Err(err)),
        };

        apply(value);
        drop(current);

        Ok(Ok(()))
    }
}
