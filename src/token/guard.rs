use std::future::Future;

use tokio::sync::Mutex;
use tracing::debug;

use crate::errors::Error;
use crate::telemetry::refresh::{RefreshOutcome, RefreshTelemetry};

use super::RefreshMode;

/// Convenience result alias for guard operations.
pub type RefreshResult<T> = Result<T, Error>;

/// Runs token refreshes according to the configured [`RefreshMode`].
pub struct RefreshGuard {
    mode: RefreshMode,
    refresh_lock: Mutex<()>,
}

impl RefreshGuard {
    pub fn new(mode: RefreshMode) -> Self {
        Self {
            mode,
            refresh_lock: Mutex::new(()),
        }
    }

    pub fn mode(&self) -> RefreshMode {
        self.mode
    }

    /// Produces a fresh access token for a request that was rejected with 401.
    ///
    /// `sent_with` is the token the rejected request carried and `current` reads
    /// the token currently in storage. `refresh_cb` performs the refresh and is
    /// responsible for persisting its result.
    pub async fn refresh<C, F, Fut>(
        &self,
        sent_with: Option<&str>,
        current: C,
        refresh_cb: F,
        telemetry: &RefreshTelemetry,
    ) -> RefreshResult<String>
    where
        C: Fn() -> Option<String>,
        F: FnOnce() -> Fut,
        Fut: Future<Output = RefreshResult<String>>,
    {
        match self.mode {
            RefreshMode::Independent => Self::run(refresh_cb, telemetry).await,
            RefreshMode::Coalesced => {
                // Only one refresh attempt should run at a time.
                let _lock = self.refresh_lock.lock().await;
                match current() {
                    Some(token) if Some(token.as_str()) != sent_with => {
                        debug!("access token replaced while waiting; skipping refresh");
                        telemetry.emit_success(RefreshOutcome::Reused);
                        return Ok(token);
                    }
                    // Storage was cleared by a refresh that failed ahead of us.
                    None if sent_with.is_some() => {
                        telemetry.emit_skipped("session ended while waiting");
                        return Err(Error::SessionEnded);
                    }
                    _ => {}
                }
                Self::run(refresh_cb, telemetry).await
            }
        }
    }

    async fn run<F, Fut>(refresh_cb: F, telemetry: &RefreshTelemetry) -> RefreshResult<String>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = RefreshResult<String>>,
    {
        telemetry.emit_start();
        match refresh_cb().await {
            Ok(token) => {
                telemetry.emit_success(RefreshOutcome::Refreshed);
                Ok(token)
            }
            Err(err) => {
                telemetry.emit_failure(&err);
                Err(err)
            }
        }
    }
}
