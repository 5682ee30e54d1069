//! Pacer — cancellable fixed delays that simulate authentication latency.
//!
//! DESIGN
//! ======
//! Each flow awaits its delays one after another on the request task.
//! The pacer carries a `CancellationToken` shared with the server's
//! shutdown path, so a pending wait ends early instead of holding the
//! connection open. Tests build a pacer from `Pacing::instant()`.

use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::config::Pacing;

/// A wait was cut short by shutdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("simulated delay cancelled")]
pub struct Cancelled;

#[derive(Debug, Clone)]
pub struct Pacer {
    pacing: Pacing,
    cancel: CancellationToken,
}

impl Pacer {
    #[must_use]
    pub fn new(pacing: Pacing, cancel: CancellationToken) -> Self {
        Self { pacing, cancel }
    }

    /// Pacer with zero delays and a token nobody else holds.
    #[cfg(test)]
    #[must_use]
    pub fn instant() -> Self {
        Self::new(Pacing::instant(), CancellationToken::new())
    }

    #[must_use]
    pub fn pacing(&self) -> Pacing {
        self.pacing
    }

    /// Sleep for `delay` unless cancelled first.
    pub async fn wait(&self, delay: Duration) -> Result<(), Cancelled> {
        if self.cancel.is_cancelled() {
            return Err(Cancelled);
        }
        if delay.is_zero() {
            return Ok(());
        }

        tokio::select! {
            () = self.cancel.cancelled() => Err(Cancelled),
            () = tokio::time::sleep(delay) => Ok(()),
        }
    }
}

#[cfg(test)]
#[path = "pacer_test.rs"]
mod tests;
