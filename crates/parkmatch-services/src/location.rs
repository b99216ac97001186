//! Device position for nearby-park queries.
//!
//! Platform location APIs report through callbacks. [`LocationBridge`]
//! turns those callbacks into an awaitable value: each request parks a
//! oneshot sender, the next callback resolves every pending sender exactly
//! once, and a request that hears nothing gives up after a fixed timeout.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use async_trait::async_trait;
use parkmatch_core::Coordinate;
use tokio::sync::oneshot;

use crate::error::LocationError;

/// Supplies the current device position.
#[async_trait]
pub trait LocationProvider: Send + Sync {
    /// # Errors
    ///
    /// Returns a [`LocationError`] when no position can be obtained.
    async fn current_location(&self) -> Result<Coordinate, LocationError>;
}

/// The platform side of the bridge: asks the device for one fix. The answer
/// arrives later through [`LocationBridge::did_update_locations`] or
/// [`LocationBridge::did_fail`].
pub trait LocationDevice: Send + Sync {
    fn request_location(&self);
}

type Waiter = oneshot::Sender<Result<Coordinate, LocationError>>;

#[derive(Default)]
struct BridgeState {
    last_fix: Option<Coordinate>,
    waiters: Vec<Waiter>,
}

/// Callback-to-future adapter over a [`LocationDevice`].
pub struct LocationBridge {
    device: Arc<dyn LocationDevice>,
    timeout: Duration,
    state: Mutex<BridgeState>,
}

impl LocationBridge {
    #[must_use]
    pub fn new(device: Arc<dyn LocationDevice>, timeout: Duration) -> Self {
        Self {
            device,
            timeout,
            state: Mutex::new(BridgeState::default()),
        }
    }

    /// Delegate callback: new fixes, oldest first. The newest one resolves
    /// every pending request and becomes the last known fix.
    pub fn did_update_locations(&self, locations: &[Coordinate]) {
        let Some(&fix) = locations.last() else {
            return;
        };
        let waiters = {
            let mut state = self.lock_state();
            state.last_fix = Some(fix);
            std::mem::take(&mut state.waiters)
        };
        tracing::debug!(pending = waiters.len(), "location fix received");
        for waiter in waiters {
            // The requester may already have timed out.
            let _ = waiter.send(Ok(fix));
        }
    }

    /// Delegate callback: the platform could not produce a fix.
    pub fn did_fail(&self, reason: &str) {
        let waiters = std::mem::take(&mut self.lock_state().waiters);
        tracing::warn!(pending = waiters.len(), reason, "location request failed");
        for waiter in waiters {
            let _ = waiter.send(Err(LocationError::Failed(reason.to_owned())));
        }
    }

    /// Drops every pending request; their callers get
    /// [`LocationError::Cancelled`]. Used when the host stops location
    /// updates, e.g. after permission is revoked.
    pub fn cancel_pending(&self) {
        let dropped = std::mem::take(&mut self.lock_state().waiters);
        tracing::debug!(pending = dropped.len(), "location requests cancelled");
    }

    #[must_use]
    pub fn last_known_location(&self) -> Option<Coordinate> {
        self.lock_state().last_fix
    }

    fn lock_state(&self) -> MutexGuard<'_, BridgeState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl LocationProvider for LocationBridge {
    async fn current_location(&self) -> Result<Coordinate, LocationError> {
        let receiver = {
            let mut state = self.lock_state();
            if let Some(fix) = state.last_fix {
                return Ok(fix);
            }
            state.waiters.retain(|w| !w.is_closed());
            let (sender, receiver) = oneshot::channel();
            state.waiters.push(sender);
            receiver
        };

        self.device.request_location();
        match tokio::time::timeout(self.timeout, receiver).await {
            Ok(Ok(result)) => result,
            Ok(Err(_)) => Err(LocationError::Cancelled),
            Err(_) => {
                tracing::warn!(timeout = ?self.timeout, "no location callback arrived");
                Err(LocationError::Timeout(self.timeout))
            }
        }
    }
}

/// Deterministic [`LocationProvider`] answering with a fixed outcome.
#[derive(Debug, Clone)]
pub struct FixedLocation {
    outcome: Result<Coordinate, LocationError>,
}

impl FixedLocation {
    #[must_use]
    pub fn at(location: Coordinate) -> Self {
        Self {
            outcome: Ok(location),
        }
    }

    #[must_use]
    pub fn failing(error: LocationError) -> Self {
        Self {
            outcome: Err(error),
        }
    }
}

#[async_trait]
impl LocationProvider for FixedLocation {
    async fn current_location(&self) -> Result<Coordinate, LocationError> {
        self.outcome.clone()
    }
}

#[cfg(test)]
#[path = "location_test.rs"]
mod tests;
