//! Thread-safe handle for drivers that mutate valves from several threads.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::error::FlowResult;
use crate::network::Network;
use crate::snapshot::FlowSnapshot;

/// One mutex over the whole network. Valve changes and the recompute that
/// follows them run under the same lock, so a reader never observes a
/// highlight set computed from half-applied valve changes.
#[derive(Debug, Clone)]
pub struct SharedNetwork {
    inner: Arc<Mutex<Network>>,
}

impl SharedNetwork {
    pub fn new(network: Network) -> Self {
        Self {
            inner: Arc::new(Mutex::new(network)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Network> {
        // Batches run on a copy that is swapped in whole, so a guard poisoned
        // by a panicking batch still holds the last committed network.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Apply a batch of valve changes and recompute, atomically.
    ///
    /// The batch runs against a copy of the network. Only when `change`
    /// returns `Ok` is the copy recomputed and committed; an error or a panic
    /// inside `change` leaves the shared network exactly as it was.
    pub fn apply<F>(&self, change: F) -> FlowResult<FlowSnapshot>
    where
        F: FnOnce(&mut Network) -> FlowResult<()>,
    {
        let mut net = self.lock();
        let mut next = net.clone();
        change(&mut next)?;
        next.recompute_flow();
        let snapshot = next.snapshot();
        *net = next;
        Ok(snapshot)
    }

    /// Run a read-only query under the lock.
    pub fn read<R>(&self, query: impl FnOnce(&Network) -> R) -> R {
        query(&*self.lock())
    }
}
