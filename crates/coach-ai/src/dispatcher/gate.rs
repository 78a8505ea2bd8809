//! The Idle/Busy gate.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use super::types::DispatchError;

/// Guard that clears the `busy` flag on drop, so the gate reopens even if
/// the worker panics or its task is dropped.
pub(crate) struct BusyGuard {
    flag: Arc<AtomicBool>,
}

impl BusyGuard {
    /// Attempt to close the gate. Returns `Err` if already busy.
    pub(crate) fn acquire(flag: &Arc<AtomicBool>) -> Result<Self, DispatchError> {
        if flag
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .is_err()
        {
            return Err(DispatchError::Busy);
        }
        Ok(Self {
            flag: Arc::clone(flag),
        })
    }
}

impl Drop for BusyGuard {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}
