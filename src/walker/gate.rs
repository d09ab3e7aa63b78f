//! Global admission gate for file-handle-opening operations
//!
//! Every operation that opens a file descriptor — listing a directory or
//! reading a file for decoding — holds one token from this gate for its
//! duration. One pool is shared across both uses; with an unbounded number
//! of walker tasks in flight, this is what keeps the process inside the OS
//! descriptor limit on wide or deep trees.

use std::sync::Arc;
use tokio::sync::{OwnedSemaphorePermit, Semaphore};

/// Default number of simultaneously open file handles.
pub const DEFAULT_MAX_OPEN_FILES: usize = 20;

/// Fixed-capacity gate over scarce file descriptors.
#[derive(Clone)]
pub struct FdGate {
    permits: Arc<Semaphore>,
}

impl FdGate {
    pub fn new(capacity: usize) -> Self {
        Self {
            permits: Arc::new(Semaphore::new(capacity)),
        }
    }

    /// Wait for a token. The returned permit releases the token when
    /// dropped, so release happens on every exit path of the guarded
    /// operation, error paths included.
    pub async fn acquire(&self) -> OwnedSemaphorePermit {
        // The gate is never closed, so acquisition cannot fail.
        Arc::clone(&self.permits)
            .acquire_owned()
            .await
            .expect("gate semaphore closed")
    }
}

impl Default for FdGate {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_OPEN_FILES)
    }
}
