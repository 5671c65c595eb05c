//! In-process registry of target paths with a download in flight.
//!
//! Guarantees at most one writer per target path at a time within this
//! process: a second claim for the same path blocks until the first claim is
//! dropped. Cross-process races are out of scope.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::{Condvar, Mutex, PoisonError};

#[derive(Default)]
pub(super) struct InflightPaths {
    paths: Mutex<HashSet<PathBuf>>,
    released: Condvar,
}

impl InflightPaths {
    /// Claims `path`, blocking while another claim for the same path is held.
    pub(super) fn claim(&self, path: &Path) -> PathClaim<'_> {
        let mut held = self
            .paths
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        while held.contains(path) {
            held = self
                .released
                .wait(held)
                .unwrap_or_else(PoisonError::into_inner);
        }
        held.insert(path.to_path_buf());
        PathClaim {
            registry: self,
            path: path.to_path_buf(),
        }
    }
}

/// Releases the claimed path when dropped.
pub(super) struct PathClaim<'a> {
    registry: &'a InflightPaths,
    path: PathBuf,
}

impl Drop for PathClaim<'_> {
    fn drop(&mut self) {
        let mut held = self
            .registry
            .paths
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        held.remove(&self.path);
        self.registry.released.notify_all();
    }
}
