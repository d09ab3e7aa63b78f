//! Recursive tree walker
//!
//! Each directory gets its own spawned task. A task lists its directory,
//! spawns a child task for every non-excluded subdirectory, and emits one
//! discovery (size first, then path) for every matching non-empty file.
//! Every task owns clones of both senders, so the channels stay open until
//! the last task in the dynamically growing tree has finished — that is the
//! completion signal the consumer waits on.

use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::mpsc::Sender;
use tracing::debug;

use super::criteria::MatchCriteria;
use super::gate::FdGate;
use super::list::list_dir;

/// State shared read-only by every walker task of one run.
pub(crate) struct WalkShared {
    pub(crate) criteria: MatchCriteria,
    pub(crate) gate: FdGate,
}

/// Spawn the walker task for one directory. Recursion is unbounded in depth
/// and breadth; the gate, not the task count, is what bounds resource use.
pub(crate) fn spawn_walker(
    dir: PathBuf,
    shared: Arc<WalkShared>,
    sizes: Sender<u64>,
    names: Sender<PathBuf>,
) {
    tokio::spawn(async move {
        debug!(dir = %dir.display(), "walking");
        for entry in list_dir(&dir, &shared.gate).await {
            if entry.is_dir {
                if shared.criteria.is_excluded_dir(&entry.name) {
                    debug!(
                        dir = %dir.display(),
                        name = %entry.name.to_string_lossy(),
                        "skipping excluded directory"
                    );
                    continue;
                }
                spawn_walker(
                    dir.join(&entry.name),
                    Arc::clone(&shared),
                    sizes.clone(),
                    names.clone(),
                );
            } else if entry.size > 0 && shared.criteria.matches_file(&entry.name) {
                // An empty file has nothing to decode, so size 0 never counts
                // even when the name matches.
                if sizes.send(entry.size).await.is_err() {
                    return;
                }
                if names.send(dir.join(&entry.name)).await.is_err() {
                    return;
                }
            }
        }
    });
}
