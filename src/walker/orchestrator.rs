//! Scan orchestration
//!
//! Wires the walker, gate, decoder registry and counters together: spawns
//! one walker per root, then drains the two discovery streams with a
//! selective receive until both close. Sizes and names arrive on independent
//! streams with no pairing guarantee; both fold into accumulators keyed only
//! by extension, so interleaving is harmless. Decoding happens inline, one
//! file at a time, as names arrive.

use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::warn;

use crate::decode::{DecoderRegistry, extension_key};

use super::criteria::MatchCriteria;
use super::gate::FdGate;
use super::stats::{ScanCounters, ScanReport};
use super::walk::{WalkShared, spawn_walker};

/// Buffer of each discovery stream. Small on purpose: walkers block once the
/// consumer falls behind, and the select loop below drains both streams
/// concurrently so a blocked sender can always make progress.
const STREAM_CAPACITY: usize = 64;

/// Inputs for one scan run.
pub struct ScanOptions {
    /// Directories to walk. Normally one.
    pub roots: Vec<PathBuf>,
    pub criteria: MatchCriteria,
    /// Capacity of the shared file-handle gate.
    pub max_open_files: usize,
}

/// Walk every root to completion and return the final tallies.
///
/// No error aborts the run: unreadable directories and undecodable files are
/// absorbed where they occur and surface only as log lines and counter
/// increments. The caller decides what the aggregate error count means.
pub async fn run_scan(options: ScanOptions, registry: &DecoderRegistry) -> ScanReport {
    let gate = FdGate::new(options.max_open_files);
    let shared = Arc::new(WalkShared {
        criteria: options.criteria,
        gate: gate.clone(),
    });

    let (size_tx, mut size_rx) = mpsc::channel::<u64>(STREAM_CAPACITY);
    let (name_tx, mut name_rx) = mpsc::channel::<PathBuf>(STREAM_CAPACITY);

    for root in options.roots {
        spawn_walker(root, Arc::clone(&shared), size_tx.clone(), name_tx.clone());
    }
    // Walker tasks hold the only remaining sender clones now. Each channel
    // closes when the last task of the recursive tree finishes, which is
    // exactly the all-walkers-done signal the loop below terminates on.
    drop(size_tx);
    drop(name_tx);

    let counters = ScanCounters::new();
    let mut sizes_open = true;
    let mut names_open = true;
    while sizes_open || names_open {
        tokio::select! {
            size = size_rx.recv(), if sizes_open => match size {
                Some(size) => counters.add_bytes(size),
                None => sizes_open = false,
            },
            name = name_rx.recv(), if names_open => match name {
                Some(path) => {
                    let extension = extension_key(&path);
                    counters.add_file(&extension);
                    if let Err(failure) = registry.decode_file(&path, &gate).await {
                        warn!(path = %path.display(), %failure, "decode failed");
                        counters.add_error(&extension);
                    }
                }
                None => names_open = false,
            },
        }
    }

    counters.report()
}
