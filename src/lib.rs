//! # vetty - decode validation for config file trees
//!
//! vetty walks a directory tree with bounded concurrency, discovers files
//! matching configurable glob patterns, runs a format-appropriate decoder
//! over each one, and reports aggregate counts: files and decode failures
//! per extension plus total byte volume. Its intended use is pre-validating
//! infrastructure config trees (terragrunt/terraform variable files and the
//! like) before a slower tool trips over a typo three modules deep.
//!
//! ## Quick Start
//!
//! ```bash
//! # Validate the current directory
//! vetty scan
//!
//! # Validate a specific tree with custom patterns
//! vetty scan infra/ --match-patterns '*.json,*.yaml,*.toml'
//! ```
//!
//! The library surface is usable without the CLI: build a [`MatchCriteria`],
//! pick a [`DecoderRegistry`], and call [`run_scan`].

pub mod cli;
pub mod config;
pub mod decode;
pub mod walker;

pub use cli::{Cli, Output};
pub use config::VettyConfig;
pub use decode::{DecodeFailure, DecoderRegistry};
pub use walker::{MatchCriteria, ScanOptions, ScanReport, run_scan};

/// Result type alias for vetty operations
pub type Result<T> = anyhow::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
pub const PKG_DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Initialize the tracing pipeline. Diagnostics go to stderr; the filter
/// comes from `VETTY_LOG` and defaults to warnings only.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_env("VETTY_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
