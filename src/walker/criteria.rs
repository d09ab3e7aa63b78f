//! File selection rules shared by every walker task
//!
//! A `MatchCriteria` is built once at startup and handed out read-only.
//! Patterns apply to file base names; the exclude set applies to directory
//! names (exact match, never a path or a glob).

use anyhow::{Context, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::collections::HashSet;
use std::ffi::{OsStr, OsString};
use std::path::Path;

/// Which files to decode and which directories to skip.
#[derive(Debug)]
pub struct MatchCriteria {
    patterns: GlobSet,
    exclude_dirs: HashSet<OsString>,
}

impl MatchCriteria {
    /// Compile glob patterns and collect the excluded directory names.
    pub fn new(patterns: &[String], exclude_dirs: &[String]) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            let glob = Glob::new(pattern)
                .with_context(|| format!("Invalid glob pattern: {}", pattern))?;
            builder.add(glob);
        }
        let patterns = builder
            .build()
            .context("Failed to build match pattern globset")?;

        Ok(Self {
            patterns,
            exclude_dirs: exclude_dirs.iter().map(OsString::from).collect(),
        })
    }

    /// Test a file's base name against the match patterns.
    pub fn matches_file(&self, name: &OsStr) -> bool {
        self.patterns.is_match(Path::new(name))
    }

    /// Test a directory's name against the exclude set.
    pub fn is_excluded_dir(&self, name: &OsStr) -> bool {
        self.exclude_dirs.contains(name)
    }
}
