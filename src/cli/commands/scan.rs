//! Scan command implementation
//!
//! Thin glue around the scan core: merge configuration, run the walk, print
//! the per-extension report, and map the outcome to the process exit code.

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use std::time::Instant;

use crate::cli::Output;
use crate::config::VettyConfig;
use crate::decode::DecoderRegistry;
use crate::walker::{MatchCriteria, ScanOptions, ScanReport, run_scan};

#[derive(Args)]
pub struct ScanArgs {
    /// Directory to scan
    #[arg(value_name = "PATH", default_value = ".")]
    pub path: PathBuf,

    /// Glob patterns selecting files to decode (matched against base names)
    #[arg(long, value_delimiter = ',')]
    pub match_patterns: Vec<String>,

    /// Directory names to skip entirely (exact name match)
    #[arg(long, value_delimiter = ',')]
    pub exclude_dirs: Vec<String>,

    /// Maximum simultaneously open file handles
    #[arg(long)]
    pub max_open_files: Option<usize>,

    /// Show timing statistics after the scan
    #[arg(long)]
    pub stats: bool,
}

pub async fn execute(args: ScanArgs, config_path: Option<&str>, output: &Output) -> Result<()> {
    // Only flags the user actually passed become config overrides
    let mut scan_overrides = serde_json::Map::new();
    if !args.match_patterns.is_empty() {
        scan_overrides.insert(
            "match_patterns".to_string(),
            serde_json::json!(args.match_patterns),
        );
    }
    if !args.exclude_dirs.is_empty() {
        scan_overrides.insert(
            "exclude_dirs".to_string(),
            serde_json::json!(args.exclude_dirs),
        );
    }
    if let Some(max_open_files) = args.max_open_files {
        scan_overrides.insert("max_open_files".to_string(), serde_json::json!(max_open_files));
    }
    if args.stats {
        scan_overrides.insert("stats".to_string(), serde_json::json!(true));
    }
    let overrides = if scan_overrides.is_empty() {
        None
    } else {
        Some(serde_json::json!({ "scan": scan_overrides }))
    };

    let config = VettyConfig::load(config_path, overrides)?;

    if !args.path.is_dir() {
        anyhow::bail!("Not a directory: {}", args.path.display());
    }

    let criteria = MatchCriteria::new(&config.scan.match_patterns, &config.scan.exclude_dirs)?;

    output.info(&format!("Scanning {}", args.path.display()));
    output.verbose(&format!(
        "patterns: {}; excluded dirs: {}; max open files: {}",
        config.scan.match_patterns.join(", "),
        config.scan.exclude_dirs.join(", "),
        config.scan.max_open_files
    ));

    let start = Instant::now();
    let registry = DecoderRegistry::default();
    let report = run_scan(
        ScanOptions {
            roots: vec![args.path],
            criteria,
            max_open_files: config.scan.max_open_files,
        },
        &registry,
    )
    .await;
    let elapsed = start.elapsed();

    print_report(&report, output);

    if config.scan.stats {
        output.category("Scan Statistics");
        output.key_value("Scan time:", &format!("{}ms", elapsed.as_millis()), false);
        output.key_value(
            "Gate capacity:",
            &config.scan.max_open_files.to_string(),
            false,
        );
    }

    output.blank_line();
    if report.succeeded() {
        output.success("All files decoded successfully");
        Ok(())
    } else {
        output.error(&format!(
            "Decode errors found in {} file(s)",
            report.total_errors()
        ));
        output.flush();
        std::process::exit(1);
    }
}

fn print_report(report: &ScanReport, output: &Output) {
    output.blank_line();
    output.list_item(&format!(
        "{} total files  {:.1} MB",
        report.total_files(),
        report.total_bytes as f64 / 1e6
    ));
    for (extension, count) in report.extensions() {
        let label = if extension.is_empty() {
            "(no extension)"
        } else {
            extension
        };
        output.list_item(&format!(
            "{} {} files, {} decode errors",
            count,
            label,
            report.errors_for(extension)
        ));
    }
}
