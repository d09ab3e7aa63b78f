//! Configuration management for vetty
//!
//! Layered loading in priority order: embedded defaults, then a repository
//! config file (or an explicit `--config` file), then `VETTY_`-prefixed
//! environment variables, then command-line overrides. The merged result is
//! extracted into a typed struct and validated once at startup.

use anyhow::{Context, Result};
use figment::{
    Figment,
    providers::{Env, Format, Json, Serialized, Toml, Yaml},
};
use globset::Glob;
use serde::{Deserialize, Serialize};

// Embed the default config at compile time
const DEFAULT_CONFIG: &str = include_str!("../../default-config.toml");

/// Main configuration structure for vetty
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VettyConfig {
    /// Scan configuration
    pub scan: ScanSection,
}

/// Scan-related configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanSection {
    /// Glob patterns selecting files to decode (matched against base names)
    pub match_patterns: Vec<String>,

    /// Directory names skipped entirely (exact name match)
    pub exclude_dirs: Vec<String>,

    /// Ceiling on simultaneously open file handles for the whole run
    pub max_open_files: usize,

    /// Print a timing summary after the scan
    #[serde(default)]
    pub stats: bool,
}

impl VettyConfig {
    /// Load and validate the effective configuration.
    ///
    /// `overrides` carries command-line values; it wins over every other
    /// source and should contain only the keys the user actually passed.
    pub fn load(custom_config: Option<&str>, overrides: Option<serde_json::Value>) -> Result<Self> {
        let mut figment = Figment::new().merge(Toml::string(DEFAULT_CONFIG)); // Embedded defaults

        // If a custom config is specified, use only that + defaults + env vars.
        // The parser is picked by extension; TOML is the fallback.
        if let Some(custom_path) = custom_config {
            let path = std::path::Path::new(custom_path);
            figment = match path.extension().and_then(|ext| ext.to_str()) {
                Some("json") => figment.merge(Json::file(path)),
                Some("yaml") | Some("yml") => figment.merge(Yaml::file(path)),
                _ => figment.merge(Toml::file(path)),
            };
        } else {
            // Repository config - support multiple formats
            figment = figment
                .merge(Toml::file("vetty.toml"))
                .merge(Json::file("vetty.json"))
                .merge(Yaml::file("vetty.yaml"))
                .merge(Yaml::file("vetty.yml"));
        }

        // Environment variables beat files; VETTY_SCAN__MAX_OPEN_FILES=40
        figment = figment.merge(Env::prefixed("VETTY_").split("__"));

        // Command-line flags always have highest priority
        if let Some(overrides) = overrides {
            figment = figment.merge(Serialized::defaults(overrides));
        }

        let config: VettyConfig = figment
            .extract()
            .context("Failed to assemble configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.scan.max_open_files == 0 {
            anyhow::bail!("scan.max_open_files must be at least 1");
        }

        if self.scan.match_patterns.is_empty() {
            anyhow::bail!("scan.match_patterns cannot be empty");
        }

        for pattern in &self.scan.match_patterns {
            Glob::new(pattern)
                .with_context(|| format!("Invalid glob pattern in scan.match_patterns: {}", pattern))?;
        }

        Ok(())
    }
}
