//! Decode dispatch
//!
//! Maps file extensions to decode capabilities and classifies the outcome of
//! running one. The registry never inspects decoded values — a capability
//! only reports success or a human-readable failure, and that text is
//! preserved verbatim (serde's line/column annotations included) so the
//! operator can find the offending spot.

use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;
use tokio::fs;

use crate::walker::FdGate;

mod formats;

/// A decode capability: raw file content in, success or a description of
/// what was wrong with it out.
pub type DecodeFn = fn(&[u8]) -> Result<(), String>;

/// Why a discovered file failed to decode. The three variants are distinct
/// on purpose: a missing decoder, an unreadable file and rejected content
/// are different operator problems even though all of them count the same.
#[derive(Debug, Error)]
pub enum DecodeFailure {
    #[error("no decoder registered for file type {extension:?}")]
    Unsupported { extension: String },

    #[error("read failed: {0}")]
    Read(#[from] std::io::Error),

    #[error("{0}")]
    Invalid(String),
}

/// Extension-keyed collection of decode capabilities.
pub struct DecoderRegistry {
    decoders: HashMap<String, DecodeFn>,
}

impl DecoderRegistry {
    /// A registry with nothing registered. Useful for callers bringing their
    /// own capabilities.
    pub fn empty() -> Self {
        Self {
            decoders: HashMap::new(),
        }
    }

    /// Register a capability for an extension key like `".json"`.
    /// Re-registering an extension replaces the previous capability.
    pub fn register(&mut self, extension: impl Into<String>, decode: DecodeFn) {
        self.decoders.insert(extension.into(), decode);
    }

    /// Read `path` in full and run the capability registered for its
    /// extension. Holds one gate token across the whole read-plus-decode;
    /// the gate pool is shared with directory listing.
    pub async fn decode_file(&self, path: &Path, gate: &FdGate) -> Result<(), DecodeFailure> {
        let extension = extension_key(path);
        let Some(decode) = self.decoders.get(&extension) else {
            return Err(DecodeFailure::Unsupported { extension });
        };

        let _permit = gate.acquire().await;
        let raw = fs::read(path).await?;
        decode(&raw).map_err(DecodeFailure::Invalid)
    }
}

impl Default for DecoderRegistry {
    /// The built-in capabilities: JSON, YAML (both spellings) and TOML.
    fn default() -> Self {
        let mut registry = Self::empty();
        registry.register(".json", formats::decode_json);
        registry.register(".yaml", formats::decode_yaml);
        registry.register(".yml", formats::decode_yaml);
        registry.register(".toml", formats::decode_toml);
        registry
    }
}

/// Extension key for a path: the final suffix with its dot (`".yaml"`), or
/// the empty string for extensionless files. Dotfiles such as `.gitignore`
/// count as extensionless.
pub fn extension_key(path: &Path) -> String {
    match path.extension() {
        Some(extension) => format!(".{}", extension.to_string_lossy()),
        None => String::new(),
    }
}
