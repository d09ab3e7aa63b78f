//! Gate-guarded directory listing

use std::ffi::OsString;
use std::path::Path;
use tokio::fs;
use tracing::warn;

use super::gate::FdGate;

pub(crate) struct DirEntryInfo {
    pub(crate) name: OsString,
    pub(crate) is_dir: bool,
    pub(crate) size: u64,
}

/// List the immediate entries of `dir`, holding one gate token for the
/// duration of the open and read. Failures are logged and never propagate:
/// an unreadable directory yields whatever entries were obtained before the
/// failure (possibly none), and the walk continues elsewhere.
pub(crate) async fn list_dir(dir: &Path, gate: &FdGate) -> Vec<DirEntryInfo> {
    let _permit = gate.acquire().await;

    let mut reader = match fs::read_dir(dir).await {
        Ok(reader) => reader,
        Err(err) => {
            warn!(dir = %dir.display(), %err, "cannot open directory");
            return Vec::new();
        }
    };

    let mut entries = Vec::new();
    loop {
        match reader.next_entry().await {
            Ok(Some(entry)) => {
                let metadata = match entry.metadata().await {
                    Ok(metadata) => metadata,
                    Err(err) => {
                        warn!(path = %entry.path().display(), %err, "cannot stat entry");
                        continue;
                    }
                };
                entries.push(DirEntryInfo {
                    name: entry.file_name(),
                    is_dir: metadata.is_dir(),
                    size: metadata.len(),
                });
            }
            Ok(None) => break,
            Err(err) => {
                // Partial results are still useful; keep what we have.
                warn!(dir = %dir.display(), %err, "directory read interrupted");
                break;
            }
        }
    }
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs as std_fs;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_lists_files_and_dirs_with_sizes() {
        let dir = TempDir::new().unwrap();
        std_fs::write(dir.path().join("a.json"), b"{}").unwrap();
        std_fs::create_dir(dir.path().join("sub")).unwrap();

        let gate = FdGate::default();
        let mut entries = list_dir(dir.path(), &gate).await;
        entries.sort_by(|a, b| a.name.cmp(&b.name));

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name, "a.json");
        assert!(!entries[0].is_dir);
        assert_eq!(entries[0].size, 2);
        assert_eq!(entries[1].name, "sub");
        assert!(entries[1].is_dir);
    }

    #[tokio::test]
    async fn test_missing_directory_yields_empty() {
        let gate = FdGate::default();
        let entries = list_dir(Path::new("/definitely/not/here"), &gate).await;
        assert!(entries.is_empty());
    }
}
