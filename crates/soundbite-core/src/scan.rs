//! Source File Scanner
//!
//! Recursively discovers AIFF source files to generate previews for.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;
use walkdir::WalkDir;

/// Errors raised during source discovery
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Scan root is not a directory: {}", .0.display())]
    RootNotFound(PathBuf),
}

pub type ScanResult<T> = Result<T, ScanError>;

/// Returns true for files carrying an AIFF extension (`aif`/`aiff`, any case)
fn is_aiff_source(path: &Path) -> bool {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => matches!(ext.to_lowercase().as_str(), "aif" | "aiff"),
        None => false,
    }
}

/// Returns true for dot-prefixed file and directory names
fn is_hidden(entry: &walkdir::DirEntry) -> bool {
    entry.file_name().to_string_lossy().starts_with('.')
}

/// Recursively discover AIFF source files under `root`
///
/// Hidden files and directories are skipped, as are entries the walk cannot
/// read. Results are sorted by path for a deterministic processing order.
pub fn find_aiff_sources(root: &Path) -> ScanResult<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(ScanError::RootNotFound(root.to_path_buf()));
    }

    let mut sources = Vec::new();

    for entry in WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_hidden(entry))
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                debug!(error = %e, "Skipping unreadable entry during scan");
                continue;
            }
        };

        if entry.file_type().is_file() && is_aiff_source(entry.path()) {
            sources.push(entry.path().to_path_buf());
        }
    }

    sources.sort();
    Ok(sources)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    /// Helper to create a file tree for testing
    fn create_test_tree(root: &Path) {
        std::fs::create_dir_all(root.join("kits/drums")).unwrap();
        std::fs::create_dir_all(root.join("stems")).unwrap();

        std::fs::write(root.join("bounce.aif"), "audio").unwrap();
        std::fs::write(root.join("kits/kick.aif"), "audio").unwrap();
        std::fs::write(root.join("kits/drums/snare.AIF"), "audio").unwrap();
        std::fs::write(root.join("stems/vocal.aiff"), "audio").unwrap();

        // Non-AIFF files (should be ignored)
        std::fs::write(root.join("stems/mixdown.wav"), "audio").unwrap();
        std::fs::write(root.join("notes.txt"), "text").unwrap();

        // Hidden entries (should be ignored)
        std::fs::create_dir_all(root.join(".cache")).unwrap();
        std::fs::write(root.join(".cache/tmp.aif"), "audio").unwrap();
        std::fs::write(root.join(".hidden.aif"), "audio").unwrap();
    }

    fn relative_paths(root: &Path, sources: &[PathBuf]) -> Vec<String> {
        sources
            .iter()
            .map(|p| {
                p.strip_prefix(root)
                    .unwrap()
                    .to_string_lossy()
                    .replace('\\', "/")
            })
            .collect()
    }

    #[test]
    fn test_scan_discovers_aiff_files_recursively() {
        let dir = tempdir().unwrap();
        create_test_tree(dir.path());

        let sources = find_aiff_sources(dir.path()).unwrap();
        let paths = relative_paths(dir.path(), &sources);

        assert!(paths.contains(&"bounce.aif".to_string()));
        assert!(paths.contains(&"kits/kick.aif".to_string()));
        assert!(paths.contains(&"kits/drums/snare.AIF".to_string()));
        assert!(paths.contains(&"stems/vocal.aiff".to_string()));
        assert_eq!(paths.len(), 4);
    }

    #[test]
    fn test_scan_skips_other_file_types() {
        let dir = tempdir().unwrap();
        create_test_tree(dir.path());

        let sources = find_aiff_sources(dir.path()).unwrap();
        let paths = relative_paths(dir.path(), &sources);

        assert!(!paths.contains(&"stems/mixdown.wav".to_string()));
        assert!(!paths.contains(&"notes.txt".to_string()));
    }

    #[test]
    fn test_scan_skips_hidden_entries() {
        let dir = tempdir().unwrap();
        create_test_tree(dir.path());

        let sources = find_aiff_sources(dir.path()).unwrap();
        let paths = relative_paths(dir.path(), &sources);

        assert!(!paths.iter().any(|p| p.starts_with(".cache/")));
        assert!(!paths.contains(&".hidden.aif".to_string()));
    }

    #[test]
    fn test_scan_results_sorted_by_path() {
        let dir = tempdir().unwrap();
        create_test_tree(dir.path());

        let sources = find_aiff_sources(dir.path()).unwrap();

        let mut sorted = sources.clone();
        sorted.sort();
        assert_eq!(sources, sorted);
    }

    #[test]
    fn test_scan_empty_directory() {
        let dir = tempdir().unwrap();

        let sources = find_aiff_sources(dir.path()).unwrap();
        assert!(sources.is_empty());
    }

    #[test]
    fn test_scan_missing_root_errors() {
        let result = find_aiff_sources(Path::new("/definitely/missing/root"));
        assert!(matches!(result, Err(ScanError::RootNotFound(_))));
    }

    #[test]
    fn test_aiff_extension_detection() {
        assert!(is_aiff_source(Path::new("kick.aif")));
        assert!(is_aiff_source(Path::new("kick.AIF")));
        assert!(is_aiff_source(Path::new("kick.aiff")));
        assert!(is_aiff_source(Path::new("kick.Aiff")));
        assert!(!is_aiff_source(Path::new("kick.wav")));
        assert!(!is_aiff_source(Path::new("kick.ogg")));
        assert!(!is_aiff_source(Path::new("aif"))); // no extension
    }
}
