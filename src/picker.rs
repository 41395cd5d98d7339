use std::fs;
use std::path::{Path, PathBuf};

pub const SUPPORTED_EXTENSIONS: [&str; 3] = ["pdf", "csv", "txt"];

/// List the supported documents in the `documents` directory, sorted by
/// path. The TUI menu stands in for the platform file picker; leaving the
/// screen without choosing anything is the cancellation path.
pub fn get_document_files() -> Vec<PathBuf> {
    get_document_files_in(&PathBuf::from("documents"))
}

pub fn get_document_files_in(dir: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();

    if dir.exists() && dir.is_dir()
        && let Ok(entries) = fs::read_dir(dir) {
            for entry in entries.flatten() {
                if file_extension(&entry.path())
                    .map(|ext| SUPPORTED_EXTENSIONS.contains(&ext.as_str()))
                    .unwrap_or(false)
                {
                    files.push(entry.path());
                }
            }
        }

    files.sort();
    files
}

/// Type discriminator: the suffix after the last `.`, lowercased.
pub fn file_extension(path: &Path) -> Option<String> {
    path.file_name()
        .and_then(|name| name.to_str())
        .and_then(|name| name.rsplit_once('.'))
        .map(|(_, ext)| ext.to_ascii_lowercase())
}
