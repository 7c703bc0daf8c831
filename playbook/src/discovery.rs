//! Post source discovery.

use std::path::{Path, PathBuf};

use glob::Pattern;
use walkdir::WalkDir;

/// Recursively list files under `root` whose file name matches any of
/// `include`, sorted by path.
///
/// Hidden directories (leading `.`) and `node_modules` are not descended.
///
/// # Errors
///
/// Returns an I/O error if `root` is missing or not a directory, or if any
/// directory in the tree cannot be read.
pub fn discover(root: &Path, include: &[Pattern]) -> std::io::Result<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("content directory not found: {}", root.display()),
        ));
    }

    let mut files = Vec::new();
    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_skipped_dir(entry));

    for entry in walker {
        let entry = entry.map_err(std::io::Error::from)?;
        if !entry.file_type().is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy();
        if include.iter().any(|pattern| pattern.matches(&name)) {
            files.push(entry.into_path());
        }
    }

    files.sort();
    tracing::debug!(root = %root.display(), count = files.len(), "discovered sources");
    Ok(files)
}

/// Read a source file as text. Invalid UTF-8 is replaced with U+FFFD
/// rather than failing the read.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read.
pub fn read_source(path: &Path) -> std::io::Result<String> {
    let bytes = std::fs::read(path)?;
    match String::from_utf8(bytes) {
        Ok(text) => Ok(text),
        Err(err) => {
            tracing::warn!(file = %path.display(), "source is not valid UTF-8; decoding lossily");
            Ok(String::from_utf8_lossy(err.as_bytes()).into_owned())
        }
    }
}

fn is_skipped_dir(entry: &walkdir::DirEntry) -> bool {
    entry.file_type().is_dir() && {
        let name = entry.file_name().to_string_lossy();
        name.starts_with('.') || name == "node_modules"
    }
}
