//! Locating metric files inside instance directories.
//!
//! The processing pipeline drops each metric's per-run value files into a
//! fixed subfolder of the instance directory, with the algorithm identified
//! by a token somewhere in the file name. This module resolves those
//! conventions to concrete paths.

use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// Return the first file in `instance_dir/subdir` whose name contains
/// `token` case-insensitively.
///
/// Entries are compared in lexicographic order, so when several files match
/// the result does not depend on platform listing order. A missing subfolder
/// and a missing match both yield `None`.
pub fn locate_metric_file(instance_dir: &Path, subdir: &str, token: &str) -> Option<PathBuf> {
    let search_dir = instance_dir.join(subdir);
    if !search_dir.is_dir() {
        debug!("no {} subfolder in {}", subdir, instance_dir.display());
        return None;
    }

    let needle = token.trim().to_lowercase();

    let mut entries: Vec<PathBuf> = WalkDir::new(&search_dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .collect();
    entries.sort();

    entries.into_iter().find(|path| {
        path.file_name()
            .and_then(|name| name.to_str())
            .map(|name| name.trim().to_lowercase().contains(&needle))
            .unwrap_or(false)
    })
}
