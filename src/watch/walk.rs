// src/watch/walk.rs

//! One-time startup walk of the project tree.
//!
//! Used purely to report the initial watched set; the live event pipeline
//! never consults this.

use std::path::Path;

use tracing::warn;
use walkdir::WalkDir;

use crate::watch::filter::FilterRules;
use crate::watch::paths::relative_to_root;

/// Enumerate all watched files under `root`.
///
/// First-level directories whose name is exactly one of the excluded
/// folders are skipped without descending; everything deeper is produced
/// and left to `is_watched`, which also catches nested excluded paths via
/// its substring pass. Unreadable entries are logged and skipped; the walk
/// continues with their siblings. Order is not significant.
pub fn watched_files(root: &Path, rules: &FilterRules) -> Vec<String> {
    let walker = WalkDir::new(root).into_iter().filter_entry(|entry| {
        let first_level_dir = entry.depth() == 1 && entry.file_type().is_dir();
        if !first_level_dir {
            return true;
        }
        let name = entry.file_name().to_string_lossy();
        !rules.excluded_folders().iter().any(|f| *f == name)
    });

    let mut watched = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!("skipping unreadable entry during startup walk: {err}");
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        if let Ok(rel) = relative_to_root(root, entry.path()) {
            if rules.is_watched(&rel) {
                watched.push(rel);
            }
        }
    }
    watched
}
