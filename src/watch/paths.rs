// src/watch/paths.rs

//! Normalization of raw filesystem-event paths against the watched root.

use std::path::Path;

use crate::errors::{Result, WatchnpmError};

/// Convert an absolute event path into a string relative to `root`, with
/// forward slashes.
///
/// This is intentionally robust:
/// - First we try a direct `strip_prefix(root)`.
/// - If that fails (e.g. due to symlinks or different absolute prefixes),
///   we canonicalize both paths and try again.
/// - Only if both attempts fail do we give up with
///   [`WatchnpmError::OutsideRoot`].
///
/// There is deliberately no existence check: a path that was just deleted
/// still normalizes, because a deletion is a legitimate rebuild trigger.
pub fn relative_to_root(root: &Path, path: &Path) -> Result<String> {
    // Fast path: event path already starts with our root.
    if let Ok(rel) = path.strip_prefix(root) {
        return Ok(relative_string(rel));
    }

    // More robust path: canonicalize both, then try again. This helps on
    // platforms (notably macOS) where different absolute prefixes may be
    // used for the same underlying directory (e.g. symlinks, /private/var).
    if let (Ok(root_canon), Ok(path_canon)) = (root.canonicalize(), path.canonicalize()) {
        if let Ok(rel) = path_canon.strip_prefix(&root_canon) {
            return Ok(relative_string(rel));
        }
    }

    Err(WatchnpmError::OutsideRoot {
        path: path.to_path_buf(),
        root: root.to_path_buf(),
    })
}

fn relative_string(rel: &Path) -> String {
    rel.to_string_lossy().replace('\\', "/")
}
