// src/watch/filter.rs

use std::fmt;

use anyhow::{Context, Result};
use regex::Regex;

/// Raw filter rule strings, as collected from the CLI.
///
/// This is the uncompiled form; `FilterRules::new` turns it into the
/// matcher used by the watcher and the startup walk.
#[derive(Debug, Clone, Default)]
pub struct FilterSpec {
    pub included_extensions: Vec<String>,
    pub excluded_extensions: Vec<String>,
    pub excluded_folders: Vec<String>,
    pub excluded_files: Vec<String>,
    pub excluded_patterns: Vec<String>,
}

/// Compiled filter rules deciding which relative paths are watched.
///
/// Immutable once constructed; classification is a pure function of the
/// path, so the rules can be shared freely between the watcher and the
/// startup walk without locking.
#[derive(Clone)]
pub struct FilterRules {
    included_extensions: Vec<String>,
    excluded_extensions: Vec<String>,
    excluded_folders: Vec<String>,
    excluded_files: Vec<String>,
    excluded_patterns: Vec<Regex>,
}

impl fmt::Debug for FilterRules {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterRules")
            .field("included_extensions", &self.included_extensions)
            .field("excluded_extensions", &self.excluded_extensions)
            .field("excluded_folders", &self.excluded_folders)
            .field("excluded_files", &self.excluded_files)
            .finish_non_exhaustive()
    }
}

impl FilterRules {
    /// Compile a `FilterSpec` into usable rules.
    ///
    /// An invalid exclude pattern is a startup error, consistent with
    /// "configuration failures are fatal".
    pub fn new(spec: FilterSpec) -> Result<Self> {
        let excluded_patterns = spec
            .excluded_patterns
            .iter()
            .map(|pat| {
                Regex::new(pat).with_context(|| format!("invalid exclude pattern: {pat}"))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            included_extensions: spec.included_extensions,
            excluded_extensions: spec.excluded_extensions,
            excluded_folders: spec.excluded_folders,
            excluded_files: spec.excluded_files,
            excluded_patterns,
        })
    }

    /// Folder names whose first-level directories the startup walk skips
    /// wholesale. Deeper matches are still caught by `is_watched`.
    pub fn excluded_folders(&self) -> &[String] {
        &self.excluded_folders
    }

    /// Decide whether a root-relative path is watched.
    ///
    /// This is an override chain, not a short-circuit: each pass may flip
    /// the decision and later passes win. The order is load-bearing —
    /// every exclusion category dominates the inclusion pass, so a path
    /// matching both an included and an excluded extension ends up
    /// excluded. Keep the passes separate; do not fuse them into one
    /// predicate.
    pub fn is_watched(&self, path: &str) -> bool {
        let mut watched = false;
        if self
            .included_extensions
            .iter()
            .any(|ext| path.ends_with(ext.as_str()))
        {
            watched = true;
        }
        if self
            .excluded_extensions
            .iter()
            .any(|ext| path.ends_with(ext.as_str()))
        {
            watched = false;
        }
        if self
            .excluded_folders
            .iter()
            .any(|folder| path.contains(folder.as_str()))
        {
            watched = false;
        }
        if self
            .excluded_files
            .iter()
            .any(|name| path.contains(name.as_str()))
        {
            watched = false;
        }
        if self.excluded_patterns.iter().any(|re| re.is_match(path)) {
            watched = false;
        }
        watched
    }
}
