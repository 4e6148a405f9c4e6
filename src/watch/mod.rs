// src/watch/mod.rs

//! File watching: the filter rule model, path normalization, the startup
//! tree walk and the notify-backed watcher pipeline.

pub mod filter;
pub mod paths;
pub mod walk;
pub mod watcher;

pub use filter::{FilterRules, FilterSpec};
pub use paths::relative_to_root;
pub use walk::watched_files;
pub use watcher::{WatcherHandle, spawn_watcher};
