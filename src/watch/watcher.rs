// src/watch/watcher.rs

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::errors::WatchnpmError;
use crate::exec::command::TriggerRequest;
use crate::exec::Action;
use crate::watch::filter::FilterRules;
use crate::watch::paths::relative_to_root;

/// Handle for the filesystem watcher.
///
/// This exists mainly so the underlying `RecommendedWatcher` is kept alive
/// for as long as needed. Dropping this handle will stop file watching.
pub struct WatcherHandle {
    _inner: RecommendedWatcher,
}

impl std::fmt::Debug for WatcherHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WatcherHandle").finish()
    }
}

/// Spawn a filesystem watcher observing `root` recursively and forwarding a
/// build trigger for every changed path the filter rules accept.
///
/// The notify callback runs on notify's own thread and only does a
/// `try_send` into a bounded channel; when the channel is full the event is
/// dropped with a note on stderr rather than blocking event delivery. The
/// async consumer does normalization + classification and nothing slower —
/// command execution happens behind `trigger_tx`.
pub fn spawn_watcher(
    root: impl Into<PathBuf>,
    rules: Arc<FilterRules>,
    trigger_tx: mpsc::Sender<TriggerRequest>,
) -> Result<WatcherHandle> {
    let root = root.into();
    let root = root.canonicalize().unwrap_or_else(|_| root.clone()); // best-effort

    // Channel from the blocking notify callback into the async world.
    let (event_tx, mut event_rx) = mpsc::channel::<Event>(256);

    // Closure called synchronously by notify whenever an event arrives.
    let mut watcher = RecommendedWatcher::new(
        move |res: notify::Result<Event>| {
            match res {
                Ok(event) => {
                    if let Err(err) = event_tx.try_send(event) {
                        // We can't log via tracing here easily, so fallback to stderr.
                        eprintln!("watchnpm: dropping filesystem event: {err}");
                    }
                }
                Err(err) => {
                    eprintln!("watchnpm: file watch error: {err}");
                }
            }
        },
        Config::default(),
    )?;

    watcher.watch(&root, RecursiveMode::Recursive)?;

    info!("file watcher started on {:?}", root);

    // Async task that consumes notify events and forwards build triggers.
    tokio::spawn(async move {
        while let Some(event) = event_rx.recv().await {
            debug!("received notify event: {:?}", event);

            for path in &event.paths {
                match relative_to_root(&root, path) {
                    Ok(rel) => {
                        if !rules.is_watched(&rel) {
                            continue;
                        }
                        debug!(path = %rel, "watched file changed -> triggering build");
                        let request = TriggerRequest {
                            action: Action::Build,
                            path: rel,
                        };
                        if trigger_tx.send(request).await.is_err() {
                            // If the trigger channel is closed, there's no
                            // point keeping the watcher loop alive.
                            debug!("trigger channel closed; stopping watcher loop");
                            return;
                        }
                    }
                    Err(WatchnpmError::OutsideRoot { .. }) => {
                        debug!("discarding event outside watched root: {:?}", path);
                    }
                    Err(err) => {
                        debug!("could not normalize event path {:?}: {err}", path);
                    }
                }
            }
        }

        debug!("file watcher loop ended");
    });

    Ok(WatcherHandle { _inner: watcher })
}
