// src/lib.rs

pub mod cli;
pub mod config;
pub mod errors;
pub mod exec;
pub mod logging;
pub mod server;
pub mod watch;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use crate::cli::CliArgs;
use crate::config::loader::load_and_validate;
use crate::exec::Dispatcher;
use crate::server::AppState;
use crate::watch::FilterRules;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config loading (fatal on failure, before anything starts)
/// - filter rules from the CLI lists
/// - (optional) file watcher + trigger loop
/// - (optional) live-server helper
/// - the HTTP control surface, which runs until Ctrl-C
pub async fn run(args: CliArgs) -> Result<()> {
    let config_path = PathBuf::from(&args.config);
    let cfg = load_and_validate(&config_path)?;

    let rules = Arc::new(FilterRules::new(args.filter_spec())?);
    debug!(?rules, "filter rules compiled");

    if !npm_on_path() {
        warn!("npm executable not found on PATH; configured commands may fail");
    }

    let root = std::env::current_dir().context("determining watched root")?;

    if args.live_server {
        info!("starting live server ...");
        exec::live::spawn_live_server();
    } else {
        debug!("not starting live server");
    }

    let dispatcher = Arc::new(Dispatcher::new(cfg.commands.clone()));

    let _watcher_handle = if !args.no_watch {
        let watched = watch::watched_files(&root, &rules);
        info!(count = watched.len(), "watching files under {:?}", root);
        debug!(?watched, "initial watched set");

        let trigger_tx = exec::spawn_trigger_loop(Arc::clone(&dispatcher));
        Some(watch::spawn_watcher(
            root.clone(),
            Arc::clone(&rules),
            trigger_tx,
        )?)
    } else {
        info!("filesystem listener disabled (--no-watch)");
        None
    };

    let state = Arc::new(AppState {
        dispatcher: Arc::clone(&dispatcher),
    });
    server::serve_control(state, cfg.server.port).await?;

    // The control surface has shut down; take the serve child with us.
    dispatcher.shutdown().await;
    Ok(())
}

/// Check whether an `npm` executable is reachable through `PATH`.
fn npm_on_path() -> bool {
    let names: &[&str] = if cfg!(windows) {
        &["npm.cmd", "npm.exe", "npm"]
    } else {
        &["npm"]
    };

    let Some(paths) = std::env::var_os("PATH") else {
        return false;
    };
    std::env::split_paths(&paths).any(|dir| names.iter().any(|name| dir.join(name).is_file()))
}
