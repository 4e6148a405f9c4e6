// src/exec/dispatcher.rs

use tokio::process::Child;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::config::CommandsSection;
use crate::exec::action::{Action, ActionOutcome, ActionResult};
use crate::exec::command;

/// Maps actions to their configured commands and executes them.
///
/// The dispatcher is the single serialization point shared by both trigger
/// producers (file watcher and HTTP surface). Short-lived actions need no
/// cross-call state and may overlap freely; `serve` is the one action with
/// state across calls, guarded by an async mutex.
#[derive(Debug)]
pub struct Dispatcher {
    commands: CommandsSection,
    serve_child: Mutex<Option<Child>>,
}

impl Dispatcher {
    pub fn new(commands: CommandsSection) -> Self {
        Self {
            commands,
            serve_child: Mutex::new(None),
        }
    }

    /// Execute the command configured for `action`.
    ///
    /// - `build`, `test`, `run`, `start`: run the command and wait for it to
    ///   exit. Concurrent triggers of the same action run as overlapping
    ///   child processes; that is accepted behavior.
    /// - `serve`: replace policy — a new trigger kills a still-running
    ///   previous serve process, then starts a fresh one and returns without
    ///   awaiting its exit.
    /// - An empty command string makes the action a no-op that still
    ///   returns its status label.
    ///
    /// Failures are carried in the returned `ActionResult`; this method
    /// never panics and never tears down a producer.
    pub async fn trigger(&self, action: Action) -> ActionResult {
        let cmd = action.command(&self.commands);
        if cmd.trim().is_empty() {
            debug!(action = %action, "no command configured; skipping");
            return ActionResult::new(action, ActionOutcome::Skipped);
        }

        match action {
            Action::Serve => self.restart_serve(cmd).await,
            _ => {
                let outcome = command::run_to_exit(action, cmd).await;
                ActionResult::new(action, outcome)
            }
        }
    }

    /// Kill the previous serve process if it is still alive, then start a
    /// new one. The mutex is held across kill + spawn so two concurrent
    /// serve triggers serialize instead of racing for the slot.
    async fn restart_serve(&self, cmd: &str) -> ActionResult {
        let mut slot = self.serve_child.lock().await;

        if let Some(child) = slot.as_mut() {
            match child.try_wait() {
                Ok(Some(status)) => {
                    debug!(?status, "previous serve process already exited");
                }
                Ok(None) => {
                    info!("replacing running serve process");
                    let _ = child.start_kill();
                    let _ = child.wait().await;
                }
                Err(err) => {
                    warn!("could not query previous serve process: {err}");
                    let _ = child.start_kill();
                }
            }
            *slot = None;
        }

        match command::launch(Action::Serve, cmd).await {
            Ok(child) => {
                *slot = Some(child);
                ActionResult::new(Action::Serve, ActionOutcome::Launched)
            }
            Err(detail) => ActionResult::new(Action::Serve, ActionOutcome::Failed { detail }),
        }
    }

    /// Stop a still-running serve process. Called once on graceful shutdown.
    pub async fn shutdown(&self) {
        let mut slot = self.serve_child.lock().await;
        if let Some(mut child) = slot.take() {
            info!("stopping serve process on shutdown");
            let _ = child.start_kill();
            let _ = child.wait().await;
        }
    }
}
