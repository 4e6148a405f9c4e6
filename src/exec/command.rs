// src/exec/command.rs

use std::process::Stdio;
use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::{Child, ChildStderr, ChildStdout, Command};
use tokio::sync::mpsc;
use tracing::{info, warn};

use crate::exec::action::{Action, ActionOutcome};
use crate::exec::dispatcher::Dispatcher;

/// A trigger produced by the file-watch pipeline: which action to run and
/// the relative path whose change caused it.
#[derive(Debug, Clone)]
pub struct TriggerRequest {
    pub action: Action,
    pub path: String,
}

/// Spawn the background trigger loop.
///
/// The returned sender is what the watcher feeds. Each received trigger is
/// executed in its own Tokio task, so a slow build never delays consumption
/// of later triggers, and overlapping triggers run as overlapping child
/// processes.
pub fn spawn_trigger_loop(dispatcher: Arc<Dispatcher>) -> mpsc::Sender<TriggerRequest> {
    let (tx, mut rx) = mpsc::channel::<TriggerRequest>(32);

    tokio::spawn(async move {
        info!("trigger loop started");
        while let Some(request) = rx.recv().await {
            let dispatcher = Arc::clone(&dispatcher);
            tokio::spawn(async move {
                let result = dispatcher.trigger(request.action).await;
                if result.is_failure() {
                    warn!(
                        action = %request.action,
                        path = %request.path,
                        status = %result.status_text(),
                        "file-change trigger failed"
                    );
                } else {
                    info!(
                        action = %request.action,
                        path = %request.path,
                        status = %result.status_text(),
                        "file-change trigger completed"
                    );
                }
            });
        }
        info!("trigger loop finished (channel closed)");
    });

    tx
}

/// Build a shell command appropriate for the platform.
fn shell_command(cmd: &str) -> Command {
    if cfg!(windows) {
        let mut c = Command::new("cmd");
        c.arg("/C").arg(cmd);
        c
    } else {
        let mut c = Command::new("sh");
        c.arg("-c").arg(cmd);
        c
    }
}

/// Run an action command and wait for it to exit.
///
/// All failure modes (spawn error, wait error, non-zero exit) are folded
/// into `ActionOutcome::Failed`; nothing here panics or propagates.
pub(crate) async fn run_to_exit(action: Action, cmd: &str) -> ActionOutcome {
    info!(action = %action, cmd = %cmd, "starting action process");

    let mut command = shell_command(cmd);
    command
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    let mut child = match command.spawn() {
        Ok(child) => child,
        Err(err) => {
            warn!(action = %action, error = %err, "failed to spawn action process");
            return ActionOutcome::Failed {
                detail: format!("spawn failed: {err}"),
            };
        }
    };

    stream_output(action, child.stdout.take(), child.stderr.take());

    match child.wait().await {
        Ok(status) if status.success() => {
            info!(action = %action, "action process exited successfully");
            ActionOutcome::Completed
        }
        Ok(status) => {
            let code = status.code().unwrap_or(-1);
            warn!(action = %action, exit_code = code, "action process exited with failure");
            ActionOutcome::Failed {
                detail: format!("exit code {code}"),
            }
        }
        Err(err) => ActionOutcome::Failed {
            detail: format!("wait failed: {err}"),
        },
    }
}

/// Launch a long-running process (serve) without awaiting its exit.
///
/// The child keeps `kill_on_drop` so an orphan dies with the daemon; the
/// caller owns the handle for the replace-on-retrigger policy.
pub(crate) async fn launch(action: Action, cmd: &str) -> Result<Child, String> {
    info!(action = %action, cmd = %cmd, "launching long-running process");

    let mut command = shell_command(cmd);
    command
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    let mut child = command
        .spawn()
        .map_err(|err| format!("spawn failed: {err}"))?;

    stream_output(action, child.stdout.take(), child.stderr.take());
    Ok(child)
}

/// Stream child output into the log: stdout at info, stderr at warn.
/// Always consuming both keeps OS pipe buffers from filling.
fn stream_output(action: Action, stdout: Option<ChildStdout>, stderr: Option<ChildStderr>) {
    if let Some(stdout) = stdout {
        tokio::spawn(async move {
            let reader = BufReader::new(stdout);
            let mut lines = reader.lines();
            while let Ok(Some(line)) = lines.next_line().await {
                info!(action = %action, "stdout: {}", line);
            }
        });
    }

    if let Some(stderr) = stderr {
        tokio::spawn(async move {
            let reader = BufReader::new(stderr);
            let mut lines = reader.lines();
            while let Ok(Some(line)) = lines.next_line().await {
                warn!(action = %action, "stderr: {}", line);
            }
        });
    }
}
