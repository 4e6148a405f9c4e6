// src/exec/live.rs

//! Companion live-reload helper, started once at startup when requested.

use tokio::process::Command;
use tracing::{debug, info, warn};

/// Spawn `live-server --open=build` as a detached helper.
///
/// Requires `live-server` in the nodejs global namespace. Not part of the
/// trigger pipeline: failure to start it is a warning, and it is left to
/// outlive or die with the daemon on its own terms.
pub fn spawn_live_server() {
    match Command::new("live-server").arg("--open=build").spawn() {
        Ok(mut child) => {
            info!("live-server helper started");
            tokio::spawn(async move {
                match child.wait().await {
                    Ok(status) => debug!(?status, "live-server helper exited"),
                    Err(err) => warn!("waiting on live-server helper failed: {err}"),
                }
            });
        }
        Err(err) => {
            warn!("could not start live-server helper: {err}");
        }
    }
}
