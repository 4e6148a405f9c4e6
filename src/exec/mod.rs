// src/exec/mod.rs

//! Action dispatch: the action model, the shell-command runner, the
//! dispatcher enforcing per-action policy and the live-server helper.

pub mod action;
pub mod command;
pub mod dispatcher;
pub mod live;

pub use action::{Action, ActionOutcome, ActionResult};
pub use command::{TriggerRequest, spawn_trigger_loop};
pub use dispatcher::Dispatcher;
