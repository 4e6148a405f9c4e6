// src/exec/action.rs

use std::fmt;

use crate::config::CommandsSection;

/// The logical actions an operator (or a file change) can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Build,
    Test,
    Run,
    Start,
    Serve,
}

impl Action {
    pub const ALL: [Action; 5] = [
        Action::Build,
        Action::Test,
        Action::Run,
        Action::Start,
        Action::Serve,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Action::Build => "build",
            Action::Test => "test",
            Action::Run => "run",
            Action::Start => "start",
            Action::Serve => "serve",
        }
    }

    /// Human-readable status label, also the HTTP response body.
    pub fn status_label(&self) -> &'static str {
        match self {
            Action::Build => "Building",
            Action::Test => "Testing",
            Action::Run => "Running",
            Action::Start => "Starting",
            Action::Serve => "Serving",
        }
    }

    /// The configured shell command for this action.
    pub fn command<'a>(&self, commands: &'a CommandsSection) -> &'a str {
        match self {
            Action::Build => &commands.build,
            Action::Test => &commands.test,
            Action::Run => &commands.run,
            Action::Start => &commands.start,
            Action::Serve => &commands.serve,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How a single trigger of an action ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    /// Process ran and exited successfully.
    Completed,
    /// Long-running process started; exit not awaited (serve only).
    Launched,
    /// No command configured; nothing was executed.
    Skipped,
    /// Process exited non-zero or could not be spawned.
    Failed { detail: String },
}

/// Result of one `Dispatcher::trigger` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionResult {
    pub action: Action,
    pub outcome: ActionOutcome,
}

impl ActionResult {
    pub fn new(action: Action, outcome: ActionOutcome) -> Self {
        Self { action, outcome }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self.outcome, ActionOutcome::Failed { .. })
    }

    /// The plain-text status rendered to the triggering producer. This is
    /// the whole HTTP contract: the label on success/no-op/launch, a short
    /// failure line otherwise.
    pub fn status_text(&self) -> String {
        match &self.outcome {
            ActionOutcome::Failed { detail } => format!("{} failed: {detail}", self.action),
            _ => self.action.status_label().to_string(),
        }
    }
}
