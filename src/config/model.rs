// src/config/model.rs

use serde::Deserialize;

/// Top-level configuration as read from a TOML file.
///
/// This is a direct mapping of the expected file:
///
/// ```toml
/// [server]
/// port = 7777
///
/// [commands]
/// build = "npm run build"
/// test  = "npm test"
/// run   = "npm run dev"
/// start = "npm start"
/// serve = "npx serve build"
/// ```
///
/// Both sections are required; a missing section or a missing required key
/// is a deserialization error and therefore fatal at startup.
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigFile {
    /// Control-surface settings from `[server]`.
    pub server: ServerSection,

    /// Action command strings from `[commands]`.
    pub commands: CommandsSection,
}

/// `[server]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSection {
    /// TCP port the HTTP control surface binds to (loopback only).
    pub port: u16,
}

/// `[commands]` section: one shell command string per action.
///
/// A command may be the empty string, which turns the action into a no-op
/// that still answers with its status label. `run` is the one optional key;
/// when absent it defaults to the empty string.
#[derive(Debug, Clone, Deserialize)]
pub struct CommandsSection {
    pub build: String,
    pub test: String,
    #[serde(default)]
    pub run: String,
    pub start: String,
    pub serve: String,
}
