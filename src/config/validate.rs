// src/config/validate.rs

use crate::config::model::ConfigFile;
use crate::errors::{Result, WatchnpmError};

/// Run basic semantic validation against a loaded configuration.
///
/// Required keys and sections are already enforced by deserialization; this
/// checks what the type system cannot:
/// - `[server].port` is non-zero (0 would mean "pick any port", which makes
///   the control surface undiscoverable for the operator).
///
/// Empty command strings are deliberately allowed: they turn the action into
/// a no-op.
pub fn validate_config(cfg: &ConfigFile) -> Result<()> {
    if cfg.server.port == 0 {
        return Err(WatchnpmError::Config(
            "[server].port must be non-zero".to_string(),
        ));
    }
    Ok(())
}
