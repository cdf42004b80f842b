//! Runtime configuration read from the environment.

use std::env;
use std::time::Duration;

use tracing::warn;

/// Default deadline for a single operation invoked from the CLI.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Environment variable to override the default timeout.
pub const TIMEOUT_ENV_VAR: &str = "GRAPHEUS_TIMEOUT";

/// Environment variable holding a tracing filter directive.
pub const LOG_ENV_VAR: &str = "GRAPHEUS_LOG";

/// Get the per-operation timeout.
///
/// Reads from GRAPHEUS_TIMEOUT if set, otherwise uses the default of 60 seconds.
/// Logs a warning if the variable is set but not a non-negative integer.
pub fn operation_timeout() -> Duration {
    match env::var(TIMEOUT_ENV_VAR) {
        Ok(v) if !v.is_empty() => match v.parse::<u64>() {
            Ok(secs) => Duration::from_secs(secs),
            Err(_) => {
                warn!(
                    "Invalid {} value '{}', using default {}s",
                    TIMEOUT_ENV_VAR, v, DEFAULT_TIMEOUT_SECS
                );
                Duration::from_secs(DEFAULT_TIMEOUT_SECS)
            }
        },
        _ => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
    }
}
