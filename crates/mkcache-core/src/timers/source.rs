//! Sources of the timer listing consumed by the estimator.

use std::process::Command;

use tracing::debug;

use super::errors::TimerError;

/// Something that can produce a `systemctl list-timers` style listing.
pub trait TimerSource {
    /// Return the raw listing text.
    ///
    /// A listing that could not be produced (non-zero exit) is reported as
    /// [`TimerError::CommandFailed`]; callers treat it as "no data".
    fn list_timers(&self) -> Result<String, TimerError>;
}

/// Runs `systemctl list-timers` and captures its output.
#[derive(Debug, Clone)]
pub struct SystemctlTimers {
    program: String,
}

impl SystemctlTimers {
    pub fn new() -> Self {
        Self {
            program: "systemctl".to_string(),
        }
    }

    /// Use a different `systemctl`-compatible binary.
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for SystemctlTimers {
    fn default() -> Self {
        Self::new()
    }
}

impl TimerSource for SystemctlTimers {
    /// Blocks until the command exits; no timeout is applied.
    fn list_timers(&self) -> Result<String, TimerError> {
        let command = format!("{} list-timers", self.program);
        debug!(event = "core.timers.list_started", command = %command);

        let output = Command::new(&self.program)
            .arg("list-timers")
            .output()
            .map_err(|e| TimerError::Spawn {
                command: command.clone(),
                source: e,
            })?;

        if !output.status.success() {
            return Err(TimerError::CommandFailed {
                command,
                code: output.status.code(),
            });
        }

        // stdout first so the header stays on the first line
        let mut listing = String::from_utf8_lossy(&output.stdout).into_owned();
        listing.push_str(&String::from_utf8_lossy(&output.stderr));
        Ok(listing)
    }
}
