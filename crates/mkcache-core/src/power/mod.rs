//! Power-state detection.
//!
//! Timer-triggered refreshes are skipped on battery. An unknown power state
//! never counts as battery.

pub mod errors;

use std::process::Command;

use serde::Serialize;
use tracing::debug;

pub use errors::PowerError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PowerState {
    OnAc,
    OnBattery,
    Unknown,
}

impl PowerState {
    /// Map a tri-state "on AC power?" answer.
    pub fn from_on_ac(on_ac: Option<bool>) -> Self {
        match on_ac {
            Some(true) => Self::OnAc,
            Some(false) => Self::OnBattery,
            None => Self::Unknown,
        }
    }

    pub fn is_on_battery(&self) -> bool {
        matches!(self, Self::OnBattery)
    }
}

/// Trait for anything that can report the machine's power source.
pub trait PowerOracle {
    fn power_state(&self) -> Result<PowerState, PowerError>;
}

/// Probe via an `on_ac_power`-style helper.
///
/// Exit status 0 means AC, 1 means battery, anything else (conventionally
/// 255) means the helper could not tell. A helper that is not installed also
/// yields [`PowerState::Unknown`].
#[derive(Debug, Clone)]
pub struct OnAcPowerCommand {
    program: String,
}

impl OnAcPowerCommand {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    fn is_available(&self) -> bool {
        which::which(&self.program).is_ok()
    }
}

impl PowerOracle for OnAcPowerCommand {
    fn power_state(&self) -> Result<PowerState, PowerError> {
        if !self.is_available() {
            debug!(
                event = "core.power.probe_unavailable",
                command = %self.program
            );
            return Ok(PowerState::Unknown);
        }

        let status = match Command::new(&self.program).status() {
            Ok(status) => status,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(PowerState::Unknown),
            Err(e) => {
                return Err(PowerError::ProbeFailed {
                    command: self.program.clone(),
                    source: e,
                });
            }
        };

        let state = match status.code() {
            Some(0) => PowerState::OnAc,
            Some(1) => PowerState::OnBattery,
            _ => PowerState::Unknown,
        };

        debug!(
            event = "core.power.probe_completed",
            command = %self.program,
            exit_code = ?status.code(),
            state = ?state
        );

        Ok(state)
    }
}
