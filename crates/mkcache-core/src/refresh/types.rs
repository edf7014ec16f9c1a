use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

use crate::repos::{RepoId, SyncReport};

/// What started this invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TriggerMode {
    /// Run directly by a user.
    Manual,
    /// Run by the periodic systemd timer.
    TimerInvoked,
}

impl TriggerMode {
    /// `timer` selects [`TriggerMode::TimerInvoked`]; anything else, or nothing, is manual.
    pub fn from_arg(arg: Option<&str>) -> Self {
        match arg {
            Some("timer") => Self::TimerInvoked,
            _ => Self::Manual,
        }
    }

    pub fn is_timer(&self) -> bool {
        matches!(self, Self::TimerInvoked)
    }
}

/// Why a timer-triggered invocation stopped before refreshing anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AbortReason {
    OnBattery,
    Disabled,
    RecentlyRefreshed,
}

impl AbortReason {
    /// Short machine-readable tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OnBattery => "battery",
            Self::Disabled => "disabled",
            Self::RecentlyRefreshed => "recent",
        }
    }

    /// User-facing explanation.
    pub fn message(&self) -> &'static str {
        match self {
            Self::OnBattery => "Metadata timer caching disabled when running on a battery.",
            Self::Disabled => "Metadata timer caching disabled.",
            Self::RecentlyRefreshed => "Metadata cache refreshed recently.",
        }
    }
}

impl fmt::Display for AbortReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How one repository is treated during classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepoAction {
    /// Missing or expired metadata.
    RefreshExpired,
    /// Still fresh, but would expire before the next timer run.
    RefreshPreemptive,
    /// Left to expire on its own schedule.
    Keep,
}

impl RepoAction {
    pub fn needs_refresh(&self) -> bool {
        !matches!(self, Self::Keep)
    }
}

/// Outcome of the decision engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Abort(AbortReason),
    /// Proceed, refreshing exactly these repositories.
    Proceed(BTreeSet<RepoId>),
}

impl Decision {
    pub fn is_abort(&self) -> bool {
        matches!(self, Self::Abort(_))
    }
}

/// Result of a whole makecache invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MakecacheOutcome {
    /// Marked repositories were synced.
    Created(SyncReport),
    /// A timer gate stopped the run.
    Skipped(AbortReason),
}

impl MakecacheOutcome {
    /// The invocation's boolean success.
    pub fn succeeded(&self) -> bool {
        matches!(self, Self::Created(_))
    }
}
