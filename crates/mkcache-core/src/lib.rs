//! mkcache-core: conditional repository metadata refresh scheduling
//!
//! Decides, once per invocation, which repositories' metadata must be
//! re-fetched and whether a timer-triggered run should happen at all.
//!
//! # Main Entry Points
//!
//! - [`refresh`] - Timer gates, per-repository classification, `makecache`
//! - [`timers`] - `systemctl list-timers` parsing and next-run estimation
//! - [`power`], [`state`], [`repos`] - Collaborators the engine consults

pub mod errors;
pub mod events;
pub mod logging;
pub mod power;
pub mod refresh;
pub mod repos;
pub mod state;
pub mod timers;

#[cfg(test)]
pub(crate) mod test_support;

pub use mkcache_config::{ConfigError, MkcacheConfig};
pub use power::{OnAcPowerCommand, PowerOracle, PowerState};
pub use refresh::{AbortReason, Decision, MakecacheOutcome, RefreshError, TriggerMode};
pub use repos::{LocalRepoSet, RepoExpiry, RepoId, RepoSet};
pub use state::{FileStateStore, StateStore};
pub use timers::{MAKECACHE_TIMER_UNIT, SystemctlTimers, TimerSource};

// Re-export logging initialization
pub use logging::init_logging;
