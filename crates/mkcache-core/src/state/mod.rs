//! Persisted "last makecache" timestamp.
//!
//! The timestamp is the only state shared between invocations. It is read
//! during the timer gates and written after classification; the two steps are
//! not atomic with respect to a concurrent invocation.

pub mod errors;
pub mod file_store;

use chrono::{DateTime, TimeDelta, Utc};

pub use errors::StateError;
pub use file_store::{FileStateStore, SchedulerState};

/// Storage for the time of the last timer-triggered makecache.
pub trait StateStore {
    /// When the last timer-triggered makecache happened, if ever.
    fn last_makecache(&self) -> Result<Option<DateTime<Utc>>, StateError>;

    /// Record that a timer-triggered makecache happened at `at`.
    fn record_makecache(&mut self, at: DateTime<Utc>) -> Result<(), StateError>;

    /// Time elapsed between the recorded makecache and `now`.
    ///
    /// Negative if the recorded time lies in the future (clock changes).
    fn since_last_makecache(&self, now: DateTime<Utc>) -> Result<Option<TimeDelta>, StateError> {
        Ok(self.last_makecache()?.map(|last| now - last))
    }
}
