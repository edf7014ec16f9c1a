//! Built-in fallback values for unset config keys.

/// Seconds between timer-triggered refreshes (3 hours).
pub const DEFAULT_METADATA_TIMER_SYNC: i64 = 3 * 60 * 60;

/// Seconds a repository's metadata stays fresh (48 hours).
pub const DEFAULT_METADATA_EXPIRE: i64 = 48 * 60 * 60;

/// `metadata_expire` value meaning "never expires".
pub const METADATA_NEVER_EXPIRES: i64 = -1;

/// Helper that reports AC power through its exit status.
pub const DEFAULT_ON_AC_POWER_COMMAND: &str = "on_ac_power";

pub(crate) fn default_true() -> bool {
    true
}
