//! Timer-status parsing and next-run estimation.

pub mod errors;
pub mod estimator;
pub mod parser;
pub mod source;

pub use errors::TimerError;
pub use estimator::next_scheduled_run_in;
pub use parser::{ColumnSpan, TimerColumns, parse_timer_listing, parse_timer_time};
pub use source::{SystemctlTimers, TimerSource};

/// Systemd timer unit that triggers `mkcache makecache timer`.
pub const MAKECACHE_TIMER_UNIT: &str = "mkcache-makecache.timer";
