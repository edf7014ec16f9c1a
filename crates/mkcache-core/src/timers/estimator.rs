//! Estimate how long until the makecache timer fires next.

use chrono::{DateTime, TimeDelta, Utc};
use tracing::{debug, warn};

use super::parser::parse_timer_listing;
use super::source::TimerSource;

/// Time from `now` until the next scheduled run of `unit_name`.
///
/// Advisory only: every failure (command missing, non-zero exit, malformed
/// listing, unparseable time) is logged and reported as `None`. The result can
/// be negative when the listing is stale.
pub fn next_scheduled_run_in(
    source: &dyn TimerSource,
    unit_name: &str,
    now: DateTime<Utc>,
) -> Option<TimeDelta> {
    let listing = match source.list_timers() {
        Ok(listing) => listing,
        Err(e) => {
            debug!(
                event = "core.timers.listing_unavailable",
                unit = unit_name,
                error = %e
            );
            return None;
        }
    };

    match parse_timer_listing(&listing, unit_name) {
        Ok(Some(next_at)) => {
            let remaining = next_at - now;
            debug!(
                event = "core.timers.next_run_estimated",
                unit = unit_name,
                next_at = %next_at,
                seconds = remaining.num_seconds()
            );
            Some(remaining)
        }
        Ok(None) => {
            debug!(event = "core.timers.unit_not_listed", unit = unit_name);
            None
        }
        Err(e) => {
            warn!(
                event = "core.timers.listing_parse_failed",
                unit = unit_name,
                error = %e
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timers::errors::TimerError;
    use chrono::TimeZone;

    const UNIT: &str = "mkcache-makecache.timer";

    /// Returns the listing, or a non-zero exit when `None`.
    struct CannedTimers(Option<String>);

    impl TimerSource for CannedTimers {
        fn list_timers(&self) -> Result<String, TimerError> {
            self.0.clone().ok_or_else(|| TimerError::CommandFailed {
                command: "systemctl list-timers".to_string(),
                code: Some(1),
            })
        }
    }

    fn listing_with(next: &str, unit: &str) -> String {
        format!(
            "{:<28}{:<5}{:<28}{:<7}{:<30}{}\n{:<28}{:<5}{:<28}{:<7}{:<30}{}\n",
            "NEXT", "LEFT", "LAST", "PASSED", "UNIT", "ACTIVATES",
            next, "1h", "n/a", "n/a", unit, "mkcache-makecache.service"
        )
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_returns_time_until_next_run() {
        let source = CannedTimers(Some(listing_with("Mon 2026-10-19 13:30:00 UTC", UNIT)));
        assert_eq!(
            next_scheduled_run_in(&source, UNIT, now()),
            Some(TimeDelta::minutes(90))
        );
    }

    #[test]
    fn test_stale_listing_gives_negative_duration() {
        let source = CannedTimers(Some(listing_with("Mon 2026-10-19 11:59:00 UTC", UNIT)));
        assert_eq!(
            next_scheduled_run_in(&source, UNIT, now()),
            Some(TimeDelta::seconds(-60))
        );
    }

    #[test]
    fn test_command_failure_is_none() {
        let source = CannedTimers(None);
        assert_eq!(next_scheduled_run_in(&source, UNIT, now()), None);
    }

    #[test]
    fn test_unlisted_unit_is_none() {
        let source = CannedTimers(Some(listing_with("Mon 2026-10-19 13:30:00 UTC", "x.timer")));
        assert_eq!(next_scheduled_run_in(&source, UNIT, now()), None);
    }

    #[test]
    fn test_malformed_listing_is_none() {
        let source = CannedTimers(Some("Failed to connect to bus\n".to_string()));
        assert_eq!(next_scheduled_run_in(&source, UNIT, now()), None);
    }

    #[test]
    fn test_bad_time_is_none() {
        let source = CannedTimers(Some(listing_with("n/a", UNIT)));
        assert_eq!(next_scheduled_run_in(&source, UNIT, now()), None);
    }
}
