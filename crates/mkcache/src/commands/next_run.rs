use chrono::Utc;
use clap::ArgMatches;
use serde::Serialize;
use tracing::info;

use mkcache_core::timers::{MAKECACHE_TIMER_UNIT, SystemctlTimers, next_scheduled_run_in};

use super::helpers::format_duration;

#[derive(Serialize)]
struct NextRunResponse {
    unit: &'static str,
    /// Seconds until the next run; `None` when the timer could not be read.
    seconds: Option<i64>,
}

/// Advisory: prints "unknown" instead of failing when timer data is unavailable.
pub(crate) fn handle_next_run_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = matches.get_flag("json");

    let source = SystemctlTimers::new();
    let seconds = next_scheduled_run_in(&source, MAKECACHE_TIMER_UNIT, Utc::now())
        .map(|remaining| remaining.num_seconds());

    info!(
        event = "cli.next_run_completed",
        unit = MAKECACHE_TIMER_UNIT,
        seconds = ?seconds
    );

    if json_output {
        let response = NextRunResponse {
            unit: MAKECACHE_TIMER_UNIT,
            seconds,
        };
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    match seconds {
        Some(secs) if secs < 0 => println!(
            "{}: next run {}",
            MAKECACHE_TIMER_UNIT,
            format_duration(secs)
        ),
        Some(secs) => println!(
            "{}: next run in {}",
            MAKECACHE_TIMER_UNIT,
            format_duration(secs)
        ),
        None => println!("{}: next run unknown", MAKECACHE_TIMER_UNIT),
    }
    Ok(())
}
