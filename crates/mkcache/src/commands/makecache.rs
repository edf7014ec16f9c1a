use chrono::Utc;
use clap::ArgMatches;
use tracing::{error, info};

use mkcache_core::errors::MkcacheError;
use mkcache_core::events;
use mkcache_core::refresh::{self, MakecacheOutcome, TriggerMode};
use mkcache_core::{FileStateStore, LocalRepoSet, OnAcPowerCommand};

use super::helpers::{cache_dir, load_config, resolve_paths};

pub(crate) fn handle_makecache_command(
    global_matches: &ArgMatches,
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let mode = TriggerMode::from_arg(matches.get_one::<String>("mode").map(|s| s.as_str()));

    let config = load_config(global_matches)?;
    let paths = resolve_paths()?;
    let period_secs = config.main.metadata_timer_sync();

    info!(
        event = "cli.makecache_started",
        mode = ?mode,
        period_secs = period_secs
    );

    let power = OnAcPowerCommand::new(config.main.on_ac_power_command());
    let mut state = FileStateStore::new(paths.state_file());
    let mut repos = LocalRepoSet::from_config(&config, cache_dir(&config, &paths));

    match refresh::makecache(mode, period_secs, Utc::now(), &power, &mut state, &mut repos) {
        Ok(MakecacheOutcome::Created(report)) => {
            println!("Metadata cache created.");
            if !report.synced.is_empty() {
                let synced: Vec<&str> = report.synced.iter().map(|id| id.as_str()).collect();
                println!("Refreshed: {}", synced.join(", "));
            }
            info!(
                event = "cli.makecache_completed",
                synced = report.synced.len()
            );
            Ok(())
        }
        Ok(MakecacheOutcome::Skipped(reason)) => {
            eprintln!("{}", reason.message());
            info!(event = "cli.makecache_skipped", reason = reason.as_str());
            Err(format!("makecache skipped: {}", reason).into())
        }
        Err(e) => {
            eprintln!("❌ Failed to make cache: {}", e);
            error!(
                event = "cli.makecache_failed",
                error = %e,
                error_code = e.error_code()
            );
            events::log_app_error(&e);
            Err(e.into())
        }
    }
}
