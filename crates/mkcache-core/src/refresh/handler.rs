//! The makecache operation: decide, then sync in one batch.

use chrono::{DateTime, Utc};
use tracing::{debug, error, info};

use super::engine::decide;
use super::errors::RefreshError;
use super::types::{Decision, MakecacheOutcome, TriggerMode};
use crate::power::PowerOracle;
use crate::repos::RepoSet;
use crate::state::StateStore;

/// Refresh the metadata cache.
///
/// Returns [`MakecacheOutcome::Created`] once the marked repositories have
/// been synced and [`MakecacheOutcome::Skipped`] when a timer gate aborted the
/// run. [`MakecacheOutcome::succeeded`] gives the plain true/false result.
///
/// # Errors
///
/// [`RefreshError::NoEnabledRepos`] if nothing is enabled; otherwise any
/// collaborator failure from the decision or the sync.
pub fn makecache(
    mode: TriggerMode,
    period_secs: i64,
    now: DateTime<Utc>,
    power: &dyn PowerOracle,
    state: &mut dyn StateStore,
    repos: &mut dyn RepoSet,
) -> Result<MakecacheOutcome, RefreshError> {
    if repos.enabled_repos().is_empty() {
        error!(event = "core.refresh.no_enabled_repos");
        return Err(RefreshError::NoEnabledRepos);
    }

    debug!(
        event = "core.refresh.makecache_started",
        mode = ?mode,
        period_secs = period_secs,
        "Making cache files for all metadata files."
    );

    let refresh = match decide(mode, period_secs, now, power, state, repos)? {
        Decision::Abort(reason) => return Ok(MakecacheOutcome::Skipped(reason)),
        Decision::Proceed(refresh) => refresh,
    };

    let report = repos.sync_all()?;

    info!(
        event = "core.refresh.makecache_completed",
        marked = refresh.len(),
        synced = report.synced.len(),
        "Metadata cache created."
    );
    Ok(MakecacheOutcome::Created(report))
}
