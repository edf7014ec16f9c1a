//! Refresh decision engine.
//!
//! Decides, once per invocation, whether to proceed and which repositories to
//! force-refresh. Pure decision logic over injected collaborators: nothing here
//! retries, and collaborator errors abort the invocation.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use super::errors::RefreshError;
use super::types::{AbortReason, Decision, RepoAction, TriggerMode};
use crate::power::PowerOracle;
use crate::repos::{RepoExpiry, RepoSet};
use crate::state::StateStore;

/// Mirror attempts per repository during timer-triggered runs.
pub const TIMER_MAX_MIRROR_TRIES: u32 = 1;

/// Gates applied to timer-triggered runs, in evaluation order.
/// The first one that trips aborts the run.
pub const TIMER_GATES: [AbortReason; 3] = [
    AbortReason::OnBattery,
    AbortReason::Disabled,
    AbortReason::RecentlyRefreshed,
];

/// Evaluate one gate. Collaborators are only consulted by the gate that needs them.
fn gate_trips(
    gate: AbortReason,
    period_secs: i64,
    now: DateTime<Utc>,
    power: &dyn PowerOracle,
    state: &dyn StateStore,
) -> Result<bool, RefreshError> {
    let tripped = match gate {
        AbortReason::OnBattery => power.power_state()?.is_on_battery(),
        AbortReason::Disabled => period_secs <= 0,
        AbortReason::RecentlyRefreshed => state
            .since_last_makecache(now)?
            .is_some_and(|since| since.num_seconds() < period_secs),
    };
    Ok(tripped)
}

/// Classify a single repository.
///
/// Stale metadata is always refreshed. On timer runs, metadata that would
/// expire before the next run (`expires_in < period`) is refreshed now too.
pub fn classify_repo(mode: TriggerMode, period_secs: i64, expiry: RepoExpiry) -> RepoAction {
    if expiry.is_stale() {
        RepoAction::RefreshExpired
    } else if mode.is_timer() && expiry.expires_in < period_secs {
        RepoAction::RefreshPreemptive
    } else {
        RepoAction::Keep
    }
}

/// Decide what this invocation does.
///
/// Timer runs pass through [`TIMER_GATES`] first, then get their mirror tries
/// capped. Every enabled repository is classified and those needing a refresh
/// are marked expired in `repos`. A timer run that was not aborted records
/// `now` as the last makecache, whether or not anything needed refreshing.
///
/// No network activity happens here; the caller syncs the marked repositories.
pub fn decide(
    mode: TriggerMode,
    period_secs: i64,
    now: DateTime<Utc>,
    power: &dyn PowerOracle,
    state: &mut dyn StateStore,
    repos: &mut dyn RepoSet,
) -> Result<Decision, RefreshError> {
    if mode.is_timer() {
        for gate in TIMER_GATES {
            if gate_trips(gate, period_secs, now, power, &*state)? {
                info!(
                    event = "core.refresh.timer_aborted",
                    reason = gate.as_str(),
                    period_secs = period_secs,
                    "{}",
                    gate.message()
                );
                return Ok(Decision::Abort(gate));
            }
        }
        repos.set_max_mirror_tries(TIMER_MAX_MIRROR_TRIES);
    }

    let mut refresh = BTreeSet::new();
    for repo in repos.enabled_repos() {
        let expiry = repos.metadata_expire_in(&repo, now);
        match classify_repo(mode, period_secs, expiry) {
            RepoAction::RefreshExpired => {
                debug!(
                    event = "core.refresh.repo_expired",
                    repo = %repo,
                    cached = expiry.cached,
                    "{}: has expired and will be refreshed.",
                    repo
                );
            }
            RepoAction::RefreshPreemptive => {
                debug!(
                    event = "core.refresh.repo_preemptive",
                    repo = %repo,
                    expires_in = expiry.expires_in,
                    "{}: metadata will expire after {} seconds and will be refreshed now",
                    repo,
                    expiry.expires_in
                );
            }
            RepoAction::Keep => {
                debug!(
                    event = "core.refresh.repo_kept",
                    repo = %repo,
                    expires_in = expiry.expires_in,
                    "{}: will expire after {} seconds.",
                    repo,
                    expiry.expires_in
                );
                continue;
            }
        }
        repos.mark_metadata_expired(&repo);
        refresh.insert(repo);
    }

    if mode.is_timer() {
        state.record_makecache(now)?;
    }

    debug!(
        event = "core.refresh.decided",
        mode = ?mode,
        refresh_count = refresh.len()
    );
    Ok(Decision::Proceed(refresh))
}
