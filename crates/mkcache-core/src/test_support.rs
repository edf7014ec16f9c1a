//! In-memory collaborators for decision-engine tests.

use std::cell::Cell;
use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, TimeZone, Utc};

use crate::power::{PowerError, PowerOracle, PowerState};
use crate::repos::{RepoError, RepoExpiry, RepoId, RepoSet, SyncReport};
use crate::state::{StateError, StateStore};

pub fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap()
}

pub fn set(ids: &[&str]) -> BTreeSet<RepoId> {
    ids.iter().map(|id| RepoId::from(*id)).collect()
}

pub struct FixedPower {
    state: Option<PowerState>,
    probes: Cell<u32>,
}

impl FixedPower {
    pub fn new(state: PowerState) -> Self {
        Self {
            state: Some(state),
            probes: Cell::new(0),
        }
    }

    /// Every probe fails.
    pub fn failing() -> Self {
        Self {
            state: None,
            probes: Cell::new(0),
        }
    }

    pub fn probes(&self) -> u32 {
        self.probes.get()
    }
}

impl PowerOracle for FixedPower {
    fn power_state(&self) -> Result<PowerState, PowerError> {
        self.probes.set(self.probes.get() + 1);
        self.state.ok_or_else(|| PowerError::ProbeFailed {
            command: "fake".to_string(),
            source: std::io::Error::other("probe failed"),
        })
    }
}

pub struct FakeState {
    pub last: Option<DateTime<Utc>>,
    pub records: u32,
    pub reads: Cell<u32>,
    fail: bool,
}

impl FakeState {
    pub fn never() -> Self {
        Self {
            last: None,
            records: 0,
            reads: Cell::new(0),
            fail: false,
        }
    }

    pub fn recorded(at: DateTime<Utc>) -> Self {
        Self {
            last: Some(at),
            ..Self::never()
        }
    }

    /// Every read and write fails.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::never()
        }
    }

    fn error(&self) -> StateError {
        StateError::Corrupt {
            path: "fake-state.json".into(),
            message: "unreadable".to_string(),
        }
    }
}

impl StateStore for FakeState {
    fn last_makecache(&self) -> Result<Option<DateTime<Utc>>, StateError> {
        self.reads.set(self.reads.get() + 1);
        if self.fail {
            return Err(self.error());
        }
        Ok(self.last)
    }

    fn record_makecache(&mut self, at: DateTime<Utc>) -> Result<(), StateError> {
        if self.fail {
            return Err(self.error());
        }
        self.last = Some(at);
        self.records += 1;
        Ok(())
    }
}

pub struct FakeRepos {
    pub expiries: BTreeMap<RepoId, RepoExpiry>,
    pub marked: Vec<RepoId>,
    pub max_mirror_tries: Option<u32>,
    pub syncs: u32,
    pub fail_sync: bool,
}

impl FakeRepos {
    pub fn new(repos: &[(&str, RepoExpiry)]) -> Self {
        Self {
            expiries: repos
                .iter()
                .map(|(id, expiry)| (RepoId::from(*id), *expiry))
                .collect(),
            marked: Vec::new(),
            max_mirror_tries: None,
            syncs: 0,
            fail_sync: false,
        }
    }
}

impl RepoSet for FakeRepos {
    fn enabled_repos(&self) -> Vec<RepoId> {
        self.expiries.keys().cloned().collect()
    }

    fn metadata_expire_in(&self, repo: &RepoId, _now: DateTime<Utc>) -> RepoExpiry {
        self.expiries
            .get(repo)
            .copied()
            .unwrap_or(RepoExpiry::UNCACHED)
    }

    fn mark_metadata_expired(&mut self, repo: &RepoId) {
        self.marked.push(repo.clone());
    }

    fn set_max_mirror_tries(&mut self, tries: u32) {
        self.max_mirror_tries = Some(tries);
    }

    fn sync_all(&mut self) -> Result<SyncReport, RepoError> {
        self.syncs += 1;
        if self.fail_sync {
            return Err(RepoError::SyncFailed {
                repo_id: "fake".to_string(),
                message: "mirror unreachable".to_string(),
            });
        }
        Ok(SyncReport {
            synced: std::mem::take(&mut self.marked),
        })
    }
}
