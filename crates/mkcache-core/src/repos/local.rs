//! Repository set backed by the config file and a local metadata cache.
//!
//! Each repository keeps a `repomd.json` stamp under `<cachedir>/<id>/`
//! recording when its metadata was last synced. Syncing runs the repository's
//! `sync_command`, if configured, and then rewrites the stamp.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use chrono::{DateTime, Utc};
use mkcache_config::{METADATA_NEVER_EXPIRES, MkcacheConfig};
use mkcache_paths::MkcachePaths;
use tracing::{debug, error, info, warn};

use super::RepoSet;
use super::errors::RepoError;
use super::types::{MetadataStamp, RepoExpiry, RepoId, SyncReport};

#[derive(Debug, Clone)]
struct LocalRepo {
    id: RepoId,
    metadata_expire: i64,
    sync_command: Option<String>,
    expired: bool,
}

#[derive(Debug, Clone)]
pub struct LocalRepoSet {
    cache_dir: PathBuf,
    repos: Vec<LocalRepo>,
    max_mirror_tries: Option<u32>,
}

impl LocalRepoSet {
    /// Build the set of enabled repositories from `config`.
    pub fn from_config(config: &MkcacheConfig, cache_dir: PathBuf) -> Self {
        let repos = config
            .repos
            .iter()
            .filter(|(_, repo)| repo.enabled)
            .map(|(id, repo)| LocalRepo {
                id: RepoId::new(id.as_str()),
                metadata_expire: repo.metadata_expire(&config.main),
                sync_command: repo.sync_command.clone(),
                expired: false,
            })
            .collect();

        Self {
            cache_dir,
            repos,
            max_mirror_tries: None,
        }
    }

    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }

    pub fn max_mirror_tries(&self) -> Option<u32> {
        self.max_mirror_tries
    }

    pub fn is_marked_expired(&self, repo: &RepoId) -> bool {
        self.find(repo).is_some_and(|r| r.expired)
    }

    fn find(&self, repo: &RepoId) -> Option<&LocalRepo> {
        self.repos.iter().find(|r| &r.id == repo)
    }

    /// Read a repository's metadata stamp. Missing or unreadable stamps are `None`.
    pub fn read_stamp(&self, repo: &RepoId) -> Option<MetadataStamp> {
        let path = MkcachePaths::repo_metadata_stamp(&self.cache_dir, repo.as_str());
        let content = match fs::read_to_string(&path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
            Err(e) => {
                warn!(
                    event = "core.repos.stamp_read_failed",
                    repo = %repo,
                    path = %path.display(),
                    error = %e
                );
                return None;
            }
        };
        match serde_json::from_str(&content) {
            Ok(stamp) => Some(stamp),
            Err(e) => {
                warn!(
                    event = "core.repos.stamp_parse_failed",
                    repo = %repo,
                    path = %path.display(),
                    error = %e,
                    "Treating repository as uncached"
                );
                None
            }
        }
    }
}

impl RepoSet for LocalRepoSet {
    fn enabled_repos(&self) -> Vec<RepoId> {
        self.repos.iter().map(|r| r.id.clone()).collect()
    }

    fn metadata_expire_in(&self, repo: &RepoId, now: DateTime<Utc>) -> RepoExpiry {
        let Some(local) = self.find(repo) else {
            warn!(event = "core.repos.unknown_repo", repo = %repo);
            return RepoExpiry::UNCACHED;
        };
        let Some(stamp) = self.read_stamp(repo) else {
            return RepoExpiry::UNCACHED;
        };
        if local.metadata_expire == METADATA_NEVER_EXPIRES {
            return RepoExpiry::never_expires();
        }

        let age = (now - stamp.synced_at).num_seconds();
        RepoExpiry::cached(local.metadata_expire.saturating_sub(age))
    }

    fn mark_metadata_expired(&mut self, repo: &RepoId) {
        match self.repos.iter_mut().find(|r| &r.id == repo) {
            Some(local) => local.expired = true,
            None => warn!(event = "core.repos.unknown_repo", repo = %repo),
        }
    }

    fn set_max_mirror_tries(&mut self, tries: u32) {
        self.max_mirror_tries = Some(tries);
    }

    fn sync_all(&mut self) -> Result<SyncReport, RepoError> {
        let cache_dir = self.cache_dir.clone();
        let max_mirror_tries = self.max_mirror_tries;
        let mut report = SyncReport::default();

        info!(
            event = "core.repos.sync_started",
            count = self.repos.iter().filter(|r| r.expired).count(),
            max_mirror_tries = ?max_mirror_tries
        );

        for repo in self.repos.iter_mut().filter(|r| r.expired) {
            let repo_dir = MkcachePaths::repo_cache_dir(&cache_dir, repo.id.as_str());
            fs::create_dir_all(&repo_dir).map_err(|e| RepoError::StampWriteFailed {
                path: repo_dir.clone(),
                source: e,
            })?;

            if let Some(ref command) = repo.sync_command {
                run_sync_command(&repo.id, command, &repo_dir, max_mirror_tries)?;
            }

            let stamp = MetadataStamp {
                synced_at: Utc::now(),
                max_mirror_tries,
            };
            write_stamp(&cache_dir, &repo.id, &stamp)?;

            repo.expired = false;
            debug!(event = "core.repos.sync_repo_completed", repo = %repo.id);
            report.synced.push(repo.id.clone());
        }

        info!(
            event = "core.repos.sync_completed",
            synced = report.synced.len()
        );
        Ok(report)
    }
}

/// Run a repository's sync command.
///
/// The command string is split on whitespace; no shell is involved.
fn run_sync_command(
    repo: &RepoId,
    command: &str,
    repo_dir: &Path,
    max_mirror_tries: Option<u32>,
) -> Result<(), RepoError> {
    let mut parts = command.split_whitespace();
    let program = parts.next().ok_or_else(|| RepoError::SyncFailed {
        repo_id: repo.to_string(),
        message: "sync_command is empty".to_string(),
    })?;

    debug!(
        event = "core.repos.sync_command_started",
        repo = %repo,
        command = command
    );

    let mut cmd = Command::new(program);
    cmd.args(parts)
        .env("MKCACHE_REPO_ID", repo.as_str())
        .env("MKCACHE_CACHE_DIR", repo_dir);
    if let Some(tries) = max_mirror_tries {
        cmd.env("MKCACHE_MAX_MIRROR_TRIES", tries.to_string());
    }

    let output = cmd.output().map_err(|e| RepoError::SyncFailed {
        repo_id: repo.to_string(),
        message: format!("Failed to execute '{}': {}", program, e),
    })?;

    if output.status.success() {
        Ok(())
    } else {
        let stderr = String::from_utf8_lossy(&output.stderr);
        error!(
            event = "core.repos.sync_command_failed",
            repo = %repo,
            exit_code = ?output.status.code(),
            stderr = %stderr.trim()
        );
        Err(RepoError::SyncFailed {
            repo_id: repo.to_string(),
            message: format!("'{}' exited with {}: {}", command, output.status, stderr.trim()),
        })
    }
}

fn write_stamp(cache_dir: &Path, repo: &RepoId, stamp: &MetadataStamp) -> Result<(), RepoError> {
    let path = MkcachePaths::repo_metadata_stamp(cache_dir, repo.as_str());
    let write_failed = |source: std::io::Error| RepoError::StampWriteFailed {
        path: path.clone(),
        source,
    };

    let content = serde_json::to_string_pretty(stamp)
        .map_err(|e| write_failed(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))?;
    let temp_file = path.with_extension("json.tmp");
    if let Err(e) = fs::write(&temp_file, &content) {
        let _ = fs::remove_file(&temp_file);
        return Err(write_failed(e));
    }
    if let Err(e) = fs::rename(&temp_file, &path) {
        let _ = fs::remove_file(&temp_file);
        return Err(write_failed(e));
    }
    Ok(())
}
