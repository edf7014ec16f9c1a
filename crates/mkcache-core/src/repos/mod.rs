//! Repository set: metadata expiry queries and the batched sync.

pub mod errors;
pub mod local;
pub mod types;

use chrono::{DateTime, Utc};

pub use errors::RepoError;
pub use local::LocalRepoSet;
pub use types::{MetadataStamp, RepoExpiry, RepoId, SyncReport};

/// The enabled repositories the scheduler classifies and refreshes.
pub trait RepoSet {
    /// Enabled repository ids, in a stable order.
    fn enabled_repos(&self) -> Vec<RepoId>;

    /// Freshness of `repo`'s cached metadata as of `now`.
    fn metadata_expire_in(&self, repo: &RepoId, now: DateTime<Utc>) -> RepoExpiry;

    /// Force `repo` to be fetched by the next [`RepoSet::sync_all`].
    fn mark_metadata_expired(&mut self, repo: &RepoId);

    /// Cap mirror attempts per repository for the rest of this run.
    fn set_max_mirror_tries(&mut self, tries: u32);

    /// Fetch metadata for every repository marked expired, as one batch.
    fn sync_all(&mut self) -> Result<SyncReport, RepoError>;
}
