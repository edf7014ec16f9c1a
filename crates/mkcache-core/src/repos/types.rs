use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Repository identifier (the `<id>` in `[repos.<id>]`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RepoId(String);

impl RepoId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RepoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RepoId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl AsRef<str> for RepoId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// How fresh a repository's cached metadata is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RepoExpiry {
    /// Whether any metadata is cached at all.
    pub cached: bool,
    /// Seconds until the cached metadata expires. `<= 0` means already expired.
    pub expires_in: i64,
}

impl RepoExpiry {
    pub const UNCACHED: Self = Self {
        cached: false,
        expires_in: 0,
    };

    pub fn cached(expires_in: i64) -> Self {
        Self {
            cached: true,
            expires_in,
        }
    }

    /// Cached metadata configured to never expire.
    pub fn never_expires() -> Self {
        Self::cached(i64::MAX)
    }

    /// Missing or expired metadata that must be refreshed unconditionally.
    pub fn is_stale(&self) -> bool {
        !self.cached || self.expires_in <= 0
    }
}

/// Contents of `<cachedir>/<id>/repomd.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataStamp {
    pub synced_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_mirror_tries: Option<u32>,
}

/// Result of one batched sync.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SyncReport {
    pub synced: Vec<RepoId>,
}
