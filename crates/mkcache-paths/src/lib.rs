use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum PathError {
    #[error("home directory not found, set $HOME environment variable")]
    HomeNotFound,
}

/// Centralized path construction for the `~/.mkcache/` directory layout.
///
/// Single source of truth for every path under `~/.mkcache/`. Use `resolve()` in
/// production code and `from_dir()` in tests.
#[derive(Debug, Clone)]
pub struct MkcachePaths {
    base_dir: PathBuf,
}

impl MkcachePaths {
    /// Resolve paths from the user's home directory (`~/.mkcache`).
    pub fn resolve() -> Result<Self, PathError> {
        let home = dirs::home_dir().ok_or(PathError::HomeNotFound)?;
        Ok(Self {
            base_dir: home.join(".mkcache"),
        })
    }

    /// Create paths from an explicit base directory. Use in tests.
    pub fn from_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// The base `~/.mkcache` directory.
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    // --- Top-level files ---

    pub fn user_config(&self) -> PathBuf {
        self.base_dir.join("config.toml")
    }

    /// Persisted scheduler state (last timer-triggered makecache).
    pub fn state_file(&self) -> PathBuf {
        self.base_dir.join("state.json")
    }

    // --- Metadata cache ---

    pub fn cache_dir(&self) -> PathBuf {
        self.base_dir.join("cache")
    }

    /// Per-repository cache directory under an arbitrary cache root.
    ///
    /// Repository ids may not contain `/`, but sanitize anyway so a bad id can
    /// never escape the cache root.
    pub fn repo_cache_dir(cache_dir: &Path, repo_id: &str) -> PathBuf {
        let safe_id = repo_id.replace(['/', '\\'], "_");
        cache_dir.join(safe_id)
    }

    /// Metadata stamp written after a successful repository sync.
    pub fn repo_metadata_stamp(cache_dir: &Path, repo_id: &str) -> PathBuf {
        Self::repo_cache_dir(cache_dir, repo_id).join("repomd.json")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_paths() -> MkcachePaths {
        MkcachePaths::from_dir(PathBuf::from("/home/user/.mkcache"))
    }

    #[test]
    fn test_base_dir() {
        assert_eq!(test_paths().base_dir(), Path::new("/home/user/.mkcache"));
    }

    #[test]
    fn test_user_config() {
        assert_eq!(
            test_paths().user_config(),
            PathBuf::from("/home/user/.mkcache/config.toml")
        );
    }

    #[test]
    fn test_state_file() {
        assert_eq!(
            test_paths().state_file(),
            PathBuf::from("/home/user/.mkcache/state.json")
        );
    }

    #[test]
    fn test_cache_dir() {
        assert_eq!(
            test_paths().cache_dir(),
            PathBuf::from("/home/user/.mkcache/cache")
        );
    }

    #[test]
    fn test_repo_cache_dir() {
        assert_eq!(
            MkcachePaths::repo_cache_dir(&test_paths().cache_dir(), "fedora"),
            PathBuf::from("/home/user/.mkcache/cache/fedora")
        );
    }

    #[test]
    fn test_repo_cache_dir_sanitizes_separators() {
        assert_eq!(
            MkcachePaths::repo_cache_dir(Path::new("/var/cache/mkcache"), "../etc/x"),
            PathBuf::from("/var/cache/mkcache/.._etc_x")
        );
    }

    #[test]
    fn test_repo_metadata_stamp() {
        assert_eq!(
            MkcachePaths::repo_metadata_stamp(Path::new("/var/cache/mkcache"), "updates"),
            PathBuf::from("/var/cache/mkcache/updates/repomd.json")
        );
    }

    #[test]
    fn test_path_error_message() {
        let err = PathError::HomeNotFound;
        let msg = err.to_string();
        assert!(msg.contains("home directory not found"));
        assert!(msg.contains("$HOME"));
    }
}
