//! Configuration loading and merging logic.
//!
//! # Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.mkcache/config.toml`
//! 3. **Explicit config** - the file passed with `--config` (highest priority)

use crate::errors::ConfigError;
use crate::types::{MainConfig, MkcacheConfig};
use crate::validation::validate_config;
use mkcache_paths::MkcachePaths;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Load configuration from the hierarchy of config files.
///
/// # Errors
///
/// Returns an error if a file fails to parse, if validation fails, or if
/// `explicit` names a file that does not exist. A missing user config is not
/// an error.
pub fn load_hierarchy(explicit: Option<&Path>) -> Result<MkcacheConfig, ConfigError> {
    let paths = MkcachePaths::resolve()?;
    load_hierarchy_from(&paths, explicit)
}

/// Same as [`load_hierarchy`], rooted at an explicit `~/.mkcache` layout.
pub fn load_hierarchy_from(
    paths: &MkcachePaths,
    explicit: Option<&Path>,
) -> Result<MkcacheConfig, ConfigError> {
    let mut config = MkcacheConfig::default();

    if let Some(user_config) = load_config_file(&paths.user_config())? {
        config = merge_configs(config, user_config);
    }

    if let Some(path) = explicit {
        let explicit_config = load_config_file(path)?.ok_or_else(|| ConfigError::ConfigNotFound {
            path: path.to_path_buf(),
        })?;
        config = merge_configs(config, explicit_config);
    }

    validate_config(&config)?;

    debug!(
        event = "config.load_completed",
        repos = config.repos.len(),
        explicit = ?explicit.map(|p| p.display().to_string())
    );

    Ok(config)
}

/// Load a configuration file. Returns `Ok(None)` when the file does not exist.
fn load_config_file(path: &Path) -> Result<Option<MkcacheConfig>, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(ConfigError::IoError {
                source: std::io::Error::new(e.kind(), format!("'{}': {}", path.display(), e)),
            });
        }
    };

    let config = toml::from_str(&content).map_err(|e| ConfigError::ConfigParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    Ok(Some(config))
}

/// Merge two configurations, with override_config taking precedence.
///
/// `[main]` keys are merged individually. Repository definitions are replaced
/// whole: a `[repos.<id>]` section in the override wins over the base one.
pub fn merge_configs(base: MkcacheConfig, override_config: MkcacheConfig) -> MkcacheConfig {
    MkcacheConfig {
        main: MainConfig::merge(&base.main, &override_config.main),
        repos: {
            let mut merged = base.repos;
            for (key, value) in override_config.repos {
                merged.insert(key, value);
            }
            merged
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RepoConfig;
    use std::path::PathBuf;

    fn write(path: &Path, content: &str) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_missing_user_config_uses_defaults() {
        let temp = tempfile::tempdir().unwrap();
        let paths = MkcachePaths::from_dir(temp.path().join(".mkcache"));

        let config = load_hierarchy_from(&paths, None).unwrap();
        assert_eq!(config.main.metadata_timer_sync(), 10800);
        assert!(config.repos.is_empty());
    }

    #[test]
    fn test_explicit_config_overrides_user_config() {
        let temp = tempfile::tempdir().unwrap();
        let paths = MkcachePaths::from_dir(temp.path().join(".mkcache"));
        write(
            &paths.user_config(),
            r#"
[main]
metadata_timer_sync = 3600
metadata_expire = 7200

[repos.fedora]
metadata_expire = 60

[repos.updates]
"#,
        );
        let explicit = temp.path().join("override.toml");
        write(
            &explicit,
            r#"
[main]
metadata_timer_sync = 0

[repos.fedora]
enabled = false
"#,
        );

        let config = load_hierarchy_from(&paths, Some(&explicit)).unwrap();
        assert_eq!(config.main.metadata_timer_sync(), 0);
        assert_eq!(config.main.metadata_expire(), 7200);
        assert!(!config.repos["fedora"].enabled);
        // Whole-section replacement: the user's override is gone
        assert_eq!(config.repos["fedora"].metadata_expire, None);
        assert!(config.repos.contains_key("updates"));
    }

    #[test]
    fn test_missing_explicit_config_is_error() {
        let temp = tempfile::tempdir().unwrap();
        let paths = MkcachePaths::from_dir(temp.path().join(".mkcache"));
        let missing = temp.path().join("nope.toml");

        let err = load_hierarchy_from(&paths, Some(&missing)).unwrap_err();
        assert!(matches!(err, ConfigError::ConfigNotFound { .. }));
    }

    #[test]
    fn test_parse_error_names_file() {
        let temp = tempfile::tempdir().unwrap();
        let paths = MkcachePaths::from_dir(temp.path().join(".mkcache"));
        write(&paths.user_config(), "[main\nmetadata_expire = ");

        let err = load_hierarchy_from(&paths, None).unwrap_err();
        assert!(matches!(err, ConfigError::ConfigParseError { .. }));
        assert!(err.to_string().contains("config.toml"));
    }

    #[test]
    fn test_validation_runs_after_merge() {
        let temp = tempfile::tempdir().unwrap();
        let paths = MkcachePaths::from_dir(temp.path().join(".mkcache"));
        write(&paths.user_config(), "[main]\nmetadata_expire = -7\n");

        assert!(matches!(
            load_hierarchy_from(&paths, None),
            Err(ConfigError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_load_hierarchy_reads_home() {
        let temp = tempfile::tempdir().unwrap();
        write(
            &temp.path().join(".mkcache").join("config.toml"),
            "[repos.base]\nname = \"Base\"\n",
        );

        let config = temp_env::with_var("HOME", Some(temp.path()), || {
            load_hierarchy(None).unwrap()
        });
        assert_eq!(config.repos["base"].name.as_deref(), Some("Base"));
    }

    #[test]
    fn test_merge_configs_combines_repos() {
        let mut base = MkcacheConfig::default();
        base.repos.insert("a".to_string(), RepoConfig::default());
        let mut over = MkcacheConfig::default();
        over.repos.insert("b".to_string(), RepoConfig::default());
        over.main.cachedir = Some(PathBuf::from("/srv/cache"));

        let merged = merge_configs(base, over);
        assert_eq!(merged.repos.len(), 2);
        assert_eq!(merged.main.cachedir, Some(PathBuf::from("/srv/cache")));
    }
}
