//! Configuration type definitions for mkcache.
//!
//! These types are deserialized from TOML config files.
//!
//! # Example Configuration
//!
//! ```toml
//! [main]
//! metadata_timer_sync = 10800
//! metadata_expire = 172800
//! on_ac_power_command = "/usr/bin/on_ac_power"
//!
//! [repos.fedora]
//! name = "Fedora 40"
//! metadata_expire = 604800
//! sync_command = "/usr/libexec/mkcache/sync-fedora"
//!
//! [repos.updates-testing]
//! enabled = false
//! ```

use crate::defaults::{
    DEFAULT_METADATA_EXPIRE, DEFAULT_METADATA_TIMER_SYNC, DEFAULT_ON_AC_POWER_COMMAND,
    default_true,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Main configuration loaded from TOML config files.
///
/// Loaded from the user config (`~/.mkcache/config.toml`) and then from an
/// explicit `--config` file; later files override earlier ones.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MkcacheConfig {
    /// Global settings
    #[serde(default)]
    pub main: MainConfig,

    /// Repository definitions keyed by repository id
    #[serde(default)]
    pub repos: BTreeMap<String, RepoConfig>,
}

/// `[main]` section.
///
/// Fields are `Option<T>` to support config hierarchy merging:
/// only explicitly-set values override lower-priority configs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MainConfig {
    /// Minimum seconds between timer-triggered refreshes. `<= 0` disables them.
    /// Default: 10800
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata_timer_sync: Option<i64>,

    /// Default metadata lifetime in seconds for repositories without their own.
    /// `-1` means never expire. Default: 172800
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata_expire: Option<i64>,

    /// Power probe helper. Default: "on_ac_power"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_ac_power_command: Option<String>,

    /// Metadata cache root. Default: `~/.mkcache/cache`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cachedir: Option<PathBuf>,
}

impl MainConfig {
    pub fn metadata_timer_sync(&self) -> i64 {
        self.metadata_timer_sync
            .unwrap_or(DEFAULT_METADATA_TIMER_SYNC)
    }

    pub fn metadata_expire(&self) -> i64 {
        self.metadata_expire.unwrap_or(DEFAULT_METADATA_EXPIRE)
    }

    pub fn on_ac_power_command(&self) -> &str {
        self.on_ac_power_command
            .as_deref()
            .unwrap_or(DEFAULT_ON_AC_POWER_COMMAND)
    }

    pub fn merge(base: &Self, override_config: &Self) -> Self {
        Self {
            metadata_timer_sync: override_config
                .metadata_timer_sync
                .or(base.metadata_timer_sync),
            metadata_expire: override_config.metadata_expire.or(base.metadata_expire),
            on_ac_power_command: override_config
                .on_ac_power_command
                .clone()
                .or_else(|| base.on_ac_power_command.clone()),
            cachedir: override_config
                .cachedir
                .clone()
                .or_else(|| base.cachedir.clone()),
        }
    }
}

/// `[repos.<id>]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepoConfig {
    /// Human-readable name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Disabled repositories are never classified or synced.
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Overrides `[main] metadata_expire` for this repository.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata_expire: Option<i64>,

    /// Program (with whitespace-separated arguments) run to fetch metadata.
    /// Repositories without one only have their stamp refreshed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sync_command: Option<String>,
}

impl Default for RepoConfig {
    fn default() -> Self {
        Self {
            name: None,
            enabled: true,
            metadata_expire: None,
            sync_command: None,
        }
    }
}

impl RepoConfig {
    /// Effective metadata lifetime, falling back to the `[main]` value.
    pub fn metadata_expire(&self, main: &MainConfig) -> i64 {
        self.metadata_expire
            .unwrap_or_else(|| main.metadata_expire())
    }
}

impl MkcacheConfig {
    /// Ids of enabled repositories, in id order.
    pub fn enabled_repo_ids(&self) -> Vec<&str> {
        self.repos
            .iter()
            .filter(|(_, repo)| repo.enabled)
            .map(|(id, _)| id.as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_apply_when_unset() {
        let config = MkcacheConfig::default();
        assert_eq!(config.main.metadata_timer_sync(), 10800);
        assert_eq!(config.main.metadata_expire(), 172800);
        assert_eq!(config.main.on_ac_power_command(), "on_ac_power");
        assert!(config.main.cachedir.is_none());
        assert!(config.repos.is_empty());
    }

    #[test]
    fn test_repo_enabled_defaults_to_true() {
        let config: MkcacheConfig = toml::from_str(
            r#"
[repos.fedora]
name = "Fedora"
"#,
        )
        .unwrap();
        assert!(config.repos["fedora"].enabled);
    }

    #[test]
    fn test_repo_metadata_expire_falls_back_to_main() {
        let config: MkcacheConfig = toml::from_str(
            r#"
[main]
metadata_expire = 600

[repos.fedora]

[repos.updates]
metadata_expire = 60
"#,
        )
        .unwrap();
        assert_eq!(config.repos["fedora"].metadata_expire(&config.main), 600);
        assert_eq!(config.repos["updates"].metadata_expire(&config.main), 60);
    }

    #[test]
    fn test_enabled_repo_ids_sorted_and_filtered() {
        let config: MkcacheConfig = toml::from_str(
            r#"
[repos.updates]

[repos.testing]
enabled = false

[repos.base]
"#,
        )
        .unwrap();
        assert_eq!(config.enabled_repo_ids(), vec!["base", "updates"]);
    }

    #[test]
    fn test_main_merge_prefers_override() {
        let base = MainConfig {
            metadata_timer_sync: Some(100),
            metadata_expire: Some(200),
            on_ac_power_command: Some("base-probe".to_string()),
            cachedir: None,
        };
        let over = MainConfig {
            metadata_timer_sync: Some(0),
            cachedir: Some(PathBuf::from("/tmp/cache")),
            ..Default::default()
        };
        let merged = MainConfig::merge(&base, &over);
        assert_eq!(merged.metadata_timer_sync, Some(0));
        assert_eq!(merged.metadata_expire, Some(200));
        assert_eq!(merged.on_ac_power_command.as_deref(), Some("base-probe"));
        assert_eq!(merged.cachedir, Some(PathBuf::from("/tmp/cache")));
    }
}
