//! # mkcache-config
//!
//! TOML configuration types, loading, and validation for mkcache.
//!
//! Single source of truth for `MkcacheConfig` and its sections.
//! Depends only on `mkcache-paths`.

mod defaults;
mod loading;
mod validation;

pub mod errors;
pub mod types;

// Public API re-exports
pub use defaults::{
    DEFAULT_METADATA_EXPIRE, DEFAULT_METADATA_TIMER_SYNC, DEFAULT_ON_AC_POWER_COMMAND,
    METADATA_NEVER_EXPIRES,
};
pub use errors::ConfigError;
pub use loading::{load_hierarchy, load_hierarchy_from, merge_configs};
pub use types::{MainConfig, MkcacheConfig, RepoConfig};
pub use validation::{validate_config, validate_repo_id};

impl MkcacheConfig {
    /// Load configuration from the hierarchy of config files.
    ///
    /// See [`loading::load_hierarchy`] for details.
    pub fn load_hierarchy(explicit: Option<&std::path::Path>) -> Result<Self, ConfigError> {
        loading::load_hierarchy(explicit)
    }

    /// Validate the configuration.
    ///
    /// See [`validation::validate_config`] for details.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validation::validate_config(self)
    }
}
