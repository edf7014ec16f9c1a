use std::error::Error;

use crate::power::PowerError;
use crate::refresh::RefreshError;
use crate::repos::RepoError;
use crate::state::StateError;
use crate::timers::TimerError;

/// Base trait for all application errors
pub trait MkcacheError: Error + Send + Sync + 'static {
    /// Error code for programmatic handling
    fn error_code(&self) -> &'static str;

    /// Whether this error should be logged as an error or warning
    fn is_user_error(&self) -> bool {
        false
    }
}

/// Common result type for the application
pub type MkcacheResult<T> = Result<T, Box<dyn MkcacheError>>;

impl MkcacheError for mkcache_config::ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            mkcache_config::ConfigError::ConfigParseError { .. } => "CONFIG_PARSE_ERROR",
            mkcache_config::ConfigError::ConfigNotFound { .. } => "CONFIG_NOT_FOUND",
            mkcache_config::ConfigError::InvalidRepoId { .. } => "INVALID_REPO_ID",
            mkcache_config::ConfigError::InvalidConfiguration { .. } => "INVALID_CONFIGURATION",
            mkcache_config::ConfigError::PathError { .. } => "CONFIG_PATH_ERROR",
            mkcache_config::ConfigError::IoError { .. } => "CONFIG_IO_ERROR",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(
            self,
            mkcache_config::ConfigError::ConfigParseError { .. }
                | mkcache_config::ConfigError::ConfigNotFound { .. }
                | mkcache_config::ConfigError::InvalidRepoId { .. }
                | mkcache_config::ConfigError::InvalidConfiguration { .. }
        )
    }
}

impl MkcacheError for TimerError {
    fn error_code(&self) -> &'static str {
        match self {
            TimerError::MalformedHeader { .. } => "TIMER_MALFORMED_HEADER",
            TimerError::TimeParse { .. } => "TIMER_TIME_PARSE_ERROR",
            TimerError::CommandFailed { .. } => "TIMER_COMMAND_FAILED",
            TimerError::Spawn { .. } => "TIMER_SPAWN_FAILED",
        }
    }
}

impl MkcacheError for PowerError {
    fn error_code(&self) -> &'static str {
        match self {
            PowerError::ProbeFailed { .. } => "POWER_PROBE_FAILED",
        }
    }
}

impl MkcacheError for StateError {
    fn error_code(&self) -> &'static str {
        match self {
            StateError::ReadFailed { .. } => "STATE_READ_FAILED",
            StateError::Corrupt { .. } => "STATE_CORRUPT",
            StateError::WriteFailed { .. } => "STATE_WRITE_FAILED",
        }
    }
}

impl MkcacheError for RepoError {
    fn error_code(&self) -> &'static str {
        match self {
            RepoError::UnknownRepo { .. } => "UNKNOWN_REPO",
            RepoError::SyncFailed { .. } => "REPO_SYNC_FAILED",
            RepoError::StampWriteFailed { .. } => "REPO_STAMP_WRITE_FAILED",
        }
    }
}

impl MkcacheError for RefreshError {
    fn error_code(&self) -> &'static str {
        match self {
            RefreshError::NoEnabledRepos => "NO_ENABLED_REPOS",
            RefreshError::Power { source } => source.error_code(),
            RefreshError::State { source } => source.error_code(),
            RefreshError::Repo { source } => source.error_code(),
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(self, RefreshError::NoEnabledRepos)
    }
}
