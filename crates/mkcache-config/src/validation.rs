//! Configuration validation logic.
//!
//! Ensures config values are usable before the scheduler touches them.

use crate::defaults::METADATA_NEVER_EXPIRES;
use crate::errors::ConfigError;
use crate::types::MkcacheConfig;

/// Validate a repository id.
///
/// Ids name cache directories, so only `[A-Za-z0-9._:-]` is allowed and
/// `.`/`..` are rejected.
pub fn validate_repo_id(repo_id: &str) -> Result<(), ConfigError> {
    let invalid = |message: &str| ConfigError::InvalidRepoId {
        repo_id: repo_id.to_string(),
        message: message.to_string(),
    };

    if repo_id.is_empty() {
        return Err(invalid("must not be empty"));
    }
    if repo_id == "." || repo_id == ".." {
        return Err(invalid("must not be a relative path component"));
    }
    if !repo_id
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | ':' | '-'))
    {
        return Err(invalid("only letters, digits, '.', '_', ':' and '-' are allowed"));
    }
    Ok(())
}

fn validate_expire(value: i64, location: &str) -> Result<(), ConfigError> {
    if value < 0 && value != METADATA_NEVER_EXPIRES {
        return Err(ConfigError::InvalidConfiguration {
            message: format!(
                "{location}: metadata_expire must be >= 0 or {METADATA_NEVER_EXPIRES} (never), got {value}"
            ),
        });
    }
    Ok(())
}

/// Validate an `MkcacheConfig`, returning an error if any values are invalid.
///
/// # Validation Rules
///
/// - `[main] metadata_expire` and every repository override must be `-1` or `>= 0`
/// - `[main] on_ac_power_command`, if set, must not be blank
/// - Repository ids must pass [`validate_repo_id`]
/// - `sync_command`, if set, must not be blank
///
/// `metadata_timer_sync` is not range-checked: any value `<= 0` is a valid way
/// to disable timer runs.
pub fn validate_config(config: &MkcacheConfig) -> Result<(), ConfigError> {
    if let Some(expire) = config.main.metadata_expire {
        validate_expire(expire, "[main]")?;
    }

    if let Some(ref command) = config.main.on_ac_power_command
        && command.trim().is_empty()
    {
        return Err(ConfigError::InvalidConfiguration {
            message: "[main]: on_ac_power_command must not be empty".to_string(),
        });
    }

    for (repo_id, repo) in &config.repos {
        validate_repo_id(repo_id)?;

        if let Some(expire) = repo.metadata_expire {
            validate_expire(expire, &format!("[repos.{repo_id}]"))?;
        }

        if let Some(ref command) = repo.sync_command
            && command.trim().is_empty()
        {
            return Err(ConfigError::InvalidConfiguration {
                message: format!("[repos.{repo_id}]: sync_command must not be empty"),
            });
        }
    }

    Ok(())
}
