use crate::power::PowerError;
use crate::repos::RepoError;
use crate::state::StateError;

/// Failures that abort a makecache invocation. None of them are retried.
#[derive(Debug, thiserror::Error)]
pub enum RefreshError {
    #[error("There are no enabled repositories")]
    NoEnabledRepos,

    #[error("Power state probe failed: {source}")]
    Power {
        #[from]
        source: PowerError,
    },

    #[error("Scheduler state error: {source}")]
    State {
        #[from]
        source: StateError,
    },

    #[error("Repository error: {source}")]
    Repo {
        #[from]
        source: RepoError,
    },
}
