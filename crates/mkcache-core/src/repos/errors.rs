use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error("Unknown repository '{repo_id}'")]
    UnknownRepo { repo_id: String },

    #[error("Failed to sync repository '{repo_id}': {message}")]
    SyncFailed { repo_id: String, message: String },

    #[error("Failed to write metadata stamp {}: {source}", path.display())]
    StampWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
