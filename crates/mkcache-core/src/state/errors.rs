use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error("Failed to read scheduler state {}: {source}", path.display())]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Scheduler state {} is corrupt: {message}", path.display())]
    Corrupt { path: PathBuf, message: String },

    #[error("Failed to write scheduler state {}: {source}", path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
