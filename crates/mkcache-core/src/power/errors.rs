#[derive(Debug, thiserror::Error)]
pub enum PowerError {
    #[error("Failed to run power probe '{command}': {source}")]
    ProbeFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },
}
