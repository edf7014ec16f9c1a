#[derive(Debug, thiserror::Error)]
pub enum TimerError {
    #[error("Timer listing has no header with NEXT and UNIT columns: '{header}'")]
    MalformedHeader { header: String },

    #[error("Could not parse timer time '{text}': {message}")]
    TimeParse { text: String, message: String },

    #[error("'{command}' exited with status {code:?}")]
    CommandFailed { command: String, code: Option<i32> },

    #[error("Failed to execute '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },
}
