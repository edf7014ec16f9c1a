use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to parse config file '{}': {message}", path.display())]
    ConfigParseError { path: PathBuf, message: String },

    #[error("Config file not found: {}", path.display())]
    ConfigNotFound { path: PathBuf },

    #[error("Invalid repository id '{repo_id}': {message}")]
    InvalidRepoId { repo_id: String, message: String },

    #[error("Invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("Could not resolve config location: {source}")]
    PathError {
        #[from]
        source: mkcache_paths::PathError,
    },

    #[error("IO error reading config: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },
}
