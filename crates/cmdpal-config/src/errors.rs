use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to parse config file '{}': {message}", path.display())]
    ConfigParseError { path: PathBuf, message: String },

    #[error("Section '{section}' in '{}' is missing required key '{key}'", path.display())]
    MissingKey {
        path: PathBuf,
        section: String,
        key: String,
    },

    #[error("Section '{section}' in '{}' has invalid {key} '{value}': {message}", path.display())]
    InvalidValue {
        path: PathBuf,
        section: String,
        key: String,
        value: String,
        message: String,
    },

    #[error("Invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("IO error reading config '{}': {source}", path.display())]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Path(#[from] cmdpal_paths::PathError),
}
