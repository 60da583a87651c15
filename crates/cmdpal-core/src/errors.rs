use std::error::Error;

/// Base trait for all CMD_PAL errors
pub trait CmdPalError: Error + Send + Sync + 'static {
    /// Error code for programmatic handling
    fn error_code(&self) -> &'static str;

    /// Whether this error was caused by user input (config, paths) rather than the system
    fn is_user_error(&self) -> bool {
        false
    }
}

/// Common result type for the application
pub type CmdPalResult<T> = Result<T, Box<dyn CmdPalError>>;

impl CmdPalError for cmdpal_config::ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            cmdpal_config::ConfigError::ConfigParseError { .. } => "CONFIG_PARSE_ERROR",
            cmdpal_config::ConfigError::MissingKey { .. } => "CONFIG_MISSING_KEY",
            cmdpal_config::ConfigError::InvalidValue { .. } => "CONFIG_INVALID_VALUE",
            cmdpal_config::ConfigError::InvalidConfiguration { .. } => "INVALID_CONFIGURATION",
            cmdpal_config::ConfigError::IoError { .. } => "CONFIG_IO_ERROR",
            cmdpal_config::ConfigError::Path(_) => "CONFIG_PATH_ERROR",
        }
    }

    fn is_user_error(&self) -> bool {
        !matches!(self, cmdpal_config::ConfigError::Path(_))
    }
}

impl CmdPalError for cmdpal_paths::PathError {
    fn error_code(&self) -> &'static str {
        match self {
            cmdpal_paths::PathError::HomeNotFound => "HOME_NOT_FOUND",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_cmdpal_result() {
        let _result: CmdPalResult<i32> = Ok(42);
    }

    #[test]
    fn test_config_missing_key_is_user_error() {
        let error = cmdpal_config::ConfigError::MissingKey {
            path: PathBuf::from("/tmp/config"),
            section: "Uptime".to_string(),
            key: "value".to_string(),
        };
        assert_eq!(error.error_code(), "CONFIG_MISSING_KEY");
        assert!(error.is_user_error());
    }

    #[test]
    fn test_config_io_error_is_user_error() {
        let error = cmdpal_config::ConfigError::IoError {
            path: PathBuf::from("/tmp/missing"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert_eq!(error.error_code(), "CONFIG_IO_ERROR");
        assert!(error.is_user_error());
    }

    #[test]
    fn test_path_error_code() {
        let error = cmdpal_paths::PathError::HomeNotFound;
        assert_eq!(error.error_code(), "HOME_NOT_FOUND");
        assert!(!error.is_user_error());
    }

    #[test]
    fn test_boxed_error_keeps_code() {
        let boxed: Box<dyn CmdPalError> = Box::new(cmdpal_paths::PathError::HomeNotFound);
        assert_eq!(boxed.error_code(), "HOME_NOT_FOUND");
    }
}
