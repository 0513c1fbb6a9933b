use std::error::Error;

/// Base trait for all projector errors
pub trait ProjectorError: Error + Send + Sync + 'static {
    /// Error code for programmatic handling
    fn error_code(&self) -> &'static str;

    /// Whether this error was caused by user input rather than the system
    fn is_user_error(&self) -> bool {
        false
    }
}

/// Common result type for the library
pub type ProjectorResult<T> = Result<T, Box<dyn ProjectorError>>;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {message}")]
    ConfigReadError { path: String, message: String },

    #[error("Failed to parse config file '{path}': {message}")]
    ConfigParseError { path: String, message: String },

    #[error("No window title configured: pass --window or set [window] title in a config file")]
    MissingWindowTitle,

    #[error("Invalid target resolution {width}x{height}: both dimensions must be positive")]
    InvalidResolution { width: u32, height: u32 },

    #[error("Invalid quit key {key:?}: must be a single printable character")]
    InvalidQuitKey { key: char },

    #[error("Invalid poll timeout: must be at least 1ms")]
    InvalidPollTimeout,

    #[error("Invalid frame limit: must be at least 1")]
    InvalidFrameLimit,
}

impl ProjectorError for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            ConfigError::ConfigReadError { .. } => "CONFIG_READ_ERROR",
            ConfigError::ConfigParseError { .. } => "CONFIG_PARSE_ERROR",
            ConfigError::MissingWindowTitle => "CONFIG_MISSING_WINDOW_TITLE",
            ConfigError::InvalidResolution { .. } => "CONFIG_INVALID_RESOLUTION",
            ConfigError::InvalidQuitKey { .. } => "CONFIG_INVALID_QUIT_KEY",
            ConfigError::InvalidPollTimeout => "CONFIG_INVALID_POLL_TIMEOUT",
            ConfigError::InvalidFrameLimit => "CONFIG_INVALID_FRAME_LIMIT",
        }
    }

    fn is_user_error(&self) -> bool {
        // Every config problem originates in a file or flag the user wrote
        true
    }
}
