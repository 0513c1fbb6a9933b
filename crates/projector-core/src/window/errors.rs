use crate::errors::ProjectorError;

#[derive(Debug, thiserror::Error)]
pub enum WindowError {
    #[error("Failed to enumerate windows: {message}")]
    EnumerationFailed { message: String },

    #[error("Failed to enumerate monitors: {message}")]
    MonitorEnumerationFailed { message: String },

    #[error("Failed to read bounds of window '{title}': {message}")]
    BoundsUnavailable { title: String, message: String },

    #[error("Failed to activate window '{title}': {reason}")]
    ActivationFailed { title: String, reason: String },
}

impl ProjectorError for WindowError {
    fn error_code(&self) -> &'static str {
        match self {
            WindowError::EnumerationFailed { .. } => "WINDOW_ENUMERATION_FAILED",
            WindowError::MonitorEnumerationFailed { .. } => "MONITOR_ENUMERATION_FAILED",
            WindowError::BoundsUnavailable { .. } => "WINDOW_BOUNDS_UNAVAILABLE",
            WindowError::ActivationFailed { .. } => "WINDOW_ACTIVATION_FAILED",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_enumeration_failed_error() {
        let error = WindowError::EnumerationFailed {
            message: "no display".to_string(),
        };
        assert_eq!(error.to_string(), "Failed to enumerate windows: no display");
        assert_eq!(error.error_code(), "WINDOW_ENUMERATION_FAILED");
        assert!(!error.is_user_error());
    }

    #[test]
    fn test_bounds_unavailable_error() {
        let error = WindowError::BoundsUnavailable {
            title: "Unity Hub".to_string(),
            message: "window closed".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to read bounds of window 'Unity Hub': window closed"
        );
        assert_eq!(error.error_code(), "WINDOW_BOUNDS_UNAVAILABLE");
    }

    #[test]
    fn test_activation_failed_error() {
        let error = WindowError::ActivationFailed {
            title: "Unity Hub".to_string(),
            reason: "xdotool not installed".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to activate window 'Unity Hub': xdotool not installed"
        );
        assert_eq!(error.error_code(), "WINDOW_ACTIVATION_FAILED");
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<WindowError>();
    }

    #[test]
    fn test_error_source() {
        let error = WindowError::MonitorEnumerationFailed {
            message: "test".to_string(),
        };
        assert!(error.source().is_none());
    }
}
