use crate::errors::ProjectorError;

#[derive(Debug, thiserror::Error)]
pub enum DisplayError {
    #[error("Failed to create display event loop: {message}")]
    EventLoopCreationFailed { message: String },

    #[error("Display event loop exited with code {code}")]
    EventLoopExited { code: i32 },

    #[error("Monitor {index} not found (found {count} monitors)")]
    MonitorNotFound { index: usize, count: usize },

    #[error("No monitor available for display")]
    NoMonitor,

    #[error("Failed to create full-screen window: {message}")]
    WindowCreationFailed { message: String },

    #[error("Display surface error: {message}")]
    SurfaceFailed { message: String },

    #[error("Display surface was not created by the event loop")]
    SurfaceUnavailable,

    #[error("Frame is in {actual} channel order, display expects {expected}")]
    ChannelOrderMismatch {
        expected: &'static str,
        actual: &'static str,
    },

    #[error("Cannot display an empty {width}x{height} frame")]
    EmptyFrame { width: u32, height: u32 },
}

impl ProjectorError for DisplayError {
    fn error_code(&self) -> &'static str {
        match self {
            DisplayError::EventLoopCreationFailed { .. } => "DISPLAY_EVENT_LOOP_FAILED",
            DisplayError::EventLoopExited { .. } => "DISPLAY_EVENT_LOOP_EXITED",
            DisplayError::MonitorNotFound { .. } => "DISPLAY_MONITOR_NOT_FOUND",
            DisplayError::NoMonitor => "DISPLAY_NO_MONITOR",
            DisplayError::WindowCreationFailed { .. } => "DISPLAY_WINDOW_CREATION_FAILED",
            DisplayError::SurfaceFailed { .. } => "DISPLAY_SURFACE_FAILED",
            DisplayError::SurfaceUnavailable => "DISPLAY_SURFACE_UNAVAILABLE",
            DisplayError::ChannelOrderMismatch { .. } => "DISPLAY_CHANNEL_ORDER_MISMATCH",
            DisplayError::EmptyFrame { .. } => "DISPLAY_EMPTY_FRAME",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(self, DisplayError::MonitorNotFound { .. })
    }
}

impl From<softbuffer::SoftBufferError> for DisplayError {
    fn from(e: softbuffer::SoftBufferError) -> Self {
        DisplayError::SurfaceFailed {
            message: e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monitor_not_found_error() {
        let error = DisplayError::MonitorNotFound { index: 3, count: 2 };
        assert_eq!(error.to_string(), "Monitor 3 not found (found 2 monitors)");
        assert_eq!(error.error_code(), "DISPLAY_MONITOR_NOT_FOUND");
        assert!(error.is_user_error());
    }

    #[test]
    fn test_channel_order_mismatch_error() {
        let error = DisplayError::ChannelOrderMismatch {
            expected: "bgr",
            actual: "rgb",
        };
        assert_eq!(
            error.to_string(),
            "Frame is in rgb channel order, display expects bgr"
        );
        assert_eq!(error.error_code(), "DISPLAY_CHANNEL_ORDER_MISMATCH");
        assert!(!error.is_user_error());
    }

    #[test]
    fn test_surface_unavailable_error() {
        let error = DisplayError::SurfaceUnavailable;
        assert_eq!(error.error_code(), "DISPLAY_SURFACE_UNAVAILABLE");
        assert!(error.to_string().contains("not created"));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<DisplayError>();
    }
}
