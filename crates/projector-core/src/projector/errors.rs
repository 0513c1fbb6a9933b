use crate::capture::CaptureError;
use crate::display::DisplayError;
use crate::errors::ProjectorError;
use crate::window::WindowError;

#[derive(Debug, thiserror::Error)]
pub enum ProjectionError {
    #[error("Window titled '{title}' not found.")]
    WindowNotFound { title: String },

    #[error("Failed to look up window '{title}': {source}")]
    WindowLookupFailed {
        title: String,
        #[source]
        source: WindowError,
    },

    #[error("Lost track of window '{title}': {source}")]
    BoundsUnavailable {
        title: String,
        #[source]
        source: WindowError,
    },

    #[error("Capture failed: {0}")]
    Capture(#[from] CaptureError),

    #[error("Display failed: {0}")]
    Display(#[from] DisplayError),
}

impl ProjectorError for ProjectionError {
    fn error_code(&self) -> &'static str {
        match self {
            ProjectionError::WindowNotFound { .. } => "WINDOW_NOT_FOUND",
            ProjectionError::WindowLookupFailed { .. } => "WINDOW_LOOKUP_FAILED",
            ProjectionError::BoundsUnavailable { .. } => "WINDOW_BOUNDS_UNAVAILABLE",
            ProjectionError::Capture(e) => e.error_code(),
            ProjectionError::Display(e) => e.error_code(),
        }
    }

    fn is_user_error(&self) -> bool {
        match self {
            ProjectionError::WindowNotFound { .. } => true,
            ProjectionError::Display(e) => e.is_user_error(),
            _ => false,
        }
    }
}
