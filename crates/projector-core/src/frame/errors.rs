use crate::errors::ProjectorError;

#[derive(Debug, thiserror::Error)]
pub enum FrameError {
    #[error("Invalid target resolution {width}x{height}: both dimensions must be positive")]
    InvalidResolution { width: u32, height: u32 },

    #[error("Pixel buffer holds {actual} bytes, expected {expected} for {width}x{height}")]
    BufferSizeMismatch {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
}

impl ProjectorError for FrameError {
    fn error_code(&self) -> &'static str {
        match self {
            FrameError::InvalidResolution { .. } => "FRAME_INVALID_RESOLUTION",
            FrameError::BufferSizeMismatch { .. } => "FRAME_BUFFER_SIZE_MISMATCH",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(self, FrameError::InvalidResolution { .. })
    }
}
