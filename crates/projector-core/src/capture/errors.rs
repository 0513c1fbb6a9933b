use crate::errors::ProjectorError;

#[derive(Debug, thiserror::Error)]
pub enum CaptureError {
    #[error("Capture region {bounds} is empty ({width}x{height})")]
    EmptyRegion {
        bounds: String,
        width: i64,
        height: i64,
    },

    #[error("Capture region {bounds} does not overlap monitor '{monitor}' ({monitor_bounds})")]
    RegionOutOfBounds {
        bounds: String,
        monitor: String,
        monitor_bounds: String,
    },

    #[error("Failed to enumerate monitors: {message}")]
    MonitorEnumerationFailed { message: String },

    #[error("No monitor available for capture")]
    NoMonitor,

    #[error("Failed to read monitor property '{property}': {message}")]
    MonitorPropertyFailed { property: String, message: String },

    #[error("Screen capture failed: {message}")]
    CaptureFailed { message: String },

    #[error("Captured {actual_width}x{actual_height} pixels, expected {expected_width}x{expected_height}")]
    SizeMismatch {
        expected_width: u32,
        expected_height: u32,
        actual_width: u32,
        actual_height: u32,
    },
}

impl ProjectorError for CaptureError {
    fn error_code(&self) -> &'static str {
        match self {
            CaptureError::EmptyRegion { .. } => "CAPTURE_EMPTY_REGION",
            CaptureError::RegionOutOfBounds { .. } => "CAPTURE_REGION_OUT_OF_BOUNDS",
            CaptureError::MonitorEnumerationFailed { .. } => "CAPTURE_MONITOR_ENUMERATION_FAILED",
            CaptureError::NoMonitor => "CAPTURE_NO_MONITOR",
            CaptureError::MonitorPropertyFailed { .. } => "CAPTURE_MONITOR_PROPERTY_FAILED",
            CaptureError::CaptureFailed { .. } => "CAPTURE_FAILED",
            CaptureError::SizeMismatch { .. } => "CAPTURE_SIZE_MISMATCH",
        }
    }
}
