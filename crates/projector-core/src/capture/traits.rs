use super::errors::CaptureError;
use crate::frame::Frame;
use crate::window::WindowBounds;

/// Reads pixels of a screen rectangle
pub trait FrameGrabber {
    /// Capture exactly `bounds` from the visible screen contents
    ///
    /// The returned frame's dimensions equal the bounds' width and height.
    /// Degenerate rectangles are rejected with [`CaptureError::EmptyRegion`].
    fn capture_region(&mut self, bounds: WindowBounds) -> Result<Frame, CaptureError>;
}
