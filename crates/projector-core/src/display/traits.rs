use std::time::Duration;

use super::errors::DisplayError;
use crate::frame::{ChannelOrder, Frame};

/// A full-screen render target that also reports keypresses
pub trait DisplaySurface {
    /// Channel order that [`DisplaySurface::show_fullscreen`] expects
    fn channel_order(&self) -> ChannelOrder;

    /// Render a frame full-screen, creating the surface on first use
    fn show_fullscreen(&mut self, frame: &Frame) -> Result<(), DisplayError>;

    /// Wait up to `timeout` for input and return the first key pressed
    /// since the previous poll
    ///
    /// Also services the display's own event queue.
    fn poll_key(&mut self, timeout: Duration) -> Result<Option<char>, DisplayError>;

    /// Release the surface; closing an unopened or closed surface is a no-op
    fn close(&mut self) -> Result<(), DisplayError>;

    fn is_open(&self) -> bool;
}
