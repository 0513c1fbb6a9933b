use super::errors::WindowError;
use super::types::WindowBounds;

/// A resolved on-screen window that can be raised and measured
pub trait WindowHandle {
    /// Title the window had when it was resolved
    fn title(&self) -> &str;

    /// Ask the window system to bring this window to the foreground
    fn activate(&self) -> Result<(), WindowError>;

    /// Current bounding rectangle, read live from the window system
    fn bounds(&self) -> Result<WindowBounds, WindowError>;
}

/// Resolves window titles to handles
pub trait WindowLocator {
    type Handle: WindowHandle;

    /// All windows whose title matches `title`, best match first
    ///
    /// Returns an empty vector when nothing matches.
    fn find_windows_by_title(&self, title: &str) -> Result<Vec<Self::Handle>, WindowError>;
}
