use tracing::debug;

use super::activation;
use super::errors::WindowError;
use super::handler;
use super::traits::{WindowHandle, WindowLocator};
use super::types::WindowBounds;

/// A window backed by the operating system's window list
pub struct SystemWindow {
    inner: xcap::Window,
    title: String,
}

impl SystemWindow {
    pub(crate) fn new(inner: xcap::Window, title: String) -> Self {
        Self { inner, title }
    }

    /// Window system identifier (X11 window id, HWND, or CGWindowID)
    pub fn id(&self) -> Option<u32> {
        self.inner.id().ok()
    }

    pub fn app_name(&self) -> String {
        self.inner.app_name().unwrap_or_default()
    }

    fn bounds_error(&self, e: xcap::XCapError) -> WindowError {
        WindowError::BoundsUnavailable {
            title: self.title.clone(),
            message: e.to_string(),
        }
    }
}

impl std::fmt::Debug for SystemWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SystemWindow")
            .field("id", &self.id())
            .field("title", &self.title)
            .finish()
    }
}

impl WindowHandle for SystemWindow {
    fn title(&self) -> &str {
        &self.title
    }

    fn activate(&self) -> Result<(), WindowError> {
        let id = self.inner.id().map_err(|e| WindowError::ActivationFailed {
            title: self.title.clone(),
            reason: format!("window id unavailable: {}", e),
        })?;
        activation::activate_window(id, &self.app_name(), &self.title)
    }

    fn bounds(&self) -> Result<WindowBounds, WindowError> {
        let x = self.inner.x().map_err(|e| self.bounds_error(e))?;
        let y = self.inner.y().map_err(|e| self.bounds_error(e))?;
        let width = self.inner.width().map_err(|e| self.bounds_error(e))?;
        let height = self.inner.height().map_err(|e| self.bounds_error(e))?;

        let bounds = WindowBounds::from_origin_size(x, y, width, height);
        debug!(
            event = "core.window.bounds_read",
            title = self.title.as_str(),
            left = bounds.left,
            top = bounds.top,
            right = bounds.right,
            bottom = bounds.bottom
        );
        Ok(bounds)
    }
}

/// Window locator over the live system window list
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemWindowLocator;

impl SystemWindowLocator {
    pub fn new() -> Self {
        Self
    }
}

impl WindowLocator for SystemWindowLocator {
    type Handle = SystemWindow;

    fn find_windows_by_title(&self, title: &str) -> Result<Vec<SystemWindow>, WindowError> {
        handler::find_windows_by_title(title)
    }
}
