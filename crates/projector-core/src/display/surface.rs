use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info};
use winit::application::ApplicationHandler;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::keyboard::Key;
use winit::monitor::MonitorHandle;
use winit::platform::pump_events::{EventLoopExtPumpEvents, PumpStatus};
use winit::window::{Fullscreen, Window, WindowId};

use super::errors::DisplayError;
use super::pixels::{ensure_bgr, pack_0rgb_for_window};
use super::traits::DisplaySurface;
use crate::frame::{ChannelOrder, Frame};

/// Title of the full-screen projection window
pub const SURFACE_TITLE: &str = "Projected Window";

/// Pump slice used while waiting for the window system to create the surface
const SURFACE_OPEN_POLL: Duration = Duration::from_millis(10);

/// Maximum pump slices spent waiting for the surface (about one second)
const SURFACE_OPEN_ATTEMPTS: u32 = 100;

/// Which monitor the surface goes full-screen on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TargetMonitor {
    /// First monitor that is not the primary one, else the primary
    #[default]
    Secondary,
    /// Monitor at `index` in enumeration order
    ///
    /// `position` is the monitor's top-left corner when known; a monitor at
    /// that position wins over the index, since enumeration order can differ
    /// between window-system APIs.
    Index {
        index: usize,
        position: Option<(i32, i32)>,
    },
}

struct OpenSurface {
    surface: softbuffer::Surface<Arc<Window>, Arc<Window>>,
    _context: softbuffer::Context<Arc<Window>>,
    window: Arc<Window>,
    /// Inner size of the window, kept current from `Resized` events
    window_size: (u32, u32),
    buffer_size: Option<(u32, u32)>,
}

#[derive(Default)]
struct SurfaceApp {
    target: TargetMonitor,
    wants_window: bool,
    open: Option<OpenSurface>,
    pending_key: Option<char>,
    error: Option<DisplayError>,
}

impl SurfaceApp {
    fn ensure_window(&mut self, event_loop: &ActiveEventLoop) {
        if !self.wants_window || self.open.is_some() || self.error.is_some() {
            return;
        }
        match open_window(event_loop, self.target) {
            Ok(open) => self.open = Some(open),
            Err(e) => self.error = Some(e),
        }
    }
}

impl ApplicationHandler for SurfaceApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        self.ensure_window(event_loop);
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        self.ensure_window(event_loop);
    }

    fn window_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        logical_key: Key::Character(text),
                        ..
                    },
                ..
            } => {
                // Only the first key since the last poll is reported
                if self.pending_key.is_none() {
                    self.pending_key = text.chars().next();
                }
            }
            WindowEvent::Resized(size) => {
                if let Some(open) = self.open.as_mut() {
                    debug!(
                        event = "core.display.window_resized",
                        width = size.width,
                        height = size.height
                    );
                    open.window_size = (size.width, size.height);
                }
            }
            _ => {}
        }
    }
}

fn open_window(
    event_loop: &ActiveEventLoop,
    target: TargetMonitor,
) -> Result<OpenSurface, DisplayError> {
    let monitor = select_monitor(event_loop, target)?;
    debug!(
        event = "core.display.monitor_selected",
        monitor = ?monitor.name(),
        target = ?target
    );

    let attributes = Window::default_attributes()
        .with_title(SURFACE_TITLE)
        .with_decorations(false)
        .with_fullscreen(Some(Fullscreen::Borderless(Some(monitor))));

    let window = event_loop.create_window(attributes).map_err(|e| {
        DisplayError::WindowCreationFailed {
            message: e.to_string(),
        }
    })?;
    let window = Arc::new(window);
    let inner = window.inner_size();

    let context = softbuffer::Context::new(window.clone())?;
    let surface = softbuffer::Surface::new(&context, window.clone())?;

    Ok(OpenSurface {
        surface,
        _context: context,
        window,
        window_size: (inner.width, inner.height),
        buffer_size: None,
    })
}

fn select_monitor(
    event_loop: &ActiveEventLoop,
    target: TargetMonitor,
) -> Result<MonitorHandle, DisplayError> {
    let monitors: Vec<MonitorHandle> = event_loop.available_monitors().collect();

    match target {
        TargetMonitor::Index { index, position } => {
            let by_position = position.and_then(|(x, y)| {
                monitors.iter().find(|m| {
                    let p = m.position();
                    p.x == x && p.y == y
                })
            });
            by_position
                .or_else(|| monitors.get(index))
                .cloned()
                .ok_or(DisplayError::MonitorNotFound {
                    index,
                    count: monitors.len(),
                })
        }
        TargetMonitor::Secondary => {
            let primary = event_loop.primary_monitor();
            monitors
                .iter()
                .find(|m| Some(*m) != primary.as_ref())
                .cloned()
                .or(primary)
                .or_else(|| monitors.first().cloned())
                .ok_or(DisplayError::NoMonitor)
        }
    }
}

/// Borderless full-screen window drawn through a CPU framebuffer
///
/// The window is created by the first [`DisplaySurface::show_fullscreen`]
/// call and reused until [`DisplaySurface::close`]. Frames are stretched to
/// the window's current size. Must be driven from the
/// main thread.
pub struct FullscreenSurface {
    event_loop: Option<EventLoop<()>>,
    app: SurfaceApp,
}

impl FullscreenSurface {
    pub fn new(target: TargetMonitor) -> Self {
        Self {
            event_loop: None,
            app: SurfaceApp {
                target,
                ..SurfaceApp::default()
            },
        }
    }

    fn pump(&mut self, timeout: Duration) -> Result<(), DisplayError> {
        if self.event_loop.is_none() {
            let event_loop =
                EventLoop::new().map_err(|e| DisplayError::EventLoopCreationFailed {
                    message: e.to_string(),
                })?;
            self.event_loop = Some(event_loop);
        }
        let Some(event_loop) = self.event_loop.as_mut() else {
            return Err(DisplayError::SurfaceUnavailable);
        };

        if let PumpStatus::Exit(code) = event_loop.pump_app_events(Some(timeout), &mut self.app) {
            return Err(DisplayError::EventLoopExited { code });
        }

        match self.app.error.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    fn open(&mut self) -> Result<(), DisplayError> {
        self.app.wants_window = true;

        for _ in 0..SURFACE_OPEN_ATTEMPTS {
            self.pump(SURFACE_OPEN_POLL)?;
            if let Some(open) = &self.app.open {
                let size = open.window.inner_size();
                info!(
                    event = "core.display.surface_created",
                    window_width = size.width,
                    window_height = size.height
                );
                return Ok(());
            }
        }

        Err(DisplayError::SurfaceUnavailable)
    }
}

impl DisplaySurface for FullscreenSurface {
    fn channel_order(&self) -> ChannelOrder {
        ChannelOrder::Bgr
    }

    fn show_fullscreen(&mut self, frame: &Frame) -> Result<(), DisplayError> {
        let (w, h) = frame.dimensions();
        if w == 0 || h == 0 {
            return Err(DisplayError::EmptyFrame {
                width: w,
                height: h,
            });
        }
        ensure_bgr(frame)?;

        if self.app.open.is_none() {
            self.open()?;
        }
        let open = self
            .app
            .open
            .as_mut()
            .ok_or(DisplayError::SurfaceUnavailable)?;

        let (window_width, window_height) = open.window_size;
        let (Some(width), Some(height)) =
            (NonZeroU32::new(window_width), NonZeroU32::new(window_height))
        else {
            // Minimized or not mapped yet
            debug!(event = "core.display.frame_skipped", reason = "zero_window_size");
            return Ok(());
        };

        let pixels = pack_0rgb_for_window(frame, window_width, window_height)?;

        if open.buffer_size != Some((window_width, window_height)) {
            open.surface.resize(width, height)?;
            open.buffer_size = Some((window_width, window_height));
        }

        let mut buffer = open.surface.buffer_mut()?;
        buffer.copy_from_slice(&pixels);
        buffer.present()?;
        Ok(())
    }

    fn poll_key(&mut self, timeout: Duration) -> Result<Option<char>, DisplayError> {
        if self.event_loop.is_none() {
            // Nothing to pump before the surface exists
            std::thread::sleep(timeout);
            return Ok(None);
        }
        self.pump(timeout)?;
        Ok(self.app.pending_key.take())
    }

    fn close(&mut self) -> Result<(), DisplayError> {
        self.app.wants_window = false;
        self.app.pending_key = None;

        let Some(open) = self.app.open.take() else {
            return Ok(());
        };
        drop(open);
        info!(event = "core.display.surface_closed");

        // Let the window system process the destroyed window
        self.pump(Duration::ZERO)
    }

    fn is_open(&self) -> bool {
        self.app.open.is_some()
    }
}
