use tracing::{debug, error, info, warn};

use super::errors::ProjectionError;
use super::types::{ProjectionRequest, ProjectionSummary, StopReason};
use crate::capture::{FrameGrabber, ScreenGrabber};
use crate::display::{DisplaySurface, FullscreenSurface, TargetMonitor};
use crate::frame::{convert_channel_order, resize_to_target};
use crate::window::{SystemWindowLocator, WindowHandle, WindowLocator, list_monitors};

/// Resolve the window to project, taking the best match when several exist
///
/// Returns `ProjectionError::WindowNotFound` when nothing matches; the lookup
/// is never retried.
pub fn locate_window<L: WindowLocator>(
    locator: &L,
    title: &str,
) -> Result<L::Handle, ProjectionError> {
    info!(event = "core.projector.locate_started", title = title);

    let windows = locator
        .find_windows_by_title(title)
        .map_err(|source| ProjectionError::WindowLookupFailed {
            title: title.to_string(),
            source,
        })?;

    let match_count = windows.len();
    let Some(window) = windows.into_iter().next() else {
        warn!(event = "core.projector.window_not_found", title = title);
        return Err(ProjectionError::WindowNotFound {
            title: title.to_string(),
        });
    };

    if match_count > 1 {
        debug!(
            event = "core.projector.extra_matches_ignored",
            title = title,
            ignored = match_count - 1
        );
    }

    info!(
        event = "core.projector.locate_completed",
        title = title,
        matched_title = window.title()
    );
    Ok(window)
}

/// Locate the window, then project it until the quit key or frame limit
pub fn run<L, G, S>(
    request: &ProjectionRequest,
    locator: &L,
    grabber: &mut G,
    surface: &mut S,
) -> Result<ProjectionSummary, ProjectionError>
where
    L: WindowLocator,
    G: FrameGrabber,
    S: DisplaySurface,
{
    let window = locate_window(locator, request.window_title())?;
    project(request, &window, grabber, surface)
}

/// Run the projection against the real window system, screen, and display
///
/// Must be called from the main thread.
pub fn run_system(request: &ProjectionRequest) -> Result<ProjectionSummary, ProjectionError> {
    let window = locate_window(&SystemWindowLocator::new(), request.window_title())?;
    let mut grabber = ScreenGrabber::primary()?;
    let mut surface = FullscreenSurface::new(with_position_hint(request.monitor()));
    project(request, &window, &mut grabber, &mut surface)
}

/// Attach the capture-side position of an indexed monitor so the display side
/// can match it even when both libraries order monitors differently
fn with_position_hint(target: TargetMonitor) -> TargetMonitor {
    let TargetMonitor::Index {
        index,
        position: None,
    } = target
    else {
        return target;
    };

    match list_monitors() {
        Ok(monitors) => TargetMonitor::Index {
            index,
            position: monitors
                .iter()
                .find(|m| m.index() as usize == index)
                .map(|m| (m.x(), m.y())),
        },
        Err(e) => {
            debug!(event = "core.projector.monitor_hint_failed", error = %e);
            target
        }
    }
}

/// Project an already-resolved window
///
/// The surface is closed exactly once on every exit path. A failure to close
/// is reported only when the loop itself succeeded.
pub fn project<W, G, S>(
    request: &ProjectionRequest,
    window: &W,
    grabber: &mut G,
    surface: &mut S,
) -> Result<ProjectionSummary, ProjectionError>
where
    W: WindowHandle,
    G: FrameGrabber,
    S: DisplaySurface,
{
    info!(
        event = "core.projector.loop_started",
        title = window.title(),
        target = %request.target(),
        quit_key = %request.quit_key(),
        poll_timeout_ms = request.poll_timeout().as_millis() as u64,
        max_frames = ?request.max_frames()
    );

    let result = project_frames(request, window, grabber, surface);
    let closed = surface.close();

    match (result, closed) {
        (Ok(summary), Ok(())) => {
            info!(
                event = "core.projector.loop_completed",
                frames_rendered = summary.frames_rendered,
                activation_failures = summary.activation_failures,
                stop_reason = summary.stop_reason.as_str()
            );
            Ok(summary)
        }
        (Ok(_), Err(close_error)) => {
            error!(event = "core.projector.surface_close_failed", error = %close_error);
            Err(close_error.into())
        }
        (Err(e), close_result) => {
            if let Err(close_error) = close_result {
                warn!(event = "core.projector.surface_close_failed", error = %close_error);
            }
            error!(event = "core.projector.loop_failed", error = %e);
            Err(e)
        }
    }
}

fn project_frames<W, G, S>(
    request: &ProjectionRequest,
    window: &W,
    grabber: &mut G,
    surface: &mut S,
) -> Result<ProjectionSummary, ProjectionError>
where
    W: WindowHandle,
    G: FrameGrabber,
    S: DisplaySurface,
{
    let mut frames_rendered: u64 = 0;
    let mut activation_failures: u64 = 0;

    let summary = |frames_rendered, activation_failures, stop_reason| ProjectionSummary {
        window_title: window.title().to_string(),
        frames_rendered,
        activation_failures,
        stop_reason,
    };

    loop {
        // Activation failures never stop the loop
        if let Err(e) = window.activate() {
            activation_failures += 1;
            if activation_failures == 1 {
                warn!(event = "core.projector.activate_failed", error = %e);
            }
        }

        let bounds = window
            .bounds()
            .map_err(|source| ProjectionError::BoundsUnavailable {
                title: window.title().to_string(),
                source,
            })?;

        let captured = grabber.capture_region(bounds)?;
        let converted = convert_channel_order(captured, surface.channel_order());
        let resized = resize_to_target(&converted, request.target());
        surface.show_fullscreen(&resized)?;
        frames_rendered += 1;

        debug!(
            event = "core.projector.frame_rendered",
            frame = frames_rendered,
            source_width = converted.width(),
            source_height = converted.height()
        );

        let key = surface.poll_key(request.poll_timeout())?;
        if key == Some(request.quit_key()) {
            info!(event = "core.projector.quit_key_pressed", frame = frames_rendered);
            return Ok(summary(
                frames_rendered,
                activation_failures,
                StopReason::QuitKey,
            ));
        }

        if let Some(max_frames) = request.max_frames()
            && frames_rendered >= max_frames
        {
            return Ok(summary(
                frames_rendered,
                activation_failures,
                StopReason::FrameLimit,
            ));
        }
    }
}
