//! Configuration validation and resolution into a [`ProjectionRequest`].

use std::time::Duration;

use crate::config::defaults;
use crate::config::types::ProjectorConfig;
use crate::display::TargetMonitor;
use crate::errors::ConfigError;
use crate::frame::TargetResolution;
use crate::projector::ProjectionRequest;

/// Validate every value that is set.
///
/// The window title is not required here, since it may still come from the
/// command line; [`to_request`] enforces it.
///
/// # Errors
///
/// Returns the first invalid value found.
pub fn validate_config(config: &ProjectorConfig) -> Result<(), ConfigError> {
    let width = config.display.width.unwrap_or_else(defaults::default_width);
    let height = config.display.height.unwrap_or_else(defaults::default_height);
    if width == 0 || height == 0 {
        return Err(ConfigError::InvalidResolution { width, height });
    }

    if let Some(key) = config.controls.quit_key
        && !is_valid_quit_key(key)
    {
        return Err(ConfigError::InvalidQuitKey { key });
    }

    if config.controls.poll_timeout_ms == Some(0) {
        return Err(ConfigError::InvalidPollTimeout);
    }

    if config.controls.frames == Some(0) {
        return Err(ConfigError::InvalidFrameLimit);
    }

    Ok(())
}

/// Quit keys must be a single visible character
fn is_valid_quit_key(key: char) -> bool {
    !key.is_control() && !key.is_whitespace()
}

/// Validate the configuration and resolve defaults into a request.
///
/// # Errors
///
/// Returns [`ConfigError::MissingWindowTitle`] when no non-blank title is set,
/// or any error from [`validate_config`].
pub fn to_request(config: &ProjectorConfig) -> Result<ProjectionRequest, ConfigError> {
    validate_config(config)?;

    // Blank titles are rejected, others are matched exactly as written
    let title = config
        .window
        .title
        .as_deref()
        .filter(|t| !t.trim().is_empty())
        .ok_or(ConfigError::MissingWindowTitle)?;

    let width = config.display.width.unwrap_or_else(defaults::default_width);
    let height = config.display.height.unwrap_or_else(defaults::default_height);
    let target = TargetResolution::new(width, height)
        .map_err(|_| ConfigError::InvalidResolution { width, height })?;

    let quit_key = config
        .controls
        .quit_key
        .unwrap_or_else(defaults::default_quit_key);
    let poll_timeout_ms = config
        .controls
        .poll_timeout_ms
        .unwrap_or_else(defaults::default_poll_timeout_ms);

    let monitor = match config.display.monitor {
        Some(index) => TargetMonitor::Index {
            index,
            position: None,
        },
        None => TargetMonitor::Secondary,
    };

    let mut request = ProjectionRequest::new(title, target)
        .with_quit_key(quit_key)
        .with_poll_timeout(Duration::from_millis(poll_timeout_ms))
        .with_monitor(monitor);
    if let Some(frames) = config.controls.frames {
        request = request.with_max_frames(frames);
    }

    Ok(request)
}
