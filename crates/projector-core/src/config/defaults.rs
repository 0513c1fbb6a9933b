//! Default values for unset configuration fields.

use crate::projector::{DEFAULT_POLL_TIMEOUT_MS, DEFAULT_QUIT_KEY};

/// Default output width in pixels.
pub const DEFAULT_WIDTH: u32 = 1920;

/// Default output height in pixels.
pub const DEFAULT_HEIGHT: u32 = 1080;

pub fn default_width() -> u32 {
    DEFAULT_WIDTH
}

pub fn default_height() -> u32 {
    DEFAULT_HEIGHT
}

pub fn default_quit_key() -> char {
    DEFAULT_QUIT_KEY
}

pub fn default_poll_timeout_ms() -> u64 {
    DEFAULT_POLL_TIMEOUT_MS
}
