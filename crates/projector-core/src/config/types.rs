//! Configuration type definitions for projector.
//!
//! Every field is optional so that partial files can be layered; unset
//! values fall back to the defaults in [`super::defaults`].
//!
//! # Example Configuration
//!
//! ```toml
//! [window]
//! title = "Unity Hub 3.9.1"
//!
//! [display]
//! width = 1920
//! height = 1080
//! monitor = 1
//!
//! [controls]
//! quit_key = "q"
//! poll_timeout_ms = 1
//! frames = 600
//! ```

use serde::{Deserialize, Serialize};

/// Main configuration loaded from TOML config files and CLI flags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectorConfig {
    /// Which window to project
    #[serde(default)]
    pub window: WindowConfig,

    /// Where and how large to render
    #[serde(default)]
    pub display: DisplayConfig,

    /// Keyboard and loop control
    #[serde(default)]
    pub controls: ControlsConfig,
}

/// Source window selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Title to match, exact match preferred over substring match
    pub title: Option<String>,
}

/// Target display settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Output width in pixels (default: 1920)
    pub width: Option<u32>,

    /// Output height in pixels (default: 1080)
    pub height: Option<u32>,

    /// Monitor index as shown by `projector list monitors`
    /// (default: first non-primary monitor)
    pub monitor: Option<usize>,
}

/// Loop control settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlsConfig {
    /// Key that stops the projection (default: "q")
    pub quit_key: Option<char>,

    /// Keypress wait per frame in milliseconds (default: 1)
    pub poll_timeout_ms: Option<u64>,

    /// Stop after this many frames (default: run until the quit key)
    pub frames: Option<u64>,
}
