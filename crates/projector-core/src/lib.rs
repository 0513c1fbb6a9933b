//! projector-core: Core library for single-window screen projection
//!
//! Captures one application window from the primary display and re-renders
//! it full-screen on another display, frame by frame, until a quit key is
//! pressed.
//!
//! # Main Entry Points
//!
//! - [`projector`] - The projection loop and its request/summary types
//! - [`window`] - Window enumeration, title lookup, and activation
//! - [`capture`] - Screen-region capture from the primary monitor
//! - [`frame`] - Channel reordering and resizing of captured frames
//! - [`display`] - Full-screen display surface with key polling
//! - [`config`] - Configuration management

pub mod capture;
pub mod config;
pub mod display;
pub mod errors;
pub mod events;
pub mod frame;
pub mod logging;
pub mod projector;
pub mod window;

// Re-export commonly used types at crate root for convenience
pub use config::ProjectorConfig;
pub use frame::{ChannelOrder, Frame, TargetResolution};
pub use projector::{ProjectionError, ProjectionRequest, ProjectionSummary, StopReason};
pub use window::{WindowBounds, WindowInfo};

// Re-export handler modules as the primary API
pub use projector::handler as projector_ops;

// Re-export logging initialization
pub use logging::init_logging;
