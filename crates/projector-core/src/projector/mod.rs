//! The projection loop: locate a window once, then mirror it frame by frame.

pub mod errors;
pub mod handler;
pub mod types;

pub use errors::ProjectionError;
pub use handler::{locate_window, run, run_system};
pub use types::{
    DEFAULT_POLL_TIMEOUT_MS, DEFAULT_QUIT_KEY, ProjectionRequest, ProjectionSummary, StopReason,
};
