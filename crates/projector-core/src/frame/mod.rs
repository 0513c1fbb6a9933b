//! In-memory frames and the pixel operations applied between capture and display.

pub mod errors;
pub mod operations;
pub mod types;

pub use errors::FrameError;
pub use operations::{convert_channel_order, reorder_channels, resize_to_target};
pub use types::{ChannelOrder, Frame, TargetResolution};
