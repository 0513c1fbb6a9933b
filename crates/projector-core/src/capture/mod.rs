pub mod errors;
pub mod handler;
pub mod traits;

pub use errors::CaptureError;
pub use handler::{ScreenGrabber, region_size};
pub use traits::FrameGrabber;
