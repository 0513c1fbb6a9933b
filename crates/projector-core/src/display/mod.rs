pub mod errors;
pub mod pixels;
pub mod surface;
pub mod traits;

pub use errors::DisplayError;
pub use pixels::{pack_0rgb, pack_0rgb_for_window};
pub use surface::{FullscreenSurface, SURFACE_TITLE, TargetMonitor};
pub use traits::DisplaySurface;
