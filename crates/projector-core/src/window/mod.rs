mod activation;
pub mod errors;
pub mod handler;
pub mod system;
pub mod traits;
pub mod types;

pub use errors::WindowError;
pub use handler::{find_windows_by_title, list_monitors, list_windows};
pub use system::{SystemWindow, SystemWindowLocator};
pub use traits::{WindowHandle, WindowLocator};
pub use types::{MonitorInfo, WindowBounds, WindowInfo};
