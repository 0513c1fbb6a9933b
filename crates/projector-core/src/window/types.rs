use serde::{Deserialize, Serialize};

/// Screen-space rectangle of a window, in pixels
///
/// `right` and `bottom` are exclusive, so `width = right - left`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowBounds {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl WindowBounds {
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Build bounds from an origin and a size
    pub fn from_origin_size(x: i32, y: i32, width: u32, height: u32) -> Self {
        let right = x.saturating_add(i32::try_from(width).unwrap_or(i32::MAX));
        let bottom = y.saturating_add(i32::try_from(height).unwrap_or(i32::MAX));
        Self::new(x, y, right, bottom)
    }

    /// Signed width; negative when the rectangle is inverted
    pub fn width(&self) -> i64 {
        i64::from(self.right) - i64::from(self.left)
    }

    /// Signed height; negative when the rectangle is inverted
    pub fn height(&self) -> i64 {
        i64::from(self.bottom) - i64::from(self.top)
    }

    /// True when the rectangle covers no pixels
    pub fn is_degenerate(&self) -> bool {
        self.width() <= 0 || self.height() <= 0
    }
}

impl std::fmt::Display for WindowBounds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({}, {}, {}, {})",
            self.left, self.top, self.right, self.bottom
        )
    }
}

/// Snapshot of a visible window, as reported by the window system
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowInfo {
    id: u32,
    title: String,
    app_name: String,
    x: i32,
    y: i32,
    width: u32,
    height: u32,
    is_minimized: bool,
    pid: Option<i32>,
}

impl WindowInfo {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: u32,
        title: String,
        app_name: String,
        x: i32,
        y: i32,
        width: u32,
        height: u32,
        is_minimized: bool,
        pid: Option<i32>,
    ) -> Self {
        Self {
            id,
            title,
            app_name,
            x,
            y,
            width,
            height,
            is_minimized,
            pid,
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }
    pub fn title(&self) -> &str {
        &self.title
    }
    pub fn app_name(&self) -> &str {
        &self.app_name
    }
    pub fn x(&self) -> i32 {
        self.x
    }
    pub fn y(&self) -> i32 {
        self.y
    }
    pub fn width(&self) -> u32 {
        self.width
    }
    pub fn height(&self) -> u32 {
        self.height
    }
    pub fn is_minimized(&self) -> bool {
        self.is_minimized
    }
    pub fn pid(&self) -> Option<i32> {
        self.pid
    }

    pub fn bounds(&self) -> WindowBounds {
        WindowBounds::from_origin_size(self.x, self.y, self.width, self.height)
    }
}

/// Snapshot of a connected monitor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitorInfo {
    index: u32,
    name: String,
    x: i32,
    y: i32,
    width: u32,
    height: u32,
    is_primary: bool,
}

impl MonitorInfo {
    pub fn new(
        index: u32,
        name: String,
        x: i32,
        y: i32,
        width: u32,
        height: u32,
        is_primary: bool,
    ) -> Self {
        Self {
            index,
            name,
            x,
            y,
            width,
            height,
            is_primary,
        }
    }

    pub fn index(&self) -> u32 {
        self.index
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn x(&self) -> i32 {
        self.x
    }
    pub fn y(&self) -> i32 {
        self.y
    }
    pub fn width(&self) -> u32 {
        self.width
    }
    pub fn height(&self) -> u32 {
        self.height
    }
    pub fn is_primary(&self) -> bool {
        self.is_primary
    }
}
