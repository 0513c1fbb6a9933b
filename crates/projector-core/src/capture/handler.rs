use image::{DynamicImage, RgbImage, imageops};
use tracing::{debug, info, warn};

use super::errors::CaptureError;
use super::traits::FrameGrabber;
use crate::frame::{ChannelOrder, Frame};
use crate::window::WindowBounds;

/// Width and height of a capture rectangle, rejecting degenerate rectangles
pub fn region_size(bounds: WindowBounds) -> Result<(u32, u32), CaptureError> {
    let empty = || CaptureError::EmptyRegion {
        bounds: bounds.to_string(),
        width: bounds.width(),
        height: bounds.height(),
    };

    if bounds.is_degenerate() {
        return Err(empty());
    }

    let width = u32::try_from(bounds.width()).map_err(|_| empty())?;
    let height = u32::try_from(bounds.height()).map_err(|_| empty())?;
    Ok((width, height))
}

/// Part of a capture rectangle that is visible on the monitor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct VisibleRegion {
    /// Monitor-local origin of the visible part
    x: u32,
    y: u32,
    width: u32,
    height: u32,
    /// Where the visible part sits inside the full rectangle
    offset_x: u32,
    offset_y: u32,
    /// Size of the full rectangle
    full_width: u32,
    full_height: u32,
}

/// Clip a screen rectangle to the monitor and translate it to monitor-local
/// coordinates
///
/// Only a rectangle with no pixel on the monitor is rejected.
fn monitor_local_region(
    bounds: WindowBounds,
    monitor_bounds: WindowBounds,
    monitor_name: &str,
) -> Result<VisibleRegion, CaptureError> {
    let (full_width, full_height) = region_size(bounds)?;

    let visible = WindowBounds::new(
        bounds.left.max(monitor_bounds.left),
        bounds.top.max(monitor_bounds.top),
        bounds.right.min(monitor_bounds.right),
        bounds.bottom.min(monitor_bounds.bottom),
    );
    if visible.is_degenerate() {
        return Err(CaptureError::RegionOutOfBounds {
            bounds: bounds.to_string(),
            monitor: monitor_name.to_string(),
            monitor_bounds: monitor_bounds.to_string(),
        });
    }

    // Every difference below is non-negative and no larger than the rectangle
    let diff = |a: i32, b: i32| (i64::from(a) - i64::from(b)) as u32;
    Ok(VisibleRegion {
        x: diff(visible.left, monitor_bounds.left),
        y: diff(visible.top, monitor_bounds.top),
        width: diff(visible.right, visible.left),
        height: diff(visible.bottom, visible.top),
        offset_x: diff(visible.left, bounds.left),
        offset_y: diff(visible.top, bounds.top),
        full_width,
        full_height,
    })
}

/// Place the visible pixels into a black image the size of the full rectangle
fn pad_to_full_region(visible: RgbImage, region: VisibleRegion) -> RgbImage {
    if region.offset_x == 0
        && region.offset_y == 0
        && visible.dimensions() == (region.full_width, region.full_height)
    {
        return visible;
    }

    let mut full = RgbImage::new(region.full_width, region.full_height);
    imageops::replace(
        &mut full,
        &visible,
        i64::from(region.offset_x),
        i64::from(region.offset_y),
    );
    full
}

/// Frame grabber reading from one physical monitor
pub struct ScreenGrabber {
    monitor: xcap::Monitor,
    name: String,
    bounds: WindowBounds,
}

impl ScreenGrabber {
    /// Grabber for the primary monitor, falling back to the first monitor
    pub fn primary() -> Result<Self, CaptureError> {
        info!(event = "core.capture.monitor_select_started");

        let monitors = xcap::Monitor::all().map_err(|e| CaptureError::MonitorEnumerationFailed {
            message: e.to_string(),
        })?;

        let primary_idx = monitors
            .iter()
            .position(|m| m.is_primary().unwrap_or(false));

        let monitor = match primary_idx {
            Some(idx) => monitors.into_iter().nth(idx),
            None => {
                warn!(event = "core.capture.no_primary_found_using_fallback");
                monitors.into_iter().next()
            }
        }
        .ok_or(CaptureError::NoMonitor)?;

        Self::from_monitor(monitor)
    }

    fn from_monitor(monitor: xcap::Monitor) -> Result<Self, CaptureError> {
        let property_error = |property: &str, e: xcap::XCapError| {
            CaptureError::MonitorPropertyFailed {
                property: property.to_string(),
                message: e.to_string(),
            }
        };

        let x = monitor.x().map_err(|e| property_error("x", e))?;
        let y = monitor.y().map_err(|e| property_error("y", e))?;
        let width = monitor.width().map_err(|e| property_error("width", e))?;
        let height = monitor.height().map_err(|e| property_error("height", e))?;
        let name = monitor
            .name()
            .unwrap_or_else(|_| "Primary monitor".to_string());

        let bounds = WindowBounds::from_origin_size(x, y, width, height);
        info!(
            event = "core.capture.monitor_selected",
            monitor = name.as_str(),
            width = width,
            height = height
        );

        Ok(Self {
            monitor,
            name,
            bounds,
        })
    }

    pub fn monitor_name(&self) -> &str {
        &self.name
    }

    pub fn monitor_bounds(&self) -> WindowBounds {
        self.bounds
    }
}

impl FrameGrabber for ScreenGrabber {
    fn capture_region(&mut self, bounds: WindowBounds) -> Result<Frame, CaptureError> {
        let region = monitor_local_region(bounds, self.bounds, &self.name)?;

        let rgba = self
            .monitor
            .capture_region(region.x, region.y, region.width, region.height)
            .map_err(|e| CaptureError::CaptureFailed {
                message: e.to_string(),
            })?;

        let visible = DynamicImage::ImageRgba8(rgba).into_rgb8();
        if visible.dimensions() != (region.width, region.height) {
            return Err(CaptureError::SizeMismatch {
                expected_width: region.width,
                expected_height: region.height,
                actual_width: visible.width(),
                actual_height: visible.height(),
            });
        }

        if (region.width, region.height) != (region.full_width, region.full_height) {
            debug!(
                event = "core.capture.region_clipped",
                bounds = %bounds,
                visible_width = region.width,
                visible_height = region.height
            );
        }

        let pixels = pad_to_full_region(visible, region);
        debug!(
            event = "core.capture.region_captured",
            width = pixels.width(),
            height = pixels.height()
        );
        Ok(Frame::new(pixels, ChannelOrder::Rgb))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_size_matches_bounds() {
        let bounds = WindowBounds::new(100, 50, 900, 650);
        assert_eq!(region_size(bounds).unwrap(), (800, 600));
    }

    #[test]
    fn test_region_size_rejects_zero_width() {
        let bounds = WindowBounds::new(100, 50, 100, 650);
        match region_size(bounds) {
            Err(CaptureError::EmptyRegion { width, height, .. }) => {
                assert_eq!(width, 0);
                assert_eq!(height, 600);
            }
            other => panic!("expected EmptyRegion, got {:?}", other),
        }
    }

    #[test]
    fn test_region_size_rejects_zero_height() {
        let bounds = WindowBounds::new(100, 50, 900, 50);
        assert!(matches!(
            region_size(bounds),
            Err(CaptureError::EmptyRegion { .. })
        ));
    }

    #[test]
    fn test_region_size_rejects_inverted_rectangle() {
        let bounds = WindowBounds::new(900, 650, 100, 50);
        assert!(matches!(
            region_size(bounds),
            Err(CaptureError::EmptyRegion { .. })
        ));
    }

    fn visible(x: u32, y: u32, width: u32, height: u32) -> VisibleRegion {
        VisibleRegion {
            x,
            y,
            width,
            height,
            offset_x: 0,
            offset_y: 0,
            full_width: width,
            full_height: height,
        }
    }

    #[test]
    fn test_monitor_local_region_translates_origin() {
        let monitor = WindowBounds::new(-1920, 0, 0, 1080);
        let window = WindowBounds::new(-1820, 50, -1020, 650);
        assert_eq!(
            monitor_local_region(window, monitor, "left").unwrap(),
            visible(100, 50, 800, 600)
        );
    }

    #[test]
    fn test_monitor_local_region_clips_maximized_window() {
        let monitor = WindowBounds::new(0, 0, 1920, 1080);
        let window = WindowBounds::new(-8, -8, 1928, 1048);

        let region = monitor_local_region(window, monitor, "primary").unwrap();
        assert_eq!(
            region,
            VisibleRegion {
                x: 0,
                y: 0,
                width: 1920,
                height: 1048,
                offset_x: 8,
                offset_y: 8,
                full_width: 1936,
                full_height: 1056,
            }
        );
    }

    #[test]
    fn test_monitor_local_region_clips_right_overhang() {
        let monitor = WindowBounds::new(0, 0, 1920, 1080);
        let window = WindowBounds::new(1500, 100, 2100, 500);

        let region = monitor_local_region(window, monitor, "primary").unwrap();
        assert_eq!((region.x, region.y), (1500, 100));
        assert_eq!((region.width, region.height), (420, 400));
        assert_eq!((region.offset_x, region.offset_y), (0, 0));
        assert_eq!((region.full_width, region.full_height), (600, 400));
    }

    #[test]
    fn test_monitor_local_region_rejects_no_overlap() {
        let monitor = WindowBounds::new(0, 0, 1920, 1080);
        let window = WindowBounds::new(2000, 100, 2600, 500);
        assert!(matches!(
            monitor_local_region(window, monitor, "primary"),
            Err(CaptureError::RegionOutOfBounds { .. })
        ));

        // Touching the edge is still no overlap
        let window = WindowBounds::new(1920, 0, 2400, 300);
        assert!(matches!(
            monitor_local_region(window, monitor, "primary"),
            Err(CaptureError::RegionOutOfBounds { .. })
        ));
    }

    #[test]
    fn test_monitor_local_region_checks_degenerate_first() {
        let monitor = WindowBounds::new(0, 0, 1920, 1080);
        let window = WindowBounds::new(5000, 5000, 5000, 5000);
        assert!(matches!(
            monitor_local_region(window, monitor, "primary"),
            Err(CaptureError::EmptyRegion { .. })
        ));
    }

    #[test]
    fn test_monitor_local_region_accepts_full_monitor() {
        let monitor = WindowBounds::new(0, 0, 1920, 1080);
        assert_eq!(
            monitor_local_region(monitor, monitor, "primary").unwrap(),
            visible(0, 0, 1920, 1080)
        );
    }

    #[test]
    fn test_pad_to_full_region_keeps_size_and_fills_black() {
        let monitor = WindowBounds::new(0, 0, 100, 100);
        let window = WindowBounds::new(-4, -2, 16, 8);
        let region = monitor_local_region(window, monitor, "primary").unwrap();
        assert_eq!((region.width, region.height), (16, 8));

        let captured = RgbImage::from_pixel(16, 8, image::Rgb([200, 100, 50]));
        let padded = pad_to_full_region(captured, region);

        assert_eq!(padded.dimensions(), (20, 10));
        assert_eq!(padded.dimensions(), region_size(window).unwrap());
        assert_eq!(padded.get_pixel(0, 0).0, [0, 0, 0]);
        assert_eq!(padded.get_pixel(3, 9).0, [0, 0, 0]);
        assert_eq!(padded.get_pixel(19, 1).0, [0, 0, 0]);
        assert_eq!(padded.get_pixel(4, 2).0, [200, 100, 50]);
        assert_eq!(padded.get_pixel(19, 9).0, [200, 100, 50]);
    }

    #[test]
    fn test_pad_to_full_region_passes_unclipped_image_through() {
        let region = visible(10, 10, 4, 3);
        let captured = RgbImage::from_pixel(4, 3, image::Rgb([1, 2, 3]));
        let padded = pad_to_full_region(captured.clone(), region);
        assert_eq!(padded, captured);
    }
}
