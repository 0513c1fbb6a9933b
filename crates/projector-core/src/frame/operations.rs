use image::imageops::{self, FilterType};
use tracing::debug;

use super::types::{ChannelOrder, Frame, TargetResolution};

/// Filter used when stretching frames to the target resolution
const RESIZE_FILTER: FilterType = FilterType::Triangle;

/// Swap the first and third channel of every pixel (RGB <-> BGR)
///
/// Applying it twice yields the original frame.
pub fn reorder_channels(frame: Frame) -> Frame {
    let (mut pixels, order) = frame.into_parts();
    for pixel in pixels.pixels_mut() {
        pixel.0.swap(0, 2);
    }
    Frame::new(pixels, order.swapped())
}

/// Bring a frame into `target` channel order, leaving it untouched if already there
pub fn convert_channel_order(frame: Frame, target: ChannelOrder) -> Frame {
    if frame.order() == target {
        return frame;
    }
    reorder_channels(frame)
}

/// Stretch a frame to exactly the target resolution
///
/// Aspect ratio is not preserved.
pub fn resize_to_target(frame: &Frame, target: TargetResolution) -> Frame {
    if frame.dimensions() == (target.width(), target.height()) {
        return frame.clone();
    }

    debug!(
        event = "core.frame.resize_started",
        from_width = frame.width(),
        from_height = frame.height(),
        to_width = target.width(),
        to_height = target.height()
    );

    let resized = imageops::resize(
        frame.pixels(),
        target.width(),
        target.height(),
        RESIZE_FILTER,
    );
    Frame::new(resized, frame.order())
}
