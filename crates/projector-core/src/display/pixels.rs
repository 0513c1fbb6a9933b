use super::errors::DisplayError;
use crate::frame::{ChannelOrder, Frame, TargetResolution, resize_to_target};

/// Software framebuffers take `0x00RRGGBB` words, i.e. BGR bytes
pub(super) fn ensure_bgr(frame: &Frame) -> Result<(), DisplayError> {
    if frame.order() != ChannelOrder::Bgr {
        return Err(DisplayError::ChannelOrderMismatch {
            expected: ChannelOrder::Bgr.as_str(),
            actual: frame.order().as_str(),
        });
    }
    Ok(())
}

/// Pack a BGR frame into `0x00RRGGBB` words for a software framebuffer
///
/// BGR byte order is the little-endian memory layout of those words, which is
/// why frames are converted to BGR before display.
pub fn pack_0rgb(frame: &Frame) -> Result<Vec<u32>, DisplayError> {
    ensure_bgr(frame)?;

    Ok(frame
        .pixels()
        .pixels()
        .map(|p| {
            let [b, g, r] = p.0;
            u32::from_le_bytes([b, g, r, 0])
        })
        .collect())
}

/// Pack a BGR frame for a window of `width` x `height`
///
/// The frame is stretched to the window when the sizes differ, so the packed
/// buffer always covers the whole window.
pub fn pack_0rgb_for_window(
    frame: &Frame,
    width: u32,
    height: u32,
) -> Result<Vec<u32>, DisplayError> {
    ensure_bgr(frame)?;
    if frame.dimensions() == (width, height) {
        return pack_0rgb(frame);
    }

    let window = TargetResolution::new(width, height)
        .map_err(|_| DisplayError::EmptyFrame { width, height })?;
    pack_0rgb(&resize_to_target(frame, window))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::reorder_channels;

    #[test]
    fn test_pack_bgr_pixel() {
        let frame = Frame::from_raw(1, 1, vec![0x33, 0x22, 0x11], ChannelOrder::Bgr).unwrap();
        assert_eq!(pack_0rgb(&frame).unwrap(), vec![0x0011_2233]);
    }

    #[test]
    fn test_pack_after_reorder_keeps_colors() {
        // Pure red captured as RGB must come out as 0x00FF0000
        let rgb = Frame::from_raw(2, 1, vec![255, 0, 0, 0, 0, 255], ChannelOrder::Rgb).unwrap();
        let packed = pack_0rgb(&reorder_channels(rgb)).unwrap();
        assert_eq!(packed, vec![0x00FF_0000, 0x0000_00FF]);
    }

    #[test]
    fn test_pack_rejects_rgb_frame() {
        let frame = Frame::from_raw(1, 1, vec![1, 2, 3], ChannelOrder::Rgb).unwrap();
        assert!(matches!(
            pack_0rgb(&frame),
            Err(DisplayError::ChannelOrderMismatch { .. })
        ));
    }

    #[test]
    fn test_pack_row_major_length() {
        let frame = Frame::from_raw(3, 2, vec![0; 18], ChannelOrder::Bgr).unwrap();
        assert_eq!(pack_0rgb(&frame).unwrap().len(), 6);
    }

    #[test]
    fn test_pack_for_window_matching_size_is_unscaled() {
        let frame = Frame::from_raw(2, 1, vec![1, 2, 3, 4, 5, 6], ChannelOrder::Bgr).unwrap();
        assert_eq!(
            pack_0rgb_for_window(&frame, 2, 1).unwrap(),
            pack_0rgb(&frame).unwrap()
        );
    }

    #[test]
    fn test_pack_for_larger_window_fills_window() {
        // 1920x1080 output on a 2560x1440 monitor, scaled down to keep the test quick
        let frame = Frame::from_raw(192, 108, vec![0x40; 192 * 108 * 3], ChannelOrder::Bgr)
            .unwrap();

        let packed = pack_0rgb_for_window(&frame, 256, 144).unwrap();
        assert_eq!(packed.len(), 256 * 144);
        assert!(packed.iter().all(|&word| word == 0x0040_4040));
    }

    #[test]
    fn test_pack_for_smaller_window_fills_window() {
        let frame = Frame::from_raw(4, 4, vec![0x10; 48], ChannelOrder::Bgr).unwrap();
        let packed = pack_0rgb_for_window(&frame, 3, 2).unwrap();
        assert_eq!(packed.len(), 6);
    }

    #[test]
    fn test_pack_for_window_rejects_rgb_frame() {
        let frame = Frame::from_raw(1, 1, vec![1, 2, 3], ChannelOrder::Rgb).unwrap();
        assert!(matches!(
            pack_0rgb_for_window(&frame, 8, 8),
            Err(DisplayError::ChannelOrderMismatch { .. })
        ));
    }

    #[test]
    fn test_pack_for_zero_sized_window_is_error() {
        let frame = Frame::from_raw(1, 1, vec![1, 2, 3], ChannelOrder::Bgr).unwrap();
        assert!(matches!(
            pack_0rgb_for_window(&frame, 0, 8),
            Err(DisplayError::EmptyFrame { .. })
        ));
    }
}
