use image::RgbImage;
use serde::{Deserialize, Serialize};

use super::errors::FrameError;

/// Byte order of the three colour channels in each pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChannelOrder {
    Rgb,
    Bgr,
}

impl ChannelOrder {
    /// The order obtained by swapping the first and third channel
    pub fn swapped(self) -> Self {
        match self {
            ChannelOrder::Rgb => ChannelOrder::Bgr,
            ChannelOrder::Bgr => ChannelOrder::Rgb,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ChannelOrder::Rgb => "rgb",
            ChannelOrder::Bgr => "bgr",
        }
    }
}

/// One captured frame: a row-major grid of 3-channel pixels tagged with its channel order.
///
/// The pixel storage is an [`RgbImage`] regardless of `order`; the buffer type
/// only fixes the layout (3 bytes per pixel), `order` says what the bytes mean.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pixels: RgbImage,
    order: ChannelOrder,
}

impl Frame {
    pub fn new(pixels: RgbImage, order: ChannelOrder) -> Self {
        Self { pixels, order }
    }

    /// Build a frame from raw interleaved bytes
    pub fn from_raw(
        width: u32,
        height: u32,
        data: Vec<u8>,
        order: ChannelOrder,
    ) -> Result<Self, FrameError> {
        let expected = width as usize * height as usize * 3;
        let actual = data.len();
        let pixels = RgbImage::from_raw(width, height, data).ok_or(
            FrameError::BufferSizeMismatch {
                width,
                height,
                expected,
                actual,
            },
        )?;
        Ok(Self { pixels, order })
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }
    pub fn height(&self) -> u32 {
        self.pixels.height()
    }
    pub fn dimensions(&self) -> (u32, u32) {
        self.pixels.dimensions()
    }
    pub fn order(&self) -> ChannelOrder {
        self.order
    }
    pub fn pixels(&self) -> &RgbImage {
        &self.pixels
    }

    /// Channel values of the pixel at (x, y), in this frame's channel order
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 3] {
        self.pixels.get_pixel(x, y).0
    }

    pub fn into_parts(self) -> (RgbImage, ChannelOrder) {
        (self.pixels, self.order)
    }
}

/// Fixed output size of every rendered frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetResolution {
    width: u32,
    height: u32,
}

impl TargetResolution {
    pub fn new(width: u32, height: u32) -> Result<Self, FrameError> {
        if width == 0 || height == 0 {
            return Err(FrameError::InvalidResolution { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> u32 {
        self.width
    }
    pub fn height(&self) -> u32 {
        self.height
    }
}

impl std::fmt::Display for TargetResolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
