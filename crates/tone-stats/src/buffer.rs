//! Borrowed view over a decoded 8-bit, 3-channel image.

use crate::error::InvalidInputKind;

/// Order of the three samples within each pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChannelOrder {
    #[default]
    Rgb,
    Bgr,
}

/// A read-only, validated view over interleaved 8-bit samples.
///
/// The samples are owned by whoever decoded the image; the buffer only
/// borrows them, so the same decoded image can be analyzed any number of
/// times without copying.
///
/// # Example
///
/// ```
/// use tone_stats::{ChannelOrder, PixelBuffer};
///
/// let samples = vec![255u8, 0, 0, 255, 0, 0];
/// let buffer = PixelBuffer::new(&samples, 2, 1, 3, ChannelOrder::Rgb).unwrap();
/// assert_eq!(buffer.rgb_at(1, 0), [255, 0, 0]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PixelBuffer<'a> {
    samples: &'a [u8],
    width: u32,
    height: u32,
    order: ChannelOrder,
}

impl<'a> PixelBuffer<'a> {
    /// Number of samples per pixel this crate accepts.
    pub const CHANNELS: usize = 3;

    /// Wrap `samples` as a `width x height` image with `channels` samples per pixel.
    ///
    /// # Errors
    ///
    /// - [`InvalidInputKind::ZeroDimensions`] if either dimension is zero
    /// - [`InvalidInputKind::ChannelCount`] if `channels != 3`
    /// - [`InvalidInputKind::LengthMismatch`] if the slice length is wrong
    pub fn new(
        samples: &'a [u8],
        width: u32,
        height: u32,
        channels: usize,
        order: ChannelOrder,
    ) -> Result<Self, InvalidInputKind> {
        if width == 0 || height == 0 {
            return Err(InvalidInputKind::ZeroDimensions { width, height });
        }
        if channels != Self::CHANNELS {
            return Err(InvalidInputKind::ChannelCount(channels));
        }

        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(channels))
            .ok_or(InvalidInputKind::LengthMismatch {
                expected: usize::MAX,
                actual: samples.len(),
            })?;
        if samples.len() != expected {
            return Err(InvalidInputKind::LengthMismatch {
                expected,
                actual: samples.len(),
            });
        }

        Ok(Self {
            samples,
            width,
            height,
            order,
        })
    }

    /// Shorthand for an RGB-ordered buffer.
    pub fn rgb(samples: &'a [u8], width: u32, height: u32) -> Result<Self, InvalidInputKind> {
        Self::new(samples, width, height, Self::CHANNELS, ChannelOrder::Rgb)
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn order(&self) -> ChannelOrder {
        self.order
    }

    /// Pixel at `(x, y)` as `[R, G, B]`, regardless of storage order.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` lies outside the image.
    #[inline]
    pub fn rgb_at(&self, x: u32, y: u32) -> [u8; 3] {
        assert!(x < self.width && y < self.height, "pixel ({x}, {y}) out of bounds");
        let i = (y as usize * self.width as usize + x as usize) * Self::CHANNELS;
        let px = &self.samples[i..i + Self::CHANNELS];
        match self.order {
            ChannelOrder::Rgb => [px[0], px[1], px[2]],
            ChannelOrder::Bgr => [px[2], px[1], px[0]],
        }
    }

    /// One row segment `[x0, x1)` of row `y` as raw interleaved samples.
    #[inline]
    pub(crate) fn row_segment(&self, y: u32, x0: u32, x1: u32) -> &'a [u8] {
        let row = y as usize * self.width as usize;
        let start = (row + x0 as usize) * Self::CHANNELS;
        let end = (row + x1 as usize) * Self::CHANNELS;
        &self.samples[start..end]
    }
}
