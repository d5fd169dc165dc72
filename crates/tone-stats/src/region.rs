//! Rectangular regions and clamping against image bounds.

use std::fmt;

/// A rectangle in pixel coordinates relative to the source image.
///
/// Coordinates are signed because face localizers routinely report boxes
/// that start left of or above the frame. Use [`Region::clamp_to`] to obtain
/// the in-bounds part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Region {
    /// Left edge
    pub x: i32,
    /// Top edge
    pub y: i32,
    /// Width in pixels (may be zero or negative for degenerate boxes)
    pub width: i32,
    /// Height in pixels (may be zero or negative for degenerate boxes)
    pub height: i32,
}

/// The in-bounds part of a [`Region`], as half-open pixel ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClampedRegion {
    pub x0: u32,
    pub y0: u32,
    pub x1: u32,
    pub y1: u32,
}

impl ClampedRegion {
    #[inline]
    pub fn width(&self) -> u32 {
        self.x1 - self.x0
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.y1 - self.y0
    }

    #[inline]
    pub fn area(&self) -> u64 {
        self.width() as u64 * self.height() as u64
    }

    /// The clamped box expressed as a [`Region`] again.
    pub fn to_region(self) -> Region {
        Region::new(
            self.x0 as i32,
            self.y0 as i32,
            self.width() as i32,
            self.height() as i32,
        )
    }
}

impl Region {
    #[inline]
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Region covering a whole image.
    pub fn full(image_width: u32, image_height: u32) -> Self {
        Self::new(
            0,
            0,
            image_width.min(i32::MAX as u32) as i32,
            image_height.min(i32::MAX as u32) as i32,
        )
    }

    /// Clip this region to `[0, image_width) x [0, image_height)`.
    ///
    /// Returns `None` if nothing of the region remains, i.e. the clipped
    /// width or height is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use tone_stats::Region;
    ///
    /// let clamped = Region::new(-10, 5, 40, 100).clamp_to(20, 50).unwrap();
    /// assert_eq!((clamped.x0, clamped.y0, clamped.x1, clamped.y1), (0, 5, 20, 50));
    ///
    /// assert!(Region::new(30, 0, 10, 10).clamp_to(20, 20).is_none());
    /// ```
    pub fn clamp_to(&self, image_width: u32, image_height: u32) -> Option<ClampedRegion> {
        // i64 so that x + width cannot overflow
        let x0 = (self.x as i64).max(0);
        let y0 = (self.y as i64).max(0);
        let x1 = (self.x as i64 + self.width as i64).min(image_width as i64);
        let y1 = (self.y as i64 + self.height as i64).min(image_height as i64);

        if x1 <= x0 || y1 <= y0 {
            return None;
        }

        Some(ClampedRegion {
            x0: x0 as u32,
            y0: y0 as u32,
            x1: x1 as u32,
            y1: y1 as u32,
        })
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}) {}x{}", self.x, self.y, self.width, self.height)
    }
}
