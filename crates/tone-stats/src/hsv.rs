//! Hue/saturation/value conversion
//!
//! Saturation and value use the 8-bit scale (0..=255) that common imaging
//! libraries produce for `u8` images, since downstream thresholds are
//! expressed as fractions of 255. Hue is in degrees.

/// A color in HSV space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    /// Hue in degrees, `0.0..360.0`
    pub h: f32,
    /// Saturation, `0.0..=255.0`
    pub s: f32,
    /// Value, `0.0..=255.0`
    pub v: f32,
}

impl Hsv {
    #[inline]
    pub fn new(h: f32, s: f32, v: f32) -> Self {
        Self { h, s, v }
    }

    /// Convert an 8-bit RGB triple.
    ///
    /// # Example
    /// ```
    /// use tone_stats::Hsv;
    /// let hsv = Hsv::from_rgb8([255, 0, 0]);
    /// assert_eq!((hsv.h, hsv.s, hsv.v), (0.0, 255.0, 255.0));
    /// ```
    pub fn from_rgb8(rgb: [u8; 3]) -> Self {
        let r = rgb[0] as f32;
        let g = rgb[1] as f32;
        let b = rgb[2] as f32;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        let v = max;
        let s = if max > 0.0 { delta / max * 255.0 } else { 0.0 };

        if delta == 0.0 {
            return Self::new(0.0, s, v);
        }

        let h = if max == r {
            60.0 * (g - b) / delta
        } else if max == g {
            120.0 + 60.0 * (b - r) / delta
        } else {
            240.0 + 60.0 * (r - g) / delta
        };

        Self::new(if h < 0.0 { h + 360.0 } else { h }, s, v)
    }
}
