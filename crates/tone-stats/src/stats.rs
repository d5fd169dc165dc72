//! Aggregate color statistics over an image region.
//!
//! [`extract`] is the single entry point: it clamps the requested region to
//! the image, averages the pixels inside it and derives the three scalar
//! features used for classification.

use crate::buffer::{ChannelOrder, PixelBuffer};
use crate::error::StatsError;
use crate::hsv::Hsv;
use crate::region::Region;

/// Which color representation the brightness and saturation features come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorModel {
    /// Per-pixel HSV conversion; brightness = mean V / 255, saturation = mean S / 255.
    #[default]
    Hsv,
    /// No HSV conversion. Brightness = mean(R, G, B) / 255 and saturation is
    /// the chroma of the mean color, `(max - min) / max`. These proxies run
    /// lower than their HSV counterparts on saturated inputs, so rule tables
    /// tuned against HSV should not be reused unchanged.
    RgbOnly,
}

/// Per-channel HSV means.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HsvMeans {
    /// Mean hue in degrees (arithmetic, not circular)
    pub h: f64,
    /// Mean saturation, 0..=255
    pub s: f64,
    /// Mean value, 0..=255
    pub v: f64,
}

/// The three derived scalars the season rules operate on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneFeatures {
    /// `(mean R - mean B) / 255`, roughly -1..=1
    pub warmth: f64,
    /// 0..=1
    pub brightness: f64,
    /// 0..=1
    pub saturation: f64,
}

impl ToneFeatures {
    #[inline]
    pub fn new(warmth: f64, brightness: f64, saturation: f64) -> Self {
        Self {
            warmth,
            brightness,
            saturation,
        }
    }
}

/// Immutable summary of a region's colors.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorStatistics {
    /// Mean R, G, B (0..=255), always in RGB order
    pub mean_rgb: [f64; 3],
    /// HSV means; `None` when extracted with [`ColorModel::RgbOnly`]
    pub mean_hsv: Option<HsvMeans>,
    pub warmth: f64,
    pub brightness: f64,
    pub saturation: f64,
    /// Model the brightness/saturation features were derived with
    pub model: ColorModel,
    /// The in-bounds region that was averaged
    pub region: Region,
    pub pixel_count: u64,
}

impl ColorStatistics {
    #[inline]
    pub fn features(&self) -> ToneFeatures {
        ToneFeatures::new(self.warmth, self.brightness, self.saturation)
    }
}

/// Compute statistics for `region` of `buffer`, or the whole buffer if `None`.
///
/// The region is clipped so that `x + width <= image width` and
/// `y + height <= image height`; pixels outside the image are never read.
/// Requesting a box that overhangs the image is therefore equivalent to
/// requesting its clipped part.
///
/// # Errors
///
/// [`StatsError::EmptyRegion`] if nothing remains after clipping.
///
/// # Example
///
/// ```
/// use tone_stats::{extract, ColorModel, PixelBuffer, Region};
///
/// let samples = [255u8, 0, 0].repeat(4);
/// let buffer = PixelBuffer::rgb(&samples, 2, 2).unwrap();
///
/// let stats = extract(&buffer, Some(Region::new(0, 0, 10, 10)), ColorModel::RgbOnly).unwrap();
/// assert_eq!(stats.warmth, 1.0);
/// assert_eq!(stats.pixel_count, 4);
/// ```
pub fn extract(
    buffer: &PixelBuffer<'_>,
    region: Option<Region>,
    model: ColorModel,
) -> Result<ColorStatistics, StatsError> {
    let requested = region.unwrap_or_else(|| Region::full(buffer.width(), buffer.height()));
    let clamped = requested
        .clamp_to(buffer.width(), buffer.height())
        .ok_or(StatsError::EmptyRegion { requested })?;

    let (ri, bi) = match buffer.order() {
        ChannelOrder::Rgb => (0, 2),
        ChannelOrder::Bgr => (2, 0),
    };

    let mut sum_rgb = [0u64; 3];
    let mut sum_hsv = [0f64; 3];

    for y in clamped.y0..clamped.y1 {
        for px in buffer.row_segment(y, clamped.x0, clamped.x1).chunks_exact(3) {
            let rgb = [px[ri], px[1], px[bi]];
            sum_rgb[0] += rgb[0] as u64;
            sum_rgb[1] += rgb[1] as u64;
            sum_rgb[2] += rgb[2] as u64;

            if model == ColorModel::Hsv {
                let hsv = Hsv::from_rgb8(rgb);
                sum_hsv[0] += hsv.h as f64;
                sum_hsv[1] += hsv.s as f64;
                sum_hsv[2] += hsv.v as f64;
            }
        }
    }

    let n = clamped.area();
    let nf = n as f64;
    let mean_rgb = [
        sum_rgb[0] as f64 / nf,
        sum_rgb[1] as f64 / nf,
        sum_rgb[2] as f64 / nf,
    ];
    let warmth = (mean_rgb[0] - mean_rgb[2]) / 255.0;

    let (mean_hsv, brightness, saturation) = match model {
        ColorModel::Hsv => {
            let means = HsvMeans {
                h: sum_hsv[0] / nf,
                s: sum_hsv[1] / nf,
                v: sum_hsv[2] / nf,
            };
            (Some(means), means.v / 255.0, means.s / 255.0)
        }
        ColorModel::RgbOnly => {
            let max = mean_rgb[0].max(mean_rgb[1]).max(mean_rgb[2]);
            let min = mean_rgb[0].min(mean_rgb[1]).min(mean_rgb[2]);
            let chroma = if max > 0.0 { (max - min) / max } else { 0.0 };
            let mean = (mean_rgb[0] + mean_rgb[1] + mean_rgb[2]) / 3.0;
            (None, mean / 255.0, chroma)
        }
    };

    Ok(ColorStatistics {
        mean_rgb,
        mean_hsv,
        warmth,
        brightness,
        saturation,
        model,
        region: clamped.to_region(),
        pixel_count: n,
    })
}
