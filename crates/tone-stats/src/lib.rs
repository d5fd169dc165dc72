//! tone-stats: region color statistics for skin-tone analysis
//!
//! This crate turns a decoded image (or a rectangular part of it) into the
//! handful of numbers a personal-color classifier needs: mean RGB, mean HSV
//! and three derived features.
//!
//! # Quick Start
//!
//! ```
//! use tone_stats::{extract, ColorModel, PixelBuffer, Region};
//!
//! let samples = [230u8, 180, 160].repeat(16);
//! let buffer = PixelBuffer::rgb(&samples, 4, 4).unwrap();
//!
//! let stats = extract(&buffer, Some(Region::new(1, 1, 2, 2)), ColorModel::Hsv).unwrap();
//! assert_eq!(stats.pixel_count, 4);
//! assert!(stats.warmth > 0.0);
//! ```
//!
//! # Features
//!
//! | Feature | Definition | Range |
//! |---------|------------|-------|
//! | warmth | `(mean R - mean B) / 255` | -1..=1 |
//! | brightness | `mean V / 255` (HSV) or `mean(R, G, B) / 255` (RGB only) | 0..=1 |
//! | saturation | `mean S / 255` (HSV) or chroma of the mean color (RGB only) | 0..=1 |
//!
//! HSV saturation and value use the 0..=255 scale, with hue in degrees.
//! Statistics are means of per-pixel HSV values, not the HSV of the mean
//! color, which is what matters for textured regions such as skin.
//!
//! # Bounds
//!
//! Regions are clipped to the image before any pixel is read, and a region
//! with nothing left after clipping is an error ([`StatsError::EmptyRegion`])
//! rather than silently producing NaN means.

pub mod buffer;
pub mod error;
pub mod hsv;
pub mod region;
pub mod stats;


pub use buffer::{ChannelOrder, PixelBuffer};
pub use error::{InvalidInputKind, StatsError};
pub use hsv::Hsv;
pub use region::{ClampedRegion, Region};
pub use stats::{extract, ColorModel, ColorStatistics, HsvMeans, ToneFeatures};
