use std::str::FromStr;

use tone_stats::{PixelBuffer, Region};

/// A face bounding box with the localizer's detection score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceRegion {
    pub region: Region,
    /// Detection score in `0..=1`
    pub confidence: f64,
}

impl FaceRegion {
    /// Scores outside `0..=1` are clamped; NaN becomes 0.
    pub fn new(region: Region, confidence: f64) -> Self {
        let confidence = if confidence.is_nan() {
            0.0
        } else {
            confidence.clamp(0.0, 1.0)
        };
        Self { region, confidence }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid face region {0:?}: expected x,y,width,height[@score]")]
pub struct ParseFaceRegionError(String);

impl FromStr for FaceRegion {
    type Err = ParseFaceRegionError;

    /// Parses `x,y,width,height` with an optional `@score` suffix
    /// (default score 1.0), e.g. `120,80,200,240@0.87`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseFaceRegionError(s.to_string());

        let (rect, score) = match s.split_once('@') {
            Some((rect, score)) => (rect, score.trim().parse::<f64>().map_err(|_| err())?),
            None => (s, 1.0),
        };

        let parts: Vec<i32> = rect
            .split(',')
            .map(|p| p.trim().parse::<i32>())
            .collect::<Result<_, _>>()
            .map_err(|_| err())?;

        match parts.as_slice() {
            &[x, y, width, height] => Ok(FaceRegion::new(Region::new(x, y, width, height), score)),
            _ => Err(err()),
        }
    }
}

/// Finds at most one face in a decoded image.
///
/// Implementations wrap an actual detector; the engine only relies on this
/// contract and never on how the box was found.
pub trait FaceLocalizer: Send + Sync {
    fn locate(&self, image: &PixelBuffer<'_>) -> Option<FaceRegion>;
}

/// Localizer that never finds a face
#[derive(Debug, Clone, Copy, Default)]
pub struct NoFaceLocalizer;

impl FaceLocalizer for NoFaceLocalizer {
    fn locate(&self, _image: &PixelBuffer<'_>) -> Option<FaceRegion> {
        None
    }
}

/// Localizer that reports a known box for every image
#[derive(Debug, Clone, Copy)]
pub struct FixedFaceLocalizer {
    face: FaceRegion,
}

impl FixedFaceLocalizer {
    pub fn new(face: FaceRegion) -> Self {
        Self { face }
    }
}

impl FaceLocalizer for FixedFaceLocalizer {
    fn locate(&self, _image: &PixelBuffer<'_>) -> Option<FaceRegion> {
        Some(self.face)
    }
}
