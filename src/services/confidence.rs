use crate::models::result::round_to;
use crate::models::{ConfidenceModel, EngineConfig};

impl ConfidenceModel {
    /// `clamp(base + scale * input, min, max)`, rounded to one decimal.
    ///
    /// `input` is clamped to `0..=1` first and NaN counts as 0, so the
    /// output is monotonic in `input` and always within `[min, max]`.
    pub fn evaluate(&self, input: f64) -> f64 {
        let x = if input.is_nan() {
            0.0
        } else {
            input.clamp(0.0, 1.0)
        };
        round_to(self.base + self.scale * x, 1).clamp(self.min, self.max)
    }
}

/// Turns a detection score or a brightness value into a bounded score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfidenceEstimator {
    detection: ConfidenceModel,
    brightness: ConfidenceModel,
}

impl Default for ConfidenceEstimator {
    fn default() -> Self {
        Self::from_config(&EngineConfig::default())
    }
}

impl ConfidenceEstimator {
    pub fn new(detection: ConfidenceModel, brightness: ConfidenceModel) -> Self {
        Self {
            detection,
            brightness,
        }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(config.confidence.detection, config.confidence.brightness)
    }

    /// Detection score drives the result when present, brightness otherwise
    pub fn estimate(&self, detection_confidence: Option<f64>, brightness: f64) -> f64 {
        match detection_confidence {
            Some(score) => self.for_detection(score),
            None => self.for_brightness(brightness),
        }
    }

    pub fn for_detection(&self, score: f64) -> f64 {
        self.detection.evaluate(score)
    }

    pub fn for_brightness(&self, brightness: f64) -> f64 {
        self.brightness.evaluate(brightness)
    }
}
