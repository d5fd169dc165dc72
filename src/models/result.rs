use serde::{Deserialize, Serialize};
use tone_stats::ColorStatistics;

use crate::models::{Palette, Season};

/// Which path through the engine produced a result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisMethod {
    /// Statistics over the localized face region
    FaceDetection,
    /// No face found, whole image analyzed because fallback is enabled
    WholeImageFallback,
    /// RGB-only statistics with the reduced rule set
    Heuristic,
    /// Random season from the demo strategy
    Demo,
}

/// Round to `decimals` places, half away from zero
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HsvValues {
    pub h: f64,
    pub s: f64,
    pub v: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RgbValues {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

/// Rounded color statistics for the debug block
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorValues {
    pub warmth: f64,
    pub brightness: f64,
    pub saturation: f64,
    /// Absent for RGB-only analysis
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hsv: Option<HsvValues>,
    pub rgb: RgbValues,
}

impl From<&ColorStatistics> for ColorValues {
    fn from(stats: &ColorStatistics) -> Self {
        let [r, g, b] = stats.mean_rgb;
        Self {
            warmth: round_to(stats.warmth, 3),
            brightness: round_to(stats.brightness, 3),
            saturation: round_to(stats.saturation, 3),
            hsv: stats.mean_hsv.map(|m| HsvValues {
                h: round_to(m.h, 1),
                s: round_to(m.s, 1),
                v: round_to(m.v, 1),
            }),
            rgb: RgbValues {
                r: round_to(r, 1),
                g: round_to(g, 1),
                b: round_to(b, 1),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebugInfo {
    pub detected_season: Season,
    pub face_detected: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detection_confidence: Option<f64>,
    pub method: AnalysisMethod,
    pub color_values: ColorValues,
}

/// Outcome of one classification. Built once per request by the engine.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassificationResult {
    pub season: Season,
    /// 0..=100, one decimal
    pub confidence: f64,
    pub palette: Palette,
    pub debug: Option<DebugInfo>,
}

/// Wire shape of a result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResponse {
    /// Localized season name
    pub personal_color: String,
    pub personal_color_en: String,
    pub confidence: f64,
    pub best_colors: Vec<String>,
    pub worst_colors: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debug: Option<DebugInfo>,
}

impl From<&ClassificationResult> for AnalysisResponse {
    fn from(result: &ClassificationResult) -> Self {
        Self {
            personal_color: result.palette.localized_name.clone(),
            personal_color_en: result.palette.name.clone(),
            confidence: result.confidence,
            best_colors: result.palette.best_colors.clone(),
            worst_colors: result.palette.worst_colors.clone(),
            description: result.palette.description.clone(),
            debug: result.debug.clone(),
        }
    }
}

impl From<ClassificationResult> for AnalysisResponse {
    fn from(result: ClassificationResult) -> Self {
        Self::from(&result)
    }
}
