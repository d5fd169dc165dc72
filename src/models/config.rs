use crate::assets::AssetLoader;
use serde::{Deserialize, Serialize};

/// Which classification strategy the engine runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyKind {
    /// Face region, HSV statistics, full rule table
    #[default]
    Deterministic,
    /// Face region or whole image, RGB-only statistics, two-threshold rules
    Heuristic,
    /// Random season, never the same twice in a row
    Demo,
}

impl std::str::FromStr for StrategyKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "deterministic" => Ok(StrategyKind::Deterministic),
            "heuristic" => Ok(StrategyKind::Heuristic),
            "demo" | "random" => Ok(StrategyKind::Demo),
            other => Err(format!("unknown strategy: {other}")),
        }
    }
}

/// Engine configuration loaded from config.yaml
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub strategy: StrategyKind,

    /// Analyze the whole image when the localizer finds no face
    #[serde(default)]
    pub whole_image_fallback: bool,

    #[serde(default)]
    pub thresholds: ThresholdTable,

    #[serde(default)]
    pub reduced: ReducedThresholds,

    #[serde(default)]
    pub confidence: ConfidenceConfig,
}

/// Per-season rule table. Rules are checked spring, summer, autumn;
/// winter is the unconditional default.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ThresholdTable {
    #[serde(default)]
    pub spring: SpringRule,
    #[serde(default)]
    pub summer: SummerRule,
    #[serde(default, alias = "fall")]
    pub autumn: AutumnRule,
}

/// Bright and warm: all three strictly above
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpringRule {
    pub min_warmth: f64,
    pub min_brightness: f64,
    pub min_saturation: f64,
}

impl Default for SpringRule {
    fn default() -> Self {
        Self {
            min_warmth: 0.15,
            min_brightness: 0.65,
            min_saturation: 0.30,
        }
    }
}

/// Cool and soft
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SummerRule {
    /// warmth <= max_warmth
    pub max_warmth: f64,
    /// brightness > min_brightness
    pub min_brightness: f64,
    /// saturation < max_saturation
    pub max_saturation: f64,
}

impl Default for SummerRule {
    fn default() -> Self {
        Self {
            max_warmth: 0.05,
            min_brightness: 0.60,
            max_saturation: 0.40,
        }
    }
}

/// Warm and deep
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AutumnRule {
    /// warmth > min_warmth
    pub min_warmth: f64,
    /// brightness <= max_brightness
    pub max_brightness: f64,
    /// saturation > min_saturation
    pub min_saturation: f64,
}

impl Default for AutumnRule {
    fn default() -> Self {
        Self {
            min_warmth: 0.10,
            max_brightness: 0.65,
            min_saturation: 0.35,
        }
    }
}

/// Two-threshold (warmth/brightness only) decision surface
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReducedThresholds {
    pub warmth_split: f64,
    pub brightness_split: f64,
}

impl Default for ReducedThresholds {
    fn default() -> Self {
        Self {
            warmth_split: 0.10,
            brightness_split: 0.60,
        }
    }
}

/// Affine confidence model: `clamp(base + scale * input, min, max)`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceModel {
    pub base: f64,
    pub scale: f64,
    pub min: f64,
    pub max: f64,
}

impl ConfidenceModel {
    pub const fn new(base: f64, scale: f64, min: f64, max: f64) -> Self {
        Self {
            base,
            scale,
            min,
            max,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceConfig {
    /// Driven by the face detector's score
    #[serde(default = "default_detection_model")]
    pub detection: ConfidenceModel,
    /// Driven by region brightness when no detection score exists
    #[serde(default = "default_brightness_model")]
    pub brightness: ConfidenceModel,
}

fn default_detection_model() -> ConfidenceModel {
    ConfidenceModel::new(70.0, 25.0, 70.0, 95.0)
}

fn default_brightness_model() -> ConfidenceModel {
    ConfidenceModel::new(75.0, 20.0, 75.0, 95.0)
}

impl Default for ConfidenceConfig {
    fn default() -> Self {
        Self {
            detection: default_detection_model(),
            brightness: default_brightness_model(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("Threshold {0} is not a finite number")]
    NonFiniteThreshold(&'static str),

    #[error("Confidence model {name}: bounds [{min}, {max}] must satisfy 0 <= min <= max <= 100")]
    InvalidBounds {
        name: &'static str,
        min: f64,
        max: f64,
    },

    #[error("Confidence model {name}: bounds [{min}, {max}] must have at most one decimal place")]
    UnroundedBounds {
        name: &'static str,
        min: f64,
        max: f64,
    },

    #[error("Confidence model {name}: {field} must be a finite number")]
    NonFiniteModel {
        name: &'static str,
        field: &'static str,
    },

    #[error("Confidence model {name}: scale {scale} must be >= 0")]
    NegativeScale { name: &'static str, scale: f64 },
}

impl EngineConfig {
    /// Load configuration from AssetLoader (embedded or external)
    pub fn load_from_assets(loader: &AssetLoader) -> Self {
        match loader.read_config_string() {
            Ok(content) => match Self::from_yaml(&content) {
                Ok(config) => {
                    tracing::info!(
                        strategy = ?config.strategy,
                        whole_image_fallback = config.whole_image_fallback,
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(%e, "Failed to load config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(%e, "Failed to read config, using defaults");
                Self::default()
            }
        }
    }

    /// Parse and validate
    pub fn from_yaml(yaml: &str) -> anyhow::Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let t = &self.thresholds;
        let r = &self.reduced;
        let thresholds = [
            ("spring.min_warmth", t.spring.min_warmth),
            ("spring.min_brightness", t.spring.min_brightness),
            ("spring.min_saturation", t.spring.min_saturation),
            ("summer.max_warmth", t.summer.max_warmth),
            ("summer.min_brightness", t.summer.min_brightness),
            ("summer.max_saturation", t.summer.max_saturation),
            ("autumn.min_warmth", t.autumn.min_warmth),
            ("autumn.max_brightness", t.autumn.max_brightness),
            ("autumn.min_saturation", t.autumn.min_saturation),
            ("reduced.warmth_split", r.warmth_split),
            ("reduced.brightness_split", r.brightness_split),
        ];
        if let Some(&(name, _)) = thresholds.iter().find(|(_, v)| !v.is_finite()) {
            return Err(ConfigError::NonFiniteThreshold(name));
        }

        for (name, model) in [
            ("detection", &self.confidence.detection),
            ("brightness", &self.confidence.brightness),
        ] {
            for (field, value) in [
                ("base", model.base),
                ("scale", model.scale),
                ("min", model.min),
                ("max", model.max),
            ] {
                if !value.is_finite() {
                    return Err(ConfigError::NonFiniteModel { name, field });
                }
            }
            if !(0.0 <= model.min && model.min <= model.max && model.max <= 100.0) {
                return Err(ConfigError::InvalidBounds {
                    name,
                    min: model.min,
                    max: model.max,
                });
            }
            // evaluate() clamps after rounding, so the bounds must already be on the grid
            if !is_one_decimal(model.min) || !is_one_decimal(model.max) {
                return Err(ConfigError::UnroundedBounds {
                    name,
                    min: model.min,
                    max: model.max,
                });
            }
            if model.scale < 0.0 {
                return Err(ConfigError::NegativeScale {
                    name,
                    scale: model.scale,
                });
            }
        }

        Ok(())
    }
}

fn is_one_decimal(value: f64) -> bool {
    let tenths = value * 10.0;
    (tenths - tenths.round()).abs() < 1e-9
}
