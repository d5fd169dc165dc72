use tone_stats::ToneFeatures;

use crate::models::{EngineConfig, ReducedThresholds, Season, ThresholdTable};

/// Decision surface used for a classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RuleSet {
    /// Warmth, brightness and saturation against the per-season table
    #[default]
    Full,
    /// Warmth and brightness only, two splits
    Reduced,
}

/// Maps tone features to a season.
///
/// Pure and total: every input, NaN included, yields exactly one season.
/// Rules are tried in order and the first match wins; winter has no
/// condition and is reached whenever nothing else matches.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SeasonClassifier {
    table: ThresholdTable,
    reduced: ReducedThresholds,
}

impl SeasonClassifier {
    pub fn new(table: ThresholdTable, reduced: ReducedThresholds) -> Self {
        Self { table, reduced }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(config.thresholds, config.reduced)
    }

    pub fn classify(&self, features: ToneFeatures, rules: RuleSet) -> Season {
        match rules {
            RuleSet::Full => self.classify_full(features),
            RuleSet::Reduced => self.classify_reduced(features),
        }
    }

    fn classify_full(&self, f: ToneFeatures) -> Season {
        let ThresholdTable {
            spring,
            summer,
            autumn,
        } = self.table;

        if f.warmth > spring.min_warmth
            && f.brightness > spring.min_brightness
            && f.saturation > spring.min_saturation
        {
            Season::Spring
        } else if f.warmth <= summer.max_warmth
            && f.brightness > summer.min_brightness
            && f.saturation < summer.max_saturation
        {
            Season::Summer
        } else if f.warmth > autumn.min_warmth
            && f.brightness <= autumn.max_brightness
            && f.saturation > autumn.min_saturation
        {
            Season::Autumn
        } else {
            Season::Winter
        }
    }

    fn classify_reduced(&self, f: ToneFeatures) -> Season {
        let warm = f.warmth > self.reduced.warmth_split;
        let bright = f.brightness > self.reduced.brightness_split;

        match (warm, bright) {
            (true, true) => Season::Spring,
            (true, false) => Season::Autumn,
            (false, true) => Season::Summer,
            (false, false) => Season::Winter,
        }
    }
}
