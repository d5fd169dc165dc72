use std::sync::Arc;

use tone_stats::{extract, ColorModel, ColorStatistics, PixelBuffer};

use crate::error::AnalysisError;
use crate::models::{AnalysisMethod, EngineConfig, Season, StrategyKind};
use crate::services::{ConfidenceEstimator, DemoState, FaceRegion, RuleSet, SeasonClassifier};

/// What a strategy decided for one image, before palette lookup
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    pub season: Season,
    pub confidence: f64,
    pub method: AnalysisMethod,
    /// Statistics the decision (or, for demo, the confidence) was based on
    pub statistics: ColorStatistics,
}

/// One way of turning an image and an optional face into a season
pub trait ClassificationStrategy: Send + Sync {
    fn kind(&self) -> StrategyKind;

    /// Whether the engine should run the face localizer first
    fn uses_face(&self) -> bool {
        true
    }

    fn analyze(
        &self,
        image: &PixelBuffer<'_>,
        face: Option<FaceRegion>,
    ) -> Result<Analysis, AnalysisError>;
}

/// Face region, HSV statistics, full rule table, detection-driven confidence.
///
/// Without a face this fails with [`AnalysisError::NoFaceDetected`] unless
/// whole-image fallback is enabled.
#[derive(Debug, Clone, Copy)]
pub struct DeterministicAnalysis {
    classifier: SeasonClassifier,
    estimator: ConfidenceEstimator,
    whole_image_fallback: bool,
}

impl DeterministicAnalysis {
    pub fn new(
        classifier: SeasonClassifier,
        estimator: ConfidenceEstimator,
        whole_image_fallback: bool,
    ) -> Self {
        Self {
            classifier,
            estimator,
            whole_image_fallback,
        }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(
            SeasonClassifier::from_config(config),
            ConfidenceEstimator::from_config(config),
            config.whole_image_fallback,
        )
    }
}

impl ClassificationStrategy for DeterministicAnalysis {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Deterministic
    }

    fn analyze(
        &self,
        image: &PixelBuffer<'_>,
        face: Option<FaceRegion>,
    ) -> Result<Analysis, AnalysisError> {
        let (region, method) = match face {
            Some(face) => (Some(face.region), AnalysisMethod::FaceDetection),
            None if self.whole_image_fallback => {
                tracing::warn!("No face detected, analyzing whole image");
                (None, AnalysisMethod::WholeImageFallback)
            }
            None => return Err(AnalysisError::NoFaceDetected),
        };
        let statistics = extract(image, region, ColorModel::Hsv)?;
        let confidence = self
            .estimator
            .estimate(face.map(|f| f.confidence), statistics.brightness);

        let season = self.classifier.classify(statistics.features(), RuleSet::Full);

        Ok(Analysis {
            season,
            confidence,
            method,
            statistics,
        })
    }
}

/// RGB-only statistics and the two-threshold rules.
///
/// Uses the face region when one is given and the whole image otherwise.
/// Confidence always comes from brightness.
#[derive(Debug, Clone, Copy)]
pub struct HeuristicColorAnalysis {
    classifier: SeasonClassifier,
    estimator: ConfidenceEstimator,
}

impl HeuristicColorAnalysis {
    pub fn new(classifier: SeasonClassifier, estimator: ConfidenceEstimator) -> Self {
        Self {
            classifier,
            estimator,
        }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(
            SeasonClassifier::from_config(config),
            ConfidenceEstimator::from_config(config),
        )
    }
}

impl ClassificationStrategy for HeuristicColorAnalysis {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Heuristic
    }

    fn analyze(
        &self,
        image: &PixelBuffer<'_>,
        face: Option<FaceRegion>,
    ) -> Result<Analysis, AnalysisError> {
        let statistics = extract(image, face.map(|f| f.region), ColorModel::RgbOnly)?;
        let season = self
            .classifier
            .classify(statistics.features(), RuleSet::Reduced);
        let confidence = self.estimator.estimate(None, statistics.brightness);

        Ok(Analysis {
            season,
            confidence,
            method: AnalysisMethod::Heuristic,
            statistics,
        })
    }
}

/// Random season that never repeats the previous one.
///
/// The image is only used for a brightness-driven confidence, computed
/// before the shared state is touched.
#[derive(Debug, Clone)]
pub struct RandomDemo {
    state: Arc<DemoState>,
    estimator: ConfidenceEstimator,
}

impl RandomDemo {
    pub fn new(state: Arc<DemoState>, estimator: ConfidenceEstimator) -> Self {
        Self { state, estimator }
    }

    pub fn state(&self) -> &Arc<DemoState> {
        &self.state
    }
}

impl ClassificationStrategy for RandomDemo {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Demo
    }

    fn uses_face(&self) -> bool {
        false
    }

    fn analyze(
        &self,
        image: &PixelBuffer<'_>,
        _face: Option<FaceRegion>,
    ) -> Result<Analysis, AnalysisError> {
        let statistics = extract(image, None, ColorModel::RgbOnly)?;
        let confidence = self.estimator.estimate(None, statistics.brightness);
        let season = self.state.next();

        Ok(Analysis {
            season,
            confidence,
            method: AnalysisMethod::Demo,
            statistics,
        })
    }
}
