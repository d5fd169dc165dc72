use std::sync::Arc;

use tone_stats::PixelBuffer;

use crate::error::AnalysisError;
use crate::models::{
    ClassificationResult, ColorValues, DebugInfo, EngineConfig, PaletteCatalog, StrategyKind,
};
use crate::services::{
    ClassificationStrategy, ConfidenceEstimator, DemoState, DeterministicAnalysis, FaceLocalizer,
    HeuristicColorAnalysis, RandomDemo,
};

/// Per-call options
#[derive(Debug, Clone, Copy, Default)]
pub struct AnalysisRequest {
    /// Overrides the configured strategy for this call
    pub strategy: Option<StrategyKind>,
    /// Attach the debug block to the result
    pub debug: bool,
}

/// Localize, extract, classify, score and attach the palette.
///
/// Holds no per-request state. The only shared mutable piece is the demo
/// strategy's [`DemoState`], which has its own lock.
pub struct ColorEngine {
    localizer: Arc<dyn FaceLocalizer>,
    catalog: Arc<PaletteCatalog>,
    default_strategy: StrategyKind,
    deterministic: DeterministicAnalysis,
    heuristic: HeuristicColorAnalysis,
    demo: RandomDemo,
    estimator: ConfidenceEstimator,
}

impl ColorEngine {
    pub fn new(
        config: &EngineConfig,
        catalog: Arc<PaletteCatalog>,
        localizer: Arc<dyn FaceLocalizer>,
    ) -> Self {
        let estimator = ConfidenceEstimator::from_config(config);
        Self {
            localizer,
            catalog,
            default_strategy: config.strategy,
            deterministic: DeterministicAnalysis::from_config(config),
            heuristic: HeuristicColorAnalysis::from_config(config),
            demo: RandomDemo::new(Arc::new(DemoState::new()), estimator),
            estimator,
        }
    }

    /// Replace the demo state, e.g. with a seeded one or one shared across engines
    pub fn with_demo_state(mut self, state: Arc<DemoState>) -> Self {
        self.demo = RandomDemo::new(state, self.estimator);
        self
    }

    pub fn default_strategy(&self) -> StrategyKind {
        self.default_strategy
    }

    pub fn catalog(&self) -> &PaletteCatalog {
        &self.catalog
    }

    pub fn demo_state(&self) -> &Arc<DemoState> {
        self.demo.state()
    }

    fn strategy(&self, kind: StrategyKind) -> &dyn ClassificationStrategy {
        match kind {
            StrategyKind::Deterministic => &self.deterministic,
            StrategyKind::Heuristic => &self.heuristic,
            StrategyKind::Demo => &self.demo,
        }
    }

    pub fn analyze(
        &self,
        image: &PixelBuffer<'_>,
        request: AnalysisRequest,
    ) -> Result<ClassificationResult, AnalysisError> {
        let strategy = self.strategy(request.strategy.unwrap_or(self.default_strategy));

        let face = if strategy.uses_face() {
            self.localizer.locate(image)
        } else {
            None
        };

        let analysis = strategy.analyze(image, face)?;
        let stats = &analysis.statistics;

        tracing::debug!(
            strategy = ?strategy.kind(),
            method = ?analysis.method,
            season = %analysis.season,
            confidence = analysis.confidence,
            warmth = stats.warmth,
            brightness = stats.brightness,
            saturation = stats.saturation,
            pixels = stats.pixel_count,
            "Classified image"
        );

        let debug = request.debug.then(|| DebugInfo {
            detected_season: analysis.season,
            face_detected: face.is_some(),
            detection_confidence: face.map(|f| f.confidence),
            method: analysis.method,
            color_values: ColorValues::from(stats),
        });

        Ok(ClassificationResult {
            season: analysis.season,
            confidence: analysis.confidence,
            palette: self.catalog.get(analysis.season).clone(),
            debug,
        })
    }
}
