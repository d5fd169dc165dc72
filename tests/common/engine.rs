//! Engine construction helper for tests.

use std::sync::Arc;

use personal_color::models::{EngineConfig, PaletteCatalog, StrategyKind};
use personal_color::services::{
    ColorEngine, DemoState, FaceLocalizer, FaceRegion, FixedFaceLocalizer, NoFaceLocalizer,
};
use tone_stats::Region;

/// Builder for an engine with builtin palettes and a seeded demo state
pub struct TestEngine {
    config: EngineConfig,
    localizer: Arc<dyn FaceLocalizer>,
    seed: u64,
}

impl TestEngine {
    pub fn new() -> Self {
        Self {
            config: EngineConfig::default(),
            localizer: Arc::new(NoFaceLocalizer),
            seed: 2024,
        }
    }

    pub fn strategy(mut self, kind: StrategyKind) -> Self {
        self.config.strategy = kind;
        self
    }

    pub fn whole_image_fallback(mut self) -> Self {
        self.config.whole_image_fallback = true;
        self
    }

    pub fn face(mut self, x: i32, y: i32, w: i32, h: i32, score: f64) -> Self {
        let face = FaceRegion::new(Region::new(x, y, w, h), score);
        self.localizer = Arc::new(FixedFaceLocalizer::new(face));
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    pub fn build(self) -> ColorEngine {
        ColorEngine::new(
            &self.config,
            Arc::new(PaletteCatalog::builtin()),
            self.localizer,
        )
        .with_demo_state(Arc::new(DemoState::seeded(self.seed)))
    }
}

impl Default for TestEngine {
    fn default() -> Self {
        Self::new()
    }
}
