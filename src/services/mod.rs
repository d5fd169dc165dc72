pub mod classifier;
pub mod confidence;
pub mod demo;
pub mod engine;
pub mod face;
pub mod strategy;

pub use classifier::{RuleSet, SeasonClassifier};
pub use confidence::ConfidenceEstimator;
pub use demo::DemoState;
pub use engine::{AnalysisRequest, ColorEngine};
pub use face::{FaceLocalizer, FaceRegion, FixedFaceLocalizer, NoFaceLocalizer, ParseFaceRegionError};
pub use strategy::{
    Analysis, ClassificationStrategy, DeterministicAnalysis, HeuristicColorAnalysis, RandomDemo,
};
