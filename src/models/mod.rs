pub mod config;
pub mod palette;
pub mod result;
pub mod season;

pub use config::{
    AutumnRule, ConfidenceConfig, ConfidenceModel, ConfigError, EngineConfig, ReducedThresholds,
    SpringRule, StrategyKind, SummerRule, ThresholdTable,
};
pub use palette::{CatalogError, Palette, PaletteCatalog, PALETTE_SIZE};
pub use result::{
    AnalysisMethod, AnalysisResponse, ClassificationResult, ColorValues, DebugInfo, HsvValues,
    RgbValues,
};
pub use season::{Season, UnknownSeason};
