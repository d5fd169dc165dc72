//! End-to-end classification scenarios on synthetic images.

mod common;

use std::collections::HashSet;

use common::fixtures::{self, colors};
use common::TestEngine;
use personal_color::error::AnalysisError;
use personal_color::models::{AnalysisMethod, PaletteCatalog, Season, StrategyKind};
use personal_color::services::AnalysisRequest;
use pretty_assertions::assert_eq;
use tone_stats::{ChannelOrder, PixelBuffer};

fn debug_request() -> AnalysisRequest {
    AnalysisRequest {
        debug: true,
        ..Default::default()
    }
}

#[test]
fn test_uniform_red_without_face_is_warm() {
    let samples = fixtures::solid_samples(colors::RED, 16, 16);
    let image = PixelBuffer::rgb(&samples, 16, 16).unwrap();
    let engine = TestEngine::new().strategy(StrategyKind::Heuristic).build();

    let result = engine.analyze(&image, debug_request()).unwrap();
    let values = result.debug.as_ref().unwrap().color_values;

    assert_eq!(values.warmth, 1.0);
    assert_eq!(values.brightness, 0.333);
    assert!(result.season.is_warm(), "got {}", result.season);
    assert_eq!(result.season, Season::Autumn);
    common::assert_confidence_in(&result, 75.0, 95.0);
    common::assert_palette_matches(&result, engine.catalog());
}

#[test]
fn test_uniform_red_whole_image_fallback_is_warm() {
    let samples = fixtures::solid_samples(colors::RED, 16, 16);
    let image = PixelBuffer::rgb(&samples, 16, 16).unwrap();
    let engine = TestEngine::new().whole_image_fallback().build();

    let result = engine.analyze(&image, debug_request()).unwrap();

    assert!(result.season.is_warm());
    assert_eq!(
        result.debug.as_ref().unwrap().method,
        AnalysisMethod::WholeImageFallback
    );
    common::assert_confidence_in(&result, 75.0, 95.0);
}

#[test]
fn test_uniform_blue_is_cool() {
    let samples = fixtures::solid_samples(colors::BLUE, 16, 16);
    let image = PixelBuffer::rgb(&samples, 16, 16).unwrap();

    for engine in [
        TestEngine::new().strategy(StrategyKind::Heuristic).build(),
        TestEngine::new().whole_image_fallback().build(),
    ] {
        let result = engine.analyze(&image, debug_request()).unwrap();
        assert_eq!(result.debug.as_ref().unwrap().color_values.warmth, -1.0);
        assert!(!result.season.is_warm(), "got {}", result.season);
    }
}

#[test]
fn test_bgr_input_matches_rgb() {
    let rgb = fixtures::solid_samples(colors::WARM_SKIN, 8, 8);
    let bgr = fixtures::solid_samples_bgr(colors::WARM_SKIN, 8, 8);
    let rgb_image = PixelBuffer::rgb(&rgb, 8, 8).unwrap();
    let bgr_image = PixelBuffer::new(&bgr, 8, 8, 3, ChannelOrder::Bgr).unwrap();
    let engine = TestEngine::new().face(0, 0, 8, 8, 0.7).build();

    let a = engine.analyze(&rgb_image, debug_request()).unwrap();
    let b = engine.analyze(&bgr_image, debug_request()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_detection_confidence_is_monotonic() {
    // V = 204 gives brightness 0.8
    let samples = fixtures::solid_samples([204, 204, 204], 10, 10);
    let image = PixelBuffer::rgb(&samples, 10, 10).unwrap();

    let high = TestEngine::new().face(2, 2, 6, 6, 0.9).build();
    let low = TestEngine::new().face(2, 2, 6, 6, 0.2).build();

    let high = high.analyze(&image, debug_request()).unwrap();
    let low = low.analyze(&image, debug_request()).unwrap();

    assert_eq!(high.season, low.season);
    assert_eq!(high.debug.as_ref().unwrap().color_values.brightness, 0.8);
    assert!(high.confidence > low.confidence);
    assert_eq!(high.confidence, 92.5);
    assert_eq!(low.confidence, 75.0);
}

#[test]
fn test_demo_sequence_of_100() {
    let samples = fixtures::solid_samples(colors::GRAY, 4, 4);
    let image = PixelBuffer::rgb(&samples, 4, 4).unwrap();
    let engine = TestEngine::new().strategy(StrategyKind::Demo).seed(31).build();

    let results: Vec<_> = (0..100)
        .map(|_| engine.analyze(&image, AnalysisRequest::default()).unwrap())
        .collect();
    let seasons: Vec<Season> = results.iter().map(|r| r.season).collect();

    let distinct: HashSet<Season> = seasons.iter().copied().collect();
    assert_eq!(distinct.len(), 4);
    assert_eq!(common::longest_run(&seasons), 1);
    for result in &results {
        common::assert_confidence_in(result, 75.0, 95.0);
    }
}

#[test]
fn test_face_region_isolates_skin_from_background() {
    let samples = fixtures::framed_samples(colors::BLUE, colors::COOL_SKIN, 20, 20, (5, 5, 10, 10));
    let image = PixelBuffer::rgb(&samples, 20, 20).unwrap();
    let engine = TestEngine::new().face(5, 5, 10, 10, 0.95).build();

    let result = engine.analyze(&image, debug_request()).unwrap();
    let debug = result.debug.unwrap();

    assert_eq!(result.season, Season::Summer);
    assert_eq!(debug.method, AnalysisMethod::FaceDetection);
    assert_eq!(debug.color_values.rgb.b, 215.0);
}

#[test]
fn test_overhanging_face_equals_clamped_face() {
    let samples = fixtures::framed_samples(colors::GRAY, colors::WARM_SKIN, 12, 12, (6, 6, 6, 6));
    let image = PixelBuffer::rgb(&samples, 12, 12).unwrap();

    let overhanging = TestEngine::new().face(4, 4, 50, 50, 0.5).build();
    let clamped = TestEngine::new().face(4, 4, 8, 8, 0.5).build();

    let a = overhanging.analyze(&image, debug_request()).unwrap();
    let b = clamped.analyze(&image, debug_request()).unwrap();

    assert_eq!(a.season, b.season);
    assert_eq!(a.confidence, b.confidence);
    assert_eq!(
        a.debug.unwrap().color_values,
        b.debug.unwrap().color_values
    );
}

#[test]
fn test_face_outside_image_is_empty_region() {
    let samples = fixtures::solid_samples(colors::GRAY, 8, 8);
    let image = PixelBuffer::rgb(&samples, 8, 8).unwrap();
    let engine = TestEngine::new().face(-20, -20, 10, 10, 0.9).build();

    let err = engine.analyze(&image, AnalysisRequest::default()).unwrap_err();
    assert!(matches!(err, AnalysisError::EmptyRegion(_)));
}

#[test]
fn test_no_face_without_fallback_fails() {
    let samples = fixtures::solid_samples(colors::WARM_SKIN, 8, 8);
    let image = PixelBuffer::rgb(&samples, 8, 8).unwrap();
    let engine = TestEngine::new().build();

    let err = engine.analyze(&image, AnalysisRequest::default()).unwrap_err();
    assert!(matches!(err, AnalysisError::NoFaceDetected));
}

#[test]
fn test_confidence_bounds_for_extreme_colors() {
    let extremes = [
        [0, 0, 0],
        [255, 255, 255],
        colors::RED,
        colors::BLUE,
        [0, 255, 0],
        [255, 0, 255],
    ];
    let strategies = [
        StrategyKind::Deterministic,
        StrategyKind::Heuristic,
        StrategyKind::Demo,
    ];

    for rgb in extremes {
        let samples = fixtures::solid_samples(rgb, 4, 4);
        let image = PixelBuffer::rgb(&samples, 4, 4).unwrap();
        for kind in strategies {
            for score in [0.0, 0.5, 1.0] {
                let engine = TestEngine::new().strategy(kind).face(0, 0, 4, 4, score).build();
                let result = engine.analyze(&image, AnalysisRequest::default()).unwrap();
                common::assert_confidence_in(&result, 70.0, 95.0);
            }
        }
    }
}

#[test]
fn test_every_season_has_a_complete_palette() {
    let catalog = PaletteCatalog::builtin();
    for season in Season::ALL {
        let palette = catalog.get(season);
        assert_eq!(palette.best_colors.len(), 4);
        assert_eq!(palette.worst_colors.len(), 4);
        for color in palette.best_colors.iter().chain(&palette.worst_colors) {
            assert_eq!(color.len(), 7, "{season}: {color}");
            assert!(color.starts_with('#'));
            assert!(color[1..].chars().all(|c| c.is_ascii_hexdigit()));
        }
    }
}
