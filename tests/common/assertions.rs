//! Assertion helpers for tests.

use personal_color::models::{ClassificationResult, PaletteCatalog, PALETTE_SIZE};
use pretty_assertions::assert_eq;

/// Assert confidence lies in `[min, max]` and has at most one decimal
pub fn assert_confidence_in(result: &ClassificationResult, min: f64, max: f64) {
    assert!(
        (min..=max).contains(&result.confidence),
        "Confidence {} outside [{min}, {max}]",
        result.confidence
    );
    assert_eq!(
        (result.confidence * 10.0).round() / 10.0,
        result.confidence,
        "Confidence should have one decimal"
    );
}

/// Assert the result's palette is the catalog entry for its season
pub fn assert_palette_matches(result: &ClassificationResult, catalog: &PaletteCatalog) {
    let expected = catalog.get(result.season);
    assert_eq!(&result.palette, expected);
    assert_eq!(result.palette.best_colors.len(), PALETTE_SIZE);
    assert_eq!(result.palette.worst_colors.len(), PALETTE_SIZE);
}

/// Length of the longest run of equal adjacent items
pub fn longest_run<T: PartialEq>(items: &[T]) -> usize {
    let mut longest = 0;
    let mut current = 0;
    for (i, item) in items.iter().enumerate() {
        if i > 0 && items[i - 1] == *item {
            current += 1;
        } else {
            current = 1;
        }
        longest = longest.max(current);
    }
    longest
}
