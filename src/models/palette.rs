use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

use crate::assets::AssetLoader;
use crate::models::Season;

/// Number of best and of worst colors every palette carries
pub const PALETTE_SIZE: usize = 4;

fn hex_color_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^#[0-9A-Fa-f]{6}$").expect("valid hex color regex"))
}

/// Color recommendations for one season
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    /// English display name, e.g. "Spring Warm"
    pub name: String,
    /// Localized display name
    pub localized_name: String,
    /// Colors that suit this season, best first
    pub best_colors: Vec<String>,
    /// Colors to avoid
    pub worst_colors: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Failed to read palettes: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse palettes: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("{season}: expected {expected} {list} colors, found {found}")]
    WrongCount {
        season: Season,
        list: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("{season}: invalid hex color {value:?}")]
    InvalidColor { season: Season, value: String },
}

impl Palette {
    fn validate(&self, season: Season) -> Result<(), CatalogError> {
        for (list, colors) in [("best", &self.best_colors), ("worst", &self.worst_colors)] {
            if colors.len() != PALETTE_SIZE {
                return Err(CatalogError::WrongCount {
                    season,
                    list,
                    expected: PALETTE_SIZE,
                    found: colors.len(),
                });
            }
            if let Some(bad) = colors.iter().find(|c| !hex_color_pattern().is_match(c)) {
                return Err(CatalogError::InvalidColor {
                    season,
                    value: bad.clone(),
                });
            }
        }
        Ok(())
    }
}

/// Season to palette lookup.
///
/// One field per season, so a catalog that deserializes is total over
/// [`Season`] by construction. Loaded once at startup and never mutated.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PaletteCatalog {
    spring: Palette,
    summer: Palette,
    #[serde(alias = "fall")]
    autumn: Palette,
    winter: Palette,
}

impl PaletteCatalog {
    pub fn get(&self, season: Season) -> &Palette {
        match season {
            Season::Spring => &self.spring,
            Season::Summer => &self.summer,
            Season::Autumn => &self.autumn,
            Season::Winter => &self.winter,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Season, &Palette)> {
        Season::ALL.into_iter().map(move |s| (s, self.get(s)))
    }

    /// Parse and validate a catalog from YAML
    pub fn from_yaml(yaml: &str) -> Result<Self, CatalogError> {
        let catalog: Self = serde_yaml::from_str(yaml)?;
        for (season, palette) in catalog.iter() {
            palette.validate(season)?;
        }
        Ok(catalog)
    }

    /// The catalog compiled into the binary
    pub fn builtin() -> Self {
        // The embedded file is covered by tests; failure here is a build defect.
        Self::from_yaml(&AssetLoader::embedded_palettes())
            .expect("embedded palettes.yaml is valid")
    }

    /// Load from the configured external file, falling back to the embedded catalog
    pub fn load_from_assets(loader: &AssetLoader) -> Self {
        match loader.read_palettes_string() {
            Ok(content) => match Self::from_yaml(&content) {
                Ok(catalog) => {
                    tracing::info!("Loaded palette catalog");
                    catalog
                }
                Err(e) => {
                    tracing::warn!(%e, "Invalid palette catalog, using embedded palettes");
                    Self::builtin()
                }
            },
            Err(e) => {
                tracing::warn!(%e, "Failed to read palettes, using embedded palettes");
                Self::builtin()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_builtin_catalog_is_complete() {
        let catalog = PaletteCatalog::builtin();
        for season in Season::ALL {
            let palette = catalog.get(season);
            assert_eq!(palette.best_colors.len(), PALETTE_SIZE);
            assert_eq!(palette.worst_colors.len(), PALETTE_SIZE);
            for color in palette.best_colors.iter().chain(&palette.worst_colors) {
                assert!(hex_color_pattern().is_match(color), "{season}: {color}");
            }
        }
    }

    #[test]
    fn test_builtin_names() {
        let catalog = PaletteCatalog::builtin();
        assert_eq!(catalog.get(Season::Spring).name, "Spring Warm");
        assert_eq!(catalog.get(Season::Summer).localized_name, "여름 쿨톤");
        assert_eq!(catalog.get(Season::Autumn).best_colors[0], "#CD853F");
        assert_eq!(catalog.get(Season::Winter).worst_colors[3], "#FF7F50");
        assert!(catalog.get(Season::Winter).description.is_some());
    }

    #[test]
    fn test_iter_covers_all_seasons_in_order() {
        let catalog = PaletteCatalog::builtin();
        let seasons: Vec<Season> = catalog.iter().map(|(s, _)| s).collect();
        assert_eq!(seasons, Season::ALL.to_vec());
    }

    fn palette_yaml(name: &str, best: &str, worst: &str) -> String {
        format!(
            "{name}:\n  name: X\n  localized_name: Y\n  best_colors: [{best}]\n  worst_colors: [{worst}]\n"
        )
    }

    fn catalog_yaml(autumn_key: &str, spring_best: &str) -> String {
        let ok = r##""#000000", "#111111", "#222222", "#333333""##;
        [
            palette_yaml("spring", spring_best, ok),
            palette_yaml("summer", ok, ok),
            palette_yaml(autumn_key, ok, ok),
            palette_yaml("winter", ok, ok),
        ]
        .concat()
    }

    #[test]
    fn test_from_yaml_accepts_fall_key() {
        let ok = r##""#000000", "#111111", "#222222", "#333333""##;
        let catalog = PaletteCatalog::from_yaml(&catalog_yaml("fall", ok)).unwrap();
        assert_eq!(catalog.get(Season::Autumn).name, "X");
        assert_eq!(catalog.get(Season::Autumn).description, None);
    }

    #[test]
    fn test_missing_season_is_rejected() {
        let ok = r##""#000000", "#111111", "#222222", "#333333""##;
        let yaml = [
            palette_yaml("spring", ok, ok),
            palette_yaml("summer", ok, ok),
            palette_yaml("winter", ok, ok),
        ]
        .concat();
        let err = PaletteCatalog::from_yaml(&yaml).unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[test]
    fn test_wrong_color_count_is_rejected() {
        let three = r##""#000000", "#111111", "#222222""##;
        let err = PaletteCatalog::from_yaml(&catalog_yaml("autumn", three)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "spring: expected 4 best colors, found 3"
        );
    }

    #[test]
    fn test_short_hex_is_rejected() {
        let bad = r##""#000", "#111111", "#222222", "#333333""##;
        let err = PaletteCatalog::from_yaml(&catalog_yaml("autumn", bad)).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::InvalidColor { season: Season::Spring, ref value } if value == "#000"
        ));
    }
}
