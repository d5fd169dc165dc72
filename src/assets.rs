//! Asset loading with embedded fallbacks
//!
//! The engine configuration and the palette catalog are compiled into the
//! binary. Each can be overridden by a file on disk:
//!
//! - If the env var is NOT set: use the embedded asset only (no filesystem access)
//! - If the env var IS set and the file exists: use the file
//! - If the env var IS set but the file is missing: use the embedded asset

use rust_embed::RustEmbed;
use std::borrow::Cow;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Embedded default assets (config.yaml, palettes.yaml)
#[derive(RustEmbed)]
#[folder = "assets/"]
#[include = "*.yaml"]
struct EmbeddedAssets;

const CONFIG_NAME: &str = "config.yaml";
const PALETTES_NAME: &str = "palettes.yaml";

/// Asset category for selective operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetCategory {
    Config,
    Palettes,
}

impl AssetCategory {
    fn file_name(self) -> &'static str {
        match self {
            AssetCategory::Config => CONFIG_NAME,
            AssetCategory::Palettes => PALETTES_NAME,
        }
    }
}

/// Report of init (extraction) operations
#[derive(Debug, Default)]
pub struct InitReport {
    pub written: Vec<String>,
    pub skipped: Vec<String>,
}

/// Asset loader with optional filesystem override
pub struct AssetLoader {
    /// External config file path (from CONFIG_FILE env var)
    config_file: Option<PathBuf>,
    /// External palette catalog path (from PALETTES_FILE env var)
    palettes_file: Option<PathBuf>,
}

impl AssetLoader {
    /// Create a new asset loader
    ///
    /// Paths should be `Some` only if the corresponding env var was set.
    pub fn new(config_file: Option<PathBuf>, palettes_file: Option<PathBuf>) -> Self {
        Self {
            config_file,
            palettes_file,
        }
    }

    /// Create a loader from `CONFIG_FILE` and `PALETTES_FILE`
    pub fn from_env() -> Self {
        Self::new(
            std::env::var("CONFIG_FILE").ok().map(PathBuf::from),
            std::env::var("PALETTES_FILE").ok().map(PathBuf::from),
        )
    }

    pub fn config_file(&self) -> Option<&Path> {
        self.config_file.as_deref()
    }

    pub fn palettes_file(&self) -> Option<&Path> {
        self.palettes_file.as_deref()
    }

    fn external_path(&self, category: AssetCategory) -> Option<&PathBuf> {
        match category {
            AssetCategory::Config => self.config_file.as_ref(),
            AssetCategory::Palettes => self.palettes_file.as_ref(),
        }
    }

    fn read(&self, category: AssetCategory) -> io::Result<Cow<'static, [u8]>> {
        if let Some(path) = self.external_path(category) {
            if path.exists() {
                tracing::trace!(path = %path.display(), "Loading asset from filesystem");
                return Ok(Cow::Owned(fs::read(path)?));
            }
            tracing::debug!(path = %path.display(), "Configured asset missing, using embedded");
        }

        let name = category.file_name();
        EmbeddedAssets::get(name)
            .map(|f| {
                tracing::trace!(asset = name, "Loading asset from embedded assets");
                f.data
            })
            .ok_or_else(|| {
                io::Error::new(io::ErrorKind::NotFound, format!("Embedded {name} not found"))
            })
    }

    fn read_string(&self, category: AssetCategory) -> io::Result<String> {
        let bytes = self.read(category)?;
        String::from_utf8(bytes.into_owned())
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// Read the engine config as a UTF-8 string
    pub fn read_config_string(&self) -> io::Result<String> {
        self.read_string(AssetCategory::Config)
    }

    /// Read the palette catalog as a UTF-8 string
    pub fn read_palettes_string(&self) -> io::Result<String> {
        self.read_string(AssetCategory::Palettes)
    }

    /// The embedded palette catalog, ignoring any override
    pub fn embedded_palettes() -> String {
        Self::embedded_string(PALETTES_NAME)
    }

    /// The embedded engine config, ignoring any override
    pub fn embedded_config() -> String {
        Self::embedded_string(CONFIG_NAME)
    }

    fn embedded_string(name: &str) -> String {
        EmbeddedAssets::get(name)
            .map(|f| String::from_utf8_lossy(&f.data).into_owned())
            .unwrap_or_default()
    }

    /// Extract embedded assets to filesystem (init command)
    ///
    /// Uses the configured paths, or `./config.yaml` and `./palettes.yaml`.
    pub fn init(&self, categories: &[AssetCategory], force: bool) -> io::Result<InitReport> {
        let mut report = InitReport::default();

        for &category in categories {
            let path = self
                .external_path(category)
                .cloned()
                .unwrap_or_else(|| PathBuf::from(format!("./{}", category.file_name())));

            if !force && path.exists() {
                report.skipped.push(path.display().to_string());
                continue;
            }
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            if let Some(data) = EmbeddedAssets::get(category.file_name()) {
                fs::write(&path, &*data.data)?;
                report.written.push(path.display().to_string());
            }
        }

        Ok(report)
    }

    /// List embedded asset names
    pub fn list_embedded() -> Vec<String> {
        let mut names: Vec<String> = EmbeddedAssets::iter().map(|s| s.to_string()).collect();
        names.sort();
        names
    }
}
