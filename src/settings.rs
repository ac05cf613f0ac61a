//! Gallery Settings
//!
//! Persisted defaults of the gallery window, stored as TOML in the config
//! directory (or the file named by `LOOM_UI_CONFIG`).

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use crate::constants::{
    DEFAULT_BOUNDARY_COUNT, DEFAULT_COPY_TIMEOUT_MS, DEFAULT_SIBLING_COUNT, SETTINGS_ENV_VAR,
    SETTINGS_FILE_NAME,
};
use crate::error::Result;
use crate::helpers::get_or_create_config_dir;
use crate::i18n::Locale;
use crate::theme::{Palette, Size};

/// Pagination demo defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaginationSettings {
    pub total: usize,
    pub siblings: i64,
    pub boundaries: i64,
}

impl Default for PaginationSettings {
    fn default() -> Self {
        Self {
            total: 20,
            siblings: DEFAULT_SIBLING_COUNT,
            boundaries: DEFAULT_BOUNDARY_COUNT,
        }
    }
}

/// Persisted gallery settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GallerySettings {
    /// Label language; detected from the system when unset
    locale: Option<Locale>,
    size: Size,
    color: Palette,
    copy_timeout_ms: u64,
    pagination: PaginationSettings,
}

impl Default for GallerySettings {
    fn default() -> Self {
        Self {
            locale: None,
            size: Size::default(),
            color: Palette::default(),
            copy_timeout_ms: DEFAULT_COPY_TIMEOUT_MS,
            pagination: PaginationSettings::default(),
        }
    }
}

/// Resolve the settings file: `LOOM_UI_CONFIG` wins over the config directory
pub fn settings_path() -> Result<PathBuf> {
    if let Some(path) = std::env::var_os(SETTINGS_ENV_VAR).filter(|p| !p.is_empty()) {
        return Ok(PathBuf::from(path));
    }
    Ok(get_or_create_config_dir()?.join(SETTINGS_FILE_NAME))
}

impl GallerySettings {
    /// Load settings from the resolved path
    pub fn try_load() -> Result<Self> {
        Self::load_from(&settings_path()?)
    }

    /// Load settings, falling back to defaults on any error
    pub fn load_or_default() -> Self {
        Self::try_load().unwrap_or_else(|e| {
            warn!(error = %e, "Using default gallery settings");
            Self::default()
        })
    }

    /// Load settings from `path`; a missing or empty file yields defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            info!(path = ?path, "No settings file, using defaults");
            return Ok(Self::default());
        }

        info!(path = ?path, "Loading settings file");
        let value = std::fs::read_to_string(path)?;
        if value.trim().is_empty() {
            return Ok(Self::default());
        }

        let settings = toml::from_str(&value).map_err(|e| {
            error!(error = %e, path = ?path, "Failed to parse settings file");
            e
        })?;
        Ok(settings)
    }

    /// Save settings to the resolved path
    pub fn save(&self) -> Result<()> {
        self.save_to(&settings_path()?)
    }

    /// Save settings to `path` as pretty TOML
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, toml::to_string_pretty(self)?)?;
        info!(path = ?path, "Saved settings file");
        Ok(())
    }

    // ==================== Getters ====================

    /// Configured locale, or the system locale
    pub fn locale(&self) -> Locale {
        self.locale.unwrap_or_else(Locale::from_system)
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn color(&self) -> Palette {
        self.color
    }

    pub fn copy_timeout_ms(&self) -> u64 {
        self.copy_timeout_ms
    }

    pub fn pagination(&self) -> &PaginationSettings {
        &self.pagination
    }

    // ==================== Setters ====================

    pub fn set_locale(&mut self, locale: Locale) {
        self.locale = Some(locale);
    }

    pub fn set_size(&mut self, size: Size) {
        self.size = size;
    }

    pub fn set_color(&mut self, color: Palette) {
        self.color = color;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().expect("temp dir");
        let settings = GallerySettings::load_from(&dir.path().join("absent.toml")).expect("defaults");
        assert_eq!(settings, GallerySettings::default());
    }

    #[test]
    fn empty_file_yields_defaults() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join(SETTINGS_FILE_NAME);
        std::fs::write(&path, "  \n").expect("write");
        assert_eq!(GallerySettings::load_from(&path).expect("defaults"), GallerySettings::default());
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("nested").join(SETTINGS_FILE_NAME);

        let mut settings = GallerySettings::default();
        settings.set_locale(Locale::ZhCN);
        settings.set_size(Size::Lg);
        settings.set_color(Palette::Teal);
        settings.save_to(&path).expect("saved");

        let loaded = GallerySettings::load_from(&path).expect("loaded");
        assert_eq!(loaded, settings);
        assert_eq!(loaded.locale(), Locale::ZhCN);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join(SETTINGS_FILE_NAME);
        std::fs::write(&path, "color = \"violet\"\n\n[pagination]\ntotal = 42\n").expect("write");

        let loaded = GallerySettings::load_from(&path).expect("loaded");
        assert_eq!(loaded.color(), Palette::Violet);
        assert_eq!(loaded.size(), Size::default());
        assert_eq!(
            loaded.pagination(),
            &PaginationSettings {
                total: 42,
                ..PaginationSettings::default()
            }
        );
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join(SETTINGS_FILE_NAME);
        std::fs::write(&path, "size = \"enormous\"").expect("write");
        assert!(GallerySettings::load_from(&path).is_err());
    }
}
