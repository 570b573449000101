use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use komik_api::{CatalogQuery, ContentRating, SortOrder};
use serde::{Deserialize, Serialize};

use crate::error::KomikError;
use crate::i18n::Language;

const DEFAULT_CONFIG: &str = include_str!("../../../config/default.toml");

/// Top-level application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub general: GeneralConfig,
    pub appearance: AppearanceConfig,
    pub api: ApiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    pub language: Language,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppearanceConfig {
    pub mode: ThemeMode,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
    pub cover_base_url: String,
    pub page_size: u32,
    pub sort_order: SortOrder,
    pub content_rating: ContentRating,
    pub cover_user_agent: String,
}

/// Light/dark preference. `System` follows the desktop setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Dark,
    Light,
    #[default]
    System,
}

impl AppConfig {
    /// Load config: user file if it exists, else built-in defaults.
    pub fn load() -> Result<Self, KomikError> {
        let user_path = Self::config_path();
        if user_path.exists() {
            Self::load_from(&user_path)
        } else {
            Self::parse(DEFAULT_CONFIG)
        }
    }

    /// Load config from an explicit file.
    pub fn load_from(path: &Path) -> Result<Self, KomikError> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    fn parse(content: &str) -> Result<Self, KomikError> {
        toml::from_str(content).map_err(|e| KomikError::Config(e.to_string()))
    }

    /// Path to user config file (XDG on Linux, AppData on Windows).
    pub fn config_path() -> PathBuf {
        ProjectDirs::from("", "", "komik")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("config.toml"))
    }

    /// Query parameters for the catalog request.
    pub fn catalog_query(&self) -> CatalogQuery {
        CatalogQuery {
            limit: self.api.page_size,
            sort: self.api.sort_order,
            content_rating: self.api.content_rating,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG).expect("built-in default config is valid TOML")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_parses() {
        let config = AppConfig::default();
        assert_eq!(config.general.language, Language::En);
        assert_eq!(config.appearance.mode, ThemeMode::System);
        assert_eq!(config.api.base_url, "https://api.mangadex.org/");
        assert_eq!(config.api.page_size, 30);
        assert_eq!(config.api.cover_user_agent, "Mozilla/5.0");
    }

    #[test]
    fn test_default_catalog_query() {
        let query = AppConfig::default().catalog_query();
        assert_eq!(query.limit, 30);
        assert_eq!(query.sort, SortOrder::FollowedCount);
        assert_eq!(query.content_rating, ContentRating::Safe);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let content = DEFAULT_CONFIG
            .replace("page_size = 30", "page_size = 12")
            .replace("mode = \"system\"", "mode = \"dark\"")
            .replace("language = \"en\"", "language = \"id\"");
        file.write_all(content.as_bytes()).unwrap();

        let config = AppConfig::load_from(file.path()).unwrap();
        assert_eq!(config.api.page_size, 12);
        assert_eq!(config.appearance.mode, ThemeMode::Dark);
        assert_eq!(config.general.language, Language::Id);
    }

    #[test]
    fn test_load_from_invalid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"[general\nlanguage = ").unwrap();
        let err = AppConfig::load_from(file.path()).unwrap_err();
        assert!(matches!(err, KomikError::Config(_)));
    }

    #[test]
    fn test_load_from_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = AppConfig::load_from(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, KomikError::Io(_)));
    }

    #[test]
    fn test_roundtrip() {
        let config = AppConfig::default();
        let serialized = toml::to_string_pretty(&config).unwrap();
        let deserialized: AppConfig = toml::from_str(&serialized).unwrap();
        assert_eq!(deserialized.api.sort_order, config.api.sort_order);
        assert_eq!(deserialized.appearance.mode, config.appearance.mode);
    }
}
