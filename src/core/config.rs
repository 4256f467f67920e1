//! Configuration management

use crate::core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub carousel: CarouselConfig,
    #[serde(default)]
    pub site: SiteConfig,
}

impl Config {
    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| Error::Config("Could not determine config directory".to_string()))?;

        let app_config_dir = config_dir.join("connectpro-site");

        if !app_config_dir.exists() {
            fs::create_dir_all(&app_config_dir)?;
        }

        Ok(app_config_dir.join("config.toml"))
    }

    /// Load configuration from disk, writing the defaults on first run
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        Self::load_from(&path)
    }

    /// Load configuration from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            let config = Self::default();
            config.save_to(path)?;
            return Ok(config);
        }

        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("Failed to parse config: {}", e)))?;

        if config.carousel.interval_ms == 0 {
            return Err(Error::Config("carousel.interval_ms must be greater than zero".to_string()));
        }

        Ok(config)
    }

    /// Save configuration to disk
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Serialization(e.to_string()))?;
        fs::write(path, content)?;
        Ok(())
    }
}

/// General settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Start-up language: "auto", "sq", "en", "de", "it", "fr"
    #[serde(default = "default_language")]
    pub language: String,
    /// Directory rendered pages are written to
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

fn default_language() -> String { "de".to_string() }
fn default_output_dir() -> PathBuf { PathBuf::from("dist") }

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
            output_dir: default_output_dir(),
        }
    }
}

/// Services carousel settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarouselConfig {
    /// Auto-advance period in milliseconds
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,
    /// Start in autoplay when mounted
    #[serde(default = "default_true")]
    pub autoplay: bool,
}

fn default_interval_ms() -> u64 { 5000 }
fn default_true() -> bool { true }

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            interval_ms: default_interval_ms(),
            autoplay: true,
        }
    }
}

/// Company details and presentation switches
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default = "default_phones")]
    pub phones: Vec<String>,
    #[serde(default = "default_emails")]
    pub emails: Vec<String>,
    /// Postal address, one entry per line
    #[serde(default = "default_address")]
    pub address: Vec<String>,
    /// Seed for the decorative background bubbles (None = built-in seed)
    #[serde(default)]
    pub decor_seed: Option<u64>,
    #[serde(default = "default_true")]
    pub show_ad_banner: bool,
}

fn default_phones() -> Vec<String> {
    vec!["+355 69 XXX XXXX".to_string(), "+355 69 XXX XXXX".to_string()]
}
fn default_emails() -> Vec<String> {
    vec!["info@connectprogroup.com".to_string(), "support@connectprogroup.com".to_string()]
}
fn default_address() -> Vec<String> {
    vec![
        "Rruga \"Myslym Shyri\", Nr. 50".to_string(),
        "Tiran\u{00EB}, Shqip\u{00EB}ri".to_string(),
    ]
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            phones: default_phones(),
            emails: default_emails(),
            address: default_address(),
            decor_seed: None,
            show_ad_banner: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let config = Config::load_from(&path).unwrap();
        assert!(path.exists());
        assert_eq!(config.general.language, "de");
        assert_eq!(config.carousel.interval_ms, 5000);
        assert!(config.carousel.autoplay);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[general]\nlanguage = \"it\"\n\n[site]\ndecor_seed = 7\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.general.language, "it");
        assert_eq!(config.general.output_dir, PathBuf::from("dist"));
        assert_eq!(config.site.decor_seed, Some(7));
        assert_eq!(config.site.emails.len(), 2);
        assert_eq!(config.carousel.interval_ms, 5000);
    }

    #[test]
    fn test_zero_interval_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[carousel]\ninterval_ms = 0\n").unwrap();

        assert!(matches!(Config::load_from(&path), Err(Error::Config(_))));
    }

    #[test]
    fn test_save_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.general.language = "fr".to_string();
        config.site.show_ad_banner = false;
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.general.language, "fr");
        assert!(!loaded.site.show_ad_banner);
    }
}
