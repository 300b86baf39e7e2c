//! # bigtype Configuration
//!
//! Render defaults and named size presets.
//!
//! Configuration sources (in priority order):
//! 1. CLI arguments
//! 2. Config file given with `--config`, or the user config
//!    (`~/.config/bigtype/config.toml` on Linux) when it exists
//! 3. Built-in defaults
//!
//! ```toml
//! [render]
//! draw = "█"
//! size = "medium"
//! spacing = 2
//! ```

use directories::ProjectDirs;
use figment::{
    providers::{Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Size name is not one of the presets
    #[error("unknown size '{0}' (expected small, medium, large or huge)")]
    UnknownPreset(String),

    /// Explicitly requested config file does not exist
    #[error("config file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Config file could not be parsed
    #[error("failed to load config: {0}")]
    Load(#[from] figment::Error),

    /// Config could not be written as TOML
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Get the configuration directory
pub fn config_dir() -> PathBuf {
    ProjectDirs::from("dev", "bigtype", "bigtype")
        .map(|d| d.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("~/.config/bigtype"))
}

/// Default user config file path
pub fn default_config_path() -> PathBuf {
    config_dir().join("config.toml")
}

/// Named shorthand for a scale factor
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizePreset {
    Small,
    Medium,
    #[default]
    Large,
    Huge,
}

impl SizePreset {
    /// Scale multiplier for this preset
    pub fn scale(&self) -> i64 {
        match self {
            SizePreset::Small => 1,
            SizePreset::Medium => 2,
            SizePreset::Large => 4,
            SizePreset::Huge => 8,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SizePreset::Small => "small",
            SizePreset::Medium => "medium",
            SizePreset::Large => "large",
            SizePreset::Huge => "huge",
        }
    }

    /// All presets, smallest first
    pub fn all() -> &'static [SizePreset] {
        &[
            SizePreset::Small,
            SizePreset::Medium,
            SizePreset::Large,
            SizePreset::Huge,
        ]
    }
}

impl fmt::Display for SizePreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SizePreset {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        SizePreset::all()
            .iter()
            .copied()
            .find(|preset| preset.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ConfigError::UnknownPreset(s.to_string()))
    }
}

/// Default render settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderDefaults {
    /// Draw symbol for lit pixels
    pub draw: String,
    /// Size preset used when no explicit scale is set
    pub size: SizePreset,
    /// Explicit scale, overrides `size`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<i64>,
    /// Blank columns between glyphs
    pub spacing: usize,
}

impl Default for RenderDefaults {
    fn default() -> Self {
        Self {
            draw: "#".to_string(),
            size: SizePreset::Large,
            scale: None,
            spacing: 1,
        }
    }
}

impl RenderDefaults {
    /// Effective scale: explicit scale if set, otherwise the preset's
    pub fn resolved_scale(&self) -> i64 {
        self.scale.unwrap_or_else(|| self.size.scale())
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Render defaults
    pub render: RenderDefaults,
}

impl Config {
    /// Load configuration from a TOML file layered over the defaults
    pub fn load(path: &Path) -> Result<Config> {
        let figment =
            Figment::from(Serialized::defaults(Config::default())).merge(Toml::file(path));
        Ok(figment.extract()?)
    }

    /// Load the explicit config file, or the user config if present, or defaults.
    ///
    /// An explicit file must exist and parse. The user file is optional: when
    /// it is missing or malformed the built-in defaults are used instead.
    pub fn load_or_default(explicit: Option<&Path>, user: Option<&Path>) -> Result<Config> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            tracing::debug!("Loading config from {}", path.display());
            return Self::load(path);
        }

        match user {
            Some(path) if path.exists() => {
                tracing::debug!("Loading user config from {}", path.display());
                Self::load(path).or_else(|e| {
                    tracing::warn!("Ignoring user config {}: {}", path.display(), e);
                    Ok(Config::default())
                })
            }
            _ => Ok(Config::default()),
        }
    }

    /// Render this config as pretty TOML
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_preset_scales() {
        assert_eq!(SizePreset::Small.scale(), 1);
        assert_eq!(SizePreset::Medium.scale(), 2);
        assert_eq!(SizePreset::Large.scale(), 4);
        assert_eq!(SizePreset::Huge.scale(), 8);
        assert_eq!(SizePreset::default(), SizePreset::Large);
    }

    #[test]
    fn test_preset_from_str() {
        assert_eq!("huge".parse::<SizePreset>().unwrap(), SizePreset::Huge);
        assert_eq!("Medium".parse::<SizePreset>().unwrap(), SizePreset::Medium);
        let err = "giant".parse::<SizePreset>().unwrap_err();
        assert!(matches!(err, ConfigError::UnknownPreset(ref s) if s == "giant"));
    }

    #[test]
    fn test_preset_display_round_trips_names() {
        for preset in SizePreset::all() {
            assert_eq!(preset.to_string().parse::<SizePreset>().unwrap(), *preset);
        }
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.render.draw, "#");
        assert_eq!(config.render.spacing, 1);
        assert_eq!(config.render.resolved_scale(), 4);
    }

    #[test]
    fn test_explicit_scale_overrides_size() {
        let render = RenderDefaults {
            size: SizePreset::Huge,
            scale: Some(3),
            ..RenderDefaults::default()
        };
        assert_eq!(render.resolved_scale(), 3);
    }

    #[test]
    fn test_config_serialization() {
        let toml = Config::default().to_toml().unwrap();
        assert!(toml.contains("[render]"));
        assert!(toml.contains("size = \"large\""));
        assert!(!toml.contains("scale"));
    }

    #[test]
    fn test_load_partial_file_keeps_defaults() {
        let file = write_config("[render]\nsize = \"medium\"\n");
        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.render.size, SizePreset::Medium);
        assert_eq!(config.render.draw, "#");
        assert_eq!(config.render.spacing, 1);
        assert_eq!(config.render.resolved_scale(), 2);
    }

    #[test]
    fn test_load_full_file() {
        let file = write_config("[render]\ndraw = \"██\"\nscale = 3\nspacing = 0\n");
        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.render.draw, "██");
        assert_eq!(config.render.scale, Some(3));
        assert_eq!(config.render.spacing, 0);
    }

    #[test]
    fn test_load_rejects_unknown_size() {
        let file = write_config("[render]\nsize = \"giant\"\n");
        assert!(matches!(Config::load(file.path()), Err(ConfigError::Load(_))));
    }

    #[test]
    fn test_missing_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.toml");
        let err = Config::load_or_default(Some(path.as_path()), None).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn test_no_sources_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("config.toml");
        assert_eq!(Config::load_or_default(None, None).unwrap(), Config::default());
        assert_eq!(
            Config::load_or_default(None, Some(missing.as_path())).unwrap(),
            Config::default()
        );
    }

    #[test]
    fn test_user_file_is_used_when_present() {
        let user = write_config("[render]\nspacing = 0\n");
        let config = Config::load_or_default(None, Some(user.path())).unwrap();
        assert_eq!(config.render.spacing, 0);
    }

    #[test]
    fn test_explicit_file_wins_over_user_file() {
        let user = write_config("[render]\nspacing = 0\n");
        let explicit = write_config("[render]\nspacing = 3\n");
        let config = Config::load_or_default(Some(explicit.path()), Some(user.path())).unwrap();
        assert_eq!(config.render.spacing, 3);
    }

    #[test]
    fn test_malformed_user_file_falls_back_to_defaults() {
        let user = write_config("[render]\nsize = \"giant\"\n");
        let config = Config::load_or_default(None, Some(user.path())).unwrap();
        assert_eq!(config, Config::default());

        // The same file passed explicitly is still an error
        assert!(Config::load_or_default(Some(user.path()), None).is_err());
    }
}
