//! Runtime configuration.
//!
//! Every value here is read by the decoration core and never written by it.
//! Configuration is loaded once from a TOML file (or taken from defaults) and
//! validated up front so the geometry code can assume sane values.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::constants::{
    DEFAULT_BORDER_WIDTH, DEFAULT_CORNER_RADIUS, DEFAULT_POPUP_LINE_SPACING,
    DEFAULT_POPUP_PADDING, DEFAULT_TITLE_HEIGHT,
};
use crate::popup::{PopupContext, PopupMask};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("{field} must be {requirement}, got {value}")]
    OutOfRange {
        field: &'static str,
        requirement: &'static str,
        value: i32,
    },
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub decoration: DecorationConfig,
    pub popup: PopupConfig,
}

/// Frame geometry settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DecorationConfig {
    /// Height of the title bar; also the width of each title-bar button.
    pub title_height: i32,

    /// Width of the outline on frames that have one.
    pub border_width: i32,

    /// Radius of rounded frame corners (0 = square).
    pub corner_radius: i32,
}

impl Default for DecorationConfig {
    fn default() -> Self {
        Self {
            title_height: DEFAULT_TITLE_HEIGHT,
            border_width: DEFAULT_BORDER_WIDTH,
            corner_radius: DEFAULT_CORNER_RADIUS,
        }
    }
}

impl DecorationConfig {
    pub fn button_width(&self) -> i32 {
        self.title_height
    }

    /// Size of the window icon drawn in the title bar.
    pub fn icon_size(&self) -> i32 {
        (self.title_height - 6).max(0)
    }
}

/// Popup (tooltip) settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PopupConfig {
    /// Contexts that are allowed to show popups.
    pub enabled: Vec<PopupContext>,

    /// Horizontal padding added to the widest line.
    pub padding: i32,

    /// Extra spacing added per line.
    pub line_spacing: i32,
}

impl Default for PopupConfig {
    fn default() -> Self {
        Self {
            enabled: PopupContext::ALL.to_vec(),
            padding: DEFAULT_POPUP_PADDING,
            line_spacing: DEFAULT_POPUP_LINE_SPACING,
        }
    }
}

impl PopupConfig {
    pub fn mask(&self) -> PopupMask {
        self.enabled.iter().copied().collect()
    }
}

impl Config {
    /// Load and validate configuration from `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&content)?;
        tracing::info!(?path, ?config.decoration, "loaded configuration");
        Ok(config)
    }

    /// Load configuration from `path` when given, otherwise use defaults.
    ///
    /// A file that fails to load is reported and replaced by the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };
        match Self::load(path) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!(?path, %err, "falling back to default configuration");
                Self::default()
            }
        }
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let checks = [
            ("decoration.title_height", "positive", self.decoration.title_height, 1),
            ("decoration.border_width", "non-negative", self.decoration.border_width, 0),
            ("decoration.corner_radius", "non-negative", self.decoration.corner_radius, 0),
            ("popup.padding", "non-negative", self.popup.padding, 0),
            ("popup.line_spacing", "non-negative", self.popup.line_spacing, 0),
        ];
        for (field, requirement, value, min) in checks {
            if value < min {
                return Err(ConfigError::OutOfRange {
                    field,
                    requirement,
                    value,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_document_uses_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.decoration.title_height, DEFAULT_TITLE_HEIGHT);
        assert_eq!(config.decoration.button_width(), DEFAULT_TITLE_HEIGHT);
        assert_eq!(config.popup.mask(), PopupMask::ALL);
    }

    #[test]
    fn partial_sections_keep_remaining_defaults() {
        let config = Config::from_toml(
            r#"
            [decoration]
            title_height = 18

            [popup]
            enabled = ["button", "task"]
            "#,
        )
        .unwrap();
        assert_eq!(config.decoration.title_height, 18);
        assert_eq!(config.decoration.border_width, DEFAULT_BORDER_WIDTH);
        let mask = config.popup.mask();
        assert!(mask.allows(PopupContext::Button));
        assert!(mask.allows(PopupContext::Task));
        assert!(!mask.allows(PopupContext::Clock));
        assert_eq!(config.popup.padding, DEFAULT_POPUP_PADDING);
    }

    #[test]
    fn zero_title_height_is_rejected() {
        let err = Config::from_toml("[decoration]\ntitle_height = 0\n").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::OutOfRange {
                field: "decoration.title_height",
                ..
            }
        ));
    }

    #[test]
    fn unknown_popup_context_is_a_parse_error() {
        let err = Config::from_toml("[popup]\nenabled = [\"tray\"]\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn icon_size_saturates_for_short_title_bars() {
        let cfg = DecorationConfig {
            title_height: 3,
            ..DecorationConfig::default()
        };
        assert_eq!(cfg.icon_size(), 0);
        assert_eq!(DecorationConfig::default().icon_size(), 18);
    }

    #[test]
    fn load_reads_file_and_falls_back_on_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[decoration]\nborder_width = 2").unwrap();
        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.decoration.border_width, 2);

        let missing = file.path().with_extension("missing");
        assert!(matches!(Config::load(&missing), Err(ConfigError::Io(_))));
        assert_eq!(Config::load_or_default(Some(&missing)), Config::default());
        assert_eq!(Config::load_or_default(None), Config::default());
    }
}
