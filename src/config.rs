//! TOML configuration loading and validation

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Smallest window the board and status panel fit in
pub const MIN_WINDOW_SIZE: [f32; 2] = [320.0, 420.0];

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub window: WindowConfig,
    pub ui: UiConfig,
    pub logging: LoggingConfig,
}

/// Native window settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub title: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        WindowConfig {
            width: 420.0,
            height: 560.0,
            title: "Tic-Tac-Toe".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Show a message when a click is ignored (occupied cell, game over)
    pub show_rejections: bool,
    /// List the moves played below the board
    pub show_history: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            show_rejections: true,
            show_history: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive, overridden by `RUST_LOG`
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            filter: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, or `None` if the file does not
    /// exist.
    pub fn load_optional(path: &Path) -> Result<Option<Self>, ConfigError> {
        if path.exists() {
            Self::load(path).map(Some)
        } else {
            Ok(None)
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let [min_w, min_h] = MIN_WINDOW_SIZE;
        if self.window.width.is_nan() || self.window.width < min_w {
            return Err(ConfigError::Validation(format!(
                "window.width must be >= {min_w}"
            )));
        }
        if self.window.height.is_nan() || self.window.height < min_h {
            return Err(ConfigError::Validation(format!(
                "window.height must be >= {min_h}"
            )));
        }
        if self.window.title.trim().is_empty() {
            return Err(ConfigError::Validation(
                "window.title must not be empty".into(),
            ));
        }
        if self.logging.filter.trim().is_empty() {
            return Err(ConfigError::Validation(
                "logging.filter must not be empty".into(),
            ));
        }
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(&AppConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        config.validate().expect("default config should be valid");
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
[ui]
show_rejections = false
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert!(!config.ui.show_rejections);
        // Other fields should be defaults
        assert!(config.ui.show_history);
        assert_eq!(config.window, WindowConfig::default());
        assert_eq!(config.logging.filter, "info");
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_validation_rejects_small_window() {
        let mut config = AppConfig::default();
        config.window.width = 100.0;
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.window.height = f32::NAN;
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.window.width = f32::NAN;
        assert!(config.validate().is_err());

        // Exactly the minimum is accepted
        let mut config = AppConfig::default();
        config.window.width = MIN_WINDOW_SIZE[0];
        config.window.height = MIN_WINDOW_SIZE[1];
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_empty_filter() {
        let mut config = AppConfig::default();
        config.logging.filter = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_empty_title() {
        let mut config = AppConfig::default();
        config.window.title = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_optional_missing_file() {
        let config = AppConfig::load_optional(Path::new("nonexistent_config.toml")).unwrap();
        assert_eq!(config, None);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tictactoe.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
[window]
width = 600.0

[logging]
filter = "tictactoe=debug"
"#
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.window.width, 600.0);
        assert_eq!(config.logging.filter, "tictactoe=debug");
        // Others are defaults
        assert_eq!(config.window.height, 560.0);
    }

    #[test]
    fn test_load_rejects_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "[window\nwidth = ").unwrap();
        assert!(matches!(
            AppConfig::load(&path),
            Err(ConfigError::TomlParse(_))
        ));
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = AppConfig::default_toml().unwrap();
        let config: AppConfig = toml::from_str(&toml_str).unwrap();
        config.validate().expect("roundtripped config should be valid");
    }
}
