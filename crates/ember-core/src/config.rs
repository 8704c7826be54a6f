//! Layered engine configuration
//!
//! Config is resolved with these layers of precedence (highest wins):
//! 1. Environment variable: `EMBER_FULL_SCREEN`
//! 2. An explicit file passed by the caller (e.g. `--config`)
//! 3. Project-local: `./ember.toml`
//! 4. Global: `<config_dir>/ember/ember.toml`
//! 5. Built-in defaults
//!
//! Command-line flags are applied by the binary on top of the result.

use crate::{EmberError, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Environment variable that overrides `window.full_screen`
pub const FULL_SCREEN_ENV: &str = "EMBER_FULL_SCREEN";

const LOCAL_CONFIG_FILE: &str = "ember.toml";

/// Window creation settings
#[derive(Debug, Clone, PartialEq)]
pub struct WindowConfig {
    /// Window and application title
    pub title: String,
    /// Exclusive full-screen at the primary display's resolution
    pub full_screen: bool,
    /// Client width when windowed
    pub width: u32,
    /// Client height when windowed
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Engine".to_string(),
            full_screen: false,
            width: 800,
            height: 600,
        }
    }
}

/// Per-frame reporting settings
#[derive(Debug, Clone, PartialEq)]
pub struct FrameConfig {
    /// Seconds between frame statistics reports
    pub report_interval_secs: f64,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            report_interval_secs: 1.0,
        }
    }
}

/// Resolved configuration
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EngineConfig {
    pub window: WindowConfig,
    pub frame: FrameConfig,
}

/// On-disk layer. Every field is optional so a file only overrides what it names.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    window: WindowLayer,
    #[serde(default)]
    frame: FrameLayer,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct WindowLayer {
    title: Option<String>,
    full_screen: Option<bool>,
    width: Option<u32>,
    height: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FrameLayer {
    report_interval_secs: Option<f64>,
}

impl EngineConfig {
    /// Load config with layered precedence: global < project < explicit < env var
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let global_path = Self::global_config_path();
        let local_path = PathBuf::from(LOCAL_CONFIG_FILE);
        let env_value = std::env::var(FULL_SCREEN_ENV).ok();
        Self::load_layers(
            global_path.as_deref(),
            &local_path,
            explicit,
            env_value.as_deref(),
        )
    }

    /// Resolve every layer from explicit sources. Global and local files are
    /// skipped when absent; the explicit file must exist.
    pub fn load_layers(
        global: Option<&Path>,
        local: &Path,
        explicit: Option<&Path>,
        full_screen_env: Option<&str>,
    ) -> Result<Self> {
        let mut config = EngineConfig::default();

        // Layer 1: Global config
        if let Some(global_path) = global {
            if global_path.exists() {
                config.merge_file(global_path)?;
            }
        }

        // Layer 2: Project-local config
        if local.exists() {
            config.merge_file(local)?;
        }

        // Layer 3: Explicit config, which must exist
        if let Some(path) = explicit {
            config.merge_file(path)?;
        }

        // Layer 4: Environment variable override
        config.apply_full_screen_override(full_screen_env)?;

        config.validate()?;
        Ok(config)
    }

    /// Load defaults plus a single file, without environment overrides
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let mut config = EngineConfig::default();
        config.merge_file(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse defaults plus a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let mut config = EngineConfig::default();
        config.merge_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Overlay the values named in a TOML file onto this config
    pub fn merge_file(&mut self, path: &Path) -> Result<()> {
        let content = std::fs::read_to_string(path)?;
        self.merge_str(&content).map_err(|e| {
            EmberError::Config(format!("Failed to parse config {}: {}", path.display(), e))
        })?;
        log::debug!("Loaded config layer {}", path.display());
        Ok(())
    }

    fn merge_str(&mut self, content: &str) -> Result<()> {
        let file: ConfigFile = toml::from_str(content)?;

        if let Some(title) = file.window.title {
            self.window.title = title;
        }
        if let Some(full_screen) = file.window.full_screen {
            self.window.full_screen = full_screen;
        }
        if let Some(width) = file.window.width {
            self.window.width = width;
        }
        if let Some(height) = file.window.height {
            self.window.height = height;
        }
        if let Some(interval) = file.frame.report_interval_secs {
            self.frame.report_interval_secs = interval;
        }
        Ok(())
    }

    /// Apply the value of `EMBER_FULL_SCREEN`, if set
    pub fn apply_full_screen_override(&mut self, value: Option<&str>) -> Result<()> {
        let Some(raw) = value else {
            return Ok(());
        };
        let full_screen = parse_flag(raw).ok_or_else(|| {
            EmberError::Config(format!("{FULL_SCREEN_ENV} must be 1/0/true/false, got '{raw}'"))
        })?;
        self.window.full_screen = full_screen;
        Ok(())
    }

    /// Reject values the window and frame layers cannot honor
    pub fn validate(&self) -> Result<()> {
        if self.window.width == 0 || self.window.height == 0 {
            return Err(EmberError::Config(format!(
                "window size must be non-zero, got {}x{}",
                self.window.width, self.window.height
            )));
        }
        let interval = self.frame.report_interval_secs;
        if !interval.is_finite() || interval <= 0.0 {
            return Err(EmberError::Config(format!(
                "frame.report_interval_secs must be positive, got {interval}"
            )));
        }
        Ok(())
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("ember").join(LOCAL_CONFIG_FILE))
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn temp_config(content: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("ember_config_test_{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("ember.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(content.as_bytes()).unwrap();
        path
    }

    fn cleanup(path: &Path) {
        std::fs::remove_file(path).ok();
        std::fs::remove_dir(path.parent().unwrap()).ok();
    }

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.window.title, "Engine");
        assert!(!config.window.full_screen);
        assert_eq!((config.window.width, config.window.height), (800, 600));
        assert!((config.frame.report_interval_secs - 1.0).abs() < 1e-10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_config_from_file() {
        let path = temp_config(
            r#"
[window]
title = "Demo"
full_screen = true

[frame]
report_interval_secs = 2.5
"#,
        );
        let config = EngineConfig::load_from_file(&path).unwrap();

        assert_eq!(config.window.title, "Demo");
        assert!(config.window.full_screen);
        // Unnamed values keep their defaults
        assert_eq!(config.window.width, 800);
        assert!((config.frame.report_interval_secs - 2.5).abs() < 1e-10);

        cleanup(&path);
    }

    #[test]
    fn test_later_layer_wins() {
        let base = temp_config("[window]\nwidth = 1024\nheight = 768\n");
        let overlay = temp_config("[window]\nheight = 700\n");

        let mut config = EngineConfig::default();
        config.merge_file(&base).unwrap();
        config.merge_file(&overlay).unwrap();

        assert_eq!(config.window.width, 1024);
        assert_eq!(config.window.height, 700);

        cleanup(&base);
        cleanup(&overlay);
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = EngineConfig::from_toml_str("[window]\nvsync = true\n").unwrap_err();
        assert!(matches!(err, EmberError::TomlParseError(_)));
    }

    #[test]
    fn test_merge_file_reports_path() {
        let path = temp_config("[window]\nwidth = \"wide\"\n");
        let err = EngineConfig::load_from_file(&path).unwrap_err();
        match err {
            EmberError::Config(msg) => assert!(msg.contains("ember.toml")),
            other => panic!("unexpected error: {other:?}"),
        }
        cleanup(&path);
    }

    #[test]
    fn test_missing_explicit_file_is_io_error() {
        let path = std::env::temp_dir().join(format!("ember_missing_{}.toml", uuid::Uuid::new_v4()));
        let err = EngineConfig::load_from_file(&path).unwrap_err();
        assert!(matches!(err, EmberError::IoError(_)));
    }

    #[test]
    fn test_zero_size_rejected() {
        let err = EngineConfig::from_toml_str("[window]\nwidth = 0\n").unwrap_err();
        assert!(matches!(err, EmberError::Config(_)));
    }

    #[test]
    fn test_non_positive_interval_rejected() {
        let err = EngineConfig::from_toml_str("[frame]\nreport_interval_secs = 0.0\n").unwrap_err();
        assert!(matches!(err, EmberError::Config(_)));
    }

    #[test]
    fn test_full_screen_override() {
        let mut config = EngineConfig::default();

        config.apply_full_screen_override(None).unwrap();
        assert!(!config.window.full_screen);

        config.apply_full_screen_override(Some("TRUE")).unwrap();
        assert!(config.window.full_screen);

        config.apply_full_screen_override(Some("0")).unwrap();
        assert!(!config.window.full_screen);

        assert!(config.apply_full_screen_override(Some("maybe")).is_err());
    }

    fn missing_path() -> PathBuf {
        std::env::temp_dir().join(format!("ember_missing_{}.toml", uuid::Uuid::new_v4()))
    }

    #[test]
    fn test_load_layers_precedence() {
        let global = temp_config(
            "[window]\ntitle = \"Global\"\nwidth = 1024\nheight = 768\nfull_screen = true\n",
        );
        let local = temp_config("[window]\ntitle = \"Local\"\nwidth = 1280\n");
        let explicit = temp_config("[window]\ntitle = \"Explicit\"\n");

        let config = EngineConfig::load_layers(
            Some(&global),
            &local,
            Some(&explicit),
            Some("false"),
        )
        .unwrap();

        assert_eq!(config.window.title, "Explicit");
        assert_eq!(config.window.width, 1280);
        assert_eq!(config.window.height, 768);
        // Env var overrides the global file's full_screen
        assert!(!config.window.full_screen);
        // Untouched by every layer
        assert!((config.frame.report_interval_secs - 1.0).abs() < 1e-10);

        let without_env =
            EngineConfig::load_layers(Some(&global), &local, Some(&explicit), None).unwrap();
        assert!(without_env.window.full_screen);

        cleanup(&global);
        cleanup(&local);
        cleanup(&explicit);
    }

    #[test]
    fn test_load_layers_skips_absent_files() {
        let config =
            EngineConfig::load_layers(Some(&missing_path()), &missing_path(), None, None).unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn test_load_layers_missing_explicit_file_fails() {
        let err = EngineConfig::load_layers(None, &missing_path(), Some(&missing_path()), None)
            .unwrap_err();
        assert!(matches!(err, EmberError::IoError(_)));
    }

    #[test]
    fn test_load_layers_validates_result() {
        let local = temp_config("[window]\nheight = 0\n");
        let err = EngineConfig::load_layers(None, &local, None, None).unwrap_err();
        assert!(matches!(err, EmberError::Config(_)));
        cleanup(&local);
    }

    #[test]
    fn test_load_layers_rejects_bad_env_value() {
        let err = EngineConfig::load_layers(None, &missing_path(), None, Some("sometimes"))
            .unwrap_err();
        assert!(matches!(err, EmberError::Config(_)));
    }
}
