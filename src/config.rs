//! QRGEN runtime configuration handling

use crate::error::{Error, Result};
use crate::qr::{EccLevel, OutputFormat};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Top-level configuration structure persisted to disk or environment
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct QrGenConfig {
    /// Default encoding options applied when no CLI flag is given
    pub defaults: DefaultOptions,
    /// Logging configuration
    pub logging: LoggingOptions,
}

impl QrGenConfig {
    /// Load configuration from an explicit path or fall back to discovered defaults.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        let mut config = if let Some(path) = explicit_path {
            Self::from_file(path)?
        } else if let Some(path) = Self::discover_file()? {
            tracing::info!("Using configuration file: {}", path.display());
            Self::from_file(&path)?
        } else {
            tracing::debug!("No qrgen.toml / qrgen.yaml found, using defaults");
            Self::default()
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// Attempt to locate a configuration file in common locations.
    fn discover_file() -> Result<Option<PathBuf>> {
        let cwd =
            env::current_dir().map_err(|e| Error::Config(format!("Failed to read cwd: {e}")))?;
        for candidate in ["qrgen.toml", "qrgen.yaml", "qrgen.yml"] {
            let path = cwd.join(candidate);
            if path.exists() {
                return Ok(Some(path));
            }
        }

        if let Some(xdg_config) = env::var_os("XDG_CONFIG_HOME") {
            let base = PathBuf::from(xdg_config).join("qrgen");
            for candidate in ["config.toml", "config.yaml"] {
                let path = base.join(candidate);
                if path.exists() {
                    return Ok(Some(path));
                }
            }
        }

        Ok(None)
    }

    /// Read configuration from a concrete file path.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Failed to read {}: {e}", path.display())))?;

        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("")
            .to_ascii_lowercase()
            .as_str()
        {
            "toml" => toml::from_str(&contents).map_err(|e| {
                Error::Config(format!("Failed to parse TOML {}: {e}", path.display()))
            }),
            "yaml" | "yml" => serde_yaml::from_str(&contents).map_err(|e| {
                Error::Config(format!("Failed to parse YAML {}: {e}", path.display()))
            }),
            other => Err(Error::Config(format!(
                "Unsupported config format '{}', expected toml/yaml",
                other
            ))),
        }
    }

    /// Apply environment variable overrides after file/default loading.
    fn apply_env_overrides(&mut self) {
        self.defaults.apply_env_overrides();
        self.logging.apply_env_overrides();
    }
}

/// Default encoding options merged underneath CLI flags
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultOptions {
    /// Override for the error-correction level (L/M/Q/H)
    pub ecc_level: Option<EccLevel>,
    /// Override for the module pixel scale
    pub scale: Option<u32>,
    /// Override for the quiet-zone width in modules
    pub border: Option<u32>,
    /// Override for the output format (png/svg/pdf)
    pub format: Option<OutputFormat>,
}

impl DefaultOptions {
    pub(crate) fn apply_env_overrides(&mut self) {
        if let Ok(level) = env::var("QRGEN_ECC") {
            if let Some(parsed) = EccLevel::parse(&level) {
                self.ecc_level = Some(parsed);
            }
        }
        if let Ok(scale) = env::var("QRGEN_SCALE") {
            self.scale = scale.parse::<u32>().ok();
        }
        if let Ok(border) = env::var("QRGEN_BORDER") {
            self.border = border.parse::<u32>().ok();
        }
        if let Ok(format) = env::var("QRGEN_FORMAT") {
            if let Some(parsed) = OutputFormat::parse(&format) {
                self.format = Some(parsed);
            }
        }
    }
}

/// Structured logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingOptions {
    /// Default log level (overridable via `QRGEN_LOG_LEVEL`)
    pub level: String,
    /// Optional log file path for teeing structured logs
    pub file: Option<PathBuf>,
    /// Force ANSI colors in stdout logging
    pub color: bool,
    /// Optional log rotation strategy applied to `file`
    pub rotation: Option<LogRotation>,
}

impl Default for LoggingOptions {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
            color: true,
            rotation: None,
        }
    }
}

impl LoggingOptions {
    pub(crate) fn apply_env_overrides(&mut self) {
        if let Ok(level) = env::var("QRGEN_LOG_LEVEL") {
            self.level = level;
        }
        if let Ok(file) = env::var("QRGEN_LOG_FILE") {
            self.file = Some(PathBuf::from(file));
        }
        if let Ok(color) = env::var("QRGEN_LOG_COLOR") {
            match color.to_ascii_lowercase().as_str() {
                "0" | "false" | "off" => self.color = false,
                "1" | "true" | "on" => self.color = true,
                _ => {}
            }
        }
        if let Ok(rotation) = env::var("QRGEN_LOG_ROTATION") {
            if let Some(parsed) = LogRotation::parse(&rotation) {
                self.rotation = Some(parsed);
            }
        }
    }
}

/// Supported log rotation policies for file sinks
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogRotation {
    /// Rotate log files once per hour
    Hourly,
    /// Rotate log files once per day
    Daily,
}

impl LogRotation {
    fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "hourly" => Some(Self::Hourly),
            "daily" => Some(Self::Daily),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = QrGenConfig::default();
        assert!(config.defaults.ecc_level.is_none());
        assert_eq!(config.logging.level, "info");
        assert!(config.logging.color);
    }

    #[test]
    fn test_parse_toml() {
        let config: QrGenConfig = toml::from_str(
            r#"
            [defaults]
            ecc_level = "H"
            scale = 12
            format = "svg"

            [logging]
            level = "debug"
            rotation = "daily"
            "#,
        )
        .unwrap();

        assert_eq!(config.defaults.ecc_level, Some(EccLevel::H));
        assert_eq!(config.defaults.scale, Some(12));
        assert!(config.defaults.border.is_none());
        assert_eq!(config.defaults.format, Some(OutputFormat::Svg));
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.rotation, Some(LogRotation::Daily));
    }

    #[test]
    fn test_parse_yaml() {
        let config: QrGenConfig = serde_yaml::from_str(
            r#"
            defaults:
              border: 2
              format: pdf
            "#,
        )
        .unwrap();

        assert_eq!(config.defaults.border, Some(2));
        assert_eq!(config.defaults.format, Some(OutputFormat::Pdf));
    }
}
