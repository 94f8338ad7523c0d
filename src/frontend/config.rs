use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const CONFIG_FILE_NAMES: [&str; 2] = [".heightwiserc", ".heightwiserc.toml"];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_precision")]
    pub precision: usize,

    #[serde(default)]
    pub format: OutputFormat,

    #[serde(default = "default_true")]
    pub color: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,

    #[serde(default)]
    pub format: LogStyle,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogStyle {
    Pretty,
    #[default]
    Compact,
    Json,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            precision: default_precision(),
            format: OutputFormat::Text,
            color: true,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: LogStyle::Compact,
        }
    }
}

fn default_true() -> bool { true }
fn default_precision() -> usize { crate::core::DEFAULT_PRECISION }
fn default_level() -> String { "warn".to_string() }

impl Config {
    /// Load configuration from a .heightwiserc file
    pub fn load(path: &Path) -> Result<Self, String> {
        let content = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config {}: {}", path.display(), e))?;

        Self::parse(&content)
    }

    /// Parse configuration from TOML string
    pub fn parse(content: &str) -> Result<Self, String> {
        toml::from_str(content)
            .map_err(|e| format!("Failed to parse config: {}", e))
    }

    /// Find and load configuration from the current directory or its parents.
    ///
    /// No config file at all yields the defaults; a config file that exists but
    /// fails to load is an error rather than silently skipped.
    pub fn discover() -> Result<Self, String> {
        match std::env::current_dir() {
            Ok(dir) => Self::discover_from(&dir),
            Err(_) => Ok(Self::default()),
        }
    }

    pub fn discover_from(start: &Path) -> Result<Self, String> {
        let mut current = Some(start.to_path_buf());

        while let Some(dir) = current {
            for name in CONFIG_FILE_NAMES {
                let config_path = dir.join(name);
                if config_path.exists() {
                    let config = Self::load(&config_path)
                        .map_err(|e| format!("{} ({})", e, config_path.display()))?;
                    tracing::debug!(path = %config_path.display(), "Loaded config");
                    return Ok(config);
                }
            }

            current = dir.parent().map(|p| p.to_path_buf());
        }

        Ok(Self::default())
    }

    /// Generate default configuration file content
    pub fn generate_default() -> String {
        toml::to_string_pretty(&Self::default())
            .unwrap_or_else(|_| String::from("# Failed to generate config"))
    }

    /// Save configuration to file
    pub fn save(&self, path: &Path) -> Result<(), String> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        fs::write(path, content)
            .map_err(|e| format!("Failed to write config: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.display.precision, 2);
        assert_eq!(config.display.format, OutputFormat::Text);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_parse_config() {
        let toml = r#"
[display]
precision = 3
format = "json"

[logging]
level = "debug"
format = "json"
"#;

        let config = Config::parse(toml).unwrap();
        assert_eq!(config.display.precision, 3);
        assert_eq!(config.display.format, OutputFormat::Json);
        assert!(config.display.color);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, LogStyle::Json);
    }

    #[test]
    fn test_parse_empty_uses_defaults() {
        assert_eq!(Config::parse("").unwrap(), Config::default());
    }

    #[test]
    fn test_unknown_format_rejected() {
        let err = Config::parse("[display]\nformat = \"yaml\"\n").unwrap_err();
        assert!(err.starts_with("Failed to parse config"));
    }

    #[test]
    fn test_save_and_discover() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();

        let mut config = Config::default();
        config.display.precision = 4;
        config.save(&dir.path().join(".heightwiserc")).unwrap();

        assert_eq!(Config::discover_from(&nested).unwrap(), config);
    }

    #[test]
    fn test_discover_without_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(Config::discover_from(dir.path()).unwrap(), Config::default());
    }

    #[test]
    fn test_discover_reports_broken_file() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("project");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join(".heightwiserc"), "[display]\nprecision = \"lots\"\n").unwrap();

        let err = Config::discover_from(&nested).unwrap_err();
        assert!(err.starts_with("Failed to parse config"));
        assert!(err.contains(".heightwiserc"));
    }

    #[test]
    fn test_generate_default_parses() {
        let text = Config::generate_default();
        assert_eq!(Config::parse(&text).unwrap(), Config::default());
    }
}
