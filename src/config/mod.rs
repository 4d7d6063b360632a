pub mod cli;
pub mod toml_config;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
use serde::{Deserialize, Serialize};

pub const DEFAULT_FILE_NAME: &str = "Enrollments.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(Parser))]
#[cfg_attr(feature = "cli", command(name = "course-registrar"))]
#[cfg_attr(
    feature = "cli",
    command(about = "Register students for courses and keep the list in a JSON file")
)]
pub struct CliConfig {
    /// Backing JSON file, relative to the data directory
    #[cfg_attr(feature = "cli", arg(long, default_value = DEFAULT_FILE_NAME))]
    pub file: String,

    /// Directory holding the backing file
    #[cfg_attr(feature = "cli", arg(long, default_value = "."))]
    pub data_dir: String,

    /// Optional TOML file with storage and logging settings
    #[cfg_attr(feature = "cli", arg(long))]
    pub config: Option<String>,

    /// Enable verbose output
    #[cfg_attr(feature = "cli", arg(long))]
    pub verbose: bool,

    /// Emit diagnostics as JSON lines on stderr
    #[cfg_attr(feature = "cli", arg(long))]
    pub json_logs: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            file: DEFAULT_FILE_NAME.to_string(),
            data_dir: ".".to_string(),
            config: None,
            verbose: false,
            json_logs: false,
        }
    }
}

impl ConfigProvider for CliConfig {
    fn data_dir(&self) -> &str {
        &self.data_dir
    }

    fn file_name(&self) -> &str {
        &self.file
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("file", &self.file)?;
        validate_path("data_dir", &self.data_dir)?;
        if let Some(config) = &self.config {
            validate_path("config", config)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_enrollments_file() {
        let config = CliConfig::default();
        assert_eq!(config.file_name(), "Enrollments.json");
        assert_eq!(config.data_dir(), ".");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_file_name_is_rejected() {
        let config = CliConfig {
            file: String::new(),
            ..CliConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_parse_flags() {
        let config = CliConfig::parse_from([
            "course-registrar",
            "--file",
            "fall.json",
            "--data-dir",
            "/tmp/reg",
            "--verbose",
        ]);
        assert_eq!(config.file, "fall.json");
        assert_eq!(config.data_dir, "/tmp/reg");
        assert!(config.verbose);
        assert!(config.config.is_none());
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_parse_without_flags_uses_defaults() {
        let config = CliConfig::parse_from(["course-registrar"]);
        assert_eq!(config.file, DEFAULT_FILE_NAME);
        assert_eq!(config.data_dir, ".");
        assert!(!config.json_logs);
    }
}
