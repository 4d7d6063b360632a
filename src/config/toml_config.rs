use crate::config::DEFAULT_FILE_NAME;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{RegistrarError, Result};
use crate::utils::validation::{validate_path, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub storage: StorageConfig,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_file_name")]
    pub file_name: String,
    pub data_dir: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub verbose: Option<bool>,
    pub json: Option<bool>,
}

fn default_file_name() -> String {
    DEFAULT_FILE_NAME.to_string()
}

impl TomlConfig {
    /// Loads settings from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| RegistrarError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    pub fn verbose(&self) -> bool {
        self.logging
            .as_ref()
            .and_then(|l| l.verbose)
            .unwrap_or(false)
    }

    pub fn json_logs(&self) -> bool {
        self.logging.as_ref().and_then(|l| l.json).unwrap_or(false)
    }
}

impl ConfigProvider for TomlConfig {
    fn data_dir(&self) -> &str {
        self.storage.data_dir.as_deref().unwrap_or(".")
    }

    fn file_name(&self) -> &str {
        &self.storage.file_name
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_path("storage.file_name", &self.storage.file_name)?;
        if let Some(dir) = &self.storage.data_dir {
            validate_path("storage.data_dir", dir)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[storage]
file_name = "spring.json"
data_dir = "./records"

[logging]
verbose = true
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.file_name(), "spring.json");
        assert_eq!(config.data_dir(), "./records");
        assert!(config.verbose());
        assert!(!config.json_logs());
    }

    #[test]
    fn test_storage_defaults() {
        let config = TomlConfig::from_toml_str("[storage]\n").unwrap();
        assert_eq!(config.file_name(), DEFAULT_FILE_NAME);
        assert_eq!(config.data_dir(), ".");
        assert!(!config.verbose());
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = TomlConfig::from_toml_str("[storage\nfile_name = 1").unwrap_err();
        assert!(matches!(err, RegistrarError::ConfigError { .. }));
    }

    #[test]
    fn test_empty_file_name_fails_validation() {
        let config = TomlConfig::from_toml_str("[storage]\nfile_name = \"\"\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[storage]\nfile_name = \"from-file.json\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.file_name(), "from-file.json");
    }
}
