use crate::domain::model::OutputFormat;
use crate::utils::error::{AsterError, Result};
use crate::utils::validation::{validate_log_level, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub logging: Option<LoggingConfig>,
    #[serde(default)]
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub json: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: Option<OutputFormat>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(AsterError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| AsterError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${ASTER_LOG_LEVEL})，未定義的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| AsterError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|l| l.level.as_deref())
    }

    pub fn json_logs(&self) -> bool {
        self.logging.as_ref().and_then(|l| l.json).unwrap_or(false)
    }

    pub fn output_format(&self) -> OutputFormat {
        self.output
            .as_ref()
            .and_then(|o| o.format)
            .unwrap_or_default()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(level) = self.log_level() {
            validate_log_level("logging.level", level)?;
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
[logging]
level = "debug"
json = true

[output]
format = "json"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.log_level(), Some("debug"));
        assert!(config.json_logs());
        assert_eq!(config.output_format(), OutputFormat::Json);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert_eq!(config.log_level(), None);
        assert!(!config.json_logs());
        assert_eq!(config.output_format(), OutputFormat::Text);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("ASTER_TEST_LOG_LEVEL", "warn");

        let config =
            TomlConfig::from_toml_str("[logging]\nlevel = \"${ASTER_TEST_LOG_LEVEL}\"\n").unwrap();
        assert_eq!(config.log_level(), Some("warn"));

        std::env::remove_var("ASTER_TEST_LOG_LEVEL");
    }

    #[test]
    fn test_unknown_variable_is_left_in_place() {
        let config =
            TomlConfig::from_toml_str("[logging]\nlevel = \"${ASTER_TEST_UNDEFINED_VAR}\"\n")
                .unwrap();
        assert_eq!(config.log_level(), Some("${ASTER_TEST_UNDEFINED_VAR}"));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_values_rejected() {
        let config = TomlConfig::from_toml_str("[logging]\nlevel = \"loud\"\n").unwrap();
        assert!(config.validate().is_err());

        let err = TomlConfig::from_toml_str("[output]\nformat = \"yaml\"\n").unwrap_err();
        assert!(matches!(err, AsterError::ConfigError { .. }));
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[output]\nformat = \"text\"").unwrap();

        let config = TomlConfig::from_file(file.path()).unwrap();
        assert_eq!(config.output_format(), OutputFormat::Text);

        let err = TomlConfig::from_file("/nonexistent/aster.toml").unwrap_err();
        assert!(matches!(err, AsterError::IoError(_)));
    }
}
