pub mod toml_config;

use crate::domain::model::OutputFormat;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_path, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
use toml_config::TomlConfig;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "aster")]
#[command(version, about = "Project Aster - validate and process research input")]
pub struct CliConfig {
    /// Text to process
    pub input: Option<String>,

    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Output format (text or json), overrides the config file
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

/// Effective settings after merging the config file with command line overrides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub format: OutputFormat,
    pub log_level: Option<String>,
    pub json_logs: bool,
    pub verbose: bool,
}

impl Settings {
    pub fn merge(file: Option<&TomlConfig>, format: Option<OutputFormat>, verbose: bool) -> Self {
        Self {
            format: format
                .or_else(|| file.map(TomlConfig::output_format))
                .unwrap_or_default(),
            log_level: file.and_then(|c| c.log_level().map(str::to_string)),
            json_logs: file.map(TomlConfig::json_logs).unwrap_or(false),
            verbose,
        }
    }
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn load_settings(&self) -> Result<Settings> {
        let file = match &self.config {
            Some(path) => {
                let config = TomlConfig::from_file(path)?;
                config.validate()?;
                Some(config)
            }
            None => None,
        };
        Ok(Settings::merge(file.as_ref(), self.format, self.verbose))
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validate_path("config", path)?;
        }
        Ok(())
    }
}
