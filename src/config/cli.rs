use crate::config::toml_config::TomlConfig;
use crate::config::{CalculatorSettings, OutputFormat};
use crate::domain::model::CalculationKind;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::Args;
use std::path::PathBuf;

/// Flags shared by every calculator binary. None are required.
#[derive(Debug, Clone, Default, Args)]
pub struct CliArgs {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print the result as a single JSON line instead of prompting
    #[arg(long)]
    pub json: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Emit log lines on stderr as JSON
    #[arg(long)]
    pub log_json: bool,
}

impl CliArgs {
    /// Loads and validates the configuration file, if any, then applies flag overrides.
    pub fn load_settings(&self, kind: CalculationKind) -> Result<CalculatorSettings> {
        let config = match &self.config {
            Some(path) => {
                tracing::debug!("Loading configuration from: {}", path.display());
                TomlConfig::from_file(path)?
            }
            None => TomlConfig::default(),
        };
        config.validate()?;

        let mut settings = config.settings_for(kind)?;
        if self.json {
            settings.format = OutputFormat::Json;
        }
        Ok(settings)
    }
}
