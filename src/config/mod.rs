#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::domain::model::{CalculationKind, Field};
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
pub use cli::CliArgs;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub const NAMES: [&'static str; 2] = ["text", "json"];

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "text" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompts {
    pub principal: String,
    pub rate: String,
    pub time: String,
}

impl Prompts {
    pub fn for_kind(kind: CalculationKind) -> Self {
        match kind {
            CalculationKind::Simple => Self {
                principal: "Enter the principal:".to_string(),
                rate: "Enter the rate of interest:".to_string(),
                time: "Enter the time period:".to_string(),
            },
            CalculationKind::Compound => Self {
                principal: "Enter the principal amount:".to_string(),
                rate: "Enter the rate of interest:".to_string(),
                time: "Enter the time (in years):".to_string(),
            },
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Principal => &self.principal,
            Field::Rate => &self.rate,
            Field::Time => &self.time,
        }
    }
}

/// Fully resolved settings for one calculator run.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculatorSettings {
    /// `None` prints the shortest decimal that round-trips.
    pub decimal_places: Option<usize>,
    pub label: Option<String>,
    pub prompts: Prompts,
    pub allow_negative: bool,
    pub format: OutputFormat,
}

impl CalculatorSettings {
    pub fn defaults_for(kind: CalculationKind) -> Self {
        let decimal_places = match kind {
            CalculationKind::Simple => None,
            CalculationKind::Compound => Some(2),
        };

        Self {
            decimal_places,
            label: None,
            prompts: Prompts::for_kind(kind),
            allow_negative: true,
            format: OutputFormat::Text,
        }
    }
}
