use crate::config::{CalculatorSettings, OutputFormat};
use crate::domain::model::CalculationKind;
use crate::utils::error::{CalcError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_range, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const MAX_DECIMAL_PLACES: usize = 12;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub input: Option<InputConfig>,
    pub output: Option<OutputConfig>,
    pub simple: Option<CalculatorConfig>,
    pub compound: Option<CalculatorConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InputConfig {
    pub allow_negative: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CalculatorConfig {
    pub decimal_places: Option<usize>,
    pub label: Option<String>,
    pub prompts: Option<PromptConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PromptConfig {
    pub principal: Option<String>,
    pub rate: Option<String>,
    pub time: Option<String>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| CalcError::ConfigError {
            message: format!("cannot read {}: {}", path.as_ref().display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| CalcError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR_NAME}` with the environment value; unknown names stay as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| CalcError::ConfigError {
            message: format!("invalid placeholder pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn calculator(&self, kind: CalculationKind) -> Option<&CalculatorConfig> {
        match kind {
            CalculationKind::Simple => self.simple.as_ref(),
            CalculationKind::Compound => self.compound.as_ref(),
        }
    }

    pub fn allow_negative(&self) -> bool {
        self.input
            .as_ref()
            .and_then(|i| i.allow_negative)
            .unwrap_or(true)
    }

    pub fn output_format(&self) -> Result<OutputFormat> {
        match self.output.as_ref().and_then(|o| o.format.as_deref()) {
            None => Ok(OutputFormat::default()),
            Some(name) => {
                OutputFormat::from_name(name).ok_or_else(|| CalcError::InvalidConfigValueError {
                    field: "output.format".to_string(),
                    value: name.to_string(),
                    reason: format!(
                        "Unsupported format. Valid formats: {}",
                        OutputFormat::NAMES.join(", ")
                    ),
                })
            }
        }
    }

    /// Layers the file's overrides on top of the built-in defaults for `kind`.
    pub fn settings_for(&self, kind: CalculationKind) -> Result<CalculatorSettings> {
        let mut settings = CalculatorSettings::defaults_for(kind);
        settings.allow_negative = self.allow_negative();
        settings.format = self.output_format()?;

        if let Some(calculator) = self.calculator(kind) {
            if calculator.decimal_places.is_some() {
                settings.decimal_places = calculator.decimal_places;
            }
            if let Some(label) = &calculator.label {
                settings.label = Some(label.clone());
            }
            if let Some(prompts) = &calculator.prompts {
                if let Some(p) = &prompts.principal {
                    settings.prompts.principal = p.clone();
                }
                if let Some(r) = &prompts.rate {
                    settings.prompts.rate = r.clone();
                }
                if let Some(t) = &prompts.time {
                    settings.prompts.time = t.clone();
                }
            }
        }

        Ok(settings)
    }

    pub fn validate_config(&self) -> Result<()> {
        self.output_format()?;

        for kind in [CalculationKind::Simple, CalculationKind::Compound] {
            let Some(calculator) = self.calculator(kind) else {
                continue;
            };

            if let Some(places) = calculator.decimal_places {
                validate_range(
                    &format!("{}.decimal_places", kind),
                    places,
                    0,
                    MAX_DECIMAL_PLACES,
                )?;
            }

            if let Some(label) = &calculator.label {
                validate_non_empty_string(&format!("{}.label", kind), label)?;
            }

            if let Some(prompts) = &calculator.prompts {
                let entries = [
                    ("principal", &prompts.principal),
                    ("rate", &prompts.rate),
                    ("time", &prompts.time),
                ];
                for (name, prompt) in entries {
                    if let Some(prompt) = prompt {
                        validate_non_empty_string(
                            &format!("{}.prompts.{}", kind, name),
                            prompt,
                        )?;
                    }
                }
            }
        }

        Ok(())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert!(config.validate().is_ok());

        let settings = config.settings_for(CalculationKind::Compound).unwrap();
        assert_eq!(settings, CalculatorSettings::defaults_for(CalculationKind::Compound));
    }

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[input]
allow_negative = false

[output]
format = "json"

[simple]
decimal_places = 3
label = "Simple interest"

[compound.prompts]
principal = "Principal?"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_ok());

        let simple = config.settings_for(CalculationKind::Simple).unwrap();
        assert_eq!(simple.decimal_places, Some(3));
        assert_eq!(simple.label.as_deref(), Some("Simple interest"));
        assert!(!simple.allow_negative);
        assert_eq!(simple.format, OutputFormat::Json);

        let compound = config.settings_for(CalculationKind::Compound).unwrap();
        assert_eq!(compound.decimal_places, Some(2));
        assert_eq!(compound.prompts.principal, "Principal?");
        assert_eq!(compound.prompts.rate, "Enter the rate of interest:");
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("INTEREST_CALC_TEST_LABEL", "Amount due");

        let toml_content = r#"
[compound]
label = "${INTEREST_CALC_TEST_LABEL}"

[simple]
label = "${INTEREST_CALC_UNSET_VARIABLE}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        let compound = config.settings_for(CalculationKind::Compound).unwrap();
        assert_eq!(compound.label.as_deref(), Some("Amount due"));

        let simple = config.settings_for(CalculationKind::Simple).unwrap();
        assert_eq!(simple.label.as_deref(), Some("${INTEREST_CALC_UNSET_VARIABLE}"));

        std::env::remove_var("INTEREST_CALC_TEST_LABEL");
    }

    #[test]
    fn test_config_validation() {
        let bad_format = TomlConfig::from_toml_str("[output]\nformat = \"xml\"\n").unwrap();
        assert!(bad_format.validate().is_err());

        let bad_places = TomlConfig::from_toml_str("[compound]\ndecimal_places = 40\n").unwrap();
        assert!(bad_places.validate().is_err());

        let blank_prompt =
            TomlConfig::from_toml_str("[simple.prompts]\nrate = \"  \"\n").unwrap();
        assert!(blank_prompt.validate().is_err());
    }

    #[test]
    fn test_malformed_toml_is_rejected() {
        assert!(TomlConfig::from_toml_str("[input\nallow_negative = yes").is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[compound]\ndecimal_places = 4\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        let settings = config.settings_for(CalculationKind::Compound).unwrap();
        assert_eq!(settings.decimal_places, Some(4));
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let err = TomlConfig::from_file("/nonexistent/interest-calc.toml").unwrap_err();
        assert!(matches!(err, CalcError::ConfigError { .. }));
    }
}
