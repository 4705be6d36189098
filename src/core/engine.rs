use crate::config::{CalculatorSettings, OutputFormat};
use crate::domain::model::{Calculation, Field, Terms};
use crate::domain::ports::InterestFormula;
use crate::utils::error::{CalcError, Result};
use crate::utils::validation::{parse_number, validate_non_negative};
use std::io::{BufRead, Write};

/// Prompts for the three inputs of a formula, then prints its result.
pub struct CalculatorEngine<F: InterestFormula> {
    formula: F,
    settings: CalculatorSettings,
}

impl<F: InterestFormula> CalculatorEngine<F> {
    pub fn new(formula: F) -> Self {
        let settings = CalculatorSettings::defaults_for(formula.kind());
        Self { formula, settings }
    }

    pub fn with_settings(formula: F, settings: CalculatorSettings) -> Self {
        Self { formula, settings }
    }

    /// Runs one interactive session. In JSON mode prompts are not written,
    /// so `output` receives exactly one line.
    pub fn run<R: BufRead, W: Write>(&self, mut input: R, mut output: W) -> Result<Calculation> {
        let mut terms = Terms::default();

        for field in self.formula.field_order() {
            if self.settings.format == OutputFormat::Text {
                writeln!(output, "{}", self.settings.prompts.get(field))?;
                output.flush()?;
            }

            let value = self.read_field(&mut input, field)?;
            tracing::debug!(field = %field, value, "Parsed input");
            terms.set(field, value);
        }

        let calculation = self.calculate(terms)?;
        writeln!(output, "{}", self.render(&calculation)?)?;
        output.flush()?;

        Ok(calculation)
    }

    pub fn calculate(&self, terms: Terms) -> Result<Calculation> {
        let kind = self.formula.kind();
        let result = self.formula.compute(&terms);

        if result.is_nan() {
            tracing::warn!(kind = %kind, "Calculation has no real result");
            return Err(CalcError::UndefinedResult { kind });
        }
        if result.is_infinite() {
            tracing::warn!(kind = %kind, result, "Calculation overflowed");
            return Err(CalcError::NonFiniteResult { kind, result });
        }
        // -0 would otherwise print with a sign
        let result = if result == 0.0 { 0.0 } else { result };

        tracing::debug!(
            kind = %kind,
            principal = terms.principal,
            rate = terms.rate,
            time = terms.time,
            result,
            "Calculation complete"
        );

        Ok(Calculation {
            kind,
            terms,
            result,
        })
    }

    pub fn render(&self, calculation: &Calculation) -> Result<String> {
        match self.settings.format {
            OutputFormat::Json => Ok(serde_json::to_string(calculation)?),
            OutputFormat::Text => {
                let number = match self.settings.decimal_places {
                    Some(places) => format!("{:.*}", places, calculation.result),
                    None => format!("{}", calculation.result),
                };

                Ok(match &self.settings.label {
                    Some(label) => format!("{}: {}", label, number),
                    None => number,
                })
            }
        }
    }

    fn read_field<R: BufRead>(&self, input: &mut R, field: Field) -> Result<f64> {
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(CalcError::MissingInput { field });
        }

        let value = parse_number(field, &line)?;
        if !self.settings.allow_negative {
            validate_non_negative(field, value)?;
        }
        Ok(value)
    }
}
