use crate::domain::model::{CalculationKind, Field, Terms};
use crate::domain::ports::InterestFormula;
use crate::utils::error::{CalcError, Result};

/// Total amount after compounding once per period: `P * (1 + R/100)^T`.
///
/// Arguments are ordered principal, time, rate. The value is not rounded and
/// overflow comes back as `f64::INFINITY`.
pub fn compound_interest(principal: f64, time: f64, rate: f64) -> f64 {
    principal * (1.0 + rate / 100.0).powf(time)
}

/// Like [`compound_interest`], but a non-finite amount is an error.
pub fn try_compound_interest(principal: f64, time: f64, rate: f64) -> Result<f64> {
    let amount = compound_interest(principal, time, rate);
    if amount.is_nan() {
        return Err(CalcError::UndefinedResult {
            kind: CalculationKind::Compound,
        });
    }
    if amount.is_infinite() {
        return Err(CalcError::NonFiniteResult {
            kind: CalculationKind::Compound,
            result: amount,
        });
    }
    Ok(amount)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CompoundInterest;

impl InterestFormula for CompoundInterest {
    fn kind(&self) -> CalculationKind {
        CalculationKind::Compound
    }

    fn field_order(&self) -> [Field; 3] {
        [Field::Principal, Field::Time, Field::Rate]
    }

    fn compute(&self, terms: &Terms) -> f64 {
        compound_interest(terms.principal, terms.time, terms.rate)
    }
}
