use crate::domain::model::{CalculationKind, Field, Terms};
use crate::domain::ports::InterestFormula;

/// Interest earned, `P * R * T / 100`, with `rate` in percentage points.
pub fn simple_interest(principal: f64, rate: f64, time: f64) -> f64 {
    principal * rate * time / 100.0
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleInterest;

impl InterestFormula for SimpleInterest {
    fn kind(&self) -> CalculationKind {
        CalculationKind::Simple
    }

    fn field_order(&self) -> [Field; 3] {
        [Field::Principal, Field::Rate, Field::Time]
    }

    fn compute(&self, terms: &Terms) -> f64 {
        simple_interest(terms.principal, terms.rate, terms.time)
    }
}
