use crate::domain::model::{CalculationKind, Field, Terms};

pub trait InterestFormula {
    fn kind(&self) -> CalculationKind;

    /// Order in which the interactive engine prompts for inputs.
    fn field_order(&self) -> [Field; 3];

    fn compute(&self, terms: &Terms) -> f64;
}
