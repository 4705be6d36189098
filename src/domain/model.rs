use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the three numeric inputs a calculator prompts for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Principal,
    Rate,
    Time,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Principal => "principal",
            Field::Rate => "rate",
            Field::Time => "time",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalculationKind {
    Simple,
    Compound,
}

impl CalculationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CalculationKind::Simple => "simple",
            CalculationKind::Compound => "compound",
        }
    }
}

impl fmt::Display for CalculationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Principal, rate (percentage points) and time (years).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Terms {
    pub principal: f64,
    pub rate: f64,
    pub time: f64,
}

impl Terms {
    pub fn new(principal: f64, rate: f64, time: f64) -> Self {
        Self {
            principal,
            rate,
            time,
        }
    }

    pub fn set(&mut self, field: Field, value: f64) {
        match field {
            Field::Principal => self.principal = value,
            Field::Rate => self.rate = value,
            Field::Time => self.time = value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Calculation {
    pub kind: CalculationKind,
    #[serde(flatten)]
    pub terms: Terms,
    pub result: f64,
}
