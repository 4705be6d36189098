#[cfg(feature = "cli")]
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliArgs;
pub use config::{CalculatorSettings, OutputFormat};

pub use core::{
    compound::{compound_interest, try_compound_interest, CompoundInterest},
    engine::CalculatorEngine,
    simple::{simple_interest, SimpleInterest},
};
pub use domain::model::{Calculation, CalculationKind, Field, Terms};
pub use domain::ports::InterestFormula;
pub use utils::error::{CalcError, Result};
