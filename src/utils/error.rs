use crate::domain::model::{CalculationKind, Field};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalcError {
    #[error("Invalid number for {field} ('{value}'): {reason}")]
    InvalidNumber {
        field: Field,
        value: String,
        reason: String,
    },

    #[error("Input ended before {field} was provided")]
    MissingInput { field: Field },

    #[error("Negative {field} is not allowed: {value}")]
    NegativeValue { field: Field, value: f64 },

    #[error("{kind} interest result overflowed: {result}")]
    NonFiniteResult { kind: CalculationKind, result: f64 },

    #[error("{kind} interest has no real result for these inputs")]
    UndefinedResult { kind: CalculationKind },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Arithmetic,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl CalcError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CalcError::InvalidNumber { .. }
            | CalcError::MissingInput { .. }
            | CalcError::NegativeValue { .. } => ErrorCategory::Input,
            CalcError::NonFiniteResult { .. } | CalcError::UndefinedResult { .. } => {
                ErrorCategory::Arithmetic
            }
            CalcError::ConfigError { .. }
            | CalcError::ConfigValidationError { .. }
            | CalcError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            CalcError::IoError(_) | CalcError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Arithmetic => ErrorSeverity::Medium,
            ErrorCategory::Input | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CalcError::InvalidNumber { field, value, .. } => {
                format!("'{}' is not a valid number for the {}", value, field)
            }
            CalcError::MissingInput { field } => {
                format!("No value was entered for the {}", field)
            }
            CalcError::NegativeValue { field, value } => {
                format!("The {} cannot be negative (got {})", field, value)
            }
            CalcError::NonFiniteResult { kind, .. } => {
                format!("The {} interest result is too large to represent", kind)
            }
            CalcError::UndefinedResult { kind } => {
                format!("The {} interest result is undefined for these inputs", kind)
            }
            CalcError::IoError(e) => format!("Could not read or write the console: {}", e),
            CalcError::SerializationError(e) => format!("Could not encode the result: {}", e),
            CalcError::ConfigError { message } => format!("Configuration problem: {}", message),
            CalcError::ConfigValidationError { field, message } => {
                format!("Configuration field '{}' is invalid: {}", field, message)
            }
            CalcError::InvalidConfigValueError { field, value, reason } => {
                format!("Configuration field '{}' has bad value '{}': {}", field, value, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CalcError::InvalidNumber { .. } => "Enter a plain decimal number such as 1000 or 7.25",
            CalcError::MissingInput { .. } => "Provide principal, rate and time on separate lines",
            CalcError::NegativeValue { .. } => {
                "Enter a value of zero or more, or set [input] allow_negative = true"
            }
            CalcError::NonFiniteResult { .. } => "Use a smaller principal, rate or time",
            CalcError::UndefinedResult { .. } => {
                "A rate below -100% with a fractional time has no real result; use a whole time or a rate of -100% or more"
            }
            CalcError::IoError(_) => "Check that standard input and output are available",
            CalcError::SerializationError(_) => "Retry without --json",
            CalcError::ConfigError { .. }
            | CalcError::ConfigValidationError { .. }
            | CalcError::InvalidConfigValueError { .. } => {
                "Check the configuration file passed with --config"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;
