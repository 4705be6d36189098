use crate::domain::model::Field;
use crate::utils::error::{CalcError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Parses one line of console input. Non-finite values are rejected.
pub fn parse_number(field: Field, text: &str) -> Result<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(CalcError::InvalidNumber {
            field,
            value: text.to_string(),
            reason: "Value cannot be empty".to_string(),
        });
    }

    let value: f64 = trimmed.parse().map_err(|e| CalcError::InvalidNumber {
        field,
        value: trimmed.to_string(),
        reason: format!("{}", e),
    })?;

    if !value.is_finite() {
        return Err(CalcError::InvalidNumber {
            field,
            value: trimmed.to_string(),
            reason: "Value must be a finite number".to_string(),
        });
    }

    Ok(value)
}

pub fn validate_non_negative(field: Field, value: f64) -> Result<()> {
    if value < 0.0 {
        return Err(CalcError::NegativeValue { field, value });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CalcError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(CalcError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number(Field::Principal, "1000").unwrap(), 1000.0);
        assert_eq!(parse_number(Field::Rate, "  7.25\n").unwrap(), 7.25);
        assert_eq!(parse_number(Field::Time, "-3").unwrap(), -3.0);
        assert_eq!(parse_number(Field::Time, "1e2").unwrap(), 100.0);
    }

    #[test]
    fn test_parse_number_rejects_garbage() {
        assert!(parse_number(Field::Principal, "").is_err());
        assert!(parse_number(Field::Principal, "   ").is_err());
        assert!(parse_number(Field::Principal, "ten").is_err());
        assert!(parse_number(Field::Principal, "1,000").is_err());
        assert!(parse_number(Field::Rate, "NaN").is_err());
        assert!(parse_number(Field::Rate, "inf").is_err());

        match parse_number(Field::Rate, "abc") {
            Err(CalcError::InvalidNumber { field, value, .. }) => {
                assert_eq!(field, Field::Rate);
                assert_eq!(value, "abc");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_validate_non_negative() {
        assert!(validate_non_negative(Field::Principal, 0.0).is_ok());
        assert!(validate_non_negative(Field::Principal, 10.5).is_ok());
        assert!(validate_non_negative(Field::Time, -0.5).is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("compound.decimal_places", 2usize, 0, 12).is_ok());
        assert!(validate_range("compound.decimal_places", 13usize, 0, 12).is_err());
    }
}
