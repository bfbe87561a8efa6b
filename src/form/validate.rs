//! Field kinds and their validation rules.

use crate::error::ValidationError;
use std::fmt;

/// Interval used when the interval field is left empty, in milliseconds.
pub const DEFAULT_INTERVAL_MS: u64 = 1000;
/// Ticket cost used when the cost field is left empty.
pub const DEFAULT_COST: f64 = 0.5;

/// The three fields of the configuration form, in focus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// Total number of outcomes.
    Chances,
    /// Milliseconds between draws.
    Interval,
    /// Price of one ticket.
    Cost,
}

impl FieldKind {
    /// All fields in focus order.
    pub const ALL: [Self; 3] = [Self::Chances, Self::Interval, Self::Cost];

    /// Label shown above the input.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Chances => "Chances",
            Self::Interval => "Interval",
            Self::Cost => "Cost",
        }
    }

    /// Example value shown while the input is empty.
    pub const fn placeholder(self) -> &'static str {
        match self {
            Self::Chances => "25_000_000",
            Self::Interval => "1000",
            Self::Cost => "0.5",
        }
    }

    /// The rule this field's text must satisfy.
    pub const fn validator(self) -> Validator {
        match self {
            Self::Chances => validate_chances,
            Self::Interval => validate_interval,
            Self::Cost => validate_cost,
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Chances => "chances",
            Self::Interval => "interval",
            Self::Cost => "cost",
        })
    }
}

/// A successfully validated field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue {
    /// An optional field left empty.
    Empty,
    /// A whole number.
    Integer(u64),
    /// A decimal number.
    Real(f64),
}

/// Checks a field's raw text and parses it.
pub type Validator = fn(&str) -> Result<FieldValue, ValidationError>;

/// Chances: required, `_` allowed as a digit separator, positive.
pub fn validate_chances(text: &str) -> Result<FieldValue, ValidationError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::ChancesRequired);
    }

    let digits = trimmed.replace('_', "");
    let value: i128 = digits
        .parse()
        .map_err(|source| ValidationError::InvalidInteger {
            field: FieldKind::Chances,
            value: text.to_string(),
            source,
        })?;

    if value <= 0 {
        return Err(ValidationError::NotPositive {
            field: FieldKind::Chances,
        });
    }
    // Parse again as u64 so overflow reports the standard parse error.
    digits
        .parse::<u64>()
        .map(FieldValue::Integer)
        .map_err(|source| ValidationError::InvalidInteger {
            field: FieldKind::Chances,
            value: text.to_string(),
            source,
        })
}

/// Interval: optional, otherwise a non-negative whole number of milliseconds.
pub fn validate_interval(text: &str) -> Result<FieldValue, ValidationError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(FieldValue::Empty);
    }

    let value: i128 = trimmed
        .parse()
        .map_err(|source| ValidationError::InvalidInteger {
            field: FieldKind::Interval,
            value: text.to_string(),
            source,
        })?;

    if value < 0 {
        return Err(ValidationError::Negative {
            field: FieldKind::Interval,
        });
    }
    trimmed
        .parse::<u64>()
        .map(FieldValue::Integer)
        .map_err(|source| ValidationError::InvalidInteger {
            field: FieldKind::Interval,
            value: text.to_string(),
            source,
        })
}

/// Cost: optional, otherwise a finite, non-negative decimal number.
pub fn validate_cost(text: &str) -> Result<FieldValue, ValidationError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(FieldValue::Empty);
    }

    let value: f64 = trimmed
        .parse()
        .map_err(|source| ValidationError::InvalidNumber {
            field: FieldKind::Cost,
            value: text.to_string(),
            source,
        })?;

    if !value.is_finite() {
        return Err(ValidationError::NotFinite {
            field: FieldKind::Cost,
        });
    }
    if value < 0.0 {
        return Err(ValidationError::Negative {
            field: FieldKind::Cost,
        });
    }
    Ok(FieldValue::Real(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chances_required() {
        let err = validate_chances("").unwrap_err();
        assert_eq!(err, ValidationError::ChancesRequired);
        assert_eq!(err.to_string(), "chances number is required");
        assert_eq!(validate_chances("   ").unwrap_err(), ValidationError::ChancesRequired);
    }

    #[test]
    fn test_chances_grouping_underscores() {
        assert_eq!(validate_chances("25_000_000"), Ok(FieldValue::Integer(25_000_000)));
        assert_eq!(validate_chances(" 1_0 "), Ok(FieldValue::Integer(10)));
    }

    #[test]
    fn test_chances_rejects_garbage() {
        let err = validate_chances("lots").unwrap_err();
        assert!(matches!(err, ValidationError::InvalidInteger { field: FieldKind::Chances, .. }));
        assert_eq!(err.to_string(), "chances must be a whole number, got \"lots\"");
        assert!(validate_chances("1.5").is_err());
    }

    #[test]
    fn test_chances_must_be_positive() {
        assert_eq!(
            validate_chances("0"),
            Err(ValidationError::NotPositive { field: FieldKind::Chances })
        );
        assert_eq!(
            validate_chances("-3"),
            Err(ValidationError::NotPositive { field: FieldKind::Chances })
        );
    }

    #[test]
    fn test_chances_overflow() {
        let err = validate_chances("99_999_999_999_999_999_999").unwrap_err();
        assert!(matches!(err, ValidationError::InvalidInteger { .. }));
    }

    #[test]
    fn test_interval_rules() {
        assert_eq!(validate_interval(""), Ok(FieldValue::Empty));
        assert_eq!(validate_interval("0"), Ok(FieldValue::Integer(0)));
        assert_eq!(validate_interval("250"), Ok(FieldValue::Integer(250)));
        assert_eq!(
            validate_interval("-1"),
            Err(ValidationError::Negative { field: FieldKind::Interval })
        );
        assert!(matches!(
            validate_interval("1s"),
            Err(ValidationError::InvalidInteger { field: FieldKind::Interval, .. })
        ));
    }

    #[test]
    fn test_cost_rules() {
        assert_eq!(validate_cost(""), Ok(FieldValue::Empty));
        assert_eq!(validate_cost("2.5"), Ok(FieldValue::Real(2.5)));
        assert_eq!(validate_cost("3"), Ok(FieldValue::Real(3.0)));
        assert!(matches!(
            validate_cost("abc"),
            Err(ValidationError::InvalidNumber { field: FieldKind::Cost, .. })
        ));
        assert_eq!(validate_cost("inf"), Err(ValidationError::NotFinite { field: FieldKind::Cost }));
        assert_eq!(validate_cost("-0.5"), Err(ValidationError::Negative { field: FieldKind::Cost }));
    }

    #[test]
    fn test_validator_table() {
        for kind in FieldKind::ALL {
            assert!((kind.validator())(kind.placeholder()).is_ok(), "{kind}");
        }
        assert_eq!(FieldKind::Interval.to_string(), "interval");
        assert_eq!(FieldKind::Cost.label(), "Cost");
    }
}
