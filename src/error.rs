//! Error types.
//!
//! The only error the core produces is a [`ValidationError`] from the
//! configuration form. It is shown inline and never leaves the form.

use crate::form::FieldKind;
use std::num::{ParseFloatError, ParseIntError};
use thiserror::Error;

/// A form field's text failed its validation rule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The chances field was left empty.
    #[error("chances number is required")]
    ChancesRequired,

    /// A field expecting a whole number got something else.
    #[error("{field} must be a whole number, got {value:?}")]
    InvalidInteger {
        /// The offending field.
        field: FieldKind,
        /// The text as entered.
        value: String,
        /// Why parsing failed.
        #[source]
        source: ParseIntError,
    },

    /// A field expecting a decimal number got something else.
    #[error("{field} must be a number, got {value:?}")]
    InvalidNumber {
        /// The offending field.
        field: FieldKind,
        /// The text as entered.
        value: String,
        /// Why parsing failed.
        #[source]
        source: ParseFloatError,
    },

    /// Zero or negative where only positive values make sense.
    #[error("{field} must be greater than zero")]
    NotPositive {
        /// The offending field.
        field: FieldKind,
    },

    /// A negative value.
    #[error("{field} cannot be negative")]
    Negative {
        /// The offending field.
        field: FieldKind,
    },

    /// Infinity or NaN.
    #[error("{field} must be a finite number")]
    NotFinite {
        /// The offending field.
        field: FieldKind,
    },
}

impl ValidationError {
    /// The field the error refers to.
    pub const fn field(&self) -> FieldKind {
        match self {
            Self::ChancesRequired => FieldKind::Chances,
            Self::InvalidInteger { field, .. }
            | Self::InvalidNumber { field, .. }
            | Self::NotPositive { field }
            | Self::Negative { field }
            | Self::NotFinite { field } => *field,
        }
    }
}
