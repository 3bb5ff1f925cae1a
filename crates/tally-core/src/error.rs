//! # Error Types
//!
//! Domain-specific error types for tally-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  tally-core errors (this file)                                         │
//! │  ├── ChargeError      - The three ways a charge can be refused         │
//! │  ├── ValidationError  - Malformed wire values (amounts, percentages)   │
//! │  └── CoreError        - Either of the above                            │
//! │                                                                         │
//! │  tally-cli errors (separate crate)                                     │
//! │  └── CliError         - I/O, JSON, config + CoreError                  │
//! │                                                                         │
//! │  Flow: ChargeError/ValidationError → CoreError → CliError → ErrorReport │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (type string, totals)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message

use thiserror::Error;

use crate::money::Money;

// =============================================================================
// Charge Error
// =============================================================================

/// A charge was refused.
///
/// The three kinds are mutually exclusive: the calculation stops at the
/// first one it detects and never returns a partial receipt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChargeError {
    /// A payment type other than `CASH` or `COUPON` was supplied.
    #[error("Unknown payment type: {kind:?}")]
    UnknownPaymentType { kind: String },

    /// A cash payment was offered after the bill was already covered.
    ///
    /// ## User Workflow
    /// ```text
    /// Invoice total: 1000
    ///      │
    ///      ▼
    /// CASH 1000 → deposit 1000 (covered)
    ///      │
    ///      ▼
    /// CASH 100  → OverCharge { total: 1000, deposit: 1000 }
    /// ```
    #[error("Bill of {total} is already covered by a deposit of {deposit}, cash not accepted")]
    OverCharge { total: Money, deposit: Money },

    /// All payments together fall short of the invoice total.
    #[error("Deposit of {deposit} does not cover the bill of {total}")]
    Shortage { total: Money, deposit: Money },
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These occur while turning wire values into domain types, before the
/// charge calculation runs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Value carries more decimal places than can be represented exactly.
    #[error("{field} allows at most {max_decimals} decimal places: {value}")]
    TooPrecise {
        field: String,
        max_decimals: u32,
        value: f64,
    },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    MustBeNonNegative { field: String },

    /// Value is not a usable number (NaN, infinite).
    #[error("{field} is not a valid number: {value}")]
    InvalidNumber { field: String, value: f64 },
}

// =============================================================================
// Core Error
// =============================================================================

/// Any error tally-core can produce.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    #[error(transparent)]
    Charge(#[from] ChargeError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_charge_error_messages() {
        let err = ChargeError::UnknownPaymentType {
            kind: "GIFT".to_string(),
        };
        assert_eq!(err.to_string(), "Unknown payment type: \"GIFT\"");

        let err = ChargeError::Shortage {
            total: Money::from_minor(1000),
            deposit: Money::from_minor(500),
        };
        assert_eq!(
            err.to_string(),
            "Deposit of 500 does not cover the bill of 1000"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::OutOfRange {
            field: "percentage".to_string(),
            min: 0,
            max: 100,
        };
        assert_eq!(err.to_string(), "percentage must be between 0 and 100");

        let err = ValidationError::MustBeNonNegative {
            field: "amount".to_string(),
        };
        assert_eq!(err.to_string(), "amount must not be negative");

        let err = ValidationError::TooPrecise {
            field: "percentage".to_string(),
            max_decimals: 2,
            value: 0.005,
        };
        assert_eq!(
            err.to_string(),
            "percentage allows at most 2 decimal places: 0.005"
        );
    }

    #[test]
    fn test_conversions_into_core_error() {
        let core_err: CoreError = ChargeError::UnknownPaymentType {
            kind: "FOO".to_string(),
        }
        .into();
        assert!(matches!(
            core_err,
            CoreError::Charge(ChargeError::UnknownPaymentType { .. })
        ));
        // Charge errors read the same when wrapped
        assert_eq!(core_err.to_string(), "Unknown payment type: \"FOO\"");

        let core_err: CoreError = ValidationError::TooPrecise {
            field: "percentage".to_string(),
            max_decimals: 2,
            value: 0.005,
        }
        .into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
