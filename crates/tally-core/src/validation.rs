//! # Validation Module
//!
//! Checks applied to wire values before they become domain types.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Deserialization (serde)                                      │
//! │  └── Shape: numbers are numbers, `type` is a string                    │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  └── Ranges: amounts ≥ 0, percentages 0..=100, payment count           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: charge()                                                     │
//! │  └── Business rules: OverCharge, Shortage                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::{MAX_AMOUNT, MAX_PAYMENTS};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates an invoice total.
///
/// ## Rules
/// - Must be non-negative (zero is a valid, already-settled bill)
pub fn validate_invoice_total(total: Money) -> ValidationResult<()> {
    if total.is_negative() {
        return Err(ValidationError::MustBeNonNegative {
            field: "invoice total".to_string(),
        });
    }

    Ok(())
}

/// Validates a payment amount in minor units.
///
/// ## Rules
/// - Must be non-negative (a zero cash payment is legal)
/// - Must not exceed [`MAX_AMOUNT`]
///
/// ## Example
/// ```rust
/// use tally_core::validation::validate_amount;
///
/// assert!(validate_amount(0).is_ok());
/// assert!(validate_amount(1000).is_ok());
/// assert!(validate_amount(-1).is_err());
/// ```
pub fn validate_amount(amount: i64) -> ValidationResult<()> {
    if amount < 0 {
        return Err(ValidationError::MustBeNonNegative {
            field: "amount".to_string(),
        });
    }

    if amount > MAX_AMOUNT {
        return Err(ValidationError::OutOfRange {
            field: "amount".to_string(),
            min: 0,
            max: MAX_AMOUNT,
        });
    }

    Ok(())
}

/// Decimal places a wire percentage may carry (basis-point precision).
pub const PERCENTAGE_DECIMALS: u32 = 2;

/// Slack for binary float noise such as `8.25 * 100 = 825.0000000000001`.
const PRECISION_EPSILON: f64 = 1e-6;

/// Validates a coupon percentage as written on the wire (`12.5` = 12.5%).
///
/// ## Rules
/// - Must be a finite number
/// - Must be between 0 and 100 inclusive
/// - At most two decimal places, so it converts to basis points exactly
pub fn validate_percentage(percentage: f64) -> ValidationResult<()> {
    if !percentage.is_finite() {
        return Err(ValidationError::InvalidNumber {
            field: "percentage".to_string(),
            value: percentage,
        });
    }

    if !(0.0..=100.0).contains(&percentage) {
        return Err(ValidationError::OutOfRange {
            field: "percentage".to_string(),
            min: 0,
            max: 100,
        });
    }

    let scaled = percentage * 10f64.powi(PERCENTAGE_DECIMALS as i32);
    if (scaled - scaled.round()).abs() > PRECISION_EPSILON {
        return Err(ValidationError::TooPrecise {
            field: "percentage".to_string(),
            max_decimals: PERCENTAGE_DECIMALS,
            value: percentage,
        });
    }

    Ok(())
}

// =============================================================================
// Collection Validators
// =============================================================================

/// Validates the number of payments in one request.
///
/// ## Rules
/// - Must not exceed [`MAX_PAYMENTS`]
///
/// An empty list is allowed here; it simply ends in `Shortage` for any
/// non-zero total.
pub fn validate_payment_count(count: usize) -> ValidationResult<()> {
    if count > MAX_PAYMENTS {
        return Err(ValidationError::OutOfRange {
            field: "payments".to_string(),
            min: 0,
            max: MAX_PAYMENTS as i64,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_invoice_total() {
        assert!(validate_invoice_total(Money::from_minor(0)).is_ok());
        assert!(validate_invoice_total(Money::from_minor(1000)).is_ok());
        assert!(validate_invoice_total(Money::from_minor(-1)).is_err());
    }

    #[test]
    fn test_validate_amount() {
        assert!(validate_amount(0).is_ok());
        assert!(validate_amount(MAX_AMOUNT).is_ok());

        assert!(matches!(
            validate_amount(-100),
            Err(ValidationError::MustBeNonNegative { .. })
        ));
        assert!(matches!(
            validate_amount(MAX_AMOUNT + 1),
            Err(ValidationError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_validate_percentage() {
        assert!(validate_percentage(0.0).is_ok());
        assert!(validate_percentage(12.5).is_ok());
        assert!(validate_percentage(100.0).is_ok());

        assert!(validate_percentage(-0.5).is_err());
        assert!(validate_percentage(100.01).is_err());
        assert!(matches!(
            validate_percentage(f64::NAN),
            Err(ValidationError::InvalidNumber { .. })
        ));
        assert!(validate_percentage(f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_percentage_precision() {
        assert!(validate_percentage(8.25).is_ok());
        assert!(validate_percentage(0.01).is_ok());
        assert!(validate_percentage(33.33).is_ok());

        assert!(matches!(
            validate_percentage(0.005),
            Err(ValidationError::TooPrecise { max_decimals: 2, .. })
        ));
        assert!(matches!(
            validate_percentage(33.333),
            Err(ValidationError::TooPrecise { .. })
        ));
    }

    #[test]
    fn test_validate_payment_count() {
        assert!(validate_payment_count(0).is_ok());
        assert!(validate_payment_count(MAX_PAYMENTS).is_ok());
        assert!(validate_payment_count(MAX_PAYMENTS + 1).is_err());
    }
}
