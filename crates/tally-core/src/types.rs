//! # Domain Types
//!
//! Core domain types used throughout Tally.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  Wire (as received)                 Domain (after conversion)          │
//! │  ──────────────────                 ─────────────────────────          │
//! │  ChargeRequest                                                          │
//! │  ├── invoice: Invoice ────────────► Invoice { total }                  │
//! │  └── payments: [PaymentRequest] ──► [Payment]                          │
//! │       { type, percentage?,            ├── Cash { amount }              │
//! │         amount? }                     ├── CouponPercentage { pct }     │
//! │                                       └── CouponAmount { amount }      │
//! │                                                                         │
//! │                          charge() ──► Receipt { total, deposit, change }│
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The wire record keeps the loose `{ type, percentage?, amount? }` shape
//! frontends send. Conversion into [`Payment`] settles which field wins, so
//! the charge calculation never looks at a type string.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use ts_rs::TS;

use crate::error::{ChargeError, CoreError, CoreResult};
use crate::money::{Money, Percentage};
use crate::validation::{
    validate_amount, validate_invoice_total, validate_payment_count, validate_percentage,
};

// =============================================================================
// Invoice
// =============================================================================

/// The bill being settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Invoice {
    /// Total amount owed, in minor units.
    pub total: Money,
}

impl Invoice {
    #[inline]
    pub const fn new(total: Money) -> Self {
        Invoice { total }
    }
}

// =============================================================================
// Payment
// =============================================================================

/// A single tender towards an invoice.
///
/// Coupons come in two shapes: a percentage of the invoice total, or a flat
/// amount. Both are applied before any cash.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Payment {
    /// Physical cash. The only tender that can produce change.
    Cash { amount: Money },

    /// Coupon worth `floor(total × percentage / 100)`.
    CouponPercentage { percentage: Percentage },

    /// Coupon worth a flat amount.
    CouponAmount { amount: Money },
}

impl Payment {
    #[inline]
    pub const fn cash(amount: Money) -> Self {
        Payment::Cash { amount }
    }

    #[inline]
    pub const fn coupon_percentage(percentage: Percentage) -> Self {
        Payment::CouponPercentage { percentage }
    }

    #[inline]
    pub const fn coupon_amount(amount: Money) -> Self {
        Payment::CouponAmount { amount }
    }

    #[inline]
    pub const fn is_cash(&self) -> bool {
        matches!(self, Payment::Cash { .. })
    }

    /// What this payment contributes to the deposit for a given total.
    pub fn value_against(&self, total: Money) -> Money {
        match self {
            Payment::Cash { amount } | Payment::CouponAmount { amount } => *amount,
            Payment::CouponPercentage { percentage } => total.percentage_floor(*percentage),
        }
    }
}

// =============================================================================
// Payment Kind
// =============================================================================

/// The `type` string of a wire payment, once recognised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentKind {
    Cash,
    Coupon,
}

impl PaymentKind {
    pub const CASH: &'static str = "CASH";
    pub const COUPON: &'static str = "COUPON";
}

impl FromStr for PaymentKind {
    type Err = ChargeError;

    /// Matching is exact: `"cash"` is an unknown type.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            PaymentKind::CASH => Ok(PaymentKind::Cash),
            PaymentKind::COUPON => Ok(PaymentKind::Coupon),
            other => Err(ChargeError::UnknownPaymentType {
                kind: other.to_string(),
            }),
        }
    }
}

// =============================================================================
// Payment Request (wire)
// =============================================================================

/// A payment as frontends send it.
///
/// ```json
/// { "type": "COUPON", "percentage": 10 }
/// { "type": "COUPON", "amount": 300 }
/// { "type": "CASH", "amount": 700 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PaymentRequest {
    #[serde(rename = "type")]
    pub kind: String,

    /// Coupon discount in percent (0-100). Wins over `amount` when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub percentage: Option<f64>,

    /// Flat amount in minor units. Absent means 0.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub amount: Option<i64>,
}

impl PaymentRequest {
    pub fn cash(amount: i64) -> Self {
        PaymentRequest {
            kind: PaymentKind::CASH.to_string(),
            percentage: None,
            amount: Some(amount),
        }
    }

    pub fn coupon_percentage(percentage: f64) -> Self {
        PaymentRequest {
            kind: PaymentKind::COUPON.to_string(),
            percentage: Some(percentage),
            amount: None,
        }
    }

    pub fn coupon_amount(amount: i64) -> Self {
        PaymentRequest {
            kind: PaymentKind::COUPON.to_string(),
            percentage: None,
            amount: Some(amount),
        }
    }

    /// Parses the `type` string.
    pub fn payment_kind(&self) -> Result<PaymentKind, ChargeError> {
        self.kind.parse()
    }

    fn amount_or_zero(&self) -> CoreResult<Money> {
        let amount = self.amount.unwrap_or(0);
        validate_amount(amount)?;
        Ok(Money::from_minor(amount))
    }
}

impl TryFrom<&PaymentRequest> for Payment {
    type Error = CoreError;

    fn try_from(request: &PaymentRequest) -> Result<Self, Self::Error> {
        match request.payment_kind()? {
            PaymentKind::Cash => Ok(Payment::cash(request.amount_or_zero()?)),
            PaymentKind::Coupon => match request.percentage {
                Some(percentage) => {
                    validate_percentage(percentage)?;
                    Ok(Payment::coupon_percentage(Percentage::from_percent(
                        percentage,
                    )))
                }
                None => Ok(Payment::coupon_amount(request.amount_or_zero()?)),
            },
        }
    }
}

impl TryFrom<PaymentRequest> for Payment {
    type Error = CoreError;

    fn try_from(request: PaymentRequest) -> Result<Self, Self::Error> {
        Payment::try_from(&request)
    }
}

// =============================================================================
// Charge Request (wire)
// =============================================================================

/// A complete charge as read from JSON.
///
/// ```json
/// {
///   "invoice": { "total": 1000 },
///   "payments": [
///     { "type": "COUPON", "amount": 300 },
///     { "type": "CASH", "amount": 700 }
///   ]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ChargeRequest {
    pub invoice: Invoice,

    #[serde(default)]
    pub payments: Vec<PaymentRequest>,
}

impl ChargeRequest {
    pub fn new(invoice: Invoice, payments: Vec<PaymentRequest>) -> Self {
        ChargeRequest { invoice, payments }
    }

    /// Converts the request into an invoice and typed payments.
    ///
    /// ## Ordering
    /// Every `type` string is checked before any other validation
    /// (payment count included), so an unknown type anywhere in the list
    /// is always reported as [`ChargeError::UnknownPaymentType`].
    pub fn into_parts(&self) -> CoreResult<(Invoice, Vec<Payment>)> {
        for request in &self.payments {
            request.payment_kind()?;
        }

        validate_payment_count(self.payments.len())?;
        validate_invoice_total(self.invoice.total)?;

        let payments = self
            .payments
            .iter()
            .map(Payment::try_from)
            .collect::<CoreResult<Vec<_>>>()?;

        Ok((self.invoice, payments))
    }
}

// =============================================================================
// Receipt
// =============================================================================

/// The outcome of a successful charge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Receipt {
    /// Invoice total.
    pub total: Money,

    /// Everything collected: coupons plus cash.
    pub deposit: Money,

    /// Returned to the payer. Always zero when no cash was tendered.
    pub change: Money,
}

// =============================================================================
// Unit Tests
// =============================================================================
