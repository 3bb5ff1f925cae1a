//! # Charge Calculation
//!
//! Settles an invoice against an ordered list of payments.
//!
//! ## Processing Order
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       charge(invoice, payments)                         │
//! │                                                                         │
//! │  payments ──┬──► coupons (in order) ──► deposit += value               │
//! │             │                                                           │
//! │             └──► cash (in order)    ──► deposit ≥ total? → OverCharge  │
//! │                                         else deposit += amount         │
//! │                                                                         │
//! │  total > deposit?            → Shortage                                │
//! │  no cash tendered?           → change = 0                              │
//! │  otherwise                   → change = deposit − total                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Coupons always go first regardless of where they appear in the list, so
//! `[CASH 700, COUPON 300]` and `[COUPON 300, CASH 700]` settle the same way.

use crate::error::{ChargeError, CoreResult};
use crate::money::Money;
use crate::types::{ChargeRequest, Invoice, Payment, Receipt};

/// Computes the receipt for `invoice` paid with `payments`.
///
/// ## Errors
/// - [`ChargeError::OverCharge`] when a cash payment arrives while the
///   deposit already covers the total. The check runs before the cash is
///   added, so one cash payment may overshoot; a second one may not.
/// - [`ChargeError::Shortage`] when everything together is less than the
///   total.
///
/// ## Example
/// ```rust
/// use tally_core::{charge, ChargeError, Invoice, Money, Payment};
///
/// let invoice = Invoice::new(Money::from_minor(1000));
///
/// let receipt = charge(&invoice, &[Payment::cash(Money::from_minor(1500))]).unwrap();
/// assert_eq!(receipt.change.minor(), 500);
///
/// let err = charge(&invoice, &[Payment::cash(Money::from_minor(500))]).unwrap_err();
/// assert!(matches!(err, ChargeError::Shortage { .. }));
/// ```
pub fn charge(invoice: &Invoice, payments: &[Payment]) -> Result<Receipt, ChargeError> {
    let total = invoice.total;
    let (cash, coupons): (Vec<&Payment>, Vec<&Payment>) =
        payments.iter().partition(|payment| payment.is_cash());

    let mut deposit = coupons
        .iter()
        .fold(Money::zero(), |deposit, coupon| {
            deposit.saturating_add(coupon.value_against(total))
        });

    for payment in &cash {
        if deposit >= total {
            return Err(ChargeError::OverCharge { total, deposit });
        }
        deposit = deposit.saturating_add(payment.value_against(total));
    }

    if total > deposit {
        return Err(ChargeError::Shortage { total, deposit });
    }

    // Coupon overpayment is never handed back.
    let change = if cash.is_empty() {
        Money::zero()
    } else {
        deposit - total
    };

    Ok(Receipt {
        total,
        deposit,
        change,
    })
}

/// Converts a wire request and charges it.
///
/// Unknown payment types and malformed numbers surface as
/// [`CoreError`](crate::CoreError) before the calculation starts.
pub fn charge_request(request: &ChargeRequest) -> CoreResult<Receipt> {
    let (invoice, payments) = request.into_parts()?;
    Ok(charge(&invoice, &payments)?)
}

// =============================================================================
// Unit Tests
// =============================================================================
