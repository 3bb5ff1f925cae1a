//! # tally-core: Pure Charge Logic for Tally
//!
//! This crate computes what a customer has deposited against an invoice and
//! how much change they get back. Everything here is a pure function with
//! zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Tally Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │               tally-cli (or any frontend)                       │   │
//! │  │    JSON request ──► ChargeRequest ──► Receipt / ErrorReport     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ tally-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │  charge   │  │ validation│  │   │
//! │  │   │  Payment  │  │   Money   │  │  charge() │  │   rules   │  │   │
//! │  │   │  Receipt  │  │Percentage │  │           │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO LOGGING • NO NETWORK • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Invoice, Payment, Receipt) and their wire forms
//! - [`money`] - Money and Percentage with integer arithmetic
//! - [`charge`] - The charge calculation
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation for wire values
//!
//! ## Example Usage
//!
//! ```rust
//! use tally_core::{charge, Invoice, Money, Payment, Percentage};
//!
//! let invoice = Invoice::new(Money::from_minor(1000));
//! let payments = [
//!     Payment::coupon_percentage(Percentage::from_percent(10.0)),
//!     Payment::cash(Money::from_minor(1000)),
//! ];
//!
//! let receipt = charge(&invoice, &payments).unwrap();
//! assert_eq!(receipt.deposit.minor(), 1100);
//! assert_eq!(receipt.change.minor(), 100);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod charge;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use charge::{charge, charge_request};
pub use error::{ChargeError, CoreError, CoreResult, ValidationError};
pub use money::{CurrencyFormat, Money, Percentage};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Largest single amount accepted from the wire, in minor units.
///
/// Keeps a realistic request far away from `i64` overflow even when every
/// payment carries the maximum.
pub const MAX_AMOUNT: i64 = 1_000_000_000_000;

/// Maximum payments allowed in a single charge request.
pub const MAX_PAYMENTS: usize = 100;
