//! # Money Module
//!
//! Provides the `Money` and `Percentage` types for handling monetary values
//! safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  With floating point:                                                   │
//! │    100 × (29 / 100) = 28.999999999999996 → floor → 28  ❌ WRONG!        │
//! │                                                                         │
//! │  OUR SOLUTION: Integer minor units + basis points                       │
//! │    100 × 2900 bps / 10000 = 29                         ✅               │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use tally_core::money::{Money, Percentage};
//!
//! let total = Money::from_minor(1000);
//! let coupon = total.percentage_floor(Percentage::from_percent(15.0));
//! assert_eq!(coupon.minor(), 150);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Sub;
use ts_rs::TS;

/// Basis points in 100%.
const BPS_PER_WHOLE: i128 = 10_000;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (yen, cents, ...).
///
/// ## Design Decisions
/// - **i64 (signed)**: change is computed as a difference
/// - **Single field tuple struct**: serializes as a bare JSON number
/// - **Currency agnostic**: the unit is whatever the caller's invoice uses
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from minor units.
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::money::Money;
    ///
    /// let total = Money::from_minor(1000);
    /// assert_eq!(total.minor(), 1000);
    /// ```
    #[inline]
    pub const fn from_minor(minor: i64) -> Self {
        Money(minor)
    }

    /// Returns the value in minor units.
    #[inline]
    pub const fn minor(&self) -> i64 {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Adds two values, clamping at the `i64` bounds instead of overflowing.
    #[inline]
    pub const fn saturating_add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }

    /// Returns `floor(self × percentage / 100)`.
    ///
    /// ## Implementation
    /// Integer math in basis points with an `i128` intermediate:
    /// `(minor × bps).div_euclid(10000)`. `div_euclid` rounds toward
    /// negative infinity, so the result is a true floor for any sign.
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::money::{Money, Percentage};
    ///
    /// let total = Money::from_minor(999);
    /// // 999 × 50% = 499.5 → 499
    /// let half = total.percentage_floor(Percentage::from_percent(50.0));
    /// assert_eq!(half.minor(), 499);
    /// ```
    pub fn percentage_floor(&self, percentage: Percentage) -> Money {
        let scaled = (self.0 as i128 * percentage.bps() as i128).div_euclid(BPS_PER_WHOLE);
        let clamped = scaled.clamp(i64::MIN as i128, i64::MAX as i128);
        Money(clamped as i64)
    }

    /// Formats the value for display with a currency symbol.
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::money::{CurrencyFormat, Money};
    ///
    /// let yen = CurrencyFormat::new("¥", 0);
    /// assert_eq!(Money::from_minor(1234567).format(&yen), "¥1,234,567");
    ///
    /// let usd = CurrencyFormat::new("$", 2);
    /// assert_eq!(Money::from_minor(-1099).format(&usd), "-$10.99");
    /// ```
    pub fn format(&self, currency: &CurrencyFormat) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        let magnitude = self.0.unsigned_abs();
        let decimals = currency.decimals.min(CurrencyFormat::MAX_DECIMALS);
        let divisor = 10u64.pow(decimals as u32);
        let major = group_thousands(magnitude / divisor);

        if decimals == 0 {
            format!("{}{}{}", sign, currency.symbol, major)
        } else {
            format!(
                "{}{}{}.{:0width$}",
                sign,
                currency.symbol,
                major,
                magnitude % divisor,
                width = decimals as usize
            )
        }
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Plain minor units, used in error messages and logs.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

// =============================================================================
// Percentage
// =============================================================================

/// A percentage represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000, so `12.5%` is exactly `1250` and
/// percentage math stays in integers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Percentage(u32);

impl Percentage {
    /// 100%.
    pub const FULL: Percentage = Percentage(10_000);

    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        Percentage(bps)
    }

    /// Creates a percentage from a value like `12.5`, rounded to the
    /// nearest basis point and clamped to `0..=u32::MAX` bps.
    ///
    /// Wire values go through
    /// [`validate_percentage`](crate::validation::validate_percentage) first,
    /// which only admits values that are already exact in basis points.
    pub fn from_percent(pct: f64) -> Self {
        Percentage((pct.max(0.0) * 100.0).round() as u32)
    }

    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the value as a percentage (for display only).
    #[inline]
    pub fn percent(&self) -> f64 {
        self.0 as f64 / 100.0
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.percent())
    }
}

// =============================================================================
// Currency Format
// =============================================================================

/// Display settings for money. Never used in arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyFormat {
    /// Symbol printed before the amount (e.g. "¥", "$").
    pub symbol: String,

    /// Minor-unit digits (0 for yen, 2 for dollars).
    pub decimals: u8,
}

impl CurrencyFormat {
    /// Most minor-unit digits `format` honours; `10^18` still fits a `u64`.
    pub const MAX_DECIMALS: u8 = 18;

    pub fn new(symbol: impl Into<String>, decimals: u8) -> Self {
        CurrencyFormat {
            symbol: symbol.into(),
            decimals,
        }
    }
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        CurrencyFormat::new("¥", 0)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_minor() {
        let money = Money::from_minor(1099);
        assert_eq!(money.minor(), 1099);
        assert!(!money.is_zero());
        assert!(!money.is_negative());
        assert!(Money::zero().is_zero());
    }

    #[test]
    fn test_subtraction() {
        let a = Money::from_minor(1000);
        let b = Money::from_minor(300);

        assert_eq!((a - b).minor(), 700);
        assert_eq!((b - a).minor(), -700);
    }

    #[test]
    fn test_saturating_add() {
        let big = Money::from_minor(i64::MAX - 1);
        assert_eq!(big.saturating_add(Money::from_minor(10)).minor(), i64::MAX);
    }

    #[test]
    fn test_percentage_floor_whole_percentages() {
        let total = Money::from_minor(1000);
        assert_eq!(total.percentage_floor(Percentage::FULL).minor(), 1000);
        assert_eq!(total.percentage_floor(Percentage::from_percent(0.0)).minor(), 0);
        assert_eq!(total.percentage_floor(Percentage::from_percent(33.0)).minor(), 330);
    }

    #[test]
    fn test_percentage_floor_rounds_down() {
        // 333 × 10% = 33.3 → 33
        let total = Money::from_minor(333);
        assert_eq!(total.percentage_floor(Percentage::from_percent(10.0)).minor(), 33);

        // 100 × 29% is exactly 29 in integer math
        let total = Money::from_minor(100);
        assert_eq!(total.percentage_floor(Percentage::from_percent(29.0)).minor(), 29);
    }

    #[test]
    fn test_percentage_floor_fractional_percent() {
        // 1000 × 12.5% = 125
        let total = Money::from_minor(1000);
        assert_eq!(total.percentage_floor(Percentage::from_percent(12.5)).minor(), 125);
    }

    #[test]
    fn test_percentage_floor_no_overflow() {
        let total = Money::from_minor(i64::MAX);
        assert_eq!(total.percentage_floor(Percentage::FULL).minor(), i64::MAX);
    }

    #[test]
    fn test_percentage_from_percent() {
        assert_eq!(Percentage::from_percent(8.25).bps(), 825);
        assert_eq!(Percentage::from_percent(100.0), Percentage::FULL);
        assert_eq!(Percentage::from_percent(-5.0).bps(), 0);
        assert_eq!(Percentage::from_bps(1250).to_string(), "12.5%");
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_minor(1000).to_string(), "1000");
        assert_eq!(Money::from_minor(-42).to_string(), "-42");
    }

    #[test]
    fn test_format() {
        let yen = CurrencyFormat::default();
        assert_eq!(Money::from_minor(0).format(&yen), "¥0");
        assert_eq!(Money::from_minor(999).format(&yen), "¥999");
        assert_eq!(Money::from_minor(1000).format(&yen), "¥1,000");
        assert_eq!(Money::from_minor(-2500).format(&yen), "-¥2,500");

        let usd = CurrencyFormat::new("$", 2);
        assert_eq!(Money::from_minor(500).format(&usd), "$5.00");
        assert_eq!(Money::from_minor(123456789).format(&usd), "$1,234,567.89");
        assert_eq!(Money::from_minor(5).format(&usd), "$0.05");
    }

    #[test]
    fn test_format_caps_decimals() {
        let wide = CurrencyFormat::new("", 30);
        let capped = CurrencyFormat::new("", CurrencyFormat::MAX_DECIMALS);
        assert_eq!(
            Money::from_minor(i64::MAX).format(&wide),
            Money::from_minor(i64::MAX).format(&capped)
        );
        assert_eq!(Money::from_minor(1).format(&wide), "0.000000000000000001");
    }

    #[test]
    fn test_serializes_as_bare_number() {
        let json = serde_json::to_string(&Money::from_minor(1000)).unwrap();
        assert_eq!(json, "1000");

        let back: Money = serde_json::from_str("700").unwrap();
        assert_eq!(back, Money::from_minor(700));
    }
}
