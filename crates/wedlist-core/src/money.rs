//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely, and
//! the normalizer for human-readable catalogue prices.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                         │
//! │                                                                     │
//! │  In floating point:                                                 │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                       │
//! │                                                                     │
//! │  OUR SOLUTION: Integer Pence                                        │
//! │    "12.50GBP" normalizes to 1250 pence, once, at the boundary.      │
//! │    The database, calculations and views all use pence.              │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use wedlist_core::money::Money;
//!
//! // Create from pence (preferred)
//! let price = Money::from_pence(4700); // £47.00
//!
//! // Or normalize a catalogue price string
//! let parsed = Money::parse("47.00GBP").unwrap();
//! assert_eq!(parsed, price);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::CoreError;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (pence).
///
/// ## Design Decisions
/// - **i64**: Plenty of headroom for a gift catalogue
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **`serde(transparent)`**: Serializes as the bare integer, which is
///   the stable external form of a price
///
/// This is a single-currency system: the currency code on a catalogue
/// price string is validated and then discarded.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from pence (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use wedlist_core::money::Money;
    ///
    /// let price = Money::from_pence(1250); // Represents £12.50
    /// assert_eq!(price.pence(), 1250);
    /// ```
    #[inline]
    pub const fn from_pence(pence: i64) -> Self {
        Money(pence)
    }

    /// Returns the value in pence.
    #[inline]
    pub const fn pence(&self) -> i64 {
        self.0
    }

    /// Returns the whole-pound portion.
    #[inline]
    pub const fn pounds(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the fractional pence portion (always 0-99).
    #[inline]
    pub const fn pence_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Normalizes a catalogue price string into pence.
    ///
    /// ## Accepted Form
    /// `<integer>.<two-digits><CURRENCY>` where CURRENCY is a non-empty
    /// run of ASCII letters, e.g. `"12.50GBP"` → 1250. The currency
    /// code is not retained (single-currency system).
    ///
    /// ## Errors
    /// `CoreError::InvalidPrice` for anything else - no whole part, a
    /// fractional part that is not exactly two digits, a missing or
    /// non-alphabetic currency suffix. This rejects early, before any
    /// entity is built from the description.
    ///
    /// ## Example
    /// ```rust
    /// use wedlist_core::money::Money;
    ///
    /// assert_eq!(Money::parse("12.50GBP").unwrap().pence(), 1250);
    /// assert_eq!(Money::parse("0.01GBP").unwrap().pence(), 1);
    /// assert!(Money::parse("12.5GBP").is_err());
    /// assert!(Money::parse("twelve").is_err());
    /// ```
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        let invalid = || CoreError::InvalidPrice {
            raw: raw.to_string(),
        };

        let (whole, rest) = raw.split_once('.').ok_or_else(invalid)?;

        // Fractional part is exactly two digits, then the currency code.
        if rest.len() < 2 || !rest.is_char_boundary(2) {
            return Err(invalid());
        }
        let (fraction, currency) = rest.split_at(2);

        if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        if !fraction.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        if currency.is_empty() || !currency.bytes().all(|b| b.is_ascii_alphabetic()) {
            return Err(invalid());
        }

        let pounds: i64 = whole.parse().map_err(|_| invalid())?;
        let pence: i64 = fraction.parse().map_err(|_| invalid())?;

        // A whole part near i64::MAX would wrap the pence conversion.
        pounds
            .checked_mul(100)
            .and_then(|p| p.checked_add(pence))
            .map(Money)
            .ok_or_else(invalid)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// ## Note
/// This is for debugging and log output. The external serialized form
/// of a price is the integer pence value.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}£{}.{:02}", sign, self.pounds().abs(), self.pence_part())
    }
}

impl From<i64> for Money {
    fn from(pence: i64) -> Self {
        Money(pence)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_pence() {
        let money = Money::from_pence(1250);
        assert_eq!(money.pence(), 1250);
        assert_eq!(money.pounds(), 12);
        assert_eq!(money.pence_part(), 50);
    }

    #[test]
    fn test_parse_catalogue_price() {
        assert_eq!(Money::parse("12.50GBP").unwrap().pence(), 1250);
        assert_eq!(Money::parse("0.01GBP").unwrap().pence(), 1);
        assert_eq!(Money::parse("100.00GBP").unwrap().pence(), 10000);
    }

    #[test]
    fn test_parse_rejects_malformed_input() {
        for raw in [
            "",
            "GBP",
            "12GBP",
            "12.5GBP",    // one fractional digit
            "12.50",      // no currency code
            "12.50GB P",  // non-alphabetic suffix
            "-12.50GBP",  // negative whole part
            "12,50GBP",   // wrong separator
            "a.bcGBP",    // non-numeric digits
        ] {
            let err = Money::parse(raw).unwrap_err();
            assert!(
                matches!(err, CoreError::InvalidPrice { .. }),
                "expected InvalidPrice for {raw:?}"
            );
        }
    }

    #[test]
    fn test_parse_rejects_values_beyond_i64_pence() {
        // Fits in i64 pounds but not in i64 pence.
        let err = Money::parse("92233720368547758.08GBP").unwrap_err();
        assert!(matches!(err, CoreError::InvalidPrice { .. }));

        let err = Money::parse("99999999999999999999.00GBP").unwrap_err();
        assert!(matches!(err, CoreError::InvalidPrice { .. }));

        // The largest representable pence value still parses.
        assert_eq!(
            Money::parse("92233720368547758.07GBP").unwrap().pence(),
            i64::MAX
        );
    }

    #[test]
    fn test_parse_keeps_currency_out_of_the_value() {
        // Single-currency system: the code is validated then dropped.
        assert_eq!(
            Money::parse("9.99GBP").unwrap(),
            Money::parse("9.99EUR").unwrap()
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_pence(1250)), "£12.50");
        assert_eq!(format!("{}", Money::from_pence(500)), "£5.00");
        assert_eq!(format!("{}", Money::from_pence(1)), "£0.01");
    }

    #[test]
    fn test_serializes_as_bare_integer() {
        let json = serde_json::to_string(&Money::from_pence(999)).unwrap();
        assert_eq!(json, "999");

        let back: Money = serde_json::from_str("999").unwrap();
        assert_eq!(back.pence(), 999);
    }
}
