//! Amount parsing and currency formatting
//!
//! Amounts are plain `f64` values kept at full precision; rounding to two
//! decimals only ever happens when a value is turned into display text.

use std::fmt;

/// A monetary value for display purposes
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Money(f64);

impl Money {
    /// Wrap a raw value
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0.0)
    }

    /// Get the raw value
    pub const fn value(&self) -> f64 {
        self.0
    }

    /// Check if the amount is negative (after rounding to cents)
    pub fn is_negative(&self) -> bool {
        self.0 <= -0.005
    }

    /// Format with a currency symbol, e.g. `$10.50` or `-$10.50`
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.is_negative() {
            format!("-{}{:.2}", symbol, self.0.abs())
        } else {
            format!("{}{:.2}", symbol, self.0.abs())
        }
    }

    /// Format as an outflow, e.g. `-$4.50`, regardless of sign
    pub fn format_outflow(&self, symbol: &str) -> String {
        format!("-{}{:.2}", symbol, self.0.abs())
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_with_symbol("$"))
    }
}

impl From<f64> for Money {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

/// Parse user-entered amount text
///
/// Accepts formats: "10.50", "$10.50", "10", "+5", "-3". Returns `None` for
/// text that is not a finite number; range checks belong to the caller.
pub fn parse_amount(input: &str) -> Option<f64> {
    let s = input.trim();
    let (negative, s) = if let Some(rest) = s.strip_prefix('-') {
        (true, rest)
    } else if let Some(rest) = s.strip_prefix('+') {
        (false, rest)
    } else {
        (false, s)
    };
    let s = s.strip_prefix('$').unwrap_or(s).trim();

    if s.is_empty() || s.starts_with(['+', '-']) {
        return None;
    }

    let value: f64 = s.parse().ok()?;
    if !value.is_finite() {
        return None;
    }

    Some(if negative { -value } else { value })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Money::new(10.5).to_string(), "$10.50");
        assert_eq!(Money::zero().to_string(), "$0.00");
        assert_eq!(Money::new(-10.5).to_string(), "-$10.50");
        assert_eq!(Money::new(0.05).to_string(), "$0.05");
    }

    #[test]
    fn test_tiny_negative_is_not_shown_negative() {
        assert_eq!(Money::new(-0.001).to_string(), "$0.00");
        assert!(!Money::new(-0.001).is_negative());
    }

    #[test]
    fn test_outflow_format() {
        assert_eq!(Money::new(4.5).format_outflow("$"), "-$4.50");
        assert_eq!(Money::new(12.0).format_outflow("€"), "-€12.00");
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("10.50"), Some(10.5));
        assert_eq!(parse_amount(" $10.50 "), Some(10.5));
        assert_eq!(parse_amount("-5"), Some(-5.0));
        assert_eq!(parse_amount("+5"), Some(5.0));
        assert_eq!(parse_amount("+$5"), Some(5.0));
        assert_eq!(parse_amount("0.125"), Some(0.125));
        assert_eq!(parse_amount("1e3"), Some(1000.0));
    }

    #[test]
    fn test_parse_amount_rejects_garbage() {
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("   "), None);
        assert_eq!(parse_amount("abc"), None);
        assert_eq!(parse_amount("NaN"), None);
        assert_eq!(parse_amount("inf"), None);
        assert_eq!(parse_amount("--5"), None);
        assert_eq!(parse_amount("-+5"), None);
        assert_eq!(parse_amount("++5"), None);
        assert_eq!(parse_amount("+-5"), None);
        assert_eq!(parse_amount("$"), None);
    }
}
