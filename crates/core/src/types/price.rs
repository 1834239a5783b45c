//! Formatted price strings and decimal amounts.
//!
//! Catalog prices arrive as display strings such as `"RD$1,234.56"`. They are
//! stored verbatim in the cart and only turned into numbers when a total is
//! needed. Parsing is deliberately best-effort:
//!
//! 1. the first occurrence of the currency prefix is removed,
//! 2. the first occurrence of the thousands separator is removed,
//! 3. the longest leading decimal number is read and the rest is ignored.
//!
//! A string with no leading number is unparseable, and an unparseable price
//! makes the whole total unavailable (rendered as `NaN`).

use core::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

/// Default currency prefix (Dominican peso).
pub const DEFAULT_PREFIX: &str = "RD$";

/// Default thousands separator.
pub const DEFAULT_SEPARATOR: char = ',';

/// Errors that can occur when reading a price string.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    /// No number could be read after stripping prefix and separator.
    #[error("price is not a number: {0:?}")]
    NotANumber(String),
}

/// How prices are written in the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceFormat {
    /// Currency prefix, e.g. `RD$`.
    pub prefix: String,
    /// Thousands separator, e.g. `,`.
    pub separator: char,
}

impl Default for PriceFormat {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_owned(),
            separator: DEFAULT_SEPARATOR,
        }
    }
}

impl PriceFormat {
    /// Create a price format.
    #[must_use]
    pub fn new(prefix: impl Into<String>, separator: char) -> Self {
        Self {
            prefix: prefix.into(),
            separator,
        }
    }

    /// Read the numeric amount out of a formatted price.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::NotANumber`] if no leading number remains after
    /// removing one prefix and one separator.
    ///
    /// # Examples
    ///
    /// ```
    /// use ruja_core::PriceFormat;
    /// use rust_decimal::Decimal;
    ///
    /// let format = PriceFormat::default();
    /// assert_eq!(format.parse_amount("RD$1,234.56").unwrap(), Decimal::new(123_456, 2));
    /// assert!(format.parse_amount("Consultar").is_err());
    /// ```
    pub fn parse_amount(&self, price: &str) -> Result<Decimal, PriceError> {
        let stripped = if self.prefix.is_empty() {
            price.to_owned()
        } else {
            price.replacen(self.prefix.as_str(), "", 1)
        };
        let stripped = stripped.replacen(self.separator, "", 1);

        leading_decimal(&stripped).ok_or_else(|| PriceError::NotANumber(price.to_owned()))
    }

    /// Format a total with the currency prefix and two decimals.
    ///
    /// `None` (an unparseable price somewhere in the cart) renders as `NaN`.
    #[must_use]
    pub fn format_total(&self, total: Option<Decimal>) -> String {
        match total {
            Some(amount) => format!("{}{:.2}", self.prefix, round_cents(amount)),
            None => format!("{}NaN", self.prefix),
        }
    }
}

/// Round an amount to cents, half away from zero.
#[must_use]
pub fn round_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Read the longest leading decimal number: whitespace, sign, digits, fraction.
fn leading_decimal(input: &str) -> Option<Decimal> {
    let s = input.trim_start();
    let mut chars = s.char_indices().peekable();

    let mut negative = false;
    if let Some(&(_, c)) = chars.peek()
        && (c == '+' || c == '-')
    {
        negative = c == '-';
        chars.next();
    }

    let mut int_part = String::new();
    while let Some(&(_, c)) = chars.peek() {
        if !c.is_ascii_digit() {
            break;
        }
        int_part.push(c);
        chars.next();
    }

    let mut frac_part = String::new();
    if let Some(&(_, '.')) = chars.peek() {
        chars.next();
        while let Some(&(_, c)) = chars.peek() {
            if !c.is_ascii_digit() {
                break;
            }
            frac_part.push(c);
            chars.next();
        }
    }

    if int_part.is_empty() && frac_part.is_empty() {
        return None;
    }

    let mut normalized = String::with_capacity(int_part.len() + frac_part.len() + 3);
    if negative {
        normalized.push('-');
    }
    if int_part.is_empty() {
        normalized.push('0');
    } else {
        normalized.push_str(&int_part);
    }
    if !frac_part.is_empty() {
        normalized.push('.');
        normalized.push_str(&frac_part);
    }

    Decimal::from_str(&normalized).ok()
}
