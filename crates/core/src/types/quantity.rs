//! Line quantity type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when constructing a [`Quantity`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum QuantityError {
    /// Quantities start at one; removal is a separate operation.
    #[error("quantity must be at least 1")]
    Zero,
}

/// Number of units of a cart line.
///
/// ## Constraints
///
/// - Always at least 1
/// - Adjusting by a delta clamps at 1 instead of going to zero
///
/// ## Examples
///
/// ```
/// use ruja_core::Quantity;
///
/// let qty = Quantity::ONE.saturating_add_delta(4);
/// assert_eq!(qty.get(), 5);
/// assert_eq!(qty.saturating_add_delta(-100), Quantity::ONE);
/// assert!(Quantity::try_from(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Quantity(u32);

impl Quantity {
    /// A single unit.
    pub const ONE: Self = Self(1);

    /// Get the underlying count.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Returns `max(1, self + delta)`, saturating at `u32::MAX`.
    #[must_use]
    pub fn saturating_add_delta(self, delta: i64) -> Self {
        let next = i64::from(self.0).saturating_add(delta).max(1);
        Self(u32::try_from(next).unwrap_or(u32::MAX))
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Self::ONE
    }
}

impl TryFrom<u32> for Quantity {
    type Error = QuantityError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        if value == 0 {
            return Err(QuantityError::Zero);
        }
        Ok(Self(value))
    }
}

impl From<Quantity> for u32 {
    fn from(quantity: Quantity) -> Self {
        quantity.0
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_try_from_zero() {
        assert_eq!(Quantity::try_from(0), Err(QuantityError::Zero));
    }

    #[test]
    fn test_try_from_positive() {
        assert_eq!(Quantity::try_from(3).unwrap().get(), 3);
    }

    #[test]
    fn test_delta_clamps_at_one() {
        let qty = Quantity::try_from(2).unwrap();
        assert_eq!(qty.saturating_add_delta(-1).get(), 1);
        assert_eq!(qty.saturating_add_delta(-2).get(), 1);
        assert_eq!(qty.saturating_add_delta(-1_000_000).get(), 1);
        assert_eq!(qty.saturating_add_delta(i64::MIN).get(), 1);
    }

    #[test]
    fn test_delta_saturates_high() {
        let qty = Quantity::try_from(u32::MAX - 1).unwrap();
        assert_eq!(qty.saturating_add_delta(i64::MAX).get(), u32::MAX);
    }

    #[test]
    fn test_serde_rejects_zero() {
        assert!(serde_json::from_str::<Quantity>("0").is_err());
        let qty: Quantity = serde_json::from_str("7").unwrap();
        assert_eq!(qty.get(), 7);
        assert_eq!(serde_json::to_string(&qty).unwrap(), "7");
    }
}
