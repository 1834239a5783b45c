//! Time-derived identifiers for cart lines.
//!
//! Cart item ids are milliseconds since the Unix epoch at the moment the item
//! was added, serialized as a bare JSON number. Ids already stored in a cart
//! keep their value forever; new ids are generated strictly greater than the
//! newest one so two items added within the same millisecond never collide.
//! Once the newest id is `i64::MAX` there is nothing greater, and the next id
//! is the highest free value at or below the clock.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// Identifier of a single cart line.
///
/// # Example
///
/// ```rust
/// use ruja_core::CartItemId;
///
/// let first = CartItemId::generate(&[]);
/// let second = CartItemId::generate(&[first]);
/// assert!(second > first);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CartItemId(i64);

impl CartItemId {
    /// Create an ID from a raw millisecond value.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the underlying i64 value.
    #[must_use]
    pub const fn as_i64(&self) -> i64 {
        self.0
    }

    /// Generate a fresh id from the current time, distinct from every id in
    /// `taken`.
    ///
    /// The result is `max(now_ms, newest + 1)`, so ids stay strictly
    /// increasing when the clock has not advanced or has stepped backwards.
    #[must_use]
    pub fn generate(taken: &[Self]) -> Self {
        Self::generate_at(chrono::Utc::now().timestamp_millis(), taken)
    }

    /// Generate an id as if the clock read `now_ms`.
    #[must_use]
    pub fn generate_at(now_ms: i64, taken: &[Self]) -> Self {
        match taken.iter().max() {
            Some(&Self(newest)) if newest >= now_ms => newest
                .checked_add(1)
                .map_or_else(|| Self::highest_free(now_ms, taken), Self),
            _ => Self(now_ms),
        }
    }

    /// Highest id at or below `start` that is not in `taken`.
    fn highest_free(start: i64, taken: &[Self]) -> Self {
        (i64::MIN..=start)
            .rev()
            .map(Self)
            .find(|id| !taken.contains(id))
            .unwrap_or(Self(start))
    }
}

impl fmt::Display for CartItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CartItemId {
    type Err = core::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<i64>().map(Self)
    }
}

impl From<i64> for CartItemId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<CartItemId> for i64 {
    fn from(id: CartItemId) -> Self {
        id.0
    }
}
