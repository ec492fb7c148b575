//! Core identifier types.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// CARTON ID
// ============================================================================

/// Carton identifier, issued by a [`CartonFactory`](crate::CartonFactory).
///
/// Ids from one factory are strictly increasing in allocation order.
/// Clones of a carton share its id; nothing else does.
///
/// # Example
///
/// ```
/// use carton::CartonId;
///
/// let id = CartonId::from(7);
/// assert_eq!(id.as_u64(), 7);
/// assert_eq!(id.checked_next(), Some(CartonId::from(8)));
/// assert_eq!(CartonId::from(u64::MAX).checked_next(), None);
/// ```
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct CartonId(u64);

impl CartonId {
    #[inline]
    pub const fn as_u64(&self) -> u64 {
        self.0
    }

    /// The id directly after this one, or `None` at the top of the range.
    #[inline]
    pub const fn checked_next(&self) -> Option<Self> {
        match self.0.checked_add(1) {
            Some(next) => Some(Self(next)),
            None => None,
        }
    }
}

impl From<u64> for CartonId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl From<CartonId> for u64 {
    fn from(id: CartonId) -> Self {
        id.0
    }
}

impl fmt::Display for CartonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_ordering() {
        assert!(CartonId::from(1) < CartonId::from(2));
        assert_eq!(CartonId::default().as_u64(), 0);
    }

    #[test]
    fn test_checked_next_stops_at_max() {
        assert_eq!(CartonId::from(0).checked_next(), Some(CartonId::from(1)));
        assert_eq!(CartonId::from(u64::MAX).checked_next(), None);
    }

    #[test]
    fn test_id_display() {
        assert_eq!(CartonId::from(42).to_string(), "42");
    }

    #[test]
    fn test_id_serde_transparent() {
        let json = serde_json::to_string(&CartonId::from(5)).unwrap();
        assert_eq!(json, "5");
    }
}
