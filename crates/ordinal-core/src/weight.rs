//! Sort key of numeric positions.

use std::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
};

/// A finite numeric position such as `5`, `-3` or `17.5`.
///
/// Weights are totally ordered by value. `-0` is stored as `0`, so equal
/// values compare, hash and display the same.
///
/// # Examples
///
/// ```
/// use ordinal_core::weight::Weight;
///
/// let half = Weight::new(17.5).unwrap();
/// assert!(Weight::from(17) < half);
/// assert_eq!(half.to_string(), "17.5");
///
/// assert_eq!(Weight::new(f64::INFINITY), None);
/// assert_eq!(Weight::new(-0.0), Some(Weight::ZERO));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Weight(f64);

impl Weight {
    /// Weight of items without a directive.
    pub const ZERO: Weight = Weight(0.0);

    /// Returns `None` for NaN and infinities.
    pub fn new(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }
        // Adding 0.0 turns -0.0 into 0.0.
        Some(Self(value + 0.0))
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl From<i32> for Weight {
    fn from(value: i32) -> Self {
        Self(f64::from(value))
    }
}

impl PartialEq for Weight {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Weight {}

impl PartialOrd for Weight {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Weight {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl Hash for Weight {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weight(value: f64) -> Weight {
        Weight::new(value).unwrap()
    }

    #[test]
    fn test_fractions_order_between_integers() {
        assert!(Weight::from(17) < weight(17.5));
        assert!(weight(17.5) < Weight::from(18));
        assert!(weight(-0.5) < Weight::ZERO);
        assert!(Weight::ZERO < weight(0.5));
    }

    #[test]
    fn test_negative_zero_is_zero() {
        let negative = weight(-0.0);

        assert_eq!(negative, Weight::ZERO);
        assert_eq!(negative.value().to_bits(), 0.0f64.to_bits());
        assert_eq!(negative.to_string(), "0");
    }

    #[test]
    fn test_non_finite_is_rejected() {
        assert_eq!(Weight::new(f64::NAN), None);
        assert_eq!(Weight::new(f64::NEG_INFINITY), None);
    }

    #[test]
    fn test_display_never_uses_exponent() {
        assert_eq!(weight(1e20).to_string(), "100000000000000000000");
        assert_eq!(Weight::from(-4).to_string(), "-4");
    }
}
