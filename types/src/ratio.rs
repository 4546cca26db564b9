//! Airdrop decay ratio.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DripError;

/// The decay factor applied to an airdrop allocation over time.
///
/// Kept as an exact fraction; displayed as a percentage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ratio {
    pub numer: u64,
    pub denom: u64,
}

impl Ratio {
    /// Create a ratio. The denominator must be non-zero.
    pub fn new(numer: u64, denom: u64) -> Result<Self, DripError> {
        if denom == 0 {
            return Err(DripError::ZeroDenominator);
        }
        Ok(Self { numer, denom })
    }

    /// The full, undecayed ratio (100%).
    pub fn one() -> Self {
        Self { numer: 1, denom: 1 }
    }

    /// Percentage value in basis points (hundredths of a percent), truncated.
    pub fn basis_points(&self) -> u128 {
        self.numer as u128 * 10_000 / self.denom as u128
    }
}

impl fmt::Display for Ratio {
    /// Percentage with up to two decimals, trailing zeros trimmed:
    /// 3/4 → "75%", 1/8 → "12.5%", 1/3 → "33.33%".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bp = self.basis_points();
        let whole = bp / 100;
        let hundredths = (bp % 100) as u8;
        if hundredths == 0 {
            write!(f, "{whole}%")
        } else if hundredths % 10 == 0 {
            write!(f, "{whole}.{}%", hundredths / 10)
        } else {
            write!(f, "{whole}.{hundredths:02}%")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_denominator() {
        assert!(Ratio::new(1, 0).is_err());
    }

    #[test]
    fn whole_percentages() {
        assert_eq!(Ratio::new(3, 4).unwrap().to_string(), "75%");
        assert_eq!(Ratio::one().to_string(), "100%");
        assert_eq!(Ratio::new(0, 5).unwrap().to_string(), "0%");
    }

    #[test]
    fn tenth_percentages_trim_trailing_zero() {
        assert_eq!(Ratio::new(1, 8).unwrap().to_string(), "12.5%");
    }

    #[test]
    fn hundredth_percentages() {
        // 1/3 = 3333 bp, truncated
        assert_eq!(Ratio::new(1, 3).unwrap().to_string(), "33.33%");
    }

    #[test]
    fn over_unity_ratio() {
        assert_eq!(Ratio::new(5, 4).unwrap().to_string(), "125%");
    }

    #[test]
    fn basis_points_truncate() {
        assert_eq!(Ratio::new(2, 3).unwrap().basis_points(), 6666);
    }
}
