//! Exact rational arithmetic for the percentage bounds.
//!
//! The split bounds compare integer net positions against floored products
//! of a total with a fraction. Floating point is never acceptable here: the
//! verdict must be bit-for-bit reproducible on every evaluation, so all
//! intermediate products stay exact (numerator, denominator) pairs and the
//! only lossy step is an explicit floor.

use crate::params::FULL_SHARE_BPS;

/// An exact fraction. Invariant: `den > 0` (sign lives in the numerator).
///
/// Values are kept unreduced; every consumer either multiplies exactly or
/// floors, and neither cares about canonical form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rational {
    num: i128,
    den: i128,
}

impl Rational {
    /// Build a fraction from numerator and denominator.
    ///
    /// # Panics
    /// Panics if `den == 0`. Callers construct rationals only from validated
    /// configuration (denominator 10000) or from other rationals, so a zero
    /// denominator is a programmer error.
    pub fn new(num: i128, den: i128) -> Self {
        assert!(den != 0, "rational denominator must be non-zero");
        if den < 0 {
            Self { num: -num, den: -den }
        } else {
            Self { num, den }
        }
    }

    /// The fraction `bps / 10000`.
    pub fn basis_points(bps: u32) -> Self {
        Self::new(i128::from(bps), i128::from(FULL_SHARE_BPS))
    }

    /// `1 - self`, exactly.
    pub fn complement(self) -> Self {
        Self {
            num: self.den - self.num,
            den: self.den,
        }
    }

    /// Exact product with an integer.
    pub fn mul_int(self, n: i128) -> Self {
        Self {
            num: self.num * n,
            den: self.den,
        }
    }

    /// Round toward negative infinity.
    pub fn floor(self) -> i128 {
        // den > 0, so div_euclid rounds toward -inf.
        self.num.div_euclid(self.den)
    }

    pub fn numerator(self) -> i128 {
        self.num
    }

    pub fn denominator(self) -> i128 {
        self.den
    }
}
