//! Prime-power factorizations backed by arbitrary-precision arithmetic.
//!
//! This module provides:
//! - The `Factorization` struct for validated prime→exponent tables
//! - Reconstruction of the factored value as a `BigUint` product
//! - Trial-division factoring for `u64`-sized inputs

use std::fmt;

use num_bigint::BigUint;
use num_traits::One;

use crate::utils::is_prime;

/// Error type for factorization validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FactorizationError {
    /// A listed factor is not a prime number.
    NotPrime { factor: u64 },
    /// Primes are not listed in strictly ascending order.
    OutOfOrder { prev: u64, next: u64 },
    /// An exponent of zero would silently drop its prime.
    ZeroExponent { prime: u64 },
}

impl fmt::Display for FactorizationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FactorizationError::NotPrime { factor } => {
                write!(f, "factor {} is not prime", factor)
            }
            FactorizationError::OutOfOrder { prev, next } => {
                write!(f, "primes not strictly ascending: {} then {}", prev, next)
            }
            FactorizationError::ZeroExponent { prime } => {
                write!(f, "zero exponent for prime {}", prime)
            }
        }
    }
}

impl std::error::Error for FactorizationError {}

/// A prime-power decomposition `p₁^e₁ · p₂^e₂ · … · pₖ^eₖ`.
///
/// Entries are kept in strictly ascending prime order with exponents ≥ 1,
/// so two factorizations compare equal exactly when they describe the same
/// integer. The empty table describes 1, the order of the trivial group.
///
/// Using `Factorization` instead of a raw pair list prevents accidental use
/// of composite "primes" or shadowed duplicate entries.
///
/// # Example
///
/// ```
/// use monstrum::Factorization;
///
/// // |M11| = 7920 = 2^4 · 3^2 · 5 · 11
/// let f = Factorization::new(vec![(2, 4), (3, 2), (5, 1), (11, 1)]).unwrap();
/// assert_eq!(f.product(), 7920u32.into());
/// assert_eq!(f.to_string(), "2^4 × 3^2 × 5 × 11");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Factorization {
    pairs: Vec<(u64, u32)>,
}

impl Factorization {
    /// Create a new validated factorization.
    ///
    /// This validates that the pairs are:
    /// - Free of zero exponents
    /// - Strictly ascending by prime
    /// - Actually prime in each base
    ///
    /// # Errors
    ///
    /// Returns `FactorizationError::ZeroExponent` if an exponent is 0.
    /// Returns `FactorizationError::OutOfOrder` if primes repeat or descend.
    /// Returns `FactorizationError::NotPrime` if a base is composite.
    pub fn new(pairs: Vec<(u64, u32)>) -> Result<Self, FactorizationError> {
        let f = Self::new_unchecked(pairs)?;
        for &(prime, _) in &f.pairs {
            if !is_prime(prime) {
                return Err(FactorizationError::NotPrime { factor: prime });
            }
        }
        Ok(f)
    }

    /// Create a new factorization, skipping the primality scan.
    ///
    /// This still validates ordering and nonzero exponents, but skips the
    /// trial-division primality test on every base. Use this when the bases
    /// are known primes (e.g. copied from a published table).
    ///
    /// # Errors
    ///
    /// Returns `FactorizationError::ZeroExponent` if an exponent is 0.
    /// Returns `FactorizationError::OutOfOrder` if primes repeat or descend.
    pub fn new_unchecked(pairs: Vec<(u64, u32)>) -> Result<Self, FactorizationError> {
        let mut prev: Option<u64> = None;
        for &(prime, exp) in &pairs {
            if exp == 0 {
                return Err(FactorizationError::ZeroExponent { prime });
            }
            if let Some(p) = prev {
                if p >= prime {
                    return Err(FactorizationError::OutOfOrder {
                        prev: p,
                        next: prime,
                    });
                }
            }
            prev = Some(prime);
        }
        Ok(Self { pairs })
    }

    /// Factor `n` by trial division.
    ///
    /// Returns `None` for `n == 0` (zero has no prime factorization) and the
    /// empty factorization for `n == 1`.
    ///
    /// # Example
    ///
    /// ```
    /// use monstrum::Factorization;
    ///
    /// let f = Factorization::factor(7920).unwrap();
    /// assert_eq!(f.pairs(), &[(2, 4), (3, 2), (5, 1), (11, 1)]);
    /// assert!(Factorization::factor(0).is_none());
    /// ```
    pub fn factor(mut n: u64) -> Option<Self> {
        if n == 0 {
            return None;
        }

        let mut pairs = Vec::new();

        if n % 2 == 0 {
            let mut exp = 0;
            while n % 2 == 0 {
                n /= 2;
                exp += 1;
            }
            pairs.push((2, exp));
        }

        let mut d = 3u64;
        // same overflow-safe divisor bound as `is_prime`
        while d <= n / d {
            if n % d == 0 {
                let mut exp = 0;
                while n % d == 0 {
                    n /= d;
                    exp += 1;
                }
                pairs.push((d, exp));
            }
            d += 2;
        }

        if n > 1 {
            pairs.push((n, 1));
        }

        Some(Self { pairs })
    }

    /// Multiply the table back together with arbitrary precision.
    ///
    /// This is the reconstruction check behind
    /// [`FiniteGroup::verify_order`](crate::algebra::group::FiniteGroup::verify_order):
    /// the Monster's order has 54 digits, so no fixed-width accumulator
    /// could hold it.
    pub fn product(&self) -> BigUint {
        let mut acc = BigUint::one();
        for &(prime, exp) in &self.pairs {
            acc *= BigUint::from(prime).pow(exp);
        }
        acc
    }

    /// The `(prime, exponent)` pairs in ascending prime order.
    pub fn pairs(&self) -> &[(u64, u32)] {
        &self.pairs
    }

    /// Exponent of `prime` in the table, if present.
    pub fn exponent_of(&self, prime: u64) -> Option<u32> {
        self.pairs
            .iter()
            .find(|&&(p, _)| p == prime)
            .map(|&(_, e)| e)
    }

    /// Number of distinct primes in the table.
    pub fn distinct_primes(&self) -> usize {
        self.pairs.len()
    }

    /// Largest prime in the table, if the table is non-empty.
    pub fn largest_prime(&self) -> Option<u64> {
        self.pairs.last().map(|&(p, _)| p)
    }

    /// The pair carrying the highest exponent (first such pair on ties).
    pub fn highest_power(&self) -> Option<(u64, u32)> {
        let mut best: Option<(u64, u32)> = None;
        for &(prime, exp) in &self.pairs {
            match best {
                Some((_, e)) if e >= exp => {}
                _ => best = Some((prime, exp)),
            }
        }
        best
    }
}

impl fmt::Display for Factorization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.pairs.is_empty() {
            return write!(f, "1");
        }
        for (i, &(prime, exp)) in self.pairs.iter().enumerate() {
            if i > 0 {
                write!(f, " × ")?;
            }
            if exp == 1 {
                write!(f, "{}", prime)?;
            } else {
                write!(f, "{}^{}", prime, exp)?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Factorization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Factorization({})", self)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Factorization {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.pairs.serialize(serializer)
    }
}

/// Deserialization re-runs the full `new()` validation, so a hand-edited
/// pair list with a composite base or shuffled primes is rejected instead
/// of producing a table that can never verify.
#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Factorization {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let pairs = Vec::<(u64, u32)>::deserialize(deserializer)?;
        Self::new(pairs).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_valid() {
        let f = Factorization::new(vec![(2, 4), (3, 2), (5, 1), (11, 1)]);
        assert!(f.is_ok());
    }

    #[test]
    fn new_rejects_nonprime() {
        let f = Factorization::new(vec![(2, 1), (4, 1)]);
        assert!(matches!(
            f,
            Err(FactorizationError::NotPrime { factor: 4 })
        ));
    }

    #[test]
    fn new_rejects_descending() {
        let f = Factorization::new(vec![(3, 1), (2, 1)]);
        assert!(matches!(
            f,
            Err(FactorizationError::OutOfOrder { prev: 3, next: 2 })
        ));
    }

    #[test]
    fn new_rejects_duplicate() {
        let f = Factorization::new(vec![(2, 1), (2, 3)]);
        assert!(matches!(
            f,
            Err(FactorizationError::OutOfOrder { prev: 2, next: 2 })
        ));
    }

    #[test]
    fn new_rejects_zero_exponent() {
        let f = Factorization::new(vec![(2, 0)]);
        assert!(matches!(
            f,
            Err(FactorizationError::ZeroExponent { prime: 2 })
        ));
    }

    #[test]
    fn new_unchecked_skips_primality() {
        // 4 is composite but new_unchecked should accept it
        let f = Factorization::new_unchecked(vec![(4, 1)]);
        assert!(f.is_ok());
    }

    #[test]
    fn new_unchecked_still_checks_order() {
        let f = Factorization::new_unchecked(vec![(3, 1), (2, 1)]);
        assert!(matches!(f, Err(FactorizationError::OutOfOrder { .. })));
    }

    #[test]
    fn new_unchecked_still_checks_exponents() {
        let f = Factorization::new_unchecked(vec![(5, 0)]);
        assert!(matches!(f, Err(FactorizationError::ZeroExponent { .. })));
    }

    #[test]
    fn empty_table_is_one() {
        let f = Factorization::new(Vec::new()).unwrap();
        assert_eq!(f.product(), BigUint::one());
        assert_eq!(f.distinct_primes(), 0);
        assert_eq!(f.largest_prime(), None);
        assert_eq!(f.highest_power(), None);
    }

    #[test]
    fn factor_zero_is_none() {
        assert!(Factorization::factor(0).is_none());
    }

    #[test]
    fn factor_one_is_empty() {
        let f = Factorization::factor(1).unwrap();
        assert!(f.pairs().is_empty());
        assert_eq!(f.product(), BigUint::one());
    }

    #[test]
    fn factor_small_values() {
        let f = Factorization::factor(12).unwrap();
        assert_eq!(f.pairs(), &[(2, 2), (3, 1)]);

        let f = Factorization::factor(7920).unwrap();
        assert_eq!(f.pairs(), &[(2, 4), (3, 2), (5, 1), (11, 1)]);
    }

    #[test]
    fn factor_prime_input() {
        let f = Factorization::factor(71).unwrap();
        assert_eq!(f.pairs(), &[(71, 1)]);
    }

    #[test]
    fn factor_leaves_large_prime_tail() {
        let f = Factorization::factor(2 * 10007).unwrap();
        assert_eq!(f.pairs(), &[(2, 1), (10007, 1)]);
    }

    #[test]
    fn new_validates_largest_u64_prime() {
        // 2^64 - 59; the primality scan must stay in range near u64::MAX
        let f = Factorization::new(vec![(18_446_744_073_709_551_557, 1)]).unwrap();
        assert_eq!(f.largest_prime(), Some(18_446_744_073_709_551_557));
    }

    #[test]
    fn factor_largest_u64_prime() {
        let f = Factorization::factor(18_446_744_073_709_551_557).unwrap();
        assert_eq!(f.pairs(), &[(18_446_744_073_709_551_557, 1)]);
        assert_eq!(f.product(), BigUint::from(18_446_744_073_709_551_557u64));
    }

    #[test]
    fn factor_result_passes_validation() {
        for n in 1..500u64 {
            let f = Factorization::factor(n).unwrap();
            assert!(Factorization::new(f.pairs().to_vec()).is_ok());
            assert_eq!(f.product(), BigUint::from(n));
        }
    }

    #[test]
    fn product_m24() {
        // |M24| = 244 823 040 = 2^10 · 3^3 · 5 · 7 · 11 · 23
        let f = Factorization::new(vec![(2, 10), (3, 3), (5, 1), (7, 1), (11, 1), (23, 1)])
            .unwrap();
        assert_eq!(f.product(), BigUint::from(244_823_040u32));
    }

    #[test]
    fn exponent_queries() {
        let f = Factorization::new(vec![(2, 4), (3, 2), (5, 1), (11, 1)]).unwrap();
        assert_eq!(f.exponent_of(2), Some(4));
        assert_eq!(f.exponent_of(5), Some(1));
        assert_eq!(f.exponent_of(7), None);
        assert_eq!(f.distinct_primes(), 4);
        assert_eq!(f.largest_prime(), Some(11));
        assert_eq!(f.highest_power(), Some((2, 4)));
    }

    #[test]
    fn highest_power_prefers_first_on_tie() {
        let f = Factorization::new(vec![(2, 3), (5, 3), (7, 1)]).unwrap();
        assert_eq!(f.highest_power(), Some((2, 3)));
    }

    #[test]
    fn display_formats() {
        let f = Factorization::new(vec![(2, 4), (3, 2), (5, 1), (11, 1)]).unwrap();
        assert_eq!(f.to_string(), "2^4 × 3^2 × 5 × 11");

        let one = Factorization::new(Vec::new()).unwrap();
        assert_eq!(one.to_string(), "1");
    }

    #[test]
    fn debug_format() {
        let f = Factorization::new(vec![(2, 1), (3, 1)]).unwrap();
        assert_eq!(format!("{:?}", f), "Factorization(2 × 3)");
    }

    #[test]
    fn error_display() {
        let e = FactorizationError::NotPrime { factor: 9 };
        assert_eq!(e.to_string(), "factor 9 is not prime");

        let e = FactorizationError::OutOfOrder { prev: 5, next: 3 };
        assert_eq!(e.to_string(), "primes not strictly ascending: 5 then 3");

        let e = FactorizationError::ZeroExponent { prime: 7 };
        assert_eq!(e.to_string(), "zero exponent for prime 7");
    }
}
