//! The Monster group descriptor and its documented constants.
//!
//! This module provides:
//! - The `Monster` zero-sized descriptor with the group's literature values
//! - Load-time parsed order and factorization behind `Lazy` statics
//! - The serializable `GroupSummary` snapshot (with the `serde` feature)
//!
//! Everything here is a documented fact; nothing is computed from a group
//! presentation. Honest computation with Monster elements needs dedicated
//! machinery (e.g. Seysen's mmgroup package), which is far outside the
//! scope of a teaching crate.

use std::fmt;

use num_bigint::BigUint;
use once_cell::sync::Lazy;

use crate::algebra::group::{FiniteGroup, SporadicGroup};
use crate::structures::factorization::Factorization;
use crate::utils::scientific_notation;

/// Prime-power table for |M|, ascending by prime.
pub(crate) const ORDER_PAIRS: [(u64, u32); 15] = [
    (2, 46),
    (3, 20),
    (5, 9),
    (7, 6),
    (11, 2),
    (13, 3),
    (17, 1),
    (19, 1),
    (23, 1),
    (29, 1),
    (31, 1),
    (41, 1),
    (47, 1),
    (59, 1),
    (71, 1),
];

/// |M| parsed once from the decimal literal.
static ORDER: Lazy<BigUint> = Lazy::new(|| {
    Monster::ORDER_DECIMAL
        .parse()
        .expect("ORDER_DECIMAL is a valid base-10 literal")
});

static FACTORIZATION: Lazy<Factorization> = Lazy::new(|| {
    Factorization::new(ORDER_PAIRS.to_vec()).expect("ORDER_PAIRS is a valid ascending prime table")
});

/// Known maximal subgroups of M, in ATLAS structure notation, descending
/// by order. The full classification has 46 conjugacy classes of maximal
/// subgroups; this list is a stable, deliberately partial sample.
static MAXIMAL_SUBGROUPS: [&str; 12] = [
    "2.B",
    "2^1+24.Co1",
    "3.Fi24",
    "2^10+16.O10^+(2)",
    "2^2+11+22.(M24 × S3)",
    "3^1+12.2.Suz.2",
    "2^5+10+20.(S3 × L5(2))",
    "(D10 × HN).2",
    "5^1+6.2.J2.4",
    "7^1+4.(3 × 2S7)",
    "11^1+2.(5 × 2S5)",
    "13^1+2.(3 × 4S4)",
];

/// The Monster group M, the largest sporadic simple group.
///
/// `Monster` is a zero-sized descriptor: every query returns a baked-in
/// documented constant, so construction takes no arguments, never fails,
/// and instances are free to copy.
///
/// # Example
///
/// ```
/// use monstrum::Monster;
///
/// let m = Monster::new();
/// assert!(m.is_sporadic());
/// assert_eq!(m.conjugacy_class_count(), 194);
/// assert!(m.verify_order());
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Monster;

impl Monster {
    /// Exact decimal expansion of |M|, ≈ 8.08 × 10^53.
    pub const ORDER_DECIMAL: &'static str =
        "808017424794512875886459904961710757005754368000000000";

    /// Number of conjugacy classes.
    pub const CONJUGACY_CLASSES: usize = 194;

    /// Dimension of the smallest faithful linear representation.
    pub const SMALLEST_FAITHFUL_DEGREE: u64 = 196_883;

    /// Dimension of the Griess algebra on which M acts by automorphisms.
    pub const GRIESS_DIMENSION: u64 = 196_884;

    /// Leading coefficients of the modular j-invariant, from q^1 onward.
    ///
    /// McKay's observation `196884 = 196883 + 1` ties the first of these to
    /// [`SMALLEST_FAITHFUL_DEGREE`](Self::SMALLEST_FAITHFUL_DEGREE); that
    /// coincidence seeded monstrous moonshine, proved by Borcherds in 1992.
    pub const J_INVARIANT_COEFFICIENTS: [u64; 4] =
        [196_884, 21_493_760, 864_299_970, 20_245_856_256];

    /// Create a Monster descriptor. Takes no arguments: all facts are baked in.
    pub fn new() -> Self {
        Self
    }

    /// Human-readable name.
    pub fn name(&self) -> &'static str {
        "Monster"
    }

    /// Conventional ATLAS symbol.
    pub fn symbol(&self) -> &'static str {
        "M"
    }

    /// |M| as an arbitrary-precision integer.
    pub fn order(&self) -> BigUint {
        ORDER.clone()
    }

    /// Prime-power decomposition of |M|.
    ///
    /// Returns an owned copy; the stored table cannot be mutated through it.
    pub fn factorization(&self) -> Factorization {
        FACTORIZATION.clone()
    }

    /// Number of conjugacy classes (194).
    pub fn conjugacy_class_count(&self) -> usize {
        Self::CONJUGACY_CLASSES
    }

    /// Number of irreducible characters; equals the class count by
    /// orthogonality of the character table.
    pub fn irreducible_characters(&self) -> usize {
        Self::CONJUGACY_CLASSES
    }

    /// Known maximal subgroups in ATLAS notation, descending by order.
    pub fn maximal_subgroups(&self) -> &'static [&'static str] {
        &MAXIMAL_SUBGROUPS
    }

    /// M is sporadic. A documented classification fact, not a computation.
    pub fn is_sporadic(&self) -> bool {
        true
    }

    /// M is simple.
    pub fn is_simple(&self) -> bool {
        true
    }

    /// Recompute `2^46 · 3^20 · … · 71` and compare it with the stored order.
    ///
    /// Returns `false` (rather than panicking) if the two constants ever
    /// drift apart.
    pub fn verify_order(&self) -> bool {
        FACTORIZATION.product() == *ORDER
    }

    /// Self-contained snapshot of the headline facts.
    #[cfg(feature = "serde")]
    pub fn summary(&self) -> GroupSummary {
        GroupSummary {
            name: self.name().to_string(),
            symbol: self.symbol().to_string(),
            order: Self::ORDER_DECIMAL.to_string(),
            factorization: ORDER_PAIRS.to_vec(),
            conjugacy_classes: Some(Self::CONJUGACY_CLASSES),
            sporadic: true,
            simple: true,
        }
    }
}

impl fmt::Display for Monster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} group ({}) of order ≈ {}",
            self.name(),
            self.symbol(),
            scientific_notation(&ORDER)
        )
    }
}

impl FiniteGroup for Monster {
    fn name(&self) -> &str {
        Monster::name(self)
    }

    fn symbol(&self) -> &str {
        Monster::symbol(self)
    }

    fn order(&self) -> BigUint {
        Monster::order(self)
    }

    fn factorization(&self) -> Factorization {
        Monster::factorization(self)
    }

    fn is_simple(&self) -> bool {
        Monster::is_simple(self)
    }
}

impl SporadicGroup for Monster {}

/// A self-contained, serializable snapshot of one group's headline facts.
///
/// Useful when the facts need to leave the process (JSON for a worksheet,
/// a fixture file) and be re-validated on the way back in: deserialize,
/// then call [`verify`](GroupSummary::verify).
///
/// # Example
///
/// ```
/// use monstrum::Monster;
///
/// let summary = Monster::new().summary();
/// assert!(summary.verify());
/// assert_eq!(summary.symbol, "M");
/// ```
#[cfg(feature = "serde")]
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GroupSummary {
    pub name: String,
    pub symbol: String,
    /// Exact decimal expansion of the order.
    pub order: String,
    /// (prime, exponent) pairs, ascending by prime.
    pub factorization: Vec<(u64, u32)>,
    /// Conjugacy-class count, when documented.
    pub conjugacy_classes: Option<usize>,
    pub sporadic: bool,
    pub simple: bool,
}

#[cfg(feature = "serde")]
impl GroupSummary {
    /// Rebuild the validated factorization from the snapshot.
    ///
    /// # Errors
    ///
    /// Returns the underlying validation error if the pair list was
    /// tampered with (composite base, shuffled or duplicate primes,
    /// zero exponent).
    pub fn to_factorization(
        &self,
    ) -> Result<Factorization, crate::structures::factorization::FactorizationError> {
        Factorization::new(self.factorization.clone())
    }

    /// Check that the snapshot is internally consistent: the order parses
    /// and equals the product of the factor table.
    pub fn verify(&self) -> bool {
        let order: BigUint = match self.order.parse() {
            Ok(n) => n,
            Err(_) => return false,
        };
        match self.to_factorization() {
            Ok(f) => f.product() == order,
            Err(_) => false,
        }
    }
}
