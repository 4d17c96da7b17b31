//! A small catalog of sporadic simple groups for order comparisons.
//!
//! The Monster's 54-digit order only means something next to other groups,
//! so this module carries documented records for a few well-known sporadic
//! groups, from the smallest Mathieu group up to the Monster itself.

use std::fmt;

use num_bigint::BigUint;

use crate::algebra::group::{FiniteGroup, SporadicGroup};
use crate::structures::factorization::Factorization;
#[cfg(feature = "serde")]
use crate::structures::monster::GroupSummary;
use crate::structures::monster::{self, Monster};

/// A compact record of documented facts about one sporadic simple group.
///
/// Records are `const`-constructible so the catalog can be a plain static
/// table. Validation is deferred: `factorization()` rebuilds the checked
/// table at call time, and every shipped record is covered by
/// `verify_order` tests.
///
/// # Example
///
/// ```
/// use monstrum::{catalog, FiniteGroup};
///
/// let m11 = catalog::by_symbol("M11").unwrap();
/// assert_eq!(m11.order(), 7920u32.into());
/// assert!(m11.verify_order());
/// ```
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct GroupRecord {
    name: &'static str,
    symbol: &'static str,
    order_decimal: &'static str,
    factor_pairs: &'static [(u64, u32)],
}

impl GroupRecord {
    /// Define a record from documented literature values.
    ///
    /// `const fn` cannot run the factor-table validator, so a hand-built
    /// record with a malformed table will panic later, inside
    /// [`factorization`](FiniteGroup::factorization). Keep new records
    /// covered by a `verify_order` test, as the shipped ones are.
    pub const fn new(
        name: &'static str,
        symbol: &'static str,
        order_decimal: &'static str,
        factor_pairs: &'static [(u64, u32)],
    ) -> Self {
        Self {
            name,
            symbol,
            order_decimal,
            factor_pairs,
        }
    }

    /// Human-readable name, e.g. `"Mathieu M11"`.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Conventional ATLAS symbol, e.g. `"M11"`.
    pub fn symbol(&self) -> &'static str {
        self.symbol
    }

    /// Exact decimal expansion of the order.
    pub fn order_decimal(&self) -> &'static str {
        self.order_decimal
    }

    /// Self-contained snapshot of this record.
    #[cfg(feature = "serde")]
    pub fn summary(&self) -> GroupSummary {
        GroupSummary {
            name: self.name.to_string(),
            symbol: self.symbol.to_string(),
            order: self.order_decimal.to_string(),
            factorization: self.factor_pairs.to_vec(),
            conjugacy_classes: None,
            sporadic: true,
            simple: true,
        }
    }
}

impl FiniteGroup for GroupRecord {
    fn name(&self) -> &str {
        self.name
    }

    fn symbol(&self) -> &str {
        self.symbol
    }

    fn order(&self) -> BigUint {
        self.order_decimal
            .parse()
            .expect("record order literals are valid base-10")
    }

    fn factorization(&self) -> Factorization {
        Factorization::new(self.factor_pairs.to_vec())
            .expect("record factor tables list ascending primes")
    }

    fn is_simple(&self) -> bool {
        true
    }
}

impl SporadicGroup for GroupRecord {}

impl fmt::Debug for GroupRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GroupRecord({})", self.symbol)
    }
}

impl fmt::Display for GroupRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.symbol)
    }
}

/// Documented sporadic groups, ascending by order.
///
/// The Monster appears last; its entry shares the constants of
/// [`Monster`](crate::Monster).
pub static SPORADIC_GROUPS: [GroupRecord; 5] = [
    GroupRecord::new(
        "Mathieu M11",
        "M11",
        "7920",
        &[(2, 4), (3, 2), (5, 1), (11, 1)],
    ),
    GroupRecord::new(
        "Mathieu M24",
        "M24",
        "244823040",
        &[(2, 10), (3, 3), (5, 1), (7, 1), (11, 1), (23, 1)],
    ),
    GroupRecord::new(
        "Conway Co1",
        "Co1",
        "4157776806543360000",
        &[(2, 21), (3, 9), (5, 4), (7, 2), (11, 1), (13, 1), (23, 1)],
    ),
    GroupRecord::new(
        "Baby Monster",
        "B",
        "4154781481226426191177580544000000",
        &[
            (2, 41),
            (3, 13),
            (5, 6),
            (7, 2),
            (11, 1),
            (13, 1),
            (17, 1),
            (19, 1),
            (23, 1),
            (31, 1),
            (47, 1),
        ],
    ),
    GroupRecord::new("Monster", "M", Monster::ORDER_DECIMAL, &monster::ORDER_PAIRS),
];

/// Look up a record by its ATLAS symbol.
pub fn by_symbol(symbol: &str) -> Option<&'static GroupRecord> {
    SPORADIC_GROUPS.iter().find(|r| r.symbol == symbol)
}
