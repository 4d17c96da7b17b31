use num_bigint::BigUint;

use crate::structures::factorization::Factorization;

/// Descriptive contract for a finite group known through its documented facts.
///
/// Implementors report literature values; nothing is computed from generators
/// or relations. Guarantees (you should test these for concrete types):
/// - every accessor is a pure read: repeated calls return equal values
/// - `factorization().product()` equals `order()`
/// - nothing here panics or mutates
pub trait FiniteGroup {
    /// Human-readable name, e.g. `"Monster"`.
    fn name(&self) -> &str;

    /// Conventional ATLAS symbol, e.g. `"M"`.
    fn symbol(&self) -> &str;

    /// Group order |G|.
    ///
    /// Returned as a [`BigUint`]: the interesting orders overflow every
    /// fixed-width integer type.
    fn order(&self) -> BigUint;

    /// Prime-power decomposition of [`order`](FiniteGroup::order).
    fn factorization(&self) -> Factorization;

    /// Whether the group is simple.
    fn is_simple(&self) -> bool;

    /// Recompute the factorization product and compare it with `order()`.
    ///
    /// This is the one designed failure signal: an inconsistent edit to the
    /// stored constants shows up as `false`, never as a panic.
    fn verify_order(&self) -> bool {
        self.factorization().product() == self.order()
    }
}

/// Marker trait for the 26 sporadic simple groups.
///
/// Sporadic groups are the finite simple groups outside the cyclic,
/// alternating, and Lie-type families. For types implementing this,
/// you *should* have `is_simple() == true`.
pub trait SporadicGroup: FiniteGroup {}
