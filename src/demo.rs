//! Human-readable demonstration of the crate's descriptors.
//!
//! [`write_demonstration`] renders every headline fact to any
//! [`io::Write`] sink, so tests can capture it in a `Vec<u8>` while the
//! `monstrum` binary sends it to stdout. Run with: cargo run

use std::io::{self, Write};

use crate::algebra::group::FiniteGroup;
use crate::structures::catalog;
use crate::structures::element::MonsterElement;
use crate::structures::monster::Monster;
use crate::utils::{factorial, grouped_decimal, order_ratio, scientific_notation};

/// Write the full demonstration report to `out`.
///
/// Surfaces the order (exact and approximate), classification flags, class
/// count, factorization with its reconstruction check, maximal subgroups,
/// moonshine facts, element-order lookups including the identity, and size
/// comparisons against the catalog.
pub fn write_demonstration<W: Write>(out: &mut W) -> io::Result<()> {
    let monster = Monster::new();

    writeln!(out, "=== Monster Group Demonstration ===")?;
    writeln!(out)?;
    writeln!(out, "Group: {}", monster)?;
    writeln!(out, "Order: {}", grouped_decimal(&monster.order()))?;
    writeln!(out, "       ≈ {}", scientific_notation(&monster.order()))?;
    writeln!(out, "Sporadic: {}", monster.is_sporadic())?;
    writeln!(out, "Simple: {}", monster.is_simple())?;
    writeln!(out, "Conjugacy classes: {}", monster.conjugacy_class_count())?;
    writeln!(out)?;

    writeln!(out, "--- Prime Factorization ---")?;
    let factorization = monster.factorization();
    writeln!(out, "|M| = {}", factorization)?;
    writeln!(out, "Distinct primes: {}", factorization.distinct_primes())?;
    if let Some(p) = factorization.largest_prime() {
        writeln!(out, "Largest prime: {}", p)?;
    }
    if let Some((prime, exp)) = factorization.highest_power() {
        writeln!(out, "Highest power: {}^{}", prime, exp)?;
    }
    writeln!(
        out,
        "Multiplying the table back reconstructs the order: {}",
        monster.verify_order()
    )?;
    writeln!(out)?;

    writeln!(out, "--- Some Maximal Subgroups ---")?;
    for subgroup in monster.maximal_subgroups() {
        writeln!(out, "  {}", subgroup)?;
    }
    writeln!(out)?;

    writeln!(out, "--- Characters and Moonshine ---")?;
    writeln!(
        out,
        "Irreducible characters: {}",
        monster.irreducible_characters()
    )?;
    writeln!(
        out,
        "Smallest faithful representation: {} dimensions",
        Monster::SMALLEST_FAITHFUL_DEGREE
    )?;
    write!(out, "j(τ) = q^-1 + 744")?;
    for (k, c) in Monster::J_INVARIANT_COEFFICIENTS.iter().enumerate() {
        if k == 0 {
            write!(out, " + {}q", c)?;
        } else {
            write!(out, " + {}q^{}", c, k + 1)?;
        }
    }
    writeln!(out, " + …")?;
    writeln!(
        out,
        "McKay: {} = {} + 1",
        Monster::J_INVARIANT_COEFFICIENTS[0],
        Monster::SMALLEST_FAITHFUL_DEGREE
    )?;
    writeln!(out)?;

    writeln!(out, "--- Elements by Class Label ---")?;
    for label in ["e", "2A", "12A", "96Z"] {
        let g = MonsterElement::new(label);
        match g.order() {
            Some(order) => writeln!(out, "  {:?}: order {}", g.label(), order)?,
            None => {
                writeln!(out, "  {:?}: order unknown (not in the class table)", g.label())?
            }
        }
    }
    let identity = MonsterElement::identity();
    writeln!(
        out,
        "  identity class: {}",
        identity.conjugacy_class().unwrap_or("?")
    )?;
    writeln!(out)?;

    writeln!(out, "--- Order Comparisons ---")?;
    let monster_order = monster.order();
    if let Some(ratio) = order_ratio(&monster_order, &factorial(20)) {
        writeln!(out, "  |M| / |S20| ≈ {:.2e}", ratio)?;
    }
    for record in catalog::SPORADIC_GROUPS.iter().filter(|r| r.symbol() != "M") {
        if let Some(ratio) = order_ratio(&monster_order, &record.order()) {
            writeln!(out, "  |M| / |{}| ≈ {:.2e}", record.symbol(), ratio)?;
        }
    }

    Ok(())
}
