use num_bigint::BigUint;
use num_traits::{One, ToPrimitive};
use proptest::prelude::*;

use monstrum::{catalog, Factorization, FiniteGroup, Monster, MonsterElement};

fn arb_known_label() -> impl Strategy<Value = &'static str> {
    let labels: Vec<&'static str> = MonsterElement::known_classes()
        .iter()
        .map(|&(label, _)| label)
        .collect();
    prop::sample::select(labels)
}

// Subsets of a fixed prime set with bounded exponents keep every product
// inside u64 range, so the trial-division route stays exercisable.
fn arb_factor_pairs() -> impl Strategy<Value = Vec<(u64, u32)>> {
    prop::sample::subsequence(vec![2u64, 3, 5, 7, 11, 13], 0..=6)
        .prop_flat_map(|primes| {
            let len = primes.len();
            (Just(primes), prop::collection::vec(1u32..=4, len))
        })
        .prop_map(|(primes, exps)| primes.into_iter().zip(exps).collect())
}

// ===== Factorization properties =====

proptest! {
    #[test]
    fn product_matches_naive_accumulation(pairs in arb_factor_pairs()) {
        let f = Factorization::new(pairs.clone()).unwrap();
        let mut expected = BigUint::one();
        for (prime, exp) in pairs {
            for _ in 0..exp {
                expected *= prime;
            }
        }
        prop_assert_eq!(f.product(), expected);
    }
}

proptest! {
    #[test]
    fn factor_inverts_product(pairs in arb_factor_pairs()) {
        let f = Factorization::new(pairs).unwrap();
        let n = f.product().to_u64().unwrap();
        let refactored = Factorization::factor(n).unwrap();
        prop_assert_eq!(refactored, f);
    }
}

proptest! {
    #[test]
    fn product_inverts_factor(n in 1u64..1_000_000) {
        let f = Factorization::factor(n).unwrap();
        prop_assert_eq!(f.product(), BigUint::from(n));
    }
}

// ===== Element lookup properties =====

proptest! {
    #[test]
    fn known_labels_answer_consistently(label in arb_known_label()) {
        let g = MonsterElement::new(label);
        let first = g.order();
        prop_assert!(first.is_some());
        prop_assert_eq!(first, g.order());
        prop_assert_eq!(g.conjugacy_class(), Some(label));
    }
}

proptest! {
    #[test]
    fn unknown_labels_are_always_none(label in "[a-z]{2,8}") {
        // lowercase strings never collide with the uppercase table or "e"
        let g = MonsterElement::new(label.as_str());
        prop_assert_eq!(g.order(), None);
        prop_assert_eq!(g.order(), None);
        prop_assert_eq!(g.conjugacy_class(), None);
        prop_assert_eq!(g.label(), label.as_str());
    }
}

#[test]
fn identity_and_fallback_regressions() {
    assert_eq!(MonsterElement::new("e").order(), Some(1));
    assert_eq!(MonsterElement::new("some-unrecognized-label").order(), None);
}

// ===== Monster descriptor determinism =====

#[test]
fn monster_order_is_idempotent() {
    let m = Monster::new();
    assert_eq!(m.order(), m.order());
    assert_eq!(m.order().to_string(), Monster::ORDER_DECIMAL);
}

#[test]
fn monster_end_to_end_reconstruction() {
    // multiply every prime power with an arbitrary-precision accumulator
    let m = Monster::new();
    let mut acc = BigUint::one();
    for &(prime, exp) in m.factorization().pairs() {
        acc *= BigUint::from(prime).pow(exp);
    }
    assert_eq!(acc, m.order());
}

#[test]
fn monster_fixed_facts() {
    let m = Monster::new();
    assert!(m.is_sporadic());
    assert!(m.is_simple());
    assert_eq!(m.conjugacy_class_count(), 194);
}

#[test]
fn maximal_subgroups_nonempty_and_stable() {
    let m = Monster::new();
    let first = m.maximal_subgroups();
    let second = m.maximal_subgroups();
    assert!(!first.is_empty());
    assert_eq!(first, second);
}

#[test]
fn descriptors_work_as_trait_objects() {
    let monster = Monster::new();
    let m11 = catalog::SPORADIC_GROUPS[0];
    let groups: Vec<&dyn FiniteGroup> = vec![&monster, &m11];
    for g in groups {
        assert!(g.verify_order(), "inconsistent constants for {}", g.symbol());
    }
}

// ===== Catalog records =====

mod catalog_records {
    use super::*;
    use monstrum::GroupRecord;

    fn arb_record() -> impl Strategy<Value = GroupRecord> {
        prop::sample::select(catalog::SPORADIC_GROUPS.to_vec())
    }

    proptest! {
        #[test]
        fn every_record_is_consistent(record in arb_record()) {
            prop_assert!(record.verify_order());
            prop_assert_eq!(record.factorization().product(), record.order());
        }
    }

    proptest! {
        #[test]
        fn symbols_resolve_to_themselves(record in arb_record()) {
            let found = catalog::by_symbol(record.symbol()).unwrap();
            prop_assert_eq!(*found, record);
        }
    }

    #[test]
    fn monster_is_the_largest_entry() {
        let last = catalog::SPORADIC_GROUPS.last().unwrap();
        assert_eq!(last.symbol(), "M");
        for record in &catalog::SPORADIC_GROUPS {
            assert!(record.order() <= last.order());
        }
    }
}
