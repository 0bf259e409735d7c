//! Property-based tests for interaction records
//!
//! These tests verify the laws every record satisfies regardless of formula:
//!  - products equal reactants exactly when the formula declined
//!  - a record is stable exactly when the formula declined
//!  - the deltas sum to the change in molecule count

use proptest::prelude::*;
use stoch_core::{DeltaMap, Interaction};

/// Reactants plus an optional product list the formula will hand back
fn outcome_strategy() -> impl Strategy<Value = (Vec<u8>, Option<Vec<u8>>)> {
    (1usize..6).prop_flat_map(|arity| {
        (
            prop::collection::vec(0u8..8, arity),
            prop::option::of(prop::collection::vec(0u8..8, 0..8)),
        )
    })
}

fn scripted(arity: usize, outcome: Option<Vec<u8>>) -> Interaction<u8> {
    Interaction::new(arity, move |_| outcome.clone())
}

fn delta_strategy() -> impl Strategy<Value = DeltaMap<u8>> {
    prop::collection::vec((0u8..8, -5i64..5), 0..10)
        .prop_map(|entries| entries.into_iter().collect())
}

// ============================================================================
// Record Property Tests
// ============================================================================

proptest! {
    #[test]
    fn products_equal_reactants_iff_declined(
        (reactants, outcome) in outcome_strategy()
    ) {
        let record = scripted(reactants.len(), outcome.clone()).run(reactants.clone());

        match outcome {
            None => {
                prop_assert!(record.is_stable());
                prop_assert_eq!(record.products(), &reactants[..]);
            }
            Some(products) => {
                prop_assert!(!record.is_stable());
                prop_assert_eq!(record.products(), &products[..]);
            }
        }
        prop_assert_eq!(record.reactants(), &reactants[..]);
    }

    #[test]
    fn deltas_sum_to_size_change((reactants, outcome) in outcome_strategy()) {
        let record = scripted(reactants.len(), outcome).run(reactants);
        let expected = record.products().len() as i64 - record.reactants().len() as i64;

        prop_assert_eq!(record.deltas().net_change(), expected);
        prop_assert_eq!(record.size_change(), expected);
    }

    #[test]
    fn stable_records_have_zero_deltas(reactants in prop::collection::vec(0u8..8, 1..6)) {
        let record = scripted(reactants.len(), None).run(reactants);

        prop_assert_eq!(record.deltas().deviation(), 0);
        prop_assert!(record.deltas().normalized().is_empty());
    }
}

// ============================================================================
// DeltaMap Property Tests
// ============================================================================

proptest! {
    #[test]
    fn merge_is_commutative(a in delta_strategy(), b in delta_strategy()) {
        let mut left = a.clone();
        left.merge(&b);
        let mut right = b.clone();
        right.merge(&a);

        prop_assert_eq!(left.normalized(), right.normalized());
    }

    #[test]
    fn unmerge_undoes_merge(a in delta_strategy(), b in delta_strategy()) {
        let mut rolled = a.clone();
        rolled.merge(&b);
        rolled.unmerge(&b);

        prop_assert_eq!(rolled.normalized(), a.normalized());
    }

    #[test]
    fn deviation_bounds_net_change(a in delta_strategy()) {
        prop_assert!(a.net_change().unsigned_abs() <= a.deviation());
    }
}
