//! Property-based tests for `Optional<T>`.
//!
//! These verify the law-style parts of the contract over generated values:
//! equality as an equivalence relation, hash/equality consistency, and the
//! zero-or-one enumeration view.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use proptest::prelude::*;
use vessel_option::Optional;

fn optional_strategy() -> impl Strategy<Value = Optional<i32>> {
    prop_oneof![
        Just(Optional::empty()),
        any::<i32>().prop_map(Optional::present),
    ]
}

fn hash_of<V: Hash>(value: &V) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

proptest! {
    #[test]
    fn equality_is_reflexive(a in optional_strategy()) {
        let same = a;
        prop_assert_eq!(a, same);
    }

    #[test]
    fn equality_is_symmetric(a in optional_strategy(), b in optional_strategy()) {
        prop_assert_eq!(a == b, b == a);
    }

    #[test]
    fn equality_is_transitive(
        a in optional_strategy(),
        b in optional_strategy(),
        c in optional_strategy(),
    ) {
        if a == b && b == c {
            prop_assert_eq!(a, c);
        }
    }

    #[test]
    fn equal_optionals_hash_equal(a in optional_strategy(), b in optional_strategy()) {
        if a == b {
            prop_assert_eq!(hash_of(&a), hash_of(&b));
        }
    }

    #[test]
    fn present_hashes_as_its_payload(x in any::<i32>()) {
        prop_assert_eq!(hash_of(&Optional::present(x)), hash_of(&x));
    }

    #[test]
    fn bare_value_equality_matches_payload(x in any::<i32>(), y in any::<i32>()) {
        prop_assert_eq!(Optional::present(x) == y, x == y);
        prop_assert!(Optional::<i32>::empty() != y);
    }

    #[test]
    fn cross_variant_comparison_is_false(x in any::<i32>()) {
        prop_assert!(Optional::present(x) != Optional::empty());
        prop_assert!(Optional::<i32>::empty() != Optional::present(x));
    }

    #[test]
    fn enumeration_cardinality(opt in optional_strategy()) {
        let first: Vec<_> = opt.iter().copied().collect();
        let second: Vec<_> = opt.iter().copied().collect();
        // Restartable: a second pass observes the same result.
        prop_assert_eq!(&first, &second);
        match opt.value() {
            Some(&value) => prop_assert_eq!(first, vec![value]),
            None => prop_assert!(first.is_empty()),
        }
    }

    #[test]
    fn nullable_round_trip(value in proptest::option::of(any::<i32>())) {
        let opt = Optional::from_nullable(value);
        prop_assert_eq!(opt.into_value(), value);
        prop_assert_eq!(opt.is_present(), value.is_some());
    }

    #[test]
    fn checked_present_agrees_with_present(x in any::<i32>()) {
        prop_assert_eq!(Optional::checked_present(Some(x)), Ok(Optional::present(x)));
    }
}
