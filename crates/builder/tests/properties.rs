mod common;

use core::cmp::Ordering;

use common::*;
use fieldwise_builder::{compare, equals, hash_code, to_string};
use proptest::prelude::*;

fn address_strategy() -> impl Strategy<Value = Option<Address>> {
    prop::option::of(("[A-Za-z ]{0,12}", "[A-Za-z]{0,8}").prop_map(|(street, city)| Address {
        street,
        city,
    }))
}

fn person_strategy() -> impl Strategy<Value = Person> {
    (
        "[A-Za-z]{0,6}",
        0i32..4,
        any::<bool>(),
        prop::option::of(0i64..2_000_000_000),
        prop::collection::vec("[a-z]{0,3}", 0..3),
        address_strategy(),
        prop::collection::vec(any::<u8>(), 0..3),
    )
        .prop_map(
            |(name, age, active, seconds, cache, address, internal_id)| Person {
                name,
                age,
                status: if active {
                    Status::Active
                } else {
                    Status::Suspended
                },
                last_accessed: seconds.and_then(accessed_at),
                cache,
                address,
                internal_id,
            },
        )
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    })]

    /// Property: equality is reflexive and symmetric.
    #[test]
    fn equality_is_reflexive_and_symmetric(a in person_strategy(), b in person_strategy()) {
        prop_assert_eq!(equals(Some(&a), Some(&a)), Ok(true));
        prop_assert_eq!(equals(Some(&a), Some(&a.clone())), Ok(true));
        prop_assert_eq!(equals(Some(&a), Some(&b)), equals(Some(&b), Some(&a)));
    }

    /// Property: equal objects hash alike, and hashing is stable.
    #[test]
    fn equal_objects_share_a_hash(a in person_strategy(), b in person_strategy()) {
        if equals(Some(&a), Some(&b)).unwrap() {
            prop_assert_eq!(hash_code(Some(&a)), hash_code(Some(&b)));
        }
        prop_assert_eq!(hash_code(Some(&a)), hash_code(Some(&a)));
    }

    /// Property: changing only an equality-excluded field changes neither
    /// equality nor the hash code.
    #[test]
    fn excluded_field_does_not_participate(a in person_strategy(), seconds in 0i64..2_000_000_000) {
        let mut b = a.clone();
        b.last_accessed = accessed_at(seconds);
        prop_assert_eq!(equals(Some(&a), Some(&b)), Ok(true));
        prop_assert_eq!(hash_code(Some(&a)), hash_code(Some(&b)));
        prop_assert_eq!(compare(&a, &b), Ok(Ordering::Equal));
    }

    /// Property: the string-excluded field never renders, the string-included
    /// one always does.
    #[test]
    fn string_markers_are_honoured(a in person_strategy()) {
        let rendered = to_string(Some(&a)).unwrap();
        prop_assert!(!rendered.contains("cache="));
        prop_assert!(rendered.contains("\n  address="));
        prop_assert!(!rendered.contains("internal_id="));
    }

    /// Property: ordering is antisymmetric and agrees with equality.
    #[test]
    fn ordering_is_antisymmetric(a in person_strategy(), b in person_strategy()) {
        let forward = compare(&a, &b).unwrap();
        let backward = compare(&b, &a).unwrap();
        prop_assert_eq!(forward, backward.reverse());
        prop_assert_eq!(
            forward == Ordering::Equal,
            equals(Some(&a), Some(&b)).unwrap()
        );
    }
}
