//! Extension helper property tests.

use ensure_kit::{AddRange, Seconds};
use proptest::prelude::*;
use std::collections::HashSet;
use std::time::Duration;

proptest! {
    /// Property: `add_range` leaves the set equal to the union of both inputs.
    #[test]
    fn prop_add_range_is_union(
        initial in prop::collection::hash_set(any::<u8>(), 0..16),
        extra in prop::collection::vec(any::<u8>(), 0..16),
    ) {
        let mut set = initial.clone();
        let added = set.add_range(extra.iter().copied());

        let expected: HashSet<u8> = initial.iter().chain(extra.iter()).copied().collect();
        prop_assert_eq!(added, expected.len() - initial.len());
        prop_assert_eq!(set, expected);
    }

    /// Property: `seconds()` matches `Duration::from_secs`.
    #[test]
    fn prop_seconds_match_from_secs(secs: u32) {
        prop_assert_eq!(secs.seconds(), Duration::from_secs(u64::from(secs)));
    }

    /// Property: signed `seconds()` keeps the sign, negative inputs included.
    #[test]
    fn prop_signed_seconds_keep_sign(secs: i32) {
        let duration = secs.seconds();
        prop_assert_eq!(duration.num_seconds(), i64::from(secs));
        prop_assert_eq!(duration < chrono::Duration::zero(), secs < 0);
    }
}

#[cfg(feature = "json")]
proptest! {
    /// Property: the debug dump always parses and always carries a type name.
    #[test]
    fn prop_debug_json_is_valid_json(values in prop::collection::vec(any::<i32>(), 0..8)) {
        let json = ensure_kit::to_debug_json(&values);
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        prop_assert!(parsed["Type"].as_str().unwrap().contains("Vec<i32>"));
        prop_assert_eq!(parsed["Object"].as_array().map(Vec::len), Some(values.len()));
    }
}
