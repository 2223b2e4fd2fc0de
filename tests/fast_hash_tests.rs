//! Tests for hasher selection.
//!
//! `Set` hashes with `DefaultHashBuilder` unless told otherwise; the
//! `fxhash` and `ahash` features swap that default. These tests run under
//! whichever default is active and also exercise explicit hashers.

use rstest::rstest;
use setkit::{DefaultHashBuilder, Set, SetOptions, set};
use std::hash::{BuildHasherDefault, DefaultHasher, RandomState};

// =============================================================================
// Default Hasher Tests
// =============================================================================

/// Tests that equal sets built in different orders compare equal.
#[rstest]
fn test_insertion_order_does_not_affect_equality() {
    let forward: Set<&str> = ["alpha", "beta", "gamma"].into_iter().collect();
    let backward: Set<&str> = ["gamma", "beta", "alpha"].into_iter().collect();

    assert_eq!(forward, backward);
}

/// Tests that the default hasher handles many elements.
#[rstest]
fn test_large_scale_add_and_contains() {
    const COUNT: i32 = 10_000;

    let set: Set<i32> = (0..COUNT).collect();

    for element in 0..COUNT {
        assert!(set.contains(&element), "Set should contain {element}");
    }
    for element in COUNT..(COUNT + 100) {
        assert!(!set.contains(&element), "Set should not contain {element}");
    }

    assert_eq!(set.len(), COUNT as usize);
}

/// Tests string elements with similar hash patterns.
#[rstest]
fn test_similar_string_elements() {
    let set = set![
        "a".to_string(),
        "aa".to_string(),
        "aaa".to_string(),
        String::new()
    ];

    assert_eq!(set.len(), 4);
    assert!(set.contains(""));
    assert!(set.contains("aaa"));
    assert!(!set.contains("aaaa"));
}

/// Tests boundary integer elements.
#[rstest]
fn test_boundary_integer_elements() {
    let set = set![i64::MIN, i64::MAX, 0, -1];

    assert!(set.contains_all([i64::MIN, i64::MAX, 0, -1]));
    assert!(!set.contains(&1));
}

#[rstest]
fn test_default_hash_builder_backs_new_sets() {
    let set: Set<i32, DefaultHashBuilder> = Set::new();
    let _: &DefaultHashBuilder = set.hasher();
    assert!(set.is_empty());
}

// =============================================================================
// Explicit Hasher Tests
// =============================================================================

type DeterministicBuildHasher = BuildHasherDefault<DefaultHasher>;

#[rstest]
fn test_explicit_random_state() {
    let mut set: Set<u32, RandomState> = Set::with_hasher(RandomState::new());
    set.add_all([1, 2, 3]);

    assert_eq!(set.len(), 3);
    assert!(set.contains(&2));
}

#[rstest]
fn test_explicit_hasher_with_options() {
    let set: Set<u32, DeterministicBuildHasher> = Set::with_options_and_hasher(
        SetOptions::new().with_capacity(32),
        DeterministicBuildHasher::default(),
    );

    assert!(set.capacity() >= 32);
}

#[rstest]
fn test_set_algebra_with_custom_hasher() {
    let set_a: Set<u32, DeterministicBuildHasher> = (1..=5).collect();
    let set_b: Set<u32, DeterministicBuildHasher> = [2, 4, 6].into_iter().collect();

    let symmetric_difference = set_a.symmetric_difference(&set_b);
    let expected: Set<u32, DeterministicBuildHasher> = [1, 3, 5, 6].into_iter().collect();

    assert_eq!(symmetric_difference, expected);
    assert_eq!(set_a.union(&set_b).len(), 6);
    assert!(set_a.difference(&set_b).is_subset(&set_a));
}
