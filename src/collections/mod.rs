//! Mutable hash-backed collections.
//!
//! This module provides [`Set`], a set of unique elements with in-place
//! mutation and set algebra, and [`SetOptions`], its construction-time
//! configuration.
//!
//! # Feeding Operations
//!
//! Every bulk operation accepts any [`IntoIterator`] source, so the same
//! method covers element lists, arrays, slices, vectors, lazy iterators and
//! other sets:
//!
//! ```rust
//! use setkit::collections::Set;
//!
//! let mut set: Set<i32> = Set::new();
//! set.add_all([1, 2])              // array
//!     .add_all(vec![3, 4])         // vector
//!     .add_all((5..7).map(|n| n))  // lazy iterator
//!     .add_all(Set::from([7, 8]));  // another set
//!
//! assert_eq!(set.len(), 8);
//! assert!(set.contains_all(&[1, 4, 8]));
//! assert!(!set.contains_any([0, 9]));
//! ```
//!
//! # Set Algebra
//!
//! ```rust
//! use setkit::set;
//!
//! let set_a = set![1, 2, 3, 4, 5];
//! let set_b = set![2, 4, 6];
//!
//! assert_eq!(set_a.difference(&set_b), set![1, 3, 5]);
//! assert_eq!(set_a.symmetric_difference(&set_b), set![1, 3, 5, 6]);
//! assert_eq!(set_a.union(&set_b).len(), 6);
//! assert_eq!(&set_a & &set_b, set![2, 4]);
//! ```

// =============================================================================
// Default Hasher Type Alias
// =============================================================================

/// Hasher builder used by [`Set`] unless another is supplied.
///
/// When the `ahash` feature is enabled, this is `ahash::RandomState`.
///
/// When only the `fxhash` feature is enabled, this is
/// `rustc_hash::FxBuildHasher`, which is fast but not resistant to
/// collision attacks.
///
/// Otherwise (default), this is `std::hash::RandomState`.
#[cfg(feature = "ahash")]
pub type DefaultHashBuilder = ahash::RandomState;

/// Hasher builder used by [`Set`] unless another is supplied.
#[cfg(all(feature = "fxhash", not(feature = "ahash")))]
pub type DefaultHashBuilder = rustc_hash::FxBuildHasher;

/// Hasher builder used by [`Set`] unless another is supplied.
#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub type DefaultHashBuilder = std::hash::RandomState;

/// Creates a [`Set`] containing the given elements.
///
/// Duplicate elements collapse into one.
///
/// # Examples
///
/// ```rust
/// use setkit::set;
/// use setkit::Set;
///
/// let set = set![1, 2, 2, 3];
/// assert_eq!(set.len(), 3);
///
/// let empty: Set<String> = set![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! set {
    () => {
        $crate::collections::Set::new()
    };
    ($($element:expr),+ $(,)?) => {
        $crate::collections::Set::from([$($element),+])
    };
}

mod options;
mod set;

pub use options::SetOptions;
pub use set::Set;
pub use set::SetIntoIterator;
pub use set::SetIterator;

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod default_hash_builder_tests {
    use super::DefaultHashBuilder;
    use rstest::rstest;
    use std::hash::BuildHasher;

    #[rstest]
    fn test_default_hash_builder_is_deterministic_per_instance() {
        let hash_builder = DefaultHashBuilder::default();
        assert_eq!(
            BuildHasher::hash_one(&hash_builder, 42),
            BuildHasher::hash_one(&hash_builder, 42)
        );
        assert_eq!(
            BuildHasher::hash_one(&hash_builder, "key"),
            BuildHasher::hash_one(&hash_builder, "key")
        );
    }

    #[rstest]
    fn test_default_hash_builder_clone_hashes_alike() {
        let hash_builder = DefaultHashBuilder::default();
        let hash_builder_clone = hash_builder.clone();
        assert_eq!(
            BuildHasher::hash_one(&hash_builder, 7),
            BuildHasher::hash_one(&hash_builder_clone, 7)
        );
    }
}
