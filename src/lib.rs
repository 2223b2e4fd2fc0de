//! # setkit
//!
//! A mutable hash set with set algebra, bulk constructors and chainable
//! mutators.
//!
//! ## Overview
//!
//! [`Set`] stores unique elements of any `Eq + Hash` type and provides:
//!
//! - **Construction**: empty, with a capacity hint ([`SetOptions`]), from
//!   element lists ([`set!`]), arrays, slices, vectors, iterators or other sets
//! - **Queries**: membership (`contains`, `contains_all`, `contains_any`),
//!   subset/superset tests, predicates (`all`, `any`, `count`)
//! - **Mutation**: `add`/`remove` for single elements, `add_all`/`remove_all`
//!   for any iterable source, each returning the set for chaining
//! - **Set algebra**: union, intersection, difference, symmetric difference,
//!   filtering
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` for [`Set`]
//! - `rayon`: parallel iteration and collection
//! - `fxhash`: use `rustc-hash`'s `FxBuildHasher` as the default hasher
//! - `ahash`: use `ahash::RandomState` as the default hasher
//! - `full`: `serde` and `rayon`
//!
//! ## Example
//!
//! ```rust
//! use setkit::prelude::*;
//!
//! let mut primes = set![2, 3, 5, 7];
//! let odds: Set<i32> = (1..10).filter(|n| n % 2 == 1).collect();
//!
//! assert_eq!(primes.intersection(&odds), set![3, 5, 7]);
//!
//! primes.add_all([11, 13]).remove_all([2]);
//! assert!(primes.is_subset(&odds.union(&set![11, 13])));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use setkit::prelude::*;
/// ```
pub mod prelude {
    pub use crate::collections::*;
    pub use crate::set;
}

pub mod collections;

pub use collections::{DefaultHashBuilder, Set, SetIntoIterator, SetIterator, SetOptions};
