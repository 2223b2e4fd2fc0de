//! Mutable hash set with set algebra.
//!
//! This module provides [`Set`], a set of unique elements backed by
//! [`std::collections::HashSet`].
//!
//! # Overview
//!
//! - O(1) amortized `add`, `remove` and `contains`
//! - O(1) `len` and `is_empty`
//! - Bulk operations (`add_all`, `remove_all`, `contains_all`,
//!   `contains_any`) accept any iterable source
//! - Derived sets (`union`, `difference`, ...) leave their inputs untouched
//!
//! Mutating methods take `&mut self`. Single-element mutators report whether
//! the set changed; bulk mutators return the set so calls can be chained.
//!
//! # Examples
//!
//! ```rust
//! use setkit::Set;
//!
//! let mut set = Set::new();
//! assert!(set.add(1));
//! assert!(!set.add(1)); // already present
//!
//! set.add_all([2, 3, 4]).remove_all([4]);
//! assert_eq!(set.len(), 3);
//! assert!(set.contains(&2));
//! assert!(set.contains_all([1, 2, 3]));
//! ```
//!
//! # Iteration
//!
//! Iteration order is unspecified and may differ between equal sets that
//! were built differently. Each call to [`Set::iter`] starts a fresh
//! traversal over the current contents.

use std::borrow::Borrow;
use std::collections::HashSet;
use std::collections::hash_set;
use std::fmt;
use std::hash::{BuildHasher, Hash};
use std::iter::{FromIterator, FusedIterator};
use std::ops::{BitAnd, BitOr, BitXor, Sub};

use super::{DefaultHashBuilder, SetOptions};

// =============================================================================
// Set Definition
// =============================================================================

/// A mutable set of unique elements.
///
/// Elements must implement [`Eq`] and [`Hash`]. The hasher is chosen by the
/// `S` parameter and defaults to [`DefaultHashBuilder`].
///
/// # Time Complexity
///
/// | Operation              | Complexity          |
/// |------------------------|---------------------|
/// | `new`                  | O(1)                |
/// | `contains`             | O(1) amortized      |
/// | `add`                  | O(1) amortized      |
/// | `remove`               | O(1) amortized      |
/// | `len`                  | O(1)                |
/// | `is_empty`             | O(1)                |
/// | `contains_all`         | O(k)                |
/// | `contains_any`         | O(k)                |
/// | `union`                | O(n + m)            |
/// | `intersection`         | O(min(n, m))        |
/// | `difference`           | O(n)                |
/// | `symmetric_difference` | O(n + m)            |
/// | `is_subset`            | O(n)                |
///
/// # Thread Safety
///
/// `Set` performs no internal synchronization. It is `Send` and `Sync` when
/// its elements and hasher are; sharing one set between threads for
/// mutation requires an external lock.
///
/// # Examples
///
/// ```rust
/// use setkit::Set;
///
/// let set = Set::from([1, 2, 2, 3]);
/// assert_eq!(set.len(), 3);
/// assert!(set.contains(&2));
/// assert!(!set.contains(&4));
/// ```
#[derive(Clone)]
pub struct Set<T, S = DefaultHashBuilder> {
    inner: HashSet<T, S>,
}

static_assertions::assert_impl_all!(Set<i32>: Send, Sync, Clone, Default);
static_assertions::assert_impl_all!(Set<String>: Send, Sync, Clone, Default);
static_assertions::assert_not_impl_any!(Set<std::rc::Rc<i32>>: Send, Sync);

impl<T> Set<T, DefaultHashBuilder> {
    /// Creates a new empty set.
    ///
    /// The set does not allocate until the first element is added.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setkit::Set;
    ///
    /// let set: Set<i32> = Set::new();
    /// assert!(set.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_hasher(DefaultHashBuilder::default())
    }
}

impl<T: Eq + Hash> Set<T, DefaultHashBuilder> {
    /// Creates a new empty set able to hold at least `capacity` elements
    /// without reallocating.
    ///
    /// Shorthand for `Set::with_options(SetOptions::new().with_capacity(capacity))`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setkit::Set;
    ///
    /// let set: Set<i32> = Set::with_capacity(10);
    /// assert!(set.is_empty());
    /// assert!(set.capacity() >= 10);
    /// ```
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_options(SetOptions::new().with_capacity(capacity))
    }

    /// Creates a new empty set configured by `options`.
    ///
    /// # Arguments
    ///
    /// * `options` - Construction hints; see [`SetOptions`]
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setkit::{Set, SetOptions};
    ///
    /// let set: Set<&str> = Set::with_options(SetOptions::new().with_capacity(64));
    /// assert!(set.capacity() >= 64);
    ///
    /// let unsized_hint: Set<&str> = Set::with_options(SetOptions::new());
    /// assert_eq!(unsized_hint.capacity(), 0);
    /// ```
    #[inline]
    #[must_use]
    pub fn with_options(options: SetOptions) -> Self {
        Self::with_options_and_hasher(options, DefaultHashBuilder::default())
    }
}

impl<T, S> Set<T, S> {
    /// Creates a new empty set which will use `hasher` to hash elements.
    #[inline]
    #[must_use]
    pub fn with_hasher(hasher: S) -> Self {
        Self {
            inner: HashSet::with_hasher(hasher),
        }
    }

    /// Returns the number of elements in the set.
    ///
    /// # Complexity
    ///
    /// O(1)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setkit::set;
    ///
    /// assert_eq!(set![1, 2, 2, 3].len(), 3);
    /// ```
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if the set contains no elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setkit::Set;
    ///
    /// let mut set = Set::new();
    /// assert!(set.is_empty());
    ///
    /// set.add(42);
    /// assert!(!set.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns the number of elements the set can hold without reallocating.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.inner.capacity()
    }

    /// Returns a reference to the set's hasher builder.
    #[inline]
    #[must_use]
    pub fn hasher(&self) -> &S {
        self.inner.hasher()
    }

    /// Returns an iterator over the elements of the set, in unspecified
    /// order.
    ///
    /// Every call starts a new traversal over the set's current contents.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setkit::set;
    ///
    /// let set = set![1, 2, 3];
    /// let mut elements: Vec<i32> = set.iter().copied().collect();
    /// elements.sort_unstable();
    /// assert_eq!(elements, vec![1, 2, 3]);
    ///
    /// // A second traversal sees the same elements.
    /// assert_eq!(set.iter().count(), 3);
    /// ```
    #[inline]
    pub fn iter(&self) -> SetIterator<'_, T> {
        SetIterator {
            inner: self.inner.iter(),
        }
    }

    /// Removes all elements from the set, keeping the allocated storage.
    ///
    /// Returns the set itself for chaining.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setkit::set;
    ///
    /// let mut set = set![1, 2, 3];
    /// set.clear();
    /// assert!(set.is_empty());
    /// assert_eq!(set.len(), 0);
    /// ```
    #[inline]
    pub fn clear(&mut self) -> &mut Self {
        self.inner.clear();
        self
    }

    /// Returns `true` if every element satisfies `predicate`.
    ///
    /// Returns `true` for an empty set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setkit::{set, Set};
    ///
    /// assert!(set![2, 4, 6].all(|element| element % 2 == 0));
    /// assert!(!set![2, 3].all(|element| element % 2 == 0));
    /// assert!(Set::<i32>::new().all(|_| false));
    /// ```
    pub fn all<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.inner.iter().all(predicate)
    }

    /// Returns `true` if at least one element satisfies `predicate`.
    ///
    /// Returns `false` for an empty set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setkit::{set, Set};
    ///
    /// assert!(set![1, 2, 3].any(|element| *element > 2));
    /// assert!(!set![1, 2, 3].any(|element| *element > 3));
    /// assert!(!Set::<i32>::new().any(|_| true));
    /// ```
    pub fn any<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.inner.iter().any(predicate)
    }

    /// Returns the number of elements that satisfy `predicate`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setkit::set;
    ///
    /// let set = set![1, 2, 3, 4, 5];
    /// assert_eq!(set.count(|element| element % 2 == 1), 3);
    /// ```
    pub fn count<P>(&self, mut predicate: P) -> usize
    where
        P: FnMut(&T) -> bool,
    {
        self.inner
            .iter()
            .filter(|&element| predicate(element))
            .count()
    }

    /// Consumes the set and returns its elements as a vector, in
    /// unspecified order.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.inner.into_iter().collect()
    }

    /// Consumes the set and returns the underlying [`HashSet`].
    #[inline]
    #[must_use]
    pub fn into_inner(self) -> HashSet<T, S> {
        self.inner
    }
}

impl<T: Eq + Hash, S: BuildHasher> Set<T, S> {
    /// Creates a new empty set configured by `options`, using `hasher` to
    /// hash elements.
    ///
    /// A capacity hint of `0`, or one too large to allocate, leaves the set
    /// unallocated.
    #[must_use]
    pub fn with_options_and_hasher(options: SetOptions, hasher: S) -> Self {
        let mut inner = HashSet::with_hasher(hasher);
        if options.capacity() > 0 {
            // A hint that cannot be honoured leaves the set unallocated.
            let _ = inner.try_reserve(options.capacity());
        }
        Self { inner }
    }

    /// Returns `true` if the set contains the specified element.
    ///
    /// The element may be any borrowed form of the set's element type,
    /// but `Hash` and `Eq` on the borrowed form must match those for
    /// the element type.
    ///
    /// # Arguments
    ///
    /// * `element` - The element to check for
    ///
    /// # Complexity
    ///
    /// O(1) amortized
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setkit::Set;
    ///
    /// let set = Set::from(["hello".to_string(), "world".to_string()]);
    ///
    /// // Can use &str to look up String elements
    /// assert!(set.contains("hello"));
    /// assert!(!set.contains("other"));
    /// ```
    #[inline]
    #[must_use]
    pub fn contains<Q>(&self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.contains(element)
    }

    /// Returns `true` if the set contains every element yielded by
    /// `elements`.
    ///
    /// The source may yield elements by value or by reference, so arrays,
    /// slices, vectors, iterators and other sets all work. An empty source
    /// returns `true`.
    ///
    /// # Arguments
    ///
    /// * `elements` - The elements that must all be present
    ///
    /// # Complexity
    ///
    /// O(k) where k is the number of elements yielded; stops at the first
    /// missing element
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setkit::{set, Set};
    ///
    /// let set = set![1, 2, 3];
    ///
    /// assert!(set.contains_all([1, 2]));
    /// assert!(set.contains_all(&[2, 3]));
    /// assert!(set.contains_all(&set![1, 3]));
    /// assert!(!set.contains_all(vec![1, 4]));
    /// assert!(set.contains_all(Vec::<i32>::new()));
    /// ```
    pub fn contains_all<I>(&self, elements: I) -> bool
    where
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        elements.into_iter().all(|element| {
            let element: &T = element.borrow();
            self.inner.contains(element)
        })
    }

    /// Returns `true` if the set contains at least one element yielded by
    /// `elements`.
    ///
    /// An empty source returns `false`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setkit::set;
    ///
    /// let set = set![1, 2, 3];
    ///
    /// assert!(set.contains_any([1, 4]));
    /// assert!(!set.contains_any(&set![4, 5]));
    /// assert!(!set.contains_any(std::iter::empty::<i32>()));
    /// ```
    pub fn contains_any<I>(&self, elements: I) -> bool
    where
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        elements.into_iter().any(|element| {
            let element: &T = element.borrow();
            self.inner.contains(element)
        })
    }

    /// Returns `true` if every element of `self` is also in `other`.
    ///
    /// A set is always a subset of itself.
    ///
    /// # Complexity
    ///
    /// O(n) where n = `self.len()`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setkit::set;
    ///
    /// let subset = set![1, 2];
    /// let superset = set![1, 2, 3];
    ///
    /// assert!(subset.is_subset(&superset));
    /// assert!(!superset.is_subset(&subset));
    /// assert!(subset.is_subset(&subset));
    /// ```
    #[must_use]
    pub fn is_subset(&self, other: &Self) -> bool {
        self.len() <= other.len() && self.iter().all(|element| other.contains(element))
    }

    /// Returns `true` if every element of `other` is also in `self`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setkit::set;
    ///
    /// assert!(set![1, 2, 3].is_superset(&set![1, 2]));
    /// assert!(!set![1, 2].is_superset(&set![1, 2, 3]));
    /// ```
    #[inline]
    #[must_use]
    pub fn is_superset(&self, other: &Self) -> bool {
        other.is_subset(self)
    }

    /// Returns `true` if `self` is a subset of `other` and the two sets are
    /// not equal.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setkit::set;
    ///
    /// let set_a = set![1, 2, 3];
    /// let set_b = set![1, 2, 3, 4];
    ///
    /// assert!(set_a.is_proper_subset(&set_b));
    /// assert!(!set_b.is_proper_subset(&set_a));
    /// assert!(!set_a.is_proper_subset(&set_a));
    /// ```
    #[must_use]
    pub fn is_proper_subset(&self, other: &Self) -> bool {
        // A subset with fewer elements cannot be equal.
        self.len() < other.len() && self.is_subset(other)
    }

    /// Returns `true` if `self` is a superset of `other` and the two sets
    /// are not equal.
    #[inline]
    #[must_use]
    pub fn is_proper_superset(&self, other: &Self) -> bool {
        other.is_proper_subset(self)
    }

    /// Returns `true` if `self` and `other` have no elements in common.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setkit::set;
    ///
    /// assert!(set![1, 2].is_disjoint(&set![3, 4]));
    /// assert!(!set![1, 2].is_disjoint(&set![2, 3]));
    /// ```
    #[must_use]
    pub fn is_disjoint(&self, other: &Self) -> bool {
        // Iterate over the smaller set for better performance
        let (smaller, larger) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };

        !smaller.iter().any(|element| larger.contains(element))
    }

    /// Adds an element to the set.
    ///
    /// Returns `true` if the element was newly inserted and `false` if it
    /// was already present, in which case the set is unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setkit::Set;
    ///
    /// let mut set = Set::new();
    /// assert!(set.add(42));
    /// assert!(!set.add(42));
    /// assert_eq!(set.len(), 1);
    /// ```
    #[inline]
    pub fn add(&mut self, element: T) -> bool {
        self.inner.insert(element)
    }

    /// Adds every element yielded by `elements` to the set.
    ///
    /// Elements already present are left as they are. Returns the set itself
    /// for chaining. A source that never ends makes this call never return.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setkit::Set;
    ///
    /// let mut set = Set::new();
    /// set.add_all([1, 2]).add_all(vec![2, 3]).add_all(4..6);
    ///
    /// assert_eq!(set.len(), 5);
    /// ```
    pub fn add_all<I>(&mut self, elements: I) -> &mut Self
    where
        I: IntoIterator<Item = T>,
    {
        self.inner.extend(elements);
        self
    }

    /// Removes an element from the set.
    ///
    /// Returns `true` if the element was present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setkit::set;
    ///
    /// let mut set = set![1, 2];
    /// assert!(set.remove(&1));
    /// assert!(!set.remove(&1));
    /// assert_eq!(set.len(), 1);
    /// ```
    #[inline]
    pub fn remove<Q>(&mut self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.remove(element)
    }

    /// Removes every element yielded by `elements` from the set.
    ///
    /// Absent elements are ignored. Returns the set itself for chaining.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setkit::set;
    ///
    /// let mut set = set![1, 2, 3, 4, 5, 6];
    /// set.remove_all([1, 2]).remove_all(&set![3, 9]).remove_all(vec![4]);
    ///
    /// assert_eq!(set, set![5, 6]);
    /// ```
    pub fn remove_all<I>(&mut self, elements: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        for element in elements {
            let element: &T = element.borrow();
            self.inner.remove(element);
        }
        self
    }
}

impl<T, S> Set<T, S>
where
    T: Eq + Hash + Clone,
    S: BuildHasher + Default,
{
    /// Creates a new set holding clones of the elements of `source`.
    ///
    /// The two sets are independent: changing one does not affect the other.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setkit::{set, Set};
    ///
    /// let source = set![1, 2, 3];
    /// let mut copy = Set::from_set(&source);
    /// copy.add(4);
    ///
    /// assert_eq!(source.len(), 3);
    /// assert_eq!(copy.len(), 4);
    /// ```
    #[must_use]
    pub fn from_set(source: &Self) -> Self {
        let mut set = Self::with_options_and_hasher(
            SetOptions::new().with_capacity(source.len()),
            S::default(),
        );
        set.add_all(source.iter().cloned());
        set
    }

    /// Returns the union of two sets.
    ///
    /// The union contains all elements that are in either set.
    ///
    /// # Arguments
    ///
    /// * `other` - The other set to union with
    ///
    /// # Complexity
    ///
    /// O(n + m) where n and m are the sizes of the two sets
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setkit::set;
    ///
    /// let union = set![1, 2, 3].union(&set![2, 3, 4]);
    /// assert_eq!(union, set![1, 2, 3, 4]);
    /// ```
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let mut union = Self::from_set(self);
        union.add_all(other.iter().cloned());
        union
    }

    /// Returns the intersection of two sets.
    ///
    /// The intersection contains only elements that are in both sets.
    ///
    /// # Complexity
    ///
    /// O(min(n, m))
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setkit::set;
    ///
    /// let intersection = set![1, 2, 3].intersection(&set![2, 3, 4]);
    /// assert_eq!(intersection, set![2, 3]);
    /// ```
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        // Iterate over the smaller set for better performance
        let (smaller, larger) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };

        smaller.filter(|element| larger.contains(element))
    }

    /// Returns the difference of two sets.
    ///
    /// The difference contains elements that are in `self` but not in
    /// `other`. It is not symmetric: `a.difference(&b)` and
    /// `b.difference(&a)` generally differ.
    ///
    /// # Arguments
    ///
    /// * `other` - The set to subtract
    ///
    /// # Complexity
    ///
    /// O(n) where n = `self.len()`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setkit::set;
    ///
    /// let set_a = set![1, 2, 3, 4];
    /// let set_b = set![1, 2, 3];
    ///
    /// assert_eq!(set_a.difference(&set_b), set![4]);
    /// assert!(set_b.difference(&set_a).is_empty());
    /// ```
    #[must_use]
    pub fn difference(&self, other: &Self) -> Self {
        self.filter(|element| !other.contains(element))
    }

    /// Returns the symmetric difference of two sets.
    ///
    /// The symmetric difference contains elements that are in exactly one of
    /// the two sets.
    ///
    /// # Complexity
    ///
    /// O(n + m)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setkit::set;
    ///
    /// let set_a = set![1, 2, 3, 4, 5];
    /// let set_b = set![2, 4, 6];
    ///
    /// assert_eq!(set_a.symmetric_difference(&set_b), set![1, 3, 5, 6]);
    /// ```
    #[must_use]
    pub fn symmetric_difference(&self, other: &Self) -> Self {
        // (A - B) ∪ (B - A)
        let mut symmetric_difference = self.difference(other);
        symmetric_difference.add_all(
            other
                .iter()
                .filter(|element| !self.contains(*element))
                .cloned(),
        );
        symmetric_difference
    }

    /// Returns a new set containing only the elements that satisfy
    /// `predicate`. `self` is left unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setkit::set;
    ///
    /// let set = set![1, 2, 3, 4, 5];
    /// let evens = set.filter(|element| element % 2 == 0);
    ///
    /// assert_eq!(evens, set![2, 4]);
    /// assert_eq!(set.len(), 5);
    /// ```
    #[must_use]
    pub fn filter<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        self.iter()
            .filter(|&element| predicate(element))
            .cloned()
            .collect()
    }

    /// Returns the elements of the set as a vector, in unspecified order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setkit::set;
    ///
    /// let mut elements = set![3, 1, 2].to_vec();
    /// elements.sort_unstable();
    /// assert_eq!(elements, vec![1, 2, 3]);
    /// ```
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An iterator over the elements of a [`Set`].
pub struct SetIterator<'a, T> {
    inner: hash_set::Iter<'a, T>,
}

impl<'a, T> Iterator for SetIterator<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for SetIterator<'_, T> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for SetIterator<'_, T> {}

impl<T> Clone for SetIterator<'_, T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

/// An owning iterator over the elements of a [`Set`].
pub struct SetIntoIterator<T> {
    inner: hash_set::IntoIter<T>,
}

impl<T> Iterator for SetIntoIterator<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for SetIntoIterator<T> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for SetIntoIterator<T> {}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T, S: Default> Default for Set<T, S> {
    #[inline]
    fn default() -> Self {
        Self::with_hasher(S::default())
    }
}

impl<T, S> FromIterator<T> for Set<T, S>
where
    T: Eq + Hash,
    S: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::default();
        set.add_all(iter);
        set
    }
}

impl<T: Eq + Hash, S: BuildHasher> Extend<T> for Set<T, S> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.add_all(iter);
    }
}

impl<'a, T, S> Extend<&'a T> for Set<T, S>
where
    T: 'a + Eq + Hash + Copy,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.add_all(iter.into_iter().copied());
    }
}

impl<T, S> IntoIterator for Set<T, S> {
    type Item = T;
    type IntoIter = SetIntoIterator<T>;

    fn into_iter(self) -> Self::IntoIter {
        SetIntoIterator {
            inner: self.inner.into_iter(),
        }
    }
}

impl<'a, T, S> IntoIterator for &'a Set<T, S> {
    type Item = &'a T;
    type IntoIter = SetIterator<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Eq + Hash, const N: usize> From<[T; N]> for Set<T, DefaultHashBuilder> {
    /// Creates a set from the elements of an array. Duplicates collapse.
    fn from(elements: [T; N]) -> Self {
        let mut set = Self::with_capacity(N);
        set.add_all(elements);
        set
    }
}

impl<T: Eq + Hash> From<Vec<T>> for Set<T, DefaultHashBuilder> {
    fn from(elements: Vec<T>) -> Self {
        let mut set = Self::with_capacity(elements.len());
        set.add_all(elements);
        set
    }
}

impl<T: Eq + Hash + Clone> From<&[T]> for Set<T, DefaultHashBuilder> {
    fn from(elements: &[T]) -> Self {
        let mut set = Self::with_capacity(elements.len());
        set.add_all(elements.iter().cloned());
        set
    }
}

impl<T, S> From<HashSet<T, S>> for Set<T, S> {
    #[inline]
    fn from(inner: HashSet<T, S>) -> Self {
        Self { inner }
    }
}

impl<T, S> From<Set<T, S>> for HashSet<T, S> {
    #[inline]
    fn from(set: Set<T, S>) -> Self {
        set.inner
    }
}

impl<T: Eq + Hash, S: BuildHasher> PartialEq for Set<T, S> {
    fn eq(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false;
        }

        self.iter().all(|element| other.contains(element))
    }
}

impl<T: Eq + Hash, S: BuildHasher> Eq for Set<T, S> {}

impl<T: fmt::Debug, S> fmt::Debug for Set<T, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display, S> fmt::Display for Set<T, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        let mut first = true;
        for element in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "}}")
    }
}

// =============================================================================
// Operator Implementations
// =============================================================================

impl<T, S> BitOr<&Set<T, S>> for &Set<T, S>
where
    T: Eq + Hash + Clone,
    S: BuildHasher + Default,
{
    type Output = Set<T, S>;

    /// Returns the union of `self` and `rhs`.
    fn bitor(self, rhs: &Set<T, S>) -> Set<T, S> {
        self.union(rhs)
    }
}

impl<T, S> BitAnd<&Set<T, S>> for &Set<T, S>
where
    T: Eq + Hash + Clone,
    S: BuildHasher + Default,
{
    type Output = Set<T, S>;

    /// Returns the intersection of `self` and `rhs`.
    fn bitand(self, rhs: &Set<T, S>) -> Set<T, S> {
        self.intersection(rhs)
    }
}

impl<T, S> BitXor<&Set<T, S>> for &Set<T, S>
where
    T: Eq + Hash + Clone,
    S: BuildHasher + Default,
{
    type Output = Set<T, S>;

    /// Returns the symmetric difference of `self` and `rhs`.
    fn bitxor(self, rhs: &Set<T, S>) -> Set<T, S> {
        self.symmetric_difference(rhs)
    }
}

impl<T, S> Sub<&Set<T, S>> for &Set<T, S>
where
    T: Eq + Hash + Clone,
    S: BuildHasher + Default,
{
    type Output = Set<T, S>;

    /// Returns the difference of `self` and `rhs`.
    fn sub(self, rhs: &Set<T, S>) -> Set<T, S> {
        self.difference(rhs)
    }
}

// =============================================================================
// Serde Support
// =============================================================================

/// Upper bound on the capacity reserved from a deserializer's size hint.
#[cfg(feature = "serde")]
const MAX_PREALLOCATED_ELEMENTS: usize = 4096;

#[cfg(feature = "serde")]
impl<T: serde::Serialize, S> serde::Serialize for Set<T, S> {
    fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
    where
        Ser: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in self {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct SetVisitor<T, S> {
    marker: std::marker::PhantomData<fn() -> Set<T, S>>,
}

#[cfg(feature = "serde")]
impl<T, S> SetVisitor<T, S> {
    const fn new() -> Self {
        Self {
            marker: std::marker::PhantomData,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T, S> serde::de::Visitor<'de> for SetVisitor<T, S>
where
    T: serde::Deserialize<'de> + Eq + Hash,
    S: BuildHasher + Default,
{
    type Value = Set<T, S>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        let capacity = seq
            .size_hint()
            .unwrap_or(0)
            .min(MAX_PREALLOCATED_ELEMENTS);
        let mut set = Set::with_options_and_hasher(
            SetOptions::new().with_capacity(capacity),
            S::default(),
        );
        while let Some(element) = seq.next_element()? {
            set.add(element);
        }
        Ok(set)
    }
}

#[cfg(feature = "serde")]
impl<'de, T, S> serde::Deserialize<'de> for Set<T, S>
where
    T: serde::Deserialize<'de> + Eq + Hash,
    S: BuildHasher + Default,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(SetVisitor::new())
    }
}

// =============================================================================
// Rayon Support
// =============================================================================

#[cfg(feature = "rayon")]
mod parallel {
    use super::Set;
    use rayon::collections::hash_set;
    use rayon::iter::{
        FromParallelIterator, IntoParallelIterator, ParallelExtend, ParallelIterator,
    };
    use std::collections::HashSet;
    use std::hash::{BuildHasher, Hash};

    impl<T, S> IntoParallelIterator for Set<T, S>
    where
        T: Eq + Hash + Send,
        S: BuildHasher + Send,
    {
        type Item = T;
        type Iter = hash_set::IntoIter<T>;

        fn into_par_iter(self) -> Self::Iter {
            self.inner.into_par_iter()
        }
    }

    impl<'a, T, S> IntoParallelIterator for &'a Set<T, S>
    where
        T: Eq + Hash + Sync,
        S: BuildHasher + Sync,
    {
        type Item = &'a T;
        type Iter = hash_set::Iter<'a, T>;

        fn into_par_iter(self) -> Self::Iter {
            (&self.inner).into_par_iter()
        }
    }

    impl<T, S> FromParallelIterator<T> for Set<T, S>
    where
        T: Eq + Hash + Send,
        S: BuildHasher + Default + Send,
    {
        fn from_par_iter<I>(par_iter: I) -> Self
        where
            I: IntoParallelIterator<Item = T>,
        {
            Self {
                inner: HashSet::from_par_iter(par_iter),
            }
        }
    }

    impl<T, S> ParallelExtend<T> for Set<T, S>
    where
        T: Eq + Hash + Send,
        S: BuildHasher + Send,
    {
        fn par_extend<I>(&mut self, par_iter: I)
        where
            I: IntoParallelIterator<Item = T>,
        {
            self.inner.par_extend(par_iter);
        }
    }

    impl<T, S> Set<T, S>
    where
        T: Eq + Hash + Clone + Send + Sync,
        S: BuildHasher + Default + Send + Sync,
    {
        /// Returns a new set containing only the elements that satisfy
        /// `predicate`, evaluating the predicate in parallel.
        ///
        /// Produces the same set as [`Set::filter`].
        ///
        /// # Examples
        ///
        /// ```rust
        /// use setkit::Set;
        ///
        /// let set: Set<u64> = (0..1_000).collect();
        /// let multiples = set.par_filter(|element| element % 7 == 0);
        /// assert_eq!(multiples, set.filter(|element| element % 7 == 0));
        /// ```
        #[must_use]
        pub fn par_filter<P>(&self, predicate: P) -> Self
        where
            P: Fn(&T) -> bool + Sync + Send,
        {
            self.into_par_iter()
                .filter(|&element| predicate(element))
                .cloned()
                .collect()
        }
    }
}

// =============================================================================
// Tests
// =============================================================================


// =============================================================================
// Serde Tests
// =============================================================================

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_serialize_empty() {
        let set: Set<i32> = Set::new();
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, "[]");
    }

    #[rstest]
    fn test_serialize_single_element() {
        let json = serde_json::to_string(&set![42]).unwrap();
        assert_eq!(json, "[42]");
    }

    #[rstest]
    fn test_deserialize_deduplicates() {
        let set: Set<i32> = serde_json::from_str("[1,2,2,3,3,3]").unwrap();
        assert_eq!(set, set![1, 2, 3]);
    }

    /// Sequence source that claims far more elements than it yields.
    struct OverstatedSeq {
        elements: std::vec::IntoIter<u32>,
    }

    impl<'de> serde::de::SeqAccess<'de> for OverstatedSeq {
        type Error = serde::de::value::Error;

        fn next_element_seed<E>(&mut self, seed: E) -> Result<Option<E::Value>, Self::Error>
        where
            E: serde::de::DeserializeSeed<'de>,
        {
            use serde::de::IntoDeserializer;
            self.elements
                .next()
                .map(|element| {
                    seed.deserialize(IntoDeserializer::<'de, Self::Error>::into_deserializer(
                        element,
                    ))
                })
                .transpose()
        }

        fn size_hint(&self) -> Option<usize> {
            Some(usize::MAX)
        }
    }

    #[rstest]
    fn test_deserialize_caps_preallocation_from_size_hint() {
        use serde::de::Visitor;

        let seq = OverstatedSeq {
            elements: vec![3, 1, 3, 2].into_iter(),
        };
        let set: Set<u32> = SetVisitor::new().visit_seq(seq).unwrap();

        assert_eq!(set, set![1, 2, 3]);
        assert!(set.capacity() >= MAX_PREALLOCATED_ELEMENTS);
        assert!(set.capacity() <= 2 * MAX_PREALLOCATED_ELEMENTS);
    }

    #[rstest]
    fn test_deserialize_rejects_non_sequence() {
        let result: Result<Set<i32>, _> = serde_json::from_str("{\"a\":1}");
        assert!(result.is_err());
    }
}

// =============================================================================
// Rayon Tests
// =============================================================================
