//! Construction-time options for [`Set`](super::Set).

/// Configuration consumed when a [`Set`](super::Set) is created.
///
/// Options are hints only: they never change what a set contains, and they
/// are not retained by the set after construction. New hints are added as
/// builder methods, so existing callers keep compiling.
///
/// # Examples
///
/// ```rust
/// use setkit::{Set, SetOptions};
///
/// let set: Set<u64> = Set::with_options(SetOptions::new().with_capacity(128));
/// assert!(set.is_empty());
/// assert!(set.capacity() >= 128);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SetOptions {
    capacity: usize,
}

impl SetOptions {
    /// Creates options with every hint unset.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self { capacity: 0 }
    }

    /// Sets the number of elements the set should be able to hold without
    /// reallocating.
    ///
    /// A capacity of `0` leaves the backing storage unallocated.
    #[inline]
    #[must_use]
    pub const fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Returns the capacity hint.
    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }
}
