use alloc::collections::TryReserveError;

use compare::Compare;

use super::OrderedMap;
use crate::raw::RawOrderedMap;

impl<K: Ord, V> OrderedMap<K, V> {
    /// Creates an empty map with room for at least `capacity` nodes.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_map::OrderedMap;
    ///
    /// let map: OrderedMap<i32, i32> = OrderedMap::with_capacity(32);
    /// assert!(map.is_empty());
    /// assert!(map.capacity() >= 32);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(capacity) for memory allocation.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        OrderedMap::with_capacity_and_comparator(capacity, compare::natural())
    }
}

impl<K, V, C> OrderedMap<K, V, C> {
    /// Creates an empty map ordered by `cmp`, with room for at least `capacity` nodes.
    #[must_use]
    pub fn with_capacity_and_comparator(capacity: usize, cmp: C) -> Self {
        OrderedMap {
            raw: RawOrderedMap::with_capacity(capacity, cmp),
        }
    }

    /// Returns the number of nodes the map can hold without reallocating.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.raw.capacity()
    }

    /// Inserts a key-value pair like [`insert`](OrderedMap::insert), but
    /// reports allocation failure instead of aborting.
    ///
    /// On `Err` the map and its cursor are unchanged and the pair is dropped.
    ///
    /// # Errors
    ///
    /// Returns [`TryReserveError`] if room for a new node cannot be allocated,
    /// or if the map already holds as many nodes as it can address.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_map::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// assert_eq!(map.try_insert(1, "a"), Ok(true));
    /// assert_eq!(map.try_insert(1, "b"), Ok(false));
    /// assert_eq!(map[&1], "a");
    /// ```
    pub fn try_insert(&mut self, key: K, value: V) -> Result<bool, TryReserveError>
    where
        C: Compare<K>,
    {
        self.raw.try_insert(key, value)
    }
}
