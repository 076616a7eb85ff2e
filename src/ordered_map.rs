use core::fmt;
use core::hash::{Hash, Hasher};
use core::iter::FusedIterator;
use core::ops::Index;

use compare::{Compare, Natural};

use crate::raw::{Handle, RawOrderedMap};

mod capacity;

/// An ordered map based on an unbalanced [binary search tree].
///
/// Keys are ordered by a comparator `C` chosen when the map is created. By
/// default it is the key type's [`Ord`] order ([`Natural`]); any
/// [`Compare`] implementation works, including closures
/// `Fn(&K, &K) -> Ordering` and boolean predicates wrapped in
/// [`LessThan`](crate::ordering::LessThan). The comparator must be a strict
/// weak ordering that does not change while the map holds keys.
///
/// Each pair lives in its own node. Nodes are never rotated, so the shape of
/// the tree is exactly the shape produced by the insertion order: random
/// input gives a height around `2 ln n`, but sorted input produces a chain and
/// every operation degrades to O(n). [`OrderedMap::height`] reports the
/// current height.
///
/// # Cursor
///
/// The map keeps one internal cursor on the "current" node. It is moved by
/// [`insert`], [`search`], [`upper_bound`], [`first`] and [`next`], and
/// read with [`current`]. A [`search`] miss or stepping past the last key
/// leaves it absent. Methods such as [`get`], [`iter`] and [`remove`] never
/// move it, except that removing the node it refers to clears it.
///
/// # Examples
///
/// ```
/// use bst_map::OrderedMap;
///
/// let mut map = OrderedMap::new();
/// for key in [10, 5, 15, 3, 7] {
///     map.insert(key, key * 100);
/// }
///
/// // Walk in key order with the cursor.
/// let mut keys = Vec::new();
/// let mut entry = map.first();
/// while let Some((key, _)) = entry {
///     keys.push(*key);
///     entry = map.next();
/// }
/// assert_eq!(keys, [3, 5, 7, 10, 15]);
///
/// // The smallest key not below 8.
/// assert_eq!(map.upper_bound(&8), Some((&10, &1000)));
/// assert_eq!(map.next(), Some((&15, &1500)));
/// ```
///
/// A custom order:
///
/// ```
/// use bst_map::OrderedMap;
///
/// let mut map = OrderedMap::with_comparator(|a: &i32, b: &i32| b.cmp(a));
/// map.extend([(1, "one"), (3, "three"), (2, "two")]);
/// assert_eq!(map.first(), Some((&3, &"three")));
/// ```
///
/// [binary search tree]: https://en.wikipedia.org/wiki/Binary_search_tree
/// [`insert`]: OrderedMap::insert
/// [`search`]: OrderedMap::search
/// [`upper_bound`]: OrderedMap::upper_bound
/// [`first`]: OrderedMap::first
/// [`next`]: OrderedMap::next
/// [`current`]: OrderedMap::current
/// [`get`]: OrderedMap::get
/// [`iter`]: OrderedMap::iter
/// [`remove`]: OrderedMap::remove
pub struct OrderedMap<K, V, C = Natural<K>> {
    raw: RawOrderedMap<K, V, C>,
}

/// An iterator over the entries of an `OrderedMap`, in key order.
///
/// This `struct` is created by the [`iter`] method on [`OrderedMap`]. It
/// walks parent links and does not touch the map's cursor.
///
/// # Examples
///
/// ```
/// use bst_map::OrderedMap;
///
/// let map = OrderedMap::from([(1, "a"), (2, "b")]);
/// let mut iter = map.iter();
/// assert_eq!(iter.next(), Some((&1, &"a")));
/// assert_eq!(iter.next_back(), Some((&2, &"b")));
/// assert_eq!(iter.next(), None);
/// ```
///
/// [`iter`]: OrderedMap::iter
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, K, V, C> {
    tree: &'a RawOrderedMap<K, V, C>,
    front: Option<Handle>,
    back: Option<Handle>,
    remaining: usize,
}

/// An owning iterator over the entries of an `OrderedMap`, sorted by key.
///
/// This `struct` is created by the [`into_iter`] method on [`OrderedMap`]
/// (provided by the [`IntoIterator`] trait).
///
/// [`into_iter`]: IntoIterator::into_iter
pub struct IntoIter<K, V> {
    inner: alloc::vec::IntoIter<(K, V)>,
}

/// An iterator over the keys of an `OrderedMap`.
///
/// This `struct` is created by the [`keys`] method on [`OrderedMap`].
///
/// [`keys`]: OrderedMap::keys
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Keys<'a, K, V, C> {
    inner: Iter<'a, K, V, C>,
}

/// An iterator over the values of an `OrderedMap`.
///
/// This `struct` is created by the [`values`] method on [`OrderedMap`].
///
/// [`values`]: OrderedMap::values
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Values<'a, K, V, C> {
    inner: Iter<'a, K, V, C>,
}

/// An owning iterator over the keys of an `OrderedMap`.
///
/// This `struct` is created by the [`into_keys`] method on [`OrderedMap`].
///
/// [`into_keys`]: OrderedMap::into_keys
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct IntoKeys<K, V> {
    inner: IntoIter<K, V>,
}

/// An owning iterator over the values of an `OrderedMap`.
///
/// This `struct` is created by the [`into_values`] method on [`OrderedMap`].
///
/// [`into_values`]: OrderedMap::into_values
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct IntoValues<K, V> {
    inner: IntoIter<K, V>,
}

impl<K: Ord, V> OrderedMap<K, V> {
    /// Makes a new, empty `OrderedMap` ordered by `K`'s [`Ord`] implementation.
    ///
    /// Does not allocate anything on its own.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_map::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// map.insert(1, "a");
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn new() -> OrderedMap<K, V> {
        OrderedMap::with_comparator(compare::natural())
    }
}

impl<K, V, C> OrderedMap<K, V, C> {
    /// Makes a new, empty `OrderedMap` ordered by `cmp`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_map::OrderedMap;
    /// use bst_map::ordering::{Compare, natural};
    ///
    /// let mut map = OrderedMap::with_comparator(natural().rev());
    /// map.insert(1, "a");
    /// map.insert(2, "b");
    /// assert_eq!(map.first(), Some((&2, &"b")));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub const fn with_comparator(cmp: C) -> OrderedMap<K, V, C> {
        OrderedMap {
            raw: RawOrderedMap::new(cmp),
        }
    }

    /// Returns a reference to the map's comparator.
    pub fn comparator(&self) -> &C {
        self.raw.comparator()
    }

    /// Returns the number of elements in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_map::OrderedMap;
    ///
    /// let mut a = OrderedMap::new();
    /// assert_eq!(a.len(), 0);
    /// a.insert(1, "a");
    /// assert_eq!(a.len(), 1);
    /// ```
    #[must_use]
    pub const fn len(&self) -> usize {
        self.raw.len()
    }

    /// Returns `true` if the map contains no elements.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Clears the map, removing all elements. The cursor becomes absent.
    ///
    /// # Complexity
    ///
    /// O(n)
    pub fn clear(&mut self) {
        self.raw.clear();
    }

    /// Returns the number of nodes on the longest path from the root to a leaf.
    ///
    /// The tree never rebalances: keys inserted in sorted order form a chain
    /// whose height equals their number.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_map::OrderedMap;
    ///
    /// let chain: OrderedMap<_, _> = (0..100).map(|k| (k, ())).collect();
    /// assert_eq!(chain.height(), 100);
    ///
    /// let bushy = OrderedMap::from([(2, ()), (1, ()), (3, ())]);
    /// assert_eq!(bushy.height(), 2);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n)
    #[must_use]
    pub fn height(&self) -> usize {
        self.raw.height()
    }

    /// Inserts a key-value pair, unless the map already holds an equal key.
    ///
    /// Returns `true` if the pair was inserted. On a duplicate the existing
    /// key and value are kept, nothing is allocated, and `key` and `value`
    /// are dropped.
    ///
    /// Either way the cursor ends up on the node holding the key.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_map::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// assert!(map.insert(37, "a"));
    /// assert!(!map.insert(37, "b"));
    /// assert_eq!(map[&37], "a");
    /// assert_eq!(map.current(), Some((&37, &"a")));
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if a new node is needed while the map already holds
    /// `u32::MAX` of them. [`try_insert`](OrderedMap::try_insert) reports
    /// that case as an error instead.
    ///
    /// # Complexity
    ///
    /// O(h), where h is the height of the tree.
    pub fn insert(&mut self, key: K, value: V) -> bool
    where
        C: Compare<K>,
    {
        self.raw.insert(key, value)
    }

    /// Removes a key from the map, returning the stored pair.
    ///
    /// The key is located with [`search`](OrderedMap::search), which moves
    /// the cursor to it (or clears the cursor if the key is absent). If the
    /// node has two children, its in-order successor's pair moves into it and
    /// the cursor is left there; otherwise the node is freed and the cursor
    /// becomes absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_map::OrderedMap;
    ///
    /// let mut map = OrderedMap::from([(5, 'e'), (3, 'c'), (8, 'h'), (7, 'g'), (9, 'i')]);
    /// assert_eq!(map.erase(&5), Some((5, 'e')));
    ///
    /// // The root had two children; its slot now holds the successor.
    /// assert_eq!(map.current(), Some((&7, &'g')));
    ///
    /// // A miss is a no-op, apart from clearing the cursor.
    /// assert_eq!(map.erase(&5), None);
    /// assert_eq!(map.current(), None);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(h)
    pub fn erase<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        C: Compare<Q, K>,
        Q: ?Sized,
    {
        self.raw.erase(key)
    }

    /// Looks up the pair with a key equal to `key`.
    ///
    /// A hit moves the cursor to it; a miss clears the cursor.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_map::OrderedMap;
    ///
    /// let mut map = OrderedMap::from([(1, "a"), (2, "b")]);
    /// assert_eq!(map.search(&1), Some((&1, &"a")));
    /// assert_eq!(map.next(), Some((&2, &"b")));
    ///
    /// assert_eq!(map.search(&3), None);
    /// assert_eq!(map.next(), None);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(h)
    pub fn search<Q>(&mut self, key: &Q) -> Option<(&K, &V)>
    where
        C: Compare<Q, K>,
        Q: ?Sized,
    {
        let handle = self.raw.search(key)?;
        Some(self.raw.node(handle).pair())
    }

    /// Returns the pair with the smallest key that is greater than or equal to `key`.
    ///
    /// A hit moves the cursor to it. If every key orders before `key`, returns
    /// `None` and leaves the cursor where it was.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_map::OrderedMap;
    ///
    /// let mut map = OrderedMap::from([(1, 'a'), (3, 'c'), (5, 'e'), (7, 'g')]);
    /// assert_eq!(map.upper_bound(&4), Some((&5, &'e')));
    /// assert_eq!(map.upper_bound(&5), Some((&5, &'e')));
    /// assert_eq!(map.upper_bound(&0), Some((&1, &'a')));
    /// assert_eq!(map.upper_bound(&8), None);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(h)
    pub fn upper_bound<Q>(&mut self, key: &Q) -> Option<(&K, &V)>
    where
        C: Compare<Q, K>,
        Q: ?Sized,
    {
        let handle = self.raw.upper_bound(key)?;
        Some(self.raw.node(handle).pair())
    }

    /// Moves the cursor to the pair with the minimum key and returns it.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_map::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// assert_eq!(map.first(), None);
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    /// assert_eq!(map.first(), Some((&1, &"a")));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(h)
    pub fn first(&mut self) -> Option<(&K, &V)> {
        let handle = self.raw.first()?;
        Some(self.raw.node(handle).pair())
    }

    /// Advances the cursor to the next pair in key order and returns it.
    ///
    /// Returns `None` if the cursor is absent or was on the last pair; the
    /// cursor is absent afterwards.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_map::OrderedMap;
    ///
    /// let mut map = OrderedMap::from([(1, "a"), (2, "b")]);
    /// assert_eq!(map.first(), Some((&1, &"a")));
    /// assert_eq!(map.next(), Some((&2, &"b")));
    /// assert_eq!(map.next(), None);
    ///
    /// // Once absent, the cursor stays absent.
    /// assert_eq!(map.next(), None);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(h) worst case, amortized O(1) over a full traversal.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<(&K, &V)> {
        let handle = self.raw.next()?;
        Some(self.raw.node(handle).pair())
    }

    /// Returns the pair under the cursor without moving it.
    #[must_use]
    pub fn current(&self) -> Option<(&K, &V)> {
        let handle = self.raw.cursor()?;
        Some(self.raw.node(handle).pair())
    }

    /// Returns the pair under the cursor, with a mutable reference to the value.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_map::OrderedMap;
    ///
    /// let mut map = OrderedMap::from([(1, 10), (2, 20)]);
    /// map.search(&2);
    /// if let Some((_, value)) = map.current_mut() {
    ///     *value += 1;
    /// }
    /// assert_eq!(map[&2], 21);
    /// ```
    pub fn current_mut(&mut self) -> Option<(&K, &mut V)> {
        let handle = self.raw.cursor()?;
        Some(self.raw.node_mut(handle).pair_mut())
    }

    /// Returns a reference to the value corresponding to the key. Does not move the cursor.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_map::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// map.insert(1, "a");
    /// assert_eq!(map.get(&1), Some(&"a"));
    /// assert_eq!(map.get(&2), None);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(h)
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        C: Compare<Q, K>,
        Q: ?Sized,
    {
        let handle = self.raw.find(key)?;
        Some(self.raw.node(handle).value())
    }

    /// Returns the stored key-value pair corresponding to the supplied key.
    /// Does not move the cursor.
    pub fn get_key_value<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        C: Compare<Q, K>,
        Q: ?Sized,
    {
        let handle = self.raw.find(key)?;
        Some(self.raw.node(handle).pair())
    }

    /// Returns a mutable reference to the value corresponding to the key.
    /// Does not move the cursor.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_map::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// map.insert(1, "a");
    /// if let Some(x) = map.get_mut(&1) {
    ///     *x = "b";
    /// }
    /// assert_eq!(map[&1], "b");
    /// ```
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        C: Compare<Q, K>,
        Q: ?Sized,
    {
        let handle = self.raw.find(key)?;
        Some(self.raw.node_mut(handle).value_mut())
    }

    /// Returns `true` if the map contains a value for the specified key.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        C: Compare<Q, K>,
        Q: ?Sized,
    {
        self.raw.find(key).is_some()
    }

    /// Removes a key from the map, returning the value if the key was present.
    ///
    /// Unlike [`erase`](OrderedMap::erase) this does not move the cursor to
    /// the key first. A cursor on the freed node becomes absent; a cursor on
    /// the successor whose pair moves up follows that pair.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_map::OrderedMap;
    ///
    /// let mut map = OrderedMap::from([(1, "a"), (2, "b")]);
    /// map.search(&2);
    /// assert_eq!(map.remove(&1), Some("a"));
    /// assert_eq!(map.remove(&1), None);
    /// assert_eq!(map.current(), Some((&2, &"b")));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(h)
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        C: Compare<Q, K>,
        Q: ?Sized,
    {
        self.raw.remove_entry(key).map(|(_, value)| value)
    }

    /// Removes a key from the map, returning the stored key and value if the
    /// key was present. Cursor handling is the same as [`remove`](OrderedMap::remove).
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        C: Compare<Q, K>,
        Q: ?Sized,
    {
        self.raw.remove_entry(key)
    }

    /// Returns the pair with the minimum key without moving the cursor.
    ///
    /// # Complexity
    ///
    /// O(h)
    #[must_use]
    pub fn first_key_value(&self) -> Option<(&K, &V)> {
        let handle = self.raw.first_handle()?;
        Some(self.raw.node(handle).pair())
    }

    /// Returns the pair with the maximum key without moving the cursor.
    ///
    /// # Complexity
    ///
    /// O(h)
    #[must_use]
    pub fn last_key_value(&self) -> Option<(&K, &V)> {
        let handle = self.raw.last_handle()?;
        Some(self.raw.node(handle).pair())
    }

    /// Removes and returns the pair with the minimum key.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_map::OrderedMap;
    ///
    /// let mut map = OrderedMap::from([(1, "a"), (2, "b")]);
    /// while let Some((key, _val)) = map.pop_first() {
    ///     assert!(map.iter().all(|(k, _v)| *k > key));
    /// }
    /// assert!(map.is_empty());
    /// ```
    pub fn pop_first(&mut self) -> Option<(K, V)> {
        self.raw.pop_first()
    }

    /// Removes and returns the pair with the maximum key.
    pub fn pop_last(&mut self) -> Option<(K, V)> {
        self.raw.pop_last()
    }

    /// Gets an iterator over the entries of the map, sorted by key.
    ///
    /// The iterator does not use or move the cursor.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_map::OrderedMap;
    ///
    /// let map = OrderedMap::from([(3, "c"), (2, "b"), (1, "a")]);
    /// let (first_key, first_value) = map.iter().next().unwrap();
    /// assert_eq!((*first_key, *first_value), (1, "a"));
    /// ```
    pub fn iter(&self) -> Iter<'_, K, V, C> {
        Iter {
            tree: &self.raw,
            front: self.raw.first_handle(),
            back: self.raw.last_handle(),
            remaining: self.raw.len(),
        }
    }

    /// Gets an iterator over the keys of the map, in sorted order.
    pub fn keys(&self) -> Keys<'_, K, V, C> {
        Keys { inner: self.iter() }
    }

    /// Gets an iterator over the values of the map, in order by key.
    pub fn values(&self) -> Values<'_, K, V, C> {
        Values { inner: self.iter() }
    }

    /// Creates a consuming iterator visiting all the keys, in sorted order.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_map::OrderedMap;
    ///
    /// let map = OrderedMap::from([(2, "b"), (1, "a")]);
    /// let keys: Vec<i32> = map.into_keys().collect();
    /// assert_eq!(keys, [1, 2]);
    /// ```
    pub fn into_keys(self) -> IntoKeys<K, V> {
        IntoKeys {
            inner: self.into_iter(),
        }
    }

    /// Creates a consuming iterator visiting all the values, in order by key.
    pub fn into_values(self) -> IntoValues<K, V> {
        IntoValues {
            inner: self.into_iter(),
        }
    }
}

impl<K: Clone, V: Clone, C: Clone> Clone for OrderedMap<K, V, C> {
    fn clone(&self) -> Self {
        OrderedMap { raw: self.raw.clone() }
    }
}

impl<K: Hash, V: Hash, C> Hash for OrderedMap<K, V, C> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for (k, v) in self {
            k.hash(state);
            v.hash(state);
        }
    }
}

impl<K: PartialEq, V: PartialEq, C> PartialEq for OrderedMap<K, V, C> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<K: Eq, V: Eq, C> Eq for OrderedMap<K, V, C> {}

impl<K: fmt::Debug, V: fmt::Debug, C> fmt::Debug for OrderedMap<K, V, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K: Ord, V> Default for OrderedMap<K, V> {
    fn default() -> Self {
        OrderedMap::new()
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for OrderedMap<K, V> {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = OrderedMap::new();
        map.extend(iter);
        map
    }
}

impl<K, V, C: Compare<K>> Extend<(K, V)> for OrderedMap<K, V, C> {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl<'a, K: Copy, V: Copy, C: Compare<K>> Extend<(&'a K, &'a V)> for OrderedMap<K, V, C> {
    fn extend<T: IntoIterator<Item = (&'a K, &'a V)>>(&mut self, iter: T) {
        for (&k, &v) in iter {
            self.insert(k, v);
        }
    }
}

impl<'a, K, V, C> IntoIterator for &'a OrderedMap<K, V, C> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V, C>;

    fn into_iter(self) -> Iter<'a, K, V, C> {
        self.iter()
    }
}

impl<K, V, C> IntoIterator for OrderedMap<K, V, C> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    /// Gets an owning iterator over the entries of the map, sorted by key.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_map::OrderedMap;
    ///
    /// let map = OrderedMap::from([(2, "b"), (1, "a")]);
    /// let mut iter = map.into_iter();
    /// assert_eq!(iter.next(), Some((1, "a")));
    /// assert_eq!(iter.next_back(), Some((2, "b")));
    /// ```
    fn into_iter(mut self) -> IntoIter<K, V> {
        IntoIter {
            inner: self.raw.drain_to_vec().into_iter(),
        }
    }
}

impl<K, Q, V, C> Index<&Q> for OrderedMap<K, V, C>
where
    C: Compare<Q, K>,
    Q: ?Sized,
{
    type Output = V;

    /// Returns a reference to the value corresponding to the supplied key.
    ///
    /// # Panics
    ///
    /// Panics if the key is not present in the map.
    fn index(&self, key: &Q) -> &V {
        self.get(key).expect("no entry found for key")
    }
}

impl<K: Ord, V, const N: usize> From<[(K, V); N]> for OrderedMap<K, V> {
    fn from(arr: [(K, V); N]) -> Self {
        arr.into_iter().collect()
    }
}

impl<'a, K: 'a, V: 'a, C> Iterator for Iter<'a, K, V, C> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let handle = self.front?;
        self.remaining -= 1;
        self.front = self.tree.successor(handle);
        Some(self.tree.node(handle).pair())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, K: 'a, V: 'a, C> DoubleEndedIterator for Iter<'a, K, V, C> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let handle = self.back?;
        self.remaining -= 1;
        self.back = self.tree.predecessor(handle);
        Some(self.tree.node(handle).pair())
    }
}

impl<K, V, C> ExactSizeIterator for Iter<'_, K, V, C> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<K, V, C> FusedIterator for Iter<'_, K, V, C> {}

impl<K, V, C> fmt::Debug for Iter<'_, K, V, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter").field("remaining", &self.remaining).finish()
    }
}

impl<K, V, C> Clone for Iter<'_, K, V, C> {
    fn clone(&self) -> Self {
        Iter {
            tree: self.tree,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<(K, V)> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for IntoIter<K, V> {
    fn next_back(&mut self) -> Option<(K, V)> {
        self.inner.next_back()
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V> FusedIterator for IntoIter<K, V> {}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for IntoIter<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.inner.as_slice()).finish()
    }
}

impl<'a, K, V, C> Iterator for Keys<'a, K, V, C> {
    type Item = &'a K;

    fn next(&mut self) -> Option<&'a K> {
        self.inner.next().map(|(k, _)| k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V, C> DoubleEndedIterator for Keys<'_, K, V, C> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(k, _)| k)
    }
}

impl<K, V, C> ExactSizeIterator for Keys<'_, K, V, C> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V, C> FusedIterator for Keys<'_, K, V, C> {}

impl<K, V, C> Clone for Keys<'_, K, V, C> {
    fn clone(&self) -> Self {
        Keys {
            inner: self.inner.clone(),
        }
    }
}

impl<K: fmt::Debug, V, C> fmt::Debug for Keys<'_, K, V, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, K, V, C> Iterator for Values<'a, K, V, C> {
    type Item = &'a V;

    fn next(&mut self) -> Option<&'a V> {
        self.inner.next().map(|(_, v)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V, C> DoubleEndedIterator for Values<'_, K, V, C> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(_, v)| v)
    }
}

impl<K, V, C> ExactSizeIterator for Values<'_, K, V, C> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V, C> FusedIterator for Values<'_, K, V, C> {}

impl<K, V, C> Clone for Values<'_, K, V, C> {
    fn clone(&self) -> Self {
        Values {
            inner: self.inner.clone(),
        }
    }
}

impl<K, V: fmt::Debug, C> fmt::Debug for Values<'_, K, V, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<K, V> Iterator for IntoKeys<K, V> {
    type Item = K;

    fn next(&mut self) -> Option<K> {
        self.inner.next().map(|(k, _)| k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for IntoKeys<K, V> {
    fn next_back(&mut self) -> Option<K> {
        self.inner.next_back().map(|(k, _)| k)
    }
}

impl<K, V> ExactSizeIterator for IntoKeys<K, V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V> FusedIterator for IntoKeys<K, V> {}

impl<K: fmt::Debug, V> fmt::Debug for IntoKeys<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.inner.inner.as_slice().iter().map(|(k, _)| k)).finish()
    }
}

impl<K, V> Iterator for IntoValues<K, V> {
    type Item = V;

    fn next(&mut self) -> Option<V> {
        self.inner.next().map(|(_, v)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for IntoValues<K, V> {
    fn next_back(&mut self) -> Option<V> {
        self.inner.next_back().map(|(_, v)| v)
    }
}

impl<K, V> ExactSizeIterator for IntoValues<K, V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V> FusedIterator for IntoValues<K, V> {}

impl<K, V: fmt::Debug> fmt::Debug for IntoValues<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.inner.inner.as_slice().iter().map(|(_, v)| v)).finish()
    }
}
