//! An ordered map backed by an unbalanced order-statistic binary search tree.

use alloc::vec::Vec;
use core::borrow::Borrow;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::iter::FusedIterator;
use core::ops::Index;

use crate::error::Result;
use crate::raw::{RawTree, Side, Spine};

mod capacity;
mod order_statistic;

pub use crate::Rank;

/// An ordered map based on an unbalanced [binary search tree].
///
/// Given a key type with a [total order], the map stores its entries in key order.
/// That means that keys must be of a type that implements the [`Ord`] trait. Every node
/// caches the number of entries in its subtree, which turns rank and select queries into a
/// single walk from the root.
///
/// The tree is never rebalanced. Its shape, and therefore the cost of every operation,
/// depends on the order in which keys were inserted: random insertion orders give
/// logarithmic depth, sorted insertion orders give a path of depth n. Removing a node with
/// two children promotes its in-order successor (Hibbard deletion), which over many
/// deletions skews the tree to the left.
///
/// It is a logic error for a key to be modified in such a way that the key's ordering relative
/// to any other key, as determined by the [`Ord`] trait, changes while it is in the map. The
/// behavior resulting from such a logic error is not specified, but will be encapsulated to the
/// `OrderedMap` that observed the logic error and not result in undefined behavior.
///
/// # Examples
///
/// ```
/// use ordered_bst::OrderedMap;
///
/// let mut map = OrderedMap::new();
/// for (key, value) in [(5, "e"), (3, "c"), (8, "h"), (1, "a"), (4, "d"), (7, "g"), (9, "i")] {
///     map.put(key, value);
/// }
///
/// let keys: Vec<_> = map.keys().copied().collect();
/// assert_eq!(keys, [1, 3, 4, 5, 7, 8, 9]);
///
/// assert_eq!(map.rank(&7), Some(4));
/// assert_eq!(map.select_key(4), Some(&7));
/// assert_eq!(map.floor_key(&6), Some(&5));
/// assert_eq!(map.ceiling_key(&6), Some(&7));
///
/// map.delete(&5);
/// let keys: Vec<_> = map.keys().copied().collect();
/// assert_eq!(keys, [1, 3, 4, 7, 8, 9]);
/// ```
///
/// [binary search tree]: https://en.wikipedia.org/wiki/Binary_search_tree
/// [total order]: https://en.wikipedia.org/wiki/Total_order
pub struct OrderedMap<K, V> {
    raw: RawTree<K, V>,
}

/// An iterator over the entries of an `OrderedMap`, in ascending key order.
///
/// This `struct` is created by the [`iter`] method on [`OrderedMap`].
///
/// [`iter`]: OrderedMap::iter
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, K, V> {
    tree: &'a RawTree<K, V>,
    // Nodes whose left subtrees have been yielded from the front, deepest last.
    front: Spine,
    // Nodes whose right subtrees have been yielded from the back, deepest last.
    back: Spine,
    remaining: usize,
}

/// An iterator over the keys of an `OrderedMap`.
///
/// This `struct` is created by the [`keys`] method on [`OrderedMap`].
///
/// [`keys`]: OrderedMap::keys
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Keys<'a, K, V> {
    inner: Iter<'a, K, V>,
}

/// An iterator over the values of an `OrderedMap`, in order by key.
///
/// This `struct` is created by the [`values`] method on [`OrderedMap`].
///
/// [`values`]: OrderedMap::values
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Values<'a, K, V> {
    inner: Iter<'a, K, V>,
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

impl<K, V> OrderedMap<K, V> {
    /// Makes a new, empty `OrderedMap`.
    ///
    /// Does not allocate anything on its own.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_bst::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// map.put(1, "a");
    /// ```
    #[must_use]
    pub const fn new() -> OrderedMap<K, V> {
        OrderedMap { raw: RawTree::new() }
    }

    /// Clears the map, removing all elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_bst::OrderedMap;
    ///
    /// let mut a = OrderedMap::new();
    /// a.put(1, "a");
    /// a.clear();
    /// assert!(a.is_empty());
    /// ```
    pub fn clear(&mut self) {
        self.raw.clear();
    }

    /// Returns the number of entries in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_bst::OrderedMap;
    ///
    /// let mut a = OrderedMap::new();
    /// assert_eq!(a.size(), 0);
    /// a.put(1, "a");
    /// a.put(1, "b");
    /// assert_eq!(a.size(), 1);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn size(&self) -> usize {
        self.raw.len()
    }

    /// Returns `true` if the map contains no elements.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Returns the number of nodes on the longest path from the root to a leaf, or 0 for
    /// an empty map.
    ///
    /// The height is the worst-case number of comparisons for a lookup and is determined
    /// entirely by the insertion and deletion history.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_bst::OrderedMap;
    ///
    /// let balanced = OrderedMap::from([(2, ()), (1, ()), (3, ())]);
    /// assert_eq!(balanced.height(), 2);
    ///
    /// let degenerate = OrderedMap::from([(1, ()), (2, ()), (3, ())]);
    /// assert_eq!(degenerate.height(), 3);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n)
    #[must_use]
    pub fn height(&self) -> usize {
        self.raw.height()
    }

    /// Returns the smallest key in the map, or `None` if it is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_bst::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// assert_eq!(map.min_key(), None);
    /// map.put(2, "b");
    /// map.put(1, "a");
    /// assert_eq!(map.min_key(), Some(&1));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(depth)
    #[must_use]
    pub fn min_key(&self) -> Option<&K> {
        self.min_key_value().map(|(k, _)| k)
    }

    /// Returns the largest key in the map, or `None` if it is empty.
    ///
    /// # Complexity
    ///
    /// O(depth)
    #[must_use]
    pub fn max_key(&self) -> Option<&K> {
        self.max_key_value().map(|(k, _)| k)
    }

    /// Returns the entry with the smallest key.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_bst::OrderedMap;
    ///
    /// let map = OrderedMap::from([(2, "b"), (1, "a")]);
    /// assert_eq!(map.min_key_value(), Some((&1, &"a")));
    /// ```
    #[must_use]
    pub fn min_key_value(&self) -> Option<(&K, &V)> {
        self.raw.first_key_value()
    }

    /// Returns the entry with the largest key.
    #[must_use]
    pub fn max_key_value(&self) -> Option<(&K, &V)> {
        self.raw.last_key_value()
    }

    /// Removes and returns the entry with the smallest key.
    ///
    /// The removed node is replaced in its parent by its right subtree.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyContainer`](crate::Error::EmptyContainer) if the map is empty;
    /// the map is not modified.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_bst::{Error, OrderedMap};
    ///
    /// let mut map = OrderedMap::from([(1, "a"), (2, "b")]);
    /// assert_eq!(map.delete_min(), Ok((1, "a")));
    /// assert_eq!(map.min_key(), Some(&2));
    /// assert_eq!(map.delete_min(), Ok((2, "b")));
    /// assert_eq!(map.delete_min(), Err(Error::EmptyContainer { operation: "delete_min" }));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(depth)
    pub fn delete_min(&mut self) -> Result<(K, V)> {
        self.raw.pop_first()
    }

    /// Removes and returns the entry with the largest key.
    ///
    /// The removed node is replaced in its parent by its left subtree.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyContainer`](crate::Error::EmptyContainer) if the map is empty;
    /// the map is not modified.
    ///
    /// # Complexity
    ///
    /// O(depth)
    pub fn delete_max(&mut self) -> Result<(K, V)> {
        self.raw.pop_last()
    }

    /// Gets an iterator over the entries of the map, sorted by key.
    ///
    /// Each call walks the current tree afresh.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_bst::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// map.put(3, "c");
    /// map.put(2, "b");
    /// map.put(1, "a");
    ///
    /// for (key, value) in map.iter() {
    ///     println!("{key}: {value}");
    /// }
    ///
    /// let (first_key, first_value) = map.iter().next().unwrap();
    /// assert_eq!((*first_key, *first_value), (1, "a"));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(depth) to create the iterator; each iteration step is O(1) amortized.
    pub fn iter(&self) -> Iter<'_, K, V> {
        let tree = &self.raw;
        let mut front = Spine::new();
        let mut back = Spine::new();
        tree.push_spine(&mut front, tree.root(), Side::Left);
        tree.push_spine(&mut back, tree.root(), Side::Right);

        Iter {
            tree,
            front,
            back,
            remaining: tree.len(),
        }
    }

    /// Gets an iterator over the keys of the map, in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_bst::OrderedMap;
    ///
    /// let mut a = OrderedMap::new();
    /// a.put(2, "b");
    /// a.put(1, "a");
    ///
    /// let keys: Vec<_> = a.keys().cloned().collect();
    /// assert_eq!(keys, [1, 2]);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n) to walk all keys.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys { inner: self.iter() }
    }

    /// Gets an iterator over the values of the map, in order by key.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_bst::OrderedMap;
    ///
    /// let mut a = OrderedMap::new();
    /// a.put(1, "hello");
    /// a.put(2, "goodbye");
    ///
    /// let values: Vec<&str> = a.values().cloned().collect();
    /// assert_eq!(values, ["hello", "goodbye"]);
    /// ```
    pub fn values(&self) -> Values<'_, K, V> {
        Values { inner: self.iter() }
    }
}

impl<K: Ord, V> OrderedMap<K, V> {
    /// Returns a reference to the value corresponding to the key.
    ///
    /// The key may be any borrowed form of the map's key type, but the ordering
    /// on the borrowed form *must* match the ordering on the key type.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_bst::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// map.put(1, "a");
    /// assert_eq!(map.get(&1), Some(&"a"));
    /// assert_eq!(map.get(&2), None);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(depth)
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.get_key_value(key).map(|(_, v)| v)
    }

    /// Returns the stored key and its value for the supplied key.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_bst::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// map.put(String::from("apple"), 3);
    /// assert_eq!(map.get_key_value("apple"), Some((&String::from("apple"), &3)));
    /// ```
    pub fn get_key_value<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.get_key_value(key)
    }

    /// Returns a mutable reference to the value corresponding to the key.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_bst::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// map.put(1, "a");
    /// if let Some(x) = map.get_mut(&1) {
    ///     *x = "b";
    /// }
    /// assert_eq!(map[&1], "b");
    /// ```
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.get_mut(key)
    }

    /// Returns `true` if the map contains a value for the specified key.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_bst::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// map.put(1, None::<&str>);
    /// assert!(map.contains(&1));
    /// assert!(!map.contains(&2));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(depth)
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.search(key).is_some()
    }

    /// Inserts a key-value pair into the map.
    ///
    /// If the map did not have this key present, a new leaf is attached where the search
    /// for it ended and `None` is returned.
    ///
    /// If the map did have this key present, the value is updated in place, and the old
    /// value is returned. The key is not updated, and the size of the map does not change.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_bst::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// assert_eq!(map.put(37, "a"), None);
    /// assert_eq!(map.is_empty(), false);
    ///
    /// map.put(37, "b");
    /// assert_eq!(map.put(37, "c"), Some("b"));
    /// assert_eq!(map[&37], "c");
    /// ```
    ///
    /// # Complexity
    ///
    /// O(depth)
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        self.raw.insert(key, value)
    }

    /// Removes a key from the map, returning the value at the key if the key was
    /// previously in the map. Removing an absent key leaves the map unchanged.
    ///
    /// A node with two children is replaced by its in-order successor.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_bst::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// map.put(1, "a");
    /// assert_eq!(map.delete(&1), Some("a"));
    /// assert_eq!(map.delete(&1), None);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(depth)
    pub fn delete<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.remove_entry(key).map(|(_, v)| v)
    }

    /// Returns the largest key less than or equal to `key`, or `None` if every key in
    /// the map is greater.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_bst::OrderedMap;
    ///
    /// let map = OrderedMap::from([(10, ()), (20, ()), (30, ())]);
    /// assert_eq!(map.floor_key(&20), Some(&20));
    /// assert_eq!(map.floor_key(&25), Some(&20));
    /// assert_eq!(map.floor_key(&5), None);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(depth)
    pub fn floor_key<Q>(&self, key: &Q) -> Option<&K>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.floor(key).map(|handle| self.raw.node(handle).key())
    }

    /// Returns the smallest key greater than or equal to `key`, or `None` if every key
    /// in the map is smaller.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_bst::OrderedMap;
    ///
    /// let map = OrderedMap::from([(10, ()), (20, ()), (30, ())]);
    /// assert_eq!(map.ceiling_key(&20), Some(&20));
    /// assert_eq!(map.ceiling_key(&25), Some(&30));
    /// assert_eq!(map.ceiling_key(&35), None);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(depth)
    pub fn ceiling_key<Q>(&self, key: &Q) -> Option<&K>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.ceiling(key).map(|handle| self.raw.node(handle).key())
    }
}

impl<K: Clone, V: Clone> Clone for OrderedMap<K, V> {
    fn clone(&self) -> Self {
        OrderedMap { raw: self.raw.clone() }
    }
}

impl<K: Hash, V: Hash> Hash for OrderedMap<K, V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.size().hash(state);
        for (k, v) in self {
            k.hash(state);
            v.hash(state);
        }
    }
}

// Equality is by contents; two maps holding the same entries compare equal whatever
// their tree shapes.
impl<K: PartialEq, V: PartialEq> PartialEq for OrderedMap<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.size() == other.size() && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<K: Eq, V: Eq> Eq for OrderedMap<K, V> {}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for OrderedMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V> Default for OrderedMap<K, V> {
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

impl<K: Ord, V> Extend<(K, V)> for OrderedMap<K, V> {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (k, v) in iter {
            self.put(k, v);
        }
    }
}

impl<'a, K, V> IntoIterator for &'a OrderedMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Iter<'a, K, V> {
        self.iter()
    }
}

impl<K, V> IntoIterator for OrderedMap<K, V> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    /// Gets an owning iterator over the entries of the map, sorted by key.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_bst::OrderedMap;
    ///
    /// let map = OrderedMap::from([(2, "b"), (1, "a")]);
    /// let mut iter = map.into_iter();
    /// assert_eq!(iter.next(), Some((1, "a")));
    /// assert_eq!(iter.next_back(), Some((2, "b")));
    /// ```
    fn into_iter(mut self) -> IntoIter<K, V> {
        let entries: Vec<(K, V)> = self.raw.drain_to_vec();
        IntoIter {
            inner: entries.into_iter(),
        }
    }
}

impl<K, Q, V> Index<&Q> for OrderedMap<K, V>
where
    K: Borrow<Q> + Ord,
    Q: ?Sized + Ord,
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

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let tree = self.tree;
        let node = tree.node(self.front.pop()?);
        tree.push_spine(&mut self.front, node.right(), Side::Left);
        self.remaining -= 1;
        Some((node.key(), node.value()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> DoubleEndedIterator for Iter<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let tree = self.tree;
        let node = tree.node(self.back.pop()?);
        tree.push_spine(&mut self.back, node.left(), Side::Right);
        self.remaining -= 1;
        Some((node.key(), node.value()))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Iter {
            tree: self.tree,
            front: self.front.clone(),
            back: self.back.clone(),
            remaining: self.remaining,
        }
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Iter<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, _)| k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for Keys<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(k, _)| k)
    }
}

impl<K, V> ExactSizeIterator for Keys<'_, K, V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V> FusedIterator for Keys<'_, K, V> {}

impl<K, V> Clone for Keys<'_, K, V> {
    fn clone(&self) -> Self {
        Keys {
            inner: self.inner.clone(),
        }
    }
}

impl<K: fmt::Debug, V> fmt::Debug for Keys<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, v)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for Values<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(_, v)| v)
    }
}

impl<K, V> ExactSizeIterator for Values<'_, K, V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V> FusedIterator for Values<'_, K, V> {}

impl<K, V> Clone for Values<'_, K, V> {
    fn clone(&self) -> Self {
        Values {
            inner: self.inner.clone(),
        }
    }
}

impl<K, V: fmt::Debug> fmt::Debug for Values<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for IntoIter<K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
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

impl<K, V> Default for IntoIter<K, V> {
    /// Creates an empty `ordered_map::IntoIter`.
    ///
    /// ```
    /// # use ordered_bst::ordered_map;
    /// let iter: ordered_map::IntoIter<u8, u8> = Default::default();
    /// assert_eq!(iter.len(), 0);
    /// ```
    fn default() -> Self {
        IntoIter {
            inner: Vec::new().into_iter(),
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use alloc::format;
    use alloc::vec;

    #[test]
    fn iterator_meets_in_the_middle() {
        let map: OrderedMap<i32, i32> = (0..9).map(|k| ((k * 5) % 9, k)).collect();
        let mut iter = map.keys();
        assert_eq!(iter.len(), 9);
        assert_eq!(iter.next(), Some(&0));
        assert_eq!(iter.next_back(), Some(&8));
        assert_eq!(iter.next_back(), Some(&7));
        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.len(), 5);

        let rest: Vec<_> = iter.by_ref().collect();
        assert_eq!(rest, vec![&2, &3, &4, &5, &6]);
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);
    }

    #[test]
    fn reversed_keys_on_degenerate_tree() {
        let map: OrderedMap<u8, ()> = (0..50).map(|k| (k, ())).collect();
        let keys: Vec<u8> = map.keys().rev().copied().collect();
        let expected: Vec<u8> = (0..50).rev().collect();
        assert_eq!(keys, expected);
    }

    #[test]
    fn debug_formats_as_map() {
        let map = OrderedMap::from([(2, 'b'), (1, 'a')]);
        assert_eq!(format!("{map:?}"), "{1: 'a', 2: 'b'}");
        assert_eq!(format!("{:?}", map.keys()), "[1, 2]");
        assert_eq!(format!("{:?}", map.values()), "['a', 'b']");
    }

    #[test]
    fn equality_ignores_shape() {
        let ascending = OrderedMap::from([(1, ()), (2, ()), (3, ())]);
        let balanced = OrderedMap::from([(2, ()), (1, ()), (3, ())]);
        assert_ne!(ascending.height(), balanced.height());
        assert_eq!(ascending, balanced);
    }

    #[test]
    fn into_iter_is_sorted_and_double_ended() {
        let map = OrderedMap::from([(3, "c"), (1, "a"), (2, "b")]);
        let mut iter = map.into_iter();
        assert_eq!(iter.len(), 3);
        assert_eq!(iter.next_back(), Some((3, "c")));
        assert_eq!(iter.collect::<Vec<_>>(), vec![(1, "a"), (2, "b")]);
    }

    #[test]
    #[should_panic(expected = "no entry found for key")]
    fn index_missing_key_panics() {
        let map = OrderedMap::from([(1, 1)]);
        let _ = map[&2];
    }
}
