use core::borrow::Borrow;
use core::ops::{Index, IndexMut};

use super::OrderedMap;
use crate::Rank;

impl<K: Ord, V> OrderedMap<K, V> {
    /// Returns the number of keys in the map strictly less than `key`.
    ///
    /// `key` does not have to be present: the result is the position it holds, or
    /// would hold, in ascending order. For an empty map the result is `None` rather
    /// than `Some(0)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_bst::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// assert_eq!(map.rank(&10), None);
    ///
    /// map.put(10, "a");
    /// map.put(20, "b");
    /// assert_eq!(map.rank(&10), Some(0));
    /// assert_eq!(map.rank(&20), Some(1));
    /// assert_eq!(map.rank(&15), Some(1));
    /// assert_eq!(map.rank(&99), Some(2));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(depth)
    #[must_use]
    pub fn rank<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.rank(key)
    }

    /// Returns the key with exactly `rank` smaller keys in the map, or `None` if
    /// `rank >= self.size()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_bst::OrderedMap;
    ///
    /// let map = OrderedMap::from([("c", 3), ("a", 1), ("b", 2)]);
    /// assert_eq!(map.select_key(0), Some(&"a"));
    /// assert_eq!(map.select_key(2), Some(&"c"));
    /// assert_eq!(map.select_key(3), None);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(depth)
    #[must_use]
    pub fn select_key(&self, rank: usize) -> Option<&K> {
        self.select(rank).map(|(k, _)| k)
    }

    /// Returns the key-value pair at position `rank` in sorted order.
    ///
    /// The rank is zero-based. Returns `None` if `rank` is out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_bst::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// map.put("a", 10);
    /// map.put("c", 30);
    /// map.put("b", 20);
    ///
    /// assert_eq!(map.select(1), Some((&"b", &20)));
    /// assert!(map.select(3).is_none());
    /// ```
    #[must_use]
    pub fn select(&self, rank: usize) -> Option<(&K, &V)> {
        self.raw.get_by_rank(rank)
    }

    /// Returns the key and a mutable reference to the value at position `rank`.
    ///
    /// The key is returned as a shared reference because mutating it would
    /// violate the map's ordering invariants.
    #[must_use]
    pub fn select_mut(&mut self, rank: usize) -> Option<(&K, &mut V)> {
        self.raw.get_by_rank_mut(rank)
    }
}

/// Indexes into the map by rank.
///
/// # Panics
///
/// Panics if `rank` is out of bounds.
impl<K: Ord, V> Index<Rank> for OrderedMap<K, V> {
    type Output = V;

    fn index(&self, rank: Rank) -> &Self::Output {
        self.select(rank.0).map(|(_, v)| v).expect("rank out of bounds")
    }
}

/// Mutably indexes into the map by rank.
///
/// # Panics
///
/// Panics if `rank` is out of bounds.
///
/// # Examples
///
/// ```
/// use ordered_bst::{OrderedMap, Rank};
///
/// let mut map = OrderedMap::from([("a", 1), ("b", 2)]);
/// map[Rank(1)] = 5;
///
/// assert_eq!(map.get("b"), Some(&5));
/// ```
impl<K: Ord, V> IndexMut<Rank> for OrderedMap<K, V> {
    fn index_mut(&mut self, rank: Rank) -> &mut Self::Output {
        self.select_mut(rank.0).map(|(_, v)| v).expect("rank out of bounds")
    }
}
