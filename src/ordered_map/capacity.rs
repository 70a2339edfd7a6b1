use super::OrderedMap;
use crate::raw::RawTree;

impl<K, V> OrderedMap<K, V> {
    /// Creates an empty map with room for at least `capacity` entries before the node
    /// arena reallocates.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_bst::OrderedMap;
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
        OrderedMap {
            raw: RawTree::with_capacity(capacity),
        }
    }

    /// Returns the number of entries the map can hold without reallocating.
    ///
    /// Slots released by deletions are reused by later insertions, so the capacity never
    /// drops on its own.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.raw.capacity()
    }

    /// Shrinks the capacity of the map as much as possible.
    ///
    /// Slots vacated by deletions in the middle of the arena are kept and reused by
    /// later insertions; only spare capacity at the end is released, or everything once
    /// the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_bst::OrderedMap;
    ///
    /// let mut map: OrderedMap<i32, i32> = OrderedMap::with_capacity(100);
    /// map.put(1, 2);
    /// map.shrink_to_fit();
    /// assert!(map.capacity() < 100);
    /// ```
    pub fn shrink_to_fit(&mut self) {
        self.raw.shrink_to_fit();
    }
}
