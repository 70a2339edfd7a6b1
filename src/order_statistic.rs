/// A zero-based position in the ascending key order of a map.
///
/// Indexing an [`OrderedMap`](crate::OrderedMap) with a `Rank` returns the value
/// whose key has exactly that many smaller keys in the map.
///
/// # Examples
///
/// ```
/// use ordered_bst::{OrderedMap, Rank};
///
/// let mut map = OrderedMap::new();
/// map.put("b", 20);
/// map.put("a", 10);
///
/// assert_eq!(map[Rank(0)], 10);
/// assert_eq!(map[Rank(1)], 20);
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Rank(pub usize);
