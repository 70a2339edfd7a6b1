use alloc::vec::Vec;
use core::borrow::Borrow;
use core::cmp::Ordering;
use core::mem;

use smallvec::SmallVec;
use tracing::{debug, trace};

use super::arena::Arena;
use super::handle::Handle;
use super::node::{Node, Side};
use crate::error::{Error, Result};

/// The unbalanced binary search tree backing `OrderedMap`.
///
/// Every node is owned by exactly one link: the parent's `left`/`right` or `root`.
/// Mutations descend iteratively while recording the path, relink at the bottom,
/// then recompute subtree sizes from the deepest path element back to the root.
#[derive(Clone)]
pub(crate) struct RawTree<K, V> {
    /// Arena storing all tree nodes.
    nodes: Arena<Node<K, V>>,
    /// Handle to the root node, if the tree is non-empty.
    root: Option<Handle>,
}

/// Path element for tracking traversal during mutations.
#[derive(Clone, Copy)]
struct PathElement {
    /// Handle to the node at this level.
    node: Handle,
    /// Child link we descended through.
    side: Side,
}

/// Stack of path elements from the root downwards.
type Path = SmallVec<[PathElement; 32]>;

/// Stack of handles used by in-order walks.
pub(crate) type Spine = SmallVec<[Handle; 32]>;

#[inline]
fn compare<K, Q>(key: &Q, node_key: &K) -> Ordering
where
    K: Borrow<Q>,
    Q: ?Sized + Ord,
{
    key.cmp(node_key.borrow())
}

impl<K, V> RawTree<K, V> {
    /// Creates a new, empty tree.
    pub(crate) const fn new() -> Self {
        Self {
            nodes: Arena::new(),
            root: None,
        }
    }

    /// Creates a new tree with room for `capacity` nodes.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Arena::with_capacity(capacity),
            root: None,
        }
    }

    pub(crate) fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    pub(crate) fn shrink_to_fit(&mut self) {
        self.nodes.shrink_to_fit();
    }

    /// Returns the number of key-value pairs, read from the root's cached size.
    pub(crate) fn len(&self) -> usize {
        self.size_of(self.root)
    }

    pub(crate) const fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
    }

    pub(crate) const fn root(&self) -> Option<Handle> {
        self.root
    }

    #[inline]
    pub(crate) fn node(&self, handle: Handle) -> &Node<K, V> {
        self.nodes.get(handle)
    }

    /// Size of the subtree behind `link`; an absent link has size 0.
    #[inline]
    fn size_of(&self, link: Option<Handle>) -> usize {
        link.map_or(0, |handle| self.nodes.get(handle).size())
    }

    /// Recomputes a node's cached size from its current children.
    fn fix_size(&mut self, handle: Handle) {
        let node = self.nodes.get(handle);
        let size = 1 + self.size_of(node.left()) + self.size_of(node.right());
        self.nodes.get_mut(handle).set_size(size);
    }

    fn update_sizes_along_path(&mut self, path: &Path) {
        for elem in path.iter().rev() {
            self.fix_size(elem.node);
        }
    }

    /// Points the link at the bottom of a path (or `root` when the path is empty) at `child`.
    fn relink(&mut self, parent: Option<PathElement>, child: Option<Handle>) {
        match parent {
            Some(elem) => self.nodes.get_mut(elem.node).set_child(elem.side, child),
            None => self.root = child,
        }
    }

    /// Pushes `link` and every node reached by following `side` from it.
    pub(crate) fn push_spine(&self, stack: &mut Spine, mut link: Option<Handle>, side: Side) {
        while let Some(handle) = link {
            stack.push(handle);
            link = self.nodes.get(handle).child(side);
        }
    }

    /// Returns the node reached by following `side` from the root until it runs out.
    fn extreme(&self, side: Side) -> Option<Handle> {
        let mut current = self.root?;
        while let Some(next) = self.nodes.get(current).child(side) {
            current = next;
        }
        Some(current)
    }

    pub(crate) fn first_key_value(&self) -> Option<(&K, &V)> {
        let node = self.nodes.get(self.extreme(Side::Left)?);
        Some((node.key(), node.value()))
    }

    pub(crate) fn last_key_value(&self) -> Option<(&K, &V)> {
        let node = self.nodes.get(self.extreme(Side::Right)?);
        Some((node.key(), node.value()))
    }

    /// Number of nodes on the longest root-to-leaf path.
    pub(crate) fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: SmallVec<[(Handle, usize); 32]> = SmallVec::new();
        if let Some(root) = self.root {
            stack.push((root, 1));
        }

        while let Some((handle, depth)) = stack.pop() {
            height = height.max(depth);
            let node = self.nodes.get(handle);
            stack.extend(node.left().map(|left| (left, depth + 1)));
            stack.extend(node.right().map(|right| (right, depth + 1)));
        }

        height
    }

    /// Unlinks the extreme node of the subtree rooted at `subtree`.
    ///
    /// The extreme node is replaced by its child on the `side.opposite()` link and
    /// sizes inside the subtree are recomputed. Returns the new subtree root and
    /// the detached node, whose links are stale and must be reset by the caller.
    fn detach_extreme(&mut self, subtree: Handle, side: Side) -> (Option<Handle>, Handle) {
        let mut path: Path = SmallVec::new();
        let mut current = subtree;
        while let Some(next) = self.nodes.get(current).child(side) {
            path.push(PathElement { node: current, side });
            current = next;
        }

        let orphan = self.nodes.get(current).child(side.opposite());
        let remaining = match path.last().copied() {
            Some(parent) => {
                self.nodes.get_mut(parent.node).set_child(side, orphan);
                self.update_sizes_along_path(&path);
                Some(subtree)
            }
            None => orphan,
        };

        (remaining, current)
    }

    /// Removes the smallest (`Side::Left`) or largest (`Side::Right`) entry.
    fn pop_extreme(&mut self, side: Side, operation: &'static str) -> Result<(K, V)> {
        let Some(root) = self.root else {
            debug!(operation = operation, "rejected on an empty tree");
            return Err(Error::EmptyContainer { operation });
        };

        let (remaining, detached) = self.detach_extreme(root, side);
        self.root = remaining;
        let node = self.nodes.take(detached);
        trace!(operation = operation, size = self.len(), "released node");
        Ok(node.into_key_value())
    }

    pub(crate) fn pop_first(&mut self) -> Result<(K, V)> {
        self.pop_extreme(Side::Left, "delete_min")
    }

    pub(crate) fn pop_last(&mut self) -> Result<(K, V)> {
        self.pop_extreme(Side::Right, "delete_max")
    }

    /// Gets the handle of the node at position `rank` in key order.
    pub(crate) fn select(&self, rank: usize) -> Option<Handle> {
        let mut link = self.root;
        let mut rank = rank;

        while let Some(current) = link {
            let node = self.nodes.get(current);
            let left_size = self.size_of(node.left());
            match left_size.cmp(&rank) {
                Ordering::Less => {
                    rank -= left_size + 1;
                    link = node.right();
                }
                Ordering::Greater => link = node.left(),
                Ordering::Equal => return Some(current),
            }
        }

        None
    }

    pub(crate) fn get_by_rank(&self, rank: usize) -> Option<(&K, &V)> {
        let node = self.nodes.get(self.select(rank)?);
        Some((node.key(), node.value()))
    }

    pub(crate) fn get_by_rank_mut(&mut self, rank: usize) -> Option<(&K, &mut V)> {
        let handle = self.select(rank)?;
        Some(self.nodes.get_mut(handle).key_value_mut())
    }

    /// Moves every entry out in ascending key order, leaving the tree empty.
    pub(crate) fn drain_to_vec(&mut self) -> Vec<(K, V)> {
        let mut entries = Vec::with_capacity(self.nodes.len());
        let mut stack = Spine::new();
        self.push_spine(&mut stack, self.root, Side::Left);

        while let Some(handle) = stack.pop() {
            let node = self.nodes.take(handle);
            self.push_spine(&mut stack, node.right(), Side::Left);
            entries.push(node.into_key_value());
        }

        self.clear();
        entries
    }
}

impl<K: Ord, V> RawTree<K, V> {
    /// Searches for a key and returns the handle of its node.
    pub(crate) fn search<Q>(&self, key: &Q) -> Option<Handle>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let mut link = self.root;

        while let Some(current) = link {
            let node = self.nodes.get(current);
            link = match compare(key, node.key()) {
                Ordering::Less => node.left(),
                Ordering::Greater => node.right(),
                Ordering::Equal => return Some(current),
            };
        }

        None
    }

    pub(crate) fn get_key_value<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let node = self.nodes.get(self.search(key)?);
        Some((node.key(), node.value()))
    }

    pub(crate) fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let handle = self.search(key)?;
        Some(self.nodes.get_mut(handle).value_mut())
    }

    /// Inserts a key-value pair, overwriting the value in place if the key exists.
    /// Returns the old value if the key was already present.
    pub(crate) fn insert(&mut self, key: K, value: V) -> Option<V> {
        let mut path: Path = SmallVec::new();
        let mut link = self.root;

        while let Some(current) = link {
            let node = self.nodes.get_mut(current);
            let side = match key.cmp(node.key()) {
                Ordering::Less => Side::Left,
                Ordering::Greater => Side::Right,
                Ordering::Equal => return Some(mem::replace(node.value_mut(), value)),
            };
            path.push(PathElement { node: current, side });
            link = node.child(side);
        }

        let leaf = self.nodes.alloc(Node::new(key, value));
        self.relink(path.last().copied(), Some(leaf));
        self.update_sizes_along_path(&path);
        trace!(depth = path.len(), size = self.len(), "allocated node");
        None
    }

    /// Removes a key from the tree and returns the key-value pair.
    ///
    /// A node with two children is replaced by its in-order successor (Hibbard
    /// deletion); the tree is not rebalanced afterwards.
    pub(crate) fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let mut path: Path = SmallVec::new();
        let mut link = self.root;

        let target = loop {
            let current = link?;
            let node = self.nodes.get(current);
            let side = match compare(key, node.key()) {
                Ordering::Less => Side::Left,
                Ordering::Greater => Side::Right,
                Ordering::Equal => break current,
            };
            path.push(PathElement { node: current, side });
            link = node.child(side);
        };

        let node = self.nodes.get(target);
        let replacement = match (node.left(), node.right()) {
            (left, None) => left,
            (None, right) => right,
            (Some(left), Some(right)) => {
                let (rest, successor) = self.detach_extreme(right, Side::Left);
                let node = self.nodes.get_mut(successor);
                node.set_child(Side::Left, Some(left));
                node.set_child(Side::Right, rest);
                self.fix_size(successor);
                trace!(depth = path.len(), "promoted in-order successor");
                Some(successor)
            }
        };

        self.relink(path.last().copied(), replacement);
        self.update_sizes_along_path(&path);
        let removed = self.nodes.take(target);
        trace!(size = self.len(), "released node");
        Some(removed.into_key_value())
    }

    /// Handle of the node with the largest key `<= key`.
    pub(crate) fn floor<Q>(&self, key: &Q) -> Option<Handle>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let mut link = self.root;
        let mut best = None;

        while let Some(current) = link {
            let node = self.nodes.get(current);
            match compare(key, node.key()) {
                Ordering::Less => link = node.left(),
                Ordering::Greater => {
                    // This node is a candidate unless the right subtree holds a closer key.
                    best = Some(current);
                    link = node.right();
                }
                Ordering::Equal => return Some(current),
            }
        }

        best
    }

    /// Handle of the node with the smallest key `>= key`.
    pub(crate) fn ceiling<Q>(&self, key: &Q) -> Option<Handle>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let mut link = self.root;
        let mut best = None;

        while let Some(current) = link {
            let node = self.nodes.get(current);
            match compare(key, node.key()) {
                Ordering::Less => {
                    best = Some(current);
                    link = node.left();
                }
                Ordering::Greater => link = node.right(),
                Ordering::Equal => return Some(current),
            }
        }

        best
    }

    /// Counts the keys strictly less than `key`.
    ///
    /// Returns `None` for an empty tree. The key does not have to be present.
    pub(crate) fn rank<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let mut link = Some(self.root?);
        let mut rank = 0;

        while let Some(current) = link {
            let node = self.nodes.get(current);
            match compare(key, node.key()) {
                Ordering::Less => link = node.left(),
                Ordering::Greater => {
                    rank += self.size_of(node.left()) + 1;
                    link = node.right();
                }
                Ordering::Equal => return Some(rank + self.size_of(node.left())),
            }
        }

        Some(rank)
    }
}
