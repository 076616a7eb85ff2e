use alloc::collections::TryReserveError;
use alloc::vec::Vec;
use core::cmp::Ordering;

use compare::Compare;

use super::arena::Arena;
use super::handle::Handle;
use super::node::{Node, Side};

/// The unbalanced binary search tree backing `OrderedMap`.
///
/// No rotations are ever performed: the shape is fully determined by the
/// insertion order, so sorted input degrades the tree into a chain.
#[derive(Clone)]
pub(crate) struct RawOrderedMap<K, V, C> {
    /// Arena storing all tree nodes.
    nodes: Arena<Node<K, V>>,
    /// Handle to the root node, if the tree is non-empty.
    root: Option<Handle>,
    /// The node last touched by a navigating operation. Never refers to a freed slot.
    cursor: Option<Handle>,
    /// Three-way ordering over keys.
    cmp: C,
}

/// Where a key lives, or where it would be linked in.
enum Slot {
    Occupied(Handle),
    Vacant { parent: Option<Handle>, side: Side },
}

impl<K, V, C> RawOrderedMap<K, V, C> {
    /// Creates a new, empty tree.
    pub(crate) const fn new(cmp: C) -> Self {
        Self {
            nodes: Arena::new(),
            root: None,
            cursor: None,
            cmp,
        }
    }

    /// Creates a new tree with room for `capacity` nodes.
    pub(crate) fn with_capacity(capacity: usize, cmp: C) -> Self {
        Self {
            nodes: Arena::with_capacity(capacity),
            root: None,
            cursor: None,
            cmp,
        }
    }

    pub(crate) const fn len(&self) -> usize {
        self.nodes.len()
    }

    pub(crate) const fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub(crate) fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    pub(crate) fn comparator(&self) -> &C {
        &self.cmp
    }

    /// Drops every node and resets the cursor.
    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
        self.cursor = None;
    }

    pub(crate) fn cursor(&self) -> Option<Handle> {
        self.cursor
    }

    pub(crate) fn node(&self, handle: Handle) -> &Node<K, V> {
        self.nodes.get(handle)
    }

    pub(crate) fn node_mut(&mut self, handle: Handle) -> &mut Node<K, V> {
        self.nodes.get_mut(handle)
    }

    /// Leftmost descendant of `handle`.
    fn minimum(&self, mut handle: Handle) -> Handle {
        while let Some(left) = self.node(handle).left() {
            handle = left;
        }
        handle
    }

    /// Rightmost descendant of `handle`.
    fn maximum(&self, mut handle: Handle) -> Handle {
        while let Some(right) = self.node(handle).right() {
            handle = right;
        }
        handle
    }

    pub(crate) fn first_handle(&self) -> Option<Handle> {
        self.root.map(|root| self.minimum(root))
    }

    pub(crate) fn last_handle(&self) -> Option<Handle> {
        self.root.map(|root| self.maximum(root))
    }

    /// In-order successor: the right subtree's minimum, or else the first
    /// ancestor entered from its left child.
    pub(crate) fn successor(&self, handle: Handle) -> Option<Handle> {
        if let Some(right) = self.node(handle).right() {
            return Some(self.minimum(right));
        }

        let mut child = handle;
        let mut parent = self.node(handle).parent();
        while let Some(p) = parent {
            let node = self.node(p);
            if node.left() == Some(child) {
                return Some(p);
            }
            child = p;
            parent = node.parent();
        }
        None
    }

    /// In-order predecessor, the mirror image of [`Self::successor`].
    pub(crate) fn predecessor(&self, handle: Handle) -> Option<Handle> {
        if let Some(left) = self.node(handle).left() {
            return Some(self.maximum(left));
        }

        let mut child = handle;
        let mut parent = self.node(handle).parent();
        while let Some(p) = parent {
            let node = self.node(p);
            if node.right() == Some(child) {
                return Some(p);
            }
            child = p;
            parent = node.parent();
        }
        None
    }

    /// Moves the cursor to the minimum node.
    pub(crate) fn first(&mut self) -> Option<Handle> {
        let first = self.first_handle()?;
        self.cursor = Some(first);
        Some(first)
    }

    /// Moves the cursor to its in-order successor. Walking off the end leaves the cursor absent.
    pub(crate) fn next(&mut self) -> Option<Handle> {
        let current = self.cursor?;
        self.cursor = self.successor(current);
        self.cursor
    }

    /// Number of nodes on the longest root-to-leaf path.
    pub(crate) fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<(Handle, usize)> = Vec::new();
        stack.extend(self.root.map(|root| (root, 1)));

        while let Some((handle, depth)) = stack.pop() {
            height = height.max(depth);
            let node = self.node(handle);
            stack.extend(node.left().map(|left| (left, depth + 1)));
            stack.extend(node.right().map(|right| (right, depth + 1)));
        }
        height
    }

    /// Points `parent`'s link to `old` (or the root, if `parent` is `None`) at `new` instead.
    fn replace_child(&mut self, parent: Option<Handle>, old: Handle, new: Option<Handle>) {
        match parent {
            None => self.root = new,
            Some(p) => {
                let side = self
                    .node(p)
                    .side_of(old)
                    .expect("`RawOrderedMap::replace_child()` - `old` is not a child of `parent`!");
                self.node_mut(p).set_child(side, new);
            }
        }
        if let Some(n) = new {
            self.node_mut(n).set_parent(parent);
        }
    }

    /// Removes a node with at most one child and frees its slot.
    ///
    /// A leaf is simply detached from its parent; a sole child takes the
    /// node's place under the parent.
    fn splice_out(&mut self, handle: Handle) -> Node<K, V> {
        let node = self.node(handle);
        debug_assert!(node.left().is_none() || node.right().is_none());
        let child = node.left().or(node.right());
        let parent = node.parent();

        self.replace_child(parent, handle, child);
        if self.cursor == Some(handle) {
            self.cursor = None;
        }
        self.nodes.take(handle)
    }

    /// Removes the pair stored at `handle` and returns it.
    ///
    /// With two children, the in-order successor's pair moves into `handle`
    /// and the successor's node is the one freed. A cursor on the successor
    /// follows its pair; a cursor on `handle` stays put.
    pub(crate) fn remove_node(&mut self, handle: Handle) -> (K, V) {
        let node = self.node(handle);
        match (node.left(), node.right()) {
            (Some(_), Some(right)) => {
                let successor = self.minimum(right);
                let follows = self.cursor == Some(successor);
                let (key, value) = self.splice_out(successor).into_pair();
                if follows {
                    self.cursor = Some(handle);
                }
                self.node_mut(handle).replace_pair(key, value)
            }
            _ => self.splice_out(handle).into_pair(),
        }
    }

    pub(crate) fn pop_first(&mut self) -> Option<(K, V)> {
        let first = self.first_handle()?;
        Some(self.remove_node(first))
    }

    pub(crate) fn pop_last(&mut self) -> Option<(K, V)> {
        let last = self.last_handle()?;
        Some(self.remove_node(last))
    }

    /// Handles of every node, in key order.
    fn in_order(&self) -> Vec<Handle> {
        let mut handles = Vec::with_capacity(self.len());
        let mut current = self.first_handle();
        while let Some(handle) = current {
            handles.push(handle);
            current = self.successor(handle);
        }
        handles
    }

    /// Moves every pair out in key order, leaving the tree empty.
    pub(crate) fn drain_to_vec(&mut self) -> Vec<(K, V)> {
        let order = self.in_order();
        let pairs: Vec<(K, V)> = order.into_iter().map(|handle| self.nodes.take(handle).into_pair()).collect();
        self.clear();
        pairs
    }
}

impl<K, V, C> RawOrderedMap<K, V, C> {
    /// Exact-match lookup. Does not touch the cursor.
    pub(crate) fn find<Q>(&self, key: &Q) -> Option<Handle>
    where
        C: Compare<Q, K>,
        Q: ?Sized,
    {
        let mut current = self.root;
        while let Some(handle) = current {
            let node = self.node(handle);
            current = match self.cmp.compare(key, node.key()) {
                Ordering::Less => node.left(),
                Ordering::Greater => node.right(),
                Ordering::Equal => return Some(handle),
            };
        }
        None
    }

    /// Exact-match lookup. A hit moves the cursor to the node, a miss clears it.
    pub(crate) fn search<Q>(&mut self, key: &Q) -> Option<Handle>
    where
        C: Compare<Q, K>,
        Q: ?Sized,
    {
        self.cursor = self.find(key);
        self.cursor
    }

    /// Node holding the smallest key not less than `key`. A hit moves the
    /// cursor; a miss leaves it where it was.
    pub(crate) fn upper_bound<Q>(&mut self, key: &Q) -> Option<Handle>
    where
        C: Compare<Q, K>,
        Q: ?Sized,
    {
        let mut current = self.root;
        let mut candidate = None;
        while let Some(handle) = current {
            let node = self.node(handle);
            match self.cmp.compare(key, node.key()) {
                Ordering::Greater => current = node.right(),
                Ordering::Equal => {
                    candidate = Some(handle);
                    break;
                }
                Ordering::Less => {
                    candidate = Some(handle);
                    current = node.left();
                }
            }
        }

        if candidate.is_some() {
            self.cursor = candidate;
        }
        candidate
    }

    /// Descends as insertion does: left when `key` orders strictly before, right otherwise.
    fn locate(&self, key: &K) -> Slot
    where
        C: Compare<K>,
    {
        let mut parent = None;
        let mut side = Side::Left;
        let mut current = self.root;
        while let Some(handle) = current {
            let node = self.node(handle);
            side = match self.cmp.compare(key, node.key()) {
                Ordering::Equal => return Slot::Occupied(handle),
                Ordering::Less => Side::Left,
                Ordering::Greater => Side::Right,
            };
            parent = Some(handle);
            current = node.child(side);
        }
        Slot::Vacant { parent, side }
    }

    fn link(&mut self, parent: Option<Handle>, side: Side, key: K, value: V) -> Handle {
        let handle = self.nodes.alloc(Node::new(key, value, parent));
        match parent {
            None => self.root = Some(handle),
            Some(p) => self.node_mut(p).set_child(side, Some(handle)),
        }
        handle
    }

    /// Inserts a new pair unless an equivalent key is present, in which case
    /// nothing changes except the cursor, which lands on the existing node.
    /// Returns `true` if a node was created.
    pub(crate) fn insert(&mut self, key: K, value: V) -> bool
    where
        C: Compare<K>,
    {
        match self.locate(&key) {
            Slot::Occupied(existing) => {
                self.cursor = Some(existing);
                false
            }
            Slot::Vacant { parent, side } => {
                self.cursor = Some(self.link(parent, side, key, value));
                true
            }
        }
    }

    /// Like [`Self::insert`], but reports allocation failure instead of aborting.
    /// On failure the tree and the cursor are unchanged.
    pub(crate) fn try_insert(&mut self, key: K, value: V) -> Result<bool, TryReserveError>
    where
        C: Compare<K>,
    {
        match self.locate(&key) {
            Slot::Occupied(existing) => {
                self.cursor = Some(existing);
                Ok(false)
            }
            Slot::Vacant { parent, side } => {
                self.nodes.try_reserve(1)?;
                self.cursor = Some(self.link(parent, side, key, value));
                Ok(true)
            }
        }
    }

    /// Locates `key` with [`Self::search`] and removes it.
    pub(crate) fn erase<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        C: Compare<Q, K>,
        Q: ?Sized,
    {
        let handle = self.search(key)?;
        Some(self.remove_node(handle))
    }

    /// Removes `key` without the search-driven cursor move of [`Self::erase`].
    pub(crate) fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        C: Compare<Q, K>,
        Q: ?Sized,
    {
        let handle = self.find(key)?;
        Some(self.remove_node(handle))
    }
}
