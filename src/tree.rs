use crate::{
    iter::{BreadthFirstIter, OwnedIter, RefIter},
    node::{remove_recurse, Node, RemoveResult},
};

/// An ordered set of unique values, stored as a height-balanced binary search
/// tree.
///
/// Values are ordered by their [`Ord`] implementation; at most one instance
/// of a value is stored. Every mutating operation rebalances the tree on the
/// way back up from the mutation point, bounding the tree height (and
/// therefore every lookup path) to O(log n).
///
/// ```
/// use avlset::AvlTree;
///
/// let mut t = AvlTree::default();
///
/// t.insert("bananas");
/// t.insert("platanos");
///
/// assert!(t.contains(&"bananas"));
/// assert_eq!(t.min(), Some(&"bananas"));
/// assert_eq!(t.remove(&"bananas"), Some("bananas"));
/// assert!(!t.contains(&"bananas"));
/// ```
#[derive(Debug, Clone)]
pub struct AvlTree<T>(Option<Box<Node<T>>>);

impl<T> Default for AvlTree<T> {
    fn default() -> Self {
        Self(Default::default())
    }
}

impl<T> AvlTree<T>
where
    T: Ord,
{
    /// Insert `value` into the tree, returning true if it was not already
    /// present.
    ///
    /// Inserting a value equal to one already stored is a no-op, returning
    /// false and leaving the tree untouched.
    pub fn insert(&mut self, value: T) -> bool {
        match self.0 {
            Some(ref mut v) => v.insert(value),
            None => {
                self.0 = Some(Box::new(Node::new(value)));
                true
            }
        }
    }

    /// Remove `value` from the tree, returning the stored value if it was
    /// present.
    ///
    /// Removing a value not in the tree is a no-op, returning [`None`].
    pub fn remove(&mut self, value: &T) -> Option<T> {
        match remove_recurse(&mut self.0, value)? {
            RemoveResult::Removed(v) => Some(v),
            RemoveResult::ParentUnlink => unreachable!(),
        }
    }

    /// Return true if `value` is stored in the tree.
    pub fn contains(&self, value: &T) -> bool {
        self.0
            .as_ref()
            .map(|v| v.contains(value))
            .unwrap_or_default()
    }

    /// Return the minimum value stored in the tree, or [`None`] if the tree
    /// is empty.
    pub fn min(&self) -> Option<&T> {
        self.0.as_deref().map(Node::min)
    }

    /// Return the maximum value stored in the tree, or [`None`] if the tree
    /// is empty.
    pub fn max(&self) -> Option<&T> {
        self.0.as_deref().map(Node::max)
    }
}

impl<T> AvlTree<T> {
    /// Return true if the tree contains no values.
    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    /// Reset the tree to the empty state, dropping all stored values.
    pub fn clear(&mut self) {
        self.0 = None;
    }

    /// Return an iterator yielding references to the stored values in
    /// ascending order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.0
            .iter()
            .flat_map(|v| RefIter::new(v))
            .map(|v| v.value())
    }

    /// Return an iterator yielding `(position, value, height)` tuples in
    /// breadth-first order.
    ///
    /// The position follows the binary-heap addressing scheme: the root
    /// occupies position 1, and a node at position `n` has its left child at
    /// position `2n` and its right child at `2n + 1`. Only positions holding
    /// a node are yielded.
    ///
    /// ```
    /// use avlset::AvlTree;
    ///
    /// let mut t = AvlTree::default();
    /// for v in [2, 1, 3] {
    ///     t.insert(v);
    /// }
    ///
    /// let layout = t
    ///     .iter_breadth_first()
    ///     .map(|(pos, v, height)| (pos, *v, height))
    ///     .collect::<Vec<_>>();
    ///
    /// assert_eq!(layout, [(1, 2, 1), (2, 1, 0), (3, 3, 0)]);
    /// ```
    pub fn iter_breadth_first(&self) -> BreadthFirstIter<'_, T> {
        BreadthFirstIter::new(self.0.as_deref())
    }
}

impl<T> IntoIterator for AvlTree<T> {
    type Item = T;
    type IntoIter = OwnedIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        OwnedIter::new(self.0)
    }
}
