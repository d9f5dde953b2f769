//! The [`OrderedTree`] itself. Construction, lookups, mutation, balance queries and printing live
//! here. Traversals and iteration are in the `traverse` module.

use std::fmt;
use std::io;
use std::ptr;

use tracing::{debug, trace};

use crate::node::{self, Link, Node};

/// A Binary Search Tree over values of a single ordered type. Each value is stored at most once.
///
/// The tree is shaped for minimal height when it is constructed and whenever
/// [`rebalance`][Self::rebalance] is called. [`insert`][Self::insert] and
/// [`delete`][Self::delete] never reshape more than the path they touch, so a long run of them
/// may leave the tree unbalanced.
///
/// # Examples
///
/// ```
/// use ordered_tree::OrderedTree;
///
/// let mut tree = OrderedTree::new(vec![3, 1, 2, 3]);
/// assert!(tree.contains(&3));
///
/// // Values already in the tree aren't inserted twice.
/// assert!(!tree.insert(3));
/// assert!(tree.insert(4));
///
/// assert_eq!(tree.delete(&1), Some(1));
/// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), vec![2, 3, 4]);
/// ```
#[derive(Clone, Debug)]
pub struct OrderedTree<T> {
    pub(crate) root: Link<T>,
}

impl<T> Default for OrderedTree<T> {
    fn default() -> Self {
        Self { root: None }
    }
}

impl<T> Drop for OrderedTree<T> {
    fn drop(&mut self) {
        node::release(self.root.take().into_iter().collect());
    }
}

impl<T> OrderedTree<T> {
    /// Builds a tree holding every distinct value of `values`. Duplicates are dropped and the
    /// remaining values sorted before the tree is shaped, so the result always has minimal
    /// height.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let tree = OrderedTree::new(vec![4, 1, 4, 3]);
    ///
    /// assert_eq!(tree.len(), 3);
    /// assert_eq!(tree.root().map(|n| *n.data()), Some(3));
    /// ```
    pub fn new<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Ord,
    {
        let mut values: Vec<T> = values.into_iter().collect();
        values.sort();
        values.dedup();
        Self::from_sorted(values)
    }

    /// Builds a tree from values that are already sorted ascending with no duplicates. The middle
    /// value becomes the root and each half is built the same way.
    ///
    /// Passing values that are unsorted or duplicated breaks every lookup on the resulting tree.
    /// Debug builds check for this and panic.
    pub fn from_sorted(values: Vec<T>) -> Self
    where
        T: Ord,
    {
        debug_assert!(
            values.windows(2).all(|pair| pair[0] < pair[1]),
            "values must be strictly ascending"
        );
        let len = values.len();
        let tree = Self {
            root: node::build(values),
        };
        debug!(len, height = tree.height(), "built tree");
        tree
    }

    /// The root of the tree, or `None` when the tree is empty.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// Whether the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Counts the values in the tree. This walks every node.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Finds the node holding `value`, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let tree = OrderedTree::new(vec![1, 2, 3]);
    ///
    /// assert_eq!(tree.find(&2).map(|n| *n.data()), Some(2));
    /// assert!(tree.find(&42).is_none());
    /// ```
    pub fn find(&self, value: &T) -> Option<&Node<T>>
    where
        T: Ord,
    {
        self.root()?.find(value)
    }

    /// Whether `value` is stored in the tree.
    pub fn contains(&self, value: &T) -> bool
    where
        T: Ord,
    {
        self.find(value).is_some()
    }

    /// Inserts `value` as a new leaf. Returns `false`, leaving the tree untouched, when the value
    /// is already present.
    ///
    /// The tree isn't rebalanced afterwards.
    pub fn insert(&mut self, value: T) -> bool
    where
        T: Ord,
    {
        let mut inserted = false;
        self.root = node::insert(self.root.take(), value, &mut inserted);
        if !inserted {
            trace!("value already present, nothing inserted");
        }
        inserted
    }

    /// Deletes `value` from the tree and returns it. If the tree doesn't hold `value`, nothing
    /// happens.
    ///
    /// A node with two children takes the value of its in-order successor, which is then removed
    /// from the right subtree.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new(vec![10, 20, 30]);
    ///
    /// assert_eq!(tree.delete(&20), Some(20));
    /// assert_eq!(tree.root().map(|n| *n.data()), Some(30));
    /// assert_eq!(tree.delete(&20), None);
    /// ```
    pub fn delete(&mut self, value: &T) -> Option<T>
    where
        T: Ord,
    {
        let mut removed = None;
        self.root = node::delete(self.root.take(), value, &mut removed);
        if removed.is_none() {
            trace!("value not found, nothing deleted");
        }
        removed
    }

    /// The number of edges from the root down to its deepest leaf. An empty tree has a height of
    /// `-1` and a single node has a height of `0`.
    pub fn height(&self) -> isize {
        node::height(self.root())
    }

    /// The number of edges from the root to `target`, or `None` if `target` isn't a node of this
    /// tree.
    ///
    /// The search is steered by comparing `target`'s data with each node on the way down, and a
    /// node only counts as found if it *is* `target`. A node of another tree holding an equal
    /// value is not found.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let tree = OrderedTree::new(vec![1, 2, 3]);
    /// let leaf = tree.find(&3).unwrap();
    /// assert_eq!(tree.depth(leaf), Some(1));
    ///
    /// let other = OrderedTree::new(vec![3]);
    /// assert_eq!(tree.depth(other.root().unwrap()), None);
    /// ```
    pub fn depth(&self, target: &Node<T>) -> Option<usize>
    where
        T: Ord,
    {
        let mut current = self.root();
        let mut depth = 0;
        while let Some(node) = current {
            if ptr::eq(node, target) {
                return Some(depth);
            }
            current = if target.data < node.data {
                node.left()
            } else {
                node.right()
            };
            depth += 1;
        }
        None
    }

    /// Whether the heights of the two subtrees of every node differ by at most one. An empty tree
    /// is balanced.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new(vec![1]);
    /// assert!(tree.is_balanced());
    ///
    /// tree.insert(2);
    /// tree.insert(3);
    /// assert!(!tree.is_balanced());
    /// ```
    pub fn is_balanced(&self) -> bool {
        node::balanced_height(self.root()).is_some()
    }

    /// Reshapes the whole tree to minimal height. The values are pulled out in ascending order
    /// and the tree is built again from them, exactly as [`from_sorted`][Self::from_sorted]
    /// would.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::default();
    /// tree.extend(1..=7);
    /// assert_eq!(tree.height(), 6);
    ///
    /// tree.rebalance();
    /// assert_eq!(tree.height(), 2);
    /// assert!(tree.is_balanced());
    /// ```
    pub fn rebalance(&mut self) {
        let height_before = self.height();
        let values: Vec<T> = std::mem::take(self).into_iter().collect();
        let len = values.len();
        self.root = node::build(values);

        if cfg!(debug_assertions) {
            assert!(self.is_balanced());
        }
        debug!(len, height_before, height_after = self.height(), "rebalanced tree");
    }

    /// Writes a drawing of the tree (see [`Diagram`][crate::Diagram]) to standard output.
    pub fn pretty_print(&self)
    where
        T: fmt::Display,
    {
        print!("{}", self);
    }

    /// Writes a drawing of the tree (see [`Diagram`][crate::Diagram]) to `out`.
    pub fn write_diagram<W: io::Write>(&self, mut out: W) -> io::Result<()>
    where
        T: fmt::Display,
    {
        write!(out, "{}", self)
    }
}

impl<T: fmt::Display> fmt::Display for OrderedTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.root() {
            Some(root) => write!(f, "{}", root.diagram()),
            None => Ok(()),
        }
    }
}

impl<T: Ord> FromIterator<T> for OrderedTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<T: Ord> Extend<T> for OrderedTree<T> {
    /// Inserts each value in turn. Like [`insert`][OrderedTree::insert] this doesn't rebalance.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}
