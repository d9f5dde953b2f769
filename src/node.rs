//! The vertices of an [`OrderedTree`][crate::OrderedTree].

use std::cmp::Ordering;
use std::fmt;

/// An owned, possibly empty, subtree.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// A `Node` stores a single value which is both its search key and its payload. It exclusively
/// owns its children, either of which may be absent.
///
/// Every value in the left subtree is strictly less than `data` and every value in the right
/// subtree is strictly greater.
#[derive(Clone, Debug)]
pub struct Node<T> {
    pub(crate) data: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T> Node<T> {
    /// Construct a new leaf `Node` holding `data`.
    pub(crate) fn new(data: T) -> Self {
        Self {
            data,
            left: None,
            right: None,
        }
    }

    /// The value stored in this node.
    pub fn data(&self) -> &T {
        &self.data
    }

    /// The root of the left subtree, if there is one.
    pub fn left(&self) -> Option<&Node<T>> {
        self.left.as_deref()
    }

    /// The root of the right subtree, if there is one.
    pub fn right(&self) -> Option<&Node<T>> {
        self.right.as_deref()
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// The number of edges on the longest path from this node down to a leaf. A leaf has a height
    /// of `0`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let tree = OrderedTree::new(vec![1, 2, 3]);
    /// let root = tree.root().unwrap();
    ///
    /// assert_eq!(root.height(), 1);
    /// assert_eq!(root.left().unwrap().height(), 0);
    /// ```
    pub fn height(&self) -> isize {
        1 + height(self.left()).max(height(self.right()))
    }

    /// Finds the node in this subtree whose data equals `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let tree = OrderedTree::new(vec![10, 20, 30]);
    /// let right = tree.root().and_then(|root| root.right()).unwrap();
    ///
    /// assert_eq!(right.find(&30).map(|n| *n.data()), Some(30));
    /// // 10 lives in the root's other subtree.
    /// assert!(right.find(&10).is_none());
    /// ```
    pub fn find(&self, value: &T) -> Option<&Node<T>>
    where
        T: Ord,
    {
        match value.cmp(&self.data) {
            Ordering::Less => self.left()?.find(value),
            Ordering::Equal => Some(self),
            Ordering::Greater => self.right()?.find(value),
        }
    }

    /// Returns a [`Diagram`] that draws the subtree rooted at this node.
    pub fn diagram(&self) -> Diagram<'_, T> {
        Diagram(self)
    }
}

/// The height of a possibly empty subtree. An empty subtree has a height of `-1` so that a single
/// leaf has a height of `0`.
///
/// # Examples
///
/// ```
/// use ordered_tree::{height, OrderedTree};
///
/// let tree = OrderedTree::new(vec![5]);
/// assert_eq!(height(tree.root()), 0);
/// assert_eq!(height(tree.root().and_then(|root| root.left())), -1);
/// ```
pub fn height<T>(node: Option<&Node<T>>) -> isize {
    node.map_or(-1, Node::height)
}

/// The height of `node` if every node beneath it (and `node` itself) has children whose heights
/// differ by at most one.
pub(crate) fn balanced_height<T>(node: Option<&Node<T>>) -> Option<isize> {
    match node {
        None => Some(-1),
        Some(n) => {
            let left = balanced_height(n.left())?;
            let right = balanced_height(n.right())?;
            if left.abs_diff(right) <= 1 {
                Some(1 + left.max(right))
            } else {
                None
            }
        }
    }
}

/// Builds a subtree out of ascending, duplicate free `values` by promoting the middle value and
/// building each half recursively.
pub(crate) fn build<T>(mut values: Vec<T>) -> Link<T> {
    if values.is_empty() {
        return None;
    }
    let mid = values.len() / 2;
    let right = values.split_off(mid + 1);
    let data = values.pop()?;

    Some(Box::new(Node {
        data,
        left: build(values),
        right: build(right),
    }))
}

/// Inserts `value` into the subtree, returning the subtree so the caller can put it back where
/// it came from. `inserted` is set when a new leaf was created.
pub(crate) fn insert<T: Ord>(link: Link<T>, value: T, inserted: &mut bool) -> Link<T> {
    let Some(mut node) = link else {
        *inserted = true;
        return Some(Box::new(Node::new(value)));
    };
    match value.cmp(&node.data) {
        Ordering::Less => node.left = insert(node.left.take(), value, inserted),
        Ordering::Greater => node.right = insert(node.right.take(), value, inserted),
        Ordering::Equal => {}
    }
    Some(node)
}

/// Deletes `value` from the subtree, returning the restructured subtree so the caller can put it
/// back where it came from. The deleted value is placed in `removed`.
pub(crate) fn delete<T: Ord>(link: Link<T>, value: &T, removed: &mut Option<T>) -> Link<T> {
    let mut node = link?;
    match value.cmp(&node.data) {
        Ordering::Less => node.left = delete(node.left.take(), value, removed),
        Ordering::Greater => node.right = delete(node.right.take(), value, removed),
        Ordering::Equal => match (node.left.take(), node.right.take()) {
            (None, right) => {
                *removed = Some(node.data);
                return right;
            }
            (left, None) => {
                *removed = Some(node.data);
                return left;
            }
            (left, Some(right)) => {
                // Promote the in-order successor. It has no left child, so removing it from the
                // right subtree only ever splices in its right child.
                let (right, successor) = take_min(right);
                *removed = Some(std::mem::replace(&mut node.data, successor));
                node.left = left;
                node.right = right;
            }
        },
    }
    Some(node)
}

/// Removes the smallest node of the subtree, returning what's left of the subtree and the
/// smallest value.
fn take_min<T>(mut node: Box<Node<T>>) -> (Link<T>, T) {
    match node.left.take() {
        None => {
            let Node { data, right, .. } = *node;
            (right, data)
        }
        Some(left) => {
            let (left, min) = take_min(left);
            node.left = left;
            (Some(node), min)
        }
    }
}

/// Releases a collection of subtrees without recursing, so a degenerate (list shaped) tree can't
/// overflow the stack while being dropped.
pub(crate) fn release<T>(mut stack: Vec<Box<Node<T>>>) {
    while let Some(mut node) = stack.pop() {
        stack.extend(node.left.take());
        stack.extend(node.right.take());
    }
}

/// A drawing of a subtree, rotated 90° counter-clockwise. Right subtrees are drawn above their
/// parent and left subtrees below.
///
/// # Examples
///
/// ```
/// use ordered_tree::OrderedTree;
///
/// let tree = OrderedTree::new(vec![1, 2, 3]);
/// let expected = "\
/// │   ┌── 3
/// └── 2
///     └── 1
/// ";
///
/// assert_eq!(tree.root().unwrap().diagram().to_string(), expected);
/// ```
pub struct Diagram<'a, T>(&'a Node<T>);

impl<T: fmt::Display> fmt::Display for Diagram<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        draw(f, self.0, "", true)
    }
}

/// Draws `node` and its subtrees. `is_left` tracks whether `node` is drawn as the lower (left)
/// child of its parent, which decides both its own branch and its children's prefixes.
fn draw<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    node: &Node<T>,
    prefix: &str,
    is_left: bool,
) -> fmt::Result {
    if let Some(right) = node.right() {
        let prefix = format!("{}{}", prefix, if is_left { "│   " } else { "    " });
        draw(f, right, &prefix, false)?;
    }
    writeln!(
        f,
        "{}{}{}",
        prefix,
        if is_left { "└── " } else { "┌── " },
        node.data
    )?;
    if let Some(left) = node.left() {
        let prefix = format!("{}{}", prefix, if is_left { "    " } else { "│   " });
        draw(f, left, &prefix, true)?;
    }
    Ok(())
}
