//! Ways of walking an [`OrderedTree`]: the four callback based traversals and the in-order
//! iterators.
//!
//! The callback traversals take an `Option` of a visitor and refuse to start without one. The
//! iterators always yield values in ascending order and keep their own stack, so they work on
//! trees of any shape.

use std::collections::VecDeque;
use std::iter::FusedIterator;

use tracing::debug;

use crate::error::TraversalError;
use crate::node::{self, Link, Node};
use crate::tree::OrderedTree;

/// Unwraps a visitor, failing the traversal before it starts when there isn't one.
fn required<F>(visitor: Option<F>) -> Result<F, TraversalError> {
    visitor.ok_or_else(|| {
        debug!("traversal started without a visitor");
        TraversalError::CallbackRequired
    })
}

impl<T> OrderedTree<T> {
    /// Visits every node breadth first: the root, then every node one edge below it from left to
    /// right, and so on. Visiting an empty tree does nothing.
    ///
    /// # Errors
    ///
    /// [`TraversalError::CallbackRequired`] if `visitor` is `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::{Node, OrderedTree};
    ///
    /// let tree = OrderedTree::new(1..=7);
    /// let mut seen = Vec::new();
    /// tree.level_order(Some(|n: &Node<i32>| seen.push(*n.data()))).unwrap();
    ///
    /// assert_eq!(seen, vec![4, 2, 6, 1, 3, 5, 7]);
    /// ```
    pub fn level_order<'a, F>(&'a self, visitor: Option<F>) -> Result<(), TraversalError>
    where
        F: FnMut(&'a Node<T>),
    {
        let mut visit = required(visitor)?;
        let mut queue: VecDeque<&Node<T>> = self.root().into_iter().collect();
        while let Some(node) = queue.pop_front() {
            visit(node);
            queue.extend(node.left());
            queue.extend(node.right());
        }
        Ok(())
    }

    /// Visits each node before its left subtree and then its right subtree.
    ///
    /// # Errors
    ///
    /// [`TraversalError::CallbackRequired`] if `visitor` is `None`.
    pub fn pre_order<'a, F>(&'a self, visitor: Option<F>) -> Result<(), TraversalError>
    where
        F: FnMut(&'a Node<T>),
    {
        let mut visit = required(visitor)?;
        pre_order(self.root(), &mut visit);
        Ok(())
    }

    /// Visits each node after its left subtree and before its right subtree, which is ascending
    /// order.
    ///
    /// # Errors
    ///
    /// [`TraversalError::CallbackRequired`] if `visitor` is `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::{Node, OrderedTree, TraversalError};
    ///
    /// let tree = OrderedTree::new(vec![3, 1, 2]);
    /// let mut seen = Vec::new();
    /// tree.in_order(Some(|n: &Node<i32>| seen.push(*n.data()))).unwrap();
    /// assert_eq!(seen, vec![1, 2, 3]);
    ///
    /// let nothing: Option<fn(&Node<i32>)> = None;
    /// assert_eq!(tree.in_order(nothing), Err(TraversalError::CallbackRequired));
    /// ```
    pub fn in_order<'a, F>(&'a self, visitor: Option<F>) -> Result<(), TraversalError>
    where
        F: FnMut(&'a Node<T>),
    {
        let mut visit = required(visitor)?;
        in_order(self.root(), &mut visit);
        Ok(())
    }

    /// Visits each node after both of its subtrees.
    ///
    /// # Errors
    ///
    /// [`TraversalError::CallbackRequired`] if `visitor` is `None`.
    pub fn post_order<'a, F>(&'a self, visitor: Option<F>) -> Result<(), TraversalError>
    where
        F: FnMut(&'a Node<T>),
    {
        let mut visit = required(visitor)?;
        post_order(self.root(), &mut visit);
        Ok(())
    }

    /// An iterator over the values of the tree in ascending order.
    pub fn iter(&self) -> Iter<'_, T> {
        let mut iter = Iter { stack: Vec::new() };
        iter.push_left(self.root());
        iter
    }
}

fn pre_order<'a, T, F: FnMut(&'a Node<T>)>(node: Option<&'a Node<T>>, visit: &mut F) {
    if let Some(n) = node {
        visit(n);
        pre_order(n.left(), visit);
        pre_order(n.right(), visit);
    }
}

fn in_order<'a, T, F: FnMut(&'a Node<T>)>(node: Option<&'a Node<T>>, visit: &mut F) {
    if let Some(n) = node {
        in_order(n.left(), visit);
        visit(n);
        in_order(n.right(), visit);
    }
}

fn post_order<'a, T, F: FnMut(&'a Node<T>)>(node: Option<&'a Node<T>>, visit: &mut F) {
    if let Some(n) = node {
        post_order(n.left(), visit);
        post_order(n.right(), visit);
        visit(n);
    }
}

/// An in-order iterator over references to the values of an [`OrderedTree`]. Created by
/// [`OrderedTree::iter`].
pub struct Iter<'a, T> {
    /// Nodes whose left subtree has been walked but which haven't been yielded yet. The top of
    /// the stack is the next node to yield.
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Iter<'a, T> {
    fn push_left(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left(node.right());
        Some(&node.data)
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a OrderedTree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An in-order iterator that takes the values out of an [`OrderedTree`]. Created by
/// `OrderedTree::into_iter`.
pub struct IntoIter<T> {
    stack: Vec<Box<Node<T>>>,
}

impl<T> IntoIter<T> {
    fn push_left(&mut self, mut link: Link<T>) {
        while let Some(mut n) = link {
            link = n.left.take();
            self.stack.push(n);
        }
    }
}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        node::release(std::mem::take(&mut self.stack));
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        let Node { data, right, .. } = *node;
        self.push_left(right);
        Some(data)
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for OrderedTree<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(mut self) -> Self::IntoIter {
        let mut iter = IntoIter { stack: Vec::new() };
        iter.push_left(self.root.take());
        iter
    }
}
