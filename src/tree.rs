//! An unbalanced Binary Search Tree holding a set of keys. Nodes own their children through
//! `Box`es so every node has exactly one owner and no `unsafe` is needed. Nothing keeps the
//! tree balanced: inserting keys in sorted order builds a chain as deep as the tree is long.
//!
//! Every operation walks the tree with a loop or an explicit stack rather than recursion, so
//! even a chain of many thousands of nodes can be searched, printed, cloned, and dropped.
//!
//! # Examples
//!
//! ```
//! use bst::tree::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(tree.is_empty());
//! assert!(tree.find_min().is_err());
//!
//! for key in [5, 3, 8, 1, 4] {
//!     tree.insert(key);
//! }
//!
//! // Inserting a key that's already present does nothing.
//! assert!(!tree.insert(3));
//! assert_eq!(tree.len(), 5);
//!
//! let mut out = Vec::new();
//! tree.print_inorder(&mut out).unwrap();
//! assert_eq!(out, b"1\n3\n4\n5\n8\n");
//!
//! // Removing a key hands it back.
//! assert_eq!(tree.remove(&5), Some(5));
//! assert!(!tree.contains(&5));
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::io::Write;
use std::iter::FromIterator;

use crate::error::{Result, TreeError};
pub use crate::walk::Order;
use crate::walk::Walk;

/// An owned child subtree. `None` means there is no subtree in this slot.
type Link<T> = Option<Box<Node<T>>>;

pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T> Node<T> {
    fn new_boxed(value: T) -> Box<Self> {
        Box::new(Self {
            value,
            left: None,
            right: None,
        })
    }
}

/// An unbalanced Binary Search Tree storing distinct keys. Keys are ordered by their
/// [`Ord`] implementation; inserting a key equal to one already stored is ignored.
///
/// Moving a `Tree` only moves its root pointer. [`Clone`] builds a brand new hierarchy with
/// the same keys in the same shape.
pub struct Tree<T> {
    root: Link<T>,
    len: usize,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Tree<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Clone for Tree<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        // Postorder finishes both children before their parent, so the copies of a node's
        // children are on top of `built` (right above left) when the node comes up.
        let mut built: Vec<Box<Node<T>>> = Vec::new();
        for node in Walk::new(self.root(), Order::Postorder) {
            let right = if node.right.is_some() { built.pop() } else { None };
            let left = if node.left.is_some() { built.pop() } else { None };
            built.push(Box::new(Node {
                value: node.value.clone(),
                left,
                right,
            }));
        }
        log::debug!("cloned tree of {} nodes", self.len);

        Self {
            root: built.pop(),
            len: self.len,
        }
    }
}

impl<T> fmt::Debug for Tree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set()
            .entries(Walk::new(self.root(), Order::Inorder).map(|n| &n.value))
            .finish()
    }
}

impl<T> Extend<T> for Tree<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<T> FromIterator<T> for Tree<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Returns `true` if the tree holds no keys.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns how many keys the tree holds.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Drops every node, leaving the tree as it was after [`Tree::new`].
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::tree::Tree;
    ///
    /// let mut tree: Tree<_> = (1..=3).collect();
    /// tree.clear();
    ///
    /// assert!(tree.is_empty());
    /// assert!(!tree.contains(&2));
    /// ```
    pub fn clear(&mut self) {
        // Detach children before each node drops so `Box`'s drop never recurses down a chain.
        let mut pending: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }

        if self.len > 0 {
            log::debug!("released {} nodes", self.len);
        }
        self.len = 0;
    }

    /// Counts the nodes on the longest path from the root down to a leaf. An empty tree has a
    /// height of 0 and a tree built from sorted keys has a height equal to its length.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut pending: Vec<(&Node<T>, usize)> =
            self.root().map(|n| (n, 1)).into_iter().collect();
        while let Some((node, depth)) = pending.pop() {
            height = height.max(depth);
            pending.extend(node.left.as_deref().map(|n| (n, depth + 1)));
            pending.extend(node.right.as_deref().map(|n| (n, depth + 1)));
        }

        height
    }

    /// Returns the smallest key in the tree, or [`TreeError::Empty`] if there are none.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::tree::Tree;
    ///
    /// let tree: Tree<_> = vec![5, 3, 8].into_iter().collect();
    /// assert_eq!(tree.find_min().unwrap(), &3);
    ///
    /// let empty = Tree::<i32>::new();
    /// assert!(empty.find_min().is_err());
    /// ```
    pub fn find_min(&self) -> Result<&T> {
        let mut node = self.root().ok_or(TreeError::Empty)?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }

        Ok(&node.value)
    }

    /// Returns the largest key in the tree, or [`TreeError::Empty`] if there are none.
    pub fn find_max(&self) -> Result<&T> {
        let mut node = self.root().ok_or(TreeError::Empty)?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }

        Ok(&node.value)
    }

    /// Returns `true` if a key equal to `key` is stored in the tree.
    pub fn contains(&self, key: &T) -> bool
    where
        T: Ord,
    {
        self.get(key).is_some()
    }

    /// Potentially finds the stored key equal to `key`. If no node has an equal key, `None` is
    /// returned.
    pub fn get(&self, key: &T) -> Option<&T>
    where
        T: Ord,
    {
        let mut link = self.root();
        while let Some(node) = link {
            link = match key.cmp(&node.value) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Equal => return Some(&node.value),
                Ordering::Greater => node.right.as_deref(),
            };
        }

        None
    }

    /// Inserts `key` into the tree. Returns `true` if it was added and `false` if an equal key
    /// was already stored, in which case the tree is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.insert(5));
    /// assert!(!tree.insert(5));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, key: T) -> bool
    where
        T: Ord,
    {
        let (slot, depth) = locate(&mut self.root, &key);
        if slot.is_some() {
            log::trace!("ignored duplicate key at depth {}", depth);
            return false;
        }

        *slot = Some(Node::new_boxed(key));
        self.len += 1;
        log::trace!("linked new node at depth {}", depth);
        true
    }

    /// Removes the key equal to `key` from the tree and returns it. If the tree does not
    /// contain such a key, nothing happens.
    ///
    /// A node with two children is replaced by its in-order successor (the smallest key in its
    /// right subtree) which is itself spliced out of that subtree.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::tree::Tree;
    ///
    /// let mut tree: Tree<_> = vec![5, 3, 8].into_iter().collect();
    ///
    /// assert_eq!(tree.remove(&5), Some(5));
    /// assert_eq!(tree.remove(&5), None);
    ///
    /// let mut out = Vec::new();
    /// tree.print_preorder(&mut out).unwrap();
    /// assert_eq!(out, b"8\n3\n");
    /// ```
    pub fn remove(&mut self, key: &T) -> Option<T>
    where
        T: Ord,
    {
        let (slot, depth) = locate(&mut self.root, key);
        let Some(mut node) = slot.take() else {
            log::debug!("key to remove not found (searched to depth {})", depth);
            return None;
        };

        *slot = match (node.left.take(), node.right.take()) {
            (Some(left), Some(mut right)) => {
                log::debug!("promoting in-order successor to depth {}", depth);
                let mut successor = match take_min(&mut right.left) {
                    // `right` has no left child so it is the successor and keeps its own right
                    // subtree.
                    None => right,
                    Some(mut min) => {
                        min.right = Some(right);
                        min
                    }
                };
                successor.left = Some(left);
                Some(successor)
            }
            (left, None) => left,
            (None, right) => right,
        };
        self.len -= 1;

        Some(node.value)
    }

    /// Writes every key to `out`, one per line, in the given [`Order`].
    pub fn print<W>(&self, order: Order, mut out: W) -> Result<()>
    where
        W: Write,
        T: fmt::Display,
    {
        for node in Walk::new(self.root(), order) {
            writeln!(out, "{}", node.value)?;
        }

        Ok(())
    }

    /// Writes every key to `out`, one per line, in ascending order.
    pub fn print_inorder<W>(&self, out: W) -> Result<()>
    where
        W: Write,
        T: fmt::Display,
    {
        self.print(Order::Inorder, out)
    }

    /// Writes every key to `out`, one per line, each node before its left then right subtree.
    pub fn print_preorder<W>(&self, out: W) -> Result<()>
    where
        W: Write,
        T: fmt::Display,
    {
        self.print(Order::Preorder, out)
    }

    /// Writes every key to `out`, one per line, each node after its left then right subtree.
    pub fn print_postorder<W>(&self, out: W) -> Result<()>
    where
        W: Write,
        T: fmt::Display,
    {
        self.print(Order::Postorder, out)
    }

    pub(crate) fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }
}

/// Follows the search path for `key` and returns the slot where it ends: the link holding the
/// equal key, or the empty link where it would be inserted. Also returns that slot's depth.
fn locate<'a, T>(mut link: &'a mut Link<T>, key: &T) -> (&'a mut Link<T>, usize)
where
    T: Ord,
{
    let mut depth = 0;
    loop {
        let ordering = link.as_deref().map(|n| key.cmp(&n.value));
        link = match (ordering, link) {
            (Some(Ordering::Less), Some(node)) => &mut node.left,
            (Some(Ordering::Greater), Some(node)) => &mut node.right,
            (_, link) => return (link, depth),
        };
        depth += 1;
    }
}

/// Splices the smallest node out of the subtree in `link`, putting that node's right child in
/// its place. Returns `None` if the subtree is empty.
fn take_min<T>(mut link: &mut Link<T>) -> Link<T> {
    while link.as_ref().map_or(false, |n| n.left.is_some()) {
        if let Some(node) = link {
            link = &mut node.left;
        }
    }

    let mut min = link.take()?;
    *link = min.right.take();
    Some(min)
}
