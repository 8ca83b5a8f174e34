//! Depth-first walks over a node hierarchy. The walk keeps its own stack so a degenerate
//! (chain shaped) tree can't exhaust the call stack.

use crate::tree::Node;

/// The order in which a traversal visits the keys of a [`Tree`][crate::tree::Tree].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Order {
    /// Left subtree, then the node, then the right subtree. Keys come out sorted.
    Inorder,
    /// The node, then its left subtree, then its right subtree.
    Preorder,
    /// Left subtree, then right subtree, then the node.
    Postorder,
}

enum Visit<'a, T> {
    /// Schedule this node and its children according to the walk's [`Order`].
    Expand(&'a Node<T>),
    /// Hand this node out.
    Emit(&'a Node<T>),
}

/// Visits every node reachable from a root exactly once, in the requested [`Order`].
pub(crate) struct Walk<'a, T> {
    order: Order,
    stack: Vec<Visit<'a, T>>,
}

impl<'a, T> Walk<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>, order: Order) -> Self {
        Self {
            order,
            stack: root.map(Visit::Expand).into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for Walk<'a, T> {
    type Item = &'a Node<T>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(visit) = self.stack.pop() {
            let node = match visit {
                Visit::Emit(node) => return Some(node),
                Visit::Expand(node) => node,
            };

            // The stack pops in reverse so everything is pushed back to front.
            let left = node.left.as_deref().map(Visit::Expand);
            let right = node.right.as_deref().map(Visit::Expand);
            match self.order {
                Order::Preorder => {
                    self.stack.extend(right);
                    self.stack.extend(left);
                    return Some(node);
                }
                Order::Inorder => {
                    self.stack.extend(right);
                    self.stack.push(Visit::Emit(node));
                    self.stack.extend(left);
                }
                Order::Postorder => {
                    self.stack.push(Visit::Emit(node));
                    self.stack.extend(right);
                    self.stack.extend(left);
                }
            }
        }

        None
    }
}
