//! An in-place AVL tree over owned boxed nodes. Any operation that would
//! restructure the tree (e.g. `insert` or `delete`) is written in a
//! value-passing style internally: a recursive helper takes ownership of a
//! subtree and returns ownership of the possibly-restructured subtree, and
//! the caller reassigns its child link. Rotations can promote a different
//! node to the top of any subtree, including the root.
//!
//! # Examples
//!
//! ```
//! use avl::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains(&1));
//!
//! tree.insert(1);
//! tree.insert(3);
//! tree.insert(2);
//!
//! assert!(tree.contains(&2));
//! assert_eq!(tree.in_order().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
//!
//! // Deleting a value that isn't there is fine too.
//! tree.delete(&2);
//! tree.delete(&2);
//! assert!(!tree.contains(&2));
//! ```

use std::cmp::Ordering;

type Link<T> = Option<Box<Node<T>>>;

/// A self-balancing Binary Search Tree (specifically, an AVL tree) storing a
/// set of distinct values. Inserting a value that is already present and
/// deleting a value that is absent are both silent no-ops.
#[derive(Clone)]
pub struct Tree<T> {
    root: Link<T>,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Returns `true` if the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Gets the height of this tree: the number of levels of nodes, with an
    /// empty tree having height 0.
    pub fn height(&self) -> usize {
        height(&self.root)
    }

    /// Visits every value in pre-order: each node before both of its
    /// subtrees, left subtree before right.
    pub fn pre_order(&self) -> PreOrder<'_, T> {
        PreOrder::new(&self.root)
    }

    /// Visits every value in in-order: left subtree, node, right subtree.
    /// For a valid tree this yields the values in strictly ascending order.
    pub fn in_order(&self) -> InOrder<'_, T> {
        InOrder::new(&self.root)
    }

    /// Visits every value in post-order: both subtrees of each node before
    /// the node itself, left subtree before right.
    pub fn post_order(&self) -> PostOrder<'_, T> {
        PostOrder::new(&self.root)
    }
}

impl<T> Tree<T>
where
    T: Ord,
{
    /// Inserts a value into the tree, rebalancing as needed. Inserting a
    /// value that is already present leaves the tree untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(2);
    /// tree.insert(2);
    ///
    /// assert!(tree.contains(&2));
    /// assert_eq!(tree.in_order().count(), 1);
    /// ```
    pub fn insert(&mut self, value: T) {
        self.root = Node::insert(self.root.take(), value);
    }

    /// Returns whether the given value is in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    ///
    /// assert!(tree.contains(&1));
    /// assert!(!tree.contains(&42));
    /// ```
    pub fn contains(&self, value: &T) -> bool {
        let mut current = &self.root;
        while let Some(node) = current {
            match value.cmp(&node.value) {
                Ordering::Less => current = &node.left,
                Ordering::Equal => return true,
                Ordering::Greater => current = &node.right,
            }
        }
        false
    }

    /// Deletes a value from the tree, rebalancing as needed. Deleting a
    /// value that was never inserted leaves the tree untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    /// tree.delete(&1);
    ///
    /// assert!(!tree.contains(&1));
    /// assert!(tree.is_empty());
    /// ```
    pub fn delete(&mut self, value: &T) {
        self.root = Node::delete(self.root.take(), value);
    }
}

/// A `Node` has a value that is used for searching/sorting and two optional
/// children. Each child is exclusively owned by its parent.
#[derive(Clone)]
struct Node<T> {
    value: T,
    left: Link<T>,
    right: Link<T>,

    /// How many levels are in the subtree rooted at this node.
    /// A node with no children has a height of 1.
    height: usize,
}

/// The height of the subtree behind a link, with an absent subtree counting
/// as height 0.
fn height<T>(link: &Link<T>) -> usize {
    link.as_deref().map_or(0, |node| node.height)
}

/// The balance factor of the node behind a link: left height minus right
/// height, 0 for an absent subtree.
fn balance_factor<T>(link: &Link<T>) -> isize {
    link.as_deref().map_or(0, |node| {
        height(&node.left) as isize - height(&node.right) as isize
    })
}

impl<T> Node<T>
where
    T: Ord,
{
    /// Construct a new boxed `Node` holding just the given `value`.
    fn new(value: T) -> Box<Self> {
        Box::new(Self {
            value,
            left: None,
            right: None,
            height: 1,
        })
    }

    /// Recomputes this node's cached height from its children's cached
    /// heights. Both children must already be up to date.
    fn update_height(&mut self) {
        self.height = 1 + height(&self.left).max(height(&self.right));
    }

    /// Rotates the right child up to become the subtree root. To maintain
    /// the BST ordering, the right child's left subtree moves over to become
    /// this node's right subtree. Heights are recomputed child-first.
    fn rotate_left(mut node: Box<Self>) -> Box<Self> {
        let mut pivot = match node.right.take() {
            Some(right) => right,
            // We only rotate left when the right subtree is taller than the
            // left subtree, so a right child must exist.
            None => unreachable!("`rebalance` saw right subtree taller than left subtree"),
        };
        node.right = pivot.left.take();
        node.update_height();
        pivot.left = Some(node);
        pivot.update_height();
        pivot
    }

    /// Mirror image of [`Self::rotate_left`]: the left child becomes the
    /// subtree root and its right subtree moves over to this node's left.
    fn rotate_right(mut node: Box<Self>) -> Box<Self> {
        let mut pivot = match node.left.take() {
            Some(left) => left,
            None => unreachable!("`rebalance` saw left subtree taller than right subtree"),
        };
        node.left = pivot.right.take();
        node.update_height();
        pivot.right = Some(node);
        pivot.update_height();
        pivot
    }

    /// Restores the AVL invariant at this node after one child's height
    /// changed by at most one, dispatching to one of the four rotation
    /// cases. The node's cached height must already be up to date.
    ///
    /// The comparisons against the child's balance factor are deliberately
    /// non-strict: a perfectly balanced child still takes the single
    /// rotation, which is the correct case for it.
    fn rebalance(mut node: Box<Self>) -> Box<Self> {
        let bf = height(&node.left) as isize - height(&node.right) as isize;

        let node = if bf > 1 {
            if balance_factor(&node.left) >= 0 {
                Self::rotate_right(node)
            } else {
                node.left = node.left.take().map(Self::rotate_left);
                Self::rotate_right(node)
            }
        } else if bf < -1 {
            if balance_factor(&node.right) <= 0 {
                Self::rotate_left(node)
            } else {
                node.right = node.right.take().map(Self::rotate_right);
                Self::rotate_left(node)
            }
        } else {
            node
        };

        // In tests, after rebalancing, assert that we've restored/maintained
        // the AVL invariant at this node.
        if cfg!(test) {
            let bf = height(&node.left) as isize - height(&node.right) as isize;
            assert!(bf.abs() <= 1);
        }
        node
    }

    /// Inserts `value` into the subtree behind `link` and returns the new
    /// subtree root. The only allocation happens at the absent-link base
    /// case; a duplicate value returns the subtree unchanged.
    fn insert(link: Link<T>, value: T) -> Link<T> {
        let mut node = match link {
            None => return Some(Self::new(value)),
            Some(node) => node,
        };

        match value.cmp(&node.value) {
            Ordering::Less => node.left = Self::insert(node.left.take(), value),
            Ordering::Greater => node.right = Self::insert(node.right.take(), value),
            // Already present, nothing to do.
            Ordering::Equal => return Some(node),
        }

        node.update_height();
        Some(Self::rebalance(node))
    }

    /// Deletes `value` from the subtree behind `link` and returns the new
    /// subtree root, `None` if the subtree becomes empty. An absent value
    /// returns the subtree unchanged.
    fn delete(link: Link<T>, value: &T) -> Link<T> {
        let mut node = link?;

        match value.cmp(&node.value) {
            Ordering::Less => node.left = Self::delete(node.left.take(), value),
            Ordering::Greater => node.right = Self::delete(node.right.take(), value),
            Ordering::Equal => match (node.left.take(), node.right.take()) {
                (None, None) => return None,
                // A lone child reattaches directly in this node's place. The
                // caller recomputes its own height and rebalances, so no
                // fixup is needed at this level.
                (Some(child), None) | (None, Some(child)) => return Some(child),

                // With two children we overwrite this node's value with that
                // of its in-order predecessor - the largest value in the
                // left subtree - and remove the predecessor's node from that
                // subtree instead. The node itself survives; only its value
                // changes.
                (Some(left), right) => {
                    let (left, predecessor) = Self::take_max(left);
                    node.value = predecessor;
                    node.left = left;
                    node.right = right;
                }
            },
        }

        node.update_height();
        Some(Self::rebalance(node))
    }

    /// Removes the largest node from the subtree and returns the remaining
    /// subtree, rebalanced along the unwind path, together with that largest
    /// value.
    fn take_max(mut node: Box<Self>) -> (Link<T>, T) {
        match node.right.take() {
            None => {
                let Self { value, left, .. } = *node;
                (left, value)
            }
            Some(right) => {
                let (right, max) = Self::take_max(right);
                node.right = right;
                node.update_height();
                (Some(Self::rebalance(node)), max)
            }
        }
    }
}

/// Lazy pre-order traversal returned by [`Tree::pre_order`].
pub struct PreOrder<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> PreOrder<'a, T> {
    fn new(root: &'a Link<T>) -> Self {
        Self {
            stack: root.as_deref().into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for PreOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let node = self.stack.pop()?;
        // Right below left so that the left subtree pops first.
        if let Some(right) = node.right.as_deref() {
            self.stack.push(right);
        }
        if let Some(left) = node.left.as_deref() {
            self.stack.push(left);
        }
        Some(&node.value)
    }
}

/// Lazy in-order traversal returned by [`Tree::in_order`].
pub struct InOrder<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> InOrder<'a, T> {
    fn new(root: &'a Link<T>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    /// Stacks the given subtree root and every node on its left spine, so
    /// that the smallest unvisited value ends up on top.
    fn push_left_spine(&mut self, mut link: &'a Link<T>) {
        while let Some(node) = link.as_deref() {
            self.stack.push(node);
            link = &node.left;
        }
    }
}

impl<'a, T> Iterator for InOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let node = self.stack.pop()?;
        self.push_left_spine(&node.right);
        Some(&node.value)
    }
}

/// Lazy post-order traversal returned by [`Tree::post_order`].
pub struct PostOrder<'a, T> {
    /// Nodes paired with whether their children have been stacked yet. A
    /// node is only yielded the second time it surfaces.
    stack: Vec<(&'a Node<T>, bool)>,
}

impl<'a, T> PostOrder<'a, T> {
    fn new(root: &'a Link<T>) -> Self {
        Self {
            stack: root.as_deref().map(|node| (node, false)).into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for PostOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        while let Some((node, expanded)) = self.stack.pop() {
            if expanded {
                return Some(&node.value);
            }
            self.stack.push((node, true));
            if let Some(right) = node.right.as_deref() {
                self.stack.push((right, false));
            }
            if let Some(left) = node.left.as_deref() {
                self.stack.push((left, false));
            }
        }
        None
    }
}
