//! The public face of the crate: [`Tree`] owns the root slot and forwards every operation to the
//! root [`Node`].
//!
//! # Examples
//!
//! ```
//! use bintree::{Error, Tree};
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.find(&"d"), None);
//! assert_eq!(tree.delete(&"d"), Err(Error::EmptyTree));
//!
//! tree.insert("d", "delta");
//! tree.insert("b", "bravo");
//! assert_eq!(tree.find(&"d"), Some(&"delta"));
//!
//! // Inserting an existing key keeps the first value.
//! assert!(!tree.insert("d", "dingo"));
//! assert_eq!(tree.find(&"d"), Some(&"delta"));
//!
//! // Deleting a key that isn't there is an error.
//! assert_eq!(tree.delete(&"z"), Err(Error::NotFound));
//!
//! tree.delete(&"d").unwrap();
//! assert_eq!(tree.find(&"d"), None);
//! ```

use std::fmt;

use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::iter::Iter;
use crate::node::{Link, Node};

/// An unbalanced Binary Search Tree mapping keys to values. Keys are unique: inserting a key
/// that is already present leaves the tree unchanged.
///
/// Nothing rebalances the tree, so inserting keys in sorted order degrades it into a list with
/// `O(n)` operations.
pub struct Tree<K, V> {
    root: Link<K, V>,
    len: usize,
}

impl<K, V> Default for Tree<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Clone for Tree<K, V>
where
    K: Clone,
    V: Clone,
{
    fn clone(&self) -> Self {
        Self {
            root: self.root.as_ref().map(|root| root.clone_subtree()),
            len: self.len,
        }
    }
}

impl<K, V> Drop for Tree<K, V> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<K, V> fmt::Debug for Tree<K, V>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V> Tree<K, V> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Inserts `value` under `key`. Returns `true` if a new node was created and `false` if
    /// the key was already present, in which case the existing value is kept.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.insert(1, "one"));
    /// assert!(!tree.insert(1, "uno"));
    /// assert_eq!(tree.find(&1), Some(&"one"));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> bool
    where
        K: Ord,
    {
        let inserted = match self.root.as_mut() {
            Some(root) => root.insert(key, value),
            None => {
                trace!("planting root");
                self.root = Some(Node::new_boxed(key, value));
                true
            }
        };
        if inserted {
            self.len += 1;
        }
        inserted
    }

    /// Potentially finds the value associated with the given key in this tree. If no node has
    /// the corresponding key, `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1, 2);
    ///
    /// assert_eq!(tree.find(&1), Some(&2));
    /// assert_eq!(tree.find(&42), None);
    /// ```
    pub fn find(&self, key: &K) -> Option<&V>
    where
        K: Ord,
    {
        self.root.as_ref()?.find(key)
    }

    /// Returns `true` if the tree holds `key`.
    pub fn contains_key(&self, key: &K) -> bool
    where
        K: Ord,
    {
        self.find(key).is_some()
    }

    /// Deletes the node containing the given key.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyTree`] if the tree has no nodes and [`Error::NotFound`] if no node holds
    /// `key`. The tree is unchanged in both cases.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::{Error, Tree};
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1, 2);
    /// tree.insert(3, 4);
    ///
    /// assert_eq!(tree.delete(&1), Ok(()));
    /// assert_eq!(tree.delete(&1), Err(Error::NotFound));
    ///
    /// // Once the last key is gone, the tree reports that it is empty instead.
    /// assert_eq!(tree.delete(&3), Ok(()));
    /// assert_eq!(tree.delete(&3), Err(Error::EmptyTree));
    /// ```
    pub fn delete(&mut self, key: &K) -> Result<()>
    where
        K: Ord,
    {
        self.remove(key).map(drop)
    }

    /// Deletes the node containing the given key and returns its value.
    ///
    /// # Errors
    ///
    /// Same as [`Tree::delete`].
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1, 2);
    ///
    /// assert_eq!(tree.remove(&1), Ok(2));
    /// assert_eq!(tree.find(&1), None);
    /// ```
    pub fn remove(&mut self, key: &K) -> Result<V>
    where
        K: Ord,
    {
        if self.root.is_none() {
            debug!("delete on empty tree");
            return Err(Error::EmptyTree);
        }

        // The root slot stands in for the root's parent. Whatever the deletion leaves in it
        // (nothing, a promoted child, or the same root with promoted contents) is the new root.
        let (_, value) = Node::delete(&mut self.root, key).map_err(|error| {
            debug!(%error, "nothing deleted");
            error
        })?;
        self.len -= 1;
        Ok(value)
    }

    /// Calls `visitor` on every entry in ascending key order. Each call starts again from the
    /// smallest key.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::Tree;
    ///
    /// let tree: Tree<_, _> = [("b", 2), ("a", 1), ("c", 3)].into_iter().collect();
    ///
    /// let mut sorted = String::new();
    /// tree.traverse(|key, value| sorted.push_str(&format!("{key}:{value} ")));
    ///
    /// assert_eq!(sorted, "a:1 b:2 c:3 ");
    /// ```
    pub fn traverse<F>(&self, mut visitor: F)
    where
        F: FnMut(&K, &V),
    {
        for (key, value) in self.iter() {
            visitor(key, value);
        }
    }

    /// Returns an iterator over the entries in ascending key order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(self.root.as_deref(), self.len)
    }

    /// Returns the number of keys in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the tree holds no keys.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Gets the height of this tree. An empty tree has a height of 0 and a single node has a
    /// height of 1.
    pub fn height(&self) -> usize {
        self.root.as_ref().map_or(0, |root| root.height())
    }

    /// Returns the entry with the smallest key.
    pub fn min(&self) -> Option<(&K, &V)> {
        let node = self.root.as_ref()?.first();
        Some((&node.key, &node.value))
    }

    /// Returns the entry with the largest key.
    pub fn max(&self) -> Option<(&K, &V)> {
        let node = self.root.as_ref()?.last();
        Some((&node.key, &node.value))
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        // Dropping a deep (degenerate) tree recursively could overflow the stack.
        let mut stack: Vec<Box<Node<K, V>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
        self.len = 0;
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for Tree<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

/// Extending keeps the first value seen for each key, like repeated [`Tree::insert`]s.
impl<K: Ord, V> Extend<(K, V)> for Tree<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<'a, K, V> IntoIterator for &'a Tree<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
