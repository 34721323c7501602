//! The recursive building block of [`Tree`][crate::Tree].
//!
//! A `Node` exclusively owns its children and never points back at its parent. Operations that
//! need to rewire a parent's child link (deletion) are handed that link directly: a [`Link`] is
//! the parent's child slot that currently owns the node. The tree's own root slot plays the same
//! role for the root, so the root needs no special casing.

use std::cmp::Ordering;
use std::mem;

use tracing::trace;

use crate::error::{Error, Result};

/// A child slot. Empty slots terminate every descent.
pub(crate) type Link<K, V> = Option<Box<Node<K, V>>>;

pub(crate) struct Node<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
    pub(crate) left: Link<K, V>,
    pub(crate) right: Link<K, V>,
}

impl<K, V> Node<K, V> {
    pub(crate) fn new_boxed(key: K, value: V) -> Box<Self> {
        Box::new(Self {
            key,
            value,
            left: None,
            right: None,
        })
    }

    /// Inserts `key` somewhere below this node. Returns `false`, leaving the stored value
    /// untouched, if the key is already present.
    pub(crate) fn insert(&mut self, key: K, value: V) -> bool
    where
        K: Ord,
    {
        let (slot, side) = match key.cmp(&self.key) {
            Ordering::Less => (&mut self.left, "left"),
            Ordering::Equal => {
                trace!("key already present, keeping the existing value");
                return false;
            }
            Ordering::Greater => (&mut self.right, "right"),
        };

        match slot {
            Some(child) => child.insert(key, value),
            None => {
                trace!(side, "attaching new leaf");
                *slot = Some(Self::new_boxed(key, value));
                true
            }
        }
    }

    pub(crate) fn find(&self, key: &K) -> Option<&V>
    where
        K: Ord,
    {
        match key.cmp(&self.key) {
            Ordering::Less => self.left.as_ref()?.find(key),
            Ordering::Equal => Some(&self.value),
            Ordering::Greater => self.right.as_ref()?.find(key),
        }
    }

    /// Deletes `key` from the subtree owned by `slot` and returns the removed key and value.
    ///
    /// The descent only reads until the key is located, so a miss leaves the tree untouched.
    pub(crate) fn delete(slot: &mut Link<K, V>, key: &K) -> Result<(K, V)>
    where
        K: Ord,
    {
        let node = slot.as_deref_mut().ok_or(Error::NotFound)?;
        match key.cmp(&node.key) {
            // `node` becomes the parent of the next call.
            Ordering::Less => Self::delete(&mut node.left, key),
            Ordering::Greater => Self::delete(&mut node.right, key),
            Ordering::Equal => Ok(Self::unlink(slot)),
        }
    }

    /// Removes the node owned by `slot` while keeping every other node reachable.
    ///
    /// A node with zero or one child is replaced by that child. A node with two children stays
    /// where it is and takes over the key and value of its predecessor (the largest key of its
    /// left subtree), which is unlinked instead. The predecessor has no right child, so the
    /// recursive call never reaches the two-children branch again.
    fn unlink(slot: &mut Link<K, V>) -> (K, V) {
        let node = slot
            .as_deref_mut()
            .expect("unlink requires the slot of an existing node");

        if node.left.is_some() && node.right.is_some() {
            trace!("promoting predecessor into node with two children");
            let (key, value) = Self::unlink(Self::find_max(&mut node.left));
            return (
                mem::replace(&mut node.key, key),
                mem::replace(&mut node.value, value),
            );
        }

        // At most one of these is occupied.
        let replacement = node.left.take().or(node.right.take());
        trace!(
            promoted_child = replacement.is_some(),
            "unlinking node with fewer than two children"
        );
        let removed = Self::replace_child_link(slot, replacement);
        (removed.key, removed.value)
    }

    /// Follows right children from the node owned by `slot` and returns the slot owning the
    /// largest node of that subtree. That slot lives in the largest node's parent, or is `slot`
    /// itself when the starting node has no right child.
    ///
    /// `slot` must be occupied.
    fn find_max(slot: &mut Link<K, V>) -> &mut Link<K, V> {
        if slot.as_ref().is_some_and(|node| node.right.is_some()) {
            let node = slot.as_mut().expect("checked for a right child above");
            Self::find_max(&mut node.right)
        } else {
            slot
        }
    }

    /// Points the parent's `slot` at `replacement` and hands back the node it used to own.
    ///
    /// ## Panics
    ///
    /// When `slot` is empty. Callers must pass the slot that owns the node being replaced.
    fn replace_child_link(slot: &mut Link<K, V>, replacement: Link<K, V>) -> Box<Self> {
        mem::replace(slot, replacement).expect("replaced slot must own a node")
    }

    /// Number of levels in the subtree rooted here. A node without children has a height of 1.
    pub(crate) fn height(&self) -> usize {
        let left = self.left.as_ref().map_or(0, |n| n.height());
        let right = self.right.as_ref().map_or(0, |n| n.height());
        left.max(right) + 1
    }

    pub(crate) fn first(&self) -> &Self {
        let mut node = self;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        node
    }

    pub(crate) fn last(&self) -> &Self {
        let mut node = self;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        node
    }

    /// Copies the subtree rooted here, keeping its exact shape.
    ///
    /// Works bottom up with explicit stacks so that degenerate trees can't overflow the call
    /// stack: children are copied before their parent, left before right.
    pub(crate) fn clone_subtree(&self) -> Box<Self>
    where
        K: Clone,
        V: Clone,
    {
        enum Step<'a, K, V> {
            Descend(&'a Node<K, V>),
            Assemble(&'a Node<K, V>),
        }

        let mut steps = vec![Step::Descend(self)];
        let mut copies: Vec<Box<Self>> = Vec::new();
        while let Some(step) = steps.pop() {
            match step {
                Step::Descend(node) => {
                    steps.push(Step::Assemble(node));
                    steps.extend(node.right.as_deref().map(Step::Descend));
                    steps.extend(node.left.as_deref().map(Step::Descend));
                }
                Step::Assemble(node) => {
                    // The right copy was finished last, so it sits on top.
                    let right = if node.right.is_some() { copies.pop() } else { None };
                    let left = if node.left.is_some() { copies.pop() } else { None };
                    copies.push(Box::new(Self {
                        key: node.key.clone(),
                        value: node.value.clone(),
                        left,
                        right,
                    }));
                }
            }
        }

        copies.pop().expect("the starting node is always assembled")
    }
}
