//! Unique-key associative container backed by an unbalanced binary search
//! tree.
//!
//! # Shape
//!
//! Each node owns its children through `Option<Box<Node>>`.  There is no
//! rebalancing, so depth is linear in the number of keys when they arrive in
//! sorted order.  All operations therefore walk the tree iteratively: lookup
//! and insertion descend with a loop, and teardown drains nodes onto an
//! explicit stack instead of relying on recursive `Box` drops.
//!
//! Callers never observe ordering; the map only promises unique keys with
//! last-write-wins on re-association.

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;

type Link<K, V> = Option<Box<Node<K, V>>>;

struct Node<K, V> {
    key:   K,
    value: V,
    left:  Link<K, V>,
    right: Link<K, V>,
}

/// Binary-search-tree map with `associate` / `find` semantics.
///
/// # Example
///
/// ```
/// use nav_map::OrderedMap;
///
/// let mut m = OrderedMap::new();
/// m.associate("city hall".to_string(), 1);
/// m.associate("city hall".to_string(), 2);
/// assert_eq!(m.find("city hall"), Some(&2));
/// assert_eq!(m.size(), 1);
/// ```
pub struct OrderedMap<K, V> {
    root: Link<K, V>,
    len:  usize,
}

impl<K: Ord, V> OrderedMap<K, V> {
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Insert `key`, or overwrite the value already stored under it.
    pub fn associate(&mut self, key: K, value: V) {
        let mut link = &mut self.root;
        while let Some(node) = link {
            match key.cmp(&node.key) {
                Ordering::Less    => link = &mut node.left,
                Ordering::Greater => link = &mut node.right,
                Ordering::Equal   => {
                    node.value = value;
                    return;
                }
            }
        }
        *link = Some(Box::new(Node { key, value, left: None, right: None }));
        self.len += 1;
    }

    /// Borrow the value stored under `key`, if any.
    pub fn find<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut cur = self.root.as_deref();
        while let Some(node) = cur {
            match key.cmp(node.key.borrow()) {
                Ordering::Less    => cur = node.left.as_deref(),
                Ordering::Greater => cur = node.right.as_deref(),
                Ordering::Equal   => return Some(&node.value),
            }
        }
        None
    }

    /// Mutably borrow the value stored under `key`, if any.
    pub fn find_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut cur = self.root.as_deref_mut();
        while let Some(node) = cur {
            match key.cmp(node.key.borrow()) {
                Ordering::Less    => cur = node.left.as_deref_mut(),
                Ordering::Greater => cur = node.right.as_deref_mut(),
                Ordering::Equal   => return Some(&mut node.value),
            }
        }
        None
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find(key).is_some()
    }
}

impl<K, V> OrderedMap<K, V> {
    /// Number of distinct keys.
    #[inline]
    pub fn size(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Remove every entry.
    ///
    /// Nodes are detached onto a work stack one at a time so a degenerate
    /// tree of any depth is freed in constant stack space.
    pub fn clear(&mut self) {
        let mut pending: Vec<Box<Node<K, V>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
        self.len = 0;
    }
}

impl<K, V> Drop for OrderedMap<K, V> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<K: Ord, V> Default for OrderedMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> fmt::Debug for OrderedMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderedMap").field("len", &self.len).finish()
    }
}
