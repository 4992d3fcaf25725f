//! Module ``index`` implement a thread-safe facade over [RbTree].
//!
//! [Index] type serializes every operation, reads included, behind a
//! single coarse [Mutex]. The latch is held for the full duration of the
//! call and released on every exit path, including lookups that find
//! nothing.
//!
//! [RwIndex] substitutes a [RwLock] as latch, allowing concurrent `find`
//! calls while inserts and removes stay exclusive with everything else.
//! Both share the same tree algorithms, the latch is abstracted by the
//! [Latch] trait.
//!
//! Cloning an index is cheap, the clone refers to the same tree.

use log::debug;

use std::{
    borrow::Borrow,
    fmt, marker,
    sync::{Arc, Mutex, PoisonError, RwLock},
};

use crate::{tree::RbTree, Element, Result, Stats};

/// Latch that guards an [RbTree] instance.
///
/// A latch poisoned by a panicking thread is still handed out. Key
/// comparisons, the only foreign code run under the latch, happen before
/// the tree is mutated, so a panic never leaves it half rebalanced.
pub trait Latch<T> {
    /// Wrap `tree` behind this latch.
    fn new_latch(tree: RbTree<T>) -> Self;

    /// Run `f` with shared access to the tree.
    fn read<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&RbTree<T>) -> R;

    /// Run `f` with exclusive access to the tree.
    fn write<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut RbTree<T>) -> R;

    /// Name of this latch, for logging.
    fn to_latch_name() -> &'static str;
}

impl<T> Latch<T> for Mutex<RbTree<T>> {
    fn new_latch(tree: RbTree<T>) -> Self {
        Mutex::new(tree)
    }

    fn read<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&RbTree<T>) -> R,
    {
        let tree = self.lock().unwrap_or_else(PoisonError::into_inner);
        f(&tree)
    }

    fn write<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut RbTree<T>) -> R,
    {
        let mut tree = self.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut tree)
    }

    fn to_latch_name() -> &'static str {
        "mutex"
    }
}

impl<T> Latch<T> for RwLock<RbTree<T>> {
    fn new_latch(tree: RbTree<T>) -> Self {
        RwLock::new(tree)
    }

    fn read<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&RbTree<T>) -> R,
    {
        let tree = RwLock::read(self).unwrap_or_else(PoisonError::into_inner);
        f(&tree)
    }

    fn write<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut RbTree<T>) -> R,
    {
        let mut tree = RwLock::write(self).unwrap_or_else(PoisonError::into_inner);
        f(&mut tree)
    }

    fn to_latch_name() -> &'static str {
        "rwlock"
    }
}

/// Index type for thread-safe access to a red-black tree, all operations
/// serialized by one latch.
pub struct Index<T, L = Mutex<RbTree<T>>> {
    name: String,
    inner: Arc<L>,

    _item: marker::PhantomData<T>,
}

/// Index variant that allows concurrent lookups.
pub type RwIndex<T> = Index<T, RwLock<RbTree<T>>>;

impl<T, L> Clone for Index<T, L> {
    fn clone(&self) -> Self {
        Index {
            name: self.name.clone(),
            inner: Arc::clone(&self.inner),
            _item: marker::PhantomData,
        }
    }
}

impl<T, L> Index<T, L>
where
    L: Latch<T>,
{
    /// Create an empty index identified by `name`.
    pub fn new(name: &str) -> Index<T, L> {
        Self::from_tree(name, RbTree::new())
    }

    /// Create an index out of an already populated tree.
    pub fn from_tree(name: &str, tree: RbTree<T>) -> Index<T, L> {
        debug!("index {} created, {} latch, {} elements", name, L::to_latch_name(), tree.len());

        Index {
            name: name.to_string(),
            inner: Arc::new(L::new_latch(tree)),
            _item: marker::PhantomData,
        }
    }

    /// Identify this index instance.
    #[inline]
    pub fn to_name(&self) -> String {
        self.name.clone()
    }

    /// Return number of elements in this instance.
    pub fn len(&self) -> usize {
        self.inner.read(|tree| tree.len())
    }

    /// Return whether index is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T, L> Index<T, L>
where
    T: Element,
    L: Latch<T>,
{
    /// Insert `item` into index. Always succeeds, elements with
    /// duplicate keys are kept side by side.
    pub fn insert(&self, item: T) {
        self.inner.write(|tree| tree.insert(item))
    }

    /// Remove one element matching `key`. Return whether an element was
    /// found and removed.
    pub fn remove<Q>(&self, key: &Q) -> bool
    where
        T::Key: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.inner.write(|tree| tree.remove(key).is_some())
    }

    /// Find an element matching `key` and return a copy of it.
    pub fn find<Q>(&self, key: &Q) -> Option<T>
    where
        T: Clone,
        T::Key: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.inner.read(|tree| tree.get(key).cloned())
    }

    /// Return a snapshot of all elements, in key order.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.inner.read(|tree| tree.iter().cloned().collect())
    }

    /// Validate the tree, refer to [RbTree::validate].
    pub fn validate(&self) -> Result<Stats>
    where
        T::Key: fmt::Debug,
    {
        self.inner.read(|tree| tree.validate())
    }
}

impl<T, L> Index<T, L>
where
    L: Latch<T>,
{
    /// Return the number of nodes on the longest root-to-leaf path.
    pub fn height(&self) -> usize {
        self.inner.read(|tree| tree.height())
    }

    /// Render the tree for debugging, refer to [RbTree::dump].
    pub fn dump(&self) -> String
    where
        T: fmt::Debug,
    {
        self.inner.read(|tree| tree.dump())
    }
}

#[cfg(test)]
#[path = "index_test.rs"]
mod index_test;
