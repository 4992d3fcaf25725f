//! Module provide the single threaded red-black tree, [RbTree].
//!
//! - Elements are ordered by [Element::as_key], duplicates allowed.
//! - Insert, remove and lookup in O(log n).
//! - Full in-order iteration, walking parent links.
//! - Validation of all red-black invariants, refer to [RbTree::validate].
//! - Diagnostic dump, refer to [RbTree::dump].
//! - Not thread safe, refer to [Index] for a latched version.
//!
//! Nodes are held in a dense arena and refer to each other by index, a
//! removed node's slot is recycled by later inserts.
//!
//! [Index]: crate::Index

use std::{
    borrow::Borrow,
    cmp,
    collections::VecDeque,
    fmt,
    iter::{FromIterator, FusedIterator},
};

use crate::{
    delete,
    insert,
    node::{Arena, Color, NIL},
    Element, Error, Result,
};

/// RbTree manage a single instance of in-memory index using
/// [red-black][wiki-rbt] tree.
///
/// [wiki-rbt]: https://en.wikipedia.org/wiki/Red%E2%80%93black_tree
#[derive(Clone)]
pub struct RbTree<T> {
    arena: Arena<T>,
    root: usize,
    n_count: usize, // number of elements in the tree.
}

/// Statistics gathered by [RbTree::validate].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Stats {
    /// Number of elements in the tree.
    pub n_count: usize,
    /// Black nodes on every path from root to sentinel.
    pub n_blacks: usize,
    /// Nodes on the longest path from root to a leaf.
    pub depth: usize,
}

impl<T> Default for RbTree<T> {
    fn default() -> RbTree<T> {
        RbTree::new()
    }
}

impl<T> RbTree<T> {
    /// Create an empty instance of RbTree.
    pub fn new() -> RbTree<T> {
        RbTree {
            arena: Arena::new(),
            root: NIL,
            n_count: Default::default(),
        }
    }

    /// Create an empty instance with room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> RbTree<T> {
        RbTree {
            arena: Arena::with_capacity(capacity),
            root: NIL,
            n_count: Default::default(),
        }
    }
}

/// Maintenance API.
impl<T> RbTree<T> {
    /// Return number of elements in this instance.
    #[inline]
    pub fn len(&self) -> usize {
        self.n_count
    }

    /// Check whether this instance is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.n_count == 0
    }

    /// Drop all elements.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = NIL;
        self.n_count = 0;
    }

    /// Return the number of nodes on the longest root-to-leaf path. An
    /// empty tree has ZERO height.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut queue = VecDeque::new();
        if self.root != NIL {
            queue.push_back((self.root, 1));
        }
        while let Some((n, depth)) = queue.pop_front() {
            height = depth;
            for child in [self.arena[n].left, self.arena[n].right].iter() {
                if *child != NIL {
                    queue.push_back((*child, depth + 1));
                }
            }
        }
        height
    }
}

impl<T> RbTree<T>
where
    T: Element,
{
    /// Insert `item`. An element with the same key is kept alongside.
    pub fn insert(&mut self, item: T) {
        let (root, _) = insert::insert(&mut self.arena, self.root, item);
        self.root = root;
        self.n_count += 1;
    }

    /// Remove one element matching `key` and return it. If key is not
    /// present, then remove is a no-op.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<T>
    where
        T::Key: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let (root, item) = delete::remove(&mut self.arena, self.root, key);
        self.root = root;
        if item.is_some() {
            self.n_count -= 1;
        }
        item
    }

    /// Get an element matching `key`.
    pub fn get<Q>(&self, key: &Q) -> Option<&T>
    where
        T::Key: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.arena.as_item(self.arena.find(self.root, key))
    }

    /// Check whether an element matching `key` is present.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        T::Key: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.get(key).is_some()
    }
}

impl<T> RbTree<T> {
    /// Return the element with smallest key.
    pub fn first(&self) -> Option<&T> {
        self.arena.as_item(self.arena.minimum(self.root))
    }

    /// Return the element with largest key.
    pub fn last(&self) -> Option<&T> {
        self.arena.as_item(self.arena.maximum(self.root))
    }

    /// Return an iterator over all elements in key order.
    pub fn iter(&self) -> Iter<T> {
        Iter {
            arena: &self.arena,
            next: self.arena.minimum(self.root),
            remaining: self.n_count,
        }
    }

    /// Return elements level by level, from root downwards, along with
    /// their color.
    pub fn levels(&self) -> Vec<Vec<(&T, Color)>> {
        let mut levels: Vec<Vec<(&T, Color)>> = vec![];

        let mut queue = VecDeque::new();
        if self.root != NIL {
            queue.push_back((self.root, 0));
        }
        while let Some((n, depth)) = queue.pop_front() {
            let node = &self.arena[n];
            if let Some(item) = node.item.as_ref() {
                if levels.len() == depth {
                    levels.push(vec![]);
                }
                levels[depth].push((item, node.color));
            }
            for child in [node.left, node.right].iter() {
                if *child != NIL {
                    queue.push_back((*child, depth + 1));
                }
            }
        }

        levels
    }

    /// Render the tree sideways, right subtree above its parent and left
    /// subtree below, one node per line tagged with its color.
    ///
    /// ```text
    ///         40(R)
    ///     30(B)
    /// 20(B)
    ///     10(B)
    /// ```
    ///
    /// Meant for debugging, the format is not stable.
    pub fn dump(&self) -> String
    where
        T: fmt::Debug,
    {
        let mut out = String::default();
        self.dump_node(self.root, 0, &mut out);
        out
    }

    fn dump_node(&self, n: usize, depth: usize, out: &mut String)
    where
        T: fmt::Debug,
    {
        let node = &self.arena[n];
        let item = match node.item.as_ref() {
            Some(item) => item,
            None => return,
        };

        self.dump_node(node.right, depth + 1, out);
        let indent = "    ".repeat(depth);
        out.push_str(&format!("{}{:?}({})\n", indent, item, node.color.to_tag()));
        self.dump_node(node.left, depth + 1, out);
    }
}

impl<T> RbTree<T>
where
    T: Element,
    T::Key: fmt::Debug,
{
    /// Validate red-black tree with following rules:
    ///
    /// * Root node is always black in color.
    /// * No node, sentinel included, is left double-black.
    /// * Make sure there are no consecutive reds.
    /// * Make sure number of blacks are same on both left and right arm.
    /// * Child's parent link points back to its parent.
    /// * Verify the sort order between a node and its left/right child,
    ///   and across the full in-order sequence.
    /// * Height do not exceed `2 * log2(n+1)`.
    ///
    /// Additionally return statistics on the tree, refer to [Stats].
    pub fn validate(&self) -> Result<Stats> {
        let sentinel = &self.arena[NIL];
        if sentinel.color != Color::Black || sentinel.item.is_some() {
            err_at!(Fatal, msg: "sentinel is {:?}", sentinel.color)?;
        }
        if self.arena.is_red(self.root) {
            err_at!(Fatal, msg: "root node must be black")?;
        }
        if self.arena[self.root].parent != NIL {
            err_at!(Fatal, msg: "root node has parent {}", self.arena[self.root].parent)?;
        }

        let ss = validate_tree(&self.arena, self.root, false, 1)?;
        if ss.n_count != self.n_count {
            err_at!(Fatal, msg: "n_count {} != {}", ss.n_count, self.n_count)?;
        }
        if self.arena.len() != self.n_count {
            err_at!(Fatal, msg: "arena {} != {}", self.arena.len(), self.n_count)?;
        }

        let max_depth = match self.n_count {
            0 => 0,
            n => 2 * ((n + 1).ilog2() as usize),
        };
        if ss.depth > max_depth {
            err_at!(Fatal, msg: "depth {} exceeds {} for {}", ss.depth, max_depth, ss.n_count)?;
        }

        let mut iter = self.iter().map(|item| item.as_key());
        if let Some(mut prev) = iter.next() {
            for key in iter {
                if key < prev {
                    err_at!(Fatal, msg: "sort {:?} after {:?}", key, prev)?;
                }
                prev = key;
            }
        }

        Ok(ss)
    }
}

// Return statistics for the subtree at `n`, sitting at `depth` from root.
fn validate_tree<T>(arena: &Arena<T>, n: usize, fromred: bool, depth: usize) -> Result<Stats>
where
    T: Element,
    T::Key: fmt::Debug,
{
    let node = &arena[n];
    let item = match node.item.as_ref() {
        Some(item) => item,
        None => {
            let depth = depth - 1;
            return Ok(Stats { depth, ..Stats::default() });
        }
    };

    match node.color {
        Color::Red if fromred => err_at!(Fatal, msg: "consecutive reds at {:?}", item.as_key())?,
        Color::DoubleBlack => err_at!(Fatal, msg: "double black at {:?}", item.as_key())?,
        Color::Red | Color::Black => (),
    }

    // confirm sort order and back-references in the tree.
    for &(child, left) in [(node.left, true), (node.right, false)].iter() {
        let child_node = &arena[child];
        if let Some(citem) = child_node.item.as_ref() {
            let (ck, nk) = (citem.as_key(), item.as_key());
            if child_node.parent != n {
                err_at!(Fatal, msg: "parent of {:?} is not {:?}", ck, nk)?;
            }
            let ok = match left {
                true => ck <= nk,
                false => ck >= nk,
            };
            if !ok {
                err_at!(Fatal, msg: "sort child:{:?}, parent:{:?}", ck, nk)?;
            }
        }
    }

    let red = node.is_red();
    let ss_l = validate_tree(arena, node.left, red, depth + 1)?;
    let ss_r = validate_tree(arena, node.right, red, depth + 1)?;
    if ss_l.n_blacks != ss_r.n_blacks {
        let (l, r) = (ss_l.n_blacks, ss_r.n_blacks);
        err_at!(Fatal, msg: "unbalanced blacks l:{}, r:{} at {:?}", l, r, item.as_key())?;
    }

    Ok(Stats {
        n_count: ss_l.n_count + ss_r.n_count + 1,
        n_blacks: ss_l.n_blacks + if red { 0 } else { 1 },
        depth: cmp::max(ss_l.depth, ss_r.depth),
    })
}

impl<T> Extend<T> for RbTree<T>
where
    T: Element,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        iter.into_iter().for_each(|item| self.insert(item));
    }
}

impl<T> FromIterator<T> for RbTree<T>
where
    T: Element,
{
    fn from_iter<I>(iter: I) -> RbTree<T>
    where
        I: IntoIterator<Item = T>,
    {
        let mut tree = RbTree::new();
        tree.extend(iter);
        tree
    }
}

impl<T> fmt::Debug for RbTree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// In-order iterator over [RbTree], created by [RbTree::iter].
pub struct Iter<'a, T> {
    arena: &'a Arena<T>,
    next: usize,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.arena.as_item(self.next)?;
        self.next = self.arena.successor(self.next);
        self.remaining = self.remaining.saturating_sub(1);
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T> FusedIterator for Iter<'a, T> {}

impl<'a, T> IntoIterator for &'a RbTree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

#[cfg(test)]
#[path = "tree_test.rs"]
mod tree_test;
