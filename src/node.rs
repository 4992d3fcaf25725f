use std::{
    borrow::Borrow,
    cmp::Ordering,
    mem,
    ops::{Index, IndexMut},
};

use crate::Element;

/// Arena slot reserved for the sentinel. Every absent child or parent link
/// points here.
pub const NIL: usize = 0;

/// Color of a tree node.
///
/// `DoubleBlack` only shows up while a removal is rebalancing the tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    Red,
    Black,
    DoubleBlack,
}

impl Color {
    /// Short tag used by diagnostic renderings.
    pub fn to_tag(&self) -> &'static str {
        match self {
            Color::Red => "R",
            Color::Black => "B",
            Color::DoubleBlack => "BB",
        }
    }
}

/// Which child of its parent a node is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    #[inline]
    pub fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

// Node corresponds to a single element in the tree.
#[derive(Clone)]
pub struct Node<T> {
    pub item: Option<T>, // None for sentinel and released slots.
    pub color: Color,
    pub left: usize,   // store: left child
    pub right: usize,  // store: right child
    pub parent: usize, // back-reference, not owning
}

impl<T> Node<T> {
    fn new(item: T) -> Node<T> {
        Node {
            item: Some(item),
            color: Color::Red,
            left: NIL,
            right: NIL,
            parent: NIL,
        }
    }

    fn sentinel() -> Node<T> {
        Node {
            item: None,
            color: Color::Black,
            left: NIL,
            right: NIL,
            parent: NIL,
        }
    }

    #[inline]
    pub fn set_red(&mut self) {
        self.color = Color::Red
    }

    #[inline]
    pub fn set_black(&mut self) {
        self.color = Color::Black
    }

    #[inline]
    pub fn is_red(&self) -> bool {
        self.color == Color::Red
    }

    #[inline]
    pub fn is_black(&self) -> bool {
        !self.is_red()
    }

    #[inline]
    pub fn child(&self, side: Side) -> usize {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }
}

/// Dense store for tree nodes. Slot [NIL] is the sentinel, every other
/// slot is either a live node or sits in the free list.
#[derive(Clone)]
pub struct Arena<T> {
    nodes: Vec<Node<T>>,
    free: Vec<usize>,
}

impl<T> Arena<T> {
    pub fn new() -> Arena<T> {
        Arena::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Arena<T> {
        let mut nodes = Vec::with_capacity(capacity + 1);
        nodes.push(Node::sentinel());
        Arena {
            nodes,
            free: Vec::default(),
        }
    }

    /// Allocate a red leaf for `item`, reusing a released slot if any.
    pub fn alloc(&mut self, item: T) -> usize {
        match self.free.pop() {
            Some(n) => {
                self.nodes[n] = Node::new(item);
                n
            }
            None => {
                self.nodes.push(Node::new(item));
                self.nodes.len() - 1
            }
        }
    }

    /// Release slot `n` back to the free list, returning its element.
    pub fn release(&mut self, n: usize) -> Option<T> {
        if n == NIL {
            return None;
        }
        let mut node = mem::replace(&mut self.nodes[n], Node::sentinel());
        self.free.push(n);
        node.item.take()
    }

    /// Number of live nodes, sentinel excluded.
    pub fn len(&self) -> usize {
        self.nodes.len() - 1 - self.free.len()
    }

    pub fn clear(&mut self) {
        self.nodes.truncate(1);
        self.nodes[NIL] = Node::sentinel();
        self.free.clear();
    }

    /// Exchange elements held by nodes `a` and `b`, links and colors stay.
    pub fn swap_items(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        let x = self.nodes[a].item.take();
        let y = self.nodes[b].item.take();
        self.nodes[a].item = y;
        self.nodes[b].item = x;
    }
}

impl<T> Arena<T> {
    #[inline]
    pub fn as_item(&self, n: usize) -> Option<&T> {
        self.nodes[n].item.as_ref()
    }

    #[inline]
    pub fn is_red(&self, n: usize) -> bool {
        self.nodes[n].is_red()
    }

    #[inline]
    pub fn is_black(&self, n: usize) -> bool {
        self.nodes[n].is_black()
    }

    #[inline]
    pub fn child(&self, n: usize, side: Side) -> usize {
        self.nodes[n].child(side)
    }

    #[inline]
    pub fn set_child(&mut self, n: usize, side: Side, child: usize) {
        match side {
            Side::Left => self.nodes[n].left = child,
            Side::Right => self.nodes[n].right = child,
        }
    }

    /// Side of `n` under `parent`. A sentinel `n` is on whichever side of
    /// `parent` is currently empty, left first.
    #[inline]
    pub fn side_of(&self, n: usize, parent: usize) -> Side {
        if self.nodes[parent].left == n {
            Side::Left
        } else {
            Side::Right
        }
    }

    /// Swap the colors of `a` and `b`.
    pub fn swap_colors(&mut self, a: usize, b: usize) {
        let color = self.nodes[a].color;
        self.nodes[a].color = self.nodes[b].color;
        self.nodes[b].color = color;
    }

    /// Leftmost node under `n`.
    pub fn minimum(&self, mut n: usize) -> usize {
        if n == NIL {
            return NIL;
        }
        while self.nodes[n].left != NIL {
            n = self.nodes[n].left;
        }
        n
    }

    /// Rightmost node under `n`.
    pub fn maximum(&self, mut n: usize) -> usize {
        if n == NIL {
            return NIL;
        }
        while self.nodes[n].right != NIL {
            n = self.nodes[n].right;
        }
        n
    }

    /// In-order successor of `n`, walking parent links when `n` has no
    /// right subtree.
    pub fn successor(&self, mut n: usize) -> usize {
        if n == NIL {
            return NIL;
        }
        if self.nodes[n].right != NIL {
            return self.minimum(self.nodes[n].right);
        }
        let mut p = self.nodes[n].parent;
        while p != NIL && self.nodes[p].right == n {
            n = p;
            p = self.nodes[p].parent;
        }
        p
    }
}

impl<T> Arena<T>
where
    T: Element,
{
    /// Descend from `root` looking for an element whose key matches `key`.
    pub fn find<Q>(&self, root: usize, key: &Q) -> usize
    where
        T::Key: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut n = root;
        while let Some(item) = self.as_item(n) {
            n = match item.as_key().borrow().cmp(key) {
                Ordering::Less => self.nodes[n].right,
                Ordering::Greater => self.nodes[n].left,
                Ordering::Equal => return n,
            };
        }
        NIL
    }
}

impl<T> Index<usize> for Arena<T> {
    type Output = Node<T>;

    #[inline]
    fn index(&self, n: usize) -> &Node<T> {
        &self.nodes[n]
    }
}

impl<T> IndexMut<usize> for Arena<T> {
    #[inline]
    fn index_mut(&mut self, n: usize) -> &mut Node<T> {
        &mut self.nodes[n]
    }
}

#[cfg(test)]
#[path = "node_test.rs"]
mod node_test;
