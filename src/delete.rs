//! Removal from a red-black tree held in an [Arena].
//!
//! A node with two children is never unlinked directly. Its element is
//! exchanged with the in-order successor's and the successor, which has at
//! most one child, is spliced out instead. Splicing a black node leaves its
//! replacement one black short, which is tracked by coloring the
//! replacement `DoubleBlack` until [remove_fixup] pays the debt back.

use log::{error, trace};

use std::borrow::Borrow;

use crate::{
    node::{Arena, Color, NIL},
    rotate::rotate,
    Element,
};

/// Remove one element matching `key` from the tree under `root`. Return
/// the new root and the removed element, if any.
pub fn remove<T, Q>(arena: &mut Arena<T>, root: usize, key: &Q) -> (usize, Option<T>)
where
    T: Element,
    T::Key: Borrow<Q>,
    Q: Ord + ?Sized,
{
    let node = arena.find(root, key);
    if node == NIL {
        return (root, None);
    }

    let node = match (arena[node].left, arena[node].right) {
        (NIL, _) | (_, NIL) => node,
        (_, right) => {
            let next = arena.minimum(right);
            arena.swap_items(node, next);
            next
        }
    };

    splice(arena, root, node)
}

// Unlink `node`, that has at most one child, and rebalance.
fn splice<T>(arena: &mut Arena<T>, mut root: usize, node: usize) -> (usize, Option<T>) {
    let child = match arena[node].left {
        NIL => arena[node].right,
        left => left,
    };
    let parent = arena[node].parent;

    if child != NIL {
        arena[child].parent = parent;
    }
    match parent {
        NIL => root = child,
        parent => {
            let side = arena.side_of(node, parent);
            arena.set_child(parent, side, child);
        }
    }

    let black = arena.is_black(node);
    let item = arena.release(node);

    if black {
        if arena.is_red(child) {
            arena[child].set_black();
        } else {
            arena[child].color = Color::DoubleBlack;
            root = remove_fixup(arena, root, child, parent);
        }
    }
    if root != NIL {
        arena[root].set_black();
    }

    (root, item)
}

/// Resolve the double-black deficiency at `node`, whose parent is
/// `parent`. `node` can be the sentinel, so the parent is carried along
/// instead of being read from the node.
pub fn remove_fixup<T>(
    arena: &mut Arena<T>,
    mut root: usize,
    mut node: usize,
    mut parent: usize,
) -> usize {
    while arena[node].color == Color::DoubleBlack && parent != NIL {
        let side = arena.side_of(node, parent);
        let mut sibling = arena.child(parent, side.opposite());
        if sibling == NIL {
            error!("remove_fixup(): double-black {} without sibling", node);
            break;
        }

        if arena.is_red(sibling) {
            trace!("remove_fixup(): red sibling, rotate at {}", parent);
            arena.swap_colors(parent, sibling);
            let top = rotate(arena, parent, side);
            if top != NIL && arena[top].parent == NIL {
                root = top;
            }
            continue;
        }

        let near = arena.child(sibling, side);
        let far = arena.child(sibling, side.opposite());

        if arena.is_black(near) && arena.is_black(far) {
            trace!("remove_fixup(): black nephews, push up to {}", parent);
            arena[sibling].set_red();
            arena[node].set_black();
            arena[parent].color = match arena[parent].color {
                Color::Red => Color::Black,
                _ => Color::DoubleBlack,
            };
            node = parent;
            parent = arena[node].parent;
            continue;
        }

        if arena.is_black(far) {
            trace!("remove_fixup(): red near nephew, rotate at {}", sibling);
            arena.swap_colors(sibling, near);
            sibling = rotate(arena, sibling, side.opposite());
        }

        trace!("remove_fixup(): red far nephew, rotate at {}", parent);
        let far = arena.child(sibling, side.opposite());
        arena[sibling].color = arena[parent].color;
        arena[parent].set_black();
        arena[far].set_black();
        let top = rotate(arena, parent, side);
        if top != NIL && arena[top].parent == NIL {
            root = top;
        }
        break;
    }

    if arena[node].color == Color::DoubleBlack {
        arena[node].set_black();
    }
    root
}

#[cfg(test)]
#[path = "delete_test.rs"]
mod delete_test;
