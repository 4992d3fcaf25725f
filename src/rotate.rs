//! Rotation primitives over the node [Arena].
//!
//! Rotations only relink nodes, they never touch colors. Callers are
//! responsible for re-anchoring the tree root when the returned node has
//! no parent.

use log::error;

use crate::node::{Arena, Side, NIL};

//              (p)                       (p)
//               |                         |
//               x                         y
//              / \                       / \
//             /   y                     x   \
//            /   / \                   / \   \
//           a   b   c                 a   b   c
//
/// Rotate the subtree at `x` to the left and return its new root, which
/// is the old right child of `x`.
pub fn rotate_left<T>(arena: &mut Arena<T>, x: usize) -> usize {
    let y = arena[x].right;
    if x == NIL || y == NIL {
        error!("rotate_left(): no right child at {}, call the programmer", x);
        return NIL;
    }

    let b = arena[y].left;
    arena[x].right = b;
    if b != NIL {
        arena[b].parent = x;
    }
    replace_child(arena, x, y);
    arena[y].left = x;
    arena[x].parent = y;

    y
}

//              (p)                       (p)
//               |                         |
//               x                         y
//              / \                       / \
//             y   \                     /   x
//            / \   \                   /   / \
//           a   b   c                 a   b   c
//
/// Rotate the subtree at `x` to the right and return its new root, which
/// is the old left child of `x`.
pub fn rotate_right<T>(arena: &mut Arena<T>, x: usize) -> usize {
    let y = arena[x].left;
    if x == NIL || y == NIL {
        error!("rotate_right(): no left child at {}, call the programmer", x);
        return NIL;
    }

    let b = arena[y].right;
    arena[x].left = b;
    if b != NIL {
        arena[b].parent = x;
    }
    replace_child(arena, x, y);
    arena[y].right = x;
    arena[x].parent = y;

    y
}

/// Rotate at `x` so that `x` moves down towards `side`.
#[inline]
pub fn rotate<T>(arena: &mut Arena<T>, x: usize, side: Side) -> usize {
    match side {
        Side::Left => rotate_left(arena, x),
        Side::Right => rotate_right(arena, x),
    }
}

// Put `y` into the slot `x` occupies under its parent.
fn replace_child<T>(arena: &mut Arena<T>, x: usize, y: usize) {
    let parent = arena[x].parent;
    arena[y].parent = parent;
    if parent != NIL {
        let side = arena.side_of(x, parent);
        arena.set_child(parent, side, y);
    }
}

#[cfg(test)]
#[path = "rotate_test.rs"]
mod rotate_test;
