//! Insertion into a red-black tree held in an [Arena].

use log::trace;

use crate::{
    node::{Arena, Side, NIL},
    rotate::rotate,
    Element,
};

/// Insert `item` under `root` and rebalance. Return the new root index and
/// the index of the node holding `item`.
///
/// Equal keys are routed to the left subtree.
pub fn insert<T>(arena: &mut Arena<T>, root: usize, item: T) -> (usize, usize)
where
    T: Element,
{
    let (mut parent, mut side) = (NIL, Side::Left);
    let mut n = root;
    while let Some(cur) = arena.as_item(n) {
        parent = n;
        side = match cur.as_key() >= item.as_key() {
            true => Side::Left,
            false => Side::Right,
        };
        n = arena.child(n, side);
    }

    let node = arena.alloc(item);
    arena[node].parent = parent;
    let root = match parent {
        NIL => node,
        parent => {
            arena.set_child(parent, side, node);
            root
        }
    };

    (insert_fixup(arena, root, node), node)
}

/// Restore red-black properties after `node` was attached as a red leaf.
pub fn insert_fixup<T>(arena: &mut Arena<T>, mut root: usize, mut node: usize) -> usize {
    while node != root && arena.is_red(node) && arena.is_red(arena[node].parent) {
        let mut parent = arena[node].parent;
        // a red parent is never the root, hence grand is a real node.
        let grand = arena[parent].parent;
        let side = arena.side_of(parent, grand);
        let uncle = arena.child(grand, side.opposite());

        if arena.is_red(uncle) {
            trace!("insert_fixup(): red uncle, recolor at {}", grand);
            arena[parent].set_black();
            arena[uncle].set_black();
            arena[grand].set_red();
            node = grand;
            continue;
        }

        if node == arena.child(parent, side.opposite()) {
            trace!("insert_fixup(): inner child, rotate at {}", parent);
            rotate(arena, parent, side);
            node = parent;
            parent = arena[node].parent;
        }

        trace!("insert_fixup(): outer child, rotate at {}", grand);
        arena.swap_colors(grand, parent);
        let top = rotate(arena, grand, side.opposite());
        if top != NIL && arena[top].parent == NIL {
            root = top;
        }
        break;
    }

    arena[root].set_black();
    root
}

#[cfg(test)]
#[path = "insert_test.rs"]
mod insert_test;
