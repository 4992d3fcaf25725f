use super::*;

//            p
//             \
//              x
//             / \
//            a   y
//               / \
//              b   c
fn build() -> (Arena<u32>, [usize; 6]) {
    let mut arena = Arena::new();
    let p = arena.alloc(5);
    let x = arena.alloc(20);
    let a = arena.alloc(10);
    let y = arena.alloc(40);
    let b = arena.alloc(30);
    let c = arena.alloc(50);
    link(&mut arena, p, Side::Right, x);
    link(&mut arena, x, Side::Left, a);
    link(&mut arena, x, Side::Right, y);
    link(&mut arena, y, Side::Left, b);
    link(&mut arena, y, Side::Right, c);
    arena[x].set_black();
    (arena, [p, x, a, y, b, c])
}

fn link(arena: &mut Arena<u32>, parent: usize, side: Side, child: usize) {
    arena.set_child(parent, side, child);
    arena[child].parent = parent;
}

fn in_order(arena: &Arena<u32>, root: usize) -> Vec<u32> {
    let mut seq = vec![];
    let mut n = arena.minimum(root);
    while let Some(item) = arena.as_item(n) {
        seq.push(*item);
        n = arena.successor(n);
    }
    seq
}

#[test]
fn test_rotate_left() {
    let (mut arena, [p, x, a, y, b, c]) = build();

    assert_eq!(rotate_left(&mut arena, x), y);

    assert_eq!(arena[p].right, y);
    assert_eq!(arena[y].parent, p);
    assert_eq!(arena[y].left, x);
    assert_eq!(arena[y].right, c);
    assert_eq!(arena[x].parent, y);
    assert_eq!(arena[x].left, a);
    assert_eq!(arena[x].right, b);
    assert_eq!(arena[b].parent, x);
    assert_eq!(arena[c].parent, y);

    // colors are left alone.
    assert_eq!(arena.is_black(x), true);
    assert_eq!(arena.is_red(y), true);

    assert_eq!(in_order(&arena, p), vec![5, 10, 20, 30, 40, 50]);
}

#[test]
fn test_rotate_right() {
    let (mut arena, [p, x, a, y, b, c]) = build();

    let top = rotate_left(&mut arena, x);
    assert_eq!(rotate_right(&mut arena, top), x);

    assert_eq!(arena[p].right, x);
    assert_eq!(arena[x].parent, p);
    assert_eq!(arena[x].left, a);
    assert_eq!(arena[x].right, y);
    assert_eq!(arena[y].parent, x);
    assert_eq!(arena[y].left, b);
    assert_eq!(arena[y].right, c);
    assert_eq!(arena[b].parent, y);

    assert_eq!(in_order(&arena, p), vec![5, 10, 20, 30, 40, 50]);
}

#[test]
fn test_rotate_root() {
    let (mut arena, [p, x, _a, y, _b, _c]) = build();
    arena[p].right = NIL;
    arena[x].parent = NIL;

    let top = rotate(&mut arena, x, Side::Left);
    assert_eq!(top, y);
    assert_eq!(arena[y].parent, NIL);
    assert_eq!(arena[NIL].parent, NIL);
    assert_eq!(in_order(&arena, top), vec![10, 20, 30, 40, 50]);

    let top = rotate(&mut arena, top, Side::Right);
    assert_eq!(top, x);
    assert_eq!(arena[x].parent, NIL);
    assert_eq!(in_order(&arena, top), vec![10, 20, 30, 40, 50]);
}

#[test]
fn test_rotate_sentinel_child() {
    let (mut arena, [p, x, a, ..]) = build();

    // leaf `a` has no children to rotate with.
    assert_eq!(rotate_left(&mut arena, a), NIL);
    assert_eq!(rotate_right(&mut arena, a), NIL);
    // `p` has no left child.
    assert_eq!(rotate_right(&mut arena, p), NIL);
    assert_eq!(rotate_left(&mut arena, NIL), NIL);

    assert_eq!(arena[a].parent, x);
    assert_eq!(arena[p].right, x);
    assert_eq!(in_order(&arena, p), vec![5, 10, 20, 30, 40, 50]);
}
