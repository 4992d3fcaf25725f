use super::*;

#[test]
fn test_node() {
    let mut arena: Arena<u32> = Arena::new();
    assert_eq!(arena.len(), 0);
    assert_eq!(arena.as_item(NIL), None);
    assert_eq!(arena.is_black(NIL), true);

    let n = arena.alloc(10);
    assert_eq!(n, 1);
    assert_eq!(arena.len(), 1);
    assert_eq!(arena.as_item(n), Some(&10));
    assert_eq!(arena[n].is_red(), true);
    assert_eq!(arena[n].left, NIL);
    assert_eq!(arena[n].right, NIL);
    assert_eq!(arena[n].parent, NIL);

    arena[n].set_black();
    assert_eq!(arena.is_black(n), true);
    arena[n].color = Color::DoubleBlack;
    assert_eq!(arena.is_black(n), true);
    assert_eq!(arena.is_red(n), false);
    arena[n].set_red();
    assert_eq!(arena.is_red(n), true);

    assert_eq!(Color::Red.to_tag(), "R");
    assert_eq!(Color::Black.to_tag(), "B");
    assert_eq!(Color::DoubleBlack.to_tag(), "BB");
    assert_eq!(Side::Left.opposite(), Side::Right);
    assert_eq!(Side::Right.opposite(), Side::Left);
}

#[test]
fn test_arena_release() {
    let mut arena: Arena<String> = Arena::with_capacity(4);
    let a = arena.alloc("a".to_string());
    let b = arena.alloc("b".to_string());
    assert_eq!(arena.len(), 2);

    assert_eq!(arena.release(a), Some("a".to_string()));
    assert_eq!(arena.release(NIL), None);
    assert_eq!(arena.len(), 1);
    assert_eq!(arena.as_item(a), None);

    // released slot is reused, as a fresh red leaf.
    let c = arena.alloc("c".to_string());
    assert_eq!(c, a);
    assert_eq!(arena.is_red(c), true);
    assert_eq!(arena.len(), 2);

    arena.swap_items(b, c);
    assert_eq!(arena.as_item(b), Some(&"c".to_string()));
    assert_eq!(arena.as_item(c), Some(&"b".to_string()));

    arena.clear();
    assert_eq!(arena.len(), 0);
    assert_eq!(arena.is_black(NIL), true);
    assert_eq!(arena.alloc("d".to_string()), 1);
}

//          20
//         /  \
//       10    30
//         \
//          15
#[test]
fn test_arena_walk() {
    let mut arena: Arena<u32> = Arena::new();
    let n20 = arena.alloc(20);
    let n10 = arena.alloc(10);
    let n30 = arena.alloc(30);
    let n15 = arena.alloc(15);
    for (parent, side, child) in vec![
        (n20, Side::Left, n10),
        (n20, Side::Right, n30),
        (n10, Side::Right, n15),
    ] {
        arena.set_child(parent, side, child);
        arena[child].parent = parent;
    }

    assert_eq!(arena.side_of(n10, n20), Side::Left);
    assert_eq!(arena.side_of(n30, n20), Side::Right);
    assert_eq!(arena.side_of(NIL, n10), Side::Left);
    assert_eq!(arena.child(n10, Side::Right), n15);

    assert_eq!(arena.minimum(n20), n10);
    assert_eq!(arena.maximum(n20), n30);
    assert_eq!(arena.minimum(NIL), NIL);

    let mut seq = vec![];
    let mut n = arena.minimum(n20);
    while let Some(item) = arena.as_item(n) {
        seq.push(*item);
        n = arena.successor(n);
    }
    assert_eq!(seq, vec![10, 15, 20, 30]);

    assert_eq!(arena.find(n20, &15), n15);
    assert_eq!(arena.find(n20, &30), n30);
    assert_eq!(arena.find(n20, &16), NIL);
    assert_eq!(arena.find(NIL, &16), NIL);

    arena[n20].set_black();
    arena.swap_colors(n20, n15);
    assert_eq!(arena.is_red(n20), true);
    assert_eq!(arena.is_black(n15), true);
}
