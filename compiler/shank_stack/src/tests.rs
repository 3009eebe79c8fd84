use super::*;

#[derive(Debug)]
enum Nested {
    Leaf(i64),
    Wrap(Box<Nested>),
}

fn depth(node: &Nested) -> usize {
    ensure_sufficient_stack(|| match node {
        Nested::Leaf(_) => 0,
        Nested::Wrap(inner) => depth(inner) + 1,
    })
}

fn build(levels: usize) -> Nested {
    let mut node = Nested::Leaf(7);
    for _ in 0..levels {
        node = Nested::Wrap(Box::new(node));
    }
    node
}

#[test]
fn shallow_tree_depth() {
    assert_eq!(depth(&build(3)), 3);
}

#[test]
fn deep_tree_does_not_overflow() {
    // Deep enough to overflow a default 8MB main-thread stack without growth.
    let tree = build(200_000);
    assert_eq!(depth(&tree), 200_000);
    // Unwind iteratively so the drop glue does not recurse.
    let mut node = tree;
    while let Nested::Wrap(inner) = node {
        node = *inner;
    }
    assert!(matches!(node, Nested::Leaf(7)));
}

#[test]
fn propagates_results() {
    let ok: Result<u8, String> = ensure_sufficient_stack(|| Ok(5));
    assert_eq!(ok, Ok(5));
    let err: Result<u8, String> = ensure_sufficient_stack(|| Err("boom".to_string()));
    assert_eq!(err, Err("boom".to_string()));
}
