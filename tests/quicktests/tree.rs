use ordered_tree::{height, Node, OrderedTree};
use quickcheck_macros::quickcheck;

use std::collections::BTreeSet;

use crate::Op;

/// Applies a set of operations to a tree and a set.
/// This way we can ensure that after a random smattering of inserts,
/// deletes and rebalances we have the same values in both.
fn do_ops<T>(ops: &[Op<T>], tree: &mut OrderedTree<T>, set: &mut BTreeSet<T>) -> bool
where
    T: Ord + Clone,
{
    for op in ops {
        match op {
            Op::Insert(x) => {
                if tree.insert(x.clone()) != set.insert(x.clone()) {
                    return false;
                }
            }
            Op::Delete(x) => {
                if tree.delete(x) != set.take(x) {
                    return false;
                }
            }
            Op::Rebalance => {
                tree.rebalance();
                if !tree.is_balanced() {
                    return false;
                }
            }
            Op::Iter => {
                if !tree.iter().eq(set.iter()) {
                    return false;
                }
            }
        }
    }

    true
}

/// Whether the subtree heights of every node differ by at most one, checked with the recursive
/// height definition at every node.
fn naive_is_balanced<T>(node: Option<&Node<T>>) -> bool {
    match node {
        None => true,
        Some(n) => {
            (height(n.left()) - height(n.right())).abs() <= 1
                && naive_is_balanced(n.left())
                && naive_is_balanced(n.right())
        }
    }
}

fn in_order(tree: &OrderedTree<i8>) -> Vec<i8> {
    let mut values = Vec::new();
    tree.in_order(Some(|n: &Node<i8>| values.push(*n.data())))
        .unwrap();
    values
}

fn is_strictly_ascending(xs: &[i8]) -> bool {
    xs.windows(2).all(|pair| pair[0] < pair[1])
}

/// Builds a tree out of `xs` and then unbalances it by inserting `ys` one at a time.
fn grown_tree(xs: Vec<i8>, ys: &[i8]) -> OrderedTree<i8> {
    let mut tree = OrderedTree::new(xs);
    tree.extend(ys.iter().copied());
    tree
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = OrderedTree::default();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set)
        && tree.iter().eq(set.iter())
        && set.iter().all(|x| tree.contains(x))
}

#[quickcheck]
fn construction_sorts_and_dedups(xs: Vec<i8>) -> bool {
    let tree = OrderedTree::new(xs.clone());
    let expected: Vec<_> = xs.into_iter().collect::<BTreeSet<_>>().into_iter().collect();

    in_order(&tree) == expected && tree.is_balanced()
}

#[quickcheck]
fn in_order_is_strictly_ascending(xs: Vec<i8>, ys: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree = grown_tree(xs, &ys);
    for delete in &deletes {
        tree.delete(delete);
    }

    is_strictly_ascending(&in_order(&tree))
}

#[quickcheck]
fn rebalance_keeps_values(xs: Vec<i8>, ys: Vec<i8>) -> bool {
    let mut tree = grown_tree(xs, &ys);
    let before = in_order(&tree);
    tree.rebalance();

    in_order(&tree) == before && tree.is_balanced()
}

#[quickcheck]
fn height_is_recursive(xs: Vec<i8>, ys: Vec<i8>) -> bool {
    let tree = grown_tree(xs, &ys);
    let mut ok = true;
    tree.pre_order(Some(|n: &Node<i8>| {
        ok &= n.height() == 1 + height(n.left()).max(height(n.right()));
    }))
    .unwrap();

    ok && tree.height() == height(tree.root())
}

#[quickcheck]
fn is_balanced_matches_definition(xs: Vec<i8>, ys: Vec<i8>) -> bool {
    let tree = grown_tree(xs, &ys);

    tree.is_balanced() == naive_is_balanced(tree.root())
}

#[quickcheck]
fn insert_existing_is_noop(xs: Vec<i8>, ys: Vec<i8>, x: i8) -> bool {
    let mut tree = grown_tree(xs, &ys);
    tree.insert(x);
    let before = in_order(&tree);

    !tree.insert(x) && in_order(&tree) == before
}

#[quickcheck]
fn insert_then_delete_restores(xs: Vec<i8>, ys: Vec<i8>, x: i8) -> bool {
    let mut tree = grown_tree(xs, &ys);
    if tree.contains(&x) {
        return true;
    }
    let before = in_order(&tree);
    tree.insert(x);
    tree.delete(&x);

    in_order(&tree) == before
}

#[quickcheck]
fn traversals_visit_every_node_once(xs: Vec<i8>, ys: Vec<i8>) -> bool {
    let tree = grown_tree(xs, &ys);
    let expected = in_order(&tree);

    let mut level = Vec::new();
    tree.level_order(Some(|n: &Node<i8>| level.push(*n.data())))
        .unwrap();
    let mut pre = Vec::new();
    tree.pre_order(Some(|n: &Node<i8>| pre.push(*n.data())))
        .unwrap();
    let mut post = Vec::new();
    tree.post_order(Some(|n: &Node<i8>| post.push(*n.data())))
        .unwrap();

    [level, pre, post].iter_mut().all(|seen| {
        seen.sort_unstable();
        *seen == expected
    })
}

#[quickcheck]
fn depth_grows_by_one_per_edge(xs: Vec<i8>, ys: Vec<i8>) -> bool {
    let tree = grown_tree(xs, &ys);
    let mut nodes: Vec<&Node<i8>> = Vec::new();
    tree.level_order(Some(|n| nodes.push(n))).unwrap();

    let root_ok = tree.root().map_or(true, |root| tree.depth(root) == Some(0));
    root_ok
        && nodes.iter().all(|n| {
            let depth = tree.depth(n);
            n.left()
                .into_iter()
                .chain(n.right())
                .all(|child| tree.depth(child) == depth.map(|d| d + 1))
        })
}

#[quickcheck]
fn find_agrees_with_iter(xs: Vec<i8>, probe: i8) -> bool {
    let tree = OrderedTree::new(xs);

    tree.find(&probe).map(|n| *n.data()) == tree.iter().find(|x| **x == probe).copied()
}
