use bst::{Order, Tree};

use std::collections::{BTreeSet, HashSet};

use crate::{init_logger, Op};

/// Writes the tree out in the given order and parses the keys back.
fn printed(tree: &Tree<i8>, order: Order) -> Vec<i8> {
    let mut out = Vec::new();
    tree.print(order, &mut out).unwrap();
    String::from_utf8(out)
        .unwrap()
        .lines()
        .map(|line| line.parse().unwrap())
        .collect()
}

/// Applies a set of operations to a tree and a `BTreeSet`.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same set of keys in both.
fn do_ops(ops: &[Op<i8>], tree: &mut Tree<i8>, set: &mut BTreeSet<i8>) -> bool {
    for op in ops {
        match op {
            Op::Insert(k) => {
                if tree.insert(*k) != set.insert(*k) {
                    return false;
                }
            }
            Op::Remove(k) => {
                if tree.remove(k) != set.take(k) {
                    return false;
                }
            }
            Op::Print => {
                if !printed(tree, Order::Inorder).iter().eq(set.iter()) {
                    return false;
                }
            }
        }
    }

    tree.len() == set.len()
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    init_logger();
    let mut tree = Tree::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set)
        && set.iter().all(|key| tree.contains(key))
        && printed(&tree, Order::Inorder).iter().eq(set.iter())
}

#[quickcheck]
fn inorder_is_strictly_ascending(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.into_iter().collect();

    printed(&tree, Order::Inorder)
        .windows(2)
        .all(|pair| pair[0] < pair[1])
}

#[quickcheck]
fn every_order_visits_each_key_once(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let unique: BTreeSet<_> = xs.into_iter().collect();

    [Order::Inorder, Order::Preorder, Order::Postorder]
        .iter()
        .all(|order| {
            let mut keys = printed(&tree, *order);
            keys.sort_unstable();
            keys.iter().eq(unique.iter())
        })
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();

    xs.iter().all(|x| tree.contains(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.contains(x))
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().collect();
    for delete in &deletes {
        tree.remove(delete);
    }

    let mut still_present = xs;
    for delete in &deletes {
        // We may have inserted the same value multiple times - delete each one.
        while let Some(pos) = still_present.iter().position(|x| x == delete) {
            still_present.swap_remove(pos);
        }
    }

    deletes.iter().all(|x| !tree.contains(x)) && still_present.iter().all(|x| tree.contains(x))
}

#[quickcheck]
fn removing_missing_key_changes_nothing(xs: Vec<i8>, missing: i8) -> bool {
    let mut tree: Tree<_> = xs.into_iter().filter(|x| *x != missing).collect();
    let before = printed(&tree, Order::Preorder);

    tree.remove(&missing).is_none() && printed(&tree, Order::Preorder) == before
}

#[quickcheck]
fn duplicate_insert_changes_nothing(xs: Vec<i8>) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().collect();
    let before = printed(&tree, Order::Preorder);

    xs.iter().all(|x| !tree.insert(*x)) && printed(&tree, Order::Preorder) == before
}

#[quickcheck]
fn min_max(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().collect();
    let mut set: BTreeSet<_> = xs.into_iter().collect();
    for delete in &deletes {
        tree.remove(delete);
        set.remove(delete);
    }

    match (set.iter().next(), set.iter().next_back()) {
        (Some(min), Some(max)) => {
            tree.find_min().ok() == Some(min) && tree.find_max().ok() == Some(max)
        }
        _ => tree.is_empty() && tree.find_min().is_err() && tree.find_max().is_err(),
    }
}

#[quickcheck]
fn clone_is_independent(xs: Vec<i8>, ops: Vec<Op<i8>>) -> bool {
    let original: Tree<_> = xs.into_iter().collect();
    let preorder = printed(&original, Order::Preorder);

    let mut copy = original.clone();
    if printed(&copy, Order::Preorder) != preorder {
        return false;
    }

    let mut set: BTreeSet<_> = printed(&copy, Order::Inorder).into_iter().collect();
    do_ops(&ops, &mut copy, &mut set) && printed(&original, Order::Preorder) == preorder
}

#[quickcheck]
fn clear_empties(xs: Vec<i8>) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().collect();
    tree.clear();

    tree.is_empty() && tree.len() == 0 && xs.iter().all(|x| !tree.contains(x))
}
