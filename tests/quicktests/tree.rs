use avl::Tree;

use std::collections::{BTreeSet, HashSet};

use quickcheck_macros::quickcheck;

use crate::Op;

/// Applies a set of operations to a tree and a `BTreeSet`.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same set of values in both.
fn do_ops<K>(ops: &[Op<K>], tree: &mut Tree<K>, set: &mut BTreeSet<K>)
where
    K: Copy + Ord,
{
    for op in ops {
        match *op {
            Op::Insert(k) => {
                tree.insert(k);
                set.insert(k);
            }
            Op::Remove(k) => {
                tree.delete(&k);
                set.remove(&k);
            }
        }
    }
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set);
    tree.in_order().copied().eq(set.iter().copied())
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x);
    }

    xs.iter().all(|x| tree.contains(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x);
    }
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.contains(x))
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x);
    }
    for delete in &deletes {
        tree.delete(delete);
    }

    let deleted: HashSet<_> = deletes.into_iter().collect();
    let still_present: Vec<_> = xs.into_iter().filter(|x| !deleted.contains(x)).collect();

    deleted.iter().all(|x| !tree.contains(x))
        && still_present.iter().all(|x| tree.contains(x))
}

#[quickcheck]
fn in_order_is_strictly_ascending(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set);
    tree.in_order()
        .zip(tree.in_order().skip(1))
        .all(|(a, b)| a < b)
}

#[quickcheck]
fn traversals_visit_the_same_values(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set);

    let in_order: Vec<_> = tree.in_order().copied().collect();
    let mut pre_order: Vec<_> = tree.pre_order().copied().collect();
    let mut post_order: Vec<_> = tree.post_order().copied().collect();
    pre_order.sort_unstable();
    post_order.sort_unstable();

    pre_order == in_order && post_order == in_order
}

#[quickcheck]
fn height_stays_within_the_avl_bound(xs: Vec<i16>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x);
    }

    // An AVL tree of n nodes is no taller than ~1.44 lg(n + 2).
    let n = tree.in_order().count();
    (tree.height() as f64) <= 1.4405 * ((n + 2) as f64).log2()
}

#[quickcheck]
fn deleting_every_value_empties_the_tree(xs: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x);
    }

    // Delete in an order unrelated to the insertion order.
    let mut deletes = xs;
    deletes.sort_unstable();
    for delete in deletes.iter().rev() {
        tree.delete(delete);
    }

    tree.is_empty() && tree.height() == 0
}
