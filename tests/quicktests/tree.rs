use bintree::{Error, Tree};

use std::collections::{BTreeMap, HashSet};

use quickcheck_macros::quickcheck;

use crate::{logging, Op};

/// Applies a set of operations to a tree and a map.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same set of keys in the map.
///
/// The map keeps the first value inserted for a key, like the tree does.
fn do_ops<K, V>(ops: &[Op<K, V>], bst: &mut Tree<K, V>, map: &mut BTreeMap<K, V>) -> bool
where
    K: Ord + Clone,
    V: PartialEq + Clone,
{
    for op in ops {
        let agrees = match op {
            Op::Insert(k, v) => {
                let fresh = !map.contains_key(k);
                map.entry(k.clone()).or_insert_with(|| v.clone());
                bst.insert(k.clone(), v.clone()) == fresh
            }
            Op::Remove(k) => {
                let expected = match map.remove(k) {
                    Some(v) => Ok(v),
                    None if bst.is_empty() => Err(Error::EmptyTree),
                    None => Err(Error::NotFound),
                };
                bst.remove(k) == expected
            }
            Op::Iter => bst.iter().eq(map.iter()),
        };
        if !agrees {
            return false;
        }
    }

    true
}

/// `traverse` visits every key once, in strictly ascending order.
fn ascending<K: Ord + Clone, V>(tree: &Tree<K, V>) -> bool {
    let mut keys = Vec::new();
    tree.traverse(|key, _| keys.push(key.clone()));

    keys.len() == tree.len() && keys.windows(2).all(|pair| pair[0] < pair[1])
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8, i8>>) -> bool {
    logging();
    let mut tree = Tree::new();
    let mut map = BTreeMap::new();

    do_ops(&ops, &mut tree, &mut map)
        && tree.len() == map.len()
        && map.iter().all(|(key, value)| tree.find(key) == Some(value))
        && ascending(&tree)
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x, *x);
    }

    xs.iter().all(|x| tree.find(x) == Some(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x, *x);
    }
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.find(x).is_none())
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x, *x);
    }
    for delete in &deletes {
        let _ = tree.delete(delete);
    }

    let mut still_present = xs;
    for delete in &deletes {
        // We may have inserted the same value multiple times - delete each one.
        while let Some(pos) = still_present.iter().position(|x| x == delete) {
            still_present.swap_remove(pos);
        }
    }

    deletes.iter().all(|x| tree.find(x).is_none())
        && still_present.iter().all(|x| tree.find(x).is_some())
        && ascending(&tree)
}

#[quickcheck]
fn first_insert_wins(pairs: Vec<(i8, u8)>) -> bool {
    let tree: Tree<_, _> = pairs.iter().copied().collect();

    let mut first = BTreeMap::new();
    for (k, v) in &pairs {
        first.entry(*k).or_insert(*v);
    }

    tree.len() == first.len() && tree.iter().eq(first.iter())
}

#[quickcheck]
fn delete_then_delete_again(xs: Vec<i8>, target: i8) -> bool {
    let mut tree: Tree<_, _> = xs.iter().map(|x| (*x, ())).collect();
    let present = tree.contains_key(&target);

    let first = tree.delete(&target);
    let second = tree.delete(&target);

    let first_ok = if present {
        first.is_ok()
    } else if xs.is_empty() {
        first == Err(Error::EmptyTree)
    } else {
        first == Err(Error::NotFound)
    };
    let second_ok = if tree.is_empty() {
        second == Err(Error::EmptyTree)
    } else {
        second == Err(Error::NotFound)
    };

    first_ok && second_ok && !tree.contains_key(&target)
}

#[quickcheck]
fn failed_delete_changes_nothing(xs: Vec<i8>, target: i8) -> bool {
    let mut tree: Tree<_, _> = xs.iter().map(|x| (*x, *x)).collect();
    if tree.contains_key(&target) {
        return true;
    }
    let before: Vec<_> = tree.iter().map(|(k, v)| (*k, *v)).collect();
    let height = tree.height();

    tree.delete(&target).is_err()
        && tree.height() == height
        && tree.iter().map(|(k, v)| (*k, *v)).eq(before)
}

#[quickcheck]
fn deleting_any_key_keeps_the_rest(xs: Vec<i8>) -> bool {
    let tree: Tree<_, _> = xs.iter().map(|x| (*x, *x)).collect();
    let keys: Vec<_> = tree.iter().map(|(k, _)| *k).collect();

    keys.iter().all(|target| {
        let mut tree = tree.clone();
        let expected = keys.iter().copied().filter(|k| k != target);

        tree.remove(target) == Ok(*target)
            && ascending(&tree)
            && tree.iter().map(|(k, _)| *k).eq(expected)
    })
}
