use crate::avl_tree::node::Node;
use crate::entry::Entry;
use std::cmp::Ordering;
use std::mem;

pub type Tree<T, U> = Option<Box<Node<T, U>>>;

/// The outcome of inserting a node into a tree.
pub enum Insertion<T, U> {
    /// The key was absent and a new node was linked in.
    Inserted,
    /// The key was present and its entry was swapped out. Holds the old entry.
    Replaced(Entry<T, U>),
    /// The key was present and the tree was left untouched. Holds the rejected entry.
    Rejected(Entry<T, U>),
}

pub fn height<T, U>(tree: &Tree<T, U>) -> i32 {
    match tree {
        None => -1,
        Some(node) => node.height,
    }
}

fn rotate_left<T, U>(mut node: Box<Node<T, U>>) -> Box<Node<T, U>> {
    let mut child = match node.right.take() {
        Some(child) => child,
        None => unreachable!(),
    };
    trace!("rotating left at node of height {}", node.height);
    node.right = child.left.take();
    node.update();
    child.left = Some(node);
    child.update();
    child
}

fn rotate_right<T, U>(mut node: Box<Node<T, U>>) -> Box<Node<T, U>> {
    let mut child = match node.left.take() {
        Some(child) => child,
        None => unreachable!(),
    };
    trace!("rotating right at node of height {}", node.height);
    node.left = child.right.take();
    node.update();
    child.right = Some(node);
    child.update();
    child
}

// Refreshes the height of the subtree root and restores the balance invariant with at most one
// single or double rotation. Both children must already be balanced with correct heights.
fn balance<T, U>(tree: &mut Tree<T, U>) {
    let mut node = match tree.take() {
        Some(node) => node,
        None => return,
    };

    node.update();

    if node.balance() > 1 {
        if let Some(child) = node.left.take() {
            if child.balance() < 0 {
                node.left = Some(rotate_left(child));
            } else {
                node.left = Some(child);
            }
        }
        node = rotate_right(node);
    } else if node.balance() < -1 {
        if let Some(child) = node.right.take() {
            if child.balance() > 0 {
                node.right = Some(rotate_right(child));
            } else {
                node.right = Some(child);
            }
        }
        node = rotate_left(node);
    }

    *tree = Some(node);
}

// Detaches the leftmost node of the tree, rebalancing every node on the way back up.
fn remove_min<T, U>(tree: &mut Tree<T, U>) -> Option<Box<Node<T, U>>> {
    if let Some(node) = tree {
        if node.left.is_some() {
            let ret = remove_min(&mut node.left);
            balance(tree);
            return ret;
        }
    }

    tree.take().map(|mut node| {
        *tree = node.right.take();
        node
    })
}

// Joins the two subtrees of a removed node by promoting the in-order successor.
fn combine_subtrees<T, U>(left_tree: Tree<T, U>, mut right_tree: Tree<T, U>) -> Tree<T, U> {
    match remove_min(&mut right_tree) {
        Some(mut new_root) => {
            new_root.left = left_tree;
            new_root.right = right_tree;
            Some(new_root)
        },
        None => left_tree,
    }
}

pub fn insert<T, U>(tree: &mut Tree<T, U>, new_node: Node<T, U>, replace: bool) -> Insertion<T, U>
where
    T: Ord,
{
    let ret = match tree {
        Some(node) => {
            match new_node.entry.key.cmp(&node.entry.key) {
                Ordering::Less => insert(&mut node.left, new_node, replace),
                Ordering::Greater => insert(&mut node.right, new_node, replace),
                Ordering::Equal => {
                    if replace {
                        let Node { ref mut entry, .. } = **node;
                        return Insertion::Replaced(mem::replace(entry, new_node.entry));
                    }
                    debug!("rejecting insert of a key that is already present");
                    return Insertion::Rejected(new_node.entry);
                },
            }
        },
        None => {
            *tree = Some(Box::new(new_node));
            return Insertion::Inserted;
        },
    };

    if let Insertion::Inserted = ret {
        balance(tree);
    }
    ret
}

pub fn remove<T, U>(tree: &mut Tree<T, U>, key: &T) -> Option<Entry<T, U>>
where
    T: Ord,
{
    let ret = match tree.take() {
        Some(mut node) => match key.cmp(&node.entry.key) {
            Ordering::Less => {
                let ret = remove(&mut node.left, key);
                *tree = Some(node);
                ret
            },
            Ordering::Greater => {
                let ret = remove(&mut node.right, key);
                *tree = Some(node);
                ret
            },
            Ordering::Equal => {
                let Node { entry, left, right, .. } = *node;
                *tree = match (left, right) {
                    (None, right) => right,
                    (left, None) => left,
                    (left, right) => combine_subtrees(left, right),
                };
                Some(entry)
            },
        },
        None => return None,
    };

    if ret.is_some() {
        balance(tree);
    }
    ret
}

pub fn root<T, U>(tree: &Tree<T, U>) -> Option<&Entry<T, U>> {
    tree.as_ref().map(|node| &node.entry)
}

pub fn get<'a, T, U>(tree: &'a Tree<T, U>, key: &T) -> Option<&'a Entry<T, U>>
where
    T: Ord,
{
    tree.as_ref().and_then(|node| {
        match key.cmp(&node.entry.key) {
            Ordering::Less => get(&node.left, key),
            Ordering::Greater => get(&node.right, key),
            Ordering::Equal => Some(&node.entry),
        }
    })
}

pub fn get_mut<'a, T, U>(tree: &'a mut Tree<T, U>, key: &T) -> Option<&'a mut Entry<T, U>>
where
    T: Ord,
{
    tree.as_mut().and_then(|node| {
        match key.cmp(&node.entry.key) {
            Ordering::Less => get_mut(&mut node.left, key),
            Ordering::Greater => get_mut(&mut node.right, key),
            Ordering::Equal => Some(&mut node.entry),
        }
    })
}

pub fn ceil<'a, T, U>(tree: &'a Tree<T, U>, key: &T) -> Option<&'a Entry<T, U>>
where
    T: Ord,
{
    tree.as_ref().and_then(|node| {
        match key.cmp(&node.entry.key) {
            Ordering::Greater => ceil(&node.right, key),
            Ordering::Less => {
                match ceil(&node.left, key) {
                    None => Some(&node.entry),
                    res => res,
                }
            },
            Ordering::Equal => Some(&node.entry),
        }
    })
}

pub fn floor<'a, T, U>(tree: &'a Tree<T, U>, key: &T) -> Option<&'a Entry<T, U>>
where
    T: Ord,
{
    tree.as_ref().and_then(|node| {
        match key.cmp(&node.entry.key) {
            Ordering::Less => floor(&node.left, key),
            Ordering::Greater => {
                match floor(&node.right, key) {
                    None => Some(&node.entry),
                    res => res,
                }
            },
            Ordering::Equal => Some(&node.entry),
        }
    })
}

pub fn min<T, U>(tree: &Tree<T, U>) -> Option<&Entry<T, U>> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref left_node) = curr.left {
            curr = left_node;
        }
        &curr.entry
    })
}

pub fn max<T, U>(tree: &Tree<T, U>) -> Option<&Entry<T, U>> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref right_node) = curr.right {
            curr = right_node;
        }
        &curr.entry
    })
}

pub fn pre_order<'a, T, U, F>(tree: &'a Tree<T, U>, visit: &mut F)
where
    F: FnMut(&'a Entry<T, U>),
{
    if let Some(node) = tree {
        visit(&node.entry);
        pre_order(&node.left, visit);
        pre_order(&node.right, visit);
    }
}

pub fn in_order<'a, T, U, F>(tree: &'a Tree<T, U>, visit: &mut F)
where
    F: FnMut(&'a Entry<T, U>),
{
    if let Some(node) = tree {
        in_order(&node.left, visit);
        visit(&node.entry);
        in_order(&node.right, visit);
    }
}

pub fn post_order<'a, T, U, F>(tree: &'a Tree<T, U>, visit: &mut F)
where
    F: FnMut(&'a Entry<T, U>),
{
    if let Some(node) = tree {
        post_order(&node.left, visit);
        post_order(&node.right, visit);
        visit(&node.entry);
    }
}

/// Walks the whole tree asserting the ordering, balance and height invariants. Returns the number
/// of reachable nodes.
#[cfg(test)]
pub fn check_invariants<T, U>(tree: &Tree<T, U>) -> usize
where
    T: Ord,
{
    fn check<'a, T, U>(tree: &'a Tree<T, U>, low: Option<&'a T>, high: Option<&'a T>) -> (usize, i32)
    where
        T: Ord,
    {
        match tree {
            None => (0, -1),
            Some(node) => {
                let key = &node.entry.key;
                if let Some(low) = low {
                    assert!(low < key, "key is not greater than its left ancestors");
                }
                if let Some(high) = high {
                    assert!(key < high, "key is not less than its right ancestors");
                }
                let (left_count, left_height) = check(&node.left, low, Some(key));
                let (right_count, right_height) = check(&node.right, Some(key), high);
                assert!((left_height - right_height).abs() <= 1, "node is unbalanced");
                assert_eq!(node.height, std::cmp::max(left_height, right_height) + 1);
                (left_count + right_count + 1, node.height)
            },
        }
    }

    check(tree, None, None).0
}

#[cfg(test)]
mod tests {
    use super::{check_invariants, height, insert, pre_order, remove, Insertion, Tree};
    use crate::avl_tree::node::Node;
    use rand::{Rng, SeedableRng, XorShiftRng};
    use std::collections::BTreeSet;

    fn build(keys: &[u32]) -> Tree<u32, ()> {
        let mut tree = None;
        for key in keys {
            insert(&mut tree, Node::new(*key, ()), false);
        }
        tree
    }

    fn keys_pre_order(tree: &Tree<u32, ()>) -> Vec<u32> {
        let mut ret = Vec::new();
        pre_order(tree, &mut |entry| ret.push(entry.key));
        ret
    }

    #[test]
    fn test_height_empty() {
        let tree: Tree<u32, ()> = None;
        assert_eq!(height(&tree), -1);
    }

    #[test]
    fn test_height_single() {
        let tree = build(&[1]);
        assert_eq!(height(&tree), 0);
    }

    #[test]
    fn test_rotate_left_left() {
        let tree = build(&[3, 2, 1]);
        assert_eq!(keys_pre_order(&tree), vec![2, 1, 3]);
        assert_eq!(height(&tree), 1);
    }

    #[test]
    fn test_rotate_right_right() {
        let tree = build(&[1, 2, 3]);
        assert_eq!(keys_pre_order(&tree), vec![2, 1, 3]);
        assert_eq!(height(&tree), 1);
    }

    #[test]
    fn test_rotate_left_right() {
        let tree = build(&[3, 1, 2]);
        assert_eq!(keys_pre_order(&tree), vec![2, 1, 3]);
    }

    #[test]
    fn test_rotate_right_left() {
        let tree = build(&[1, 3, 2]);
        assert_eq!(keys_pre_order(&tree), vec![2, 1, 3]);
    }

    #[test]
    fn test_single_rotation_when_child_is_even() {
        let mut tree = build(&[4, 2, 5, 1, 3]);
        assert_eq!(remove(&mut tree, &5).map(|entry| entry.key), Some(5));
        assert_eq!(keys_pre_order(&tree), vec![2, 1, 4, 3]);
        assert_eq!(check_invariants(&tree), 4);
    }

    #[test]
    fn test_insert_rejected() {
        let mut tree = build(&[2, 1, 3]);
        match insert(&mut tree, Node::new(1, ()), false) {
            Insertion::Rejected(entry) => assert_eq!(entry.key, 1),
            _ => panic!("expected duplicate to be rejected"),
        }
        assert_eq!(keys_pre_order(&tree), vec![2, 1, 3]);
    }

    #[test]
    fn test_insert_replaced() {
        let mut tree = None;
        insert(&mut tree, Node::new(1, 'a'), true);
        match insert(&mut tree, Node::new(1, 'b'), true) {
            Insertion::Replaced(entry) => assert_eq!(entry.value, 'a'),
            _ => panic!("expected entry to be replaced"),
        }
        assert_eq!(tree.as_ref().map(|node| node.entry.value), Some('b'));
    }

    #[test]
    fn test_remove_missing() {
        let mut tree = build(&[2, 1, 3]);
        assert!(remove(&mut tree, &4).is_none());
        assert_eq!(keys_pre_order(&tree), vec![2, 1, 3]);

        let mut empty: Tree<u32, ()> = None;
        assert!(remove(&mut empty, &4).is_none());
        assert!(empty.is_none());
    }

    #[test]
    fn test_remove_leaf() {
        let mut tree = build(&[2, 1, 3]);
        remove(&mut tree, &1);
        assert_eq!(keys_pre_order(&tree), vec![2, 3]);
        assert_eq!(check_invariants(&tree), 2);
    }

    #[test]
    fn test_remove_one_child() {
        let mut tree = build(&[2, 1, 3, 4]);
        remove(&mut tree, &3);
        assert_eq!(keys_pre_order(&tree), vec![2, 1, 4]);
        assert_eq!(check_invariants(&tree), 3);
    }

    #[test]
    fn test_remove_two_children() {
        let mut tree = build(&[5, 3, 7, 2, 1, 6, 8]);
        remove(&mut tree, &5);
        assert_eq!(keys_pre_order(&tree), vec![6, 2, 1, 3, 7, 8]);
        assert_eq!(check_invariants(&tree), 6);
    }

    #[test]
    fn test_remove_rebalances_successor_path() {
        let mut tree = build(&[5, 2, 8, 1, 3, 6, 10, 4, 7, 9, 11, 12]);
        assert_eq!(keys_pre_order(&tree), vec![5, 2, 1, 3, 4, 8, 6, 7, 10, 9, 11, 12]);

        remove(&mut tree, &5);
        assert_eq!(keys_pre_order(&tree), vec![6, 2, 1, 3, 4, 10, 8, 7, 9, 11, 12]);
        assert_eq!(check_invariants(&tree), 11);
    }

    #[test]
    fn test_random_operations_keep_invariants() {
        let mut rng: XorShiftRng = SeedableRng::from_seed([1, 1, 1, 1]);
        let mut tree = None;
        let mut expected = BTreeSet::new();

        for _ in 0..2_000 {
            let key = rng.gen_range(0, 256u32);
            if rng.gen::<bool>() {
                let inserted = match insert(&mut tree, Node::new(key, ()), false) {
                    Insertion::Inserted => true,
                    _ => false,
                };
                assert_eq!(inserted, expected.insert(key));
            } else {
                assert_eq!(remove(&mut tree, &key).is_some(), expected.remove(&key));
            }
            assert_eq!(check_invariants(&tree), expected.len());
        }
    }
}
