use crate::avl_tree::node::Node;
use crate::avl_tree::policy::DuplicatePolicy;
use log::trace;
use std::borrow::Borrow;
use std::cmp::{self, Ordering};
use std::fmt;
use std::mem;

const INDENT: &str = "  ";

pub type Tree<T> = Option<Box<Node<T>>>;

pub fn height<T>(tree: &Tree<T>) -> i32 {
    match *tree {
        None => -1,
        Some(ref node) => node.height,
    }
}

fn rotate_left<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let mut child = node
        .right
        .take()
        .expect("Expected right child node to be `Some`.");
    node.right = child.left.take();
    node.update();
    child.left = Some(node);
    child.update();
    child
}

fn rotate_right<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let mut child = node
        .left
        .take()
        .expect("Expected left child node to be `Some`.");
    node.left = child.right.take();
    node.update();
    child.right = Some(node);
    child.update();
    child
}

fn balance<T>(tree: &mut Tree<T>) {
    let mut node = match tree.take() {
        Some(node) => node,
        None => return,
    };

    node.update();
    let factor = node.balance();

    if factor > 1 {
        let child = node
            .left
            .take()
            .expect("Expected left child node to be `Some`.");
        if child.balance() < 0 {
            trace!("left-right rotation at node of height {}", node.height);
            node.left = Some(rotate_left(child));
        } else {
            trace!("right rotation at node of height {}", node.height);
            node.left = Some(child);
        }
        node = rotate_right(node);
    } else if factor < -1 {
        let child = node
            .right
            .take()
            .expect("Expected right child node to be `Some`.");
        if child.balance() > 0 {
            trace!("right-left rotation at node of height {}", node.height);
            node.right = Some(rotate_right(child));
        } else {
            trace!("left rotation at node of height {}", node.height);
            node.right = Some(child);
        }
        node = rotate_left(node);
    }

    *tree = Some(node);
}

// precondition: the tree is non-empty
fn remove_min<T>(tree: &mut Tree<T>) -> T {
    if let Some(ref mut node) = *tree {
        if node.left.is_some() {
            let ret = remove_min(&mut node.left);
            balance(tree);
            return ret;
        }
    }

    let node = tree.take().expect("Expected a non-empty tree.");
    let Node { key, right, .. } = *node;
    *tree = right;
    key
}

pub fn insert<T>(tree: &mut Tree<T>, key: T, policy: DuplicatePolicy) -> Option<T>
where
    T: Ord,
{
    let ret = match *tree {
        Some(ref mut node) => match key.cmp(&node.key) {
            Ordering::Less => insert(&mut node.left, key, policy),
            Ordering::Greater => insert(&mut node.right, key, policy),
            Ordering::Equal => {
                return match policy {
                    DuplicatePolicy::Ignore => Some(key),
                    DuplicatePolicy::Replace => Some(mem::replace(&mut node.key, key)),
                };
            },
        },
        None => {
            *tree = Some(Box::new(Node::new(key)));
            return None;
        },
    };

    balance(tree);
    ret
}

pub fn remove<T, Q>(tree: &mut Tree<T>, key: &Q) -> Option<T>
where
    T: Borrow<Q>,
    Q: Ord + ?Sized,
{
    let ret = match tree.take() {
        Some(mut node) => match key.cmp(node.key.borrow()) {
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
                if node.left.is_some() && node.right.is_some() {
                    trace!("removing node with two children, promoting in-order successor");
                    let successor = remove_min(&mut node.right);
                    let removed = mem::replace(&mut node.key, successor);
                    *tree = Some(node);
                    Some(removed)
                } else {
                    let Node {
                        key: removed,
                        left,
                        right,
                        ..
                    } = *node;
                    *tree = left.or(right);
                    Some(removed)
                }
            },
        },
        None => return None,
    };

    balance(tree);
    ret
}

pub fn get<'a, T, Q>(tree: &'a Tree<T>, key: &Q) -> Option<&'a T>
where
    T: Borrow<Q>,
    Q: Ord + ?Sized,
{
    tree.as_ref().and_then(|node| match key.cmp(node.key.borrow()) {
        Ordering::Less => get(&node.left, key),
        Ordering::Greater => get(&node.right, key),
        Ordering::Equal => Some(&node.key),
    })
}

pub fn ceil<'a, T, Q>(tree: &'a Tree<T>, key: &Q) -> Option<&'a T>
where
    T: Borrow<Q>,
    Q: Ord + ?Sized,
{
    tree.as_ref().and_then(|node| match key.cmp(node.key.borrow()) {
        Ordering::Greater => ceil(&node.right, key),
        Ordering::Less => match ceil(&node.left, key) {
            None => Some(&node.key),
            res => res,
        },
        Ordering::Equal => Some(&node.key),
    })
}

pub fn floor<'a, T, Q>(tree: &'a Tree<T>, key: &Q) -> Option<&'a T>
where
    T: Borrow<Q>,
    Q: Ord + ?Sized,
{
    tree.as_ref().and_then(|node| match key.cmp(node.key.borrow()) {
        Ordering::Less => floor(&node.left, key),
        Ordering::Greater => match floor(&node.right, key) {
            None => Some(&node.key),
            res => res,
        },
        Ordering::Equal => Some(&node.key),
    })
}

pub fn min<T>(tree: &Tree<T>) -> Option<&T> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref left_node) = curr.left {
            curr = left_node;
        }
        &curr.key
    })
}

pub fn max<T>(tree: &Tree<T>) -> Option<&T> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref right_node) = curr.right {
            curr = right_node;
        }
        &curr.key
    })
}

// Returns the recomputed height of the subtree if every key lies strictly between `lower` and
// `upper`, every cached height is accurate, and every balance factor is within [-1, 1].
fn checked_height<T>(tree: &Tree<T>, lower: Option<&T>, upper: Option<&T>) -> Option<i32>
where
    T: Ord,
{
    let node = match *tree {
        None => return Some(-1),
        Some(ref node) => node,
    };

    if lower.map_or(false, |lower| node.key <= *lower) {
        return None;
    }
    if upper.map_or(false, |upper| node.key >= *upper) {
        return None;
    }

    let left = checked_height(&node.left, lower, Some(&node.key))?;
    let right = checked_height(&node.right, Some(&node.key), upper)?;
    let height = cmp::max(left, right) + 1;

    if node.height != height || (left - right).abs() > 1 {
        return None;
    }
    Some(height)
}

pub fn is_valid<T>(tree: &Tree<T>) -> bool
where
    T: Ord,
{
    checked_height(tree, None, None).is_some()
}

pub fn fmt_subtree<T>(node: &Node<T>, depth: usize, f: &mut fmt::Formatter) -> fmt::Result
where
    T: fmt::Display,
{
    write!(f, "{}{}", INDENT.repeat(depth), node.key)?;
    if node.is_leaf() {
        return Ok(());
    }

    write!(f, ":")?;
    if let Some(ref left) = node.left {
        writeln!(f)?;
        fmt_subtree(left, depth + 1, f)?;
    }
    if let Some(ref right) = node.right {
        writeln!(f)?;
        fmt_subtree(right, depth + 1, f)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{height, insert, is_valid, remove, Tree};
    use crate::avl_tree::node::Node;
    use crate::avl_tree::policy::DuplicatePolicy;

    fn build(keys: &[u32]) -> Tree<u32> {
        let mut tree = None;
        for key in keys {
            insert(&mut tree, *key, DuplicatePolicy::Ignore);
        }
        tree
    }

    fn root_key(tree: &Tree<u32>) -> Option<u32> {
        tree.as_ref().map(|node| node.key)
    }

    #[test]
    fn test_height_empty() {
        let tree: Tree<u32> = None;
        assert_eq!(height(&tree), -1);
        assert!(is_valid(&tree));
    }

    #[test]
    fn test_single_right_rotation() {
        let tree = build(&[3, 2, 1]);
        assert_eq!(root_key(&tree), Some(2));
        assert_eq!(height(&tree), 1);
        assert!(is_valid(&tree));
    }

    #[test]
    fn test_single_left_rotation() {
        let tree = build(&[1, 2, 3]);
        assert_eq!(root_key(&tree), Some(2));
        assert_eq!(height(&tree), 1);
        assert!(is_valid(&tree));
    }

    #[test]
    fn test_left_right_rotation() {
        let tree = build(&[3, 1, 2]);
        assert_eq!(root_key(&tree), Some(2));
        assert_eq!(height(&tree), 1);
        assert!(is_valid(&tree));
    }

    #[test]
    fn test_right_left_rotation() {
        let tree = build(&[1, 3, 2]);
        assert_eq!(root_key(&tree), Some(2));
        assert_eq!(height(&tree), 1);
        assert!(is_valid(&tree));
    }

    #[test]
    fn test_insert_duplicate_ignore() {
        let mut tree = build(&[2, 1]);
        assert_eq!(insert(&mut tree, 2, DuplicatePolicy::Ignore), Some(2));
        assert_eq!(height(&tree), 1);
        assert!(is_valid(&tree));
    }

    #[test]
    fn test_remove_rebalances_root() {
        let mut tree = build(&[2, 1, 3, 4]);
        assert_eq!(remove(&mut tree, &1), Some(1));
        assert_eq!(root_key(&tree), Some(3));
        assert_eq!(height(&tree), 1);
        assert!(is_valid(&tree));
    }

    #[test]
    fn test_remove_rebalances_successor_path() {
        // The second removal promotes 8 and leaves the root's right subtree two levels short.
        let mut tree = build(&[5, 2, 8, 1, 3, 6, 9, 4]);
        assert_eq!(remove(&mut tree, &5), Some(5));
        assert_eq!(remove(&mut tree, &6), Some(6));
        assert!(is_valid(&tree));
        assert_eq!(height(&tree), 2);
    }

    #[test]
    fn test_remove_missing() {
        let mut tree = build(&[2, 1, 3]);
        assert_eq!(remove(&mut tree, &4), None);
        assert_eq!(height(&tree), 1);
        assert!(is_valid(&tree));
    }

    #[test]
    fn test_is_valid_detects_order_violation() {
        let mut root = Node::new(2);
        root.left = Some(Box::new(Node::new(3)));
        root.update();
        assert!(!is_valid(&Some(Box::new(root))));
    }

    #[test]
    fn test_is_valid_detects_imbalance() {
        let mut middle = Node::new(2);
        middle.right = Some(Box::new(Node::new(3)));
        middle.update();
        let mut root = Node::new(1);
        root.right = Some(Box::new(middle));
        root.update();
        assert!(!is_valid(&Some(Box::new(root))));
    }

    #[test]
    fn test_is_valid_detects_stale_height() {
        let mut root = Node::new(2);
        root.left = Some(Box::new(Node::new(1)));
        assert!(!is_valid(&Some(Box::new(root))));
    }
}
