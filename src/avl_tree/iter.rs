use crate::avl_tree::node::Node;
use crate::avl_tree::tree;
use std::collections::VecDeque;

/// An iterator for `AvlSet<T>`.
///
/// This iterator traverses the elements of the set in-order and yields immutable references.
pub struct AvlSetIter<'a, T>
where
    T: 'a,
{
    current: &'a tree::Tree<T>,
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> AvlSetIter<'a, T> {
    pub(crate) fn new(tree: &'a tree::Tree<T>) -> Self {
        AvlSetIter {
            current: tree,
            stack: Vec::new(),
        }
    }
}

impl<'a, T> Iterator for AvlSetIter<'a, T>
where
    T: 'a,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.current {
            self.current = &node.left;
            self.stack.push(node);
        }
        self.stack.pop().map(|node| {
            self.current = &node.right;
            &node.key
        })
    }
}

/// An iterator for `AvlSet<T>` that yields each key before the keys of its subtrees.
pub struct PreorderIter<'a, T>
where
    T: 'a,
{
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> PreorderIter<'a, T> {
    pub(crate) fn new(tree: &'a tree::Tree<T>) -> Self {
        PreorderIter {
            stack: tree.iter().map(|node| &**node).collect(),
        }
    }
}

impl<'a, T> Iterator for PreorderIter<'a, T>
where
    T: 'a,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.stack.pop().map(|node| {
            if let Some(ref right) = node.right {
                self.stack.push(right);
            }
            if let Some(ref left) = node.left {
                self.stack.push(left);
            }
            &node.key
        })
    }
}

/// An iterator for `AvlSet<T>` that yields each key after the keys of its subtrees.
pub struct PostorderIter<'a, T>
where
    T: 'a,
{
    // The flag is set once the children of the node have been pushed.
    stack: Vec<(&'a Node<T>, bool)>,
}

impl<'a, T> PostorderIter<'a, T> {
    pub(crate) fn new(tree: &'a tree::Tree<T>) -> Self {
        PostorderIter {
            stack: tree.iter().map(|node| (&**node, false)).collect(),
        }
    }
}

impl<'a, T> Iterator for PostorderIter<'a, T>
where
    T: 'a,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((node, expanded)) = self.stack.pop() {
            if expanded {
                return Some(&node.key);
            }

            self.stack.push((node, true));
            if let Some(ref right) = node.right {
                self.stack.push((&**right, false));
            }
            if let Some(ref left) = node.left {
                self.stack.push((&**left, false));
            }
        }
        None
    }
}

/// An iterator for `AvlSet<T>` that yields keys level by level, left to right.
pub struct BreadthFirstIter<'a, T>
where
    T: 'a,
{
    queue: VecDeque<&'a Node<T>>,
}

impl<'a, T> BreadthFirstIter<'a, T> {
    pub(crate) fn new(tree: &'a tree::Tree<T>) -> Self {
        BreadthFirstIter {
            queue: tree.iter().map(|node| &**node).collect(),
        }
    }
}

impl<'a, T> Iterator for BreadthFirstIter<'a, T>
where
    T: 'a,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.queue.pop_front().map(|node| {
            if let Some(ref left) = node.left {
                self.queue.push_back(left);
            }
            if let Some(ref right) = node.right {
                self.queue.push_back(right);
            }
            &node.key
        })
    }
}

/// An owning iterator for `AvlSet<T>`.
///
/// This iterator traverses the elements of the set in-order and yields owned keys.
pub struct AvlSetIntoIter<T> {
    current: tree::Tree<T>,
    stack: Vec<Node<T>>,
}

impl<T> AvlSetIntoIter<T> {
    pub(crate) fn new(tree: tree::Tree<T>) -> Self {
        AvlSetIntoIter {
            current: tree,
            stack: Vec::new(),
        }
    }
}

impl<T> Iterator for AvlSetIntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(mut node) = self.current.take() {
            self.current = node.left.take();
            self.stack.push(*node);
        }
        self.stack.pop().map(|node| {
            let Node { key, right, .. } = node;
            self.current = right;
            key
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{AvlSetIntoIter, AvlSetIter, BreadthFirstIter, PostorderIter, PreorderIter};
    use crate::avl_tree::policy::DuplicatePolicy;
    use crate::avl_tree::tree::{self, Tree};

    //       4
    //     /   \
    //    2     6
    //   / \   / \
    //  1   3 5   7
    fn full_tree() -> Tree<u32> {
        let mut tree = None;
        for key in &[4, 2, 6, 1, 3, 5, 7] {
            tree::insert(&mut tree, *key, DuplicatePolicy::Ignore);
        }
        tree
    }

    #[test]
    fn test_empty() {
        let tree: Tree<u32> = None;
        assert_eq!(AvlSetIter::new(&tree).next(), None);
        assert_eq!(PreorderIter::new(&tree).next(), None);
        assert_eq!(PostorderIter::new(&tree).next(), None);
        assert_eq!(BreadthFirstIter::new(&tree).next(), None);
        assert_eq!(AvlSetIntoIter::new(tree).next(), None);
    }

    #[test]
    fn test_inorder() {
        let tree = full_tree();
        assert_eq!(
            AvlSetIter::new(&tree).cloned().collect::<Vec<u32>>(),
            vec![1, 2, 3, 4, 5, 6, 7],
        );
    }

    #[test]
    fn test_preorder() {
        let tree = full_tree();
        assert_eq!(
            PreorderIter::new(&tree).cloned().collect::<Vec<u32>>(),
            vec![4, 2, 1, 3, 6, 5, 7],
        );
    }

    #[test]
    fn test_postorder() {
        let tree = full_tree();
        assert_eq!(
            PostorderIter::new(&tree).cloned().collect::<Vec<u32>>(),
            vec![1, 3, 2, 5, 7, 6, 4],
        );
    }

    #[test]
    fn test_breadth_first() {
        let tree = full_tree();
        assert_eq!(
            BreadthFirstIter::new(&tree).cloned().collect::<Vec<u32>>(),
            vec![4, 2, 6, 1, 3, 5, 7],
        );
    }

    #[test]
    fn test_into_iter() {
        assert_eq!(
            AvlSetIntoIter::new(full_tree()).collect::<Vec<u32>>(),
            vec![1, 2, 3, 4, 5, 6, 7],
        );
    }
}
