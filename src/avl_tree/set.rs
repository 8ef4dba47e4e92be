use crate::avl_tree::error::DuplicateKeyError;
use crate::avl_tree::iter::{
    AvlSetIntoIter, AvlSetIter, BreadthFirstIter, PostorderIter, PreorderIter,
};
use crate::avl_tree::policy::DuplicatePolicy;
use crate::avl_tree::tree;
use std::borrow::Borrow;
use std::fmt;
use std::iter::FromIterator;

/// An ordered set implemented using an avl tree.
///
/// An avl tree is a self-balancing binary search tree that maintains the invariant that the
/// heights of two child subtrees of any node differ by at most one. Every insertion and removal
/// rebalances the nodes on the path back to the root, so lookups, insertions, and removals all
/// run in `O(log N)` time.
///
/// # Examples
///
/// ```
/// use balanced_collections::avl_tree::AvlSet;
///
/// let mut set = AvlSet::new();
/// set.insert(0);
/// set.insert(3);
///
/// assert_eq!(set.len(), 2);
/// assert_eq!(set.find(&3), Some(&3));
///
/// assert_eq!(set.min(), Some(&0));
/// assert_eq!(set.ceil(&2), Some(&3));
///
/// assert_eq!(set.remove(&0), Some(0));
/// assert_eq!(set.remove(&1), None);
/// ```
#[derive(Clone)]
pub struct AvlSet<T> {
    tree: tree::Tree<T>,
    len: usize,
    policy: DuplicatePolicy,
}

impl<T> AvlSet<T> {
    /// Constructs a new, empty `AvlSet<T>` that ignores duplicate insertions.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::avl_tree::AvlSet;
    ///
    /// let set: AvlSet<u32> = AvlSet::new();
    /// ```
    pub fn new() -> Self {
        Self::with_policy(DuplicatePolicy::default())
    }

    /// Constructs a new, empty `AvlSet<T>` that handles duplicate insertions according to
    /// `policy`.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::avl_tree::{AvlSet, DuplicatePolicy};
    ///
    /// let set: AvlSet<u32> = AvlSet::with_policy(DuplicatePolicy::Replace);
    /// assert_eq!(set.policy(), DuplicatePolicy::Replace);
    /// ```
    pub fn with_policy(policy: DuplicatePolicy) -> Self {
        AvlSet {
            tree: None,
            len: 0,
            policy,
        }
    }

    /// Returns the policy applied to duplicate insertions.
    pub fn policy(&self) -> DuplicatePolicy {
        self.policy
    }

    /// Inserts a key into the set. Returns `None` if the key was added. If an equal key already
    /// exists, the set keeps one of the two keys according to its `DuplicatePolicy` and returns
    /// the other one.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// assert_eq!(set.insert(1), None);
    /// assert!(set.contains(&1));
    /// assert_eq!(set.insert(1), Some(1));
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn insert(&mut self, key: T) -> Option<T>
    where
        T: Ord,
    {
        let ret = tree::insert(&mut self.tree, key, self.policy);
        if ret.is_none() {
            self.len += 1;
        }
        ret
    }

    /// Inserts a key into the set. Returns an error holding the key if an equal key already
    /// exists, regardless of the set's `DuplicatePolicy`.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// assert!(set.try_insert(1).is_ok());
    /// assert_eq!(set.try_insert(1).unwrap_err().into_key(), 1);
    /// ```
    pub fn try_insert(&mut self, key: T) -> Result<(), DuplicateKeyError<T>>
    where
        T: Ord,
    {
        if self.contains(&key) {
            return Err(DuplicateKeyError::new(key));
        }
        self.insert(key);
        Ok(())
    }

    /// Removes a key from the set. If the key exists in the set, it will return the stored key.
    /// Otherwise it will return `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// assert_eq!(set.remove(&1), Some(1));
    /// assert_eq!(set.remove(&1), None);
    /// ```
    pub fn remove<Q>(&mut self, key: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let ret = tree::remove(&mut self.tree, key);
        if ret.is_some() {
            self.len -= 1;
        }
        ret
    }

    /// Returns a reference to the stored key equal to a particular key. Returns `None` if no
    /// such key exists.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(String::from("a"));
    /// assert_eq!(set.find("a"), Some(&String::from("a")));
    /// assert_eq!(set.find("b"), None);
    /// ```
    pub fn find<Q>(&self, key: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        tree::get(&self.tree, key)
    }

    /// Checks if a key exists in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// assert!(!set.contains(&0));
    /// assert!(set.contains(&1));
    /// ```
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find(key).is_some()
    }

    /// Returns the number of elements in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::avl_tree::AvlSet;
    ///
    /// let set: AvlSet<u32> = AvlSet::new();
    /// assert!(set.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the height of the tree. An empty set has height `-1` and a set with a single key
    /// has height `0`.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// assert_eq!(set.height(), -1);
    /// for key in 0..7 {
    ///     set.insert(key);
    /// }
    /// assert_eq!(set.height(), 2);
    /// ```
    pub fn height(&self) -> i32 {
        tree::height(&self.tree)
    }

    /// Clears the set, removing all values.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// set.insert(2);
    /// set.clear();
    /// assert_eq!(set.is_empty(), true);
    /// ```
    pub fn clear(&mut self) {
        self.tree = None;
        self.len = 0;
    }

    /// Returns a key in the set that is less than or equal to a particular key. Returns `None` if
    /// such a key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// assert_eq!(set.floor(&0), None);
    /// assert_eq!(set.floor(&2), Some(&1));
    /// ```
    pub fn floor<Q>(&self, key: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        tree::floor(&self.tree, key)
    }

    /// Returns a key in the set that is greater than or equal to a particular key. Returns `None`
    /// if such a key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// assert_eq!(set.ceil(&0), Some(&1));
    /// assert_eq!(set.ceil(&2), None);
    /// ```
    pub fn ceil<Q>(&self, key: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        tree::ceil(&self.tree, key)
    }

    /// Returns the minimum key of the set. Returns `None` if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// set.insert(3);
    /// assert_eq!(set.min(), Some(&1));
    /// ```
    pub fn min(&self) -> Option<&T> {
        tree::min(&self.tree)
    }

    /// Returns the maximum key of the set. Returns `None` if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// set.insert(3);
    /// assert_eq!(set.max(), Some(&3));
    /// ```
    pub fn max(&self) -> Option<&T> {
        tree::max(&self.tree)
    }

    /// Returns an iterator over the set. The iterator will yield keys using in-order traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// set.insert(3);
    ///
    /// let mut iterator = set.iter();
    /// assert_eq!(iterator.next(), Some(&1));
    /// assert_eq!(iterator.next(), Some(&3));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> AvlSetIter<T> {
        AvlSetIter::new(&self.tree)
    }

    /// Returns an iterator yielding keys in ascending order. Equivalent to `iter`.
    pub fn inorder(&self) -> AvlSetIter<T> {
        self.iter()
    }

    /// Returns an iterator yielding each key before the keys of its left and right subtrees.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::avl_tree::AvlSet;
    ///
    /// let set: AvlSet<u32> = vec![2, 1, 3].into_iter().collect();
    /// assert_eq!(set.preorder().collect::<Vec<&u32>>(), vec![&2, &1, &3]);
    /// ```
    pub fn preorder(&self) -> PreorderIter<T> {
        PreorderIter::new(&self.tree)
    }

    /// Returns an iterator yielding each key after the keys of its left and right subtrees.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::avl_tree::AvlSet;
    ///
    /// let set: AvlSet<u32> = vec![2, 1, 3].into_iter().collect();
    /// assert_eq!(set.postorder().collect::<Vec<&u32>>(), vec![&1, &3, &2]);
    /// ```
    pub fn postorder(&self) -> PostorderIter<T> {
        PostorderIter::new(&self.tree)
    }

    /// Returns an iterator yielding keys level by level, from the root downwards and from left to
    /// right within a level.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::avl_tree::AvlSet;
    ///
    /// let set: AvlSet<u32> = vec![1, 2, 3, 4].into_iter().collect();
    /// assert_eq!(set.breadth_first().collect::<Vec<&u32>>(), vec![&2, &1, &3, &4]);
    /// ```
    pub fn breadth_first(&self) -> BreadthFirstIter<T> {
        BreadthFirstIter::new(&self.tree)
    }

    /// Returns `true` if every node satisfies the binary search tree ordering, caches its correct
    /// height, and has subtrees whose heights differ by at most one. Runs in `O(N)` time.
    pub fn is_valid(&self) -> bool
    where
        T: Ord,
    {
        tree::is_valid(&self.tree)
    }
}

impl<T> IntoIterator for AvlSet<T> {
    type Item = T;
    type IntoIter = AvlSetIntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        AvlSetIntoIter::new(self.tree)
    }
}

impl<'a, T> IntoIterator for &'a AvlSet<T>
where
    T: 'a,
{
    type Item = &'a T;
    type IntoIter = AvlSetIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Default for AvlSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for AvlSet<T>
where
    T: Ord,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut set = AvlSet::new();
        set.extend(iter);
        set
    }
}

impl<T> Extend<T> for AvlSet<T>
where
    T: Ord,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<T> PartialEq for AvlSet<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &AvlSet<T>) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T> Eq for AvlSet<T> where T: Eq {}

impl<T> fmt::Debug for AvlSet<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Writes the structure of the tree, one key per line in pre-order. Each level of depth is
/// indented by two spaces and keys with at least one child are followed by a colon.
///
/// # Examples
///
/// ```
/// use balanced_collections::avl_tree::AvlSet;
///
/// let set: AvlSet<u32> = vec![2, 1, 3, 4].into_iter().collect();
/// assert_eq!(set.to_string(), "2:\n  1\n  3:\n    4");
/// ```
impl<T> fmt::Display for AvlSet<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.tree {
            Some(ref node) => tree::fmt_subtree(node, 0, f),
            None => Ok(()),
        }
    }
}
