//! An ordered set backed by an AVL tree.
//!
//! Every insertion and removal restores the AVL height invariant on the way back up to the root,
//! so the tree stays within `1.45 * log2(n + 2)` levels no matter the order in which keys arrive.

pub mod avl_tree;
