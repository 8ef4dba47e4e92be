//! Self-balancing binary search tree where the heights of the two child subtrees of any node
//! differ by at most one.

mod error;
mod iter;
mod node;
mod policy;
mod set;
mod tree;

pub use self::error::DuplicateKeyError;
pub use self::iter::{AvlSetIntoIter, AvlSetIter, BreadthFirstIter, PostorderIter, PreorderIter};
pub use self::policy::DuplicatePolicy;
pub use self::set::AvlSet;
