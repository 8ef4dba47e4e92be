/// Determines what `AvlSet::insert` does with a key that compares equal to a key already in the
/// set.
///
/// Neither policy changes the shape of the tree, so both preserve the ordering and balance
/// invariants. Use `AvlSet::try_insert` to reject duplicates with an error instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DuplicatePolicy {
    /// The stored key is kept and the incoming key is handed back to the caller.
    Ignore,
    /// The stored key is overwritten in place and the old key is handed back to the caller.
    Replace,
}

impl Default for DuplicatePolicy {
    fn default() -> Self {
        DuplicatePolicy::Ignore
    }
}
