use std::error;
use std::fmt;

/// The error returned by `AvlSet::try_insert` when an equal key is already in the set.
///
/// The rejected key is handed back to the caller.
#[derive(Debug, PartialEq, Eq)]
pub struct DuplicateKeyError<T> {
    key: T,
}

impl<T> DuplicateKeyError<T> {
    pub(crate) fn new(key: T) -> Self {
        DuplicateKeyError { key }
    }

    /// Returns a reference to the rejected key.
    pub fn key(&self) -> &T {
        &self.key
    }

    /// Consumes the error, returning the rejected key.
    pub fn into_key(self) -> T {
        self.key
    }
}

impl<T> fmt::Display for DuplicateKeyError<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "key already exists in the set")
    }
}

impl<T> error::Error for DuplicateKeyError<T> where T: fmt::Debug {}
