use std::error;
use std::fmt;
use std::result;

/// Convenience `Error` enum for the collections in this crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// The key being inserted is already present and the collection rejects duplicates.
    DuplicateKey,
    /// The collection is empty, so there is no root to access.
    EmptyTree,
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::DuplicateKey => write!(f, "key already exists in tree"),
            Error::EmptyTree => write!(f, "tree is empty"),
        }
    }
}

/// Convenience `Result` type for the collections in this crate.
pub type Result<T> = result::Result<T, Error>;
