//! Self-balancing binary search tree where the heights of the two child subtrees of any node
//! differ by at most one.

mod map;
mod node;
mod set;
mod tree;

pub use self::map::{AvlMap, AvlMapIntoIter, AvlMapIter, AvlMapIterMut};
pub use self::set::{AvlSet, AvlSetIntoIter, AvlSetIter};

/// What a collection does when asked to insert a key it already contains.
///
/// # Examples
/// ```
/// use avl_collections::avl_tree::{AvlSet, DuplicatePolicy};
///
/// let mut set = AvlSet::with_policy(DuplicatePolicy::Ignore);
/// assert_eq!(set.insert(1), Ok(None));
/// assert_eq!(set.insert(1), Ok(Some(1)));
/// assert_eq!(set.len(), 1);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DuplicatePolicy {
    /// Fail with `Error::DuplicateKey` and leave the collection untouched.
    Reject,
    /// Leave the collection untouched and hand the new key back to the caller.
    Ignore,
    /// Swap the stored key for the new one and hand the old key back to the caller.
    Replace,
}

impl Default for DuplicatePolicy {
    fn default() -> Self {
        DuplicatePolicy::Reject
    }
}
