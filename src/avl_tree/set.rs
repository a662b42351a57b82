use crate::avl_tree::map::{AvlMap, AvlMapIntoIter, AvlMapIter};
use crate::avl_tree::tree::Insertion;
use crate::avl_tree::DuplicatePolicy;
use crate::{Error, Result};
use std::iter::FromIterator;

/// An ordered set implemented using an avl tree.
///
/// An avl tree is a self-balancing binary search tree that maintains the invariant that the
/// heights of two child subtrees of any node differ by at most one. Inserting a key that is
/// already present is governed by the set's `DuplicatePolicy`, which defaults to
/// `DuplicatePolicy::Reject`.
///
/// # Examples
/// ```
/// use avl_collections::avl_tree::AvlSet;
/// use avl_collections::Error;
///
/// let mut set = AvlSet::new();
/// set.insert(0).unwrap();
/// set.insert(3).unwrap();
///
/// assert_eq!(set.len(), 2);
/// assert_eq!(set.insert(3), Err(Error::DuplicateKey));
///
/// assert_eq!(set.min(), Some(&0));
/// assert_eq!(set.ceil(&2), Some(&3));
///
/// assert_eq!(set.remove(&0), Some(0));
/// assert_eq!(set.remove(&1), None);
/// ```
pub struct AvlSet<T> {
    map: AvlMap<T, ()>,
    policy: DuplicatePolicy,
}

impl<T> AvlSet<T>
where
    T: Ord,
{
    /// Constructs a new, empty `AvlSet<T>` that rejects duplicate keys.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::avl_tree::AvlSet;
    ///
    /// let set: AvlSet<u32> = AvlSet::new();
    /// ```
    pub fn new() -> Self {
        Self::with_policy(DuplicatePolicy::default())
    }

    /// Constructs a new, empty `AvlSet<T>` that handles duplicate keys according to `policy`.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::avl_tree::{AvlSet, DuplicatePolicy};
    ///
    /// let set: AvlSet<u32> = AvlSet::with_policy(DuplicatePolicy::Replace);
    /// assert_eq!(set.policy(), DuplicatePolicy::Replace);
    /// ```
    pub fn with_policy(policy: DuplicatePolicy) -> Self {
        AvlSet {
            map: AvlMap::new(),
            policy,
        }
    }

    /// Returns the policy the set applies to duplicate keys.
    pub fn policy(&self) -> DuplicatePolicy {
        self.policy
    }

    /// Inserts a key into the set. Returns `Ok(None)` if the key was not present.
    ///
    /// If the key is already present, the outcome depends on the set's policy:
    /// - `DuplicatePolicy::Reject` returns `Error::DuplicateKey`.
    /// - `DuplicatePolicy::Ignore` returns the key that was passed in.
    /// - `DuplicatePolicy::Replace` stores the new key and returns the old one.
    ///
    /// In every duplicate case the number of keys in the set is unchanged.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::avl_tree::{AvlSet, DuplicatePolicy};
    /// use avl_collections::Error;
    ///
    /// let mut set = AvlSet::new();
    /// assert_eq!(set.insert(1), Ok(None));
    /// assert!(set.contains(&1));
    /// assert_eq!(set.insert(1), Err(Error::DuplicateKey));
    ///
    /// let mut set = AvlSet::with_policy(DuplicatePolicy::Replace);
    /// assert_eq!(set.insert(1), Ok(None));
    /// assert_eq!(set.insert(1), Ok(Some(1)));
    /// ```
    pub fn insert(&mut self, key: T) -> Result<Option<T>> {
        let replace = self.policy == DuplicatePolicy::Replace;
        match self.map.insert_entry(key, (), replace) {
            Insertion::Inserted => Ok(None),
            Insertion::Replaced(entry) => Ok(Some(entry.key)),
            Insertion::Rejected(entry) => match self.policy {
                DuplicatePolicy::Reject => Err(Error::DuplicateKey),
                _ => Ok(Some(entry.key)),
            },
        }
    }

    /// Removes a key from the set. If the key exists in the set, it will return the associated
    /// key. Otherwise it will return `None`.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1).unwrap();
    /// assert_eq!(set.remove(&1), Some(1));
    /// assert_eq!(set.remove(&1), None);
    /// ```
    pub fn remove(&mut self, key: &T) -> Option<T> {
        self.map.remove(key).map(|pair| pair.0)
    }

    /// Checks if a key exists in the set.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1).unwrap();
    /// assert!(!set.contains(&0));
    /// assert!(set.contains(&1));
    /// ```
    pub fn contains(&self, key: &T) -> bool {
        self.map.contains_key(key)
    }

    /// Returns the number of elements in the set.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1).unwrap();
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Alias of `len`.
    pub fn size(&self) -> usize {
        self.len()
    }

    /// Returns `true` if the set is empty.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::avl_tree::AvlSet;
    ///
    /// let set: AvlSet<u32> = AvlSet::new();
    /// assert!(set.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Alias of `is_empty`.
    pub fn empty(&self) -> bool {
        self.is_empty()
    }

    /// Clears the set, removing all values.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1).unwrap();
    /// set.insert(2).unwrap();
    /// set.clear();
    /// assert_eq!(set.is_empty(), true);
    /// ```
    pub fn clear(&mut self) {
        self.map.clear();
    }

    /// Returns the height of the underlying tree. An empty set has a height of `-1` and a set
    /// with a single key has a height of `0`.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// assert_eq!(set.height(), -1);
    /// for key in 1..8 {
    ///     set.insert(key).unwrap();
    /// }
    /// assert_eq!(set.height(), 2);
    /// ```
    pub fn height(&self) -> i32 {
        self.map.height()
    }

    /// Returns the key stored at the root of the tree, or `Error::EmptyTree` if the set is empty.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::avl_tree::AvlSet;
    /// use avl_collections::Error;
    ///
    /// let mut set = AvlSet::new();
    /// assert_eq!(set.root(), Err(Error::EmptyTree));
    /// set.insert(1).unwrap();
    /// assert_eq!(set.root(), Ok(&1));
    /// ```
    pub fn root(&self) -> Result<&T> {
        self.map.root().map(|pair| pair.0)
    }

    /// Returns a key in the set that is less than or equal to a particular key. Returns `None` if
    /// such a key does not exist.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1).unwrap();
    /// assert_eq!(set.floor(&0), None);
    /// assert_eq!(set.floor(&2), Some(&1));
    /// ```
    pub fn floor(&self, key: &T) -> Option<&T> {
        self.map.floor(key)
    }

    /// Returns a key in the set that is greater than or equal to a particular key. Returns `None`
    /// if such a key does not exist.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1).unwrap();
    /// assert_eq!(set.ceil(&0), Some(&1));
    /// assert_eq!(set.ceil(&2), None);
    /// ```
    pub fn ceil(&self, key: &T) -> Option<&T> {
        self.map.ceil(key)
    }

    /// Returns the minimum key of the set. Returns `None` if the set is empty.
    pub fn min(&self) -> Option<&T> {
        self.map.min()
    }

    /// Returns the maximum key of the set. Returns `None` if the set is empty.
    pub fn max(&self) -> Option<&T> {
        self.map.max()
    }

    /// Returns a snapshot of the keys in pre-order: each node before its left subtree, and the
    /// left subtree before the right subtree.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// for key in &[5, 3, 7, 2, 1, 6, 8] {
    ///     set.insert(*key).unwrap();
    /// }
    /// assert_eq!(set.pre_order(), vec![5, 2, 1, 3, 7, 6, 8]);
    /// ```
    pub fn pre_order(&self) -> Vec<T>
    where
        T: Clone,
    {
        let mut ret = Vec::with_capacity(self.len());
        self.map.visit_pre_order(|key, _| ret.push(key.clone()));
        ret
    }

    /// Returns a snapshot of the keys in in-order, which is ascending order.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// for key in &[5, 3, 7, 2, 1, 6, 8] {
    ///     set.insert(*key).unwrap();
    /// }
    /// assert_eq!(set.in_order(), vec![1, 2, 3, 5, 6, 7, 8]);
    /// ```
    pub fn in_order(&self) -> Vec<T>
    where
        T: Clone,
    {
        let mut ret = Vec::with_capacity(self.len());
        self.map.visit_in_order(|key, _| ret.push(key.clone()));
        ret
    }

    /// Returns a snapshot of the keys in post-order: both subtrees of a node before the node
    /// itself.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// for key in &[5, 3, 7, 2, 1, 6, 8] {
    ///     set.insert(*key).unwrap();
    /// }
    /// assert_eq!(set.post_order(), vec![1, 3, 2, 6, 8, 7, 5]);
    /// ```
    pub fn post_order(&self) -> Vec<T>
    where
        T: Clone,
    {
        let mut ret = Vec::with_capacity(self.len());
        self.map.visit_post_order(|key, _| ret.push(key.clone()));
        ret
    }

    /// Returns an iterator over the set. The iterator will yield keys using in-order traversal.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1).unwrap();
    /// set.insert(3).unwrap();
    ///
    /// let mut iterator = set.iter();
    /// assert_eq!(iterator.next(), Some(&1));
    /// assert_eq!(iterator.next(), Some(&3));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> AvlSetIter<T> {
        AvlSetIter {
            map_iter: self.map.iter(),
        }
    }
}

#[cfg(test)]
impl<T> AvlSet<T>
where
    T: Ord,
{
    pub(crate) fn check_invariants(&self) {
        self.map.check_invariants();
    }
}

impl<T> IntoIterator for AvlSet<T>
where
    T: Ord,
{
    type Item = T;
    type IntoIter = AvlSetIntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        Self::IntoIter {
            map_iter: self.map.into_iter(),
        }
    }
}

impl<'a, T> IntoIterator for &'a AvlSet<T>
where
    T: 'a + Ord,
{
    type Item = &'a T;
    type IntoIter = AvlSetIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An owning iterator for `AvlSet<T>`.
///
/// This iterator traverses the elements of the set in-order and yields owned keys.
pub struct AvlSetIntoIter<T> {
    map_iter: AvlMapIntoIter<T, ()>,
}

impl<T> Iterator for AvlSetIntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.map_iter.next().map(|pair| pair.0)
    }
}

/// An iterator for `AvlSet<T>`.
///
/// This iterator traverses the elements of the set in-order and yields immutable references.
pub struct AvlSetIter<'a, T>
where
    T: 'a,
{
    map_iter: AvlMapIter<'a, T, ()>,
}

impl<'a, T> Iterator for AvlSetIter<'a, T>
where
    T: 'a,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.map_iter.next().map(|pair| pair.0)
    }
}

impl<T> Default for AvlSet<T>
where
    T: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

// Collecting keeps the first occurrence of each key regardless of policy.
impl<T> Extend<T> for AvlSet<T>
where
    T: Ord,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        for key in iter {
            self.map.insert_entry(key, (), false);
        }
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
