use crate::avl_tree::node::Node;
use crate::avl_tree::tree::{self, Insertion};
use crate::entry::Entry;
use crate::{Error, Result};
use std::ops::{Index, IndexMut};

/// An ordered map implemented using an avl tree.
///
/// An avl tree is a self-balancing binary search tree that maintains the invariant that the
/// heights of two child subtrees of any node differ by at most one. Lookups, insertions and
/// removals therefore take logarithmic time.
///
/// # Examples
/// ```
/// use avl_collections::avl_tree::AvlMap;
///
/// let mut map = AvlMap::new();
/// map.insert(0, 1);
/// map.insert(3, 4);
///
/// assert_eq!(map[&0], 1);
/// assert_eq!(map.get(&1), None);
/// assert_eq!(map.len(), 2);
///
/// assert_eq!(map.min(), Some(&0));
/// assert_eq!(map.ceil(&2), Some(&3));
///
/// map[&0] = 2;
/// assert_eq!(map.remove(&0), Some((0, 2)));
/// assert_eq!(map.remove(&1), None);
/// ```
pub struct AvlMap<T, U> {
    root: tree::Tree<T, U>,
    len: usize,
}

impl<T, U> AvlMap<T, U>
where
    T: Ord,
{
    /// Constructs a new, empty `AvlMap<T, U>`.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::avl_tree::AvlMap;
    ///
    /// let map: AvlMap<u32, u32> = AvlMap::new();
    /// ```
    pub fn new() -> Self {
        AvlMap {
            root: None,
            len: 0,
        }
    }

    pub(crate) fn insert_entry(&mut self, key: T, value: U, replace: bool) -> Insertion<T, U> {
        let AvlMap { ref mut root, ref mut len } = *self;
        let ret = tree::insert(root, Node::new(key, value), replace);
        if let Insertion::Inserted = ret {
            *len += 1;
        }
        ret
    }

    /// Inserts a key-value pair into the map. If the key already exists in the map, it will
    /// return and replace the old key-value pair.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// assert_eq!(map.insert(1, 1), None);
    /// assert_eq!(map.get(&1), Some(&1));
    /// assert_eq!(map.insert(1, 2), Some((1, 1)));
    /// assert_eq!(map.get(&1), Some(&2));
    /// ```
    pub fn insert(&mut self, key: T, value: U) -> Option<(T, U)> {
        match self.insert_entry(key, value, true) {
            Insertion::Replaced(entry) | Insertion::Rejected(entry) => Some(entry.into_pair()),
            Insertion::Inserted => None,
        }
    }

    /// Inserts a key-value pair into the map only if the key is absent. Returns
    /// `Error::DuplicateKey` and leaves the map untouched if the key already exists.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::avl_tree::AvlMap;
    /// use avl_collections::Error;
    ///
    /// let mut map = AvlMap::new();
    /// assert_eq!(map.try_insert(1, 1), Ok(()));
    /// assert_eq!(map.try_insert(1, 2), Err(Error::DuplicateKey));
    /// assert_eq!(map.get(&1), Some(&1));
    /// ```
    pub fn try_insert(&mut self, key: T, value: U) -> Result<()> {
        match self.insert_entry(key, value, false) {
            Insertion::Inserted => Ok(()),
            _ => Err(Error::DuplicateKey),
        }
    }

    /// Removes a key-value pair from the map. If the key exists in the map, it will return the
    /// associated key-value pair. Otherwise it will return `None`.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(1, 1);
    /// assert_eq!(map.remove(&1), Some((1, 1)));
    /// assert_eq!(map.remove(&1), None);
    /// ```
    pub fn remove(&mut self, key: &T) -> Option<(T, U)> {
        let AvlMap { ref mut root, ref mut len } = *self;
        tree::remove(root, key).map(|entry| {
            *len -= 1;
            entry.into_pair()
        })
    }

    /// Checks if a key exists in the map.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(1, 1);
    /// assert!(!map.contains_key(&0));
    /// assert!(map.contains_key(&1));
    /// ```
    pub fn contains_key(&self, key: &T) -> bool {
        self.get(key).is_some()
    }

    /// Returns an immutable reference to the value associated with a particular key. It will
    /// return `None` if the key does not exist in the map.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(1, 1);
    /// assert_eq!(map.get(&0), None);
    /// assert_eq!(map.get(&1), Some(&1));
    /// ```
    pub fn get(&self, key: &T) -> Option<&U> {
        tree::get(&self.root, key).map(|entry| &entry.value)
    }

    /// Returns a mutable reference to the value associated with a particular key. Returns `None`
    /// if such a key does not exist.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(1, 1);
    /// *map.get_mut(&1).unwrap() = 2;
    /// assert_eq!(map.get(&1), Some(&2));
    /// ```
    pub fn get_mut(&mut self, key: &T) -> Option<&mut U> {
        tree::get_mut(&mut self.root, key).map(|entry| &mut entry.value)
    }

    /// Returns the number of elements in the map.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(1, 1);
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the map is empty.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::avl_tree::AvlMap;
    ///
    /// let map: AvlMap<u32, u32> = AvlMap::new();
    /// assert!(map.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Clears the map, removing all values.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(1, 1);
    /// map.insert(2, 2);
    /// map.clear();
    /// assert_eq!(map.is_empty(), true);
    /// ```
    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }

    /// Returns the height of the underlying tree. An empty map has a height of `-1` and a map
    /// with a single entry has a height of `0`.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// assert_eq!(map.height(), -1);
    /// map.insert(1, 1);
    /// assert_eq!(map.height(), 0);
    /// ```
    pub fn height(&self) -> i32 {
        tree::height(&self.root)
    }

    /// Returns the key-value pair stored at the root of the tree, or `Error::EmptyTree` if the
    /// map is empty.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::avl_tree::AvlMap;
    /// use avl_collections::Error;
    ///
    /// let mut map = AvlMap::new();
    /// assert_eq!(map.root(), Err(Error::EmptyTree));
    /// map.insert(1, 2);
    /// assert_eq!(map.root(), Ok((&1, &2)));
    /// ```
    pub fn root(&self) -> Result<(&T, &U)> {
        tree::root(&self.root)
            .map(|entry| (&entry.key, &entry.value))
            .ok_or(Error::EmptyTree)
    }

    /// Returns a key in the map that is less than or equal to a particular key. Returns `None` if
    /// such a key does not exist.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(1, 1);
    /// assert_eq!(map.floor(&0), None);
    /// assert_eq!(map.floor(&2), Some(&1));
    /// ```
    pub fn floor(&self, key: &T) -> Option<&T> {
        tree::floor(&self.root, key).map(|entry| &entry.key)
    }

    /// Returns a key in the map that is greater than or equal to a particular key. Returns `None`
    /// if such a key does not exist.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(1, 1);
    /// assert_eq!(map.ceil(&0), Some(&1));
    /// assert_eq!(map.ceil(&2), None);
    /// ```
    pub fn ceil(&self, key: &T) -> Option<&T> {
        tree::ceil(&self.root, key).map(|entry| &entry.key)
    }

    /// Returns the minimum key of the map. Returns `None` if the map is empty.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(1, 1);
    /// map.insert(3, 3);
    /// assert_eq!(map.min(), Some(&1));
    /// ```
    pub fn min(&self) -> Option<&T> {
        tree::min(&self.root).map(|entry| &entry.key)
    }

    /// Returns the maximum key of the map. Returns `None` if the map is empty.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(1, 1);
    /// map.insert(3, 3);
    /// assert_eq!(map.max(), Some(&3));
    /// ```
    pub fn max(&self) -> Option<&T> {
        tree::max(&self.root).map(|entry| &entry.key)
    }

    pub(crate) fn visit_pre_order<'a, F>(&'a self, mut visit: F)
    where
        F: FnMut(&'a T, &'a U),
    {
        tree::pre_order(&self.root, &mut |entry: &'a Entry<T, U>| visit(&entry.key, &entry.value));
    }

    pub(crate) fn visit_in_order<'a, F>(&'a self, mut visit: F)
    where
        F: FnMut(&'a T, &'a U),
    {
        tree::in_order(&self.root, &mut |entry: &'a Entry<T, U>| visit(&entry.key, &entry.value));
    }

    pub(crate) fn visit_post_order<'a, F>(&'a self, mut visit: F)
    where
        F: FnMut(&'a T, &'a U),
    {
        tree::post_order(&self.root, &mut |entry: &'a Entry<T, U>| visit(&entry.key, &entry.value));
    }

    /// Returns the key-value pairs of the map in pre-order: each node before its left subtree,
    /// and the left subtree before the right subtree.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(2, 'b');
    /// map.insert(1, 'a');
    /// map.insert(3, 'c');
    /// assert_eq!(map.pre_order(), vec![(2, 'b'), (1, 'a'), (3, 'c')]);
    /// ```
    pub fn pre_order(&self) -> Vec<(T, U)>
    where
        T: Clone,
        U: Clone,
    {
        let mut ret = Vec::with_capacity(self.len);
        self.visit_pre_order(|key, value| ret.push((key.clone(), value.clone())));
        ret
    }

    /// Returns the key-value pairs of the map in in-order, which is ascending order of keys.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(2, 'b');
    /// map.insert(1, 'a');
    /// map.insert(3, 'c');
    /// assert_eq!(map.in_order(), vec![(1, 'a'), (2, 'b'), (3, 'c')]);
    /// ```
    pub fn in_order(&self) -> Vec<(T, U)>
    where
        T: Clone,
        U: Clone,
    {
        let mut ret = Vec::with_capacity(self.len);
        self.visit_in_order(|key, value| ret.push((key.clone(), value.clone())));
        ret
    }

    /// Returns the key-value pairs of the map in post-order: both subtrees of a node before the
    /// node itself.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(2, 'b');
    /// map.insert(1, 'a');
    /// map.insert(3, 'c');
    /// assert_eq!(map.post_order(), vec![(1, 'a'), (3, 'c'), (2, 'b')]);
    /// ```
    pub fn post_order(&self) -> Vec<(T, U)>
    where
        T: Clone,
        U: Clone,
    {
        let mut ret = Vec::with_capacity(self.len);
        self.visit_post_order(|key, value| ret.push((key.clone(), value.clone())));
        ret
    }

    /// Returns an iterator over the map. The iterator will yield key-value pairs using in-order
    /// traversal.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(1, 1);
    /// map.insert(3, 3);
    ///
    /// let mut iterator = map.iter();
    /// assert_eq!(iterator.next(), Some((&1, &1)));
    /// assert_eq!(iterator.next(), Some((&3, &3)));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> AvlMapIter<T, U> {
        AvlMapIter {
            current: &self.root,
            stack: Vec::new(),
        }
    }

    /// Returns a mutable iterator over the map. The iterator will yield key-value pairs using
    /// in-order traversal.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(1, 1);
    /// map.insert(3, 3);
    ///
    /// for (_, value) in &mut map {
    ///     *value += 1;
    /// }
    ///
    /// let mut iterator = map.iter_mut();
    /// assert_eq!(iterator.next(), Some((&1, &mut 2)));
    /// assert_eq!(iterator.next(), Some((&3, &mut 4)));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter_mut(&mut self) -> AvlMapIterMut<T, U> {
        AvlMapIterMut {
            current: self.root.as_mut().map(|node| &mut **node),
            stack: Vec::new(),
        }
    }
}

#[cfg(test)]
impl<T, U> AvlMap<T, U>
where
    T: Ord,
{
    pub(crate) fn check_invariants(&self) {
        assert_eq!(tree::check_invariants(&self.root), self.len);
    }
}

impl<T, U> IntoIterator for AvlMap<T, U>
where
    T: Ord,
{
    type Item = (T, U);
    type IntoIter = AvlMapIntoIter<T, U>;

    fn into_iter(self) -> Self::IntoIter {
        AvlMapIntoIter {
            current: self.root,
            stack: Vec::new(),
        }
    }
}

impl<'a, T, U> IntoIterator for &'a AvlMap<T, U>
where
    T: 'a + Ord,
    U: 'a,
{
    type Item = (&'a T, &'a U);
    type IntoIter = AvlMapIter<'a, T, U>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, U> IntoIterator for &'a mut AvlMap<T, U>
where
    T: 'a + Ord,
    U: 'a,
{
    type Item = (&'a T, &'a mut U);
    type IntoIter = AvlMapIterMut<'a, T, U>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// An owning iterator for `AvlMap<T, U>`.
///
/// This iterator traverses the elements of the map in-order and yields owned entries.
pub struct AvlMapIntoIter<T, U> {
    current: tree::Tree<T, U>,
    stack: Vec<Node<T, U>>,
}

impl<T, U> Iterator for AvlMapIntoIter<T, U> {
    type Item = (T, U);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(mut node) = self.current.take() {
            self.current = node.left.take();
            self.stack.push(*node);
        }
        self.stack.pop().map(|node| {
            let Node { entry, right, .. } = node;
            self.current = right;
            entry.into_pair()
        })
    }
}

/// An iterator for `AvlMap<T, U>`.
///
/// This iterator traverses the elements of the map in-order and yields immutable references.
pub struct AvlMapIter<'a, T, U>
where
    T: 'a,
    U: 'a,
{
    current: &'a tree::Tree<T, U>,
    stack: Vec<&'a Node<T, U>>,
}

impl<'a, T, U> Iterator for AvlMapIter<'a, T, U>
where
    T: 'a,
    U: 'a,
{
    type Item = (&'a T, &'a U);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(ref node) = *self.current {
            self.current = &node.left;
            self.stack.push(node);
        }
        self.stack.pop().map(|node| {
            let Node { entry: Entry { ref key, ref value }, ref right, .. } = *node;
            self.current = right;
            (key, value)
        })
    }
}

type IterMutFrame<'a, T, U> = (&'a mut Entry<T, U>, Option<&'a mut Node<T, U>>);

/// A mutable iterator for `AvlMap<T, U>`.
///
/// This iterator traverses the elements of the map in-order and yields mutable references.
pub struct AvlMapIterMut<'a, T, U>
where
    T: 'a,
    U: 'a,
{
    current: Option<&'a mut Node<T, U>>,
    stack: Vec<IterMutFrame<'a, T, U>>,
}

impl<'a, T, U> Iterator for AvlMapIterMut<'a, T, U>
where
    T: 'a,
    U: 'a,
{
    type Item = (&'a T, &'a mut U);

    fn next(&mut self) -> Option<Self::Item> {
        let AvlMapIterMut { ref mut current, ref mut stack } = *self;
        while let Some(node) = current.take() {
            let Node { ref mut entry, ref mut left, ref mut right, .. } = *node;
            *current = left.as_mut().map(|node| &mut **node);
            stack.push((entry, right.as_mut().map(|node| &mut **node)));
        }
        stack.pop().map(|(entry, right)| {
            let Entry { ref key, ref mut value } = *entry;
            *current = right;
            (key, value)
        })
    }
}

impl<T, U> Default for AvlMap<T, U>
where
    T: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T, U> Index<&'a T> for AvlMap<T, U>
where
    T: Ord,
{
    type Output = U;

    fn index(&self, key: &T) -> &Self::Output {
        self.get(key).expect("Key does not exist.")
    }
}

impl<'a, T, U> IndexMut<&'a T> for AvlMap<T, U>
where
    T: Ord,
{
    fn index_mut(&mut self, key: &T) -> &mut Self::Output {
        self.get_mut(key).expect("Key does not exist.")
    }
}

#[cfg(test)]
mod tests {
    use super::AvlMap;
    use crate::Error;

    #[test]
    fn test_len_empty() {
        let map: AvlMap<u32, u32> = AvlMap::new();
        assert_eq!(map.len(), 0);
        assert_eq!(map.height(), -1);
    }

    #[test]
    fn test_is_empty() {
        let map: AvlMap<u32, u32> = AvlMap::new();
        assert!(map.is_empty());
    }

    #[test]
    fn test_min_max_empty() {
        let map: AvlMap<u32, u32> = AvlMap::new();
        assert_eq!(map.min(), None);
        assert_eq!(map.max(), None);
    }

    #[test]
    fn test_insert() {
        let mut map = AvlMap::new();
        assert_eq!(map.insert(1, 1), None);
        assert!(map.contains_key(&1));
        assert_eq!(map.get(&1), Some(&1));
        map.check_invariants();
    }

    #[test]
    fn test_insert_replace() {
        let mut map = AvlMap::new();
        let ret_1 = map.insert(1, 1);
        let ret_2 = map.insert(1, 3);
        assert_eq!(map.get(&1), Some(&3));
        assert_eq!(ret_1, None);
        assert_eq!(ret_2, Some((1, 1)));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_try_insert_duplicate() {
        let mut map = AvlMap::new();
        assert_eq!(map.try_insert(1, 1), Ok(()));
        assert_eq!(map.try_insert(1, 3), Err(Error::DuplicateKey));
        assert_eq!(map.get(&1), Some(&1));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_remove() {
        let mut map = AvlMap::new();
        map.insert(1, 1);
        let ret = map.remove(&1);
        assert!(!map.contains_key(&1));
        assert_eq!(ret, Some((1, 1)));
        assert_eq!(map.len(), 0);
    }

    #[test]
    fn test_remove_missing() {
        let mut map: AvlMap<u32, u32> = AvlMap::new();
        assert_eq!(map.remove(&1), None);
        map.insert(2, 2);
        assert_eq!(map.remove(&1), None);
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_root() {
        let mut map = AvlMap::new();
        assert_eq!(map.root(), Err(Error::EmptyTree));
        map.insert(1, 1);
        map.insert(2, 2);
        map.insert(3, 3);
        assert_eq!(map.root(), Ok((&2, &2)));
    }

    #[test]
    fn test_clear() {
        let mut map = AvlMap::new();
        map.insert(1, 1);
        map.insert(2, 2);
        map.clear();
        assert!(map.is_empty());
        assert_eq!(map.get(&1), None);
        map.check_invariants();
    }

    #[test]
    fn test_min_max() {
        let mut map = AvlMap::new();
        map.insert(1, 1);
        map.insert(3, 3);
        map.insert(5, 5);

        assert_eq!(map.min(), Some(&1));
        assert_eq!(map.max(), Some(&5));
    }

    #[test]
    fn test_get_mut() {
        let mut map = AvlMap::new();
        map.insert(1, 1);
        {
            let value = map.get_mut(&1);
            *value.unwrap() = 3;
        }
        assert_eq!(map.get(&1), Some(&3));
    }

    #[test]
    fn test_floor_ceil() {
        let mut map = AvlMap::new();
        map.insert(1, 1);
        map.insert(3, 3);
        map.insert(5, 5);

        assert_eq!(map.floor(&0), None);
        assert_eq!(map.floor(&2), Some(&1));
        assert_eq!(map.floor(&4), Some(&3));
        assert_eq!(map.floor(&6), Some(&5));

        assert_eq!(map.ceil(&0), Some(&1));
        assert_eq!(map.ceil(&2), Some(&3));
        assert_eq!(map.ceil(&4), Some(&5));
        assert_eq!(map.ceil(&6), None);
    }

    #[test]
    fn test_traversals() {
        let mut map = AvlMap::new();
        for key in &[5, 3, 7, 2, 1, 6, 8] {
            map.insert(*key, *key * 10);
        }

        assert_eq!(
            map.pre_order(),
            vec![(5, 50), (2, 20), (1, 10), (3, 30), (7, 70), (6, 60), (8, 80)],
        );
        assert_eq!(
            map.in_order(),
            vec![(1, 10), (2, 20), (3, 30), (5, 50), (6, 60), (7, 70), (8, 80)],
        );
        assert_eq!(
            map.post_order(),
            vec![(1, 10), (3, 30), (2, 20), (6, 60), (8, 80), (7, 70), (5, 50)],
        );
        map.check_invariants();
    }

    #[test]
    fn test_into_iter() {
        let mut map = AvlMap::new();
        map.insert(1, 2);
        map.insert(5, 6);
        map.insert(3, 4);

        assert_eq!(
            map.into_iter().collect::<Vec<(u32, u32)>>(),
            vec![(1, 2), (3, 4), (5, 6)],
        );
    }

    #[test]
    fn test_iter() {
        let mut map = AvlMap::new();
        map.insert(1, 2);
        map.insert(5, 6);
        map.insert(3, 4);

        assert_eq!(
            map.iter().collect::<Vec<(&u32, &u32)>>(),
            vec![(&1, &2), (&3, &4), (&5, &6)],
        );
    }

    #[test]
    fn test_iter_mut() {
        let mut map = AvlMap::new();
        map.insert(1, 2);
        map.insert(5, 6);
        map.insert(3, 4);

        for (_, value) in &mut map {
            *value += 1;
        }

        assert_eq!(
            map.iter().collect::<Vec<(&u32, &u32)>>(),
            vec![(&1, &3), (&3, &5), (&5, &7)],
        );
    }

    #[test]
    fn test_index() {
        let mut map = AvlMap::new();
        map.insert(1, 2);
        map[&1] = 4;
        assert_eq!(map[&1], 4);
    }

    #[test]
    #[should_panic]
    fn test_index_missing() {
        let map: AvlMap<u32, u32> = AvlMap::new();
        let _value = map[&1];
    }
}
