use crate::compare::{Compare, Natural};
use crate::error::{Error, Result};
use crate::red_black_tree::tree::{self, Tree};
use std::fmt;
use std::iter::FromIterator;
use std::ops::{Index, IndexMut};

/// An ordered map implemented using a red black tree.
///
/// A red black tree is a self-balancing binary search tree that colors every node red or black.
/// The root is black, a red node never has a red child, and every path from a node down to an
/// empty slot passes through the same number of black nodes. Together these bound the height by
/// `2 * log2(n + 1)`, so searches, insertions, and removals take logarithmic time regardless of
/// the order in which keys arrive.
///
/// Keys are ordered by a comparator chosen at construction. `RedBlackMap::new` uses the key's
/// `Ord` implementation; `RedBlackMap::with_comparator` accepts any `Compare<T>`, including
/// closures. The comparator must be a total order.
///
/// `insert` overwrites an existing entry with an equal key and returns the old pair, while
/// `try_insert` rejects duplicates with `Error::DuplicateKey`.
///
/// # Examples
///
/// ```
/// use red_black_collections::red_black_tree::RedBlackMap;
///
/// let mut map = RedBlackMap::new();
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
pub struct RedBlackMap<T, U, C = Natural> {
    tree: Tree<T, U>,
    cmp: C,
}

impl<T, U> RedBlackMap<T, U> {
    /// Constructs a new, empty `RedBlackMap<T, U>` ordered by `T`'s `Ord` implementation.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::RedBlackMap;
    ///
    /// let map: RedBlackMap<u32, u32> = RedBlackMap::new();
    /// ```
    pub fn new() -> Self {
        Self::with_comparator(Natural)
    }

    /// Constructs a new, empty `RedBlackMap<T, U>` with room for `capacity` entries before the
    /// node storage reallocates.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::RedBlackMap;
    ///
    /// let map: RedBlackMap<u32, u32> = RedBlackMap::with_capacity(16);
    /// assert!(map.capacity() >= 16);
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_comparator(capacity, Natural)
    }
}

impl<T, U, C> RedBlackMap<T, U, C> {
    /// Constructs a new, empty `RedBlackMap<T, U, C>` ordered by `cmp`.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::with_comparator(|left: &u32, right: &u32| right.cmp(left));
    /// map.insert(1, "a");
    /// map.insert(2, "b");
    /// assert_eq!(map.min(), Some(&2));
    /// ```
    pub fn with_comparator(cmp: C) -> Self {
        Self::with_capacity_and_comparator(0, cmp)
    }

    /// Constructs a new, empty `RedBlackMap<T, U, C>` ordered by `cmp` with room for `capacity`
    /// entries.
    pub fn with_capacity_and_comparator(capacity: usize, cmp: C) -> Self {
        RedBlackMap {
            tree: Tree::with_capacity(capacity),
            cmp,
        }
    }

    /// Inserts a key-value pair into the map. If the key already exists in the map, it will
    /// return and replace the old key-value pair.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// assert_eq!(map.insert(1, 1), None);
    /// assert_eq!(map.get(&1), Some(&1));
    /// assert_eq!(map.insert(1, 2), Some((1, 1)));
    /// assert_eq!(map.get(&1), Some(&2));
    /// ```
    pub fn insert(&mut self, key: T, value: U) -> Option<(T, U)>
    where
        C: Compare<T>,
    {
        let RedBlackMap {
            ref mut tree,
            ref cmp,
        } = self;
        tree.insert(key, value, cmp).map(|entry| entry.into_pair())
    }

    /// Inserts a key-value pair into the map only if the key does not exist yet. Returns
    /// `Error::DuplicateKey` and leaves the map unchanged otherwise; the rejected key and value
    /// are dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::RedBlackMap;
    /// use red_black_collections::Error;
    ///
    /// let mut map = RedBlackMap::new();
    /// assert_eq!(map.try_insert(1, 1), Ok(()));
    /// assert_eq!(map.try_insert(1, 2), Err(Error::DuplicateKey));
    /// assert_eq!(map.get(&1), Some(&1));
    /// ```
    pub fn try_insert(&mut self, key: T, value: U) -> Result<()>
    where
        C: Compare<T>,
    {
        if self.contains_key(&key) {
            return Err(Error::DuplicateKey);
        }
        self.insert(key, value);
        Ok(())
    }

    /// Removes a key-value pair from the map. If the key exists in the map, it will return the
    /// associated key-value pair. Otherwise it will return `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1);
    /// assert_eq!(map.remove(&1), Some((1, 1)));
    /// assert_eq!(map.remove(&1), None);
    /// ```
    pub fn remove(&mut self, key: &T) -> Option<(T, U)>
    where
        C: Compare<T>,
    {
        let RedBlackMap {
            ref mut tree,
            ref cmp,
        } = self;
        tree.remove(key, cmp).map(|entry| entry.into_pair())
    }

    /// Removes a key-value pair from the map, returning `Error::NotFound` if the key does not
    /// exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::RedBlackMap;
    /// use red_black_collections::Error;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1);
    /// assert_eq!(map.try_remove(&1), Ok((1, 1)));
    /// assert_eq!(map.try_remove(&1), Err(Error::NotFound));
    /// ```
    pub fn try_remove(&mut self, key: &T) -> Result<(T, U)>
    where
        C: Compare<T>,
    {
        self.remove(key).ok_or(Error::NotFound)
    }

    /// Checks if a key exists in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1);
    /// assert!(!map.contains_key(&0));
    /// assert!(map.contains_key(&1));
    /// ```
    pub fn contains_key(&self, key: &T) -> bool
    where
        C: Compare<T>,
    {
        self.tree.search(key, &self.cmp).is_some()
    }

    /// Returns an immutable reference to the value associated with a particular key. It will
    /// return `None` if the key does not exist in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1);
    /// assert_eq!(map.get(&0), None);
    /// assert_eq!(map.get(&1), Some(&1));
    /// ```
    pub fn get(&self, key: &T) -> Option<&U>
    where
        C: Compare<T>,
    {
        self.tree.get(key, &self.cmp).map(|entry| &entry.value)
    }

    /// Returns a mutable reference to the value associated with a particular key. Returns `None`
    /// if such a key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1);
    /// *map.get_mut(&1).unwrap() = 2;
    /// assert_eq!(map.get(&1), Some(&2));
    /// ```
    pub fn get_mut(&mut self, key: &T) -> Option<&mut U>
    where
        C: Compare<T>,
    {
        let RedBlackMap {
            ref mut tree,
            ref cmp,
        } = self;
        tree.get_mut(key, cmp).map(|entry| &mut entry.value)
    }

    /// Returns the number of elements in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1);
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Returns `true` if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::RedBlackMap;
    ///
    /// let map: RedBlackMap<u32, u32> = RedBlackMap::new();
    /// assert!(map.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of entries the map can hold without reallocating its node storage.
    pub fn capacity(&self) -> usize {
        self.tree.capacity()
    }

    /// Reserves node storage for at least `additional` more entries.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map: RedBlackMap<u32, u32> = RedBlackMap::new();
    /// map.reserve(10);
    /// assert!(map.capacity() >= 10);
    /// ```
    pub fn reserve(&mut self, additional: usize) {
        self.tree.reserve(additional);
    }

    /// Clears the map, removing all values.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1);
    /// map.insert(2, 2);
    /// map.clear();
    /// assert_eq!(map.is_empty(), true);
    /// ```
    pub fn clear(&mut self) {
        self.tree.clear();
    }

    /// Returns a key in the map that is less than or equal to a particular key. Returns `None` if
    /// such a key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1);
    /// assert_eq!(map.floor(&0), None);
    /// assert_eq!(map.floor(&2), Some(&1));
    /// ```
    pub fn floor(&self, key: &T) -> Option<&T>
    where
        C: Compare<T>,
    {
        self.tree.floor(key, &self.cmp).map(|entry| &entry.key)
    }

    /// Returns a key in the map that is greater than or equal to a particular key. Returns `None`
    /// if such a key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1);
    /// assert_eq!(map.ceil(&0), Some(&1));
    /// assert_eq!(map.ceil(&2), None);
    /// ```
    pub fn ceil(&self, key: &T) -> Option<&T>
    where
        C: Compare<T>,
    {
        self.tree.ceil(key, &self.cmp).map(|entry| &entry.key)
    }

    /// Returns the minimum key of the map. Returns `None` if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1);
    /// map.insert(3, 3);
    /// assert_eq!(map.min(), Some(&1));
    /// ```
    pub fn min(&self) -> Option<&T> {
        self.tree
            .first()
            .map(|handle| &self.tree.node(handle).entry.key)
    }

    /// Returns the maximum key of the map. Returns `None` if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1);
    /// map.insert(3, 3);
    /// assert_eq!(map.max(), Some(&3));
    /// ```
    pub fn max(&self) -> Option<&T> {
        self.tree
            .last()
            .map(|handle| &self.tree.node(handle).entry.key)
    }

    /// Returns an iterator over the map. The iterator will yield key-value pairs using in-order
    /// traversal. It can be walked from both ends and cloned to restart from its current
    /// position.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1);
    /// map.insert(2, 2);
    ///
    /// let mut iterator = map.iter();
    /// assert_eq!(iterator.next(), Some((&1, &1)));
    /// assert_eq!(iterator.next(), Some((&2, &2)));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> RedBlackMapIter<'_, T, U> {
        RedBlackMapIter {
            tree_iter: tree::Iter::new(&self.tree),
        }
    }

    /// Returns an iterator over the keys of the map in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(2, 'b');
    /// map.insert(1, 'a');
    /// assert_eq!(map.keys().collect::<Vec<&u32>>(), vec![&1, &2]);
    /// ```
    pub fn keys(&self) -> impl DoubleEndedIterator<Item = &T> + ExactSizeIterator {
        self.iter().map(|(key, _)| key)
    }

    /// Returns an iterator over the values of the map in ascending order of their keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(2, 'b');
    /// map.insert(1, 'a');
    /// assert_eq!(map.values().collect::<Vec<&char>>(), vec![&'a', &'b']);
    /// ```
    pub fn values(&self) -> impl DoubleEndedIterator<Item = &U> + ExactSizeIterator {
        self.iter().map(|(_, value)| value)
    }

    /// Returns the number of nodes on the longest path from the root to an empty slot. Always at
    /// most `2 * log2(len + 1)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// for key in 0..7 {
    ///     map.insert(key, ());
    /// }
    /// assert!(map.height() <= 6);
    /// ```
    pub fn height(&self) -> usize {
        self.tree.height()
    }

    /// Returns the black-height of the root: the number of black nodes on any path from the root
    /// down to an empty slot, counting the empty slot but not the root. Returns `0` if the map is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// assert_eq!(map.black_height(), 0);
    /// map.insert(1, 1);
    /// assert_eq!(map.black_height(), 1);
    /// ```
    pub fn black_height(&self) -> usize {
        self.tree.black_height()
    }

    /// Checks the red black invariants of the underlying tree and that keys are in ascending
    /// order under the map's comparator.
    ///
    /// Returns `Error::InvalidConfiguration` when keys are out of order, which can only happen if
    /// the comparator is not a consistent total order, and `Error::InvariantViolation` when the
    /// coloring or linking of the tree is broken.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// for key in 0..100 {
    ///     map.insert(key, key);
    /// }
    /// assert_eq!(map.validate(), Ok(()));
    /// ```
    pub fn validate(&self) -> Result<()>
    where
        C: Compare<T>,
    {
        self.tree.validate(&self.cmp).map_err(|err| {
            debug!("red black map failed validation: {}", err);
            err
        })
    }
}

impl<T, U, C> IntoIterator for RedBlackMap<T, U, C> {
    type IntoIter = RedBlackMapIntoIter<T, U>;
    type Item = (T, U);

    fn into_iter(self) -> Self::IntoIter {
        Self::IntoIter {
            tree_iter: tree::IntoIter::new(self.tree),
        }
    }
}

impl<'a, T, U, C> IntoIterator for &'a RedBlackMap<T, U, C>
where
    T: 'a,
    U: 'a,
{
    type IntoIter = RedBlackMapIter<'a, T, U>;
    type Item = (&'a T, &'a U);

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An owning iterator for `RedBlackMap<T, U, C>`.
///
/// This iterator traverses the elements of the map in-order and yields owned entries.
pub struct RedBlackMapIntoIter<T, U> {
    tree_iter: tree::IntoIter<T, U>,
}

impl<T, U> Iterator for RedBlackMapIntoIter<T, U> {
    type Item = (T, U);

    fn next(&mut self) -> Option<Self::Item> {
        self.tree_iter.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.tree_iter.size_hint()
    }
}

impl<T, U> ExactSizeIterator for RedBlackMapIntoIter<T, U> {}

/// An iterator for `RedBlackMap<T, U, C>`.
///
/// This iterator traverses the elements of the map in-order and yields immutable references.
pub struct RedBlackMapIter<'a, T, U>
where
    T: 'a,
    U: 'a,
{
    tree_iter: tree::Iter<'a, T, U>,
}

impl<'a, T, U> Clone for RedBlackMapIter<'a, T, U> {
    fn clone(&self) -> Self {
        RedBlackMapIter {
            tree_iter: self.tree_iter.clone(),
        }
    }
}

impl<'a, T, U> Iterator for RedBlackMapIter<'a, T, U>
where
    T: 'a,
    U: 'a,
{
    type Item = (&'a T, &'a U);

    fn next(&mut self) -> Option<Self::Item> {
        self.tree_iter.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.tree_iter.size_hint()
    }
}

impl<'a, T, U> DoubleEndedIterator for RedBlackMapIter<'a, T, U> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.tree_iter.next_back()
    }
}

impl<'a, T, U> ExactSizeIterator for RedBlackMapIter<'a, T, U> {}

impl<T, U, C> Default for RedBlackMap<T, U, C>
where
    C: Default,
{
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<T, U, C> fmt::Debug for RedBlackMap<T, U, C>
where
    T: fmt::Debug,
    U: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<T, U, C> Extend<(T, U)> for RedBlackMap<T, U, C>
where
    C: Compare<T>,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = (T, U)>,
    {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<T, U, C> FromIterator<(T, U)> for RedBlackMap<T, U, C>
where
    C: Compare<T> + Default,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = (T, U)>,
    {
        let mut map = Self::default();
        map.extend(iter);
        map
    }
}

impl<'a, T, U, C> Index<&'a T> for RedBlackMap<T, U, C>
where
    C: Compare<T>,
{
    type Output = U;

    fn index(&self, key: &T) -> &Self::Output {
        self.get(key).expect("Error: key does not exist.")
    }
}

impl<'a, T, U, C> IndexMut<&'a T> for RedBlackMap<T, U, C>
where
    C: Compare<T>,
{
    fn index_mut(&mut self, key: &T) -> &mut Self::Output {
        self.get_mut(key).expect("Error: key does not exist.")
    }
}
