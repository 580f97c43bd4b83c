use crate::arena::{Arena, Handle};
use crate::compare::Compare;
use crate::entry::Entry;
use crate::error::{Error, Result, Violation};
use crate::red_black_tree::node::{Color, Link, Node, Side};
use std::cmp::{self, Ordering};
use std::mem;
use std::vec::Vec;

/// An arena-backed red black tree with parent links.
///
/// Child links own their subtrees; parent links are plain indices used by the fixups to walk
/// upward and by iteration to find in-order neighbours. Empty slots are `None` and count as
/// black everywhere.
pub struct Tree<T, U> {
    arena: Arena<Node<T, U>>,
    root: Link,
}

impl<T, U> Tree<T, U> {
    pub fn with_capacity(capacity: usize) -> Self {
        Tree {
            arena: Arena::with_capacity(capacity),
            root: None,
        }
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn capacity(&self) -> usize {
        self.arena.capacity()
    }

    pub fn reserve(&mut self, additional: usize) {
        debug!("reserving space for {} more nodes", additional);
        self.arena.reserve(additional);
    }

    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = None;
    }

    pub fn node(&self, handle: Handle) -> &Node<T, U> {
        &self.arena[handle]
    }

    fn node_mut(&mut self, handle: Handle) -> &mut Node<T, U> {
        &mut self.arena[handle]
    }

    fn is_red(&self, link: Link) -> bool {
        link.map_or(false, |handle| self.node(handle).is_red())
    }

    fn set_color(&mut self, handle: Handle, color: Color) {
        self.node_mut(handle).color = color;
    }

    fn parent(&self, handle: Handle) -> Link {
        self.node(handle).parent
    }

    fn child(&self, handle: Handle, side: Side) -> Link {
        self.node(handle).child(side)
    }

    // Points whatever linked to `old` (its parent, or the root) at `new`.
    fn replace_child(&mut self, parent: Link, old: Handle, new: Link) {
        match parent {
            None => self.root = new,
            Some(parent) => {
                let node = self.node_mut(parent);
                let side = node.side_of(Some(old));
                node.set_child(side, new);
            },
        }
    }

    /// Rotates the subtree rooted at `handle` towards `side`.
    ///
    /// `Side::Left` is a left rotation: the right child takes the place of `handle`, `handle`
    /// becomes its left child, and the right child's former left subtree becomes the right
    /// subtree of `handle`. `Side::Right` is the mirror image. In-order key order is preserved.
    ///
    /// # Panics
    ///
    /// Panics if `handle` has no child opposite to `side`.
    pub fn rotate(&mut self, handle: Handle, side: Side) {
        let other = side.opposite();
        let pivot = self
            .child(handle, other)
            .expect("Expected child node opposite the rotation to be `Some`.");
        trace!("rotating {:?} at {:?}", side, handle);

        let inner = self.child(pivot, side);
        self.node_mut(handle).set_child(other, inner);
        if let Some(inner) = inner {
            self.node_mut(inner).parent = Some(handle);
        }

        let parent = self.parent(handle);
        self.node_mut(pivot).parent = parent;
        self.replace_child(parent, handle, Some(pivot));

        self.node_mut(pivot).set_child(side, Some(handle));
        self.node_mut(handle).parent = Some(pivot);
    }

    pub fn search<C>(&self, key: &T, cmp: &C) -> Link
    where
        C: Compare<T>,
    {
        let mut curr = self.root;
        while let Some(handle) = curr {
            let node = self.node(handle);
            curr = match cmp.compare(key, &node.entry.key) {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => return Some(handle),
            };
        }
        None
    }

    pub fn get<C>(&self, key: &T, cmp: &C) -> Option<&Entry<T, U>>
    where
        C: Compare<T>,
    {
        self.search(key, cmp).map(|handle| &self.node(handle).entry)
    }

    pub fn get_mut<C>(&mut self, key: &T, cmp: &C) -> Option<&mut Entry<T, U>>
    where
        C: Compare<T>,
    {
        let handle = self.search(key, cmp)?;
        Some(&mut self.node_mut(handle).entry)
    }

    /// Inserts a key-value pair. An existing entry with an equal key is replaced and returned.
    pub fn insert<C>(&mut self, key: T, value: U, cmp: &C) -> Option<Entry<T, U>>
    where
        C: Compare<T>,
    {
        let mut parent = None;
        let mut side = Side::Left;
        let mut curr = self.root;
        while let Some(handle) = curr {
            side = match cmp.compare(&key, &self.node(handle).entry.key) {
                Ordering::Less => Side::Left,
                Ordering::Greater => Side::Right,
                Ordering::Equal => {
                    let entry = &mut self.node_mut(handle).entry;
                    return Some(mem::replace(entry, Entry { key, value }));
                },
            };
            parent = curr;
            curr = self.child(handle, side);
        }

        let handle = self.arena.allocate(Node::new(key, value, parent));
        match parent {
            None => self.root = Some(handle),
            Some(parent) => self.node_mut(parent).set_child(side, Some(handle)),
        }
        self.insert_fixup(handle);
        None
    }

    fn insert_fixup(&mut self, handle: Handle) {
        let mut curr = handle;
        while let Some(mut parent) = self.parent(curr).filter(|&parent| self.node(parent).is_red()) {
            // the root is black, so a red parent always has a parent of its own
            let grandparent = self
                .parent(parent)
                .expect("Expected red node to have a parent.");
            let side = self.node(grandparent).side_of(Some(parent));
            let uncle = self.child(grandparent, side.opposite());

            if let Some(uncle) = uncle.filter(|&uncle| self.node(uncle).is_red()) {
                trace!("insert fixup: red uncle, recoloring {:?}", grandparent);
                self.set_color(parent, Color::Black);
                self.set_color(uncle, Color::Black);
                self.set_color(grandparent, Color::Red);
                curr = grandparent;
                continue;
            }

            if self.child(parent, side.opposite()) == Some(curr) {
                trace!("insert fixup: inner grandchild {:?}", curr);
                self.rotate(parent, side);
                mem::swap(&mut curr, &mut parent);
            }

            trace!("insert fixup: outer grandchild {:?}", curr);
            self.set_color(parent, Color::Black);
            self.set_color(grandparent, Color::Red);
            self.rotate(grandparent, side.opposite());
            break;
        }

        if let Some(root) = self.root {
            self.set_color(root, Color::Black);
        }
    }

    /// Removes the entry with a key equal to `key` and returns it.
    pub fn remove<C>(&mut self, key: &T, cmp: &C) -> Option<Entry<T, U>>
    where
        C: Compare<T>,
    {
        let handle = self.search(key, cmp)?;
        let target = match (self.node(handle).left, self.node(handle).right) {
            (Some(_), Some(right)) => {
                let successor = self.extreme(right, Side::Left);
                let (node, successor_node) = self.arena.pair_mut(handle, successor);
                mem::swap(&mut node.entry, &mut successor_node.entry);
                successor
            },
            _ => handle,
        };
        Some(self.unlink(target))
    }

    // precondition: the node has at most one child
    fn unlink(&mut self, handle: Handle) -> Entry<T, U> {
        let (child, parent) = {
            let node = self.node(handle);
            (node.left.or(node.right), node.parent)
        };
        if let Some(child) = child {
            self.node_mut(child).parent = parent;
        }
        self.replace_child(parent, handle, child);

        let node = self.arena.free(handle);
        if node.color == Color::Black {
            self.remove_fixup(child, parent);
        }
        node.entry
    }

    // `curr` carries an extra black; `parent` is tracked separately since `curr` may be empty.
    fn remove_fixup(&mut self, mut curr: Link, mut parent: Link) {
        while curr != self.root && !self.is_red(curr) {
            let parent_handle = parent.expect("Expected non-root node to have a parent.");
            // An empty `curr` always has a non-empty sibling, so `side_of(None)` cannot match both.
            let side = self.node(parent_handle).side_of(curr);
            let other = side.opposite();
            let mut sibling = self
                .child(parent_handle, other)
                .expect("Expected doubly black node to have a sibling.");

            if self.node(sibling).is_red() {
                trace!("remove fixup: red sibling {:?}", sibling);
                self.set_color(sibling, Color::Black);
                self.set_color(parent_handle, Color::Red);
                self.rotate(parent_handle, side);
                sibling = self
                    .child(parent_handle, other)
                    .expect("Expected doubly black node to have a sibling.");
            }

            let near = self.child(sibling, side);
            let far = self.child(sibling, other);
            if !self.is_red(near) && !self.is_red(far) {
                trace!("remove fixup: black nephews, moving up to {:?}", parent_handle);
                self.set_color(sibling, Color::Red);
                curr = parent;
                parent = self.parent(parent_handle);
                continue;
            }

            if !self.is_red(far) {
                trace!("remove fixup: red near nephew under {:?}", sibling);
                if let Some(near) = near {
                    self.set_color(near, Color::Black);
                }
                self.set_color(sibling, Color::Red);
                self.rotate(sibling, other);
                sibling = self
                    .child(parent_handle, other)
                    .expect("Expected doubly black node to have a sibling.");
            }

            trace!("remove fixup: red far nephew under {:?}", sibling);
            let parent_color = self.node(parent_handle).color;
            self.set_color(sibling, parent_color);
            self.set_color(parent_handle, Color::Black);
            if let Some(far) = self.child(sibling, other) {
                self.set_color(far, Color::Black);
            }
            self.rotate(parent_handle, side);
            curr = self.root;
            break;
        }

        if let Some(curr) = curr {
            self.set_color(curr, Color::Black);
        }
    }

    fn extreme(&self, handle: Handle, side: Side) -> Handle {
        let mut curr = handle;
        while let Some(child) = self.child(curr, side) {
            curr = child;
        }
        curr
    }

    pub fn first(&self) -> Link {
        self.root.map(|root| self.extreme(root, Side::Left))
    }

    pub fn last(&self) -> Link {
        self.root.map(|root| self.extreme(root, Side::Right))
    }

    /// Returns the in-order neighbour of `handle`: the successor for `Side::Right` and the
    /// predecessor for `Side::Left`.
    pub fn next(&self, handle: Handle, side: Side) -> Link {
        if let Some(child) = self.child(handle, side) {
            return Some(self.extreme(child, side.opposite()));
        }

        let mut curr = handle;
        let mut parent = self.parent(curr);
        while let Some(parent_handle) = parent {
            if self.child(parent_handle, side) != Some(curr) {
                break;
            }
            curr = parent_handle;
            parent = self.parent(parent_handle);
        }
        parent
    }

    pub fn floor<C>(&self, key: &T, cmp: &C) -> Option<&Entry<T, U>>
    where
        C: Compare<T>,
    {
        let mut best = None;
        let mut curr = self.root;
        while let Some(handle) = curr {
            let node = self.node(handle);
            curr = match cmp.compare(key, &node.entry.key) {
                Ordering::Less => node.left,
                Ordering::Greater => {
                    best = Some(&node.entry);
                    node.right
                },
                Ordering::Equal => return Some(&node.entry),
            };
        }
        best
    }

    pub fn ceil<C>(&self, key: &T, cmp: &C) -> Option<&Entry<T, U>>
    where
        C: Compare<T>,
    {
        let mut best = None;
        let mut curr = self.root;
        while let Some(handle) = curr {
            let node = self.node(handle);
            curr = match cmp.compare(key, &node.entry.key) {
                Ordering::Greater => node.right,
                Ordering::Less => {
                    best = Some(&node.entry);
                    node.left
                },
                Ordering::Equal => return Some(&node.entry),
            };
        }
        best
    }

    fn subtree_height(&self, link: Link) -> usize {
        match link {
            None => 0,
            Some(handle) => {
                let node = self.node(handle);
                1 + cmp::max(self.subtree_height(node.left), self.subtree_height(node.right))
            },
        }
    }

    /// Number of nodes on the longest path from the root to an empty slot.
    pub fn height(&self) -> usize {
        self.subtree_height(self.root)
    }

    /// Number of black nodes on the leftmost path from the root down to, and including, the
    /// empty slot, not counting the root itself. Zero for an empty tree.
    pub fn black_height(&self) -> usize {
        let root = match self.root {
            Some(root) => root,
            None => return 0,
        };
        let mut height = 1;
        let mut curr = self.child(root, Side::Left);
        while let Some(handle) = curr {
            if !self.node(handle).is_red() {
                height += 1;
            }
            curr = self.child(handle, Side::Left);
        }
        height
    }

    // Returns the number of black nodes from `handle` down to an empty slot, counting both.
    fn check_subtree(&self, handle: Handle) -> Result<usize> {
        let node = self.node(handle);
        let mut heights = [1, 1];
        for (height, &link) in heights.iter_mut().zip(&[node.left, node.right]) {
            if let Some(child) = link {
                let child_node = self.node(child);
                if child_node.parent != Some(handle) {
                    return Err(Error::InvariantViolation(Violation::BrokenParentLink));
                }
                if node.is_red() && child_node.is_red() {
                    return Err(Error::InvariantViolation(Violation::RedChildOfRed));
                }
                *height = self.check_subtree(child)?;
            }
        }
        if heights[0] != heights[1] {
            return Err(Error::InvariantViolation(Violation::BlackHeightMismatch));
        }
        Ok(heights[0] + if node.is_red() { 0 } else { 1 })
    }

    /// Checks every red black invariant and that keys ascend under `cmp`.
    pub fn validate<C>(&self, cmp: &C) -> Result<()>
    where
        C: Compare<T>,
    {
        if let Some(root) = self.root {
            let node = self.node(root);
            if node.parent.is_some() {
                return Err(Error::InvariantViolation(Violation::BrokenParentLink));
            }
            if node.is_red() {
                return Err(Error::InvariantViolation(Violation::RedRoot));
            }
            self.check_subtree(root)?;
        }

        let mut prev: Option<&T> = None;
        let mut curr = self.first();
        while let Some(handle) = curr {
            let key = &self.node(handle).entry.key;
            if let Some(prev) = prev {
                if cmp.compare(prev, key) != Ordering::Less {
                    return Err(Error::InvalidConfiguration);
                }
            }
            prev = Some(key);
            curr = self.next(handle, Side::Right);
        }
        Ok(())
    }
}

/// A borrowing in-order iterator over a `Tree<T, U>` that follows parent links.
pub struct Iter<'a, T, U> {
    tree: &'a Tree<T, U>,
    front: Link,
    back: Link,
    remaining: usize,
}

impl<'a, T, U> Iter<'a, T, U> {
    pub fn new(tree: &'a Tree<T, U>) -> Self {
        Iter {
            tree,
            front: tree.first(),
            back: tree.last(),
            remaining: tree.len(),
        }
    }

    fn entry(&self, handle: Handle) -> (&'a T, &'a U) {
        let tree = self.tree;
        let Entry { ref key, ref value } = tree.node(handle).entry;
        (key, value)
    }
}

impl<'a, T, U> Clone for Iter<'a, T, U> {
    fn clone(&self) -> Self {
        Iter { ..*self }
    }
}

impl<'a, T, U> Iterator for Iter<'a, T, U> {
    type Item = (&'a T, &'a U);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let handle = self.front?;
        self.front = self.tree.next(handle, Side::Right);
        self.remaining -= 1;
        Some(self.entry(handle))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T, U> DoubleEndedIterator for Iter<'a, T, U> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let handle = self.back?;
        self.back = self.tree.next(handle, Side::Left);
        self.remaining -= 1;
        Some(self.entry(handle))
    }
}

impl<'a, T, U> ExactSizeIterator for Iter<'a, T, U> {}

/// An owning in-order iterator that frees each node as it is yielded.
pub struct IntoIter<T, U> {
    tree: Tree<T, U>,
    current: Link,
    stack: Vec<Handle>,
}

impl<T, U> IntoIter<T, U> {
    pub fn new(tree: Tree<T, U>) -> Self {
        IntoIter {
            current: tree.root,
            tree,
            stack: Vec::new(),
        }
    }
}

impl<T, U> Iterator for IntoIter<T, U> {
    type Item = (T, U);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(handle) = self.current {
            self.stack.push(handle);
            self.current = self.tree.child(handle, Side::Left);
        }
        self.stack.pop().map(|handle| {
            let node = self.tree.arena.free(handle);
            self.current = node.right;
            node.entry.into_pair()
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.tree.len(), Some(self.tree.len()))
    }
}

impl<T, U> ExactSizeIterator for IntoIter<T, U> {}

#[cfg(test)]
mod tests {
    use super::{IntoIter, Iter, Tree};
    use crate::compare::Natural;
    use crate::error::{Error, Violation};
    use crate::red_black_tree::node::{Color, Link, Side};
    use std::cmp::Ordering;

    fn build(keys: &[u32]) -> Tree<u32, u32> {
        let mut tree = Tree::with_capacity(keys.len());
        for &key in keys {
            assert!(tree.insert(key, key * 10, &Natural).is_none());
            assert_eq!(tree.validate(&Natural), Ok(()));
        }
        tree
    }

    fn keys(tree: &Tree<u32, u32>) -> Vec<u32> {
        Iter::new(tree).map(|(key, _)| *key).collect()
    }

    fn key_and_color(tree: &Tree<u32, u32>, link: Link) -> Option<(u32, Color)> {
        link.map(|handle| {
            let node = tree.node(handle);
            (node.entry.key, node.color)
        })
    }

    #[test]
    fn test_ascending_insert_rotates() {
        let tree = build(&[10, 20, 30]);
        let root = tree.root.unwrap();
        assert_eq!(key_and_color(&tree, Some(root)), Some((20, Color::Black)));
        assert_eq!(
            key_and_color(&tree, tree.node(root).left),
            Some((10, Color::Red)),
        );
        assert_eq!(
            key_and_color(&tree, tree.node(root).right),
            Some((30, Color::Red)),
        );
        assert_eq!(tree.height(), 2);
        assert_eq!(tree.black_height(), 1);
    }

    #[test]
    fn test_inner_insert_rotates_twice() {
        let tree = build(&[10, 30, 20]);
        let root = tree.root.unwrap();
        assert_eq!(key_and_color(&tree, Some(root)), Some((20, Color::Black)));
        assert_eq!(keys(&tree), vec![10, 20, 30]);
    }

    #[test]
    fn test_red_uncle_recolors() {
        let tree = build(&[10, 5, 15, 1]);
        let root = tree.root.unwrap();
        assert_eq!(key_and_color(&tree, Some(root)), Some((10, Color::Black)));
        let left = tree.node(root).left;
        assert_eq!(key_and_color(&tree, left), Some((5, Color::Black)));
        assert_eq!(
            key_and_color(&tree, tree.node(root).right),
            Some((15, Color::Black)),
        );
        assert_eq!(
            key_and_color(&tree, tree.node(left.unwrap()).left),
            Some((1, Color::Red)),
        );
        assert_eq!(tree.black_height(), 2);
    }

    #[test]
    fn test_remove_root_of_three() {
        let mut tree = build(&[10, 20, 30]);
        let entry = tree.remove(&20, &Natural).unwrap();
        assert_eq!((entry.key, entry.value), (20, 200));
        assert_eq!(tree.validate(&Natural), Ok(()));
        assert_eq!(tree.len(), 2);
        assert_eq!(keys(&tree), vec![10, 30]);

        let root = tree.root.unwrap();
        assert_eq!(tree.node(root).color, Color::Black);
        let child = tree.node(root).left.or(tree.node(root).right);
        assert_eq!(tree.node(child.unwrap()).color, Color::Red);
    }

    #[test]
    fn test_remove_black_leaf_on_right() {
        let mut tree = build(&[20, 10, 30, 40]);
        assert!(tree.remove(&40, &Natural).is_some());
        assert_eq!(tree.validate(&Natural), Ok(()));

        let entry = tree.remove(&30, &Natural).unwrap();
        assert_eq!(entry.key, 30);
        assert_eq!(tree.validate(&Natural), Ok(()));

        let root = tree.root.unwrap();
        assert_eq!(key_and_color(&tree, Some(root)), Some((20, Color::Black)));
        assert_eq!(
            key_and_color(&tree, tree.node(root).left),
            Some((10, Color::Red)),
        );
        assert_eq!(tree.node(root).right, None);
        assert_eq!(tree.black_height(), 1);
    }

    #[test]
    fn test_remove_missing() {
        let mut tree = build(&[1, 2, 3]);
        assert!(tree.remove(&4, &Natural).is_none());
        assert!(tree.remove(&4, &Natural).is_none());
        assert_eq!(keys(&tree), vec![1, 2, 3]);
    }

    #[test]
    fn test_remove_every_position() {
        let all: Vec<u32> = (1..=31).collect();
        for &key in &all {
            let mut tree = build(&all);
            assert_eq!(tree.remove(&key, &Natural).map(|entry| entry.key), Some(key));
            assert_eq!(tree.validate(&Natural), Ok(()));
            assert!(tree.search(&key, &Natural).is_none());
            assert_eq!(tree.len(), all.len() - 1);
        }
    }

    #[test]
    fn test_remove_all_descending() {
        let all: Vec<u32> = (0..64).collect();
        let mut tree = build(&all);
        for key in all.iter().rev() {
            assert!(tree.remove(key, &Natural).is_some());
            assert_eq!(tree.validate(&Natural), Ok(()));
        }
        assert_eq!(tree.len(), 0);
        assert_eq!(tree.root, None);
        assert_eq!(tree.black_height(), 0);
    }

    #[test]
    fn test_insert_replace() {
        let mut tree = build(&[1, 2]);
        let old = tree.insert(2, 7, &Natural).unwrap();
        assert_eq!((old.key, old.value), (2, 20));
        assert_eq!(tree.get(&2, &Natural).map(|entry| entry.value), Some(7));
        assert_eq!(tree.len(), 2);
    }

    #[test]
    fn test_rotate_preserves_order() {
        let mut tree = build(&[10, 20, 30]);
        let root = tree.root.unwrap();
        tree.rotate(root, Side::Left);

        let new_root = tree.root.unwrap();
        assert_eq!(tree.node(new_root).entry.key, 30);
        assert_eq!(tree.node(new_root).parent, None);
        assert_eq!(tree.node(new_root).left, Some(root));
        assert_eq!(tree.node(root).parent, Some(new_root));
        assert_eq!(keys(&tree), vec![10, 20, 30]);
        assert_eq!(
            tree.validate(&Natural),
            Err(Error::InvariantViolation(Violation::RedRoot)),
        );

        tree.rotate(new_root, Side::Right);
        assert_eq!(tree.root, Some(root));
        assert_eq!(tree.validate(&Natural), Ok(()));
    }

    #[test]
    fn test_validate_detects_inconsistent_comparator() {
        let tree = build(&[1, 2, 3]);
        let reverse = |left: &u32, right: &u32| right.cmp(left);
        assert_eq!(tree.validate(&reverse), Err(Error::InvalidConfiguration));
        let constant = |_: &u32, _: &u32| Ordering::Equal;
        assert_eq!(tree.validate(&constant), Err(Error::InvalidConfiguration));
    }

    #[test]
    fn test_floor_ceil() {
        let tree = build(&[1, 3, 5]);
        assert!(tree.floor(&0, &Natural).is_none());
        assert_eq!(tree.floor(&4, &Natural).map(|entry| entry.key), Some(3));
        assert_eq!(tree.ceil(&4, &Natural).map(|entry| entry.key), Some(5));
        assert!(tree.ceil(&6, &Natural).is_none());
    }

    #[test]
    fn test_iter_both_ends() {
        let tree = build(&[4, 2, 6, 1, 3, 5, 7]);
        let mut iter = Iter::new(&tree);
        assert_eq!(iter.next().map(|(key, _)| *key), Some(1));
        assert_eq!(iter.next_back().map(|(key, _)| *key), Some(7));
        let restarted = iter.clone();
        assert_eq!(iter.len(), 5);
        assert_eq!(
            iter.rev().map(|(key, _)| *key).collect::<Vec<_>>(),
            vec![6, 5, 4, 3, 2],
        );
        assert_eq!(
            restarted.map(|(key, _)| *key).collect::<Vec<_>>(),
            vec![2, 3, 4, 5, 6],
        );
    }

    #[test]
    fn test_into_iter() {
        let tree = build(&[3, 1, 2]);
        assert_eq!(
            IntoIter::new(tree).collect::<Vec<_>>(),
            vec![(1, 10), (2, 20), (3, 30)],
        );
    }
}
