//! Index-addressed storage for tree nodes.

use std::mem;
use std::ops::{Index, IndexMut};
use std::vec::Vec;

/// An opaque index of an object allocated in an `Arena<T>`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Handle(usize);

enum Slot<T> {
    Occupied(T),
    Vacant(Option<usize>),
}

/// A growable arena of objects of a single type addressed by `Handle`.
///
/// Freed slots are threaded onto an intrusive free list and reused by later allocations, so
/// handles stay small integers and the backing `Vec` only grows when every slot is occupied.
/// Handles are never exposed outside the crate; the tree is the only owner of the arena.
pub struct Arena<T> {
    slots: Vec<Slot<T>>,
    head: Option<usize>,
    len: usize,
}

impl<T> Arena<T> {
    pub fn with_capacity(capacity: usize) -> Self {
        Arena {
            slots: Vec::with_capacity(capacity),
            head: None,
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    pub fn reserve(&mut self, additional: usize) {
        let vacant = self.slots.len() - self.len;
        if additional > vacant {
            self.slots.reserve(additional - vacant);
        }
    }

    pub fn allocate(&mut self, value: T) -> Handle {
        self.len += 1;
        match self.head {
            None => {
                self.slots.push(Slot::Occupied(value));
                Handle(self.slots.len() - 1)
            },
            Some(index) => {
                match mem::replace(&mut self.slots[index], Slot::Occupied(value)) {
                    Slot::Vacant(next) => self.head = next,
                    Slot::Occupied(_) => panic!("Error: free list points at an occupied slot."),
                }
                Handle(index)
            },
        }
    }

    /// Deallocates the object behind `handle` and returns it.
    ///
    /// # Panics
    ///
    /// Panics if `handle` is out of bounds or refers to a vacant slot.
    pub fn free(&mut self, handle: Handle) -> T {
        let Handle(index) = handle;
        match self.slots.get(index) {
            Some(Slot::Occupied(_)) => {},
            Some(Slot::Vacant(_)) => panic!("Error: attempting to free vacant slot."),
            None => panic!("Error: attempting to free invalid slot."),
        }
        match mem::replace(&mut self.slots[index], Slot::Vacant(self.head)) {
            Slot::Occupied(value) => {
                self.head = Some(index);
                self.len -= 1;
                value
            },
            Slot::Vacant(_) => unreachable!(),
        }
    }

    pub fn get(&self, handle: Handle) -> Option<&T> {
        match self.slots.get(handle.0) {
            Some(Slot::Occupied(value)) => Some(value),
            _ => None,
        }
    }

    pub fn get_mut(&mut self, handle: Handle) -> Option<&mut T> {
        match self.slots.get_mut(handle.0) {
            Some(Slot::Occupied(value)) => Some(value),
            _ => None,
        }
    }

    /// Returns mutable references to two distinct occupied slots at once.
    ///
    /// # Panics
    ///
    /// Panics if the handles are equal or either slot is not occupied.
    pub fn pair_mut(&mut self, first: Handle, second: Handle) -> (&mut T, &mut T) {
        assert_ne!(first, second, "Error: expected two distinct handles.");
        let (low, high) = if first.0 < second.0 {
            (first.0, second.0)
        } else {
            (second.0, first.0)
        };
        let (head, tail) = self.slots.split_at_mut(high);
        let low_value = match head[low] {
            Slot::Occupied(ref mut value) => value,
            Slot::Vacant(_) => panic!("Error: handle refers to a vacant slot."),
        };
        let high_value = match tail[0] {
            Slot::Occupied(ref mut value) => value,
            Slot::Vacant(_) => panic!("Error: handle refers to a vacant slot."),
        };
        if first.0 < second.0 {
            (low_value, high_value)
        } else {
            (high_value, low_value)
        }
    }

    pub fn clear(&mut self) {
        self.slots.clear();
        self.head = None;
        self.len = 0;
    }
}

impl<T> Index<Handle> for Arena<T> {
    type Output = T;

    fn index(&self, handle: Handle) -> &Self::Output {
        self.get(handle).expect("Error: handle out of bounds.")
    }
}

impl<T> IndexMut<Handle> for Arena<T> {
    fn index_mut(&mut self, handle: Handle) -> &mut Self::Output {
        self.get_mut(handle).expect("Error: handle out of bounds.")
    }
}

#[cfg(test)]
mod tests {
    use super::{Arena, Handle};

    #[test]
    #[should_panic]
    fn test_free_invalid_slot() {
        let mut arena: Arena<u32> = Arena::with_capacity(0);
        arena.free(Handle(0));
    }

    #[test]
    #[should_panic]
    fn test_free_vacant_slot() {
        let mut arena = Arena::with_capacity(0);
        let handle = arena.allocate(0);
        arena.free(handle);
        arena.free(handle);
    }

    #[test]
    fn test_allocate() {
        let mut arena = Arena::with_capacity(0);
        assert_eq!(arena.allocate(0), Handle(0));
        assert_eq!(arena.allocate(0), Handle(1));
        assert_eq!(arena.allocate(0), Handle(2));
        assert_eq!(arena.len(), 3);
    }

    #[test]
    fn test_free_reuses_slots() {
        let mut arena = Arena::with_capacity(0);
        let first = arena.allocate(1);
        let second = arena.allocate(2);
        assert_eq!(arena.free(first), 1);
        assert_eq!(arena.free(second), 2);
        assert_eq!(arena.len(), 0);

        assert_eq!(arena.allocate(3), second);
        assert_eq!(arena.allocate(4), first);
        assert_eq!(arena.allocate(5), Handle(2));
    }

    #[test]
    fn test_get() {
        let mut arena = Arena::with_capacity(0);
        let handle = arena.allocate(0);
        assert_eq!(arena.get(handle), Some(&0));
        assert_eq!(arena.get(Handle(1)), None);

        arena.free(handle);
        assert_eq!(arena.get(handle), None);
    }

    #[test]
    fn test_get_mut() {
        let mut arena = Arena::with_capacity(0);
        let handle = arena.allocate(0);
        *arena.get_mut(handle).unwrap() = 1;
        assert_eq!(arena[handle], 1);
    }

    #[test]
    fn test_pair_mut() {
        let mut arena = Arena::with_capacity(0);
        let first = arena.allocate(1);
        let second = arena.allocate(2);
        {
            let (a, b) = arena.pair_mut(second, first);
            assert_eq!((*a, *b), (2, 1));
            *a = 20;
            *b = 10;
        }
        assert_eq!(arena[first], 10);
        assert_eq!(arena[second], 20);
    }

    #[test]
    #[should_panic]
    fn test_pair_mut_same_handle() {
        let mut arena = Arena::with_capacity(0);
        let handle = arena.allocate(0);
        arena.pair_mut(handle, handle);
    }

    #[test]
    fn test_reserve_counts_vacant_slots() {
        let mut arena = Arena::with_capacity(0);
        for i in 0..4 {
            arena.allocate(i);
        }
        arena.free(Handle(1));
        arena.free(Handle(2));
        arena.reserve(2);
        assert!(arena.capacity() >= 4);
        arena.reserve(10);
        assert!(arena.capacity() >= 12);
    }

    #[test]
    fn test_clear() {
        let mut arena = Arena::with_capacity(0);
        arena.allocate(0);
        arena.allocate(1);
        arena.clear();
        assert_eq!(arena.len(), 0);
        assert_eq!(arena.allocate(2), Handle(0));
    }
}
