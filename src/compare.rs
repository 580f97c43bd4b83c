//! Caller-supplied total orders over keys.

use std::cmp::Ordering;

/// A total order over values of type `T`.
///
/// Implementations must be consistent: antisymmetric, transitive, and total. The trees in this
/// crate never check this up front. An inconsistent comparator leaves the structure memory-safe
/// but yields unspecified ordering, which `validate` reports as `Error::InvalidConfiguration`.
///
/// Every closure of the shape `Fn(&T, &T) -> Ordering` is a comparator.
///
/// # Examples
///
/// ```
/// use red_black_collections::compare::{Compare, Natural};
/// use std::cmp::Ordering;
///
/// assert_eq!(Natural.compare(&1, &2), Ordering::Less);
///
/// let reverse = |left: &u32, right: &u32| right.cmp(left);
/// assert_eq!(reverse.compare(&1, &2), Ordering::Greater);
/// ```
pub trait Compare<T: ?Sized> {
    fn compare(&self, left: &T, right: &T) -> Ordering;
}

/// The order given by the key type's `Ord` implementation.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Natural;

impl<T> Compare<T> for Natural
where
    T: Ord + ?Sized,
{
    fn compare(&self, left: &T, right: &T) -> Ordering {
        left.cmp(right)
    }
}

impl<T, F> Compare<T> for F
where
    T: ?Sized,
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, left: &T, right: &T) -> Ordering {
        self(left, right)
    }
}
