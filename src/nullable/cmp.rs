//! Equality and ordering.
//!
//! An empty container equals only another empty container and orders before
//! every occupied one. Two occupied containers compare by their values. The
//! storage variants of the two sides may differ.

use core::cmp::Ordering;
use core::hash::{Hash, Hasher};

use super::{Null, Nullable};
use crate::storage::Storage;

impl<T, U, S, R> PartialEq<Nullable<U, R>> for Nullable<T, S>
where
    T: PartialEq<U>,
    S: Storage<Item = T>,
    R: Storage<Item = U>,
{
    #[inline]
    fn eq(&self, other: &Nullable<U, R>) -> bool {
        match (self.get(), other.get()) {
            (Some(a), Some(b)) => a == b,
            (None, None) => true,
            _ => false,
        }
    }
}

impl<T, S> Eq for Nullable<T, S>
where
    T: Eq,
    S: Storage<Item = T>,
{
}

impl<T, U, S, R> PartialOrd<Nullable<U, R>> for Nullable<T, S>
where
    T: PartialOrd<U>,
    S: Storage<Item = T>,
    R: Storage<Item = U>,
{
    #[inline]
    fn partial_cmp(&self, other: &Nullable<U, R>) -> Option<Ordering> {
        match (self.get(), other.get()) {
            (Some(a), Some(b)) => a.partial_cmp(b),
            (Some(_), None) => Some(Ordering::Greater),
            (None, Some(_)) => Some(Ordering::Less),
            (None, None) => Some(Ordering::Equal),
        }
    }
}

impl<T, S> Ord for Nullable<T, S>
where
    T: Ord,
    S: Storage<Item = T>,
{
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.get(), other.get()) {
            (Some(a), Some(b)) => a.cmp(b),
            (Some(_), None) => Ordering::Greater,
            (None, Some(_)) => Ordering::Less,
            (None, None) => Ordering::Equal,
        }
    }
}

impl<T, S> PartialEq<Null> for Nullable<T, S>
where
    S: Storage<Item = T>,
{
    #[inline]
    fn eq(&self, _: &Null) -> bool {
        self.is_null()
    }
}

impl<T, S> PartialEq<Nullable<T, S>> for Null
where
    S: Storage<Item = T>,
{
    #[inline]
    fn eq(&self, other: &Nullable<T, S>) -> bool {
        other.is_null()
    }
}

impl<T, S> Hash for Nullable<T, S>
where
    T: Hash,
    S: Storage<Item = T>,
{
    /// Hashes like the equivalent `Option<&T>`.
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.get().hash(state);
    }
}
