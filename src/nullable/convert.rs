//! Conversions and formatting.

use core::fmt;

use super::Nullable;
use crate::storage::Storage;

impl<T, S> From<T> for Nullable<T, S>
where
    S: Storage<Item = T>,
{
    #[inline]
    fn from(value: T) -> Self {
        Self::from_value(value)
    }
}

impl<T, S> From<Option<T>> for Nullable<T, S>
where
    S: Storage<Item = T>,
{
    #[inline]
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::from_value(value),
            None => Self::new(),
        }
    }
}

impl<T, S> From<Nullable<T, S>> for Option<T>
where
    S: Storage<Item = T>,
{
    #[inline]
    fn from(value: Nullable<T, S>) -> Self {
        value.into_option()
    }
}

impl<T, S> fmt::Debug for Nullable<T, S>
where
    T: fmt::Debug,
    S: Storage<Item = T>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.get() {
            Some(value) => f.debug_tuple("Nullable").field(value).finish(),
            None => f.write_str("Null"),
        }
    }
}
