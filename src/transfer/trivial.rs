//! Bitwise copy/move for `TrivialStorage`.

use super::Transfer;
use crate::storage::TrivialStorage;

impl<T: Copy> Clone for TrivialStorage<T> {
    /// Copies flag and slot bytes. Never calls `T::clone`.
    #[inline(always)]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Copy> Copy for TrivialStorage<T> {}

impl<T: Copy> Transfer for TrivialStorage<T> {
    #[inline(always)]
    fn move_assign(&mut self, source: Self) {
        *self = source;
    }
}
