//! Storage for `Copy` types: no destructor, bitwise everything.

use super::{private, Storage};
use crate::raw::Slot;

/// Storage variant for `T: Copy`.
///
/// Has no `Drop` impl; discarding the value is just clearing the flag. The
/// type is itself `Copy` (see the `transfer` layer), so copying a container
/// is a bitwise copy of flag and slot.
pub struct TrivialStorage<T: Copy> {
    pub(crate) slot: Slot<T>,
    pub(crate) present: bool,
}

impl<T: Copy> private::Sealed for TrivialStorage<T> {}

// SAFETY: every path that sets `present` has just written `slot`, and
// `present` is cleared before the slot is considered dead.
unsafe impl<T: Copy> Storage for TrivialStorage<T> {
    type Item = T;

    const IS_TRIVIAL: bool = true;

    #[inline]
    fn empty() -> Self {
        Self {
            slot: Slot::uninit(),
            present: false,
        }
    }

    #[inline]
    fn occupied(value: T) -> Self {
        Self {
            slot: Slot::new(value),
            present: true,
        }
    }

    #[inline(always)]
    fn is_present(&self) -> bool {
        self.present
    }

    #[inline(always)]
    unsafe fn get_unchecked(&self) -> &T {
        debug_assert!(self.present);
        // SAFETY: caller guarantees presence.
        unsafe { self.slot.assume_init_ref() }
    }

    #[inline(always)]
    unsafe fn get_unchecked_mut(&mut self) -> &mut T {
        debug_assert!(self.present);
        // SAFETY: caller guarantees presence.
        unsafe { self.slot.assume_init_mut() }
    }

    #[inline]
    unsafe fn fill_unchecked(&mut self, value: T) -> &mut T {
        debug_assert!(!self.present);
        self.present = true;
        // SAFETY: caller guarantees the slot is empty. Writing a `Copy` value
        // cannot panic, so setting the flag first is unobservable.
        unsafe { self.slot.write(value) }
    }

    #[inline(always)]
    fn reset(&mut self) {
        self.present = false;
    }

    #[inline]
    fn take(&mut self) -> Option<T> {
        if !self.present {
            return None;
        }
        self.present = false;
        // SAFETY: was present; `T: Copy` so reading leaves nothing to drop.
        Some(unsafe { self.slot.read() })
    }
}

impl<T: Copy> Default for TrivialStorage<T> {
    fn default() -> Self {
        Self::empty()
    }
}
