//! Storage for arbitrary `T`, destroying the held value on `reset` and drop.

use super::{private, Storage};
use crate::raw::Slot;

/// Storage variant for any `T`.
///
/// `reset` destroys the held value, and the storage's own `Drop` calls
/// `reset`. The flag is always cleared before the value is destroyed and set
/// only after a value is fully written, so a panicking destructor or
/// constructor never leaves the flag pointing at a dead slot.
///
/// For `T` without drop glue the destroy step compiles to nothing.
pub struct DropStorage<T> {
    pub(crate) slot: Slot<T>,
    pub(crate) present: bool,
}

impl<T> private::Sealed for DropStorage<T> {}

// SAFETY: `present` is set only after `slot` is written and cleared before the
// value is read out or destroyed.
unsafe impl<T> Storage for DropStorage<T> {
    type Item = T;

    const IS_TRIVIAL: bool = false;

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
        // SAFETY: caller guarantees the slot is empty; `value` is already
        // fully constructed, so the write itself cannot fail.
        unsafe { self.slot.write(value) }
    }

    #[inline]
    fn reset(&mut self) {
        if self.present {
            self.present = false;
            trace_event!(ty = core::any::type_name::<T>(), "reset: destroying held value");
            // SAFETY: was present and the flag is already cleared, so the
            // value is dropped exactly once even if its destructor panics.
            unsafe { self.slot.drop_in_place() }
        }
    }

    #[inline]
    fn take(&mut self) -> Option<T> {
        if !self.present {
            return None;
        }
        self.present = false;
        // SAFETY: was present; ownership moves to the caller.
        Some(unsafe { self.slot.read() })
    }
}

impl<T> Drop for DropStorage<T> {
    #[inline]
    fn drop(&mut self) {
        self.reset();
    }
}

impl<T> Default for DropStorage<T> {
    fn default() -> Self {
        Self::empty()
    }
}
