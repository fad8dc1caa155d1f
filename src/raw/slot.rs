//! `Slot<T>`: an arena of exactly one uninitialized `T`.
//!
//! These helpers provide a single place to audit:
//! - writes (`MaybeUninit::write`)
//! - reads (`assume_init_read`)
//! - drops (`assume_init_drop`)
//! - conversion to references (`assume_init_ref` / `assume_init_mut`)
//!
//! ## Core invariant
//! A slot never tracks its own initialization state. The owning storage keeps a
//! presence flag and only calls the `assume_init_*` family while that flag is set.

use core::mem::MaybeUninit;

/// Inline storage sized and aligned for one `T`.
#[repr(transparent)]
pub(crate) struct Slot<T> {
    value: MaybeUninit<T>,
}

impl<T> Slot<T> {
    /// Creates a slot that holds no live value.
    #[inline(always)]
    pub(crate) const fn uninit() -> Self {
        Self {
            value: MaybeUninit::uninit(),
        }
    }

    /// Creates a slot that holds `value`.
    #[inline(always)]
    pub(crate) const fn new(value: T) -> Self {
        Self {
            value: MaybeUninit::new(value),
        }
    }

    /// Constructs `value` in the slot and returns a reference to it.
    ///
    /// # Safety
    /// - The slot must not hold a live value; otherwise that value is leaked
    ///   and the owner's presence flag no longer describes the slot.
    #[inline(always)]
    pub(crate) unsafe fn write(&mut self, value: T) -> &mut T {
        self.value.write(value)
    }

    /// Bitwise-moves the live value out of the slot.
    ///
    /// # Safety
    /// - The slot must hold a live value.
    /// - The caller must treat the slot as empty afterwards, or the value is
    ///   dropped twice.
    #[inline(always)]
    pub(crate) unsafe fn read(&self) -> T {
        // SAFETY: caller asserts the slot is initialized and gives up ownership.
        unsafe { self.value.assume_init_read() }
    }

    /// Drops the live value in place.
    ///
    /// # Safety
    /// - The slot must hold a live value.
    /// - Must not be called more than once for the same logical value.
    #[inline(always)]
    pub(crate) unsafe fn drop_in_place(&mut self) {
        // SAFETY: caller asserts initialization and drop uniqueness.
        unsafe { self.value.assume_init_drop() }
    }

    /// Interprets the slot as `&T`.
    ///
    /// # Safety
    /// - The slot must hold a live value.
    #[inline(always)]
    pub(crate) unsafe fn assume_init_ref(&self) -> &T {
        // SAFETY: caller asserts the slot is initialized.
        unsafe { self.value.assume_init_ref() }
    }

    /// Interprets the slot as `&mut T`.
    ///
    /// # Safety
    /// - The slot must hold a live value.
    #[inline(always)]
    pub(crate) unsafe fn assume_init_mut(&mut self) -> &mut T {
        // SAFETY: caller asserts the slot is initialized; `&mut self` is exclusive.
        unsafe { self.value.assume_init_mut() }
    }
}

impl<T: Copy> Clone for Slot<T> {
    #[inline(always)]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Copy> Copy for Slot<T> {}
