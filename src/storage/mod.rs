//! Storage and destruction layer.
//!
//! A storage owns the presence flag and one [`Slot`](crate::raw::Slot). It
//! knows how to build itself empty or occupied and how to destroy its value.
//! Two variants exist, picked statically by a property of `T`:
//!
//! - [`TrivialStorage`] for `T: Copy`: no `Drop` impl, `reset` only clears the flag.
//! - [`DropStorage`] for any `T`: `Drop` calls `reset`, which destroys the value.
//!
//! `Copy` is the only axis. A `Copy` type can neither implement `Drop` nor
//! contain fields with drop glue, so trivial destruction follows from trivial
//! copying and the two properties cannot disagree.
//!
//! [`SelectStorage`] is the static factory that maps a `T` to its variant.

mod drop;
mod select;
mod trivial;

#[cfg(test)]
mod tests;

pub use drop::DropStorage;
pub use select::{SelectStorage, Selected};
pub use trivial::TrivialStorage;

pub(crate) mod private {
    /// Restricts [`Storage`](super::Storage) to the variants defined in this crate.
    pub trait Sealed {}
}

/// Presence flag plus inline slot for one [`Item`](Storage::Item).
///
/// # Safety
/// Implementors guarantee that the slot holds a live `Item` exactly when
/// [`is_present`](Storage::is_present) returns `true`, and that no operation
/// leaves the flag set over a slot whose value was never finished or has
/// already been destroyed.
pub unsafe trait Storage: private::Sealed + Sized {
    /// The contained value type.
    type Item;

    /// `true` for the variant whose copies are bitwise and whose reset runs no code.
    const IS_TRIVIAL: bool;

    /// Creates an empty storage. The slot is left uninitialized.
    fn empty() -> Self;

    /// Creates an occupied storage holding `value`.
    fn occupied(value: Self::Item) -> Self;

    /// Creates an occupied storage from the value produced by `init`.
    ///
    /// `init` runs before anything is marked present; if it panics no storage
    /// is produced at all.
    #[inline]
    fn occupied_with<F>(init: F) -> Self
    where
        F: FnOnce() -> Self::Item,
    {
        Self::occupied(init())
    }

    /// Returns `true` if a value is held.
    fn is_present(&self) -> bool;

    /// Returns the held value without checking presence.
    ///
    /// # Safety
    /// [`is_present`](Storage::is_present) must be `true`.
    unsafe fn get_unchecked(&self) -> &Self::Item;

    /// Returns the held value mutably without checking presence.
    ///
    /// # Safety
    /// [`is_present`](Storage::is_present) must be `true`.
    unsafe fn get_unchecked_mut(&mut self) -> &mut Self::Item;

    /// Constructs `value` in the empty slot and sets the flag.
    ///
    /// # Safety
    /// [`is_present`](Storage::is_present) must be `false`.
    unsafe fn fill_unchecked(&mut self, value: Self::Item) -> &mut Self::Item;

    /// Destroys the held value, if any, and clears the flag. Idempotent.
    fn reset(&mut self);

    /// Moves the held value out, leaving the storage empty.
    fn take(&mut self) -> Option<Self::Item>;

    /// Returns the held value, or `None` when empty.
    #[inline]
    fn get(&self) -> Option<&Self::Item> {
        if self.is_present() {
            // SAFETY: presence checked.
            Some(unsafe { self.get_unchecked() })
        } else {
            None
        }
    }

    /// Returns the held value mutably, or `None` when empty.
    #[inline]
    fn get_mut(&mut self) -> Option<&mut Self::Item> {
        if self.is_present() {
            // SAFETY: presence checked.
            Some(unsafe { self.get_unchecked_mut() })
        } else {
            None
        }
    }

    /// Replaces any held value with the one produced by `init`.
    ///
    /// The old value is destroyed first. If `init` panics the storage stays
    /// empty.
    #[inline]
    fn emplace_with<F>(&mut self, init: F) -> &mut Self::Item
    where
        F: FnOnce() -> Self::Item,
    {
        self.reset();
        let value = init();
        // SAFETY: `reset` left the storage empty and `init` cannot reach it.
        unsafe { self.fill_unchecked(value) }
    }
}
