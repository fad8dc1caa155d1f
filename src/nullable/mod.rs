//! `Nullable`: an inline value that may be absent.
//!
//! The container itself holds no logic about how its value is stored; every
//! storage concern is delegated to the `S` parameter (see [`crate::storage`]),
//! and every assignment concern to the [`Transfer`](crate::transfer::Transfer)
//! layer. What remains here is the user-facing surface.

mod cmp;
mod convert;


use core::marker::PhantomData;
use core::ops::{Deref, DerefMut};

use crate::error::EmptyError;
use crate::storage::{DropStorage, Selected, Storage, TrivialStorage};
use crate::transfer::Transfer;

/// The "no value" sentinel.
///
/// Compares equal to every empty [`Nullable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Null;

/// A value of type `T` that may or may not be present, stored inline.
///
/// `S` chooses how the value is stored. The default, [`DropStorage`], works
/// for every `T`. [`TrivialStorage`] is available for `T: Copy` and makes the
/// container itself `Copy`. [`AutoNullable`] picks the variant through
/// [`SelectStorage`](crate::storage::SelectStorage).
///
/// The trivial path is opt-in. A plain `Nullable<i32>` uses the default
/// storage, so it is only `Clone` and carries (empty) drop glue; write
/// [`CopyNullable<i32>`](CopyNullable) or [`AutoNullable<i32>`](AutoNullable)
/// to get a `Copy` container.
///
/// # Example
///
/// ```rust
/// use nullable::Nullable;
///
/// let mut name: Nullable<String> = Nullable::from_value("hello".to_string());
/// assert!(name.has_value());
///
/// name.reset();
/// assert!(!name.has_value());
///
/// name.emplace("world");
/// assert_eq!(*name, "world");
/// ```
pub struct Nullable<T, S = DropStorage<T>>
where
    S: Storage<Item = T>,
{
    storage: S,
    marker: PhantomData<T>,
}

/// A [`Nullable`] over trivial storage; `Copy` whenever `T` is.
pub type CopyNullable<T> = Nullable<T, TrivialStorage<T>>;

/// A [`Nullable`] whose storage is picked by [`SelectStorage`](crate::storage::SelectStorage).
pub type AutoNullable<T> = Nullable<T, Selected<T>>;

impl<T, S> Nullable<T, S>
where
    S: Storage<Item = T>,
{
    /// `true` when `S` is the trivial variant: copies are bitwise and
    /// nothing runs on reset or drop.
    pub const IS_TRIVIAL: bool = S::IS_TRIVIAL;

    #[inline(always)]
    const fn from_storage(storage: S) -> Self {
        Self {
            storage,
            marker: PhantomData,
        }
    }

    /// Creates an empty container.
    #[inline]
    pub fn new() -> Self {
        Self::from_storage(S::empty())
    }

    /// Creates a container holding `value`.
    #[inline]
    pub fn from_value(value: T) -> Self {
        Self::from_storage(S::occupied(value))
    }

    /// Creates a container holding the value returned by `init`.
    ///
    /// If `init` panics, no container is created.
    #[inline]
    pub fn with<F>(init: F) -> Self
    where
        F: FnOnce() -> T,
    {
        Self::from_storage(S::occupied_with(init))
    }

    /// Creates a container holding `T::from(args)`.
    ///
    /// Multi-argument constructors are reached through a tuple `From` impl.
    ///
    /// ```rust
    /// use nullable::Nullable;
    ///
    /// struct Point { x: i32, y: i32 }
    ///
    /// impl From<(i32, i32)> for Point {
    ///     fn from((x, y): (i32, i32)) -> Self {
    ///         Point { x, y }
    ///     }
    /// }
    ///
    /// let p: Nullable<Point> = Nullable::in_place((3, 4));
    /// assert_eq!(p.x + p.y, 7);
    /// ```
    #[inline]
    pub fn in_place<A>(args: A) -> Self
    where
        T: From<A>,
    {
        Self::with(|| T::from(args))
    }

    /// Returns `true` if a value is held.
    #[inline(always)]
    pub fn has_value(&self) -> bool {
        self.storage.is_present()
    }

    /// Returns `true` if no value is held.
    #[inline(always)]
    pub fn is_null(&self) -> bool {
        !self.storage.is_present()
    }

    /// Returns the held value, or `None` when empty.
    #[inline]
    pub fn get(&self) -> Option<&T> {
        self.storage.get()
    }

    /// Returns the held value mutably, or `None` when empty.
    #[inline]
    pub fn get_mut(&mut self) -> Option<&mut T> {
        self.storage.get_mut()
    }

    /// Returns the held value.
    ///
    /// # Errors
    /// Returns [`EmptyError`] if the container is empty.
    #[inline]
    pub fn value(&self) -> Result<&T, EmptyError> {
        self.storage.get().ok_or(EmptyError)
    }

    /// Returns the held value mutably.
    ///
    /// # Errors
    /// Returns [`EmptyError`] if the container is empty.
    #[inline]
    pub fn value_mut(&mut self) -> Result<&mut T, EmptyError> {
        self.storage.get_mut().ok_or(EmptyError)
    }

    /// Returns the held value without checking presence.
    ///
    /// # Safety
    /// The container must hold a value ([`has_value`](Self::has_value)).
    #[inline(always)]
    pub unsafe fn get_unchecked(&self) -> &T {
        // SAFETY: forwarded to the caller.
        unsafe { self.storage.get_unchecked() }
    }

    /// Returns the held value mutably without checking presence.
    ///
    /// # Safety
    /// The container must hold a value ([`has_value`](Self::has_value)).
    #[inline(always)]
    pub unsafe fn get_unchecked_mut(&mut self) -> &mut T {
        // SAFETY: forwarded to the caller.
        unsafe { self.storage.get_unchecked_mut() }
    }

    /// Destroys the held value, if any. Calling it on an empty container does nothing.
    #[inline]
    pub fn reset(&mut self) {
        self.storage.reset();
    }

    /// Assigns the "no value" state. Same as [`reset`](Self::reset).
    #[inline]
    pub fn assign_null(&mut self) {
        self.storage.reset();
    }

    /// Destroys any held value, then holds `T::from(args)`.
    ///
    /// If the conversion panics the container is left empty.
    #[inline]
    pub fn emplace<A>(&mut self, args: A) -> &mut T
    where
        T: From<A>,
    {
        self.emplace_with(|| T::from(args))
    }

    /// Destroys any held value, then holds the value returned by `init`.
    ///
    /// If `init` panics the container is left empty.
    #[inline]
    pub fn emplace_with<F>(&mut self, init: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        trace_event!(
            ty = core::any::type_name::<T>(),
            replacing = self.storage.is_present(),
            "emplace"
        );
        self.storage.emplace_with(init)
    }

    /// Destroys any held value, then holds `value`.
    #[inline]
    pub fn insert(&mut self, value: T) -> &mut T {
        self.storage.emplace_with(|| value)
    }

    /// Moves the held value out, leaving the container empty.
    #[inline]
    pub fn take(&mut self) -> Option<T> {
        self.storage.take()
    }

    /// Holds `value`, returning the previously held value if there was one.
    #[inline]
    pub fn replace(&mut self, value: T) -> Option<T> {
        let old = self.storage.take();
        // SAFETY: `take` left the storage empty.
        unsafe { self.storage.fill_unchecked(value) };
        old
    }

    /// Converts into an `Option`, moving the held value out.
    #[inline]
    pub fn into_option(mut self) -> Option<T> {
        self.storage.take()
    }

    /// Move-assigns `source` into `self`.
    ///
    /// When both hold a value, the new value is assigned over the old one in
    /// place. See [`crate::transfer`] for the full table.
    #[inline]
    pub fn assign(&mut self, source: Self)
    where
        S: Transfer,
    {
        self.storage.move_assign(source.storage);
    }
}

impl<T, S> Default for Nullable<T, S>
where
    S: Storage<Item = T>,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T, S> Clone for Nullable<T, S>
where
    S: Storage<Item = T> + Clone,
{
    /// Clones the held value once if present; an empty container clones nothing.
    #[inline]
    fn clone(&self) -> Self {
        Self::from_storage(self.storage.clone())
    }

    /// Copy-assigns `source`, reusing the held value when both are present.
    #[inline]
    fn clone_from(&mut self, source: &Self) {
        self.storage.clone_from(&source.storage);
    }
}

impl<T, S> Copy for Nullable<T, S> where S: Storage<Item = T> + Copy {}

#[cold]
#[inline(never)]
#[track_caller]
fn empty_access() -> ! {
    error_event!("dereferenced an empty nullable value");
    panic!("{}", EmptyError)
}

impl<T, S> Deref for Nullable<T, S>
where
    S: Storage<Item = T>,
{
    type Target = T;

    /// # Panics
    /// Panics if the container is empty.
    #[inline]
    #[track_caller]
    fn deref(&self) -> &T {
        match self.storage.get() {
            Some(value) => value,
            None => empty_access(),
        }
    }
}

impl<T, S> DerefMut for Nullable<T, S>
where
    S: Storage<Item = T>,
{
    /// # Panics
    /// Panics if the container is empty.
    #[inline]
    #[track_caller]
    fn deref_mut(&mut self) -> &mut T {
        match self.storage.get_mut() {
            Some(value) => value,
            None => empty_access(),
        }
    }
}
