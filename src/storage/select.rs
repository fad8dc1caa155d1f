//! Static storage selection.
//!
//! Stable Rust cannot branch on "is `T: Copy`" inside one generic impl, so the
//! choice is made by a trait whose associated type names the variant. The
//! mapping is resolved at monomorphization; nothing is decided at runtime.

use super::{DropStorage, Storage, TrivialStorage};
use std::collections::{BTreeMap, VecDeque};
use std::rc::Rc;
use std::sync::Arc;

/// Maps a type to the storage variant a [`Nullable`](crate::Nullable) should use for it.
///
/// Implemented here for the scalar, pointer and owning types of `core` and
/// `std`, and for arrays and tuples (up to four fields) of `Copy` elements.
/// Arrays and tuples with non-`Copy` elements have no selection; use
/// [`Nullable<T>`](crate::Nullable) with its default storage for those. Use
/// [`trivial_storage!`](crate::trivial_storage) or
/// [`drop_storage!`](crate::drop_storage) to opt in your own types.
pub trait SelectStorage: Sized {
    /// The storage variant for `Self`.
    type Storage: Storage<Item = Self>;
}

/// The storage variant selected for `T`.
pub type Selected<T> = <T as SelectStorage>::Storage;

/// Selects [`TrivialStorage`](crate::storage::TrivialStorage) for each listed `Copy` type.
///
/// ```rust
/// use nullable::{trivial_storage, AutoNullable};
///
/// #[derive(Clone, Copy, PartialEq, Debug)]
/// struct Meters(f32);
///
/// trivial_storage!(Meters);
///
/// let a: AutoNullable<Meters> = AutoNullable::from_value(Meters(1.5));
/// let b = a; // bitwise copy
/// assert_eq!(a, b);
/// ```
#[macro_export]
macro_rules! trivial_storage {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::storage::SelectStorage for $ty {
                type Storage = $crate::storage::TrivialStorage<$ty>;
            }
        )+
    };
}

/// Selects [`DropStorage`](crate::storage::DropStorage) for each listed type.
///
/// ```rust
/// use nullable::{drop_storage, AutoNullable};
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Name(String);
///
/// drop_storage!(Name);
///
/// let mut a: AutoNullable<Name> = AutoNullable::new();
/// a.emplace_with(|| Name("ferris".into()));
/// assert_eq!(a.get(), Some(&Name("ferris".into())));
/// ```
#[macro_export]
macro_rules! drop_storage {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::storage::SelectStorage for $ty {
                type Storage = $crate::storage::DropStorage<$ty>;
            }
        )+
    };
}

trivial_storage!(
    (),
    bool,
    char,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    f32,
    f64,
    core::cmp::Ordering,
    core::time::Duration,
);

drop_storage!(String);

impl<'a, T: ?Sized> SelectStorage for &'a T {
    type Storage = TrivialStorage<&'a T>;
}

impl<T: ?Sized> SelectStorage for *const T {
    type Storage = TrivialStorage<*const T>;
}

impl<T: ?Sized> SelectStorage for *mut T {
    type Storage = TrivialStorage<*mut T>;
}

impl<'a, T: ?Sized> SelectStorage for &'a mut T {
    type Storage = DropStorage<&'a mut T>;
}

impl<T> SelectStorage for Vec<T> {
    type Storage = DropStorage<Vec<T>>;
}

impl<T> SelectStorage for VecDeque<T> {
    type Storage = DropStorage<VecDeque<T>>;
}

impl<K, V> SelectStorage for BTreeMap<K, V> {
    type Storage = DropStorage<BTreeMap<K, V>>;
}

impl<T: ?Sized> SelectStorage for Box<T> {
    type Storage = DropStorage<Box<T>>;
}

impl<T: ?Sized> SelectStorage for Rc<T> {
    type Storage = DropStorage<Rc<T>>;
}

impl<T: ?Sized> SelectStorage for Arc<T> {
    type Storage = DropStorage<Arc<T>>;
}

impl<T: Copy, const N: usize> SelectStorage for [T; N] {
    type Storage = TrivialStorage<[T; N]>;
}

macro_rules! trivial_tuples {
    ($(($($name:ident),+)),+ $(,)?) => {
        $(
            impl<$($name: Copy),+> SelectStorage for ($($name,)+) {
                type Storage = TrivialStorage<($($name,)+)>;
            }
        )+
    };
}

trivial_tuples!((A), (A, B), (A, B, C), (A, B, C, D));
