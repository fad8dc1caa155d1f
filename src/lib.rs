//! # `nullable` - Inline Nullable Values
//!
//! A value of type `T` that may or may not be present, stored inline: no heap
//! allocation, no `T: Default` requirement, and no overhead beyond a presence
//! flag for `Copy` types.
//!
//! ## Safety Guarantees
//!
//! - **Centralized unsafe**: every `MaybeUninit` operation lives in one
//!   audited module (`raw::slot`); higher layers only call its small surface.
//! - **Presence invariant**: a slot holds a live `T` exactly when its flag is
//!   set. The flag is cleared before a value is destroyed and set after a value
//!   is fully constructed, so a panicking constructor, `Clone` or `Drop` of `T`
//!   can never leave the flag pointing at a dead slot.
//! - **Checked by default**: dereferencing an empty container panics with
//!   [`EmptyError`]'s message; [`Nullable::value`] returns it; the unchecked
//!   path is an explicit `unsafe fn`.
//!
//! ## Architecture
//!
//! The container is layered by capability. Each layer is chosen at compile
//! time by a property of `T`, never by a runtime flag:
//!
//! 1. **Raw slot** (`raw`): an arena of exactly one uninitialized `T`.
//! 2. **Storage + destruction** ([`storage`]): presence flag, construction and
//!    `reset`. [`TrivialStorage`] for `T: Copy` runs no code on reset or drop;
//!    [`DropStorage`] destroys the value.
//! 3. **Copy/move** ([`transfer`]): `TrivialStorage` is `Copy`, so every copy
//!    is bitwise. `DropStorage` choreographs construct, destroy and
//!    assign-through according to which operands hold a value.
//! 4. **Container** ([`Nullable`]): the public API, delegating every storage
//!    concern to the layer below.
//!
//! [`SelectStorage`](storage::SelectStorage) maps a type to its variant, and
//! [`AutoNullable<T>`] uses that mapping.
//!
//! ## Example
//!
//! ```rust
//! use nullable::{AutoNullable, Nullable};
//!
//! let a: AutoNullable<i32> = AutoNullable::from_value(5);
//! let mut b: AutoNullable<i32> = AutoNullable::new();
//! b = a; // bitwise copy, `a` stays usable
//! assert_eq!(*b, 5);
//! assert_eq!(*a, 5);
//!
//! let mut s: Nullable<String> = Nullable::in_place("hello");
//! s.reset();
//! assert!(!s.has_value());
//! s.emplace("world");
//! assert_eq!(*s, "world");
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

#[macro_use]
mod log;

mod error;
mod nullable;
mod raw;
pub mod storage;
#[cfg(feature = "proptest")]
pub mod strategy;
pub mod transfer;

pub use error::EmptyError;
pub use nullable::{AutoNullable, CopyNullable, Null, Nullable};
pub use storage::{DropStorage, Storage, TrivialStorage};

// Compile-time assertions for memory layout.
const _: () = {
    use core::mem;

    // The container adds nothing over its storage.
    assert!(mem::size_of::<Nullable<u64>>() == mem::size_of::<DropStorage<u64>>());
    assert!(mem::size_of::<CopyNullable<u64>>() == mem::size_of::<TrivialStorage<u64>>());

    // One flag byte beyond the value, subject to alignment padding.
    assert!(mem::size_of::<CopyNullable<u8>>() == 2);
    assert!(mem::size_of::<Nullable<u8>>() == 2);
    assert!(mem::size_of::<CopyNullable<u32>>() == 2 * mem::size_of::<u32>());
    assert!(mem::align_of::<Nullable<u64>>() == mem::align_of::<u64>());

    // Both variants share one layout.
    assert!(mem::size_of::<Nullable<[u8; 7]>>() == mem::size_of::<CopyNullable<[u8; 7]>>());

    // Only the drop variant carries drop glue.
    assert!(!mem::needs_drop::<CopyNullable<u64>>());
    assert!(mem::needs_drop::<Nullable<u64>>());
};
