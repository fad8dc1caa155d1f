//! Raw, uninitialized building blocks.
//!
//! This layer concentrates every `MaybeUninit` operation of the crate in one
//! place. Higher layers (`storage`, `transfer`, `nullable`) never touch
//! `core::ptr` or `MaybeUninit` directly; they go through [`Slot`].

mod slot;

pub(crate) use slot::Slot;
