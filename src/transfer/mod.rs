//! Copy/move layer.
//!
//! | operation      | Rust form                    |
//! |----------------|------------------------------|
//! | copy-construct | `Clone::clone`               |
//! | copy-assign    | `Clone::clone_from`          |
//! | move-construct | a plain move (always bitwise) |
//! | move-assign    | [`Transfer::move_assign`]    |
//!
//! [`TrivialStorage`](crate::storage::TrivialStorage) is `Copy`, so all four
//! are bitwise copies of flag and slot. [`DropStorage`](crate::storage::DropStorage)
//! choreographs each assignment by the presence of both operands:
//!
//! | this | other | action                                   |
//! |------|-------|------------------------------------------|
//! | yes  | yes   | assign through; the slot is reused       |
//! | yes  | no    | destroy this value, clear the flag       |
//! | no   | yes   | construct from other's value, set flag   |
//! | no   | no    | nothing                                  |
//!
//! Copy-assigning a storage to itself cannot be expressed: `&mut self` and
//! `&Self` never alias. Move-assigning to itself is a plain move.

mod choreographed;
mod trivial;


use crate::storage::Storage;

/// Assignment between storages of the same variant.
pub trait Transfer: Storage {
    /// Move-assigns `source` into `self`.
    fn move_assign(&mut self, source: Self);
}

/// Which branch of the assignment table an operation took.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Assignment {
    Through,
    Reset,
    Construct,
    Noop,
}

impl Assignment {
    #[inline(always)]
    pub(crate) fn of(this: bool, other: bool) -> Self {
        match (this, other) {
            (true, true) => Self::Through,
            (true, false) => Self::Reset,
            (false, true) => Self::Construct,
            (false, false) => Self::Noop,
        }
    }
}
