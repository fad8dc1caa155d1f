//! Construct/destroy choreography for `DropStorage`.

use super::{Assignment, Transfer};
use crate::storage::{DropStorage, Storage};

impl<T: Clone> Clone for DropStorage<T> {
    #[inline]
    fn clone(&self) -> Self {
        match self.get() {
            Some(value) => Self::occupied(value.clone()),
            None => Self::empty(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        match Assignment::of(self.present, source.present) {
            Assignment::Through => {
                // SAFETY: both present.
                unsafe {
                    self.slot
                        .assume_init_mut()
                        .clone_from(source.slot.assume_init_ref());
                }
            }
            Assignment::Reset => self.reset(),
            Assignment::Construct => {
                // SAFETY: `source` is present.
                let value = unsafe { source.slot.assume_init_ref() }.clone();
                // SAFETY: `self` is empty; the clone finished before the flag is set.
                unsafe { self.fill_unchecked(value) };
            }
            Assignment::Noop => {}
        }
    }
}

impl<T> Transfer for DropStorage<T> {
    fn move_assign(&mut self, mut source: Self) {
        let case = Assignment::of(self.present, source.present);
        trace_event!(ty = core::any::type_name::<T>(), ?case, "move-assign");
        match (case, source.take()) {
            (Assignment::Through, Some(value)) => {
                // SAFETY: `self` is present.
                let held = unsafe { self.slot.assume_init_mut() };
                // Drops the old value in place; the slot stays initialized
                // even if that destructor unwinds.
                *held = value;
            }
            (Assignment::Construct, Some(value)) => {
                // SAFETY: `self` is empty.
                unsafe { self.fill_unchecked(value) };
            }
            (Assignment::Reset, _) => self.reset(),
            _ => {}
        }
    }
}
