//! Tests for the storage and destruction layer.

use super::*;
use std::cell::Cell;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::rc::Rc;

struct DropCounter<'a>(&'a Cell<usize>);

impl Drop for DropCounter<'_> {
    fn drop(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}

#[test]
fn test_drop_storage_reset_destroys_once() {
    let drops = Cell::new(0);
    let mut storage = DropStorage::occupied(DropCounter(&drops));
    assert!(storage.is_present());

    storage.reset();
    assert!(!storage.is_present());
    assert_eq!(drops.get(), 1);

    storage.reset();
    assert_eq!(drops.get(), 1);

    drop(storage);
    assert_eq!(drops.get(), 1);
}

#[test]
fn test_drop_storage_drop_destroys_held_value() {
    let drops = Cell::new(0);
    drop(DropStorage::occupied(DropCounter(&drops)));
    assert_eq!(drops.get(), 1);

    drop(DropStorage::<DropCounter<'_>>::empty());
    assert_eq!(drops.get(), 1);
}

#[test]
fn test_trivial_storage_reset_only_clears_flag() {
    let mut storage = TrivialStorage::occupied(42u64);
    storage.reset();
    assert!(!storage.is_present());
    assert_eq!(storage.get(), None);
    storage.reset();
    assert!(!storage.is_present());
}

#[test]
fn test_take_moves_value_out_and_empties() {
    let shared = Rc::new(5);
    let mut storage = DropStorage::occupied(Rc::clone(&shared));
    let taken = storage.take();
    assert!(!storage.is_present());
    assert_eq!(taken.as_deref(), Some(&5));
    assert_eq!(Rc::strong_count(&shared), 2);
    drop(storage);
    assert_eq!(Rc::strong_count(&shared), 2);
    drop(taken);
    assert_eq!(Rc::strong_count(&shared), 1);

    let mut trivial = TrivialStorage::occupied('x');
    assert_eq!(trivial.take(), Some('x'));
    assert_eq!(trivial.take(), None);
}

#[test]
fn test_emplace_with_replaces_previous_value() {
    let drops = Cell::new(0);
    let mut storage = DropStorage::occupied(DropCounter(&drops));
    storage.emplace_with(|| DropCounter(&drops));
    assert!(storage.is_present());
    assert_eq!(drops.get(), 1);
}

#[test]
fn test_emplace_with_panic_leaves_storage_empty() {
    let drops = Cell::new(0);
    let mut storage = DropStorage::occupied(DropCounter(&drops));

    let result = catch_unwind(AssertUnwindSafe(|| {
        storage.emplace_with(|| panic!("constructor failed"));
    }));
    assert!(result.is_err());
    assert!(!storage.is_present());
    assert_eq!(drops.get(), 1);

    drop(storage);
    assert_eq!(drops.get(), 1);
}

#[test]
fn test_reset_survives_panicking_destructor() {
    struct Bomb<'a>(&'a Cell<usize>);

    impl Drop for Bomb<'_> {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
            panic!("destructor failed");
        }
    }

    let drops = Cell::new(0);
    let mut storage = DropStorage::occupied(Bomb(&drops));
    let result = catch_unwind(AssertUnwindSafe(|| storage.reset()));
    assert!(result.is_err());
    assert!(!storage.is_present());

    // The flag was cleared first: dropping the storage must not run it again.
    drop(storage);
    assert_eq!(drops.get(), 1);
}

#[test]
fn test_occupied_with_runs_initializer_once() {
    let calls = Cell::new(0);
    let storage = TrivialStorage::occupied_with(|| {
        calls.set(calls.get() + 1);
        7u8
    });
    assert_eq!(storage.get(), Some(&7));
    assert_eq!(calls.get(), 1);
}

#[test]
fn test_triviality_follows_copy() {
    assert!(<TrivialStorage<u32> as Storage>::IS_TRIVIAL);
    assert!(!<DropStorage<u32> as Storage>::IS_TRIVIAL);
    assert!(!core::mem::needs_drop::<TrivialStorage<&str>>());
    assert!(core::mem::needs_drop::<DropStorage<String>>());
}

#[test]
fn test_selection_is_static() {
    fn same<A: 'static, B: 'static>() -> bool {
        core::any::TypeId::of::<A>() == core::any::TypeId::of::<B>()
    }

    assert!(same::<Selected<u32>, TrivialStorage<u32>>());
    assert!(same::<Selected<f64>, TrivialStorage<f64>>());
    assert!(same::<Selected<&'static str>, TrivialStorage<&'static str>>());
    assert!(same::<Selected<*const u8>, TrivialStorage<*const u8>>());
    assert!(same::<Selected<String>, DropStorage<String>>());
    assert!(same::<Selected<Vec<u8>>, DropStorage<Vec<u8>>>());
    assert!(same::<Selected<Box<str>>, DropStorage<Box<str>>>());
    assert!(same::<Selected<[u64; 4]>, TrivialStorage<[u64; 4]>>());
    assert!(same::<Selected<(u8, char)>, TrivialStorage<(u8, char)>>());
}
