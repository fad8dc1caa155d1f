use nullable::storage::{DropStorage, Selected, TrivialStorage};
use nullable::{drop_storage, trivial_storage, AutoNullable, Nullable};
use std::any::TypeId;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
struct Point {
    x: i32,
    y: i32,
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Label(String);

impl From<&str> for Label {
    fn from(text: &str) -> Self {
        Self(text.to_owned())
    }
}

trivial_storage!(Point);
drop_storage!(Label);

fn assert_copy<T: Copy>() {}

fn same_type<A: 'static, B: 'static>() -> bool {
    TypeId::of::<A>() == TypeId::of::<B>()
}

#[test]
fn test_user_types_select_their_storage() {
    assert!(same_type::<Selected<Point>, TrivialStorage<Point>>());
    assert!(same_type::<Selected<Label>, DropStorage<Label>>());
    assert!(AutoNullable::<Point>::IS_TRIVIAL);
    assert!(!AutoNullable::<Label>::IS_TRIVIAL);
}

#[test]
fn test_trivial_selection_is_copy() {
    assert_copy::<AutoNullable<Point>>();
    assert_copy::<AutoNullable<u64>>();
    assert_copy::<AutoNullable<&'static str>>();

    let a: AutoNullable<Point> = AutoNullable::in_place((1, 2));
    let b = a;
    assert_eq!(a, b);
    assert_eq!(b.x + b.y, 3);
}

#[test]
fn test_arrays_and_tuples_of_copy_select_trivial_storage() {
    assert_copy::<AutoNullable<[u64; 4]>>();
    assert_copy::<AutoNullable<(u8, Point)>>();
    assert!(AutoNullable::<[u64; 4]>::IS_TRIVIAL);
    assert!(AutoNullable::<(i32, i32, i32, i32)>::IS_TRIVIAL);
    assert!(!Nullable::<[u64; 4]>::IS_TRIVIAL);

    let a: AutoNullable<[u64; 4]> = AutoNullable::from_value([1, 2, 3, 4]);
    let b = a;
    assert_eq!(a, b);
    assert_eq!(b.iter().sum::<u64>(), 10);
}

#[test]
fn test_drop_selection_releases_value() {
    let shared = Rc::new(());
    {
        let mut n: AutoNullable<Rc<()>> = AutoNullable::from_value(Rc::clone(&shared));
        assert_eq!(Rc::strong_count(&shared), 2);
        n.reset();
        assert_eq!(Rc::strong_count(&shared), 1);
        n.insert(Rc::clone(&shared));
        assert_eq!(Rc::strong_count(&shared), 2);
    }
    assert_eq!(Rc::strong_count(&shared), 1);

    let mut label: AutoNullable<Label> = AutoNullable::new();
    label.emplace("ferris");
    assert_eq!(label.get(), Some(&Label("ferris".into())));
}

#[test]
fn test_auto_and_explicit_storage_interoperate() {
    let auto: AutoNullable<Point> = AutoNullable::from_value(Point { x: 0, y: 5 });
    let explicit: Nullable<Point> = Nullable::from_value(Point { x: 0, y: 5 });
    assert_eq!(auto, explicit);
    assert!(auto <= explicit);
}
