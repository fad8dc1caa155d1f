#![cfg(feature = "proptest")]

use nullable::storage::{DropStorage, TrivialStorage};
use nullable::{strategy, Nullable};
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_occupied_always_has_value(n in strategy::occupied::<_, TrivialStorage<u8>>(any::<u8>())) {
        prop_assert!(n.has_value());
    }

    #[test]
    fn test_weighted_zero_is_always_empty(n in strategy::weighted::<_, DropStorage<String>>(0.0, "[a-z]+")) {
        prop_assert!(n.is_null());
    }

    #[test]
    fn test_weighted_one_is_always_occupied(n in strategy::weighted::<_, TrivialStorage<u8>>(1.0, any::<u8>())) {
        prop_assert!(n.has_value());
    }

    #[test]
    fn test_clone_round_trips(n in strategy::nullable::<_, DropStorage<Vec<u16>>>(
        proptest::collection::vec(any::<u16>(), 0..8)
    )) {
        let copy: Nullable<Vec<u16>> = n.clone();
        prop_assert_eq!(copy.into_option(), n.into_option());
    }
}

#[test]
#[should_panic]
fn test_weighted_rejects_probability_above_one() {
    let _ = strategy::weighted::<_, TrivialStorage<u8>>(1.5, any::<u8>());
}
