//! `proptest` strategies for [`Nullable`], behind the `proptest` feature.
//!
//! ```rust
//! use nullable::{strategy, Nullable};
//! use proptest::prelude::*;
//!
//! proptest! {
//!     #[test]
//!     fn clone_is_equal(n in strategy::nullable::<_, nullable::DropStorage<String>>(".*")) {
//!         let copy: Nullable<String> = n.clone();
//!         prop_assert_eq!(copy, n);
//!     }
//! }
//! ```

use core::fmt::Debug;

use proptest::option::Probability;
use proptest::prelude::*;

use crate::storage::Storage;
use crate::Nullable;

/// Generates empty and occupied containers, with values drawn from `value`.
///
/// Empty and occupied are equally likely.
pub fn nullable<T, S>(value: impl Strategy<Value = T>) -> impl Strategy<Value = Nullable<T, S>>
where
    T: Debug,
    S: Storage<Item = T>,
{
    weighted(0.5, value)
}

/// Generates occupied containers with probability `probability_of_value`.
///
/// Both endpoints are accepted: `0.0` only ever yields empty containers and
/// `1.0` only occupied ones. Occupied values shrink towards empty.
///
/// # Panics
/// Panics if `probability_of_value` is outside `0.0..=1.0`.
pub fn weighted<T, S>(
    probability_of_value: f64,
    value: impl Strategy<Value = T>,
) -> impl Strategy<Value = Nullable<T, S>>
where
    T: Debug,
    S: Storage<Item = T>,
{
    // `option::weighted` rejects both endpoints, so presence is drawn separately.
    let probability = f64::from(Probability::new(probability_of_value));
    (proptest::bool::weighted(probability), value).prop_map(|(present, value)| {
        if present {
            Nullable::from_value(value)
        } else {
            Nullable::new()
        }
    })
}

/// Generates occupied containers only.
pub fn occupied<T, S>(value: impl Strategy<Value = T>) -> impl Strategy<Value = Nullable<T, S>>
where
    T: Debug,
    S: Storage<Item = T>,
{
    value.prop_map(Nullable::<T, S>::from_value)
}
