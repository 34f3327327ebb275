/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Structural equality for shapes.
//!
//! Shapes compare member by member. Doubles compare by their canonical bits rather than
//! IEEE rules, which keeps equality reflexive and in agreement with [`ShapeHash`]:
//! a NaN member equals itself, and `-0.0` is a different value than `0.0`.
//!
//! [`ShapeHash`]: crate::hash::ShapeHash

use crate::date_time::DateTime;
use crate::hash::canonical_bits;
use std::collections::HashMap;

/// A value that can be compared as a shape member.
pub trait ShapeEq {
    /// Returns true if `self` and `other` hold the same value.
    fn shape_eq(&self, other: &Self) -> bool;
}

macro_rules! shape_eq_by_partial_eq {
    ($($ty:ty),+) => {
        $(
            impl ShapeEq for $ty {
                fn shape_eq(&self, other: &Self) -> bool {
                    self == other
                }
            }
        )+
    };
}

shape_eq_by_partial_eq!(str, String, i32, i64, bool, DateTime);

impl ShapeEq for f64 {
    fn shape_eq(&self, other: &Self) -> bool {
        canonical_bits(*self) == canonical_bits(*other)
    }
}

impl<T: ShapeEq> ShapeEq for Option<T> {
    fn shape_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Some(a), Some(b)) => a.shape_eq(b),
            (None, None) => true,
            _ => false,
        }
    }
}

impl<T: ShapeEq> ShapeEq for Vec<T> {
    fn shape_eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().zip(other).all(|(a, b)| a.shape_eq(b))
    }
}

impl<T: ShapeEq> ShapeEq for HashMap<String, T> {
    fn shape_eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(key, value)| other.get(key).map_or(false, |o| value.shape_eq(o)))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::hash::ShapeHash;
    use proptest::prelude::*;

    #[test]
    fn doubles_compare_like_they_hash() {
        assert!(f64::NAN.shape_eq(&f64::NAN));
        assert!(f64::NAN.shape_eq(&-f64::NAN));
        assert!(!0.0f64.shape_eq(&-0.0));
        assert!(1.5f64.shape_eq(&1.5));
    }

    #[test]
    fn absent_differs_from_empty() {
        assert!(None::<Vec<String>>.shape_eq(&None));
        assert!(!None::<Vec<String>>.shape_eq(&Some(Vec::new())));
    }

    #[test]
    fn maps_compare_by_entries() {
        let mut a = HashMap::new();
        a.insert("k".to_string(), f64::NAN);
        let b = a.clone();
        assert!(a.shape_eq(&b));

        let mut c = HashMap::new();
        c.insert("other".to_string(), f64::NAN);
        assert!(!a.shape_eq(&c));
    }

    proptest! {
        #[test]
        fn equal_doubles_hash_equal(a in any::<f64>(), b in any::<f64>()) {
            prop_assert!(a.shape_eq(&a));
            if a.shape_eq(&b) {
                prop_assert_eq!(a.hash_code(), b.hash_code());
            }
        }

        #[test]
        fn lists_of_doubles(values in prop::collection::vec(any::<f64>(), 0..8)) {
            let copy = values.clone();
            prop_assert!(values.shape_eq(&copy));
            prop_assert_eq!(values.hash_code(), copy.hash_code());
        }
    }
}
