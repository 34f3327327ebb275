/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Structural hash codes for shapes.
//!
//! Every shape exposes a 32-bit hash code that is a pure function of its member values and
//! agrees with its `PartialEq`. Codes are accumulated with a multiplier of 31 starting from 1,
//! member by member in declaration order, so they are stable across processes.

use std::collections::HashMap;

const PRIME: i32 = 31;

/// Seed for a structural hash accumulation.
pub const SEED: i32 = 1;

/// A value that contributes to a shape's structural hash code.
pub trait ShapeHash {
    /// Returns the structural hash code of this value.
    fn hash_code(&self) -> i32;
}

/// Folds one member hash into the running hash code `hash`.
pub fn combine(hash: i32, member: i32) -> i32 {
    hash.wrapping_mul(PRIME).wrapping_add(member)
}

/// Hash code of a 64-bit integer: its two halves XOR-ed together.
pub fn hash_i64(value: i64) -> i32 {
    (value ^ ((value as u64) >> 32) as i64) as i32
}

impl ShapeHash for str {
    fn hash_code(&self) -> i32 {
        self.encode_utf16()
            .fold(0, |hash: i32, unit| combine(hash, i32::from(unit)))
    }
}

impl ShapeHash for String {
    fn hash_code(&self) -> i32 {
        self.as_str().hash_code()
    }
}

impl ShapeHash for i32 {
    fn hash_code(&self) -> i32 {
        *self
    }
}

impl ShapeHash for i64 {
    fn hash_code(&self) -> i32 {
        hash_i64(*self)
    }
}

impl ShapeHash for bool {
    fn hash_code(&self) -> i32 {
        if *self {
            1231
        } else {
            1237
        }
    }
}

/// Bit pattern of `value` with every NaN mapped to one canonical NaN.
///
/// Doubles are hashed and compared through these bits, so `-0.0` differs from `0.0` and
/// NaN equals NaN.
pub fn canonical_bits(value: f64) -> u64 {
    if value.is_nan() {
        0x7ff8_0000_0000_0000
    } else {
        value.to_bits()
    }
}

impl ShapeHash for f64 {
    fn hash_code(&self) -> i32 {
        hash_i64(canonical_bits(*self) as i64)
    }
}

impl<T: ShapeHash> ShapeHash for Option<T> {
    fn hash_code(&self) -> i32 {
        self.as_ref().map_or(0, |value| value.hash_code())
    }
}

impl<T: ShapeHash> ShapeHash for Vec<T> {
    fn hash_code(&self) -> i32 {
        self.iter()
            .fold(SEED, |hash, item| combine(hash, item.hash_code()))
    }
}

impl<T: ShapeHash> ShapeHash for HashMap<String, T> {
    fn hash_code(&self) -> i32 {
        // Iteration order is unspecified, so entries are summed rather than chained.
        self.iter().fold(0, |hash: i32, (key, value)| {
            hash.wrapping_add(key.hash_code() ^ value.hash_code())
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn string_hash_codes() {
        assert_eq!("".hash_code(), 0);
        assert_eq!("a".hash_code(), 97);
        assert_eq!("hello".hash_code(), 99162322);
        assert_eq!("CONTACT_FLOW".hash_code(), "CONTACT_FLOW".to_string().hash_code());
        // Characters outside the BMP hash as their two UTF-16 surrogates
        assert_eq!("\u{1F600}".hash_code(), 0xD83D * 31 + 0xDE00);
    }

    #[test]
    fn scalar_hash_codes() {
        assert_eq!(42i32.hash_code(), 42);
        assert_eq!(true.hash_code(), 1231);
        assert_eq!(false.hash_code(), 1237);
        assert_eq!((-1i64).hash_code(), 0);
        assert_eq!((1i64 << 32).hash_code(), 1);
        assert_eq!(0.0f64.hash_code(), 0);
        assert_eq!(1.0f64.hash_code(), 1072693248);
        assert_ne!((-0.0f64).hash_code(), 0.0f64.hash_code());
        assert_eq!(f64::NAN.hash_code(), (-f64::NAN).hash_code());
    }

    #[test]
    fn absent_hashes_as_zero() {
        assert_eq!(None::<String>.hash_code(), 0);
        assert_eq!(Some("a".to_string()).hash_code(), 97);
    }

    #[test]
    fn list_hash_is_order_sensitive() {
        let ab = vec!["a".to_string(), "b".to_string()];
        let ba = vec!["b".to_string(), "a".to_string()];
        assert_eq!(Vec::<String>::new().hash_code(), 1);
        assert_eq!(ab.hash_code(), (31 + 97) * 31 + 98);
        assert_ne!(ab.hash_code(), ba.hash_code());
    }

    #[test]
    fn map_hash_sums_entries() {
        let mut map = HashMap::new();
        map.insert("a".to_string(), "b".to_string());
        map.insert("c".to_string(), "d".to_string());
        assert_eq!(map.hash_code(), (97 ^ 98) + (99 ^ 100));
        assert_eq!(HashMap::<String, String>::new().hash_code(), 0);
    }

    proptest! {
        #[test]
        fn map_hash_ignores_insertion_order(entries in prop::collection::vec(("[a-z]{1,8}", any::<i32>()), 0..16)) {
            let forward: HashMap<String, i32> = entries.iter().cloned().collect();
            let backward: HashMap<String, i32> = entries.iter().rev().cloned().collect();
            if forward == backward {
                prop_assert_eq!(forward.hash_code(), backward.hash_code());
            }
        }

        #[test]
        fn string_and_str_agree(s in ".*") {
            prop_assert_eq!(s.hash_code(), s.as_str().hash_code());
        }
    }
}
