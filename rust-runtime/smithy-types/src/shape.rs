/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! The contract shared by every generated shape.

use crate::eq::ShapeEq;
use crate::error::DuplicateKeyError;
use crate::hash::ShapeHash;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

/// A generated API shape: a record of optional members with structural equality.
///
/// Shapes are passive values. They never hold a reference to a client, a connection or
/// another shape; nesting is strictly by value.
///
/// `PartialEq` agrees with [`ShapeEq`], so it is reflexive even for `f64` members and shapes
/// are `Eq`. Equal shapes have equal [`ShapeHash`] codes.
pub trait Shape:
    Clone
    + fmt::Debug
    + fmt::Display
    + Default
    + Eq
    + std::hash::Hash
    + ShapeEq
    + ShapeHash
    + Serialize
    + DeserializeOwned
{
    /// The shape's name in the service model, e.g. `ContactFlow`.
    const NAME: &'static str;

    /// Wire names of the shape's members, in declaration order.
    const MEMBERS: &'static [&'static str];
}

/// Inserts `key` into the map member `entries`, creating the map if it is absent.
///
/// Existing entries are never overwritten: a key that is already present is rejected with
/// [`DuplicateKeyError`] and the map is left as it was.
pub fn insert_entry<V>(
    entries: &mut Option<HashMap<String, V>>,
    member: &'static str,
    key: String,
    value: V,
) -> Result<(), DuplicateKeyError> {
    let entries = entries.get_or_insert_with(HashMap::new);
    if entries.contains_key(&key) {
        tracing::debug!(member, key = %key, "rejected map entry with duplicated key");
        return Err(DuplicateKeyError::new(member, key));
    }
    entries.insert(key, value);
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use tracing_test::traced_test;

    #[test]
    fn creates_map_on_first_entry() {
        let mut entries: Option<HashMap<String, String>> = None;
        insert_entry(&mut entries, "Tags", "team".into(), "blue".into()).unwrap();
        assert_eq!(entries.unwrap().get("team").map(String::as_str), Some("blue"));
    }

    #[test]
    #[traced_test]
    fn duplicate_key_is_rejected_and_logged() {
        let mut entries: Option<HashMap<String, String>> = None;
        insert_entry(&mut entries, "Tags", "team".into(), "blue".into()).unwrap();
        let err = insert_entry(&mut entries, "Tags", "team".into(), "red".into()).unwrap_err();

        assert_eq!(err, DuplicateKeyError::new("Tags", "team"));
        let entries = entries.unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries["team"], "blue");
        assert!(logs_contain("rejected map entry with duplicated key"));
    }
}
