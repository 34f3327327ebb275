/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Errors raised by shape operations.
//!
//! Shapes are plain data, so almost every operation on them is total. The exceptions are
//! inserting a map entry under a key that is already present, and parsing an enumeration
//! from a string that is not one of its values.

/// A map entry was added under a key the map already holds.
///
/// The rejected call leaves the map unmodified.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("duplicated key ({key}) provided for {member}")]
pub struct DuplicateKeyError {
    member: &'static str,
    key: String,
}

impl DuplicateKeyError {
    /// Creates a new `DuplicateKeyError` for `key` in the map member named `member`.
    pub fn new(member: &'static str, key: impl Into<String>) -> Self {
        DuplicateKeyError {
            member,
            key: key.into(),
        }
    }

    /// The wire name of the map member, e.g. `Tags`.
    pub fn member(&self) -> &'static str {
        self.member
    }

    /// The key that was already present.
    pub fn key(&self) -> &str {
        &self.key
    }
}

/// A string could not be converted into a closed enumeration.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum EnumParseError {
    /// The input was empty.
    #[error("{enum_name} value cannot be empty")]
    Empty {
        /// Name of the enumeration.
        enum_name: &'static str,
    },
    /// The input is not one of the enumeration's values.
    #[error("cannot create {enum_name} from `{value}`")]
    UnknownVariant {
        /// Name of the enumeration.
        enum_name: &'static str,
        /// The rejected input.
        value: String,
    },
}

impl EnumParseError {
    /// Builds the error for `value`, distinguishing empty input from an unknown value.
    pub fn new(enum_name: &'static str, value: &str) -> Self {
        if value.is_empty() {
            EnumParseError::Empty { enum_name }
        } else {
            EnumParseError::UnknownVariant {
                enum_name,
                value: value.to_string(),
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn duplicate_key_message() {
        let err = DuplicateKeyError::new("Tags", "team");
        assert_eq!(err.to_string(), "duplicated key (team) provided for Tags");
        assert_eq!(err.member(), "Tags");
        assert_eq!(err.key(), "team");
    }

    #[test]
    fn enum_parse_messages() {
        assert_eq!(
            EnumParseError::new("ContactFlowState", "").to_string(),
            "ContactFlowState value cannot be empty"
        );
        assert_eq!(
            EnumParseError::new("ContactFlowState", "PAUSED").to_string(),
            "cannot create ContactFlowState from `PAUSED`"
        );
    }

    #[test]
    fn send_sync() {
        fn verify_send_sync<T: Send + Sync + 'static>() {}
        verify_send_sync::<DuplicateKeyError>();
        verify_send_sync::<EnumParseError>();
    }
}
