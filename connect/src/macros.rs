/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Templates applied to every shape of the service model.
//!
//! Each member is declared as `"WireName" => field: kind { methods }` where `kind` is one of
//! `string`, `value<T>`, `shape<T>`, `list<T>` or `map<T>`. Method names are spelled out per
//! member: getters take the field name, the remaining names are listed in this order:
//!
//! | kind                  | methods                                        |
//! |-----------------------|------------------------------------------------|
//! | `string`, `value`, `shape` | `set_x, with_x`                           |
//! | `list`                | `set_x, with_x, append_x`                      |
//! | `map`                 | `set_x, with_x, add_x_entry, clear_x_entries`  |

/// Storage type of a member of the given kind. Every member is wrapped in an `Option`.
macro_rules! shape_member_type {
    (string) => { String };
    (value<$t:ty>) => { $t };
    (shape<$t:ty>) => { $t };
    (list<$t:ty>) => { Vec<$t> };
    (map<$t:ty>) => { ::std::collections::HashMap<String, $t> };
}

/// Getter and setters for one member. Must be called from within an `impl` block.
macro_rules! shape_member_accessors {
    ($(#[$meta:meta])* $member:literal => $field:ident: string [$set:ident, $with:ident]) => {
        $(#[$meta])*
        pub fn $field(&self) -> Option<&str> {
            self.$field.as_deref()
        }

        #[doc = concat!("Sets `", $member, "`. Passing `None` clears it.")]
        pub fn $set(&mut self, input: Option<String>) -> &mut Self {
            self.$field = input;
            self
        }

        #[doc = concat!("Sets `", $member, "` and returns the shape for further chaining.")]
        pub fn $with(mut self, input: impl Into<String>) -> Self {
            self.$field = Some(input.into());
            self
        }
    };
    ($(#[$meta:meta])* $member:literal => $field:ident: value<$t:ty> [$set:ident, $with:ident]) => {
        $(#[$meta])*
        pub fn $field(&self) -> Option<$t> {
            self.$field
        }

        #[doc = concat!("Sets `", $member, "`. Passing `None` clears it.")]
        pub fn $set(&mut self, input: Option<$t>) -> &mut Self {
            self.$field = input;
            self
        }

        #[doc = concat!("Sets `", $member, "` and returns the shape for further chaining.")]
        pub fn $with(mut self, input: impl Into<$t>) -> Self {
            self.$field = Some(input.into());
            self
        }
    };
    ($(#[$meta:meta])* $member:literal => $field:ident: shape<$t:ty> [$set:ident, $with:ident]) => {
        $(#[$meta])*
        pub fn $field(&self) -> Option<&$t> {
            self.$field.as_ref()
        }

        #[doc = concat!("Sets `", $member, "`. Passing `None` clears it.")]
        pub fn $set(&mut self, input: Option<$t>) -> &mut Self {
            self.$field = input;
            self
        }

        #[doc = concat!("Sets `", $member, "` and returns the shape for further chaining.")]
        pub fn $with(mut self, input: $t) -> Self {
            self.$field = Some(input);
            self
        }
    };
    ($(#[$meta:meta])* $member:literal => $field:ident: list<$t:ty> [$set:ident, $with:ident, $append:ident]) => {
        $(#[$meta])*
        pub fn $field(&self) -> Option<&[$t]> {
            self.$field.as_deref()
        }

        #[doc = concat!("Replaces `", $member, "` with `input`. Passing `None` clears it; `Some(vec![])` leaves an empty list.")]
        pub fn $set(&mut self, input: Option<Vec<$t>>) -> &mut Self {
            self.$field = input;
            self
        }

        #[doc = concat!("Replaces `", $member, "` with a fresh copy of `input` and returns the shape for further chaining.")]
        pub fn $with<I>(mut self, input: I) -> Self
        where
            I: IntoIterator,
            I::Item: Into<$t>,
        {
            self.$field = Some(input.into_iter().map(|item| item.into()).collect());
            self
        }

        #[doc = concat!("Appends an item to `", $member, "`, creating the list if it is absent.")]
        #[doc = ""]
        #[doc = concat!("To override the contents of this collection use [`", stringify!($set), "`](Self::", stringify!($set), ").")]
        pub fn $append(mut self, input: impl Into<$t>) -> Self {
            self.$field.get_or_insert_with(Vec::new).push(input.into());
            self
        }
    };
    ($(#[$meta:meta])* $member:literal => $field:ident: map<$t:ty> [$set:ident, $with:ident, $add:ident, $clear:ident]) => {
        $(#[$meta])*
        pub fn $field(&self) -> Option<&::std::collections::HashMap<String, $t>> {
            self.$field.as_ref()
        }

        #[doc = concat!("Replaces `", $member, "` with `input`. Passing `None` clears it; an empty map is kept as empty.")]
        pub fn $set(&mut self, input: Option<::std::collections::HashMap<String, $t>>) -> &mut Self {
            self.$field = input;
            self
        }

        #[doc = concat!("Replaces `", $member, "` with a fresh copy of `input` and returns the shape for further chaining.")]
        pub fn $with<I, K, V>(mut self, input: I) -> Self
        where
            I: IntoIterator<Item = (K, V)>,
            K: Into<String>,
            V: Into<$t>,
        {
            self.$field = Some(
                input
                    .into_iter()
                    .map(|(key, value)| (key.into(), value.into()))
                    .collect(),
            );
            self
        }

        #[doc = concat!("Adds one entry to `", $member, "`, creating the map if it is absent.")]
        #[doc = ""]
        #[doc = "Entries are never overwritten through this method: if `key` is already present the"]
        #[doc = "call fails with [`DuplicateKeyError`](::smithy_types::DuplicateKeyError) and the map is left unchanged."]
        pub fn $add(
            &mut self,
            key: impl Into<String>,
            value: impl Into<$t>,
        ) -> Result<&mut Self, ::smithy_types::DuplicateKeyError> {
            ::smithy_types::shape::insert_entry(&mut self.$field, $member, key.into(), value.into())?;
            Ok(self)
        }

        #[doc = concat!("Removes every entry of `", $member, "`, leaving the member absent rather than empty.")]
        pub fn $clear(&mut self) -> &mut Self {
            self.$field = None;
            self
        }
    };
}

/// Declares a shape: the struct, its accessors, and its display, equality, hash, serde and
/// [`Shape`](smithy_types::Shape) implementations.
///
/// Equality is generated rather than derived so that it goes through
/// [`ShapeEq`](smithy_types::ShapeEq) and agrees with the structural hash on `f64` members.
macro_rules! shape {
    (
        $(#[$shape_meta:meta])*
        $shape_name:literal => pub struct $name:ident {
            $(
                $(#[$member_meta:meta])*
                $member:literal => $field:ident: $kind:ident $(<$ty:ty>)? { $($method:ident),+ $(,)? }
            ),+ $(,)?
        }
    ) => {
        $(#[$shape_meta])*
        #[derive(Clone, Debug, Default, ::serde::Serialize, ::serde::Deserialize)]
        pub struct $name {
            $(
                #[serde(rename = $member, default, skip_serializing_if = "Option::is_none")]
                $field: Option<shape_member_type!($kind $(<$ty>)?)>,
            )+
        }

        impl $name {
            /// Creates a new instance with every member absent.
            pub fn new() -> Self {
                Self::default()
            }

            $(
                shape_member_accessors! {
                    $(#[$member_meta])*
                    $member => $field: $kind $(<$ty>)? [$($method),+]
                }
            )+
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                let mut formatter = ::smithy_types::display::ShapeFormatter::new(f);
                $( formatter.member($member, self.$field.as_ref()); )+
                formatter.finish()
            }
        }

        impl ::smithy_types::display::ShapeDisplay for $name {
            fn fmt_member(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                ::std::fmt::Display::fmt(self, f)
            }
        }

        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                true $( && ::smithy_types::ShapeEq::shape_eq(&self.$field, &other.$field) )+
            }
        }

        impl Eq for $name {}

        impl ::smithy_types::ShapeEq for $name {
            fn shape_eq(&self, other: &Self) -> bool {
                self == other
            }
        }

        impl ::std::hash::Hash for $name {
            fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
                state.write_i32(::smithy_types::ShapeHash::hash_code(self));
            }
        }

        impl ::smithy_types::ShapeHash for $name {
            fn hash_code(&self) -> i32 {
                let hash = ::smithy_types::hash::SEED;
                $( let hash = ::smithy_types::hash::combine(hash, ::smithy_types::ShapeHash::hash_code(&self.$field)); )+
                hash
            }
        }

        impl ::smithy_types::Shape for $name {
            const NAME: &'static str = $shape_name;
            const MEMBERS: &'static [&'static str] = &[$($member),+];
        }
    };
}

/// Declares a closed enumeration whose variants stand for fixed wire strings.
///
/// Shapes store enumerated members as plain strings so that values added to the service
/// later still round-trip; the enumeration converts into that string wherever a setter
/// takes `impl Into<String>`.
macro_rules! shape_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $value:tt
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, ::serde::Serialize, ::serde::Deserialize,
        )]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[serde(rename = $value)]
                $variant,
            )+
        }

        impl $name {
            /// Returns the wire value of this variant.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $( $name::$variant => $value, )+
                }
            }

            /// Returns every variant, in declaration order.
            pub fn variants() -> &'static [$name] {
                &[$( $name::$variant ),+]
            }

            /// Returns every wire value, in declaration order.
            pub fn values() -> &'static [&'static str] {
                &[$( $value ),+]
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = ::smithy_types::EnumParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $value => Ok($name::$variant), )+
                    other => Err(::smithy_types::EnumParseError::new(stringify!($name), other)),
                }
            }
        }

        impl ::std::convert::TryFrom<&str> for $name {
            type Error = ::smithy_types::EnumParseError;

            fn try_from(s: &str) -> Result<Self, Self::Error> {
                s.parse()
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.as_str().to_string()
            }
        }
    };
}
