/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Protocol-agnostic runtime types for the generated Amazon Connect shapes.
//!
//! Generated shapes only hold data. The pieces they share live here: the timestamp type,
//! the structural hash and display contracts every shape implements, and the errors raised
//! by the few fallible shape operations.

#![warn(
    missing_docs,
    rustdoc::missing_crate_level_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]

pub mod date_time;
pub mod display;
pub mod eq;
pub mod error;
pub mod hash;
pub mod shape;

pub use date_time::DateTime;
pub use eq::ShapeEq;
pub use error::{DuplicateKeyError, EnumParseError};
pub use hash::ShapeHash;
pub use shape::Shape;
