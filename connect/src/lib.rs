/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Shapes of the Amazon Connect API.
//!
//! The crate contains no client: it models the values exchanged with the service. Resources
//! and nested records live in [`model`], operation requests in [`input`] and responses in
//! [`output`]. Every shape implements [`Shape`]:
//!
//! ```rust
//! use connect::model::{ContactFlow, ContactFlowState, ContactFlowType};
//!
//! let flow = ContactFlow::new()
//!     .with_name("Main Flow")
//!     .with_type(ContactFlowType::ContactFlow)
//!     .with_state(ContactFlowState::Active);
//! assert_eq!(flow.r#type(), Some("CONTACT_FLOW"));
//! assert_eq!(flow.to_string(), "{Name: Main Flow,Type: CONTACT_FLOW,State: ACTIVE}");
//! ```

#![warn(missing_docs, rust_2018_idioms, missing_debug_implementations)]

#[macro_use]
mod macros;

pub mod input;
pub mod model;
pub mod output;

pub use smithy_types::{DateTime, DuplicateKeyError, EnumParseError, Shape, ShapeEq, ShapeHash};
