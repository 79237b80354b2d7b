// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain layer containing core business logic and types.
//!
//! This module contains the core domain types of the properties crate: the
//! property tree (namespaces and leaves), the dotted key type, the key-path
//! resolver, and the error types. It is independent of any external concerns.

pub mod errors;
pub mod node;
pub mod property_key;

// Re-export commonly used types
pub use errors::{PropsError, Result};
pub use node::{Leaf, Namespace, NodeKind, PropertyNode};
pub use property_key::PropertyKey;
