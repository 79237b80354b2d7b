// SPDX-License-Identifier: MIT OR Apache-2.0

//! A hierarchical dot-delimited properties parser.
//!
//! This crate parses and serializes a properties text format in which nesting
//! is denoted by dots in the property name. A document such as:
//!
//! ```text
//! #hello
//! a.b=12
//! a.c=test
//! d=321
//! ```
//!
//! parses into a tree of namespaces and leaves: `a` is a namespace holding the
//! leaves `b` (value `"12"`, comment `"hello"`) and `c` (value `"test"`), and
//! `d` is a top-level leaf. Comment lines attach to the property that follows
//! them.
//!
//! A key bound to a value can never later be used as a parent namespace (and
//! vice versa); such reuse is reported as a
//! [`Conflict`](domain::PropsError::Conflict) instead of silently corrupting
//! the tree.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain Layer**: Core types and business logic (`PropertyKey`,
//!   `Namespace`, `Leaf`, the key-path resolver, errors)
//! - **Ports**: Trait definitions that define interfaces (`PropertyFormat`)
//! - **Adapters**: The concrete dotted line format codec (`DottedFormat`)
//! - **Service**: The file-backed `PropertyStore`
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use dotprops::prelude::*;
//!
//! # fn main() -> dotprops::domain::Result<()> {
//! let mut store = PropertyStore::new();
//! if store.load("app.properties")? {
//!     if let Some(port) = store.value("server.port") {
//!         println!("listening on {port}");
//!     }
//! }
//! store.set("server.port", "8080")?;
//! store.save("app.properties", &SaveOptions::default())?;
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for convenient access.
pub mod prelude {
    pub use crate::adapters::DottedFormat;
    pub use crate::domain::{Leaf, Namespace, NodeKind, PropertyKey, PropertyNode, PropsError, Result};
    pub use crate::ports::{PropertyFormat, WriteOptions};
    pub use crate::service::{PropertyStore, SaveOptions};
}
