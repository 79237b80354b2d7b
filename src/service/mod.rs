// SPDX-License-Identifier: MIT OR Apache-2.0

//! Service layer for the properties crate.
//!
//! This module contains [`PropertyStore`], the file-backed facade over a
//! property tree.

pub mod store;

// Re-export commonly used types
pub use store::{PropertyStore, SaveOptions};
