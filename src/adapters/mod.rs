// SPDX-License-Identifier: MIT OR Apache-2.0

//! Format adapters for the properties crate.
//!
//! This module contains concrete implementations of the
//! [`PropertyFormat`](crate::ports::PropertyFormat) port.

pub mod dotted;

// Re-export commonly used types
pub use dotted::{DottedFormat, DEFAULT_COMMENT_MARKER};
