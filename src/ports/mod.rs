// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ports (interfaces) for the properties crate.
//!
//! This module contains the trait definitions that form the seams of the
//! crate. The [`PropertyFormat`] trait is the boundary between the property
//! tree and any concrete document syntax.

pub mod format;

// Re-export commonly used types
pub use format::{PropertyFormat, WriteOptions};
