// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the properties crate.
//!
//! This module defines the error types that can occur when parsing, resolving,
//! or persisting property trees. All errors use `thiserror` for proper error
//! handling and conversion.

use crate::domain::node::NodeKind;
use std::path::PathBuf;
use thiserror::Error;

/// The main error type for property operations.
///
/// This enum represents all possible errors that can occur when parsing a
/// properties document, binding key paths into the tree, or reading and
/// writing files. It is marked as `#[non_exhaustive]` to allow for future
/// additions without breaking backwards compatibility.
///
/// # Examples
///
/// ```
/// use dotprops::domain::errors::PropsError;
/// use dotprops::domain::node::NodeKind;
///
/// fn bind_key() -> Result<(), PropsError> {
///     Err(PropsError::Conflict {
///         path: "database".to_string(),
///         existing: NodeKind::Leaf,
///         requested: NodeKind::Namespace,
///     })
/// }
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PropsError {
    /// A key path was bound to one node kind and later used as the other.
    ///
    /// This indicates either a malformed properties file (e.g. `a=1` followed
    /// by `a.b=2`) or an API misuse. It is never silently ignored.
    #[error("key path conflict at '{path}': existing {existing} node cannot be used as {requested}")]
    Conflict {
        /// The dotted path up to and including the conflicting segment
        path: String,
        /// The kind of node already bound at the path
        existing: NodeKind,
        /// The kind of node the operation required
        requested: NodeKind,
    },

    /// Failed to persist a temporary file to its final location during save.
    #[error("failed to persist properties file '{path}': {source}")]
    Persist {
        /// The target path of the save
        path: PathBuf,
        /// The underlying persist error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Failed to determine an OS-appropriate configuration directory.
    #[error("failed to determine configuration directory for '{app_name}'")]
    NoConfigDirectory {
        /// The application name the lookup was performed for
        app_name: String,
    },

    /// An I/O error occurred while reading or writing a properties file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for property operations.
pub type Result<T> = std::result::Result<T, PropsError>;
