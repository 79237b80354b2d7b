// SPDX-License-Identifier: MIT OR Apache-2.0

//! Line-oriented codec for the dotted properties format.
//!
//! This module provides [`DottedFormat`], the reader/writer for documents of
//! the form:
//!
//! ```text
//! #hello
//! a.b=12
//! a.c=test
//! d=321
//! ```
//!
//! Each line is either a property (`dotted.key.path=value`) or a comment
//! (marker-prefixed, default `#`). Comment lines attach to the next property
//! parsed; lines that are neither are skipped silently.

use crate::domain::{Namespace, PropertyKey, PropertyNode, Result};
use crate::ports::{PropertyFormat, WriteOptions};

/// The default comment marker.
pub const DEFAULT_COMMENT_MARKER: &str = "#";

/// Reader/writer for the dotted hierarchical properties format.
///
/// The comment marker is configurable per instance; everything else about the
/// line syntax is fixed.
///
/// # Reader behavior
///
/// Per line, trailing line terminators and leading tabs (not spaces) are
/// trimmed, then:
///
/// - a line starting with the marker has the marker and one following space
///   stripped and is buffered as a comment for the next property;
/// - a line shorter than two characters or without `=` is skipped;
/// - otherwise the line splits on the first `=`; the trimmed left side is the
///   dotted key path, the trimmed right side the value (empty allowed).
///
/// Comments never followed by a property are discarded at end of input.
///
/// # Writer behavior
///
/// Leaves are emitted depth-first in insertion order as `path=value` lines.
/// Comments are written back as `marker + text` with no separating space,
/// which is asymmetric with the reader; a comment that originally had one
/// space after the marker still round-trips to the same text.
///
/// # Examples
///
/// ```
/// use dotprops::adapters::DottedFormat;
/// use dotprops::ports::PropertyFormat;
/// use dotprops::domain::PropertyKey;
///
/// let format = DottedFormat::new();
/// let root = format.parse("#hello\na.b=12\na.c=test\nd=321").unwrap();
///
/// assert_eq!(root.value(&PropertyKey::from("a.b")), Some("12"));
/// assert_eq!(root.value(&PropertyKey::from("d")), Some("321"));
/// ```
#[derive(Debug, Clone)]
pub struct DottedFormat {
    marker: String,
}

impl DottedFormat {
    /// Creates a new format with the default `#` comment marker.
    pub fn new() -> Self {
        Self::with_marker(DEFAULT_COMMENT_MARKER)
    }

    /// Creates a new format with a custom comment marker.
    ///
    /// # Examples
    ///
    /// ```
    /// use dotprops::adapters::DottedFormat;
    /// use dotprops::ports::PropertyFormat;
    /// use dotprops::domain::PropertyKey;
    ///
    /// let format = DottedFormat::with_marker("//");
    /// let root = format.parse("// note\nkey=value").unwrap();
    /// let leaf = root.get(&PropertyKey::from("key")).unwrap().as_leaf().unwrap();
    /// assert_eq!(leaf.comments(), ["note"]);
    /// ```
    pub fn with_marker(marker: impl Into<String>) -> Self {
        Self {
            marker: marker.into(),
        }
    }

    /// Returns the comment marker in use.
    pub fn marker(&self) -> &str {
        &self.marker
    }

    /// Parses an iterator of lines into a property tree.
    ///
    /// This is the lazy-sequence form of [`PropertyFormat::parse`]; callers
    /// that already hold lines (e.g. from a buffered reader) can avoid
    /// re-joining them.
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::PropsError::Conflict`] when a key path reuses
    /// an existing node of the incompatible kind. Malformed lines are never
    /// an error.
    pub fn parse_lines<I, S>(&self, lines: I) -> Result<Namespace>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut root = Namespace::new();
        let mut pending: Vec<String> = Vec::new();
        let mut properties = 0usize;
        let mut skipped = 0usize;

        for raw in lines {
            let line = raw
                .as_ref()
                .trim_end_matches(['\r', '\n'])
                .trim_start_matches('\t');

            if let Some(comment) = line.strip_prefix(self.marker.as_str()) {
                let comment = comment.strip_prefix(' ').unwrap_or(comment);
                pending.push(comment.to_string());
                continue;
            }

            if line.len() < 2 || !line.contains('=') {
                if !line.is_empty() {
                    tracing::debug!("skipping non-property line: {}", line);
                    skipped += 1;
                }
                continue;
            }

            // split on the first '=' only; values may themselves contain '='
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            root.bind(&PropertyKey::from(key.trim()), value.trim(), &mut pending)?;
            properties += 1;
        }

        // comments with no following property are dropped
        if !pending.is_empty() {
            tracing::debug!("discarding {} trailing comment line(s)", pending.len());
        }
        tracing::debug!("parsed {} properties, skipped {} lines", properties, skipped);

        Ok(root)
    }

    fn flatten(&self, ns: &Namespace, prefix: &str, include_comments: bool, out: &mut Vec<String>) {
        for (name, node) in ns.children() {
            let path = if prefix.is_empty() {
                name.to_string()
            } else {
                format!("{prefix}.{name}")
            };
            match node {
                PropertyNode::Namespace(child) => {
                    self.flatten(child, &path, include_comments, out)
                }
                PropertyNode::Leaf(leaf) => {
                    if include_comments {
                        for comment in leaf.comments() {
                            out.push(format!("{}{}", self.marker, comment));
                        }
                    }
                    out.push(format!("{path}={}", leaf.value()));
                }
            }
        }
    }
}

impl Default for DottedFormat {
    fn default() -> Self {
        Self::new()
    }
}

impl PropertyFormat for DottedFormat {
    fn parse(&self, content: &str) -> Result<Namespace> {
        self.parse_lines(content.lines())
    }

    fn serialize(&self, root: &Namespace, options: &WriteOptions) -> String {
        let mut lines = Vec::new();
        // the header is always followed by a line break, never glued to the body
        if let Some(timestamp) = &options.timestamp_header {
            lines.push(format!("{}{}", self.marker, timestamp));
        }
        self.flatten(root, "", options.include_comments, &mut lines);
        lines.join("\n")
    }

    fn supported_extensions(&self) -> &[&str] {
        &["properties"]
    }
}
