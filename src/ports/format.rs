// SPDX-License-Identifier: MIT OR Apache-2.0

//! Property format trait definition.
//!
//! This module defines the `PropertyFormat` trait, which provides an interface
//! for reading and writing property trees in a concrete text format.

use crate::domain::{Namespace, Result};

/// Options controlling how a property tree is written out.
///
/// # Examples
///
/// ```
/// use dotprops::ports::WriteOptions;
///
/// let options = WriteOptions {
///     include_comments: false,
///     timestamp_header: Some("Sat Feb 10 16:07:17 EST 2018".to_string()),
/// };
/// assert!(!options.include_comments);
/// ```
#[derive(Clone, Debug, Default)]
pub struct WriteOptions {
    /// Whether leaf comments are emitted before each property line.
    pub include_comments: bool,
    /// An optional timestamp emitted as a comment line before the body.
    pub timestamp_header: Option<String>,
}

/// A trait for property document formats.
///
/// This trait defines the interface for implementing codecs that read a text
/// document into a property tree and flatten a tree back into text. The tree
/// shape is format-independent; formats differ only in line syntax.
///
/// # Key Format
///
/// Formats are expected to address nested properties with dot notation, so a
/// document such as:
///
/// ```text
/// database.host=localhost
/// database.port=5432
/// ```
///
/// parses into a `database` namespace holding `host` and `port` leaves.
///
/// # Examples
///
/// ```rust
/// use dotprops::ports::{PropertyFormat, WriteOptions};
/// use dotprops::domain::{Namespace, Result};
///
/// struct MyFormat;
///
/// impl PropertyFormat for MyFormat {
///     fn parse(&self, content: &str) -> Result<Namespace> {
///         // Implementation here
///         Ok(Namespace::new())
///     }
///
///     fn serialize(&self, root: &Namespace, options: &WriteOptions) -> String {
///         String::new()
///     }
///
///     fn supported_extensions(&self) -> &[&str] {
///         &["myformat"]
///     }
/// }
/// ```
pub trait PropertyFormat {
    /// Parses document content into a property tree.
    ///
    /// # Arguments
    ///
    /// * `content` - The raw content of the properties document
    ///
    /// # Returns
    ///
    /// * `Ok(Namespace)` - The root of the parsed tree
    /// * `Err(PropsError)` - A structural conflict occurred during parsing
    fn parse(&self, content: &str) -> Result<Namespace>;

    /// Flattens a property tree into document text.
    ///
    /// Re-parsing the returned text must reproduce a tree whose leaf values
    /// equal those of `root`. Comment round-tripping is format-specific and
    /// not guaranteed to be symmetric.
    fn serialize(&self, root: &Namespace, options: &WriteOptions) -> String;

    /// Returns the file extensions supported by this format.
    ///
    /// Extensions are listed without the leading dot.
    fn supported_extensions(&self) -> &[&str];
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PropertyKey;

    // Test implementation of PropertyFormat for testing purposes
    struct TestFormat;

    impl PropertyFormat for TestFormat {
        fn parse(&self, _content: &str) -> Result<Namespace> {
            let mut root = Namespace::new();
            let mut pending = Vec::new();
            root.bind(&PropertyKey::from("test.key"), "test.value", &mut pending)?;
            Ok(root)
        }

        fn serialize(&self, root: &Namespace, _options: &WriteOptions) -> String {
            root.children()
                .map(|(name, _)| name.to_string())
                .collect::<Vec<_>>()
                .join("\n")
        }

        fn supported_extensions(&self) -> &[&str] {
            &["test", "tst"]
        }
    }

    #[test]
    fn test_format_parse() {
        let format = TestFormat;
        let root = format.parse("dummy content").unwrap();
        assert_eq!(root.value(&PropertyKey::from("test.key")), Some("test.value"));
    }

    #[test]
    fn test_format_serialize() {
        let format = TestFormat;
        let root = format.parse("dummy content").unwrap();
        let text = format.serialize(&root, &WriteOptions::default());
        assert_eq!(text, "test");
    }

    #[test]
    fn test_format_supported_extensions() {
        let format = TestFormat;
        let extensions = format.supported_extensions();
        assert_eq!(extensions, &["test", "tst"]);
    }

    #[test]
    fn test_write_options_default() {
        let options = WriteOptions::default();
        assert!(!options.include_comments);
        assert!(options.timestamp_header.is_none());
    }
}
