// SPDX-License-Identifier: MIT OR Apache-2.0

//! File-backed property store.
//!
//! This module provides the default high-level entry point of the crate:
//! [`PropertyStore`] owns a property tree, loads it from a properties file,
//! exposes key lookups and top-level assignment, and writes the tree back out.

use crate::adapters::DottedFormat;
use crate::domain::{Namespace, PropertyKey, PropertyNode, PropsError, Result};
use crate::ports::{PropertyFormat, WriteOptions};
use chrono::Local;
use directories::ProjectDirs;
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Timestamp layout for the optional save header, e.g.
/// `Sat Feb 10 16:07:17 +00:00 2018`.
const TIMESTAMP_FORMAT: &str = "%a %b %d %H:%M:%S %Z %Y";

/// Options controlling how a store is saved to disk.
///
/// Both options default to `true`.
///
/// # Examples
///
/// ```
/// use dotprops::service::SaveOptions;
///
/// let options = SaveOptions::default();
/// assert!(options.include_timestamp);
/// assert!(options.include_comments);
/// ```
#[derive(Clone, Debug)]
pub struct SaveOptions {
    /// Whether a timestamp comment line is written before the body.
    pub include_timestamp: bool,
    /// Whether each property's comments are written before its line.
    pub include_comments: bool,
}

impl Default for SaveOptions {
    fn default() -> Self {
        Self {
            include_timestamp: true,
            include_comments: true,
        }
    }
}

/// A file-backed hierarchical property store.
///
/// The store holds the root [`Namespace`] of a property tree and pairs it with
/// a [`DottedFormat`] codec. Every [`load`](PropertyStore::load) discards the
/// previous tree and rebuilds it from scratch; the tree is then read and
/// mutated in memory until an explicit [`save`](PropertyStore::save).
///
/// # Thread Safety
///
/// A store is single-threaded by design. Concurrent use of one instance from
/// multiple threads is out of scope; use independent instances or external
/// synchronization.
///
/// # Examples
///
/// ```no_run
/// use dotprops::service::PropertyStore;
///
/// # fn main() -> dotprops::domain::Result<()> {
/// let mut store = PropertyStore::new();
/// if store.load("app.properties")? {
///     if let Some(host) = store.value("database.host") {
///         println!("connecting to {host}");
///     }
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct PropertyStore {
    root: Namespace,
    format: DottedFormat,
}

impl PropertyStore {
    /// Creates an empty store with the default `#` comment marker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty store with a custom comment marker.
    ///
    /// # Examples
    ///
    /// ```
    /// use dotprops::service::PropertyStore;
    ///
    /// let store = PropertyStore::with_marker("//");
    /// ```
    pub fn with_marker(marker: impl Into<String>) -> Self {
        Self {
            root: Namespace::new(),
            format: DottedFormat::with_marker(marker),
        }
    }

    /// Loads a properties file, replacing the current tree.
    ///
    /// The previous tree is discarded before the file is examined. Returns
    /// `Ok(false)` if `path` is not an existing file, leaving the store empty;
    /// `Ok(true)` once the file has been parsed.
    ///
    /// # Errors
    ///
    /// Propagates I/O failures and structural conflicts in the document.
    /// Malformed lines are skipped, not errors.
    ///
    /// # Examples
    ///
    /// ```
    /// use dotprops::service::PropertyStore;
    ///
    /// # fn main() -> dotprops::domain::Result<()> {
    /// let mut store = PropertyStore::new();
    /// assert!(!store.load("/nonexistent/app.properties")?);
    /// # Ok(())
    /// # }
    /// ```
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<bool> {
        let path = path.as_ref();
        self.root.clear();

        if !path.is_file() {
            tracing::debug!("properties file not found: {}", path.display());
            return Ok(false);
        }

        let content = fs::read_to_string(path)?;
        self.root = self.format.parse(&content)?;
        tracing::debug!(
            "loaded {} top-level entries from {}",
            self.root.len(),
            path.display()
        );
        Ok(true)
    }

    /// Loads the properties file from the OS-appropriate configuration
    /// directory, e.g. `~/.config/myapp/config.properties` on Linux.
    ///
    /// # Arguments
    ///
    /// * `app_name` - The application name (e.g., "myapp")
    /// * `qualifier` - The organization/qualifier (e.g., "com.example")
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use dotprops::service::PropertyStore;
    ///
    /// # fn main() -> dotprops::domain::Result<()> {
    /// let mut store = PropertyStore::new();
    /// store.load_from_default_location("myapp", "com.example")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn load_from_default_location(&mut self, app_name: &str, qualifier: &str) -> Result<bool> {
        let proj_dirs = ProjectDirs::from(qualifier, "", app_name).ok_or_else(|| {
            PropsError::NoConfigDirectory {
                app_name: app_name.to_string(),
            }
        })?;
        let config_file = proj_dirs.config_dir().join("config.properties");
        self.load(config_file)
    }

    /// Saves the tree to a properties file.
    ///
    /// Missing parent directories are created. The write is atomic: the
    /// document is written to a temporary file in the target directory and
    /// renamed over the destination, so a failure mid-write never leaves a
    /// truncated file behind.
    ///
    /// With `include_timestamp` the first line is a marker-prefixed local
    /// timestamp, always on its own line.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use dotprops::service::{PropertyStore, SaveOptions};
    ///
    /// # fn main() -> dotprops::domain::Result<()> {
    /// let mut store = PropertyStore::new();
    /// store.set("app.name", "demo")?;
    /// store.save("out/app.properties", &SaveOptions::default())?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn save(&self, path: impl AsRef<Path>, options: &SaveOptions) -> Result<()> {
        let path = path.as_ref();

        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => {
                fs::create_dir_all(parent)?;
                parent
            }
            _ => Path::new("."),
        };

        let timestamp_header = options
            .include_timestamp
            .then(|| Local::now().format(TIMESTAMP_FORMAT).to_string());
        let text = self.format.serialize(
            &self.root,
            &WriteOptions {
                include_comments: options.include_comments,
                timestamp_header,
            },
        );

        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(text.as_bytes())?;
        tmp.persist(path).map_err(|e| PropsError::Persist {
            path: path.to_path_buf(),
            source: Box::new(e),
        })?;

        tracing::debug!("saved properties to {}", path.display());
        Ok(())
    }

    /// Returns the top-level entry with the given name.
    ///
    /// The result is either a namespace handle for nested access or a leaf
    /// whose value is reachable through [`PropertyNode::as_value`].
    pub fn get(&self, key: &str) -> Option<&PropertyNode> {
        self.root.child(key)
    }

    /// Resolves a full dotted key path to a leaf value.
    ///
    /// # Examples
    ///
    /// ```
    /// use dotprops::service::PropertyStore;
    ///
    /// # fn main() -> dotprops::domain::Result<()> {
    /// let mut store = PropertyStore::new();
    /// store.set("a.b", "12")?;
    /// assert_eq!(store.value("a.b"), Some("12"));
    /// assert_eq!(store.value("a"), None);
    /// # Ok(())
    /// # }
    /// ```
    pub fn value(&self, key: &str) -> Option<&str> {
        self.root.value(&PropertyKey::from(key))
    }

    /// Returns `true` if a top-level entry with the given name exists.
    pub fn contains(&self, key: &str) -> bool {
        self.root.contains(key)
    }

    /// Binds a key to a string value, overwriting an existing leaf.
    ///
    /// Accepts a plain top-level name or a full dotted path; intermediate
    /// namespaces are created as needed.
    ///
    /// # Errors
    ///
    /// Returns [`PropsError::Conflict`] if the key crosses an existing node of
    /// the incompatible kind.
    pub fn set(&mut self, key: &str, value: impl Into<String>) -> Result<()> {
        let mut pending = Vec::new();
        self.root.bind(&PropertyKey::from(key), value, &mut pending)
    }

    /// Returns the root namespace of the tree.
    pub fn root(&self) -> &Namespace {
        &self.root
    }

    /// Returns a mutable reference to the root namespace.
    pub fn root_mut(&mut self) -> &mut Namespace {
        &mut self.root
    }

    /// Discards the current tree.
    pub fn clear(&mut self) {
        self.root.clear();
    }

    /// Returns the comment marker in use.
    pub fn marker(&self) -> &str {
        self.format.marker()
    }
}
