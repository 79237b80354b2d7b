// SPDX-License-Identifier: MIT OR Apache-2.0

//! Property key newtype for type-safe key handling.
//!
//! This module provides the `PropertyKey` type, which is a newtype wrapper
//! around `String` that provides type safety for dotted property keys and
//! prevents accidental string confusion.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// A type-safe wrapper for dotted property keys.
///
/// `PropertyKey` wraps a `String` holding a dot-delimited key path such as
/// `database.connection.host`. Each `.` in the key denotes one level of
/// nesting in the property tree; the ordered segments are available through
/// [`PropertyKey::segments`].
///
/// # Examples
///
/// ```
/// use dotprops::domain::property_key::PropertyKey;
///
/// let key = PropertyKey::from("database.host");
/// assert_eq!(key.as_str(), "database.host");
/// assert_eq!(key.segments().collect::<Vec<_>>(), vec!["database", "host"]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyKey(String);

impl PropertyKey {
    /// Creates a new `PropertyKey` from a `String`.
    ///
    /// # Examples
    ///
    /// ```
    /// use dotprops::domain::property_key::PropertyKey;
    ///
    /// let key = PropertyKey::new("app.name".to_string());
    /// assert_eq!(key.as_str(), "app.name");
    /// ```
    pub fn new(key: String) -> Self {
        PropertyKey(key)
    }

    /// Returns the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Converts the `PropertyKey` into its inner `String`.
    pub fn into_string(self) -> String {
        self.0
    }

    /// Returns the ordered path segments of the key.
    ///
    /// Segments are produced by splitting on `.`. A key without dots yields
    /// a single segment; consecutive dots yield empty segments, which are
    /// treated as ordinary (if unusual) child names by the resolver.
    ///
    /// # Examples
    ///
    /// ```
    /// use dotprops::domain::property_key::PropertyKey;
    ///
    /// let key = PropertyKey::from("a.b.c");
    /// assert_eq!(key.segments().count(), 3);
    ///
    /// let flat = PropertyKey::from("name");
    /// assert_eq!(flat.segments().collect::<Vec<_>>(), vec!["name"]);
    /// ```
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('.')
    }

    /// Returns the number of path segments in the key.
    pub fn depth(&self) -> usize {
        self.segments().count()
    }
}

impl From<String> for PropertyKey {
    fn from(s: String) -> Self {
        PropertyKey(s)
    }
}

impl From<&str> for PropertyKey {
    fn from(s: &str) -> Self {
        PropertyKey(s.to_string())
    }
}

impl From<PropertyKey> for String {
    fn from(key: PropertyKey) -> Self {
        key.0
    }
}

impl AsRef<str> for PropertyKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PropertyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Hash for PropertyKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}
