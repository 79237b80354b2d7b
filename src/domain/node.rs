// SPDX-License-Identifier: MIT OR Apache-2.0

//! Property tree nodes and the key-path resolver.
//!
//! This module contains the core data model of the crate: a property tree in
//! which every node is either a [`Namespace`] (an ordered mapping from segment
//! name to child node) or a [`Leaf`] (a terminal string value plus the comment
//! lines that preceded it in the source document).
//!
//! The central algorithm lives in [`Namespace::bind`]: it walks a dotted key
//! path segment by segment, lazily creating intermediate namespaces, and
//! enforces the structural invariant that a path bound to a scalar can never
//! be reinterpreted as a parent namespace (or vice versa).

use crate::domain::errors::{PropsError, Result};
use crate::domain::property_key::PropertyKey;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of a property tree node.
///
/// Used in conflict reporting and for introspecting lookup results.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeKind {
    /// A nested grouping of properties with no directly assigned value.
    Namespace,
    /// A terminal node holding a string value and its comments.
    Leaf,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKind::Namespace => write!(f, "namespace"),
            NodeKind::Leaf => write!(f, "leaf"),
        }
    }
}

/// A terminal property value together with its associated comments.
///
/// Comments are stored in source order: every comment line that immediately
/// preceded the property line in the parsed document is attached to the leaf
/// created for that property.
///
/// # Examples
///
/// ```
/// use dotprops::domain::node::Leaf;
///
/// let leaf = Leaf::new("12", vec!["hello".to_string()]);
/// assert_eq!(leaf.value(), "12");
/// assert_eq!(leaf.comments(), ["hello"]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Leaf {
    value: String,
    comments: Vec<String>,
}

impl Leaf {
    /// Creates a new leaf with the given value and comments.
    pub fn new(value: impl Into<String>, comments: Vec<String>) -> Self {
        Self {
            value: value.into(),
            comments,
        }
    }

    /// Returns the leaf's string value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replaces the leaf's value, leaving its comments untouched.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Returns the comments attached to this leaf, in source order.
    pub fn comments(&self) -> &[String] {
        &self.comments
    }
}

/// A node in the property tree: either a namespace or a leaf.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PropertyNode {
    /// A nested grouping of properties.
    Namespace(Namespace),
    /// A terminal string value with comments.
    Leaf(Leaf),
}

impl PropertyNode {
    /// Returns the kind of this node.
    pub fn kind(&self) -> NodeKind {
        match self {
            PropertyNode::Namespace(_) => NodeKind::Namespace,
            PropertyNode::Leaf(_) => NodeKind::Leaf,
        }
    }

    /// Returns the leaf value if this node is a leaf.
    ///
    /// # Examples
    ///
    /// ```
    /// use dotprops::domain::node::{Leaf, PropertyNode};
    ///
    /// let node = PropertyNode::Leaf(Leaf::new("321", Vec::new()));
    /// assert_eq!(node.as_value(), Some("321"));
    /// ```
    pub fn as_value(&self) -> Option<&str> {
        match self {
            PropertyNode::Leaf(leaf) => Some(leaf.value()),
            PropertyNode::Namespace(_) => None,
        }
    }

    /// Returns a reference to the namespace if this node is a namespace.
    pub fn as_namespace(&self) -> Option<&Namespace> {
        match self {
            PropertyNode::Namespace(ns) => Some(ns),
            PropertyNode::Leaf(_) => None,
        }
    }

    /// Returns a reference to the leaf if this node is a leaf.
    pub fn as_leaf(&self) -> Option<&Leaf> {
        match self {
            PropertyNode::Leaf(leaf) => Some(leaf),
            PropertyNode::Namespace(_) => None,
        }
    }
}

/// An ordered mapping from segment name to child node.
///
/// Children are kept in first-seen insertion order, which is the order the
/// serializer walks them in. The root of every property tree is a namespace.
///
/// # Examples
///
/// ```
/// use dotprops::domain::node::Namespace;
/// use dotprops::domain::property_key::PropertyKey;
///
/// let mut root = Namespace::new();
/// let mut pending = Vec::new();
/// root.bind(&PropertyKey::from("a.b"), "12", &mut pending).unwrap();
///
/// assert_eq!(root.value(&PropertyKey::from("a.b")), Some("12"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Namespace {
    children: Vec<(String, PropertyNode)>,
}

impl Namespace {
    /// Creates a new empty namespace.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of direct children.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Returns `true` if the namespace has no children.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns `true` if a direct child with the given name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Returns the direct child with the given name, if any.
    pub fn child(&self, name: &str) -> Option<&PropertyNode> {
        self.position(name).map(|i| &self.children[i].1)
    }

    /// Returns a mutable reference to the direct child with the given name.
    pub fn child_mut(&mut self, name: &str) -> Option<&mut PropertyNode> {
        self.position(name).map(|i| &mut self.children[i].1)
    }

    /// Iterates over the direct children in insertion order.
    pub fn children(&self) -> impl Iterator<Item = (&str, &PropertyNode)> {
        self.children.iter().map(|(name, node)| (name.as_str(), node))
    }

    /// Removes all children.
    pub fn clear(&mut self) {
        self.children.clear();
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.children.iter().position(|(n, _)| n == name)
    }

    /// Binds a dotted key path to a leaf value, creating intermediate
    /// namespaces as needed.
    ///
    /// The key's segments are walked one at a time with an explicit loop:
    ///
    /// - An existing namespace child is descended into; an existing leaf child
    ///   encountered before the final segment is a structural conflict (a
    ///   scalar cannot be reinterpreted as a namespace).
    /// - A missing child before the final segment becomes a new empty
    ///   namespace.
    /// - At the final segment, an existing namespace is a conflict in the
    ///   other direction; an existing leaf is overwritten (last write wins);
    ///   otherwise a new leaf is created with `value` and the contents of
    ///   `pending`.
    ///
    /// On success `pending` is drained into the leaf and left empty. An
    /// overwrite keeps the leaf's original comments unless `pending` is
    /// non-empty, in which case they are replaced.
    ///
    /// # Errors
    ///
    /// Returns [`PropsError::Conflict`] when the path crosses an existing node
    /// of the incompatible kind. The reported path is the dotted prefix up to
    /// and including the offending segment, and the tree is left unmodified
    /// beyond any intermediate namespaces already created for earlier
    /// segments.
    ///
    /// # Examples
    ///
    /// ```
    /// use dotprops::domain::node::Namespace;
    /// use dotprops::domain::property_key::PropertyKey;
    ///
    /// let mut root = Namespace::new();
    /// let mut pending = vec!["port to listen on".to_string()];
    /// root.bind(&PropertyKey::from("server.port"), "8080", &mut pending).unwrap();
    ///
    /// assert!(pending.is_empty());
    /// assert!(root.bind(&PropertyKey::from("server"), "oops", &mut pending).is_err());
    /// ```
    pub fn bind(
        &mut self,
        key: &PropertyKey,
        value: impl Into<String>,
        pending: &mut Vec<String>,
    ) -> Result<()> {
        let segments: Vec<&str> = key.segments().collect();
        // split('.') yields at least one segment for any input
        let Some((last, parents)) = segments.split_last() else {
            return Ok(());
        };

        let mut current = self;
        let mut walked = String::new();
        for segment in parents {
            if !walked.is_empty() {
                walked.push('.');
            }
            walked.push_str(segment);

            let index = match current.position(segment) {
                Some(i) => i,
                None => {
                    current
                        .children
                        .push((segment.to_string(), PropertyNode::Namespace(Namespace::new())));
                    current.children.len() - 1
                }
            };
            current = match &mut current.children[index].1 {
                PropertyNode::Namespace(ns) => ns,
                PropertyNode::Leaf(_) => {
                    return Err(PropsError::Conflict {
                        path: walked,
                        existing: NodeKind::Leaf,
                        requested: NodeKind::Namespace,
                    });
                }
            };
        }

        if !walked.is_empty() {
            walked.push('.');
        }
        walked.push_str(last);

        match current.position(last) {
            Some(index) => match &mut current.children[index].1 {
                PropertyNode::Namespace(_) => Err(PropsError::Conflict {
                    path: walked,
                    existing: NodeKind::Namespace,
                    requested: NodeKind::Leaf,
                }),
                PropertyNode::Leaf(leaf) => {
                    leaf.set_value(value);
                    if !pending.is_empty() {
                        leaf.comments = std::mem::take(pending);
                    }
                    Ok(())
                }
            },
            None => {
                current.children.push((
                    last.to_string(),
                    PropertyNode::Leaf(Leaf::new(value, std::mem::take(pending))),
                ));
                Ok(())
            }
        }
    }

    /// Resolves a full dotted key path to the node it is bound to.
    ///
    /// Returns `None` if any segment is missing or if the path descends
    /// through a leaf.
    pub fn get(&self, key: &PropertyKey) -> Option<&PropertyNode> {
        let mut current = self;
        let mut segments = key.segments().peekable();
        while let Some(segment) = segments.next() {
            let node = current.child(segment)?;
            if segments.peek().is_none() {
                return Some(node);
            }
            current = node.as_namespace()?;
        }
        None
    }

    /// Resolves a full dotted key path to a leaf value.
    ///
    /// Returns `None` if the path is unbound or bound to a namespace.
    pub fn value(&self, key: &PropertyKey) -> Option<&str> {
        self.get(key).and_then(PropertyNode::as_value)
    }
}
