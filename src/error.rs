//! Error types for path parsing and tree resolution.

use std::fmt;

use crate::path::PathStyle;

/// Errors that can occur while parsing a path string or resolving a path
/// against a document tree.
///
/// Every variant is terminal: an error always means the provided path or
/// value does not fit the document, never a transient condition.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// The path string does not match the expected grammar.
    InvalidPath {
        style: PathStyle,
        path: String,
        reason: String,
    },
    /// A section required a different node kind than the one found.
    TypeMismatch {
        expected: &'static str,
        found: String,
        at: String,
    },
    /// A field name was not found in a mapping.
    KeyNotFound { key: String, available: Vec<String> },
    /// A list index was outside the valid range.
    IndexOutOfRange { index: i64, length: usize },
    /// No list element carries the given identifier/name combination.
    EntryNotFound { id: String, name: String },
    /// A structurally nonsensical request, e.g. deleting through a scalar.
    InvalidOperation(String),
    /// The root path has no parent.
    NoParent { path: String },
    /// A scalar carries a type tag the type bridge does not recognize.
    UnknownTag { tag: String },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidPath {
                style,
                path,
                reason,
            } => write!(f, "invalid {} style path '{}': {}", style, path, reason),
            Error::TypeMismatch {
                expected,
                found,
                at,
            } => write!(
                f,
                "failed to traverse tree, expected {} but found type {} at {}",
                expected, found, at
            ),
            Error::KeyNotFound { key, available } => write!(
                f,
                "no key '{}' found in map, available keys: {}",
                key,
                available.join(", ")
            ),
            Error::IndexOutOfRange { index, length } => write!(
                f,
                "failed to traverse tree, provided list index {} is not in range: 0..{}",
                index,
                *length as i64 - 1
            ),
            Error::EntryNotFound { id, name } => {
                write!(f, "there is no entry {}={} in the list", id, name)
            }
            Error::InvalidOperation(message) => write!(f, "{}", message),
            Error::NoParent { path } => {
                write!(f, "path {} does not have a parent", path)
            }
            Error::UnknownTag { tag } => write!(f, "unknown YAML node tag {}", tag),
        }
    }
}

impl std::error::Error for Error {}
