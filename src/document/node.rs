//! Document node representation.
//!
//! This module provides the core data structures for representing parsed
//! YAML/JSON documents in yamlgrab. A document is a tree of `Node`s: ordered
//! mappings, sequences, and tagged scalars. Mappings keep their entries in
//! insertion order, and that order is preserved across mutation.
//!
//! # Example
//!
//! ```
//! use yamlgrab::document::node::{Node, Scalar};
//!
//! let node = Node::Mapping(vec![
//!     (Scalar::string("name"), Node::Scalar(Scalar::string("yamlgrab"))),
//!     (Scalar::string("count"), Node::Scalar(Scalar::int(2))),
//! ]);
//!
//! assert!(node.is_mapping());
//! assert_eq!(node.kind_name(), "map");
//! ```

/// Type tag carried by every scalar node.
///
/// The tag decides how the scalar's string value is interpreted when it is
/// converted back into a native value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarTag {
    Str,
    Int,
    Float,
    Bool,
    Timestamp,
    Null,
}

impl ScalarTag {
    /// Returns the human-readable name of this tag, as used in error messages.
    pub fn name(&self) -> &'static str {
        match self {
            ScalarTag::Str => "string",
            ScalarTag::Int => "int",
            ScalarTag::Float => "float",
            ScalarTag::Bool => "bool",
            ScalarTag::Timestamp => "timestamp",
            ScalarTag::Null => "null",
        }
    }
}

/// A scalar value: its string representation plus a type tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scalar {
    pub value: String,
    pub tag: ScalarTag,
}

impl Scalar {
    pub fn string(value: impl Into<String>) -> Self {
        Scalar {
            value: value.into(),
            tag: ScalarTag::Str,
        }
    }

    pub fn int(value: i64) -> Self {
        Scalar {
            value: value.to_string(),
            tag: ScalarTag::Int,
        }
    }

    pub fn float(value: f64) -> Self {
        Scalar {
            value: value.to_string(),
            tag: ScalarTag::Float,
        }
    }

    pub fn bool(value: bool) -> Self {
        Scalar {
            value: value.to_string(),
            tag: ScalarTag::Bool,
        }
    }

    pub fn null() -> Self {
        Scalar {
            value: "null".to_string(),
            tag: ScalarTag::Null,
        }
    }
}

/// A node in a parsed document tree.
///
/// Mappings hold ordered `(key, value)` pairs; keys are always scalars and
/// are expected to be unique within one mapping. The document tree owns all
/// of its nodes, subtrees are never shared between parents.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Mapping(Vec<(Scalar, Node)>),
    Sequence(Vec<Node>),
    Scalar(Scalar),
}

impl Node {
    pub fn is_mapping(&self) -> bool {
        matches!(self, Node::Mapping(_))
    }

    pub fn is_sequence(&self) -> bool {
        matches!(self, Node::Sequence(_))
    }

    pub fn is_scalar(&self) -> bool {
        matches!(self, Node::Scalar(_))
    }

    /// Returns the kind of this node with a YAML specific view, as used in
    /// error messages: `map`, `list`, `complex-list` (a sequence whose
    /// elements are all mappings), or the scalar's tag name.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Node::Mapping(_) => "map",
            Node::Sequence(items) => {
                if !items.is_empty() && items.iter().all(Node::is_mapping) {
                    "complex-list"
                } else {
                    "list"
                }
            }
            Node::Scalar(scalar) => scalar.tag.name(),
        }
    }

    /// Looks up a mapping entry by its key string.
    pub fn value_by_key(&self, key: &str) -> Option<&Node> {
        match self {
            Node::Mapping(pairs) => pairs.iter().find(|(k, _)| k.value == key).map(|(_, v)| v),
            _ => None,
        }
    }
}
