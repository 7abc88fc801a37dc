//! Type bridge between native values and document nodes.
//!
//! Callers hand a [`Value`] to Set and read resolved nodes back as `Value`s.
//! The scalar tag on a node decides the target type of the reverse
//! conversion; timestamps use the RFC3339 format.
//!
//! # Example
//!
//! ```
//! use yamlgrab::convert::Value;
//! use yamlgrab::document::node::{Node, Scalar};
//!
//! let node = Value::from(42).into_node();
//! assert_eq!(node, Node::Scalar(Scalar::int(42)));
//! assert_eq!(Value::from_node(&node).unwrap(), Value::Int(42));
//! ```

use chrono::{DateTime, FixedOffset};
use indexmap::IndexMap;

use crate::document::node::{Node, Scalar, ScalarTag};
use crate::error::Error;

/// A native value: scalars, timestamps, and nested maps/lists.
///
/// Maps preserve insertion order, matching the ordered mapping nodes they
/// convert into.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Timestamp(DateTime<FixedOffset>),
    Null,
    Mapping(IndexMap<String, Value>),
    List(Vec<Value>),
}

impl Value {
    /// Converts this value into a document node.
    pub fn into_node(self) -> Node {
        match self {
            Value::String(s) => Node::Scalar(Scalar::string(s)),
            Value::Int(i) => Node::Scalar(Scalar::int(i)),
            Value::Float(f) => Node::Scalar(Scalar::float(f)),
            Value::Bool(b) => Node::Scalar(Scalar::bool(b)),
            Value::Timestamp(ts) => Node::Scalar(Scalar {
                value: ts.to_rfc3339(),
                tag: ScalarTag::Timestamp,
            }),
            Value::Null => Node::Scalar(Scalar::null()),
            Value::Mapping(entries) => Node::Mapping(
                entries
                    .into_iter()
                    .map(|(key, value)| (Scalar::string(key), value.into_node()))
                    .collect(),
            ),
            Value::List(items) => {
                Node::Sequence(items.into_iter().map(Value::into_node).collect())
            }
        }
    }

    /// Converts a document node back into a native value, using the scalar
    /// tag to pick the target type.
    pub fn from_node(node: &Node) -> Result<Value, Error> {
        match node {
            Node::Mapping(pairs) => {
                let mut entries = IndexMap::with_capacity(pairs.len());
                for (key, value) in pairs {
                    entries.insert(key.value.clone(), Value::from_node(value)?);
                }
                Ok(Value::Mapping(entries))
            }

            Node::Sequence(items) => Ok(Value::List(
                items.iter().map(Value::from_node).collect::<Result<_, _>>()?,
            )),

            Node::Scalar(scalar) => match scalar.tag {
                ScalarTag::Str => Ok(Value::String(scalar.value.clone())),
                ScalarTag::Int => scalar
                    .value
                    .parse::<i64>()
                    .map(Value::Int)
                    .map_err(|err| invalid_scalar(scalar, "int", &err.to_string())),
                ScalarTag::Float => scalar
                    .value
                    .parse::<f64>()
                    .map(Value::Float)
                    .map_err(|err| invalid_scalar(scalar, "float", &err.to_string())),
                ScalarTag::Bool => scalar
                    .value
                    .parse::<bool>()
                    .map(Value::Bool)
                    .map_err(|err| invalid_scalar(scalar, "bool", &err.to_string())),
                ScalarTag::Timestamp => DateTime::parse_from_rfc3339(&scalar.value)
                    .map(Value::Timestamp)
                    .map_err(|err| invalid_scalar(scalar, "timestamp", &err.to_string())),
                ScalarTag::Null => Ok(Value::Null),
            },
        }
    }
}

fn invalid_scalar(scalar: &Scalar, target: &str, reason: &str) -> Error {
    Error::InvalidOperation(format!(
        "failed to translate scalar '{}' into {}: {}",
        scalar.value, target, reason
    ))
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_round_trips() {
        for value in [
            Value::from("foobar"),
            Value::from(1337),
            Value::from(13.37),
            Value::from(true),
            Value::Null,
        ] {
            assert_eq!(Value::from_node(&value.clone().into_node()).unwrap(), value);
        }
    }

    #[test]
    fn test_timestamp_round_trip() {
        let ts = DateTime::parse_from_rfc3339("1955-11-05T09:00:00+00:00").unwrap();
        let node = Value::Timestamp(ts).into_node();
        assert_eq!(node, Node::Scalar(Scalar {
            value: "1955-11-05T09:00:00+00:00".to_string(),
            tag: ScalarTag::Timestamp,
        }));
        assert_eq!(Value::from_node(&node).unwrap(), Value::Timestamp(ts));
    }

    #[test]
    fn test_mapping_preserves_insertion_order() {
        let mut entries = IndexMap::new();
        entries.insert("key".to_string(), Value::from("value"));
        entries.insert("foo".to_string(), Value::from("bar"));

        let node = Value::Mapping(entries.clone()).into_node();
        let Node::Mapping(pairs) = &node else {
            panic!("expected a mapping");
        };
        assert_eq!(pairs[0].0, Scalar::string("key"));
        assert_eq!(pairs[1].0, Scalar::string("foo"));

        assert_eq!(Value::from_node(&node).unwrap(), Value::Mapping(entries));
    }

    #[test]
    fn test_list_round_trip() {
        let value = Value::List(vec![
            Value::from("one"),
            Value::from("two"),
            Value::from("three"),
        ]);
        assert_eq!(Value::from_node(&value.clone().into_node()).unwrap(), value);
    }

    #[test]
    fn test_unparsable_int_scalar_fails() {
        let node = Node::Scalar(Scalar {
            value: "not-a-number".to_string(),
            tag: ScalarTag::Int,
        });
        assert!(Value::from_node(&node).is_err());
    }
}
