//! Rendering document trees back into YAML or JSON text.

use anyhow::{Context, Result};

use crate::document::node::{Node, ScalarTag};

/// Serializes a single document root as YAML.
pub fn to_yaml_string(node: &Node) -> Result<String> {
    serde_yaml::to_string(&yaml_from_node(node)?).context("failed to render YAML")
}

/// Serializes multiple document roots as one YAML stream with `---`
/// separators.
pub fn to_yaml_stream(documents: &[Node]) -> Result<String> {
    let mut rendered = Vec::with_capacity(documents.len());
    for document in documents {
        rendered.push(to_yaml_string(document)?);
    }

    Ok(rendered.join("---\n"))
}

/// Serializes a single document root as pretty-printed JSON.
pub fn to_json_string(node: &Node) -> Result<String> {
    serde_json::to_string_pretty(&json_from_node(node)?).context("failed to render JSON")
}

fn yaml_from_node(node: &Node) -> Result<serde_yaml::Value> {
    match node {
        Node::Mapping(pairs) => {
            let mut mapping = serde_yaml::Mapping::with_capacity(pairs.len());
            for (key, value) in pairs {
                mapping.insert(
                    serde_yaml::Value::String(key.value.clone()),
                    yaml_from_node(value)?,
                );
            }
            Ok(serde_yaml::Value::Mapping(mapping))
        }

        Node::Sequence(items) => Ok(serde_yaml::Value::Sequence(
            items.iter().map(yaml_from_node).collect::<Result<_>>()?,
        )),

        Node::Scalar(scalar) => match scalar.tag {
            ScalarTag::Str | ScalarTag::Timestamp => {
                Ok(serde_yaml::Value::String(scalar.value.clone()))
            }
            ScalarTag::Int => {
                let i: i64 = scalar.value.parse().with_context(|| {
                    format!("scalar '{}' is not a valid int", scalar.value)
                })?;
                Ok(serde_yaml::Value::Number(i.into()))
            }
            ScalarTag::Float => {
                let f: f64 = scalar.value.parse().with_context(|| {
                    format!("scalar '{}' is not a valid float", scalar.value)
                })?;
                Ok(serde_yaml::Value::Number(f.into()))
            }
            ScalarTag::Bool => {
                let b: bool = scalar.value.parse().with_context(|| {
                    format!("scalar '{}' is not a valid bool", scalar.value)
                })?;
                Ok(serde_yaml::Value::Bool(b))
            }
            ScalarTag::Null => Ok(serde_yaml::Value::Null),
        },
    }
}

fn json_from_node(node: &Node) -> Result<serde_json::Value> {
    match node {
        Node::Mapping(pairs) => {
            let mut object = serde_json::Map::with_capacity(pairs.len());
            for (key, value) in pairs {
                object.insert(key.value.clone(), json_from_node(value)?);
            }
            Ok(serde_json::Value::Object(object))
        }

        Node::Sequence(items) => Ok(serde_json::Value::Array(
            items.iter().map(json_from_node).collect::<Result<_>>()?,
        )),

        Node::Scalar(scalar) => match scalar.tag {
            ScalarTag::Str | ScalarTag::Timestamp => {
                Ok(serde_json::Value::String(scalar.value.clone()))
            }
            ScalarTag::Int => {
                let i: i64 = scalar.value.parse().with_context(|| {
                    format!("scalar '{}' is not a valid int", scalar.value)
                })?;
                Ok(serde_json::Value::Number(i.into()))
            }
            ScalarTag::Float => {
                let f: f64 = scalar.value.parse().with_context(|| {
                    format!("scalar '{}' is not a valid float", scalar.value)
                })?;
                serde_json::Number::from_f64(f)
                    .map(serde_json::Value::Number)
                    .with_context(|| format!("float '{}' cannot be rendered as JSON", f))
            }
            ScalarTag::Bool => {
                let b: bool = scalar.value.parse().with_context(|| {
                    format!("scalar '{}' is not a valid bool", scalar.value)
                })?;
                Ok(serde_json::Value::Bool(b))
            }
            ScalarTag::Null => Ok(serde_json::Value::Null),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::loader::load_documents;

    #[test]
    fn test_yaml_round_trip_preserves_key_order() {
        let input = "zulu: 1\nalpha: 2\nmike: 3\n";
        let documents = load_documents(input).unwrap();
        assert_eq!(to_yaml_string(&documents[0]).unwrap(), input);
    }

    #[test]
    fn test_yaml_stream_rendering() {
        let documents = load_documents("---\nfoo: bar\n---\nbar: foo\n").unwrap();
        assert_eq!(
            to_yaml_stream(&documents).unwrap(),
            "foo: bar\n---\nbar: foo\n"
        );
    }

    #[test]
    fn test_json_rendering() {
        let documents = load_documents("name: one\ncount: 2\n").unwrap();
        assert_eq!(
            to_json_string(&documents[0]).unwrap(),
            "{\n  \"name\": \"one\",\n  \"count\": 2\n}"
        );
    }
}
