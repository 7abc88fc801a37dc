//! Delete resolution: splicing the addressed node out of its parent.

use crate::access::get::{effective_index, get_mut, resolve_undetermined};
use crate::access::list::index_by_identifier_and_name;
use crate::document::node::Node;
use crate::error::Error;
use crate::path::{parse_path, Path, Section};

/// Convenience function for [`delete`], which parses the given path string
/// and then delegates to it.
pub fn delete_path(node: &mut Node, path_string: &str) -> Result<Node, Error> {
    let path = parse_path(path_string)?;
    delete(node, &path)
}

/// Removes the node at the provided path and returns it.
///
/// The parent is resolved first; a mapping parent loses the whole key/value
/// pair, a sequence parent loses exactly one element with all following
/// elements shifting down. The relative order of the remaining entries is
/// untouched.
pub fn delete(node: &mut Node, path: &Path) -> Result<Node, Error> {
    let parent_path = path.parent()?;
    let Some(last) = path.sections().last() else {
        return Err(Error::NoParent {
            path: path.to_string(),
        });
    };

    let parent = get_mut(node, &parent_path)?;
    let last = resolve_undetermined(parent, last)?;

    match parent {
        Node::Mapping(pairs) => match &last {
            Section::Field(name) => {
                let idx = pairs
                    .iter()
                    .position(|(k, _)| k.value == *name)
                    .ok_or_else(|| Error::KeyNotFound {
                        key: name.clone(),
                        available: pairs.iter().map(|(k, _)| k.value.clone()).collect(),
                    })?;
                Ok(pairs.remove(idx).1)
            }
            _ => Err(delete_failed(path)),
        },

        Node::Sequence(items) => {
            let idx = match &last {
                Section::Index(idx) => effective_index(*idx, items.len())?,
                Section::Named { id, name } => index_by_identifier_and_name(items, id, name)?,
                _ => return Err(delete_failed(path)),
            };
            Ok(items.remove(idx))
        }

        Node::Scalar(_) => Err(delete_failed(path)),
    }
}

fn delete_failed(path: &Path) -> Error {
    Error::InvalidOperation(format!(
        "failed to delete path {}, because it could not be found",
        path
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::access::get::get_path;
    use crate::document::node::Scalar;

    fn tree() -> Node {
        Node::Mapping(vec![(
            Scalar::string("yaml"),
            Node::Mapping(vec![
                (
                    Scalar::string("map"),
                    Node::Mapping(vec![
                        (
                            Scalar::string("before"),
                            Node::Scalar(Scalar::string("after")),
                        ),
                        (Scalar::string("intA"), Node::Scalar(Scalar::int(42))),
                    ]),
                ),
                (
                    Scalar::string("simple-list"),
                    Node::Sequence(
                        ["A", "B", "C", "D", "E"]
                            .into_iter()
                            .map(|s| Node::Scalar(Scalar::string(s)))
                            .collect(),
                    ),
                ),
            ]),
        )])
    }

    #[test]
    fn test_delete_mapping_entry() {
        let mut root = tree();
        let removed = delete_path(&mut root, "/yaml/map/before").unwrap();
        assert_eq!(removed, Node::Scalar(Scalar::string("after")));
        assert!(get_path(&root, "/yaml/map/before").is_err());

        let Node::Mapping(pairs) = get_path(&root, "/yaml/map").unwrap() else {
            panic!("expected a mapping");
        };
        assert_eq!(pairs.len(), 1);
    }

    #[test]
    fn test_delete_list_element_shifts_following_entries() {
        let mut root = tree();
        let removed = delete_path(&mut root, "/yaml/simple-list/1").unwrap();
        assert_eq!(removed, Node::Scalar(Scalar::string("B")));

        let Node::Sequence(items) = get_path(&root, "/yaml/simple-list").unwrap() else {
            panic!("expected a sequence");
        };
        let values: Vec<&str> = items
            .iter()
            .map(|item| match item {
                Node::Scalar(s) => s.value.as_str(),
                _ => panic!("expected scalars"),
            })
            .collect();
        assert_eq!(values, ["A", "C", "D", "E"]);
    }

    #[test]
    fn test_delete_root_has_no_parent() {
        let mut root = tree();
        let err = delete_path(&mut root, "/").unwrap_err();
        assert_eq!(err.to_string(), "path / does not have a parent");
    }

    #[test]
    fn test_delete_missing_key_fails() {
        let mut root = tree();
        let err = delete_path(&mut root, "/yaml/map/nope").unwrap_err();
        assert!(matches!(err, Error::KeyNotFound { .. }));
    }

    #[test]
    fn test_delete_through_scalar_fails() {
        let mut root = tree();
        let err = delete_path(&mut root, "/yaml/map/before/deeper").unwrap_err();
        assert_eq!(
            err.to_string(),
            "failed to delete path /yaml/map/before/deeper, because it could not be found"
        );
    }
}
