//! Full-tree traversal: one fully-addressed path per scalar leaf.
//!
//! Sequences whose elements form a uniform named list are addressed by
//! identifier (`/list/name=one/key`), all other sequences by index. The
//! identifier entry itself is skipped, it is already encoded in the path.

use crate::access::list::identifier_in_named_list;
use crate::document::node::Node;
use crate::error::Error;
use crate::path::{parse_path, Path, Section};

/// Walks the tree and invokes the callback once per scalar leaf with the
/// fully-resolved path leading to it.
pub fn traverse_tree<F>(path: &Path, node: &Node, leaf_fn: &mut F)
where
    F: FnMut(&Path, &Node),
{
    match node {
        Node::Mapping(pairs) => {
            for (key, value) in pairs {
                traverse_tree(&path.push(Section::field(key.value.clone())), value, leaf_fn);
            }
        }

        Node::Sequence(items) => {
            if let Some(id) = identifier_in_named_list(items) {
                for item in items {
                    let Node::Mapping(pairs) = item else {
                        continue;
                    };

                    let name = pairs
                        .iter()
                        .find(|(k, _)| k.value == id)
                        .and_then(|(_, v)| match v {
                            Node::Scalar(scalar) => Some(scalar.value.clone()),
                            _ => None,
                        })
                        .unwrap_or_default();
                    let entry_path = path.push(Section::named(id, name));

                    for (key, value) in pairs {
                        if key.value == id {
                            continue;
                        }

                        traverse_tree(
                            &entry_path.push(Section::field(key.value.clone())),
                            value,
                            leaf_fn,
                        );
                    }
                }
            } else {
                for (idx, item) in items.iter().enumerate() {
                    traverse_tree(&path.push(Section::index(idx as i64)), item, leaf_fn);
                }
            }
        }

        Node::Scalar(_) => leaf_fn(path, node),
    }
}

/// Returns one path per scalar leaf in the given document root.
pub fn list_paths_in_node(root: &Node, doc_idx: usize) -> Vec<Path> {
    let mut paths = Vec::new();
    traverse_tree(&Path::for_document(doc_idx), root, &mut |path, _| {
        paths.push(path.clone())
    });

    paths
}

/// Returns whether the provided path string addresses a location that the
/// traversal of the given tree produces. This is a synchronous full walk.
pub fn is_path_in_tree(root: &Node, path_string: &str) -> Result<bool, Error> {
    let search = parse_path(path_string)?;
    let needle = search.go_patch_style();

    Ok(list_paths_in_node(root, search.document_idx())
        .iter()
        .any(|path| path.go_patch_style() == needle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::node::Scalar;

    fn named_entry(id: &str, name: &str) -> Node {
        Node::Mapping(vec![
            (Scalar::string(id), Node::Scalar(Scalar::string(name))),
            (Scalar::string("foo"), Node::Scalar(Scalar::string("bar"))),
        ])
    }

    fn tree() -> Node {
        Node::Mapping(vec![
            (
                Scalar::string("map"),
                Node::Mapping(vec![(
                    Scalar::string("before"),
                    Node::Scalar(Scalar::string("after")),
                )]),
            ),
            (
                Scalar::string("simple-list"),
                Node::Sequence(vec![
                    Node::Scalar(Scalar::string("A")),
                    Node::Scalar(Scalar::string("B")),
                ]),
            ),
            (
                Scalar::string("named-list"),
                Node::Sequence(vec![named_entry("name", "one"), named_entry("name", "two")]),
            ),
        ])
    }

    #[test]
    fn test_list_paths_visits_every_leaf_once() {
        let paths: Vec<String> = list_paths_in_node(&tree(), 0)
            .iter()
            .map(Path::go_patch_style)
            .collect();

        assert_eq!(
            paths,
            [
                "/map/before",
                "/simple-list/0",
                "/simple-list/1",
                "/named-list/name=one/foo",
                "/named-list/name=two/foo",
            ]
        );
    }

    #[test]
    fn test_is_path_in_tree() {
        let root = tree();

        assert!(is_path_in_tree(&root, "/map/before").unwrap());
        assert!(!is_path_in_tree(&root, "/map/nope").unwrap());

        assert!(is_path_in_tree(&root, "/simple-list/0").unwrap());
        assert!(!is_path_in_tree(&root, "/simple-list/5").unwrap());

        assert!(is_path_in_tree(&root, "/named-list/name=one/foo").unwrap());
        assert!(!is_path_in_tree(&root, "/named-list/name=nope/foo").unwrap());
    }
}
