//! Set resolution: creating or updating the value at a path.
//!
//! Missing intermediate structure is materialized on the fly. The kind of a
//! newly created node is decided by the section that follows it: field and
//! undetermined sections create a mapping, index sections create a sequence,
//! and named sections create a sequence pre-seeded with a mapping that
//! already carries its identifier entry.

use crate::access::get::{resolve_undetermined, type_mismatch};
use crate::access::list::index_by_identifier_and_name;
use crate::convert::Value;
use crate::document::node::{Node, Scalar};
use crate::error::Error;
use crate::path::{parse_path, Path, Section, APPEND_INDEX};

/// Convenience function for [`set`], which parses the given path string and
/// then delegates to it.
pub fn set_path(node: &mut Node, path_string: &str, value: Value) -> Result<(), Error> {
    let path = parse_path(path_string)?;
    set(node, &path, value)
}

/// Creates or updates the value at the provided path. Missing entries are
/// created; an existing node of the wrong kind is a hard failure, never
/// coerced.
pub fn set(node: &mut Node, path: &Path, value: Value) -> Result<(), Error> {
    if path.is_root() {
        return Err(Error::InvalidOperation(
            "cannot set the document root, the path must contain at least one section".to_string(),
        ));
    }

    let walked = Path::for_document(path.document_idx());
    set_sections(node, path.sections(), &walked, value)
}

fn set_sections(
    node: &mut Node,
    sections: &[Section],
    walked: &Path,
    value: Value,
) -> Result<(), Error> {
    let Some((section, rest)) = sections.split_first() else {
        return Ok(());
    };
    let section = resolve_undetermined(node, section)?;

    match &section {
        Section::Field(name) => {
            let Node::Mapping(pairs) = node else {
                return Err(type_mismatch("map", node, walked));
            };

            let position = pairs.iter().position(|(k, _)| k.value == *name);
            if rest.is_empty() {
                let leaf = value.into_node();
                match position {
                    Some(i) => pairs[i].1 = leaf,
                    None => pairs.push((Scalar::string(name.clone()), leaf)),
                }
                return Ok(());
            }

            let i = match position {
                Some(i) => i,
                None => {
                    pairs.push((Scalar::string(name.clone()), scaffold(&rest[0])));
                    pairs.len() - 1
                }
            };

            set_sections(&mut pairs[i].1, rest, &walked.push(section.clone()), value)
        }

        Section::Index(idx) => {
            let Node::Sequence(items) = node else {
                return Err(type_mismatch("list", node, walked));
            };

            let i = if *idx == APPEND_INDEX {
                // Append always creates a new element, even for the terminal
                // section; repeating the call accumulates elements.
                let created = if rest.is_empty() {
                    value.clone().into_node()
                } else {
                    scaffold(&rest[0])
                };
                items.push(created);
                items.len() - 1
            } else {
                if *idx < 0 || *idx as usize >= items.len() {
                    return Err(Error::InvalidOperation(format!(
                        "cannot set list index {}, it is not in range: 0..{}",
                        idx,
                        items.len() as i64 - 1
                    )));
                }
                *idx as usize
            };

            if rest.is_empty() {
                if *idx != APPEND_INDEX {
                    items[i] = value.into_node();
                }
                return Ok(());
            }

            set_sections(&mut items[i], rest, &walked.push(section.clone()), value)
        }

        Section::Named { id, name } => {
            let Node::Sequence(items) = node else {
                return Err(type_mismatch("complex-list", node, walked));
            };

            if rest.is_empty() {
                // A named entry written as anything but a map would lose the
                // identifier it is addressed by.
                let leaf = value.into_node();
                if !leaf.is_mapping() {
                    return Err(Error::InvalidOperation(format!(
                        "cannot set entry {}={} to a {}, a named list entry must be a map",
                        id,
                        name,
                        leaf.kind_name()
                    )));
                }

                let leaf = with_identifier_entry(leaf, id, name);
                match index_by_identifier_and_name(items, id, name) {
                    Ok(i) => items[i] = leaf,
                    Err(_) => items.push(leaf),
                }
                return Ok(());
            }

            let i = match index_by_identifier_and_name(items, id, name) {
                Ok(i) => i,
                Err(_) => {
                    items.push(named_entry_scaffold(id, name));
                    items.len() - 1
                }
            };

            set_sections(&mut items[i], rest, &walked.push(section.clone()), value)
        }

        // resolve_undetermined never returns this variant.
        Section::Undetermined(raw) => Err(Error::InvalidOperation(format!(
            "failed to traverse tree, cannot resolve section '{}'",
            raw
        ))),
    }
}

/// Builds an empty node of the kind the given next section requires.
fn scaffold(next: &Section) -> Node {
    match next {
        Section::Field(_) | Section::Undetermined(_) => Node::Mapping(Vec::new()),
        Section::Index(_) => Node::Sequence(Vec::new()),
        Section::Named { id, name } => {
            Node::Sequence(vec![named_entry_scaffold(id, name)])
        }
    }
}

fn named_entry_scaffold(id: &str, name: &str) -> Node {
    Node::Mapping(vec![(
        Scalar::string(id),
        Node::Scalar(Scalar::string(name)),
    )])
}

/// Makes sure a mapping written as a named list entry stays addressable by
/// carrying its identifier entry.
fn with_identifier_entry(node: Node, id: &str, name: &str) -> Node {
    match node {
        Node::Mapping(mut pairs) => {
            if !pairs.iter().any(|(k, _)| k.value == id) {
                pairs.insert(
                    0,
                    (Scalar::string(id), Node::Scalar(Scalar::string(name))),
                );
            }
            Node::Mapping(pairs)
        }
        other => other,
    }
}
