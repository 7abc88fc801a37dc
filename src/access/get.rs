//! Get resolution: walking a path against a document tree.

use crate::access::list::{entry_by_identifier_and_name, identifier_in_named_list, index_by_identifier_and_name};
use crate::document::node::Node;
use crate::error::Error;
use crate::path::{parse_path, Path, PathStyle, Section, APPEND_INDEX};

/// Convenience function for [`get`], which parses the given path string and
/// then delegates to it.
pub fn get_path<'a>(node: &'a Node, path_string: &str) -> Result<&'a Node, Error> {
    let path = parse_path(path_string)?;
    get(node, &path)
}

/// Retrieves the node at the provided path. The result is a borrow into the
/// document tree, not a copy.
pub fn get<'a>(node: &'a Node, path: &Path) -> Result<&'a Node, Error> {
    let mut pointer = node;
    let mut walked = Path::for_document(path.document_idx());

    for section in path.sections() {
        let section = resolve_undetermined(pointer, section)?;
        pointer = step(pointer, &section, &walked)?;
        walked = walked.push(section);
    }

    Ok(pointer)
}

/// Mutable twin of [`get`], used by Delete to splice entries out of the
/// parent node.
pub fn get_mut<'a>(node: &'a mut Node, path: &Path) -> Result<&'a mut Node, Error> {
    let mut pointer = node;
    let mut walked = Path::for_document(path.document_idx());

    for section in path.sections() {
        let section = resolve_undetermined(pointer, section)?;
        pointer = step_mut(pointer, &section, &walked)?;
        walked = walked.push(section);
    }

    Ok(pointer)
}

/// Checks whether the path resolves in the given tree, discarding the error.
pub fn has_path(node: &Node, path: &Path) -> bool {
    get(node, path).is_ok()
}

/// Decides what an undetermined dot-style section means at the current node:
/// the name of a named-list entry if the node is a sequence with an inferred
/// identifier, a mapping key otherwise. A sequence without an identifier
/// cannot be addressed by a non-numeric token at all, so that combination
/// fails as an invalid path. Other sections pass through.
pub(crate) fn resolve_undetermined(node: &Node, section: &Section) -> Result<Section, Error> {
    match section {
        Section::Undetermined(raw) => {
            if let Node::Sequence(items) = node {
                return match identifier_in_named_list(items) {
                    Some(id) => Ok(Section::named(id, raw.clone())),
                    None => Err(Error::InvalidPath {
                        style: PathStyle::DotStyle,
                        path: raw.clone(),
                        reason: "the list has no identifier to address entries by name"
                            .to_string(),
                    }),
                };
            }

            Ok(Section::field(raw.clone()))
        }
        other => Ok(other.clone()),
    }
}

/// Normalizes a possibly negative index against the sequence length. The
/// append sentinel reads as "last element" here.
pub(crate) fn effective_index(idx: i64, length: usize) -> Result<usize, Error> {
    let effective = if idx == APPEND_INDEX {
        length as i64 - 1
    } else {
        idx
    };

    if effective < 0 || effective >= length as i64 {
        return Err(Error::IndexOutOfRange {
            index: effective,
            length,
        });
    }

    Ok(effective as usize)
}

fn step<'a>(node: &'a Node, section: &Section, walked: &Path) -> Result<&'a Node, Error> {
    match section {
        Section::Field(name) => match node {
            Node::Mapping(pairs) => pairs
                .iter()
                .find(|(k, _)| k.value == *name)
                .map(|(_, v)| v)
                .ok_or_else(|| Error::KeyNotFound {
                    key: name.clone(),
                    available: pairs.iter().map(|(k, _)| k.value.clone()).collect(),
                }),
            other => Err(type_mismatch("map", other, walked)),
        },

        Section::Index(idx) => match node {
            Node::Sequence(items) => {
                let i = effective_index(*idx, items.len())?;
                Ok(&items[i])
            }
            other => Err(type_mismatch("list", other, walked)),
        },

        Section::Named { id, name } => match node {
            Node::Sequence(items) => entry_by_identifier_and_name(items, id, name),
            other => Err(type_mismatch("complex-list", other, walked)),
        },

        // Resolved by the caller before stepping.
        Section::Undetermined(raw) => Err(Error::InvalidOperation(format!(
            "failed to traverse tree, cannot resolve section '{}'",
            raw
        ))),
    }
}

fn step_mut<'a>(
    node: &'a mut Node,
    section: &Section,
    walked: &Path,
) -> Result<&'a mut Node, Error> {
    match section {
        Section::Field(name) => match node {
            Node::Mapping(pairs) => {
                let available: Vec<String> =
                    pairs.iter().map(|(k, _)| k.value.clone()).collect();
                pairs
                    .iter_mut()
                    .find(|(k, _)| k.value == *name)
                    .map(|(_, v)| v)
                    .ok_or(Error::KeyNotFound {
                        key: name.clone(),
                        available,
                    })
            }
            other => Err(type_mismatch("map", other, walked)),
        },

        Section::Index(idx) => match node {
            Node::Sequence(items) => {
                let i = effective_index(*idx, items.len())?;
                Ok(&mut items[i])
            }
            other => Err(type_mismatch("list", other, walked)),
        },

        Section::Named { id, name } => match node {
            Node::Sequence(items) => {
                let i = index_by_identifier_and_name(items, id, name)?;
                Ok(&mut items[i])
            }
            other => Err(type_mismatch("complex-list", other, walked)),
        },

        Section::Undetermined(raw) => Err(Error::InvalidOperation(format!(
            "failed to traverse tree, cannot resolve section '{}'",
            raw
        ))),
    }
}

pub(crate) fn type_mismatch(expected: &'static str, found: &Node, walked: &Path) -> Error {
    Error::TypeMismatch {
        expected,
        found: found.kind_name().to_string(),
        at: walked.go_patch_style(),
    }
}
