//! Named-list helpers: identifier inference and entry lookup.

use indexmap::IndexMap;

use crate::document::node::Node;
use crate::error::Error;

/// The candidate identifier keys, in priority order.
const IDENTIFIER_CANDIDATES: [&str; 3] = ["name", "key", "id"];

/// Returns the identifier key used in the provided sequence, or `None` if
/// there is none. The identifier key is either `name`, `key`, or `id`, and
/// only qualifies when every element is a mapping that contains it.
///
/// The result is recomputed on every call on purpose: the same sequence may
/// have a different shape after a mutation.
pub fn identifier_in_named_list(items: &[Node]) -> Option<&'static str> {
    if items.is_empty() {
        return None;
    }

    let mut counters: IndexMap<&str, usize> = IndexMap::new();
    for item in items {
        let Node::Mapping(pairs) = item else {
            return None;
        };

        for (key, _) in pairs {
            *counters.entry(key.value.as_str()).or_insert(0) += 1;
        }
    }

    IDENTIFIER_CANDIDATES
        .into_iter()
        .find(|candidate| counters.get(candidate).copied() == Some(items.len()))
}

/// Returns the position of the sequence element that is a mapping containing
/// the entry `id: name`.
pub fn index_by_identifier_and_name(
    items: &[Node],
    id: &str,
    name: &str,
) -> Result<usize, Error> {
    for (idx, item) in items.iter().enumerate() {
        let Node::Mapping(pairs) = item else {
            continue;
        };

        for (key, value) in pairs {
            if key.value != id {
                continue;
            }

            if let Node::Scalar(scalar) = value {
                if scalar.value == name {
                    return Ok(idx);
                }
            }
        }
    }

    Err(Error::EntryNotFound {
        id: id.to_string(),
        name: name.to_string(),
    })
}

pub fn entry_by_identifier_and_name<'a>(
    items: &'a [Node],
    id: &str,
    name: &str,
) -> Result<&'a Node, Error> {
    let idx = index_by_identifier_and_name(items, id, name)?;
    Ok(&items[idx])
}
