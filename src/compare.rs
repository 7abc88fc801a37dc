//! Comparing the path structure of two input files.

use std::collections::HashSet;

use anyhow::{bail, Result};

use crate::access::get::get;
use crate::access::traverse::list_paths_in_node;
use crate::document::loader::load_file;
use crate::path::Path;

/// Returns one fully-addressed path per scalar leaf across all documents at
/// the given location.
pub fn list_paths(location: &str) -> Result<Vec<Path>> {
    let file = load_file(location)?;

    let mut paths = Vec::new();
    for (idx, document) in file.documents.iter().enumerate() {
        paths.extend(list_paths_in_node(document, idx));
    }

    Ok(paths)
}

/// Returns all paths that exist in both input files. With `compare_by_value`
/// the resolved values have to match as well.
pub fn compare_paths(
    from_location: &str,
    to_location: &str,
    compare_by_value: bool,
) -> Result<Vec<Path>> {
    let paths_from = list_paths(from_location)?;
    let paths_to = list_paths(to_location)?;

    let lookup: HashSet<String> = paths_from
        .iter()
        .map(|path| path.go_patch_style())
        .collect();

    let duplicate_paths: Vec<Path> = paths_to
        .into_iter()
        .filter(|path| lookup.contains(&path.go_patch_style()))
        .collect();

    if !compare_by_value {
        return Ok(duplicate_paths);
    }

    compare_paths_by_value(from_location, to_location, duplicate_paths)
}

/// Narrows a list of duplicate paths down to those that resolve to the same
/// value in both input files.
pub fn compare_paths_by_value(
    from_location: &str,
    to_location: &str,
    duplicate_paths: Vec<Path>,
) -> Result<Vec<Path>> {
    let from = load_file(from_location)?;
    let to = load_file(to_location)?;

    if from.documents.len() > 1 || to.documents.len() > 1 {
        bail!("input files have more than one document, which is not supported yet");
    }

    let mut duplicate_paths_with_the_same_value = Vec::new();
    for path in duplicate_paths {
        let from_value = get(&from.documents[0], &path)?;
        let to_value = get(&to.documents[0], &path)?;

        if from_value == to_value {
            duplicate_paths_with_the_same_value.push(path);
        }
    }

    Ok(duplicate_paths_with_the_same_value)
}
