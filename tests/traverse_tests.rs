// tests/traverse_tests.rs
use std::io::Write;

use tempfile::NamedTempFile;
use yamlgrab::access::{is_path_in_tree, list_paths_in_node};
use yamlgrab::compare::{compare_paths, list_paths};
use yamlgrab::document::loader::load_documents;
use yamlgrab::path::Path;

const FIXTURE: &str = r#"---
yaml:
  map:
    before: after
  simple-list:
  - A
  - B
  named-entry-list:
  - name: one
    value: A
  - name: two
    value: B
"#;

fn write_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_traversal_addresses_named_entries_by_name() {
    let root = load_documents(FIXTURE).unwrap().remove(0);

    let paths: Vec<String> = list_paths_in_node(&root, 0)
        .iter()
        .map(Path::go_patch_style)
        .collect();

    assert_eq!(
        paths,
        [
            "/yaml/map/before",
            "/yaml/simple-list/0",
            "/yaml/simple-list/1",
            "/yaml/named-entry-list/name=one/value",
            "/yaml/named-entry-list/name=two/value",
        ]
    );
}

#[test]
fn test_is_path_in_tree_matches_traversal_output() {
    let root = load_documents(FIXTURE).unwrap().remove(0);

    assert!(is_path_in_tree(&root, "/yaml/map/before").unwrap());
    assert!(is_path_in_tree(&root, "/yaml/named-entry-list/name=two/value").unwrap());

    // The identifier entry itself is not a traversal leaf.
    assert!(!is_path_in_tree(&root, "/yaml/named-entry-list/name=two/name").unwrap());
    assert!(!is_path_in_tree(&root, "/yaml/map").unwrap());
}

#[test]
fn test_list_paths_covers_all_documents() {
    let file = write_file("---\nfoo: bar\n---\nbar: foo\n");

    let paths = list_paths(file.path().to_str().unwrap()).unwrap();
    assert_eq!(paths.len(), 2);
    assert_eq!(paths[0].document_idx(), 0);
    assert_eq!(paths[1].document_idx(), 1);
}

#[test]
fn test_compare_paths_between_files() {
    let from = write_file("shared:\n  key: same\nonly-from: x\n");
    let to = write_file("shared:\n  key: different\nonly-to: x\n");

    let structural = compare_paths(
        from.path().to_str().unwrap(),
        to.path().to_str().unwrap(),
        false,
    )
    .unwrap();
    assert_eq!(structural.len(), 1);
    assert_eq!(structural[0].go_patch_style(), "/shared/key");

    let by_value = compare_paths(
        from.path().to_str().unwrap(),
        to.path().to_str().unwrap(),
        true,
    )
    .unwrap();
    assert!(by_value.is_empty());
}
