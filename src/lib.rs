//! yamlgrab - a path-based query and edit library for YAML and JSON.
//!
//! Documents are parsed into order-preserving trees and addressed with
//! paths in two styles: go-patch style (`/yaml/structure/somekey`) and
//! dot-style (`yaml.structure.somekey`). Lists whose entries all carry the
//! same identifier key (`name`, `key`, or `id`) can be addressed by entry
//! name instead of index.
//!
//! # Example
//!
//! ```
//! use yamlgrab::{get_path, load_documents};
//!
//! let documents = load_documents("yaml:\n  structure:\n    somekey: foobar\n").unwrap();
//! let node = get_path(&documents[0], "/yaml/structure/somekey").unwrap();
//! ```

pub mod access;
pub mod compare;
pub mod convert;
pub mod document;
pub mod error;
pub mod path;

pub use access::{
    delete_path, get_path, has_path, is_path_in_tree, list_paths_in_node, set_path, traverse_tree,
};
pub use compare::{compare_paths, list_paths};
pub use convert::Value;
pub use document::{
    is_stdin, load_documents, load_file, parse_value, InputFile, Node, Scalar, ScalarTag,
};
pub use error::Error;
pub use path::{parse_dot_style, parse_go_patch_style, parse_path, Path, PathStyle, Section};
