//! Tree access: resolving, creating, and removing entries by path.
//!
//! All operations walk the document tree section by section. Named list
//! entries are matched through the inferred identifier key, and dot-style
//! sections are disambiguated against the actual tree during the walk.

pub mod delete;
pub mod get;
pub mod list;
pub mod set;
pub mod traverse;

pub use delete::{delete, delete_path};
pub use get::{get, get_path, has_path};
pub use list::{entry_by_identifier_and_name, identifier_in_named_list};
pub use set::{set, set_path};
pub use traverse::{is_path_in_tree, list_paths_in_node, traverse_tree};
