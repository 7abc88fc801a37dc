//! Document model and I/O.
//!
//! A document is a tree of ordered mappings, sequences, and typed scalars.
//! The loader turns YAML or JSON text into trees, the renderer turns them
//! back, and [`file::InputFile`] holds the documents of one input together
//! with their origin.

pub mod file;
pub mod loader;
pub mod node;
pub mod render;

pub use file::InputFile;
pub use loader::{is_stdin, load_documents, load_file, parse_value};
pub use node::{Node, Scalar, ScalarTag};
pub use render::{to_json_string, to_yaml_stream, to_yaml_string};
