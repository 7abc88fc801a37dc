//! Path model and parsers for the two supported path grammars.
//!
//! # Supported syntax
//!
//! Go-patch style:
//!
//! - `/` - document root
//! - `/map/key` - mapping entries by key
//! - `/list/0` - sequence elements by index (`-1` means last/append)
//! - `/list/name=one` - sequence elements by identifier and name
//! - `1:/map/key` - optional document index prefix
//! - `\/` - escapes a literal slash inside a token
//!
//! Dot style:
//!
//! - `map.key` - mapping entries or named list entries (decided against the
//!   document during resolution)
//! - `list.0` - sequence elements by index
//! - `1:map.key` - optional document index prefix

pub mod model;
pub mod parser;

pub use model::{Path, PathStyle, Section, APPEND_INDEX};
pub use parser::{parse_dot_style, parse_go_patch_style, parse_path};
