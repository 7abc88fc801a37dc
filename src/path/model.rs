//! Path model: the grammar-independent representation of a document location.
//!
//! A `Path` is an ordered list of [`Section`]s plus the index of the document
//! it applies to (multi-document files). Paths are value objects: appending a
//! section produces a new `Path`, existing ones are never mutated.
//!
//! # Example
//!
//! ```
//! use yamlgrab::path::{Path, Section};
//!
//! let path = Path::root()
//!     .push(Section::field("instance_groups"))
//!     .push(Section::named("name", "web"))
//!     .push(Section::field("instances"));
//!
//! assert_eq!(path.go_patch_style(), "/instance_groups/name=web/instances");
//! assert_eq!(path.dot_style(), "instance_groups.web.instances");
//! ```

use std::fmt;

use crate::error::Error;

/// The two supported path grammars: dot style (used by Spruce for example)
/// and go-patch style (used by BOSH).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathStyle {
    DotStyle,
    GoPatchStyle,
}

impl fmt::Display for PathStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathStyle::DotStyle => write!(f, "dot"),
            PathStyle::GoPatchStyle => write!(f, "go-patch"),
        }
    }
}

/// Sentinel index meaning "last element" on reads and "append" on writes.
pub const APPEND_INDEX: i64 = -1;

/// One addressing step in a [`Path`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Section {
    /// Addresses a mapping entry by its exact key string.
    Field(String),
    /// Addresses a sequence element by zero-based position.
    Index(i64),
    /// Addresses a sequence element that is a mapping containing `id: name`.
    Named { id: String, name: String },
    /// A dot-style token whose kind can only be decided against an actual
    /// document: it becomes a `Field` or `Named` section during resolution.
    Undetermined(String),
}

impl Section {
    pub fn field(name: impl Into<String>) -> Self {
        Section::Field(name.into())
    }

    pub fn index(idx: i64) -> Self {
        Section::Index(idx)
    }

    pub fn named(id: impl Into<String>, name: impl Into<String>) -> Self {
        Section::Named {
            id: id.into(),
            name: name.into(),
        }
    }

    fn go_patch_style(&self) -> String {
        match self {
            Section::Field(name) => escape_slashes(name),
            Section::Index(idx) => idx.to_string(),
            Section::Named { id, name } => {
                format!("{}={}", escape_slashes(id), escape_slashes(name))
            }
            Section::Undetermined(raw) => escape_slashes(raw),
        }
    }

    fn dot_style(&self) -> String {
        match self {
            Section::Field(name) => name.clone(),
            Section::Index(idx) => idx.to_string(),
            Section::Named { name, .. } => name.clone(),
            Section::Undetermined(raw) => raw.clone(),
        }
    }
}

fn escape_slashes(token: &str) -> String {
    token.replace('/', "\\/")
}

/// A location inside one document of a (possibly multi-document) file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    doc_idx: usize,
    sections: Vec<Section>,
}

impl Path {
    /// Returns the root path of the first document.
    pub fn root() -> Self {
        Path {
            doc_idx: 0,
            sections: Vec::new(),
        }
    }

    /// Returns the root path of the document at the given index.
    pub fn for_document(doc_idx: usize) -> Self {
        Path {
            doc_idx,
            sections: Vec::new(),
        }
    }

    pub fn new(doc_idx: usize, sections: Vec<Section>) -> Self {
        Path { doc_idx, sections }
    }

    /// Returns a new path with the given section appended.
    pub fn push(&self, section: Section) -> Path {
        let mut sections = self.sections.clone();
        sections.push(section);
        Path {
            doc_idx: self.doc_idx,
            sections,
        }
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn document_idx(&self) -> usize {
        self.doc_idx
    }

    pub fn is_root(&self) -> bool {
        self.sections.is_empty()
    }

    /// Returns the path one section above this one.
    ///
    /// The root path has no parent.
    pub fn parent(&self) -> Result<Path, Error> {
        if self.sections.is_empty() {
            return Err(Error::NoParent {
                path: self.to_string(),
            });
        }

        Ok(Path {
            doc_idx: self.doc_idx,
            sections: self.sections[..self.sections.len() - 1].to_vec(),
        })
    }

    /// Renders the path as a go-patch style string. The root path is `/`.
    pub fn go_patch_style(&self) -> String {
        if self.sections.is_empty() {
            return "/".to_string();
        }

        let mut result = String::new();
        for section in &self.sections {
            result.push('/');
            result.push_str(&section.go_patch_style());
        }

        result
    }

    /// Renders the path as a dot-style string. The root path is `(root)`,
    /// since dot style has no canonical empty form.
    pub fn dot_style(&self) -> String {
        if self.sections.is_empty() {
            return "(root)".to_string();
        }

        self.sections
            .iter()
            .map(Section::dot_style)
            .collect::<Vec<_>>()
            .join(".")
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.go_patch_style())
    }
}
