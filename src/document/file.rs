//! Multi-document input file container.

use crate::access::{delete, get, set};
use crate::convert::Value;
use crate::document::node::Node;
use crate::error::Error;
use crate::path::Path;

/// The parsed contents of one input file (or stdin). A file can contain
/// multiple documents, each with its own root node and an optional
/// human-readable name used for descriptions only, never for resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct InputFile {
    pub location: String,
    pub note: String,
    pub documents: Vec<Node>,
    pub names: Vec<String>,
}

impl InputFile {
    pub fn new(location: impl Into<String>, documents: Vec<Node>) -> Self {
        InputFile {
            location: location.into(),
            note: String::new(),
            documents,
            names: Vec::new(),
        }
    }

    fn validate_document_idx(&self, idx: usize) -> Result<(), Error> {
        if idx < self.documents.len() {
            return Ok(());
        }

        Err(Error::InvalidOperation(format!(
            "document index {} is out of bounds",
            idx
        )))
    }

    /// Describes the document at the given index: its name if one is known,
    /// otherwise a human-style counted `document #N`.
    pub fn document_description(&self, idx: usize) -> String {
        match self.names.get(idx) {
            Some(name) => name.clone(),
            None => format!("document #{}", idx + 1),
        }
    }

    /// Retrieves the native value at the given path.
    pub fn get(&self, path: &Path) -> Result<Value, Error> {
        self.validate_document_idx(path.document_idx())?;
        let node = get(&self.documents[path.document_idx()], path)?;
        Value::from_node(node)
    }

    /// Creates or updates the value at the given path.
    pub fn set(&mut self, path: &Path, value: Value) -> Result<(), Error> {
        self.validate_document_idx(path.document_idx())?;
        set(&mut self.documents[path.document_idx()], path, value)
    }

    /// Removes the entry at the given path.
    pub fn del(&mut self, path: &Path) -> Result<(), Error> {
        self.validate_document_idx(path.document_idx())?;
        delete(&mut self.documents[path.document_idx()], path)?;
        Ok(())
    }

    /// Checks whether the given path resolves in this file.
    pub fn has_path(&self, path: &Path) -> Result<bool, Error> {
        self.validate_document_idx(path.document_idx())?;
        Ok(get(&self.documents[path.document_idx()], path).is_ok())
    }
}
