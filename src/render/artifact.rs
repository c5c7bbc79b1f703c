//! The rendered artifact: serialized bytes plus a suggested filename.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::model::SopDocument;

/// A packaged `.docx` document, opaque beyond its bytes and name.
#[derive(Debug, Clone)]
pub struct Artifact {
    /// The serialized document package
    pub bytes: Vec<u8>,

    /// Suggested filename, always `.docx`-suffixed
    pub filename: String,
}

impl Artifact {
    /// Create an artifact from serialized bytes and a filename.
    pub fn new(bytes: Vec<u8>, filename: impl Into<String>) -> Self {
        Self {
            bytes,
            filename: filename.into(),
        }
    }

    /// Size of the serialized package in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Check if the package is empty.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Write the artifact to an explicit path.
    pub fn write_to<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        std::fs::write(path, &self.bytes)?;
        Ok(())
    }

    /// Write the artifact into a directory under its suggested filename,
    /// returning the full path.
    pub fn write_to_dir<P: AsRef<Path>>(&self, dir: P) -> Result<PathBuf> {
        let path = dir.as_ref().join(&self.filename);
        std::fs::write(&path, &self.bytes)?;
        Ok(path)
    }
}

/// Derive the artifact filename from the caller-supplied stem or a slug of
/// the document title.
pub(crate) fn suggested_filename(doc: &SopDocument, stem_override: Option<&str>) -> String {
    let stem = slug::slugify(stem_override.unwrap_or(&doc.title));
    if stem.is_empty() {
        "sop.docx".to_string()
    } else {
        format!("{stem}.docx")
    }
}
