//! # sopdoc
//!
//! Render structured SOP definitions into styled Word (`.docx`) documents.
//!
//! The library consumes a semantic tree (sections containing ordered content
//! items) and emits a paginated document matching a fixed house style:
//! five-level auto-numbered steps, labelled fields with a blank-line
//! heuristic, bulleted facts, italic notes aligned to the current step
//! level, a revision-history table, and first-page-aware footers.
//!
//! ## Quick Start
//!
//! ```
//! use sopdoc::{ContentItem, Section, SopDocument};
//!
//! fn main() -> sopdoc::Result<()> {
//!     let doc = SopDocument::new("Widget Assembly", "SOP-042").with_section(
//!         Section::content(
//!             "Procedure",
//!             vec![
//!                 ContentItem::step("Power on the press", 1),
//!                 ContentItem::step("Check the gauge", 2),
//!                 ContentItem::note("Gauge must read below 40 psi."),
//!             ],
//!         ),
//!     );
//!
//!     let artifact = sopdoc::render(&doc)?;
//!     assert_eq!(artifact.filename, "widget-assembly.docx");
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Wire-format input**: deserializes the service JSON directly, with
//!   placeholder defaults for missing fields
//! - **Graceful degradation**: unknown items are skipped, step levels are
//!   clamped, short table rows are padded
//! - **Pure transformation**: no I/O in the render path; documents render
//!   concurrently with no shared state

pub mod error;
pub mod model;
pub mod render;

// Re-export commonly used types
pub use error::{Error, Result};
pub use model::{ContentItem, RevisionRow, Section, SectionKind, SopDocument, ROW_DELIMITER};
pub use render::{
    indent_for, normalize_label, Artifact, DocxRenderer, LabelSpacing, RenderOptions,
    StepNumbering, DEFAULT_TRIGGER_LABELS,
};

use std::io::Read;

/// Decode a document description from a JSON string.
pub fn from_json_str(data: &str) -> Result<SopDocument> {
    Ok(serde_json::from_str(data)?)
}

/// Decode a document description from JSON bytes.
pub fn from_json_bytes(data: &[u8]) -> Result<SopDocument> {
    Ok(serde_json::from_slice(data)?)
}

/// Decode a document description from a reader.
pub fn from_json_reader<R: Read>(reader: R) -> Result<SopDocument> {
    Ok(serde_json::from_reader(reader)?)
}

/// Render a document with house-style defaults.
pub fn render(doc: &SopDocument) -> Result<Artifact> {
    DocxRenderer::new().render(doc)
}

/// Render a document with explicit options.
pub fn render_with_options(doc: &SopDocument, options: &RenderOptions) -> Result<Artifact> {
    render::to_docx(doc, options)
}

/// Decode JSON bytes and render in one call.
pub fn render_json(data: &[u8]) -> Result<Artifact> {
    render(&from_json_bytes(data)?)
}

/// Builder for configuring and rendering SOP documents.
///
/// # Example
///
/// ```
/// use sopdoc::{ContentItem, Section, Sopdoc, SopDocument};
///
/// let doc = SopDocument::new("Etch Bath Change", "SOP-107")
///     .with_section(Section::content("Scope", vec![ContentItem::text("All lines")]));
///
/// let artifact = Sopdoc::new()
///     .with_font("Arial")
///     .with_filename_stem("sop-107")
///     .render(&doc)?;
/// assert_eq!(artifact.filename, "sop-107.docx");
/// # Ok::<(), sopdoc::Error>(())
/// ```
pub struct Sopdoc {
    options: RenderOptions,
}

impl Sopdoc {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self {
            options: RenderOptions::default(),
        }
    }

    /// Set the body font family.
    pub fn with_font(mut self, font: impl Into<String>) -> Self {
        self.options = self.options.with_font(font);
        self
    }

    /// Replace the trigger-label set of the blank-line heuristic.
    pub fn with_trigger_labels<S: Into<String>>(
        mut self,
        labels: impl IntoIterator<Item = S>,
    ) -> Self {
        self.options = self.options.with_trigger_labels(labels);
        self
    }

    /// Set the artifact filename stem.
    pub fn with_filename_stem(mut self, stem: impl Into<String>) -> Self {
        self.options = self.options.with_filename_stem(stem);
        self
    }

    /// Render a document.
    pub fn render(&self, doc: &SopDocument) -> Result<Artifact> {
        DocxRenderer::with_options(self.options.clone()).render(doc)
    }

    /// Decode JSON bytes and render.
    pub fn render_json(&self, data: &[u8]) -> Result<Artifact> {
        self.render(&from_json_bytes(data)?)
    }
}

impl Default for Sopdoc {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_options() {
        let builder = Sopdoc::new()
            .with_font("Arial")
            .with_trigger_labels(["Output(s)"]);

        assert_eq!(builder.options.font, "Arial");
        assert_eq!(builder.options.trigger_labels, vec!["Output(s)"]);
    }

    #[test]
    fn test_render_json_roundtrip() {
        let artifact = render_json(
            br#"{
                "title": "T",
                "sop_id": "S-1",
                "sections": [
                    {"heading": "H", "content": [{"type": "labelled", "text": "Objective: Do X"}]}
                ]
            }"#,
        )
        .unwrap();

        assert!(!artifact.is_empty());
        assert_eq!(artifact.filename, "t.docx");
    }

    #[test]
    fn test_render_json_malformed_body() {
        let result = render_json(b"{not json");
        assert!(matches!(result, Err(Error::Json(_))));
    }

    #[test]
    fn test_from_json_reader() {
        let data = br#"{"title": "T", "sections": []}"#;
        let doc = from_json_reader(&data[..]).unwrap();
        assert_eq!(doc.title, "T");
    }
}
