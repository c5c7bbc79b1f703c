//! Document-level types.

use super::{ContentItem, RevisionRow};
use serde::{Deserialize, Serialize};

fn default_title() -> String {
    "Generated SOP".to_string()
}

fn default_id() -> String {
    "TBD".to_string()
}

fn default_prepared_by() -> String {
    "Name".to_string()
}

fn default_approved_by() -> String {
    "Approver".to_string()
}

fn default_revision_date() -> String {
    "Date".to_string()
}

/// A complete SOP document description.
///
/// Built entirely from caller input; every missing field receives a
/// placeholder default so a sparse request still renders.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SopDocument {
    /// Document title, shown in the title block and the footer
    #[serde(default = "default_title")]
    pub title: String,

    /// SOP identifier (e.g. "SOP-017")
    #[serde(rename = "sop_id", default = "default_id")]
    pub id: String,

    /// Author name for the title block
    #[serde(default = "default_prepared_by")]
    pub prepared_by: String,

    /// Approver name for the title block
    #[serde(default = "default_approved_by")]
    pub approved_by: String,

    /// Revision date, free-form text
    #[serde(default = "default_revision_date")]
    pub revision_date: String,

    /// Ordered sections; rendering order is sequence order
    #[serde(default)]
    pub sections: Vec<Section>,
}

impl SopDocument {
    /// Create an empty document with the given title and id.
    pub fn new(title: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            id: id.into(),
            prepared_by: default_prepared_by(),
            approved_by: default_approved_by(),
            revision_date: default_revision_date(),
            sections: Vec::new(),
        }
    }

    /// Add a section to the document.
    pub fn add_section(&mut self, section: Section) {
        self.sections.push(section);
    }

    /// Add a section and return the document, builder style.
    pub fn with_section(mut self, section: Section) -> Self {
        self.sections.push(section);
        self
    }

    /// Get the number of sections.
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Check if the document has any sections.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

impl Default for SopDocument {
    fn default() -> Self {
        Self::new(default_title(), default_id())
    }
}

/// How a section's body is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    /// Ordered list of content items
    #[default]
    Content,
    /// Revision-history table
    Table,
}

/// One section of the document.
///
/// Content sections carry `items`; table sections carry `rows`. The wire
/// field `type: "table"` selects the table kind, absent means content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    /// Section heading; empty headings are not emitted
    #[serde(default)]
    pub heading: String,

    /// Section kind, content unless tagged `"table"`
    #[serde(rename = "type", default)]
    pub kind: SectionKind,

    /// Ordered content items (content sections)
    #[serde(rename = "content", default)]
    pub items: Vec<ContentItem>,

    /// Revision rows (table sections)
    #[serde(default)]
    pub rows: Vec<RevisionRow>,
}

impl Section {
    /// Create a content section.
    pub fn content(heading: impl Into<String>, items: Vec<ContentItem>) -> Self {
        Self {
            heading: heading.into(),
            kind: SectionKind::Content,
            items,
            rows: Vec::new(),
        }
    }

    /// Create a revision-history table section.
    pub fn table(heading: impl Into<String>, rows: Vec<RevisionRow>) -> Self {
        Self {
            heading: heading.into(),
            kind: SectionKind::Table,
            items: Vec::new(),
            rows,
        }
    }

    /// Check if this is a table section.
    pub fn is_table(&self) -> bool {
        self.kind == SectionKind::Table
    }
}
