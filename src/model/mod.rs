//! Content model for SOP documents.
//!
//! This module defines the semantic tree that the rendering engine consumes.
//! The types deserialize directly from the wire JSON produced by the
//! surrounding service, substituting defaults for missing fields, and are
//! immutable once constructed.

mod document;
mod item;
mod revision;

pub use document::{Section, SectionKind, SopDocument};
pub use item::ContentItem;
pub use revision::{RevisionRow, ROW_DELIMITER};
