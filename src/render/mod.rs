//! Rendering engine: walks the content model and emits the `.docx` package.
//!
//! The engine declares the numbering geometry once per document, runs each
//! section's items through the block renderer (consulting the label-spacing
//! state machine), delegates table sections to the table renderer, and
//! finishes with the page furniture.

mod artifact;
mod block;
mod docx;
mod furniture;
mod numbering;
mod options;
mod spacing;
mod table;

pub use artifact::Artifact;
pub use docx::{to_docx, DocxRenderer};
pub use numbering::{clamp_level, indent_for, LevelGeometry, StepNumbering, STEP_LEVELS, STEP_NUMBERING_ID};
pub use options::{RenderOptions, DEFAULT_TRIGGER_LABELS};
pub use spacing::{normalize_label, LabelSpacing};
