//! Step numbering geometry.
//!
//! Five auto-numbering levels (1. → a. → i. → 1. → a.) are declared once per
//! document as an abstract numbering definition and referenced per paragraph
//! by level. The geometry is pure configuration with document lifetime; the
//! output renderer's own counters handle increment and reset semantics.

use docx_rs::{
    AbstractNumbering, Docx, Level, LevelJc, LevelText, NumberFormat, Numbering,
    SpecialIndentType, Start,
};

/// Numbering definition id referenced by every step paragraph.
pub const STEP_NUMBERING_ID: usize = 1;

/// Geometry of one numbering level. Indents are in twentieths of a point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelGeometry {
    /// OOXML number format name
    pub format: &'static str,
    /// Level text pattern, e.g. `"%1."`
    pub pattern: &'static str,
    /// Left indent
    pub left: i32,
    /// Hanging indent of the number itself
    pub hanging: i32,
    /// Number justification
    pub justification: &'static str,
}

/// The five step levels, index 0 holding 1-based level 1.
pub const STEP_LEVELS: [LevelGeometry; 5] = [
    LevelGeometry {
        format: "decimal",
        pattern: "%1.",
        left: 720,
        hanging: 360,
        justification: "left",
    },
    LevelGeometry {
        format: "lowerLetter",
        pattern: "%2.",
        left: 1440,
        hanging: 360,
        justification: "left",
    },
    LevelGeometry {
        format: "lowerRoman",
        pattern: "%3.",
        left: 2160,
        hanging: 180,
        justification: "right",
    },
    LevelGeometry {
        format: "decimal",
        pattern: "%4.",
        left: 2880,
        hanging: 360,
        justification: "left",
    },
    LevelGeometry {
        format: "lowerLetter",
        pattern: "%5.",
        left: 3600,
        hanging: 360,
        justification: "left",
    },
];

/// Clamp a caller-supplied 1-based level into the declared range.
pub fn clamp_level(level: i32) -> usize {
    level.clamp(1, STEP_LEVELS.len() as i32) as usize
}

/// Indent geometry for a 1-based level, for note alignment and bullet
/// placement. Callers clamp; out-of-range input is clamped here as well
/// rather than rejected.
pub fn indent_for(level: usize) -> (i32, i32) {
    let geometry = &STEP_LEVELS[level.clamp(1, STEP_LEVELS.len()) - 1];
    (geometry.left, geometry.hanging)
}

/// Per-document registration handle for the step numbering declaration.
#[derive(Debug, Default)]
pub struct StepNumbering {
    registered: bool,
}

impl StepNumbering {
    /// Create an unregistered handle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare the abstract numbering and its concrete instance against the
    /// document. Idempotent: a second call is a no-op.
    pub fn register(&mut self, docx: Docx) -> Docx {
        if self.registered {
            return docx;
        }
        self.registered = true;

        let mut definition = AbstractNumbering::new(STEP_NUMBERING_ID);
        for (index, geometry) in STEP_LEVELS.iter().enumerate() {
            definition = definition.add_level(
                Level::new(
                    index,
                    Start::new(1),
                    NumberFormat::new(geometry.format),
                    LevelText::new(geometry.pattern),
                    LevelJc::new(geometry.justification),
                )
                .indent(
                    Some(geometry.left),
                    Some(SpecialIndentType::Hanging(geometry.hanging)),
                    None,
                    None,
                ),
            );
        }

        docx.add_abstract_numbering(definition)
            .add_numbering(Numbering::new(STEP_NUMBERING_ID, STEP_NUMBERING_ID))
    }

    /// Check whether the declaration has been registered.
    pub fn is_registered(&self) -> bool {
        self.registered
    }
}
