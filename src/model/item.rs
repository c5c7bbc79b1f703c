//! Content items: the ordered building blocks of a section.

use serde::{Deserialize, Serialize};

fn default_step_level() -> i32 {
    1
}

/// A single content item within a section.
///
/// The wire representation tags each item with a `type` field. Unrecognized
/// tags deserialize to [`ContentItem::Unknown`] so that one malformed item
/// never fails the whole document; the renderer skips them with a warning.
///
/// Item order is significant: it drives step numbering continuity (a step at
/// a shallower level resets the deeper counters) and the blank-line heuristic
/// between labelled fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentItem {
    /// Plain paragraph, optionally bold.
    Text {
        #[serde(default)]
        text: String,
        #[serde(default)]
        bold: bool,
    },

    /// A `"Label: value"` pair. An empty value means the label stands alone
    /// and the bullets that follow it supply the content.
    Labelled {
        #[serde(default)]
        text: String,
    },

    /// Unordered item. `indent_level` 0 is a top-level bullet, 1 a nested
    /// one; values beyond 1 are clamped.
    Bullet {
        #[serde(default)]
        text: String,
        #[serde(default)]
        indent_level: u8,
    },

    /// Unordered item fixed at nesting level 1.
    SubBullet {
        #[serde(default)]
        text: String,
    },

    /// En-dash prefixed plain line at bullet indentation.
    Dash {
        #[serde(default)]
        text: String,
    },

    /// Auto-numbered procedural step. `level` is 1-based and clamped to
    /// the five declared numbering levels.
    Step {
        #[serde(default)]
        text: String,
        #[serde(default = "default_step_level")]
        level: i32,
    },

    /// Italic callout aligned to the most recently emitted step's level.
    Note {
        #[serde(default)]
        text: String,
    },

    /// Explicit blank line.
    Spacer,

    /// Inline sub-heading followed by a blank line.
    Heading {
        #[serde(default)]
        text: String,
    },

    /// Catch-all for unrecognized item kinds; skipped at render time.
    #[serde(other)]
    Unknown,
}

impl ContentItem {
    /// Plain text paragraph.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text {
            text: text.into(),
            bold: false,
        }
    }

    /// Bold text paragraph.
    pub fn bold_text(text: impl Into<String>) -> Self {
        Self::Text {
            text: text.into(),
            bold: true,
        }
    }

    /// `"Label: value"` item.
    pub fn labelled(text: impl Into<String>) -> Self {
        Self::Labelled { text: text.into() }
    }

    /// Top-level bullet.
    pub fn bullet(text: impl Into<String>) -> Self {
        Self::Bullet {
            text: text.into(),
            indent_level: 0,
        }
    }

    /// Nested bullet.
    pub fn sub_bullet(text: impl Into<String>) -> Self {
        Self::SubBullet { text: text.into() }
    }

    /// Dash line.
    pub fn dash(text: impl Into<String>) -> Self {
        Self::Dash { text: text.into() }
    }

    /// Numbered step at the given 1-based level.
    pub fn step(text: impl Into<String>, level: i32) -> Self {
        Self::Step {
            text: text.into(),
            level,
        }
    }

    /// Italic note.
    pub fn note(text: impl Into<String>) -> Self {
        Self::Note { text: text.into() }
    }

    /// Blank line.
    pub fn spacer() -> Self {
        Self::Spacer
    }

    /// Inline sub-heading.
    pub fn heading(text: impl Into<String>) -> Self {
        Self::Heading { text: text.into() }
    }

    /// The item's text content, empty for spacers and unknown items.
    pub fn raw_text(&self) -> &str {
        match self {
            Self::Text { text, .. }
            | Self::Labelled { text }
            | Self::Bullet { text, .. }
            | Self::SubBullet { text }
            | Self::Dash { text }
            | Self::Step { text, .. }
            | Self::Note { text }
            | Self::Heading { text } => text,
            Self::Spacer | Self::Unknown => "",
        }
    }

    /// Check if this is a bullet at either nesting level.
    pub fn is_bullet(&self) -> bool {
        matches!(self, Self::Bullet { .. } | Self::SubBullet { .. })
    }

    /// Items with no renderable text are skipped; a spacer always renders.
    pub fn is_blank(&self) -> bool {
        !matches!(self, Self::Spacer) && self.raw_text().trim().is_empty()
    }
}
