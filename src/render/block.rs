//! Block renderer: emits one paragraph (or a short paragraph group) per
//! content item, consulting the label-spacing machine and the numbering
//! geometry.

use docx_rs::{Docx, IndentLevel, LineSpacing, NumberingId, Paragraph, Run, SpecialIndentType};

use crate::model::ContentItem;
use crate::render::numbering::{clamp_level, indent_for, STEP_NUMBERING_ID};
use crate::render::options::RenderOptions;
use crate::render::spacing::LabelSpacing;

/// Indent of a top-level bullet, in twentieths of a point. Each nesting
/// level adds the same amount again.
const BULLET_INDENT: i32 = 360;

const BULLET_GLYPH: &str = "\u{2022} ";
const DASH_GLYPH: &str = "\u{2013} ";

/// An empty paragraph with the house single-spacing geometry.
pub(crate) fn blank_paragraph() -> Paragraph {
    Paragraph::new().line_spacing(LineSpacing::new().before(0).after(0))
}

/// A plain one-run paragraph with zero before/after spacing.
pub(crate) fn text_paragraph(text: &str, bold: bool) -> Paragraph {
    let mut run = Run::new().add_text(text);
    if bold {
        run = run.bold();
    }
    blank_paragraph().add_run(run)
}

/// A bold heading line at the given point size.
pub(crate) fn heading_paragraph(text: &str, size_pt: usize) -> Paragraph {
    blank_paragraph().add_run(Run::new().add_text(text).bold().size(size_pt * 2))
}

/// Mutable state threaded through a whole document render.
///
/// The spacing machine resets per section; the last step level is
/// document-scoped so a note in a later section aligns to the most recent
/// step wherever it appeared.
pub(crate) struct RenderState {
    pub spacing: LabelSpacing,
    pub last_step_level: usize,
}

impl RenderState {
    pub fn new(options: &RenderOptions) -> Self {
        Self {
            spacing: LabelSpacing::new(&options.trigger_labels),
            last_step_level: 1,
        }
    }
}

/// Dispatches each content item to its paragraph-emission routine.
pub(crate) struct BlockRenderer<'a> {
    options: &'a RenderOptions,
}

impl<'a> BlockRenderer<'a> {
    pub fn new(options: &'a RenderOptions) -> Self {
        Self { options }
    }

    /// Render one item. `rest` holds the items following it in the same
    /// section, for the labelled-item lookahead.
    pub fn render_item(
        &self,
        docx: Docx,
        item: &ContentItem,
        rest: &[ContentItem],
        state: &mut RenderState,
    ) -> Docx {
        if let ContentItem::Unknown = item {
            log::warn!("skipping unrecognized content item");
            return docx;
        }
        if item.is_blank() {
            return docx;
        }

        match item {
            ContentItem::Text { text, bold } => docx.add_paragraph(text_paragraph(text, *bold)),

            ContentItem::Heading { text } => {
                state.spacing.on_boundary();
                docx.add_paragraph(heading_paragraph(text, self.options.heading_size_pt))
                    .add_paragraph(blank_paragraph())
            }

            ContentItem::Labelled { text } => self.render_labelled(docx, text, rest, state),

            ContentItem::Bullet { text, indent_level } => {
                state.spacing.on_bullet();
                docx.add_paragraph(bullet_paragraph(text, (*indent_level).min(1)))
            }

            ContentItem::SubBullet { text } => {
                state.spacing.on_bullet();
                docx.add_paragraph(bullet_paragraph(text, 1))
            }

            ContentItem::Dash { text } => docx.add_paragraph(dash_paragraph(text)),

            ContentItem::Step { text, level } => {
                let level = clamp_level(*level);
                state.last_step_level = level;
                state.spacing.on_boundary();
                docx.add_paragraph(step_paragraph(text, level))
            }

            ContentItem::Note { text } => {
                let (left, _) = indent_for(state.last_step_level);
                docx.add_paragraph(blank_paragraph())
                    .add_paragraph(note_paragraph(text, left))
                    .add_paragraph(blank_paragraph())
            }

            ContentItem::Spacer => docx.add_paragraph(blank_paragraph()),

            // handled by the early return above
            ContentItem::Unknown => docx,
        }
    }

    fn render_labelled(
        &self,
        docx: Docx,
        text: &str,
        rest: &[ContentItem],
        state: &mut RenderState,
    ) -> Docx {
        let (label, value) = split_label(text);

        let mut docx = docx;
        if state.spacing.on_label(label) {
            docx = docx.add_paragraph(blank_paragraph());
        }

        // Lookahead past spacers: bullets after the label make it a parent,
        // so the value (if any) is deferred to them.
        let next_is_bullet = rest
            .iter()
            .find(|item| !matches!(item, ContentItem::Spacer))
            .map(ContentItem::is_bullet)
            .unwrap_or(false);

        let mut paragraph =
            blank_paragraph().add_run(Run::new().add_text(format!("{label}:")).bold());
        if !value.is_empty() && !next_is_bullet {
            paragraph = paragraph.add_run(Run::new().add_text(format!(" {value}")));
        }
        docx.add_paragraph(paragraph)
    }
}

/// Split a labelled item on its first colon; a colon-less item is all label.
fn split_label(text: &str) -> (&str, &str) {
    match text.split_once(':') {
        Some((label, value)) => (label.trim(), value.trim()),
        None => (text.trim(), ""),
    }
}

fn bullet_paragraph(text: &str, indent_level: u8) -> Paragraph {
    let left = BULLET_INDENT + i32::from(indent_level) * BULLET_INDENT;
    blank_paragraph()
        .indent(
            Some(left),
            Some(SpecialIndentType::Hanging(BULLET_INDENT)),
            None,
            None,
        )
        .add_run(Run::new().add_text(BULLET_GLYPH).bold())
        .add_run(Run::new().add_text(text))
}

fn dash_paragraph(text: &str) -> Paragraph {
    blank_paragraph()
        .indent(Some(BULLET_INDENT), None, None, None)
        .add_run(Run::new().add_text(format!("{DASH_GLYPH}{text}")))
}

fn step_paragraph(text: &str, level: usize) -> Paragraph {
    blank_paragraph()
        .numbering(
            NumberingId::new(STEP_NUMBERING_ID),
            IndentLevel::new(level - 1),
        )
        .add_run(Run::new().add_text(text))
}

fn note_paragraph(text: &str, left: i32) -> Paragraph {
    blank_paragraph()
        .indent(Some(left), None, None, None)
        .add_run(Run::new().add_text(text).italic())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_label() {
        assert_eq!(split_label("Objective: Do X"), ("Objective", "Do X"));
        assert_eq!(split_label("Objective:"), ("Objective", ""));
        assert_eq!(split_label("Overview"), ("Overview", ""));
        // only the first colon splits
        assert_eq!(split_label("Time: 10:30"), ("Time", "10:30"));
    }

    fn render_to_xml(items: Vec<ContentItem>) -> String {
        let options = RenderOptions::default();
        let blocks = BlockRenderer::new(&options);
        let mut state = RenderState::new(&options);
        let mut docx = Docx::new();
        for (index, item) in items.iter().enumerate() {
            docx = blocks.render_item(docx, item, &items[index + 1..], &mut state);
        }
        String::from_utf8(docx.build().document).unwrap()
    }

    #[test]
    fn test_blank_items_skipped_except_spacer() {
        let xml = render_to_xml(vec![
            ContentItem::text("  "),
            ContentItem::note(""),
            ContentItem::Unknown,
        ]);
        assert_eq!(xml.matches("</w:p>").count(), 0);

        let xml = render_to_xml(vec![ContentItem::spacer()]);
        assert_eq!(xml.matches("</w:p>").count(), 1);
    }

    #[test]
    fn test_label_with_value_renders_inline() {
        let xml = render_to_xml(vec![ContentItem::labelled("Objective: Do X")]);
        assert!(xml.contains("Objective:"));
        assert!(xml.contains(" Do X"));
    }

    #[test]
    fn test_label_followed_by_bullet_renders_label_only() {
        let xml = render_to_xml(vec![
            ContentItem::labelled("Objective: ignored"),
            ContentItem::spacer(),
            ContentItem::bullet("child"),
        ]);
        assert!(xml.contains("Objective:"));
        assert!(!xml.contains("ignored"));
    }

    #[test]
    fn test_step_references_numbering_by_level() {
        let xml = render_to_xml(vec![
            ContentItem::step("first", 1),
            ContentItem::step("deep", 99),
        ]);
        assert!(xml.contains(r#"<w:ilvl w:val="0""#));
        // level 99 clamps to 5, zero-based 4
        assert!(xml.contains(r#"<w:ilvl w:val="4""#));
    }

    #[test]
    fn test_note_aligns_to_last_step_level() {
        let xml = render_to_xml(vec![
            ContentItem::step("outer", 1),
            ContentItem::step("inner", 2),
            ContentItem::note("watch out"),
        ]);
        assert!(xml.contains(r#"w:left="1440""#));
    }

    #[test]
    fn test_note_without_steps_uses_level_one() {
        let xml = render_to_xml(vec![ContentItem::note("early")]);
        assert!(xml.contains(r#"w:left="720""#));
    }
}
