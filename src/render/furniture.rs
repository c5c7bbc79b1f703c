//! Page furniture: title block, horizontal rules, footers.

use docx_rs::{
    AlignmentType, Docx, Footer, Paragraph, ParagraphBorder, ParagraphBorderPosition,
    ParagraphBorders, Run,
};

use crate::model::SopDocument;
use crate::render::block::{blank_paragraph, text_paragraph};
use crate::render::options::RenderOptions;

/// Rule weight in eighths of a point (0.75pt).
const RULE_SIZE: usize = 6;

/// An empty paragraph carrying a single bottom border, used after the title
/// block and between sections.
pub(crate) fn horizontal_rule() -> Paragraph {
    blank_paragraph().set_borders(
        ParagraphBorders::with_empty().set(
            ParagraphBorder::new(ParagraphBorderPosition::Bottom)
                .size(RULE_SIZE)
                .space(0)
                .color("auto"),
        ),
    )
}

/// Emit the title block: bold title line, id line, author/approver/date
/// lines, closing rule.
pub(crate) fn title_block(docx: Docx, doc: &SopDocument, options: &RenderOptions) -> Docx {
    let title = blank_paragraph().add_run(
        Run::new()
            .add_text(format!("SOP Title: {}", doc.title))
            .bold()
            .size(options.title_size_pt * 2),
    );

    docx.add_paragraph(title)
        .add_paragraph(text_paragraph(&format!("SOP ID: {}", doc.id), false))
        .add_paragraph(blank_paragraph())
        .add_paragraph(text_paragraph(
            &format!("Prepared By: {}", doc.prepared_by),
            false,
        ))
        .add_paragraph(text_paragraph(
            &format!("Approved By: {}", doc.approved_by),
            false,
        ))
        .add_paragraph(text_paragraph(
            &format!("Revision Date: {}", doc.revision_date),
            false,
        ))
        .add_paragraph(horizontal_rule())
}

/// Continuation-page footer: centered title/id and revision-date lines.
pub(crate) fn page_footer(doc: &SopDocument, options: &RenderOptions) -> Footer {
    let size = options.footer_size_pt * 2;
    Footer::new()
        .add_paragraph(blank_paragraph())
        .add_paragraph(
            blank_paragraph().align(AlignmentType::Center).add_run(
                Run::new()
                    .add_text(format!("{} [{}]", doc.title, doc.id))
                    .size(size),
            ),
        )
        .add_paragraph(
            blank_paragraph().align(AlignmentType::Center).add_run(
                Run::new()
                    .add_text(format!("Revision Date: {}", doc.revision_date))
                    .size(size),
            ),
        )
}

/// The first page carries no footer text; declaring it distinct keeps the
/// continuation footer off page one.
pub(crate) fn first_page_footer() -> Footer {
    Footer::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_horizontal_rule_has_only_bottom_border() {
        let docx = Docx::new().add_paragraph(horizontal_rule());
        let xml = String::from_utf8(docx.build().document).unwrap();
        assert!(xml.contains(r#"w:sz="6""#));
        assert!(xml.contains("<w:bottom"));
        assert!(!xml.contains("<w:top"));
    }

    #[test]
    fn test_title_block_lines() {
        let doc = SopDocument::new("Widget Assembly", "SOP-042");
        let options = RenderOptions::default();
        let docx = title_block(Docx::new(), &doc, &options);
        let xml = String::from_utf8(docx.build().document).unwrap();

        assert!(xml.contains("SOP Title: Widget Assembly"));
        assert!(xml.contains("SOP ID: SOP-042"));
        assert!(xml.contains("Prepared By: Name"));
        assert!(xml.contains("Approved By: Approver"));
        assert!(xml.contains("Revision Date: Date"));
        // title line is 18pt
        assert!(xml.contains(r#"w:val="36""#));
    }

    #[test]
    fn test_footer_lines_centered() {
        let mut doc = SopDocument::new("Widget Assembly", "SOP-042");
        doc.revision_date = "2024-06-01".to_string();
        let options = RenderOptions::default();

        let docx = Docx::new()
            .add_paragraph(blank_paragraph())
            .footer(page_footer(&doc, &options));
        let xml = docx.build();
        let footer_xml = String::from_utf8(xml.footers.concat()).unwrap();

        assert!(footer_xml.contains("Widget Assembly [SOP-042]"));
        assert!(footer_xml.contains("Revision Date: 2024-06-01"));
        assert!(footer_xml.contains("center"));
    }
}
