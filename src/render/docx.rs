//! Document assembler: drives section iteration and produces the artifact.

use std::io::Cursor;

use docx_rs::{Docx, RunFonts};

use crate::error::{Error, Result};
use crate::model::{Section, SopDocument};
use crate::render::artifact::{suggested_filename, Artifact};
use crate::render::block::{blank_paragraph, heading_paragraph, BlockRenderer, RenderState};
use crate::render::furniture;
use crate::render::numbering::StepNumbering;
use crate::render::options::RenderOptions;
use crate::render::table;

/// Render a document to a packaged artifact with the given options.
pub fn to_docx(doc: &SopDocument, options: &RenderOptions) -> Result<Artifact> {
    DocxRenderer::with_options(options.clone()).render(doc)
}

/// Renders a [`SopDocument`] into a `.docx` package.
///
/// The renderer is a pure transformation: all mutable state (numbering
/// registration, label spacing, last step level) is confined to one
/// `render` call, so independent documents may be rendered concurrently.
#[derive(Debug, Default)]
pub struct DocxRenderer {
    options: RenderOptions,
}

impl DocxRenderer {
    /// Create a renderer with house-style defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a renderer with explicit options.
    pub fn with_options(options: RenderOptions) -> Self {
        Self { options }
    }

    /// The active render options.
    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Render to a packaged artifact.
    pub fn render(&self, doc: &SopDocument) -> Result<Artifact> {
        let docx = self.assemble(doc)?;
        let mut buffer = Cursor::new(Vec::new());
        docx.build()
            .pack(&mut buffer)
            .map_err(|e| Error::Pack(e.to_string()))?;
        Ok(Artifact::new(
            buffer.into_inner(),
            suggested_filename(doc, self.options.filename_stem.as_deref()),
        ))
    }

    /// Assemble the document package without serializing it. Exposed so
    /// callers and tests can inspect the emitted structure.
    pub fn assemble(&self, doc: &SopDocument) -> Result<Docx> {
        if doc.is_empty() {
            return Err(Error::EmptyDocument);
        }

        log::debug!(
            "rendering '{}' ({} sections)",
            doc.title,
            doc.section_count()
        );

        let mut numbering = StepNumbering::new();
        let mut docx = Docx::new()
            .default_fonts(
                RunFonts::new()
                    .ascii(self.options.font.as_str())
                    .hi_ansi(self.options.font.as_str()),
            )
            .default_size(self.options.base_size_pt * 2);

        docx = numbering.register(docx);
        docx = furniture::title_block(docx, doc, &self.options);

        let blocks = BlockRenderer::new(&self.options);
        let mut state = RenderState::new(&self.options);

        let last = doc.sections.len() - 1;
        for (index, section) in doc.sections.iter().enumerate() {
            docx = self.render_section(docx, section, &blocks, &mut state);
            if index != last {
                docx = docx.add_paragraph(furniture::horizontal_rule());
            }
        }

        Ok(docx
            .footer(furniture::page_footer(doc, &self.options))
            .first_footer(furniture::first_page_footer()))
    }

    fn render_section(
        &self,
        mut docx: Docx,
        section: &Section,
        blocks: &BlockRenderer,
        state: &mut RenderState,
    ) -> Docx {
        if !section.heading.trim().is_empty() {
            docx = docx
                .add_paragraph(heading_paragraph(
                    &section.heading,
                    self.options.heading_size_pt,
                ))
                .add_paragraph(blank_paragraph());
        }

        if section.is_table() {
            return docx.add_table(table::revision_table(&section.rows, &self.options));
        }

        state.spacing.reset();
        for (index, item) in section.items.iter().enumerate() {
            docx = blocks.render_item(docx, item, &section.items[index + 1..], state);
        }
        docx
    }
}
