use std::io::Cursor;

use docx_rs::{AlignmentType, Docx, Paragraph, Run, RunFonts, Style, StyleType};

use crate::error::RenderError;
use crate::styles::DocxStyles;

const TITLE_STYLE_ID: &str = "RecordTitle";

/// Pack substituted template text into DOCX bytes.
///
/// Layout follows the traditional record form:
/// - the first non-empty line → centered bold title
/// - blank line → empty paragraph (vertical spacing is part of the template)
/// - everything else → body paragraph, leading indentation preserved
pub fn build_docx(rendered: &str, styles: &DocxStyles) -> Result<Vec<u8>, RenderError> {
    let mut docx = Docx::new().add_style(
        Style::new(TITLE_STYLE_ID, StyleType::Paragraph)
            .name("record title")
            .size(styles.title_size * 2), // OOXML uses half-points
    );

    let mut title_done = false;
    for line in rendered.lines() {
        if line.trim().is_empty() {
            docx = docx.add_paragraph(Paragraph::new());
            continue;
        }

        if title_done {
            docx = docx.add_paragraph(body_paragraph(line.trim_end(), styles));
        } else {
            docx = docx.add_paragraph(title_paragraph(line.trim(), styles));
            title_done = true;
        }
    }

    let mut buf = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut buf)
        .map_err(|e| RenderError::Docx(e.to_string()))?;

    Ok(buf.into_inner())
}

fn title_paragraph(text: &str, styles: &DocxStyles) -> Paragraph {
    Paragraph::new()
        .style(TITLE_STYLE_ID)
        .align(AlignmentType::Center)
        .add_run(
            Run::new()
                .add_text(text)
                .bold()
                .size(styles.title_size * 2)
                .fonts(
                    RunFonts::new()
                        .ascii(&styles.title_font)
                        .east_asia(&styles.title_font),
                ),
        )
}

fn body_paragraph(text: &str, styles: &DocxStyles) -> Paragraph {
    Paragraph::new().align(AlignmentType::Left).add_run(
        Run::new()
            .add_text(text)
            .size(styles.body_size * 2)
            .fonts(
                RunFonts::new()
                    .ascii(&styles.body_font)
                    .east_asia(&styles.body_font),
            ),
    )
}
