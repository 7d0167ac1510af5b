// Document rendering engine.
// Two independent, pure renderers over the same snapshot: a paginated PDF and a
// flow-layout DOCX. Neither holds state between calls.

pub mod docx;
pub mod flow;
pub mod page;
pub mod text;
pub mod winansi;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::models::resume::ResumeSnapshot;

/// Rendering failure. Callers treat every variant the same way; the payload is for logs.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("document packaging failed: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("I/O error while writing document: {0}")]
    Io(#[from] std::io::Error),

    #[error("render worker failed: {0}")]
    Worker(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    /// Fixed-page document.
    Pdf,
    /// Flow-layout word-processor document.
    Docx,
}

impl DocumentFormat {
    pub fn content_type(self) -> &'static str {
        match self {
            DocumentFormat::Pdf => "application/pdf",
            DocumentFormat::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            DocumentFormat::Pdf => "pdf",
            DocumentFormat::Docx => "docx",
        }
    }

    /// Upper-case label used in user-facing error messages.
    pub fn label(self) -> &'static str {
        match self {
            DocumentFormat::Pdf => "PDF",
            DocumentFormat::Docx => "DOCX",
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for DocumentFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pdf" => Ok(DocumentFormat::Pdf),
            "docx" => Ok(DocumentFormat::Docx),
            other => Err(format!("unsupported document format '{other}'")),
        }
    }
}

/// A finished document ready to be sent as an attachment.
#[derive(Debug, Clone)]
pub struct RenderedDocument {
    pub format: DocumentFormat,
    pub filename: String,
    pub bytes: Vec<u8>,
    /// Pages laid out, for the paginated format.
    pub pages: Option<usize>,
    /// Blocks written, for the flow format.
    pub blocks: Option<usize>,
}

/// `{full_name with spaces as underscores, or "resume"}.{ext}`.
///
/// Quotes, backslashes and control characters are dropped so the name can be placed in a
/// quoted `Content-Disposition` parameter.
pub fn export_filename(full_name: &str, format: DocumentFormat) -> String {
    let stem = if full_name.is_empty() {
        "resume".to_string()
    } else {
        full_name
            .chars()
            .filter(|c| !c.is_control() && *c != '"' && *c != '\\')
            .map(|c| if c == ' ' { '_' } else { c })
            .collect()
    };
    format!("{stem}.{}", format.extension())
}

/// Renders `snapshot` in the requested format.
pub fn render_document(
    snapshot: &ResumeSnapshot,
    format: DocumentFormat,
) -> Result<RenderedDocument, RenderError> {
    let (bytes, pages, blocks) = match format {
        DocumentFormat::Pdf => {
            let document = page::render_page_document(snapshot);
            (document.bytes, Some(document.pages), None)
        }
        DocumentFormat::Docx => {
            let document = flow::render_flow_document(snapshot)?;
            (document.bytes, None, Some(document.blocks))
        }
    };

    let counts = snapshot.section_counts();
    info!(
        format = %format,
        bytes = bytes.len(),
        pages,
        blocks,
        education = counts.education,
        experience = counts.experience,
        projects = counts.projects,
        skills = counts.skills,
        "Document rendered"
    );

    Ok(RenderedDocument {
        format,
        filename: export_filename(&snapshot.full_name, format),
        bytes,
        pages,
        blocks,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_filename() {
        assert_eq!(export_filename("John Doe", DocumentFormat::Pdf), "John_Doe.pdf");
        assert_eq!(export_filename("", DocumentFormat::Docx), "resume.docx");
        assert_eq!(
            export_filename("Jane \"JJ\" Roe", DocumentFormat::Pdf),
            "Jane_JJ_Roe.pdf"
        );
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!("pdf".parse::<DocumentFormat>(), Ok(DocumentFormat::Pdf));
        assert_eq!("DOCX".parse::<DocumentFormat>(), Ok(DocumentFormat::Docx));
        assert!("odt".parse::<DocumentFormat>().is_err());
    }

    #[test]
    fn test_content_types() {
        assert_eq!(DocumentFormat::Pdf.content_type(), "application/pdf");
        assert!(DocumentFormat::Docx.content_type().ends_with("wordprocessingml.document"));
    }

    #[test]
    fn test_render_document_both_formats() {
        let snapshot = crate::sample::sample_resume();

        let pdf = render_document(&snapshot, DocumentFormat::Pdf).unwrap();
        assert_eq!(pdf.filename, "John_Doe.pdf");
        assert!(pdf.bytes.starts_with(b"%PDF-"));

        let docx = render_document(&snapshot, DocumentFormat::Docx).unwrap();
        assert_eq!(docx.filename, "John_Doe.docx");
        assert!(docx.bytes.starts_with(b"PK"));
    }

    #[test]
    fn test_render_document_reports_layout_counts() {
        let snapshot = crate::sample::sample_resume();

        let pdf = render_document(&snapshot, DocumentFormat::Pdf).unwrap();
        assert_eq!(pdf.pages, Some(page::layout_pages(&snapshot).len()));
        assert_eq!(pdf.blocks, None);

        let docx = render_document(&snapshot, DocumentFormat::Docx).unwrap();
        assert_eq!(docx.pages, None);
        assert_eq!(docx.blocks, Some(flow::layout_blocks(&snapshot).len()));
    }

    #[test]
    fn test_summary_heading_suppressed_in_both_formats() {
        let mut snapshot = crate::sample::sample_resume();
        snapshot.summary.clear();

        let pages = page::layout_pages(&snapshot);
        assert!(!pages.iter().flatten().any(|l| l.text == "SUMMARY"));

        let blocks = flow::layout_blocks(&snapshot);
        assert!(!blocks.contains(&flow::FlowBlock::Heading("Summary".into())));
    }
}
