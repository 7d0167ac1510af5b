//! Flow renderer — headings, paragraphs and bulleted list items for a word processor.
//!
//! No wrapping and no pagination happen here; the viewer reflows the text. Summary and
//! skills therefore go out verbatim, and skills are never truncated.

use crate::models::resume::ResumeSnapshot;
use crate::render::docx;
use crate::render::text::{
    contact_line, display_name, join_nonempty, links_line, skills_line, TITLE_SEPARATOR,
};
use crate::render::RenderError;

/// One structural unit of the flow document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowBlock {
    /// Document title (the person's name).
    Title(String),
    /// First-level section heading.
    Heading(String),
    Paragraph(String),
    /// Bulleted list item; level 0 for entries, level 1 for their bullets.
    ListItem { level: u8, text: String },
}

fn list_item(level: u8, text: impl Into<String>) -> FlowBlock {
    FlowBlock::ListItem {
        level,
        text: text.into(),
    }
}

/// Walks the snapshot in section order and emits the flow blocks.
pub fn layout_blocks(snapshot: &ResumeSnapshot) -> Vec<FlowBlock> {
    let mut blocks = vec![FlowBlock::Title(display_name(snapshot).to_string())];

    let contact = contact_line(snapshot);
    if !contact.is_empty() {
        blocks.push(FlowBlock::Paragraph(contact));
    }

    let links = links_line(snapshot);
    if !links.is_empty() {
        blocks.push(FlowBlock::Paragraph(links));
    }

    if !snapshot.summary.is_empty() {
        blocks.push(FlowBlock::Heading("Summary".into()));
        blocks.push(FlowBlock::Paragraph(snapshot.summary.clone()));
    }

    if !snapshot.education.is_empty() {
        blocks.push(FlowBlock::Heading("Education".into()));
        for edu in &snapshot.education {
            blocks.push(list_item(
                0,
                join_nonempty(
                    [edu.degree.as_str(), edu.institution.as_str(), edu.dates.as_str()],
                    TITLE_SEPARATOR,
                ),
            ));
            if !edu.details.is_empty() {
                blocks.push(FlowBlock::Paragraph(edu.details.clone()));
            }
        }
    }

    if !snapshot.experience.is_empty() {
        blocks.push(FlowBlock::Heading("Experience".into()));
        for exp in &snapshot.experience {
            blocks.push(list_item(
                0,
                join_nonempty(
                    [exp.role.as_str(), exp.company.as_str(), exp.dates.as_str()],
                    TITLE_SEPARATOR,
                ),
            ));
            blocks.extend(exp.bullets.iter().map(|b| list_item(1, b.as_str())));
        }
    }

    if !snapshot.projects.is_empty() {
        blocks.push(FlowBlock::Heading("Projects".into()));
        for proj in &snapshot.projects {
            let name = proj.name.as_deref().unwrap_or_default();
            blocks.push(list_item(
                0,
                join_nonempty([name, proj.tech.as_str()], TITLE_SEPARATOR),
            ));
            blocks.extend(proj.bullets.iter().map(|b| list_item(1, b.as_str())));
        }
    }

    if !snapshot.skills.is_empty() {
        blocks.push(FlowBlock::Heading("Skills".into()));
        blocks.push(FlowBlock::Paragraph(skills_line(snapshot)));
    }

    blocks
}

/// DOCX package bytes plus the number of blocks written into it.
#[derive(Debug, Clone)]
pub struct FlowDocument {
    pub bytes: Vec<u8>,
    pub blocks: usize,
}

/// Renders the flow document as a DOCX package.
pub fn render_flow_document(snapshot: &ResumeSnapshot) -> Result<FlowDocument, RenderError> {
    let blocks = layout_blocks(snapshot);
    Ok(FlowDocument {
        bytes: docx::write_package(&blocks)?,
        blocks: blocks.len(),
    })
}
