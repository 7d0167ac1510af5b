//! Page renderer — fixed US-letter pages, absolute cursor positioning, PDF output.
//!
//! # Architecture
//! - `layout_pages` walks the snapshot and places every line on a page. It is pure and
//!   owns all cursor state for one render, so concurrent renders never interact.
//! - `encode_pdf` turns the placed lines into a PDF using the standard Helvetica font.
//!
//! # Cursor rules
//! The cursor starts at `PAGE_HEIGHT - 50`. Every line is drawn at the current cursor,
//! then the cursor drops by the line's gap. If it falls below 60 the next line starts a
//! fresh page at the top. Pages only exist once a line lands on them.

use pdf_writer::{Content, Finish, Name, Pdf, Rect, Ref, Str};

use crate::models::resume::ResumeSnapshot;
use crate::render::text::{
    contact_line, display_name, join_nonempty, links_line, skills_line, truncate_chars,
    wrap_text, BULLET_PREFIX, TITLE_SEPARATOR,
};
use crate::render::winansi;

// ────────────────────────────────────────────────────────────────────────────
// Page geometry
// ────────────────────────────────────────────────────────────────────────────

/// US letter, in points.
pub const PAGE_WIDTH: f32 = 612.0;
pub const PAGE_HEIGHT: f32 = 792.0;

const TOP_OFFSET: f32 = 50.0;
const BOTTOM_LIMIT: f32 = 60.0;
const LEFT_MARGIN: f32 = 50.0;

/// Any drawn line is cut to this many characters.
pub const MAX_LINE_CHARS: usize = 120;
/// The joined skills line is cut to this many characters before drawing.
pub const MAX_SKILLS_CHARS: usize = 110;
/// Column width for wrapped summary, details and bullet text.
pub const WRAP_WIDTH: usize = 95;

const FONT_NAME: Name<'static> = Name(b"F1");

/// Font size and the vertical space a line consumes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineStyle {
    pub size: f32,
    pub gap: f32,
}

impl LineStyle {
    pub const NAME: Self = Self { size: 16.0, gap: 22.0 };
    pub const HEADING: Self = Self { size: 12.0, gap: 18.0 };
    pub const BODY: Self = Self { size: 10.0, gap: 14.0 };
    pub const BLANK: Self = Self { size: 11.0, gap: 16.0 };
}

// ────────────────────────────────────────────────────────────────────────────
// Cursor and layout state
// ────────────────────────────────────────────────────────────────────────────

/// Vertical cursor for one render invocation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageCursor {
    pub current_y: f32,
    pub page_index: usize,
}

impl PageCursor {
    pub fn new() -> Self {
        Self {
            current_y: PAGE_HEIGHT - TOP_OFFSET,
            page_index: 0,
        }
    }

    /// Returns where the next line goes, then moves past it.
    pub fn advance(&mut self, gap: f32) -> (usize, f32) {
        let placed = (self.page_index, self.current_y);
        self.current_y -= gap;
        if self.current_y < BOTTOM_LIMIT {
            self.page_index += 1;
            self.current_y = PAGE_HEIGHT - TOP_OFFSET;
        }
        placed
    }
}

impl Default for PageCursor {
    fn default() -> Self {
        Self::new()
    }
}

/// A line of text fixed at an absolute position on its page.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLine {
    pub text: String,
    pub x: f32,
    pub y: f32,
    pub size: f32,
}

#[derive(Debug, Default)]
struct PageLayout {
    cursor: PageCursor,
    pages: Vec<Vec<PlacedLine>>,
}

impl PageLayout {
    fn write_line(&mut self, text: &str, style: LineStyle) {
        let (page_index, y) = self.cursor.advance(style.gap);
        while self.pages.len() <= page_index {
            self.pages.push(Vec::new());
        }
        self.pages[page_index].push(PlacedLine {
            text: truncate_chars(text, MAX_LINE_CHARS).to_string(),
            x: LEFT_MARGIN,
            y,
            size: style.size,
        });
    }

    fn body(&mut self, text: &str) {
        self.write_line(text, LineStyle::BODY);
    }

    fn section_heading(&mut self, title: &str) {
        self.write_line("", LineStyle::BLANK);
        self.write_line(title, LineStyle::HEADING);
    }

    fn wrapped_bullets(&mut self, text: &str) {
        for chunk in wrap_text(text, WRAP_WIDTH) {
            self.body(&format!("{BULLET_PREFIX}{chunk}"));
        }
    }

    fn into_pages(mut self) -> Vec<Vec<PlacedLine>> {
        if self.pages.is_empty() {
            self.pages.push(Vec::new());
        }
        self.pages
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Layout
// ────────────────────────────────────────────────────────────────────────────

/// Places every line of the resume. Returns one `Vec<PlacedLine>` per page.
pub fn layout_pages(snapshot: &ResumeSnapshot) -> Vec<Vec<PlacedLine>> {
    let mut layout = PageLayout::default();

    layout.write_line(display_name(snapshot), LineStyle::NAME);

    let contact = contact_line(snapshot);
    if !contact.is_empty() {
        layout.body(&contact);
    }

    let links = links_line(snapshot);
    if !links.is_empty() {
        layout.body(&links);
    }

    if !snapshot.summary.is_empty() {
        layout.section_heading("SUMMARY");
        for chunk in wrap_text(&snapshot.summary, WRAP_WIDTH) {
            layout.body(&chunk);
        }
    }

    if !snapshot.education.is_empty() {
        layout.section_heading("EDUCATION");
        for edu in &snapshot.education {
            let title = join_nonempty(
                [edu.degree.as_str(), edu.institution.as_str()],
                TITLE_SEPARATOR,
            );
            layout.body(format!("{title}  {}", edu.dates).trim());
            if !edu.details.is_empty() {
                layout.wrapped_bullets(&edu.details);
            }
        }
    }

    if !snapshot.experience.is_empty() {
        layout.section_heading("EXPERIENCE");
        for exp in &snapshot.experience {
            let title =
                join_nonempty([exp.role.as_str(), exp.company.as_str()], TITLE_SEPARATOR);
            layout.body(format!("{title}  {}", exp.dates).trim());
            for bullet in &exp.bullets {
                layout.wrapped_bullets(bullet);
            }
        }
    }

    if !snapshot.projects.is_empty() {
        layout.section_heading("PROJECTS");
        for proj in &snapshot.projects {
            let name = proj.name.as_deref().unwrap_or("Project");
            layout.body(format!("{name}  {}", proj.tech).trim());
            for bullet in &proj.bullets {
                layout.wrapped_bullets(bullet);
            }
        }
    }

    if !snapshot.skills.is_empty() {
        layout.section_heading("SKILLS");
        let skills = skills_line(snapshot);
        layout.body(truncate_chars(&skills, MAX_SKILLS_CHARS));
    }

    layout.into_pages()
}

// ────────────────────────────────────────────────────────────────────────────
// PDF encoding
// ────────────────────────────────────────────────────────────────────────────

/// Writes placed lines as a PDF. Output depends only on the input lines.
pub fn encode_pdf(pages: &[Vec<PlacedLine>]) -> Vec<u8> {
    let catalog_id = Ref::new(1);
    let page_tree_id = Ref::new(2);
    let font_id = Ref::new(3);

    // Each page takes a page object followed by its content stream.
    let page_refs: Vec<(Ref, Ref)> = (0..pages.len())
        .map(|i| {
            let base = 4 + 2 * i as i32;
            (Ref::new(base), Ref::new(base + 1))
        })
        .collect();

    let mut pdf = Pdf::new();
    pdf.catalog(catalog_id).pages(page_tree_id);
    pdf.pages(page_tree_id)
        .kids(page_refs.iter().map(|(page_id, _)| *page_id))
        .count(page_refs.len() as i32);

    for (lines, (page_id, content_id)) in pages.iter().zip(&page_refs) {
        let mut page = pdf.page(*page_id);
        page.media_box(Rect::new(0.0, 0.0, PAGE_WIDTH, PAGE_HEIGHT));
        page.parent(page_tree_id);
        page.contents(*content_id);
        page.resources().fonts().pair(FONT_NAME, font_id);
        page.finish();

        let mut content = Content::new();
        for line in lines {
            content.begin_text();
            content.set_font(FONT_NAME, line.size);
            content.next_line(line.x, line.y);
            content.show(Str(&winansi::encode(&line.text)));
            content.end_text();
        }
        pdf.stream(*content_id, &content.finish());
    }

    pdf.type1_font(font_id)
        .base_font(Name(b"Helvetica"))
        .encoding_predefined(Name(b"WinAnsiEncoding"));

    pdf.finish()
}

/// Encoded PDF plus the number of pages laid out.
#[derive(Debug, Clone)]
pub struct PageDocument {
    pub bytes: Vec<u8>,
    pub pages: usize,
}

/// Renders the paginated document. Page assembly has no failure path of its own; the
/// caller-facing `render_document` wraps this in the shared error contract.
pub fn render_page_document(snapshot: &ResumeSnapshot) -> PageDocument {
    let pages = layout_pages(snapshot);
    PageDocument {
        bytes: encode_pdf(&pages),
        pages: pages.len(),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
