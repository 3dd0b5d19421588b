use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, ObjectId, Stream, dictionary};
use std::path::Path;
use thiserror::Error;
use tracing::{debug, warn};

use crate::render::html_text::{BlockKind, TextBlock, text_blocks};

/// Default name of the exported document.
pub const DEFAULT_FILENAME: &str = "formatted-text.pdf";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to build PDF: {0}")]
    Pdf(String),
    #[error("failed to write PDF: {0}")]
    Io(#[from] std::io::Error),
}

/// Page geometry and fonts of the exported PDF, in points.
///
/// The default is US Letter portrait with 1-inch margins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdfOptions {
    pub page_width: i64,
    pub page_height: i64,
    pub margin: i64,
    pub font_size: i64,
    pub heading_size: i64,
}

impl Default for PdfOptions {
    fn default() -> Self {
        Self {
            page_width: 612,
            page_height: 792,
            margin: 72,
            font_size: 11,
            heading_size: 14,
        }
    }
}

impl PdfOptions {
    fn text_width(&self) -> i64 {
        self.page_width - 2 * self.margin
    }

    /// Courier advances 0.6 em per glyph.
    fn chars_per_line(&self, size: i64) -> usize {
        (self.text_width() * 10 / (size * 6)).max(1) as usize
    }
}

/// One laid-out line of text.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Line {
    font: &'static str,
    size: i64,
    text: String,
}

/// Renders an HTML fragment to PDF bytes.
///
/// The fragment's text blocks are laid out top to bottom in Courier,
/// headings in Courier-Bold; new pages start when the bottom margin is
/// reached. The standard fonts only cover Latin-1: other characters are
/// written as `?` and a warning reports how many were replaced.
pub fn export_to_pdf(html: &str, options: &PdfOptions) -> Result<Vec<u8>, ExportError> {
    let blocks = text_blocks(html);
    let lines = layout(&blocks, options);

    let replaced = unencodable_chars(&lines);
    if replaced > 0 {
        warn!(replaced, "PDF fonts cannot show some characters; they were replaced with '?'");
    }

    let pages = paginate(&lines, options);
    debug!(blocks = blocks.len(), pages = pages.len(), "exporting PDF");
    build_document(pages, options)
}

/// Writes the PDF for `html` to `path`.
pub fn save_pdf(html: &str, options: &PdfOptions, path: &Path) -> Result<(), ExportError> {
    let bytes = export_to_pdf(html, options)?;
    std::fs::write(path, bytes)?;
    Ok(())
}

fn layout(blocks: &[TextBlock], options: &PdfOptions) -> Vec<Option<Line>> {
    let mut lines = Vec::new();

    for block in blocks {
        let (font, size) = match block.kind {
            BlockKind::Heading(_) => ("F2", options.heading_size),
            _ => ("F1", options.font_size),
        };
        let width = options.chars_per_line(size);

        let wrapped = match block.kind {
            BlockKind::Code => block
                .text
                .lines()
                .flat_map(|line| hard_wrap(line, width))
                .collect(),
            BlockKind::ListItem => wrap_words(&format!("- {}", block.text), width),
            _ => wrap_words(&block.text, width),
        };

        lines.extend(wrapped.into_iter().map(|text| Some(Line { font, size, text })));
        // Blank gap between blocks
        lines.push(None);
    }

    lines
}

fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let needed = current.chars().count() + usize::from(!current.is_empty()) + word.chars().count();
        if needed > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if word.chars().count() > width {
            let mut pieces = hard_wrap(word, width);
            current = pieces.pop().unwrap_or_default();
            lines.extend(pieces);
            continue;
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

fn hard_wrap(line: &str, width: usize) -> Vec<String> {
    let chars: Vec<char> = line.chars().collect();
    if chars.is_empty() {
        return vec![String::new()];
    }
    chars.chunks(width).map(|chunk| chunk.iter().collect()).collect()
}

fn paginate(lines: &[Option<Line>], options: &PdfOptions) -> Vec<Vec<Operation>> {
    let top = options.page_height - options.margin;
    let gap = options.font_size / 2;

    let mut pages = Vec::new();
    let mut operations = Vec::new();
    let mut y = top;

    for line in lines {
        let Some(line) = line else {
            y -= gap;
            continue;
        };
        let line_height = line.size + 4;
        if y - line_height < options.margin {
            pages.push(std::mem::take(&mut operations));
            y = top;
        }
        y -= line_height;

        operations.extend([
            Operation::new("BT", vec![]),
            Operation::new("Tf", vec![line.font.into(), Object::Integer(line.size)]),
            Operation::new("Td", vec![Object::Integer(options.margin), Object::Integer(y)]),
            Operation::new("Tj", vec![Object::string_literal(win_ansi(&line.text))]),
            Operation::new("ET", vec![]),
        ]);
    }

    if !operations.is_empty() || pages.is_empty() {
        pages.push(operations);
    }
    pages
}

fn is_win_ansi(c: char) -> bool {
    matches!(c as u32, 0x20..=0x7E | 0xA0..=0xFF)
}

/// Encodes text for the standard fonts; characters outside Latin-1 become `?`.
fn win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| if is_win_ansi(c) { c as u32 as u8 } else { b'?' })
        .collect()
}

fn unencodable_chars(lines: &[Option<Line>]) -> usize {
    lines
        .iter()
        .flatten()
        .map(|line| line.text.chars().filter(|c| !is_win_ansi(*c)).count())
        .sum()
}

fn build_document(pages: Vec<Vec<Operation>>, options: &PdfOptions) -> Result<Vec<u8>, ExportError> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font = |name: &str| {
        dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => Object::Name(name.as_bytes().to_vec()),
            "Encoding" => "WinAnsiEncoding",
        }
    };
    let regular_id = doc.add_object(font("Courier"));
    let bold_id = doc.add_object(font("Courier-Bold"));
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => regular_id,
            "F2" => bold_id,
        },
    });

    let mut kids: Vec<Object> = Vec::with_capacity(pages.len());
    for operations in pages {
        let content = Content { operations };
        let encoded = content
            .encode()
            .map_err(|e| ExportError::Pdf(e.to_string()))?;
        let content_id = doc.add_object(Stream::new(dictionary! {}, encoded));
        let page_id: ObjectId = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    let pages_dict = dictionary! {
        "Type" => "Pages",
        "Kids" => kids,
        "Count" => count,
        "Resources" => resources_id,
        "MediaBox" => vec![
            Object::Integer(0),
            Object::Integer(0),
            Object::Integer(options.page_width),
            Object::Integer(options.page_height),
        ],
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages_dict));

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc.compress();

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes)
        .map_err(|e| ExportError::Pdf(e.to_string()))?;
    Ok(bytes)
}
