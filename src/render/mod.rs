//! Presentation of a parsed [`DiffDocument`].
//!
//! Renderers only read the model. Line numbers are shown as resolved, so
//! callers normally run [`DiffDocument::resolve_line_numbers`] first.

pub mod html;
pub mod text;

use crate::diff::{DiffDocument, DiffLine, LineKind};

/// Unified (single column) or side-by-side (two columns) layout
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    Unified,
    SideBySide,
}

/// Output markup
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Format {
    #[default]
    Text,
    Html,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub mode: ViewMode,
    pub format: Format,
    /// Content width of each side-by-side text column, in characters
    pub width: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            mode: ViewMode::Unified,
            format: Format::Text,
            width: 60,
        }
    }
}

/// Render `doc` according to `options`
pub fn render(doc: &DiffDocument, options: &RenderOptions) -> String {
    match (options.format, options.mode) {
        (Format::Text, ViewMode::Unified) => text::unified(doc),
        (Format::Text, ViewMode::SideBySide) => text::side_by_side(doc, options.width),
        (Format::Html, ViewMode::Unified) => html::unified(doc),
        (Format::Html, ViewMode::SideBySide) => html::side_by_side(doc),
    }
}

/// Line number label for the unified view: `+N`, `-N` or the old number
fn unified_number(line: &DiffLine) -> String {
    let number = |n: Option<u32>| n.map(|n| n.to_string()).unwrap_or_default();
    match line.kind {
        LineKind::Added => format!("+{}", number(line.new_line)),
        LineKind::Removed => format!("-{}", number(line.old_line)),
        LineKind::Unchanged => number(line.old_line.or(line.new_line)),
        LineKind::Empty => String::new(),
    }
}
