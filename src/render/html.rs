//! HTML markup using the viewer's `diff-*` CSS classes.

use super::unified_number;
use crate::align::{Side, Slot, align_for_side_by_side};
use crate::diff::{DiffDocument, FileChange, Hunk, LineKind};
use crate::filetype::FileType;

pub fn unified(doc: &DiffDocument) -> String {
    let mut html = String::new();

    for file in &doc.files {
        html.push_str("<div class=\"unified-file-container\">\n");
        html.push_str(&file_header(file));
        for hunk in &file.hunks {
            html.push_str(&hunk_header(hunk));
            for line in &hunk.lines {
                html.push_str(&line_row(line.kind, &unified_number(line), &line.text));
            }
        }
        html.push_str("</div>\n");
    }

    html
}

/// Two panels whose rows line up one to one
pub fn side_by_side(doc: &DiffDocument) -> String {
    let mut left = String::new();
    let mut right = String::new();

    for file in &doc.files {
        let header = file_header(file);
        left.push_str(&header);
        right.push_str(&header);

        for (original, modified) in align_for_side_by_side(file).rows() {
            left.push_str(&slot_row(original, Side::Original));
            right.push_str(&slot_row(modified, Side::Modified));
        }
    }

    let mut html = String::from("<div class=\"side-by-side-container\">\n");
    html.push_str("<div class=\"side-by-side-header\">- Original</div>\n");
    html.push_str("<div class=\"side-by-side-header\">+ Modified</div>\n");
    for (id, content) in [("left-panel", left), ("right-panel", right)] {
        html.push_str(&format!(
            "<div class=\"side-by-side-panel\" id=\"{id}\">\n<div class=\"side-by-side-content\">\n"
        ));
        html.push_str(&content);
        html.push_str("</div>\n</div>\n");
    }
    html.push_str("</div>\n");
    html
}

fn file_header(file: &FileChange) -> String {
    let icon = FileType::from_path(file.display_path()).icon();
    format!(
        "<div class=\"diff-file-header\"><span class=\"file-icon\">{icon}</span> {}</div>\n",
        escape(&file.header_label())
    )
}

fn hunk_header(hunk: &Hunk) -> String {
    format!(
        "<div class=\"diff-hunk-header\">{}</div>\n",
        escape(&hunk.header_text)
    )
}

fn slot_row(slot: &Slot<'_>, column: Side) -> String {
    let number = slot
        .line_number(column)
        .map(|n| n.to_string())
        .unwrap_or_default();
    line_row(slot.kind(), &number, slot.text())
}

fn line_row(kind: LineKind, number: &str, text: &str) -> String {
    let content = match kind {
        LineKind::Empty => "&nbsp;".to_string(),
        _ => escape(text),
    };
    format!(
        "<div class=\"diff-line {}\"><div class=\"diff-line-number\">{number}</div><div class=\"diff-line-content\">{content}</div></div>\n",
        line_class(kind)
    )
}

fn line_class(kind: LineKind) -> &'static str {
    match kind {
        LineKind::Added => "diff-line-added",
        LineKind::Removed => "diff-line-removed",
        LineKind::Unchanged => "diff-line-unchanged",
        LineKind::Empty => "diff-line-empty",
    }
}

/// Escape text for use in element content and attribute values
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    escaped
}
