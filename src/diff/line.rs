use std::fmt;

/// How a single body line of a hunk relates the old and new file versions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineKind {
    /// Present only in the new version (`+` prefix)
    Added,
    /// Present only in the old version (`-` prefix)
    Removed,
    /// Present in both versions (` ` prefix or a bare empty line)
    Unchanged,
    /// Alignment placeholder; never produced by the parser
    Empty,
}

impl LineKind {
    /// Prefix character used when re-emitting this kind as diff text
    pub fn marker(self) -> char {
        match self {
            LineKind::Added => '+',
            LineKind::Removed => '-',
            LineKind::Unchanged | LineKind::Empty => ' ',
        }
    }
}

/// A line belonging to a hunk.
///
/// Line numbers stay `None` until [`crate::resolve_line_numbers`] runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffLine {
    pub kind: LineKind,
    /// Content without the leading marker character
    pub text: String,
    pub old_line: Option<u32>,
    pub new_line: Option<u32>,
    /// 1-based index of this line within its hunk
    pub position: u32,
    /// Followed by a `\ No newline at end of file` annotation
    pub missing_newline: bool,
}

impl DiffLine {
    pub fn new(kind: LineKind, text: impl Into<String>, position: u32) -> Self {
        Self {
            kind,
            text: text.into(),
            old_line: None,
            new_line: None,
            position,
            missing_newline: false,
        }
    }
}

impl fmt::Display for DiffLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}{}", self.kind.marker(), self.text)?;
        if self.missing_newline {
            writeln!(f, "{NO_NEWLINE_MARKER}")?;
        }
        Ok(())
    }
}

/// Annotation git emits after a line lacking a trailing newline
pub const NO_NEWLINE_MARKER: &str = "\\ No newline at end of file";

/// Result of classifying one raw hunk body line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classified<'a> {
    /// A counted line with its content (marker stripped)
    Line { kind: LineKind, text: &'a str },
    /// Anything else, kept verbatim; never numbered
    Annotation(&'a str),
}

/// Classify a raw diff body line (without trailing newline).
///
/// ```
/// use diffpane::diff::line::{classify, Classified, LineKind};
///
/// assert_eq!(classify("+added"), Classified::Line { kind: LineKind::Added, text: "added" });
/// assert_eq!(classify(""), Classified::Line { kind: LineKind::Unchanged, text: "" });
/// assert_eq!(classify("\\ No newline at end of file"),
///            Classified::Annotation("\\ No newline at end of file"));
/// ```
pub fn classify(raw: &str) -> Classified<'_> {
    let kind = match raw.chars().next() {
        None => {
            return Classified::Line {
                kind: LineKind::Unchanged,
                text: "",
            };
        }
        Some('+') => LineKind::Added,
        Some('-') => LineKind::Removed,
        Some(' ') => LineKind::Unchanged,
        Some(_) => return Classified::Annotation(raw),
    };

    Classified::Line {
        kind,
        text: &raw[1..],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use similar_asserts::assert_eq;

    #[test]
    fn classify_markers() {
        assert_eq!(
            classify("+let x = 1;"),
            Classified::Line {
                kind: LineKind::Added,
                text: "let x = 1;"
            }
        );
        assert_eq!(
            classify("-let x = 0;"),
            Classified::Line {
                kind: LineKind::Removed,
                text: "let x = 0;"
            }
        );
        assert_eq!(
            classify("   indented"),
            Classified::Line {
                kind: LineKind::Unchanged,
                text: "  indented"
            }
        );
    }

    #[test]
    fn classify_marker_only_lines() {
        assert_eq!(
            classify("+"),
            Classified::Line {
                kind: LineKind::Added,
                text: ""
            }
        );
        assert_eq!(
            classify(" "),
            Classified::Line {
                kind: LineKind::Unchanged,
                text: ""
            }
        );
    }

    #[test]
    fn classify_content_that_looks_like_markers() {
        assert_eq!(
            classify("--- not a header"),
            Classified::Line {
                kind: LineKind::Removed,
                text: "-- not a header"
            }
        );
        assert_eq!(
            classify("++counter;"),
            Classified::Line {
                kind: LineKind::Added,
                text: "+counter;"
            }
        );
    }

    #[test]
    fn classify_annotation_keeps_full_text() {
        assert_eq!(
            classify(NO_NEWLINE_MARKER),
            Classified::Annotation(NO_NEWLINE_MARKER)
        );
        assert_eq!(classify("garbage"), Classified::Annotation("garbage"));
    }

    #[test]
    fn render_line_with_missing_newline() {
        let mut line = DiffLine::new(LineKind::Removed, "last", 3);
        line.missing_newline = true;
        assert_eq!(line.to_string(), "-last\n\\ No newline at end of file\n");
    }
}
