use super::file::{FileChange, parse_path_line};
use super::hunk::Hunk;
use super::line::{Classified, LineKind, NO_NEWLINE_MARKER, classify};
use std::fmt;

/// A parsed diff: every file change in input order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiffDocument {
    pub files: Vec<FileChange>,
}

/// Body lines the current hunk header still promises
#[derive(Debug, Clone, Copy, Default)]
struct Remaining {
    old: u32,
    new: u32,
}

impl Remaining {
    fn of(hunk: &Hunk) -> Self {
        Remaining {
            old: hunk.old_count,
            new: hunk.new_count,
        }
    }

    fn is_open(self) -> bool {
        self.old > 0 || self.new > 0
    }

    fn consume(&mut self, kind: LineKind) {
        match kind {
            LineKind::Added => self.new = self.new.saturating_sub(1),
            LineKind::Removed => self.old = self.old.saturating_sub(1),
            LineKind::Unchanged => {
                self.old = self.old.saturating_sub(1);
                self.new = self.new.saturating_sub(1);
            }
            LineKind::Empty => {}
        }
    }
}

/// Scanning state for a single parse call
#[derive(Default)]
struct Parser {
    files: Vec<FileChange>,
    file: Option<FileChange>,
    in_hunk: bool,
    remaining: Remaining,
}

impl Parser {
    fn feed(&mut self, line: &str) {
        if line.starts_with("diff --git") {
            self.flush();
            self.file = Some(FileChange::parse_git_header(line));
        } else if self.in_hunk
            && self.remaining.is_open()
            && (line.starts_with("--- ") || line.starts_with("+++ "))
        {
            // `--- x` inside a hunk that still expects lines is a removed `-- x`
            self.push_body_line(line);
        } else if line.starts_with("index ") {
            if let Some(file) = self.file.as_mut() {
                file.index_line = Some(line.to_string());
            }
        } else if line.starts_with("new file mode") || line.starts_with("deleted file mode") {
            if let Some(file) = self.file.as_mut() {
                file.apply_mode_line(line);
            }
        } else if line.starts_with("--- ") {
            if let Some(file) = self.file.as_mut() {
                file.old_path = parse_path_line(line);
            }
        } else if line.starts_with("+++ ") {
            if let Some(file) = self.file.as_mut() {
                file.new_path = parse_path_line(line);
            }
        } else if line.starts_with("@@") {
            self.start_hunk(line);
        } else if self.in_hunk {
            self.push_body_line(line);
        } else {
            log::trace!("Ignoring line outside of any hunk: {line:?}");
        }
    }

    fn start_hunk(&mut self, line: &str) {
        let Some(file) = self.file.as_mut() else {
            log::debug!("Dropping hunk header with no preceding file header: {line:?}");
            self.in_hunk = false;
            return;
        };

        let hunk = Hunk::parse_header(line);
        self.remaining = Remaining::of(&hunk);
        file.hunks.push(hunk);
        self.in_hunk = true;
    }

    fn push_body_line(&mut self, line: &str) {
        let Some(hunk) = self.file.as_mut().and_then(|file| file.hunks.last_mut()) else {
            return;
        };

        match classify(line) {
            Classified::Line { kind, text } => {
                hunk.push_line(kind, text);
                self.remaining.consume(kind);
            }
            Classified::Annotation(text) if text.starts_with(NO_NEWLINE_MARKER) => {
                if let Some(last) = hunk.lines.last_mut() {
                    last.missing_newline = true;
                }
            }
            Classified::Annotation(text) => {
                log::trace!("Ignoring annotation inside hunk: {text:?}");
            }
        }
    }

    fn flush(&mut self) {
        if let Some(file) = self.file.take() {
            self.files.push(file);
        }
        self.in_hunk = false;
        self.remaining = Remaining::default();
    }

    fn finish(mut self) -> DiffDocument {
        self.flush();
        DiffDocument { files: self.files }
    }
}

impl DiffDocument {
    /// Parse raw `diff --git` output.
    ///
    /// Never fails: malformed headers produce degraded records and
    /// unrecognized lines are skipped, so the worst case is an empty or
    /// partially populated document. Line numbers are left unresolved.
    ///
    /// ```
    /// use diffpane::DiffDocument;
    ///
    /// let doc = DiffDocument::parse("diff --git a/a b/a\n--- a/a\n+++ b/a\n@@ -1 +1 @@\n-x\n+y\n");
    /// assert_eq!(doc.files.len(), 1);
    /// assert_eq!(doc.files[0].hunks[0].lines.len(), 2);
    /// ```
    pub fn parse(text: &str) -> Self {
        let mut parser = Parser::default();
        for line in text.lines() {
            parser.feed(line);
        }
        parser.finish()
    }

    /// Parse possibly absent input; `None` yields an empty document
    pub fn parse_opt(text: Option<&str>) -> Self {
        text.map(Self::parse).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl fmt::Display for DiffDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for file in &self.files {
            write!(f, "{file}")?;
        }
        Ok(())
    }
}
