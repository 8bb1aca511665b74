use super::line::{DiffLine, LineKind};
use nom::{
    IResult, Parser,
    bytes::complete::tag,
    character::complete::{char, digit1, space0},
    combinator::{map_res, opt, rest},
    sequence::preceded,
};
use std::fmt;

/// A single hunk from a unified diff
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hunk {
    pub old_start: u32,
    pub old_count: u32,
    pub new_start: u32,
    pub new_count: u32,
    /// Text after the closing `@@`, trimmed (usually a function signature)
    pub context_label: String,
    /// The raw `@@` line as it appeared in the input
    pub header_text: String,
    pub lines: Vec<DiffLine>,
}

/// Numeric ranges and trailing context of a well-formed hunk header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct HeaderFields<'a> {
    old: (u32, u32),
    new: (u32, u32),
    context: &'a str,
}

impl Hunk {
    /// Build an empty hunk with a canonical header line
    pub fn new(
        old_start: u32,
        old_count: u32,
        new_start: u32,
        new_count: u32,
        context_label: &str,
    ) -> Self {
        let context_label = context_label.trim().to_string();
        let mut header_text = format!(
            "@@ {} {} @@",
            format_range('-', old_start, old_count),
            format_range('+', new_start, new_count)
        );
        if !context_label.is_empty() {
            header_text.push(' ');
            header_text.push_str(&context_label);
        }

        Hunk {
            old_start,
            old_count,
            new_start,
            new_count,
            context_label,
            header_text,
            lines: Vec::new(),
        }
    }

    /// Parse a `@@ -a,b +c,d @@ context` line.
    ///
    /// Never fails: a line that does not match the header grammar yields a
    /// degraded hunk with zeroed ranges and the raw line kept as its header.
    ///
    /// ```
    /// use diffpane::diff::hunk::Hunk;
    ///
    /// let hunk = Hunk::parse_header("@@ -10,2 +10 @@ fn main()");
    /// assert_eq!((hunk.old_start, hunk.old_count), (10, 2));
    /// assert_eq!((hunk.new_start, hunk.new_count), (10, 1));
    /// assert_eq!(hunk.context_label, "fn main()");
    /// ```
    pub fn parse_header(line: &str) -> Self {
        match header(line) {
            Ok((_, fields)) => Hunk {
                old_start: fields.old.0,
                old_count: fields.old.1,
                new_start: fields.new.0,
                new_count: fields.new.1,
                context_label: fields.context.trim().to_string(),
                header_text: line.to_string(),
                lines: Vec::new(),
            },
            Err(_) => {
                log::debug!("Malformed hunk header, keeping degraded hunk: {line:?}");
                Hunk {
                    old_start: 0,
                    old_count: 0,
                    new_start: 0,
                    new_count: 0,
                    context_label: String::new(),
                    header_text: line.to_string(),
                    lines: Vec::new(),
                }
            }
        }
    }

    /// Whether the header failed to parse and the ranges are placeholders
    pub fn is_degraded(&self) -> bool {
        header(&self.header_text).is_err()
    }

    /// Append a line, assigning the next in-hunk position
    pub fn push_line(&mut self, kind: LineKind, text: impl Into<String>) -> &mut DiffLine {
        let position = self.lines.len() as u32 + 1;
        self.lines.push(DiffLine::new(kind, text, position));
        let last = self.lines.len() - 1;
        &mut self.lines[last]
    }

    pub fn additions(&self) -> usize {
        self.count_kind(LineKind::Added)
    }

    pub fn deletions(&self) -> usize {
        self.count_kind(LineKind::Removed)
    }

    fn count_kind(&self, kind: LineKind) -> usize {
        self.lines.iter().filter(|line| line.kind == kind).count()
    }
}

/// Format one side of a header range, omitting a count of 1
fn format_range(sign: char, start: u32, count: u32) -> String {
    match count {
        1 => format!("{sign}{start}"),
        n => format!("{sign}{start},{n}"),
    }
}

fn header(input: &str) -> IResult<&str, HeaderFields<'_>> {
    let (input, (_, _, _, old, _, _, new, _, _, context)) = (
        tag("@@"),
        space0,
        char('-'),
        range,
        space0,
        char('+'),
        range,
        space0,
        tag("@@"),
        rest,
    )
        .parse(input)?;

    Ok((input, HeaderFields { old, new, context }))
}

/// `<start>[,<count>]`, where an omitted count means 1
fn range(input: &str) -> IResult<&str, (u32, u32)> {
    let (input, start) = number(input)?;
    let (input, count) = opt(preceded(char(','), number)).parse(input)?;
    Ok((input, (start, count.unwrap_or(1))))
}

fn number(input: &str) -> IResult<&str, u32> {
    map_res(digit1, |digits: &str| digits.parse::<u32>()).parse(input)
}

impl fmt::Display for Hunk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.header_text)?;
        for line in &self.lines {
            write!(f, "{line}")?;
        }
        Ok(())
    }
}
