//! Row alignment for side-by-side display.
//!
//! Lines are bucketed by kind rather than matched: a run of removals
//! followed by a run of additions shows up as two separate blocks, each
//! facing empty placeholders on the other side.

use crate::diff::{DiffLine, FileChange, LineKind};

/// Which column(s) a slot's line belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Both,
    Original,
    Modified,
}

/// One cell of a side-by-side column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot<'a> {
    pub side: Side,
    /// `None` for an alignment placeholder
    pub line: Option<&'a DiffLine>,
}

impl<'a> Slot<'a> {
    fn filled(line: &'a DiffLine, side: Side) -> Self {
        Slot {
            side,
            line: Some(line),
        }
    }

    fn empty(side: Side) -> Self {
        Slot { side, line: None }
    }

    /// Kind of the slot's line, [`LineKind::Empty`] for placeholders
    pub fn kind(&self) -> LineKind {
        self.line.map_or(LineKind::Empty, |line| line.kind)
    }

    pub fn is_empty(&self) -> bool {
        self.line.is_none()
    }

    /// Line number to show in a column of the given side
    pub fn line_number(&self, column: Side) -> Option<u32> {
        let line = self.line?;
        match column {
            Side::Original => line.old_line,
            Side::Modified => line.new_line,
            Side::Both => line.old_line.or(line.new_line),
        }
    }

    pub fn text(&self) -> &'a str {
        self.line.map_or("", |line| line.text.as_str())
    }
}

/// Equal-length original/modified columns for one file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Alignment<'a> {
    pub original: Vec<Slot<'a>>,
    pub modified: Vec<Slot<'a>>,
}

impl<'a> Alignment<'a> {
    /// Iterate paired `(original, modified)` rows
    pub fn rows(&self) -> impl Iterator<Item = (&Slot<'a>, &Slot<'a>)> {
        self.original.iter().zip(self.modified.iter())
    }

    pub fn len(&self) -> usize {
        self.original.len()
    }

    pub fn is_empty(&self) -> bool {
        self.original.is_empty()
    }
}

/// Build the side-by-side columns for a file
pub fn align_for_side_by_side(file: &FileChange) -> Alignment<'_> {
    let mut original = Vec::new();
    let mut modified = Vec::new();

    for line in file.hunks.iter().flat_map(|hunk| &hunk.lines) {
        match line.kind {
            LineKind::Unchanged => {
                original.push(Slot::filled(line, Side::Both));
                modified.push(Slot::filled(line, Side::Both));
            }
            LineKind::Removed => {
                original.push(Slot::filled(line, Side::Original));
                modified.push(Slot::empty(Side::Modified));
            }
            LineKind::Added => {
                original.push(Slot::empty(Side::Original));
                modified.push(Slot::filled(line, Side::Modified));
            }
            LineKind::Empty => {}
        }
    }

    let rows = original.len().max(modified.len());
    original.resize(rows, Slot::empty(Side::Original));
    modified.resize(rows, Slot::empty(Side::Modified));

    Alignment { original, modified }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::diff::{DiffDocument, resolve_line_numbers};
    use similar_asserts::assert_eq;

    fn sample() -> DiffDocument {
        resolve_line_numbers(DiffDocument::parse(
            "diff --git a/f.js b/f.js\n--- a/f.js\n+++ b/f.js\n@@ -5,3 +5,4 @@\n a\n-b\n+c\n+d\n e\n",
        ))
    }

    fn kinds(slots: &[Slot<'_>]) -> Vec<LineKind> {
        slots.iter().map(Slot::kind).collect()
    }

    #[test]
    fn align_buckets_by_kind() {
        let doc = sample();
        let aligned = align_for_side_by_side(&doc.files[0]);

        assert_eq!(aligned.len(), 5);
        assert_eq!(
            kinds(&aligned.original),
            vec![
                LineKind::Unchanged,
                LineKind::Removed,
                LineKind::Empty,
                LineKind::Empty,
                LineKind::Unchanged
            ]
        );
        assert_eq!(
            kinds(&aligned.modified),
            vec![
                LineKind::Unchanged,
                LineKind::Empty,
                LineKind::Added,
                LineKind::Added,
                LineKind::Unchanged
            ]
        );
    }

    #[test]
    fn align_tags_sides() {
        let doc = sample();
        let aligned = align_for_side_by_side(&doc.files[0]);
        let sides: Vec<(Side, Side)> = aligned.rows().map(|(l, r)| (l.side, r.side)).collect();
        assert_eq!(
            sides,
            vec![
                (Side::Both, Side::Both),
                (Side::Original, Side::Modified),
                (Side::Original, Side::Modified),
                (Side::Original, Side::Modified),
                (Side::Both, Side::Both),
            ]
        );
    }

    #[test]
    fn unchanged_rows_share_the_same_line() {
        let doc = sample();
        let aligned = align_for_side_by_side(&doc.files[0]);
        let (left, right) = aligned.rows().next().unwrap();
        assert!(std::ptr::eq(left.line.unwrap(), right.line.unwrap()));
    }

    #[test]
    fn slot_line_numbers_per_column() {
        let doc = sample();
        let aligned = align_for_side_by_side(&doc.files[0]);
        let last = aligned.rows().last().unwrap();
        assert_eq!(last.0.line_number(Side::Original), Some(7));
        assert_eq!(last.1.line_number(Side::Modified), Some(8));
        assert_eq!(aligned.original[2].line_number(Side::Original), None);
        assert_eq!(aligned.modified[2].text(), "c");
    }

    #[test]
    fn align_spans_all_hunks() {
        let doc = DiffDocument::parse(
            "diff --git a/x b/x\n--- a/x\n+++ b/x\n@@ -1 +1 @@\n-a\n+b\n@@ -10 +10,2 @@\n k\n+n\n",
        );
        let aligned = align_for_side_by_side(&doc.files[0]);
        assert_eq!(aligned.original.len(), 4);
        assert_eq!(aligned.modified.len(), 4);
    }

    #[test]
    fn align_file_without_hunks() {
        let file = FileChange::parse_git_header("diff --git a/x b/x");
        let aligned = align_for_side_by_side(&file);
        assert!(aligned.is_empty());
        assert_eq!(aligned.modified.len(), 0);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::diff::strategies::arb_file;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn columns_have_equal_length(file in arb_file()) {
            let aligned = align_for_side_by_side(&file);
            prop_assert_eq!(aligned.original.len(), aligned.modified.len());
            let lines: usize = file.hunks.iter().map(|h| h.lines.len()).sum();
            prop_assert_eq!(aligned.len(), lines);
        }

        /// Every parsed line shows up in exactly the columns its kind implies
        #[test]
        fn every_line_is_placed(file in arb_file()) {
            let aligned = align_for_side_by_side(&file);
            let placed_left = aligned.original.iter().filter(|s| !s.is_empty()).count();
            let placed_right = aligned.modified.iter().filter(|s| !s.is_empty()).count();
            let unchanged: usize = file
                .hunks
                .iter()
                .flat_map(|h| &h.lines)
                .filter(|l| l.kind == LineKind::Unchanged)
                .count();
            prop_assert_eq!(placed_left, unchanged + file.deletions());
            prop_assert_eq!(placed_right, unchanged + file.additions());
        }
    }
}
