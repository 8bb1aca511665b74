use super::document::DiffDocument;
use super::hunk::Hunk;
use super::line::LineKind;

impl Hunk {
    /// Assign old/new line numbers from the header's start values.
    ///
    /// Every line is rewritten, so running this again gives the same result.
    /// Counters stop at `u32::MAX` instead of wrapping.
    pub fn resolve_line_numbers(&mut self) {
        let mut old = self.old_start;
        let mut new = self.new_start;

        for line in &mut self.lines {
            match line.kind {
                LineKind::Unchanged => {
                    line.old_line = Some(old);
                    line.new_line = Some(new);
                    old = old.saturating_add(1);
                    new = new.saturating_add(1);
                }
                LineKind::Removed => {
                    line.old_line = Some(old);
                    line.new_line = None;
                    old = old.saturating_add(1);
                }
                LineKind::Added => {
                    line.old_line = None;
                    line.new_line = Some(new);
                    new = new.saturating_add(1);
                }
                LineKind::Empty => {
                    line.old_line = None;
                    line.new_line = None;
                }
            }
        }
    }
}

impl DiffDocument {
    /// Resolve line numbers for every hunk of every file in place
    pub fn resolve_line_numbers(&mut self) {
        for hunk in self.files.iter_mut().flat_map(|file| file.hunks.iter_mut()) {
            hunk.resolve_line_numbers();
        }
    }
}

/// Return `doc` with line numbers assigned to every line
pub fn resolve_line_numbers(mut doc: DiffDocument) -> DiffDocument {
    doc.resolve_line_numbers();
    doc
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use similar_asserts::assert_eq;

    fn numbers(hunk: &Hunk) -> Vec<(Option<u32>, Option<u32>)> {
        hunk.lines.iter().map(|l| (l.old_line, l.new_line)).collect()
    }

    #[test]
    fn resolve_mixed_hunk() {
        let mut hunk = Hunk::new(5, 3, 5, 4, "");
        hunk.push_line(LineKind::Unchanged, "a");
        hunk.push_line(LineKind::Removed, "b");
        hunk.push_line(LineKind::Added, "c");
        hunk.push_line(LineKind::Added, "d");
        hunk.push_line(LineKind::Unchanged, "e");

        hunk.resolve_line_numbers();

        assert_eq!(
            numbers(&hunk),
            vec![
                (Some(5), Some(5)),
                (Some(6), None),
                (None, Some(6)),
                (None, Some(7)),
                (Some(7), Some(8)),
            ]
        );
    }

    #[test]
    fn resolve_each_hunk_from_its_own_start() {
        let text = "diff --git a/config.nix b/config.nix\n--- a/config.nix\n+++ b/config.nix\n@@ -2,0 +3 @@ line 2\n+# FIRST INSERTION\n@@ -8,0 +10 @@ line 8\n+# SECOND INSERTION\n";
        let doc = resolve_line_numbers(DiffDocument::parse(text));
        let hunks = &doc.files[0].hunks;
        assert_eq!(numbers(&hunks[0]), vec![(None, Some(3))]);
        assert_eq!(numbers(&hunks[1]), vec![(None, Some(10))]);
    }

    #[test]
    fn resolve_pure_deletion() {
        let text = "diff --git a/gtk.nix b/gtk.nix\n--- a/gtk.nix\n+++ b/gtk.nix\n@@ -10,2 +9,0 @@\n-one\n-two\n";
        let doc = resolve_line_numbers(DiffDocument::parse(text));
        assert_eq!(
            numbers(&doc.files[0].hunks[0]),
            vec![(Some(10), None), (Some(11), None)]
        );
    }

    #[test]
    fn resolve_is_idempotent() {
        let text = "diff --git a/f.js b/f.js\n--- a/f.js\n+++ b/f.js\n@@ -1,2 +1,3 @@\n unchanged\n-old\n+new1\n+new2\n";
        let once = resolve_line_numbers(DiffDocument::parse(text));
        let twice = resolve_line_numbers(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn resolve_overwrites_stale_numbers() {
        let mut hunk = Hunk::new(1, 1, 1, 1, "");
        hunk.push_line(LineKind::Added, "x");
        hunk.lines[0].old_line = Some(99);
        hunk.resolve_line_numbers();
        assert_eq!(numbers(&hunk), vec![(None, Some(1))]);
    }

    #[test]
    fn resolve_hunk_at_end_of_number_range() {
        let text = "diff --git a/x b/x\n--- a/x\n+++ b/x\n@@ -4294967295 +4294967295 @@\n same\n";
        let doc = resolve_line_numbers(DiffDocument::parse(text));
        assert_eq!(
            numbers(&doc.files[0].hunks[0]),
            vec![(Some(u32::MAX), Some(u32::MAX))]
        );

        let mut hunk = Hunk::new(u32::MAX - 1, 2, u32::MAX, 2, "");
        hunk.push_line(LineKind::Removed, "a");
        hunk.push_line(LineKind::Unchanged, "b");
        hunk.push_line(LineKind::Added, "c");
        hunk.resolve_line_numbers();
        assert_eq!(
            numbers(&hunk),
            vec![
                (Some(u32::MAX - 1), None),
                (Some(u32::MAX), Some(u32::MAX)),
                (None, Some(u32::MAX)),
            ]
        );
    }
}
