use super::document::DiffDocument;
use std::fmt;

/// Change counts over a whole document
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    pub file_count: usize,
    pub additions: usize,
    pub deletions: usize,
    pub total_changes: usize,
}

/// Count files, added lines and removed lines
pub fn compute_stats(doc: &DiffDocument) -> Stats {
    let (additions, deletions) = doc.files.iter().fold((0, 0), |(add, del), file| {
        (add + file.additions(), del + file.deletions())
    });

    Stats {
        file_count: doc.files.len(),
        additions,
        deletions,
        total_changes: additions + deletions,
    }
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plural = |n: usize| if n == 1 { "" } else { "s" };
        write!(
            f,
            "{} file{} changed, {} insertion{}(+), {} deletion{}(-)",
            self.file_count,
            plural(self.file_count),
            self.additions,
            plural(self.additions),
            self.deletions,
            plural(self.deletions)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use similar_asserts::assert_eq;

    #[test]
    fn stats_single_file() {
        let text = "diff --git a/f.js b/f.js\nindex 1..2 100644\n--- a/f.js\n+++ b/f.js\n@@ -1,2 +1,3 @@\n unchanged\n-old\n+new1\n+new2\n";
        let stats = compute_stats(&DiffDocument::parse(text));
        assert_eq!(
            stats,
            Stats {
                file_count: 1,
                additions: 2,
                deletions: 1,
                total_changes: 3,
            }
        );
    }

    #[test]
    fn stats_empty_document() {
        assert_eq!(compute_stats(&DiffDocument::parse("")), Stats::default());
    }

    #[test]
    fn stats_across_files() {
        let text = "diff --git a/a b/a\n--- a/a\n+++ b/a\n@@ -1 +1,2 @@\n-x\n+y\n+z\ndiff --git a/b b/b\n--- a/b\n+++ /dev/null\n@@ -1,2 +0,0 @@\n-p\n-q\n";
        let stats = compute_stats(&DiffDocument::parse(text));
        assert_eq!(stats.file_count, 2);
        assert_eq!(stats.additions, 2);
        assert_eq!(stats.deletions, 3);
        assert_eq!(stats.total_changes, 5);
    }

    #[test]
    fn display_summary() {
        let stats = Stats {
            file_count: 1,
            additions: 2,
            deletions: 1,
            total_changes: 3,
        };
        assert_eq!(
            stats.to_string(),
            "1 file changed, 2 insertions(+), 1 deletion(-)"
        );
    }
}
