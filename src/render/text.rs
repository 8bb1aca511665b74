//! Plain-text rendering for terminals.

use crate::align::{Side, Slot, align_for_side_by_side};
use crate::diff::{DiffDocument, LineKind};

/// One column per line: old number, new number, marker and content.
///
/// ```text
/// f.js
/// @@ -1,2 +1,2 @@
///     1     1  kept
///     2       -old
///           2 +new
/// ```
pub fn unified(doc: &DiffDocument) -> String {
    let mut result = String::new();

    for (i, file) in doc.files.iter().enumerate() {
        if i > 0 {
            result.push('\n');
        }
        result.push_str(&file.header_label());
        result.push('\n');

        for hunk in &file.hunks {
            result.push_str(&hunk.header_text);
            result.push('\n');

            for line in &hunk.lines {
                result.push_str(&format!(
                    "{:>5} {:>5} {}{}\n",
                    number(line.old_line),
                    number(line.new_line),
                    line.kind.marker(),
                    line.text
                ));
            }
        }
    }

    result
}

/// Two aligned columns per file, each `width` characters of content wide
pub fn side_by_side(doc: &DiffDocument, width: usize) -> String {
    let mut result = String::new();

    for (i, file) in doc.files.iter().enumerate() {
        if i > 0 {
            result.push('\n');
        }
        result.push_str(&file.header_label());
        result.push('\n');

        for (left, right) in align_for_side_by_side(file).rows() {
            let row = format!(
                "{:>5} {:<cell$} | {:>5} {}",
                number(left.line_number(Side::Original)),
                cell(left, width),
                number(right.line_number(Side::Modified)),
                cell(right, width),
                cell = width + 1,
            );
            result.push_str(row.trim_end());
            result.push('\n');
        }
    }

    result
}

fn number(n: Option<u32>) -> String {
    n.map(|n| n.to_string()).unwrap_or_default()
}

/// Marker plus content cut to `width` characters; blank for placeholders
fn cell(slot: &Slot<'_>, width: usize) -> String {
    match slot.kind() {
        LineKind::Empty => String::new(),
        kind => {
            let text: String = slot.text().chars().take(width).collect();
            format!("{}{}", kind.marker(), text)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::resolve_line_numbers;

    fn sample() -> DiffDocument {
        resolve_line_numbers(DiffDocument::parse(
            "diff --git a/f.js b/f.js\nindex 1..2 100644\n--- a/f.js\n+++ b/f.js\n@@ -1,2 +1,3 @@\n unchanged\n-old\n+new1\n+new2\n",
        ))
    }

    #[test]
    fn unified_single_file() {
        insta::assert_snapshot!(unified(&sample()), @r"
        f.js
        @@ -1,2 +1,3 @@
            1     1  unchanged
            2       -old
                  2 +new1
                  3 +new2
        ");
    }

    #[test]
    fn unified_multiple_files_with_labels() {
        let doc = resolve_line_numbers(DiffDocument::parse(
            "diff --git a/flake.nix b/flake.nix\n--- a/flake.nix\n+++ b/flake.nix\n@@ -136,0 +137 @@\n+debug = true;\ndiff --git a/new.md b/new.md\nnew file mode 100644\n--- /dev/null\n+++ b/new.md\n@@ -0,0 +1 @@\n+# Title\n",
        ));
        insta::assert_snapshot!(unified(&doc), @r"
        flake.nix
        @@ -136,0 +137 @@
                137 +debug = true;

        new.md (new file)
        @@ -0,0 +1 @@
                  1 +# Title
        ");
    }

    #[test]
    fn side_by_side_single_file() {
        insta::assert_snapshot!(side_by_side(&sample(), 10), @r"
        f.js
            1  unchanged  |     1  unchanged
            2 -old        |
                          |     2 +new1
                          |     3 +new2
        ");
    }

    #[test]
    fn side_by_side_truncates_long_lines() {
        let doc = resolve_line_numbers(DiffDocument::parse(
            "diff --git a/x b/x\n--- a/x\n+++ b/x\n@@ -1 +1 @@\n-abcdefghijkl\n+ABCDEFGHIJKL\n",
        ));
        let out = side_by_side(&doc, 4);
        assert!(out.contains("    1 -abcd |"), "{out}");
        assert!(out.contains("|     1 +ABCD\n"), "{out}");
    }
}
