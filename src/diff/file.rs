use super::hunk::Hunk;
use std::fmt;

const GIT_HEADER_PREFIX: &str = "diff --git a/";
const DEV_NULL: &str = "/dev/null";

/// How a file changed between the two versions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeType {
    Modified,
    /// Announced by a `new file mode` line
    New,
    /// Announced by a `deleted file mode` line
    Deleted,
    /// The `diff --git` header could not be parsed
    Unknown,
}

/// All changes to a single file.
///
/// A path is `None` when that side of the diff is `/dev/null`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileChange {
    pub old_path: Option<String>,
    pub new_path: Option<String>,
    pub change_type: ChangeType,
    /// The verbatim `index <hash>..<hash> <mode>` line
    pub index_line: Option<String>,
    /// The verbatim `new file mode` / `deleted file mode` line
    pub mode_line: Option<String>,
    pub hunks: Vec<Hunk>,
}

impl FileChange {
    /// Start a file from its `diff --git a/<old> b/<new>` line.
    ///
    /// The paths are split on the last `" b/"`. A header that does not
    /// match yields a degraded record with no paths and
    /// [`ChangeType::Unknown`].
    ///
    /// ```
    /// use diffpane::diff::file::{ChangeType, FileChange};
    ///
    /// let file = FileChange::parse_git_header("diff --git a/src/lib.rs b/src/lib.rs");
    /// assert_eq!(file.old_path.as_deref(), Some("src/lib.rs"));
    /// assert_eq!(file.change_type, ChangeType::Modified);
    /// ```
    pub fn parse_git_header(line: &str) -> Self {
        let paths = line
            .strip_prefix(GIT_HEADER_PREFIX)
            .and_then(|rest| rest.rsplit_once(" b/"))
            .filter(|(old, new)| !old.is_empty() && !new.is_empty());

        match paths {
            Some((old, new)) => FileChange {
                old_path: Some(old.to_string()),
                new_path: Some(new.to_string()),
                change_type: ChangeType::Modified,
                index_line: None,
                mode_line: None,
                hunks: Vec::new(),
            },
            None => {
                log::debug!("Malformed file header, keeping degraded file: {line:?}");
                FileChange {
                    old_path: None,
                    new_path: None,
                    change_type: ChangeType::Unknown,
                    index_line: None,
                    mode_line: None,
                    hunks: Vec::new(),
                }
            }
        }
    }

    /// Record a `new file mode` / `deleted file mode` line
    pub fn apply_mode_line(&mut self, line: &str) {
        if line.starts_with("new file mode") {
            self.change_type = ChangeType::New;
        } else if line.starts_with("deleted file mode") {
            self.change_type = ChangeType::Deleted;
        }
        self.mode_line = Some(line.to_string());
    }

    /// Name to show for this file: new path, else old path
    pub fn display_path(&self) -> &str {
        self.new_path
            .as_deref()
            .or(self.old_path.as_deref())
            .unwrap_or("Unknown file")
    }

    /// Display path decorated with the change type
    pub fn header_label(&self) -> String {
        match self.change_type {
            ChangeType::New => format!("{} (new file)", self.display_path()),
            ChangeType::Deleted => format!("{} (deleted)", self.display_path()),
            ChangeType::Modified | ChangeType::Unknown => self.display_path().to_string(),
        }
    }

    pub fn additions(&self) -> usize {
        self.hunks.iter().map(Hunk::additions).sum()
    }

    pub fn deletions(&self) -> usize {
        self.hunks.iter().map(Hunk::deletions).sum()
    }
}

/// Extract the path from a `--- <path>` or `+++ <path>` line.
///
/// Returns `None` for `/dev/null`; otherwise strips one leading `a/` or
/// `b/` prefix.
///
/// ```
/// use diffpane::diff::file::parse_path_line;
///
/// assert_eq!(parse_path_line("--- a/src/main.rs").as_deref(), Some("src/main.rs"));
/// assert_eq!(parse_path_line("+++ /dev/null"), None);
/// ```
pub fn parse_path_line(line: &str) -> Option<String> {
    let path = line.get(4..).unwrap_or("");
    if path == DEV_NULL {
        return None;
    }

    let path = path
        .strip_prefix("a/")
        .or_else(|| path.strip_prefix("b/"))
        .unwrap_or(path);
    Some(path.to_string())
}

impl fmt::Display for FileChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let old = self.old_path.as_deref().or(self.new_path.as_deref());
        let new = self.new_path.as_deref().or(self.old_path.as_deref());
        writeln!(
            f,
            "diff --git a/{} b/{}",
            old.unwrap_or_default(),
            new.unwrap_or_default()
        )?;
        if let Some(mode) = &self.mode_line {
            writeln!(f, "{mode}")?;
        }
        if let Some(index) = &self.index_line {
            writeln!(f, "{index}")?;
        }
        match &self.old_path {
            Some(path) => writeln!(f, "--- a/{path}")?,
            None => writeln!(f, "--- {DEV_NULL}")?,
        }
        match &self.new_path {
            Some(path) => writeln!(f, "+++ b/{path}")?,
            None => writeln!(f, "+++ {DEV_NULL}")?,
        }
        for hunk in &self.hunks {
            write!(f, "{hunk}")?;
        }
        Ok(())
    }
}
