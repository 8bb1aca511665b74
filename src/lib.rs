//! Parse `diff --git` output into files, hunks and numbered lines, and lay
//! it out for unified or side-by-side display.
//!
//! ```
//! let loaded = diffpane::load(
//!     "diff --git a/f.js b/f.js\n--- a/f.js\n+++ b/f.js\n@@ -1,2 +1,3 @@\n unchanged\n-old\n+new1\n+new2\n",
//! );
//! assert_eq!(loaded.stats.total_changes, 3);
//!
//! let aligned = diffpane::align_for_side_by_side(&loaded.document.files[0]);
//! assert_eq!(aligned.original.len(), aligned.modified.len());
//! ```

use error_set::error_set;

pub mod align;
pub mod diff;
pub mod filetype;
pub mod input;
pub mod render;
pub mod share;

pub use align::{Alignment, Side, Slot, align_for_side_by_side};
pub use diff::{
    ChangeType, DiffDocument, DiffLine, FileChange, Hunk, LineKind, Stats, compute_stats,
    resolve_line_numbers,
};
pub use input::InputError;
pub use render::{Format, RenderOptions, ViewMode, render};
pub use share::ShareError;

error_set! {
    /// Top-level error for diffpane operations
    DiffpaneError := {
        #[display("No diff content found in {source_name}")]
        NoDiffContent { source_name: String },
        InputError(InputError),
        ShareError(ShareError),
    }
}

/// A parsed, numbered document together with its statistics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Loaded {
    pub document: DiffDocument,
    pub stats: Stats,
}

/// Parse raw diff text; never fails
pub fn parse(text: &str) -> DiffDocument {
    DiffDocument::parse(text)
}

/// Parse, resolve line numbers and compute statistics in one go
pub fn load(text: &str) -> Loaded {
    let document = resolve_line_numbers(parse(text));
    let stats = compute_stats(&document);
    Loaded { document, stats }
}
