//! Structured model of a unified diff and the parser that builds it.
//!
//! A [`DiffDocument`] owns its [`FileChange`]s, each file owns its
//! [`Hunk`]s and each hunk owns its [`DiffLine`]s. Parsing never fails;
//! line numbers are filled in by a separate pass
//! ([`DiffDocument::resolve_line_numbers`]).

pub mod document;
pub mod file;
pub mod hunk;
pub mod line;
pub mod numbering;
pub mod stats;

pub use document::DiffDocument;
pub use file::{ChangeType, FileChange};
pub use hunk::Hunk;
pub use line::{DiffLine, LineKind};
pub use numbering::resolve_line_numbers;
pub use stats::{Stats, compute_stats};
