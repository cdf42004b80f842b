//! Heuristic conventional commit messages from working-tree changes.

pub mod category;
pub mod describe;
pub mod message;

pub use category::{CommitCategory, infer_category};
pub use describe::{LEADING_FILES, file_stem, scope_for, short_description};
pub use message::{CommitDraft, MAX_LISTED_FILES, draft_commit_message, render_message};
