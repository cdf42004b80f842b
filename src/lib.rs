//! grapheus - list working-tree changes, draft commit messages, write review reports.
//!
//! # Overview
//!
//! grapheus exposes three independent, stateless operations meant to be called
//! by a reviewing agent or the bundled CLI:
//!
//! - [`list_changes`]: changed files with their unified diffs
//! - [`draft_commit_message`]: a conventional commit message inferred from
//!   working-tree status and diff statistics
//! - [`write_report`]: review prose wrapped in a markdown template and written to disk
//!
//! Repository access and file writes go through the [`RepositoryReader`] and
//! [`TextWriter`] traits.

pub mod changes;
pub mod commit;
pub mod config;
pub mod error;
pub mod git;
pub mod report;
pub mod request;

// Re-export commonly used types
pub use changes::{EXCLUDED_PATHS, FileChange, list_changes};
pub use commit::{CommitCategory, CommitDraft, draft_commit_message};
pub use error::{BackendError, RequestError, ReviewError, WriteError};
pub use git::{DiffStatistics, DiffSummary, GitReader, RepositoryReader, RepositoryStatus};
pub use report::{FsWriter, TextWriter, WriteResult, write_report};
pub use request::{ChangesRequest, CommitMessageRequest, ReportRequest};
