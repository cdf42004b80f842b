//! Read-only git access using git2-rs.

pub mod backend;
pub mod status;
pub mod summary;

pub use backend::{GitReader, RepositoryReader, open_repository};
pub use status::{RepositoryStatus, read_status};
pub use summary::{DiffFileStat, DiffStatistics, DiffSummary, collect_summary, stat_text, unified_diff_for_path};

#[cfg(test)]
pub use backend::MockRepositoryReader;
