//! Per-file diffs of pending working-tree changes.

use serde::Serialize;
use tracing::debug;

use crate::error::ReviewError;
use crate::git::RepositoryReader;
use crate::request::ChangesRequest;

/// Paths never listed: build output and the lockfile.
pub const EXCLUDED_PATHS: &[&str] = &["dist", "bun.lock"];

/// A changed file and its unified diff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileChange {
    pub file: String,
    pub diff: String,
}

/// Whether `path` is an excluded entry or lies beneath one.
pub fn is_excluded(path: &str) -> bool {
    EXCLUDED_PATHS.iter().any(|excluded| {
        path == *excluded
            || path
                .strip_prefix(excluded)
                .is_some_and(|rest| rest.starts_with('/'))
    })
}

/// List every changed file outside [`EXCLUDED_PATHS`] with its diff text.
///
/// Order follows the backend's diff summary. Any backend failure aborts the
/// whole call; no partial list is returned.
pub async fn list_changes<R>(
    backend: &R,
    request: &ChangesRequest,
) -> Result<Vec<FileChange>, ReviewError>
where
    R: RepositoryReader + ?Sized,
{
    request.validate()?;
    let root = request.root_dir.as_path();

    let summary = backend.diff_summary(root).await?;
    let mut changes: Vec<FileChange> = Vec::with_capacity(summary.files.len());
    let mut skipped = 0usize;

    for path in summary.paths() {
        if is_excluded(path) {
            skipped += 1;
            continue;
        }
        if changes.iter().any(|c| c.file == path) {
            continue;
        }
        let diff = backend.file_diff(root, path).await?;
        changes.push(FileChange {
            file: path.to_string(),
            diff,
        });
    }

    debug!(
        listed = changes.len(),
        skipped,
        "Listed changes in {}",
        root.display()
    );

    Ok(changes)
}
