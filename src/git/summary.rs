//! Diff summaries and per-file unified diffs using git2.
//!
//! All queries compare the working tree against the index, which is the view
//! plain `git diff` shows.

use git2::{Diff, DiffFormat, DiffOptions, DiffStatsFormat, Patch, Repository};
use serde::Serialize;
use tracing::warn;

use crate::error::BackendError;

/// Width passed to libgit2 when rendering `--stat` text.
const STAT_WIDTH: usize = 80;

/// Line counts for one changed file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiffFileStat {
    pub file: String,
    pub insertions: usize,
    pub deletions: usize,
}

/// Changed files with per-file and total line counts.
///
/// `files` keeps the order libgit2 reports deltas in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DiffSummary {
    pub files: Vec<DiffFileStat>,
    pub insertions: usize,
    pub deletions: usize,
}

/// Aggregate totals of a [`DiffSummary`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffStatistics {
    pub files_changed: usize,
    pub insertions: usize,
    pub deletions: usize,
}

impl DiffSummary {
    /// Build a summary from per-file stats, totalling the counts.
    pub fn from_files(files: Vec<DiffFileStat>) -> Self {
        let insertions = files.iter().map(|f| f.insertions).sum();
        let deletions = files.iter().map(|f| f.deletions).sum();
        Self {
            files,
            insertions,
            deletions,
        }
    }

    pub fn statistics(&self) -> DiffStatistics {
        DiffStatistics {
            files_changed: self.files.len(),
            insertions: self.insertions,
            deletions: self.deletions,
        }
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.files.iter().map(|f| f.file.as_str())
    }
}

fn workdir_diff<'r>(
    repo: &'r Repository,
    path: Option<&str>,
) -> Result<Diff<'r>, BackendError> {
    let mut opts = DiffOptions::new();
    if let Some(p) = path {
        opts.pathspec(p).disable_pathspec_match(true);
    }
    repo.diff_index_to_workdir(None, Some(&mut opts))
        .map_err(BackendError::Diff)
}

/// Collect the list of changed files with insertion/deletion counts.
///
/// Paths that are not valid UTF-8 are skipped with a warning; they could not be
/// used as a pathspec for [`unified_diff_for_path`] afterwards.
pub fn collect_summary(repo: &Repository) -> Result<DiffSummary, BackendError> {
    let diff = workdir_diff(repo, None)?;
    let mut files = Vec::with_capacity(diff.deltas().len());

    for (idx, delta) in diff.deltas().enumerate() {
        let Some(path) = delta.new_file().path().or_else(|| delta.old_file().path()) else {
            continue;
        };
        let Some(file) = path.to_str() else {
            warn!(path = %path.display(), "Skipping changed path that is not valid UTF-8");
            continue;
        };
        if file.is_empty() {
            continue;
        }

        // libgit2 yields no patch for binary content
        let patch = Patch::from_diff(&diff, idx).map_err(BackendError::Diff)?;
        let (insertions, deletions) = match patch {
            Some(p) => {
                let (_, adds, dels) = p.line_stats().map_err(BackendError::Diff)?;
                (adds, dels)
            }
            None => (0, 0),
        };

        files.push(DiffFileStat {
            file: file.to_string(),
            insertions,
            deletions,
        });
    }

    Ok(DiffSummary::from_files(files))
}

/// Render the unified diff for a single path.
///
/// Returns an empty string when the path has no pending changes.
pub fn unified_diff_for_path(repo: &Repository, path: &str) -> Result<String, BackendError> {
    let diff = workdir_diff(repo, Some(path))?;
    let mut text = String::new();

    diff.print(DiffFormat::Patch, |_delta, _hunk, line| {
        let origin = line.origin();
        if matches!(origin, '+' | '-' | ' ') {
            text.push(origin);
        }
        text.push_str(&String::from_utf8_lossy(line.content()));
        true
    })
    .map_err(BackendError::Diff)?;

    Ok(text)
}

/// Render the stat-only view of the working-tree diff (`git diff --stat`).
pub fn stat_text(repo: &Repository) -> Result<String, BackendError> {
    let diff = workdir_diff(repo, None)?;
    let stats = diff.stats().map_err(BackendError::Stats)?;
    if stats.files_changed() == 0 {
        return Ok(String::new());
    }
    let buf = stats
        .to_buf(DiffStatsFormat::FULL, STAT_WIDTH)
        .map_err(BackendError::Stats)?;
    Ok(String::from_utf8_lossy(&buf).to_string())
}
