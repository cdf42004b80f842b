//! Read-only repository access behind a mockable trait.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use git2::Repository;
use tracing::debug;

use crate::error::BackendError;

use super::status::{RepositoryStatus, read_status};
use super::summary::{DiffSummary, collect_summary, stat_text, unified_diff_for_path};

/// Read interface over a version-control backend.
///
/// Every call re-queries the repository rooted at `root`; nothing is cached.
/// This abstraction allows substituting an in-memory fake in tests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RepositoryReader: Send + Sync {
    /// Changed files with per-file and total insertion/deletion counts.
    async fn diff_summary(&self, root: &Path) -> Result<DiffSummary, BackendError>;

    /// Unified diff text for a single path.
    async fn file_diff(&self, root: &Path, path: &str) -> Result<String, BackendError>;

    /// Staged, modified, created and deleted paths.
    async fn status(&self, root: &Path) -> Result<RepositoryStatus, BackendError>;

    /// Stat-only rendering of the working-tree diff.
    async fn diff_stat(&self, root: &Path) -> Result<String, BackendError>;
}

/// Default reader backed by libgit2.
///
/// The repository is discovered from `root` upward, the same way the `git`
/// binary resolves its working directory. libgit2 calls block, so each query
/// runs on tokio's blocking pool.
#[derive(Debug, Clone, Copy, Default)]
pub struct GitReader;

impl GitReader {
    async fn with_repo<T, F>(root: &Path, query: F) -> Result<T, BackendError>
    where
        T: Send + 'static,
        F: FnOnce(&Repository) -> Result<T, BackendError> + Send + 'static,
    {
        let root: PathBuf = root.to_path_buf();
        tokio::task::spawn_blocking(move || {
            let repo = open_repository(&root)?;
            query(&repo)
        })
        .await
        .map_err(|e| BackendError::TaskFailed(e.to_string()))?
    }
}

/// Open the repository containing `root`.
pub fn open_repository(root: &Path) -> Result<Repository, BackendError> {
    debug!("Opening repository at {}", root.display());
    Repository::discover(root).map_err(|source| BackendError::OpenRepository {
        path: root.to_path_buf(),
        source,
    })
}

#[async_trait]
impl RepositoryReader for GitReader {
    async fn diff_summary(&self, root: &Path) -> Result<DiffSummary, BackendError> {
        Self::with_repo(root, collect_summary).await
    }

    async fn file_diff(&self, root: &Path, path: &str) -> Result<String, BackendError> {
        let path = path.to_string();
        Self::with_repo(root, move |repo| unified_diff_for_path(repo, &path)).await
    }

    async fn status(&self, root: &Path) -> Result<RepositoryStatus, BackendError> {
        Self::with_repo(root, read_status).await
    }

    async fn diff_stat(&self, root: &Path) -> Result<String, BackendError> {
        Self::with_repo(root, stat_text).await
    }
}
