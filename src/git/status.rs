//! Working-tree status classification.

use git2::{Repository, Status, StatusOptions};
use serde::Serialize;
use tracing::debug;

use crate::error::BackendError;

/// Changed paths grouped the way `git status` reports them.
///
/// A path may appear in `staged` and in one of the other lists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RepositoryStatus {
    pub staged: Vec<String>,
    pub modified: Vec<String>,
    pub created: Vec<String>,
    pub deleted: Vec<String>,
}

impl RepositoryStatus {
    pub fn is_clean(&self) -> bool {
        self.staged.is_empty()
            && self.modified.is_empty()
            && self.created.is_empty()
            && self.deleted.is_empty()
    }
}

const STAGED: Status = Status::INDEX_NEW
    .union(Status::INDEX_MODIFIED)
    .union(Status::INDEX_DELETED)
    .union(Status::INDEX_RENAMED)
    .union(Status::INDEX_TYPECHANGE);

/// Read the working-tree status. Untracked files are not reported.
///
/// Staged renames are detected; the new path is reported as staged only.
pub fn read_status(repo: &Repository) -> Result<RepositoryStatus, BackendError> {
    let mut opts = StatusOptions::new();
    opts.include_untracked(false)
        .include_ignored(false)
        .renames_head_to_index(true);

    let statuses = repo.statuses(Some(&mut opts)).map_err(BackendError::Status)?;
    let mut status = RepositoryStatus::default();

    for entry in statuses.iter() {
        let st = entry.status();

        // entry.path() is the old side of a rename
        let renamed_to = if st.is_index_renamed() {
            entry
                .head_to_index()
                .and_then(|delta| delta.new_file().path())
                .and_then(|p| p.to_str())
        } else {
            None
        };
        let Some(path) = renamed_to.or_else(|| entry.path()) else {
            continue;
        };

        if st.intersects(STAGED) {
            status.staged.push(path.to_string());
        }
        if st.is_index_new() {
            status.created.push(path.to_string());
        }
        if st.is_index_modified() || st.is_wt_modified() {
            status.modified.push(path.to_string());
        }
        if st.is_index_deleted() || st.is_wt_deleted() {
            status.deleted.push(path.to_string());
        }
    }

    debug!(
        staged = status.staged.len(),
        modified = status.modified.len(),
        created = status.created.len(),
        deleted = status.deleted.len(),
        "Read working-tree status"
    );

    Ok(status)
}
