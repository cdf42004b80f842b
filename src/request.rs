//! Typed request records for the three operations.
//!
//! Field names deserialize from the camelCase shape agents send
//! (`rootDir`, `commitType`, `filePath`, `fileName`, `content`).

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::commit::CommitCategory;
use crate::error::RequestError;

/// Request for [`crate::changes::list_changes`].
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangesRequest {
    pub root_dir: PathBuf,
}

impl ChangesRequest {
    pub fn new(root_dir: impl Into<PathBuf>) -> Self {
        Self {
            root_dir: root_dir.into(),
        }
    }

    pub fn validate(&self) -> Result<(), RequestError> {
        require_path("rootDir", &self.root_dir)
    }
}

/// Request for [`crate::commit::draft_commit_message`].
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommitMessageRequest {
    pub root_dir: PathBuf,
    #[serde(default)]
    pub commit_type: Option<CommitCategory>,
}

impl CommitMessageRequest {
    pub fn new(root_dir: impl Into<PathBuf>, commit_type: Option<CommitCategory>) -> Self {
        Self {
            root_dir: root_dir.into(),
            commit_type,
        }
    }

    pub fn validate(&self) -> Result<(), RequestError> {
        require_path("rootDir", &self.root_dir)
    }
}

/// Request for [`crate::report::write_report`].
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRequest {
    /// Directory the report is written into.
    pub file_path: String,
    /// File name without the `.md` extension.
    pub file_name: String,
    pub content: String,
}

impl ReportRequest {
    pub fn new(
        file_path: impl Into<String>,
        file_name: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            file_path: file_path.into(),
            file_name: file_name.into(),
            content: content.into(),
        }
    }

    pub fn validate(&self) -> Result<(), RequestError> {
        require_text("filePath", &self.file_path)?;
        require_text("fileName", &self.file_name)?;
        require_text("content", &self.content)
    }
}

fn require_path(field: &'static str, path: &Path) -> Result<(), RequestError> {
    if path.as_os_str().is_empty() {
        return Err(RequestError::EmptyField(field));
    }
    Ok(())
}

fn require_text(field: &'static str, value: &str) -> Result<(), RequestError> {
    if value.is_empty() {
        return Err(RequestError::EmptyField(field));
    }
    Ok(())
}
