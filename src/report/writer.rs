//! Persist markdown reports.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::Local;
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::WriteError;
use crate::request::ReportRequest;

use super::template::{format_timestamp, render_report};

/// Write capability for report files.
///
/// This abstraction allows substituting an in-memory fake in tests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TextWriter: Send + Sync {
    /// Create or overwrite `path` with `contents`.
    async fn write_text(&self, path: &Path, contents: &str) -> std::io::Result<()>;
}

/// Writes UTF-8 files on the local filesystem. Parent directories are never created.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsWriter;

#[async_trait]
impl TextWriter for FsWriter {
    async fn write_text(&self, path: &Path, contents: &str) -> std::io::Result<()> {
        tokio::fs::write(path, contents).await
    }
}

/// Outcome of [`write_report`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WriteResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub message: String,
}

impl WriteResult {
    pub fn written(path: &str) -> Self {
        Self {
            success: true,
            file_path: Some(path.to_string()),
            error: None,
            message: format!("Markdown file successfully written to {path}"),
        }
    }

    pub fn failed(error: &WriteError) -> Self {
        Self {
            success: false,
            file_path: None,
            error: Some(error.to_string()),
            message: "Failed to write markdown file".to_string(),
        }
    }
}

/// Target path for a report: `{file_path}/{file_name}.md`, joined verbatim.
pub fn report_path(file_path: &str, file_name: &str) -> String {
    format!("{file_path}/{file_name}.md")
}

/// Wrap `request.content` in the report template and write it.
///
/// Never fails: validation and I/O errors come back as `success: false`.
pub async fn write_report<W>(writer: &W, request: &ReportRequest) -> WriteResult
where
    W: TextWriter + ?Sized,
{
    match try_write_report(writer, request).await {
        Ok(path) => {
            debug!("Wrote report to {path}");
            WriteResult::written(&path)
        }
        Err(e) => {
            warn!("Report not written: {e}");
            WriteResult::failed(&e)
        }
    }
}

async fn try_write_report<W>(writer: &W, request: &ReportRequest) -> Result<String, WriteError>
where
    W: TextWriter + ?Sized,
{
    request.validate()?;

    let path = report_path(&request.file_path, &request.file_name);
    let generated_on = format_timestamp(&Local::now());
    let body = render_report(&request.content, &generated_on);

    writer
        .write_text(Path::new(&path), &body)
        .await
        .map_err(|source| WriteError::Io {
            path: PathBuf::from(&path),
            source,
        })?;

    Ok(path)
}
