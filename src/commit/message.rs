//! Commit message drafting from working-tree status and diff statistics.

use serde::Serialize;
use tracing::debug;

use crate::error::ReviewError;
use crate::git::{DiffSummary, RepositoryReader};
use crate::request::CommitMessageRequest;

use super::category::{CommitCategory, infer_category};
use super::describe::{LEADING_FILES, scope_for, short_description, stems};

/// Maximum files listed under "Files changed:".
pub const MAX_LISTED_FILES: usize = 5;

/// A drafted commit message and the numbers behind it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommitDraft {
    pub message: String,
    #[serde(rename = "type")]
    pub commit_type: CommitCategory,
    pub files_changed: usize,
    pub insertions: usize,
    pub deletions: usize,
    /// Stat-only diff text (`git diff --stat`).
    pub summary: String,
}

impl CommitDraft {
    /// First line of the message (`type(scope): description`).
    pub fn subject(&self) -> &str {
        self.message.lines().next().unwrap_or("")
    }
}

/// Render the full commit message.
///
/// ```text
/// feat(new): add new functionality to new
///
/// Changes:
/// - 1 file(s) modified
/// - +10 insertions, -0 deletions
///
/// Files changed:
/// - new.ts
/// ```
pub fn render_message(category: CommitCategory, summary: &DiffSummary) -> String {
    let leading: Vec<&str> = summary.paths().take(LEADING_FILES).collect();
    let scope = scope_for(&leading);
    let description = short_description(category.as_str(), &stems(&leading));
    let stats = summary.statistics();

    let mut listed: Vec<String> = summary
        .paths()
        .take(MAX_LISTED_FILES)
        .map(|f| format!("- {f}"))
        .collect();
    if stats.files_changed > MAX_LISTED_FILES {
        listed.push(format!(
            "- ... and {} more",
            stats.files_changed - MAX_LISTED_FILES
        ));
    }

    format!(
        "{category}{scope}: {description}\n\
         \n\
         Changes:\n\
         - {files} file(s) modified\n\
         - +{insertions} insertions, -{deletions} deletions\n\
         \n\
         Files changed:\n\
         {listed}",
        files = stats.files_changed,
        insertions = stats.insertions,
        deletions = stats.deletions,
        listed = listed.join("\n"),
    )
}

/// Draft a conventional commit message for the repository at `request.root_dir`.
///
/// When `request.commit_type` is set it is used as-is; otherwise the category
/// is inferred from working-tree status.
pub async fn draft_commit_message<R>(
    backend: &R,
    request: &CommitMessageRequest,
) -> Result<CommitDraft, ReviewError>
where
    R: RepositoryReader + ?Sized,
{
    request.validate()?;
    let root = request.root_dir.as_path();

    let summary = backend.diff_summary(root).await?;
    let status = backend.status(root).await?;

    let category = match request.commit_type {
        Some(explicit) => explicit,
        None => infer_category(&status),
    };

    let stat = backend.diff_stat(root).await?;
    let stats = summary.statistics();

    debug!(
        "Drafting {} commit: {} files, {} insertions, {} deletions (explicit type: {})",
        category,
        stats.files_changed,
        stats.insertions,
        stats.deletions,
        request.commit_type.is_some()
    );

    Ok(CommitDraft {
        message: render_message(category, &summary),
        commit_type: category,
        files_changed: stats.files_changed,
        insertions: stats.insertions,
        deletions: stats.deletions,
        summary: stat,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BackendError;
    use crate::git::{DiffFileStat, MockRepositoryReader, RepositoryStatus};

    fn summary(paths: &[&str], insertions: usize, deletions: usize) -> DiffSummary {
        let mut files: Vec<DiffFileStat> = paths
            .iter()
            .map(|p| DiffFileStat {
                file: p.to_string(),
                insertions: 0,
                deletions: 0,
            })
            .collect();
        if let Some(first) = files.first_mut() {
            first.insertions = insertions;
            first.deletions = deletions;
        }
        DiffSummary::from_files(files)
    }

    fn mock_backend(diff: DiffSummary, status: RepositoryStatus) -> MockRepositoryReader {
        let mut mock = MockRepositoryReader::new();
        mock.expect_diff_summary()
            .returning(move |_| Ok(diff.clone()));
        mock.expect_status()
            .returning(move |_| Ok(status.clone()));
        mock.expect_diff_stat()
            .returning(|_| Ok(" new.ts | 10 ++++++++++\n 1 file changed, 10 insertions(+)\n".to_string()));
        mock
    }

    #[test]
    fn test_render_message_exact_layout() {
        let msg = render_message(CommitCategory::Feat, &summary(&["new.ts"], 10, 0));
        assert_eq!(
            msg,
            "feat(new): add new functionality to new\n\
             \n\
             Changes:\n\
             - 1 file(s) modified\n\
             - +10 insertions, -0 deletions\n\
             \n\
             Files changed:\n\
             - new.ts"
        );
    }

    #[test]
    fn test_render_message_lists_at_most_five_files() {
        let paths = ["a.rs", "b.rs", "c.rs", "d.rs", "e.rs", "f.rs", "g.rs"];
        let msg = render_message(CommitCategory::Fix, &summary(&paths, 3, 2));

        let listed: Vec<&str> = msg
            .split("Files changed:\n")
            .nth(1)
            .unwrap()
            .lines()
            .collect();
        assert_eq!(
            listed,
            vec!["- a.rs", "- b.rs", "- c.rs", "- d.rs", "- e.rs", "- ... and 2 more"]
        );
        assert!(msg.starts_with("fix: resolve issues in a, b, c"));
        assert!(msg.contains("- 7 file(s) modified"));
    }

    #[test]
    fn test_render_message_exactly_five_files_has_no_more_line() {
        let paths = ["a.rs", "b.rs", "c.rs", "d.rs", "e.rs"];
        let msg = render_message(CommitCategory::Chore, &summary(&paths, 0, 0));
        assert!(msg.ends_with("- e.rs"));
        assert!(!msg.contains("more"));
    }

    #[test]
    fn test_render_message_without_files() {
        let msg = render_message(CommitCategory::Style, &DiffSummary::default());
        assert!(msg.starts_with("style(tests): improve code formatting and style\n"));
        assert!(msg.contains("- 0 file(s) modified"));
        assert!(msg.ends_with("Files changed:\n"));
    }

    #[test]
    fn test_render_message_tests_scope() {
        let msg = render_message(
            CommitCategory::Test,
            &summary(&["a.test.ts", "b.test.ts", "c.test.ts", "src/x.ts"], 1, 1),
        );
        assert!(msg.starts_with("test(tests): add or update tests for a, b, c\n"));
    }

    #[tokio::test]
    async fn test_draft_end_to_end_new_file() {
        let status = RepositoryStatus {
            created: vec!["new.ts".to_string()],
            ..Default::default()
        };
        let mock = mock_backend(summary(&["new.ts"], 10, 0), status);

        let draft = draft_commit_message(&mock, &CommitMessageRequest::new("/repo", None))
            .await
            .unwrap();

        assert_eq!(draft.commit_type, CommitCategory::Feat);
        assert!(draft.message.starts_with("feat(new): add new functionality to new"));
        assert_eq!(draft.subject(), "feat(new): add new functionality to new");
        assert_eq!(draft.files_changed, 1);
        assert_eq!(draft.insertions, 10);
        assert_eq!(draft.deletions, 0);
        assert!(draft.summary.contains("1 file changed"));
    }

    #[tokio::test]
    async fn test_explicit_type_bypasses_inference() {
        let status = RepositoryStatus {
            created: vec!["new.ts".to_string()],
            deleted: vec!["old.ts".to_string()],
            ..Default::default()
        };
        let mock = mock_backend(summary(&["new.ts", "old.ts"], 4, 9), status);

        let request = CommitMessageRequest::new("/repo", Some(CommitCategory::Refactor));
        let draft = draft_commit_message(&mock, &request).await.unwrap();

        assert_eq!(draft.commit_type, CommitCategory::Refactor);
        assert!(draft.message.starts_with(
            "refactor: restructure new, old without changing functionality"
        ));
    }

    #[tokio::test]
    async fn test_totals_cover_full_summary() {
        let mut diff = summary(&["a.md", "b.md", "c.md", "d.rs"], 0, 0);
        diff.files[3].insertions = 7;
        diff.files[3].deletions = 2;
        let diff = DiffSummary::from_files(diff.files);
        let status = RepositoryStatus {
            modified: vec!["a.md".into(), "b.md".into(), "c.md".into(), "d.rs".into()],
            ..Default::default()
        };
        let mock = mock_backend(diff, status);

        let draft = draft_commit_message(&mock, &CommitMessageRequest::new("/repo", None))
            .await
            .unwrap();

        assert_eq!(draft.commit_type, CommitCategory::Docs);
        assert_eq!(draft.files_changed, 4);
        assert_eq!(draft.insertions, 7);
        assert_eq!(draft.deletions, 2);
        assert!(draft.message.starts_with("docs: update documentation for a, b, c\n"));
    }

    #[tokio::test]
    async fn test_draft_propagates_status_failure() {
        let mut mock = MockRepositoryReader::new();
        mock.expect_diff_summary()
            .returning(|_| Ok(DiffSummary::default()));
        mock.expect_status()
            .returning(|_| Err(BackendError::TaskFailed("status unavailable".into())));
        mock.expect_diff_stat().never();

        let result = draft_commit_message(&mock, &CommitMessageRequest::new("/repo", None)).await;
        assert!(matches!(result, Err(ReviewError::Backend(_))));
    }

    #[tokio::test]
    async fn test_draft_rejects_empty_root() {
        let mut mock = MockRepositoryReader::new();
        mock.expect_diff_summary().never();

        let result = draft_commit_message(&mock, &CommitMessageRequest::new("", None)).await;
        assert!(matches!(result, Err(ReviewError::InvalidRequest(_))));
    }

    #[test]
    fn test_draft_serializes_with_type_field() {
        let draft = CommitDraft {
            message: "fix: resolve issues in codebase".into(),
            commit_type: CommitCategory::Fix,
            files_changed: 0,
            insertions: 0,
            deletions: 0,
            summary: String::new(),
        };
        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json["type"], "fix");
        assert_eq!(json["filesChanged"], 0);
        assert_eq!(json["message"], "fix: resolve issues in codebase");
    }
}
