//! Default report body composed from listed changes and a drafted commit.

use crate::changes::FileChange;
use crate::commit::CommitDraft;

/// Build the markdown body the `review` command writes.
pub fn build_review_summary(changes: &[FileChange], draft: Option<&CommitDraft>) -> String {
    let mut out = String::from("## Review Report\n\n### Files Analyzed\n");

    if changes.is_empty() {
        out.push_str("_No changed files._\n");
    } else {
        for change in changes {
            out.push_str(&format!("- {}\n", change.file));
        }
    }

    if let Some(draft) = draft {
        out.push_str("\n### Suggested Commit\n```\n");
        out.push_str(&draft.message);
        out.push_str("\n```\n");
    }

    let file_word = if changes.len() == 1 { "file" } else { "files" };
    out.push_str(&format!(
        "\n### Summary\n{} changed {} analyzed.",
        changes.len(),
        file_word
    ));
    if let Some(draft) = draft {
        out.push_str(&format!(
            " Suggested commit type: `{}` (+{} / -{}).",
            draft.commit_type, draft.insertions, draft.deletions
        ));
    }

    out
}
