//! Scope and short-description heuristics for drafted commit messages.
//!
//! Pure functions over file paths; no repository access.

use super::category::CommitCategory;

/// Number of leading diff entries used for scope and description.
pub const LEADING_FILES: usize = 3;

/// Basename of `path` cut at its first `.` (`src/a.test.ts` gives `a`).
pub fn file_stem(path: &str) -> &str {
    let base = path.rsplit('/').next().unwrap_or(path);
    base.split('.').next().unwrap_or(base)
}

/// Non-empty stems of `files`, in order.
pub fn stems<'a, S: AsRef<str>>(files: &'a [S]) -> Vec<&'a str> {
    files
        .iter()
        .map(|f| file_stem(f.as_ref()))
        .filter(|s| !s.is_empty())
        .collect()
}

/// Parenthesized scope for the leading files, or an empty string.
///
/// The "all files" checks hold vacuously for an empty set, so no changed files
/// gives `(tests)`.
pub fn scope_for<S: AsRef<str>>(leading: &[S]) -> String {
    match leading {
        [only] => {
            let stem = file_stem(only.as_ref());
            if stem.is_empty() {
                String::new()
            } else {
                format!("({stem})")
            }
        }
        files => {
            let paths: Vec<&str> = files.iter().map(|f| f.as_ref()).collect();
            if paths.iter().all(|f| f.contains("test")) {
                "(tests)".to_string()
            } else if paths.iter().all(|f| f.contains("doc") || f.contains("README")) {
                "(docs)".to_string()
            } else {
                String::new()
            }
        }
    }
}

/// Short description for a category label.
///
/// `names` are the file stems to mention; each template has its own fallback
/// when the list is empty. Labels that are not a known category get a generic
/// "update" line.
pub fn short_description(label: &str, names: &[&str]) -> String {
    let list = |fallback: &str| {
        if names.is_empty() {
            fallback.to_string()
        } else {
            names.join(", ")
        }
    };

    match label.parse::<CommitCategory>() {
        Ok(CommitCategory::Feat) => format!("add new functionality to {}", list("codebase")),
        Ok(CommitCategory::Fix) => format!("resolve issues in {}", list("codebase")),
        Ok(CommitCategory::Docs) => format!("update documentation for {}", list("project")),
        Ok(CommitCategory::Style) => "improve code formatting and style".to_string(),
        Ok(CommitCategory::Refactor) => {
            format!("restructure {} without changing functionality", list("code"))
        }
        Ok(CommitCategory::Test) => format!("add or update tests for {}", list("codebase")),
        Ok(CommitCategory::Chore) => format!("maintain {} and dependencies", list("codebase")),
        Err(_) => format!("update {}", list("codebase")),
    }
}
