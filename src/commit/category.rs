//! Conventional commit categories and category inference.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::git::RepositoryStatus;

/// Conventional commit categories a draft can carry.
///
/// Serializes to lowercase (e.g., `"feat"`). Deserializes case-insensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CommitCategory {
    Feat,
    Fix,
    Docs,
    Style,
    Refactor,
    Test,
    Chore,
}

impl CommitCategory {
    pub const ALL: [CommitCategory; 7] = [
        Self::Feat,
        Self::Fix,
        Self::Docs,
        Self::Style,
        Self::Refactor,
        Self::Test,
        Self::Chore,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Feat => "feat",
            Self::Fix => "fix",
            Self::Docs => "docs",
            Self::Style => "style",
            Self::Refactor => "refactor",
            Self::Test => "test",
            Self::Chore => "chore",
        }
    }
}

impl fmt::Display for CommitCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for CommitCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "feat" => Ok(Self::Feat),
            "fix" => Ok(Self::Fix),
            "docs" => Ok(Self::Docs),
            "style" => Ok(Self::Style),
            "refactor" => Ok(Self::Refactor),
            "test" => Ok(Self::Test),
            "chore" => Ok(Self::Chore),
            _ => Err(format!(
                "Unknown commit type: {} (expected one of feat, fix, docs, style, refactor, test, chore)",
                s
            )),
        }
    }
}

impl<'de> Deserialize<'de> for CommitCategory {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<CommitCategory>().map_err(serde::de::Error::custom)
    }
}

/// Infer a category from working-tree status. First match wins:
///
/// 1. any created file: `feat`
/// 2. any deleted file: `chore`
/// 3. a modified path mentioning "test" or "spec": `test`
/// 4. a modified path mentioning "README" or ".md": `docs`
/// 5. otherwise `fix`
pub fn infer_category(status: &RepositoryStatus) -> CommitCategory {
    if !status.created.is_empty() {
        return CommitCategory::Feat;
    }
    if !status.deleted.is_empty() {
        return CommitCategory::Chore;
    }
    if any_path_contains(&status.modified, &["test", "spec"]) {
        return CommitCategory::Test;
    }
    if any_path_contains(&status.modified, &["README", ".md"]) {
        return CommitCategory::Docs;
    }
    CommitCategory::Fix
}

fn any_path_contains(paths: &[String], needles: &[&str]) -> bool {
    paths
        .iter()
        .any(|p| needles.iter().any(|needle| p.contains(needle)))
}
