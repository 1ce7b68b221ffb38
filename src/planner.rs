use std::collections::HashSet;

use thiserror::Error;
use tracing::{debug, error};

/// 一覧取得時点のディレクトリ要素
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DirectoryEntry {
    pub name: String,
    pub is_dir: bool,
}

impl DirectoryEntry {
    pub fn new(name: impl Into<String>, is_dir: bool) -> Self {
        Self {
            name: name.into(),
            is_dir,
        }
    }
}

/// 変更前の名前と変更後の名前の組（並び順を保持）
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RenamePlan {
    pairs: Vec<(String, String)>,
}

impl RenamePlan {
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(from, to)| (from.as_str(), to.as_str()))
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    pub fn sources(&self) -> Vec<&str> {
        self.pairs.iter().map(|(from, _)| from.as_str()).collect()
    }

    pub fn targets(&self) -> Vec<&str> {
        self.pairs.iter().map(|(_, to)| to.as_str()).collect()
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlanError {
    #[error("Nothing to rename")]
    Empty,
    #[error("The following filenames conflict: {}", .0.join(", "))]
    Conflict(Vec<String>),
}

/// 連番の桁数。最大の添字 `n - 1` を表せる最小の桁数（最低 1 桁）。
pub fn prefix_width(n: usize) -> usize {
    let mut width = 1;
    let mut rest = n.saturating_sub(1) / 10;
    while rest > 0 {
        width += 1;
        rest /= 10;
    }
    width
}

/// 並び順どおりに連番を付けたリネーム計画を作る。
///
/// 新しい名前が既存の名前と一つでも衝突した場合は計画全体を拒否する。
/// ファイルシステムには一切触れない。
pub fn compute_plan(
    entries: &[DirectoryEntry],
    all_entry_names: &HashSet<String>,
) -> Result<RenamePlan, PlanError> {
    if entries.is_empty() {
        return Err(PlanError::Empty);
    }

    let width = prefix_width(entries.len());
    let pairs: Vec<(String, String)> = entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            (
                entry.name.clone(),
                format!("{:0width$}-{}", i, entry.name, width = width),
            )
        })
        .collect();

    let mut conflicts: Vec<String> = pairs
        .iter()
        .filter(|(_, to)| all_entry_names.contains(to))
        .map(|(_, to)| to.clone())
        .collect();
    if !conflicts.is_empty() {
        conflicts.sort();
        error!(?conflicts, "collision_detected");
        return Err(PlanError::Conflict(conflicts));
    }

    debug!(count = pairs.len(), width, "plan_computed");
    Ok(RenamePlan { pairs })
}
