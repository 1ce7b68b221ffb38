use crate::fs::Filesystem;
use crate::planner::RenamePlan;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{error, info};

/// 途中で失敗したリネーム。それまでの変更は巻き戻さない。
#[derive(Debug, Error)]
#[error("Renaming {} to {} failed after {} renames: {}", .from.display(), .to.display(), .applied, .source)]
pub struct ApplyError {
    pub applied: usize,
    pub from: PathBuf,
    pub to: PathBuf,
    #[source]
    pub source: io::Error,
}

/// 計画の順番どおりに一件ずつリネームする。
/// 最初の失敗で中断し、リトライはしない。
pub fn apply_plan<F: Filesystem + ?Sized>(
    fs: &F,
    dir: &Path,
    plan: &RenamePlan,
) -> Result<usize, ApplyError> {
    let mut applied = 0;
    for (from, to) in plan.iter() {
        let from = dir.join(from);
        let to = dir.join(to);
        if let Err(source) = fs.rename(&from, &to) {
            error!(from = %from.display(), to = %to.display(), applied, err = %source, "rename_failed");
            return Err(ApplyError {
                applied,
                from,
                to,
                source,
            });
        }
        applied += 1;
    }
    info!(dir = %dir.display(), applied, "renames_applied");
    Ok(applied)
}
