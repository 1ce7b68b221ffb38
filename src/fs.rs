use crate::listing::list_directory;
use crate::planner::DirectoryEntry;
use std::io;
use std::path::Path;

/// 一覧取得とリネームを担う外部コラボレータ
pub trait Filesystem {
    fn list(&self, dir: &Path) -> anyhow::Result<Vec<DirectoryEntry>>;
    fn rename(&self, from: &Path, to: &Path) -> io::Result<()>;
}

/// ローカルディスク
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalFs;

impl Filesystem for LocalFs {
    fn list(&self, dir: &Path) -> anyhow::Result<Vec<DirectoryEntry>> {
        list_directory(dir)
    }

    fn rename(&self, from: &Path, to: &Path) -> io::Result<()> {
        std::fs::rename(from, to)
    }
}
