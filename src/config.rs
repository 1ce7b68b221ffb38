use anyhow::{Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};

/// Reorder the entries of a directory and rename them so they sort in that order.
#[derive(Debug, Parser)]
#[command(name = "autorenamer", version)]
pub struct Args {
    /// Directory to open (defaults to the current directory)
    pub dir: Option<PathBuf>,

    /// Start with "Only selected" enabled
    #[arg(long)]
    pub only_selected: bool,

    /// Start with "Exclude directories" enabled
    #[arg(long)]
    pub exclude_directories: bool,
}

impl Args {
    pub fn start_dir(&self) -> Result<PathBuf> {
        let dir = self.dir.clone().unwrap_or_else(|| PathBuf::from("."));
        std::fs::canonicalize(&dir)
            .with_context(|| format!("Failed to resolve {}", dir.display()))
    }
}

/// ホームディレクトリ（実パス）。取得できない場合は開始ディレクトリで代用する。
pub fn home_dir(fallback: &Path) -> PathBuf {
    directories::UserDirs::new()
        .map(|dirs| dirs.home_dir().to_path_buf())
        .and_then(|home| std::fs::canonicalize(home).ok())
        .unwrap_or_else(|| fallback.to_path_buf())
}
