use crate::planner::DirectoryEntry;
use anyhow::{bail, Context, Result};
use std::path::Path;
use tracing::{debug, warn};
use walkdir::WalkDir;

/// 指定ディレクトリ直下の要素を名前順で返す。
/// ドットで始まる隠しファイルは除外する。
/// 走査自体はリンクを辿らないが、ディレクトリかどうかはリンク先で判定する。
pub fn list_directory(dir: &Path) -> Result<Vec<DirectoryEntry>> {
    if !dir.is_dir() {
        bail!("{} is not a directory", dir.display());
    }

    let mut entries = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry.with_context(|| format!("Failed to read {}", dir.display()))?;
        let Some(name) = entry.file_name().to_str() else {
            warn!(path = %entry.path().display(), "skipping non-utf8 name");
            continue;
        };
        if name.starts_with('.') {
            continue;
        }
        // walkdir の file_type() はリンク自身の種別なので、リンク先を見る
        let is_dir = entry.file_type().is_dir() || entry.path().is_dir();
        entries.push(DirectoryEntry::new(name, is_dir));
    }
    entries.sort_by(|a, b| a.name.cmp(&b.name));
    debug!(dir = %dir.display(), count = entries.len(), "listed_directory");
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn lists_sorted_without_hidden_entries() {
        let tmp = tempdir().unwrap();
        fs::write(tmp.path().join("b.jpg"), b"b").unwrap();
        fs::write(tmp.path().join("a.jpg"), b"a").unwrap();
        fs::write(tmp.path().join(".hidden"), b"h").unwrap();
        fs::create_dir(tmp.path().join("c")).unwrap();
        fs::create_dir(tmp.path().join(".git")).unwrap();
        fs::write(tmp.path().join("c").join("nested.jpg"), b"n").unwrap();

        let entries = list_directory(tmp.path()).unwrap();
        assert_eq!(
            entries,
            vec![
                DirectoryEntry::new("a.jpg", false),
                DirectoryEntry::new("b.jpg", false),
                DirectoryEntry::new("c", true),
            ]
        );
    }

    #[test]
    fn empty_directory_lists_nothing() {
        let tmp = tempdir().unwrap();
        assert!(list_directory(tmp.path()).unwrap().is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_directory_is_a_directory() {
        let tmp = tempdir().unwrap();
        fs::create_dir(tmp.path().join("real")).unwrap();
        fs::write(tmp.path().join("real").join("x.jpg"), b"x").unwrap();
        fs::write(tmp.path().join("photo.jpg"), b"p").unwrap();
        std::os::unix::fs::symlink(tmp.path().join("real"), tmp.path().join("link")).unwrap();
        std::os::unix::fs::symlink(tmp.path().join("photo.jpg"), tmp.path().join("alias.jpg"))
            .unwrap();

        let entries = list_directory(tmp.path()).unwrap();
        assert_eq!(
            entries,
            vec![
                DirectoryEntry::new("alias.jpg", false),
                DirectoryEntry::new("link", true),
                DirectoryEntry::new("photo.jpg", false),
                DirectoryEntry::new("real", true),
            ]
        );
    }

    #[test]
    fn missing_directory_is_an_error() {
        let tmp = tempdir().unwrap();
        assert!(list_directory(&tmp.path().join("gone")).is_err());
    }
}
