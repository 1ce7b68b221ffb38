use crate::planner::DirectoryEntry;
use druid::im::Vector;
use druid::{Data, Lens};
use std::collections::HashSet;
use std::path::Path;

pub const APP_NAME: &str = "AutoRenamer";

/// アイコン一覧の一要素
#[derive(Clone, Debug, PartialEq, Data, Lens)]
pub struct EntryItem {
    pub name: String,
    pub is_dir: bool,
    pub selected: bool,
}

impl From<DirectoryEntry> for EntryItem {
    fn from(entry: DirectoryEntry) -> Self {
        Self {
            name: entry.name,
            is_dir: entry.is_dir,
            selected: false,
        }
    }
}

/// アプリ全体の状態
///
/// ボタンの有効/無効はここから導出する（`can_*`）。
#[derive(Clone, Debug, Data, Lens)]
pub struct AppState {
    pub current_dir: String,
    pub home_dir: String,
    pub entries: Vector<EntryItem>, // 現在の並び
    pub original_order: Vector<String>, // 一覧取得時の並び
    pub only_selected: bool,
    pub exclude_directories: bool,
    pub pending_confirmation: bool, // 確認ダイアログの回答待ち
    pub status_message: String,
}

impl AppState {
    pub fn new(home_dir: impl Into<String>) -> Self {
        Self {
            current_dir: String::new(),
            home_dir: home_dir.into(),
            entries: Vector::new(),
            original_order: Vector::new(),
            only_selected: false,
            exclude_directories: false,
            pending_confirmation: false,
            status_message: "Ready".to_string(),
        }
    }

    /// 新しい一覧で並びと元の順序を置き換える。選択は解除される。
    pub fn replace_listing(&mut self, dir: impl Into<String>, listing: Vec<DirectoryEntry>) {
        self.current_dir = dir.into();
        self.original_order = listing.iter().map(|e| e.name.clone()).collect();
        self.entries = listing.into_iter().map(EntryItem::from).collect();
    }

    pub fn is_modified(&self) -> bool {
        self.entries.len() != self.original_order.len()
            || self
                .entries
                .iter()
                .zip(self.original_order.iter())
                .any(|(entry, original)| &entry.name != original)
    }

    /// 確認待ちの間は並びも設定も変更できない
    pub fn can_edit(&self) -> bool {
        !self.pending_confirmation
    }

    pub fn can_go_up(&self) -> bool {
        self.can_edit() && !self.is_modified() && Path::new(&self.current_dir).parent().is_some()
    }

    pub fn can_go_home(&self) -> bool {
        self.can_edit() && !self.is_modified() && self.current_dir != self.home_dir
    }

    pub fn can_save(&self) -> bool {
        self.can_edit() && self.is_modified()
    }

    pub fn can_discard(&self) -> bool {
        self.can_edit() && self.is_modified()
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.name == name)
    }

    /// 保存時に連番を付ける要素（表示順、トグルに従って絞り込み）
    pub fn entries_to_rename(&self) -> Vec<DirectoryEntry> {
        self.entries
            .iter()
            .filter(|e| !self.only_selected || e.selected)
            .filter(|e| !self.exclude_directories || !e.is_dir)
            .map(|e| DirectoryEntry::new(e.name.clone(), e.is_dir))
            .collect()
    }

    pub fn all_names(&self) -> HashSet<String> {
        self.entries.iter().map(|e| e.name.clone()).collect()
    }

    pub fn title(&self) -> String {
        if self.current_dir.is_empty() {
            APP_NAME.to_string()
        } else {
            format!("{}: {}", APP_NAME, self.current_dir)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listed(dir: &str, names: &[&str]) -> AppState {
        let mut state = AppState::new("/home/user");
        state.replace_listing(
            dir,
            names
                .iter()
                .map(|n| DirectoryEntry::new(*n, n.ends_with('/')))
                .collect(),
        );
        state
    }

    fn reorder(state: &mut AppState, names: &[&str]) {
        state.entries = names
            .iter()
            .map(|n| EntryItem {
                name: n.to_string(),
                is_dir: false,
                selected: false,
            })
            .collect();
    }

    #[test]
    fn same_order_is_not_modified() {
        let state = listed("/photos", &["a", "b", "c"]);
        assert!(!state.is_modified());
        assert!(!state.can_save());
        assert!(!state.can_discard());
        assert!(state.can_go_up());
        assert!(state.can_go_home());
    }

    #[test]
    fn permutation_is_modified() {
        let mut state = listed("/photos", &["a", "b", "c"]);
        reorder(&mut state, &["b", "a", "c"]);
        assert!(state.is_modified());
        assert!(state.can_save());
        assert!(state.can_discard());
        assert!(!state.can_go_up());
        assert!(!state.can_go_home());
    }

    #[test]
    fn deletion_and_insertion_are_modified() {
        let mut state = listed("/photos", &["a", "b", "c"]);
        reorder(&mut state, &["a", "b"]);
        assert!(state.is_modified());
        reorder(&mut state, &["a", "b", "c", "d"]);
        assert!(state.is_modified());
    }

    #[test]
    fn pending_confirmation_disables_everything() {
        let mut state = listed("/photos", &["a", "b", "c"]);
        reorder(&mut state, &["b", "a", "c"]);
        state.pending_confirmation = true;
        assert!(!state.can_edit());
        assert!(!state.can_save());
        assert!(!state.can_discard());
        assert!(!state.can_go_up());
        assert!(!state.can_go_home());
        assert!(state.is_modified());
    }

    #[test]
    fn root_and_home_disable_navigation() {
        let state = listed("/", &["a"]);
        assert!(!state.can_go_up());
        let state = listed("/home/user", &["a"]);
        assert!(!state.can_go_home());
    }

    #[test]
    fn rename_filters_follow_toggles() {
        let mut state = listed("/photos", &["a", "b", "d/"]);
        state.entries[0].selected = true;
        state.entries[2].selected = true;
        let names = |s: &AppState| -> Vec<String> {
            s.entries_to_rename().into_iter().map(|e| e.name).collect()
        };
        assert_eq!(names(&state), vec!["a", "b", "d/"]);
        state.only_selected = true;
        assert_eq!(names(&state), vec!["a", "d/"]);
        state.exclude_directories = true;
        assert_eq!(names(&state), vec!["a"]);
    }

    #[test]
    fn title_names_the_directory() {
        assert_eq!(AppState::new("/home/user").title(), "AutoRenamer");
        assert_eq!(listed("/photos", &[]).title(), "AutoRenamer: /photos");
    }
}
