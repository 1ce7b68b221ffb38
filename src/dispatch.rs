//! 画面操作を状態遷移に変換するディスパッチャ
//!
//! GUI からは `Action` を受け取り、次の `AppState` と、必要ならダイアログで
//! 表示すべき `Effect` を返す。ウィジェットには一切触れない。

use crate::fs::Filesystem;
use crate::planner::{compute_plan, PlanError, RenamePlan};
use crate::rename::apply_plan;
use crate::state::AppState;
use std::path::Path;
use tracing::{debug, info, warn};

#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    Load(String),
    Open(String),
    Up,
    Home,
    Discard,
    MoveEarlier(String),
    MoveLater(String),
    MoveTo { name: String, index: usize },
    SetOnlySelected(bool),
    SetExcludeDirectories(bool),
    Save,
    Apply { dir: String, plan: RenamePlan },
    CancelRenames,
}

/// ダイアログで利用者に見せるもの
#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    Inform { title: String, message: String },
    ShowConflicts(Vec<String>),
    ConfirmRenames { dir: String, plan: RenamePlan },
}

impl Effect {
    fn inform(title: &str, message: impl Into<String>) -> Self {
        Effect::Inform {
            title: title.to_string(),
            message: message.into(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Transition {
    pub state: AppState,
    pub effect: Option<Effect>,
}

impl Transition {
    fn to(state: AppState) -> Self {
        Self {
            state,
            effect: None,
        }
    }

    fn with(state: AppState, effect: Effect) -> Self {
        Self {
            state,
            effect: Some(effect),
        }
    }
}

pub fn dispatch<F: Filesystem + ?Sized>(fs: &F, state: &AppState, action: Action) -> Transition {
    debug!(?action, "dispatch");
    // 確認待ちの間は回答（Apply / CancelRenames）だけを受け付ける
    let answers_confirmation = matches!(action, Action::Apply { .. } | Action::CancelRenames);
    if state.pending_confirmation != answers_confirmation {
        debug!(pending = state.pending_confirmation, "action ignored");
        return Transition::to(state.clone());
    }
    match action {
        Action::Load(dir) => load(fs, state, dir),
        Action::Open(name) => {
            let is_dir = state.entries.iter().any(|e| e.name == name && e.is_dir);
            if !is_dir {
                return Transition::to(state.clone());
            }
            if state.is_modified() {
                return save_or_discard_first(state);
            }
            let dir = Path::new(&state.current_dir).join(&name);
            load(fs, state, dir.to_string_lossy().to_string())
        }
        Action::Up => {
            if state.is_modified() {
                return save_or_discard_first(state);
            }
            match Path::new(&state.current_dir).parent() {
                Some(parent) => load(fs, state, parent.to_string_lossy().to_string()),
                None => Transition::to(state.clone()),
            }
        }
        Action::Home => {
            if state.is_modified() {
                return save_or_discard_first(state);
            }
            load(fs, state, state.home_dir.clone())
        }
        Action::Discard => load(fs, state, state.current_dir.clone()),
        Action::MoveEarlier(name) => match state.position(&name) {
            Some(pos) if pos > 0 => Transition::to(moved(state, pos, pos - 1)),
            _ => Transition::to(state.clone()),
        },
        Action::MoveLater(name) => match state.position(&name) {
            Some(pos) if pos + 1 < state.entries.len() => {
                Transition::to(moved(state, pos, pos + 1))
            }
            _ => Transition::to(state.clone()),
        },
        Action::MoveTo { name, index } => match state.position(&name) {
            Some(pos) => {
                let index = index.min(state.entries.len() - 1);
                Transition::to(moved(state, pos, index))
            }
            None => Transition::to(state.clone()),
        },
        Action::SetOnlySelected(on) => {
            let mut next = state.clone();
            next.only_selected = on;
            Transition::to(next)
        }
        Action::SetExcludeDirectories(on) => {
            let mut next = state.clone();
            next.exclude_directories = on;
            Transition::to(next)
        }
        Action::Save => save(state),
        Action::Apply { dir, plan } => apply(fs, state, dir, plan),
        Action::CancelRenames => {
            let mut next = state.clone();
            next.pending_confirmation = false;
            next.status_message = "Renames cancelled".to_string();
            Transition::to(next)
        }
    }
}

fn load<F: Filesystem + ?Sized>(fs: &F, state: &AppState, dir: String) -> Transition {
    match fs.list(Path::new(&dir)) {
        Ok(listing) => {
            let mut next = state.clone();
            next.replace_listing(dir, listing);
            next.status_message = format!("Loaded {} entries", next.entries.len());
            Transition::to(next)
        }
        Err(err) => {
            warn!(dir = %dir, err = %format!("{:#}", err), "listing_failed");
            let mut next = state.clone();
            next.status_message = format!("Cannot open {}", dir);
            Transition::with(next, Effect::inform("Cannot open directory", format!("{:#}", err)))
        }
    }
}

fn save_or_discard_first(state: &AppState) -> Transition {
    Transition::with(
        state.clone(),
        Effect::inform("Save or discard", "Save or discard first!"),
    )
}

fn moved(state: &AppState, from: usize, to: usize) -> AppState {
    let mut next = state.clone();
    let item = next.entries.remove(from);
    next.entries.insert(to, item);
    next
}

fn save(state: &AppState) -> Transition {
    if !state.is_modified() {
        debug!("save ignored, order unchanged");
        return Transition::to(state.clone());
    }

    let entries = state.entries_to_rename();
    match compute_plan(&entries, &state.all_names()) {
        Ok(plan) => {
            let mut next = state.clone();
            next.pending_confirmation = true;
            Transition::with(
                next,
                Effect::ConfirmRenames {
                    dir: state.current_dir.clone(),
                    plan,
                },
            )
        }
        Err(PlanError::Empty) => Transition::with(
            state.clone(),
            Effect::inform(
                "Nothing to rename",
                "Check the enabled options and selected elements.",
            ),
        ),
        Err(PlanError::Conflict(names)) => {
            let mut next = state.clone();
            next.status_message = format!("{} filenames conflict", names.len());
            Transition::with(next, Effect::ShowConflicts(names))
        }
    }
}

fn apply<F: Filesystem + ?Sized>(
    fs: &F,
    state: &AppState,
    dir: String,
    plan: RenamePlan,
) -> Transition {
    let result = apply_plan(fs, Path::new(&dir), &plan);
    // 成否にかかわらず、ディスクの実際の状態を読み直す
    let mut reloaded = load(fs, state, dir);
    reloaded.state.pending_confirmation = false;
    match result {
        Ok(applied) => {
            info!(applied, "plan_applied");
            reloaded.state.status_message = format!("Renamed {} entries", applied);
            reloaded
        }
        Err(err) => {
            reloaded.state.status_message =
                format!("Renamed {} of {} entries", err.applied, plan.len());
            Transition::with(reloaded.state, Effect::inform("Rename failed", err.to_string()))
        }
    }
}
