use crate::dispatch::{dispatch, Action, Effect};
use crate::events::DISPATCH;
use crate::fs::LocalFs;
use crate::planner::RenamePlan;
use crate::state::AppState;
use druid::{Env, Event, EventCtx, ExtEventSink, Target, Widget};
use rfd::{MessageButtons, MessageDialog, MessageLevel};
use tracing::debug;

// 確認ダイアログに並べる行数の上限
const MAX_DIALOG_ROWS: usize = 40;

pub struct AppController {
    fs: LocalFs,
}

impl AppController {
    pub fn new() -> Self {
        Self { fs: LocalFs }
    }
}

impl Default for AppController {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Widget<AppState>> druid::widget::Controller<AppState, W> for AppController {
    fn event(
        &mut self,
        child: &mut W,
        ctx: &mut EventCtx,
        event: &Event,
        data: &mut AppState,
        env: &Env,
    ) {
        if let Event::Command(cmd) = event {
            if let Some(action) = cmd.get(DISPATCH) {
                let transition = dispatch(&self.fs, data, action.clone());
                *data = transition.state;
                if let Some(effect) = transition.effect {
                    show_effect(ctx.get_external_handle(), effect);
                }
                ctx.request_update();
                ctx.set_handled();
                return;
            }
        }
        child.event(ctx, event, data, env);
    }
}

/// モーダルダイアログは別スレッドで表示し、結果はコマンドで返す
fn show_effect(sink: ExtEventSink, effect: Effect) {
    std::thread::spawn(move || match effect {
        Effect::Inform { title, message } => {
            MessageDialog::new()
                .set_title(&title)
                .set_description(&message)
                .set_buttons(MessageButtons::Ok)
                .set_level(MessageLevel::Info)
                .show();
        }
        Effect::ShowConflicts(names) => {
            let description = format!(
                "The following filenames conflict.\n\n{}",
                rows(names.iter().map(String::as_str))
            );
            MessageDialog::new()
                .set_title("Cannot rename")
                .set_description(&description)
                .set_buttons(MessageButtons::Ok)
                .set_level(MessageLevel::Warning)
                .show();
        }
        Effect::ConfirmRenames { dir, plan } => {
            let confirmed = MessageDialog::new()
                .set_title("Renames")
                .set_description(&confirmation_text(&plan))
                .set_buttons(MessageButtons::OkCancel)
                .set_level(MessageLevel::Info)
                .show();
            let answer = if confirmed {
                Action::Apply { dir, plan }
            } else {
                debug!("renames cancelled");
                Action::CancelRenames
            };
            let _ = sink.submit_command(DISPATCH, answer, Target::Global);
        }
    });
}

fn confirmation_text(plan: &RenamePlan) -> String {
    let pairs = plan
        .iter()
        .map(|(from, to)| format!("{}  ->  {}", from, to))
        .collect::<Vec<_>>();
    format!(
        "The following renames will be performed.\n\n{}",
        rows(pairs.iter().map(String::as_str))
    )
}

fn rows<'a>(lines: impl ExactSizeIterator<Item = &'a str>) -> String {
    let total = lines.len();
    let mut text = lines.take(MAX_DIALOG_ROWS).collect::<Vec<_>>().join("\n");
    if total > MAX_DIALOG_ROWS {
        text.push_str(&format!("\n... and {} more", total - MAX_DIALOG_ROWS));
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planner::{compute_plan, DirectoryEntry};
    use std::collections::HashSet;

    #[test]
    fn confirmation_lists_each_rename() {
        let entries = vec![DirectoryEntry::new("b", false), DirectoryEntry::new("a", false)];
        let plan = compute_plan(&entries, &HashSet::new()).unwrap();
        let text = confirmation_text(&plan);
        assert!(text.contains("b  ->  0-b"));
        assert!(text.contains("a  ->  1-a"));
    }

    #[test]
    fn long_lists_are_truncated() {
        let names: Vec<String> = (0..45).map(|i| format!("f{}", i)).collect();
        let text = rows(names.iter().map(String::as_str));
        assert_eq!(text.lines().count(), MAX_DIALOG_ROWS + 1);
        assert!(text.ends_with("... and 5 more"));
    }
}
