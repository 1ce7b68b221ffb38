use crate::dispatch::Action;
use druid::Selector;

// ウィジェットやダイアログのスレッドから AppController へ操作を届ける
pub const DISPATCH: Selector<Action> = Selector::new("autorenamer.dispatch");
