use crate::controller::AppController;
use crate::dispatch::Action;
use crate::events::DISPATCH;
use crate::state::{AppState, EntryItem};
use druid::widget::{Button, Checkbox, CrossAxisAlignment, Either, Flex, Label, List, Scroll, SizedBox};
use druid::piet::Color;
use druid::{Env, EventCtx, Widget, WidgetExt};

fn submit(ctx: &mut EventCtx, action: Action) {
    ctx.submit_command(DISPATCH.with(action));
}

fn entry_row() -> impl Widget<EntryItem> {
    let open = Either::new(
        |item: &EntryItem, _env| item.is_dir,
        Button::new("Open").on_click(|ctx, item: &mut EntryItem, _env| {
            submit(ctx, Action::Open(item.name.clone()))
        }),
        SizedBox::empty(),
    );

    Flex::row()
        .with_child(Checkbox::new("").lens(EntryItem::selected))
        .with_spacer(5.0)
        .with_flex_child(
            Label::new(|item: &EntryItem, _env: &Env| {
                if item.is_dir {
                    format!("{}/", item.name)
                } else {
                    item.name.clone()
                }
            })
            .expand_width(),
            1.0,
        )
        .with_child(Button::new("▲").on_click(|ctx, item: &mut EntryItem, _env| {
            submit(ctx, Action::MoveEarlier(item.name.clone()))
        }))
        .with_child(Button::new("▼").on_click(|ctx, item: &mut EntryItem, _env| {
            submit(ctx, Action::MoveLater(item.name.clone()))
        }))
        .with_spacer(5.0)
        .with_child(open.fix_width(60.0))
        .cross_axis_alignment(CrossAxisAlignment::Center)
        .padding((0.0, 2.0))
}

pub fn build_ui() -> impl Widget<AppState> {
    let toolbar = Flex::row()
        .with_child(
            Button::new("Up")
                .on_click(|ctx, _data: &mut AppState, _env| submit(ctx, Action::Up))
                .disabled_if(|data: &AppState, _env| !data.can_go_up()),
        )
        .with_spacer(5.0)
        .with_child(
            Button::new("Home")
                .on_click(|ctx, _data: &mut AppState, _env| submit(ctx, Action::Home))
                .disabled_if(|data: &AppState, _env| !data.can_go_home()),
        )
        .with_spacer(5.0)
        .with_child(
            Button::new("Save")
                .on_click(|ctx, _data: &mut AppState, _env| submit(ctx, Action::Save))
                .disabled_if(|data: &AppState, _env| !data.can_save()),
        )
        .with_spacer(5.0)
        .with_child(
            Button::new("Discard")
                .on_click(|ctx, _data: &mut AppState, _env| submit(ctx, Action::Discard))
                .disabled_if(|data: &AppState, _env| !data.can_discard()),
        )
        .with_spacer(20.0)
        .with_child(
            Checkbox::new("Only selected")
                .lens(AppState::only_selected)
                .disabled_if(|data: &AppState, _env| !data.can_edit()),
        )
        .with_spacer(10.0)
        .with_child(
            Checkbox::new("Exclude directories")
                .lens(AppState::exclude_directories)
                .disabled_if(|data: &AppState, _env| !data.can_edit()),
        );

    let entries = Scroll::new(List::new(entry_row).lens(AppState::entries))
        .vertical()
        .disabled_if(|data: &AppState, _env| !data.can_edit());

    let footer = Flex::row()
        .with_child(
            Label::new(|data: &String, _env: &Env| data.clone())
                .lens(AppState::status_message),
        )
        .with_flex_spacer(1.0)
        .with_child(
            Label::new(|data: &AppState, _env: &Env| {
                if data.is_modified() {
                    "modified".to_string()
                } else {
                    String::new()
                }
            })
            .with_text_color(Color::grey(0.6)),
        );

    Flex::column()
        .with_child(toolbar)
        .with_spacer(8.0)
        .with_child(
            Label::new(|data: &AppState, _env: &Env| data.current_dir.clone())
                .with_text_color(Color::grey(0.6))
                .with_text_size(12.0),
        )
        .with_spacer(5.0)
        .with_flex_child(entries, 1.0)
        .with_spacer(5.0)
        .with_child(footer)
        .cross_axis_alignment(CrossAxisAlignment::Start)
        .padding(10.0)
        .expand()
        .controller(AppController::new())
}
